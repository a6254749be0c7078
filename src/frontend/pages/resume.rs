use crate::{
    content::{skill_rows, EducationEntry, Skill, ABOUT, EDUCATION},
    frontend::{carousel::use_drag_scroll, use_site_config},
};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ResumeTab {
    Education,
    Skills,
    About,
}

impl ResumeTab {
    const ALL: [ResumeTab; 3] = [Self::Education, Self::Skills, Self::About];

    fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::About => "About Me",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::Education => "tab-education",
            Self::Skills => "tab-skills",
            Self::About => "tab-about",
        }
    }
}

fn education_card(entry: &EducationEntry) -> Html {
    html! {
        <article class={classes!("education-card", entry.accent)}>
            <img class="education-logo" src={entry.image} alt="" draggable="false" />
            <p class="education-year">{ entry.year }</p>
            <h3>{ entry.title }</h3>
            <p class="muted">{ entry.institution }</p>
            <p class="education-meta">
                <span class="badge">{ entry.kind }</span>
                <span>{ entry.duration }</span>
            </p>
            <ul class="chip-list">
                { for entry.skills.iter().map(|skill| html! { <li class="chip">{ *skill }</li> }) }
            </ul>
        </article>
    }
}

#[function_component(EducationCarousel)]
fn education_carousel() -> Html {
    let config = use_site_config();
    let carousel = use_drag_scroll(
        EDUCATION.len(),
        config.carousel(),
        config.auto_advance_interval,
        1,
    );

    let dots = (0..EDUCATION.len()).map(|index| {
        let scroll_to = carousel.scroll_to.clone();
        let active = index == carousel.current_index;
        html! {
            <button
                type="button"
                class={classes!("dot", active.then_some("is-active"))}
                aria-label={format!("Show item {}", index + 1)}
                aria-current={active.then_some("true")}
                onclick={Callback::from(move |_| scroll_to.emit(index))}
            />
        }
    });

    html! {
        <div class="carousel">
            <div
                ref={carousel.track(0)}
                class={classes!("carousel-track", carousel.dragging.then_some("is-dragging"))}
                onmousedown={carousel.onmousedown.clone()}
                onmousemove={carousel.onmousemove.clone()}
                onmouseup={carousel.onmouseup.clone()}
                onmouseleave={carousel.onmouseleave.clone()}
                ontouchstart={carousel.ontouchstart.clone()}
                onscroll={carousel.onscroll.clone()}
            >
                { for EDUCATION.iter().map(education_card) }
            </div>
            <div class="carousel-dots">{ for dots }</div>
        </div>
    }
}

fn skill_tiles(skills: &'static [Skill]) -> Html {
    skills
        .iter()
        .map(|skill| {
            html! {
                <div class="skill-tile" title={skill.name}>
                    <i class={classes!(skill.devicon, "colored")} aria-hidden="true"></i>
                    <span>{ skill.name }</span>
                </div>
            }
        })
        .collect()
}

/// Two rows of skill tiles moving as one. Grabbing either row stops the
/// auto-scroll for good.
#[function_component(SkillMarquee)]
fn skill_marquee() -> Html {
    let config = use_site_config();
    let (first_row, second_row) = skill_rows();
    let marquee = use_drag_scroll(
        first_row.len(),
        config.skill_marquee(),
        config.auto_advance_interval,
        2,
    );

    let row = |index: usize, skills: &'static [Skill]| {
        html! {
            <div
                ref={marquee.track(index)}
                class={classes!("skill-row", marquee.dragging.then_some("is-dragging"))}
                onmousedown={marquee.onmousedown.clone()}
                onmousemove={marquee.onmousemove.clone()}
                onmouseup={marquee.onmouseup.clone()}
                onmouseleave={marquee.onmouseleave.clone()}
                ontouchstart={marquee.ontouchstart.clone()}
                onscroll={(index == 0).then(|| marquee.onscroll.clone())}
            >
                { skill_tiles(skills) }
            </div>
        }
    };

    html! {
        <div class={classes!("skill-marquee", marquee.auto_advancing.then_some("is-running"))}>
            { row(0, first_row) }
            { row(1, second_row) }
        </div>
    }
}

fn about_panel() -> Html {
    let rows = [
        ("Name", ABOUT.name),
        ("Phone", ABOUT.phone),
        ("Nationality", ABOUT.nationality),
        ("Language", ABOUT.language),
        ("Email", ABOUT.email),
    ];

    html! {
        <dl class="about-list">
            { for rows.into_iter().map(|(label, value)| html! {
                <div class="about-row">
                    <dt class="muted">{ label }</dt>
                    <dd>{ value }</dd>
                </div>
            }) }
        </dl>
    }
}

#[function_component(ResumePage)]
pub fn resume_page() -> Html {
    let tab = use_state(|| ResumeTab::Education);
    let tabs = ResumeTab::ALL.into_iter().map(|candidate| {
        let tab_handle = tab.clone();
        let selected = *tab == candidate;
        html! {
            <button
                type="button"
                role="tab"
                id={candidate.id()}
                class={classes!("tab", selected.then_some("is-active"))}
                aria-selected={selected.to_string()}
                onclick={Callback::from(move |_| tab_handle.set(candidate))}
            >
                { candidate.label() }
            </button>
        }
    });

    let panel = match *tab {
        ResumeTab::Education => html! { <EducationCarousel /> },
        ResumeTab::Skills => html! { <SkillMarquee /> },
        ResumeTab::About => about_panel(),
    };

    html! {
        <section class="page resume" aria-labelledby="resume-heading">
            <h1 id="resume-heading">{ "Why hire me?" }</h1>
            <p class="muted">
                { "Where I studied and what I work with." }
            </p>
            <div class="tabs" role="tablist">{ for tabs }</div>
            <div class="tab-panel" role="tabpanel" aria-labelledby={(*tab).id()}>
                { panel }
            </div>
        </section>
    }
}
