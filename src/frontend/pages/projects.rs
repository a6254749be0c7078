use crate::{
    content::{Project, ProjectCategory, ShowcaseProject, PROJECTS, SHOWCASE},
    frontend::controls::{
        filter_buttons, use_pager, FilterOption, PageControls, PagerAction, SearchBox,
    },
    pagination::CategoryFilter,
    viewport::ViewportStatus,
};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

fn tech_chips(technologies: &'static [&'static str]) -> Html {
    html! {
        <ul class="chip-list">
            { for technologies.iter().map(|tech| html! { <li class="chip">{ *tech }</li> }) }
        </ul>
    }
}

fn project_links(live_url: &'static str, github_url: &'static str, title: &'static str) -> Html {
    html! {
        <div class="project-links">
            <a href={live_url} target="_blank" rel="noopener noreferrer" aria-label={format!("{title} live demo")}>
                { "Live" }<span class="external-mark" aria-hidden="true">{ "↗" }</span>
            </a>
            <a href={github_url} target="_blank" rel="noopener noreferrer" aria-label={format!("{title} source code")}>
                { "Code" }<span class="external-mark" aria-hidden="true">{ "↗" }</span>
            </a>
        </div>
    }
}

#[function_component(Showcase)]
fn showcase() -> Html {
    let pager = use_pager(&SHOWCASE, 1);
    let Some(project): Option<&ShowcaseProject> = pager.page().first().copied() else {
        return Html::default();
    };

    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::Prev))
    };
    let on_next = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::Next))
    };

    let current = pager.paginator.current_page();
    let dots = (0..pager.paginator.total_pages()).map(|index| {
        let pager = pager.clone();
        let active = index == current;
        html! {
            <button
                type="button"
                class={classes!("dot", active.then_some("is-active"))}
                aria-label={format!("Show project {}", index + 1)}
                aria-current={active.then_some("true")}
                onclick={Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::Go(index)))}
            />
        }
    });

    html! {
        <section class={classes!("showcase", project.featured.then_some("is-featured"))} aria-label="Featured work">
            <div class="showcase-copy">
                <p class="showcase-number">{ project.id }</p>
                <h2>{ project.title }</h2>
                <p class="eyebrow">{ format!("{} · {}", project.category, project.year) }</p>
                <p class="muted">{ project.description }</p>
                { tech_chips(project.technologies) }
                { project_links(project.live_url, project.github_url, project.title) }
            </div>
            <figure class="showcase-media">
                <img src={project.image} alt={project.title} />
                <figcaption class="showcase-nav">
                    <button type="button" class="page-arrow" aria-label="Previous project" onclick={on_prev}>{ "‹" }</button>
                    <span class="muted">
                        { format!("{} / {}", current + 1, pager.paginator.total_pages()) }
                    </span>
                    <button type="button" class="page-arrow" aria-label="Next project" onclick={on_next}>{ "›" }</button>
                    <div class="carousel-dots showcase-dots">{ for dots }</div>
                </figcaption>
            </figure>
        </section>
    }
}

fn project_card(project: &Project, mode: ViewMode) -> Html {
    html! {
        <article class={classes!(
            "project-card",
            (mode == ViewMode::List).then_some("is-row"),
            project.featured.then_some("is-featured"),
        )}>
            <span class="project-number" aria-hidden="true">{ project.number() }</span>
            <img src={project.image} alt="" loading="lazy" />
            <div class="project-body">
                <p class="eyebrow">{ format!("{} · {}", project.category.label(), project.year) }</p>
                <h3>{ project.title }</h3>
                <p class="muted">{ project.description }</p>
                { tech_chips(project.technologies) }
                { project_links(project.live_url, project.github_url, project.title) }
            </div>
        </article>
    }
}

#[function_component(ProjectGrid)]
fn project_grid() -> Html {
    let status = use_context::<ViewportStatus>().unwrap_or_default();
    let pager = use_pager(&PROJECTS, status.page_size);
    let mode = use_state(|| ViewMode::Grid);

    let options: Vec<FilterOption<ProjectCategory>> =
        std::iter::once((CategoryFilter::All, "All"))
            .chain(
                ProjectCategory::ALL
                    .into_iter()
                    .map(|category| (CategoryFilter::Only(category), category.label())),
            )
            .map(|(filter, label)| FilterOption {
                filter,
                label,
                count: pager.count_for(filter),
            })
            .collect();

    let on_filter = {
        let pager = pager.clone();
        Callback::from(move |filter| pager.dispatch(PagerAction::Filter(filter)))
    };
    let on_search = {
        let pager = pager.clone();
        Callback::from(move |term| pager.dispatch(PagerAction::Search(term)))
    };
    let on_clear = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::Clear))
    };
    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |()| pager.dispatch(PagerAction::Prev))
    };
    let on_next = {
        let pager = pager.clone();
        Callback::from(move |()| pager.dispatch(PagerAction::Next))
    };
    let on_go = {
        let pager = pager.clone();
        Callback::from(move |page| pager.dispatch(PagerAction::Go(page)))
    };

    let mode_button = |target: ViewMode, label: &'static str| {
        let mode = mode.clone();
        let selected = *mode == target;
        html! {
            <button
                type="button"
                class={classes!("view-toggle", selected.then_some("is-active"))}
                aria-pressed={selected.to_string()}
                onclick={Callback::from(move |_| mode.set(target))}
            >
                { label }
            </button>
        }
    };

    let page = pager.page();
    let paginator = &pager.paginator;

    html! {
        <section class="project-grid-section" aria-labelledby="projects-heading">
            <header class="listing-header">
                <h2 id="projects-heading">{ "All projects" }</h2>
                <div class="view-toggles">
                    { mode_button(ViewMode::Grid, "Grid") }
                    { mode_button(ViewMode::List, "List") }
                </div>
            </header>
            <div class="listing-tools">
                { filter_buttons(options, paginator.active_filter(), on_filter) }
                <SearchBox
                    value={AttrValue::from(paginator.search_term().to_string())}
                    placeholder="Search projects"
                    on_search={on_search}
                />
                if pager.is_narrowed() {
                    <button type="button" class="clear-button" onclick={on_clear.clone()}>{ "Clear" }</button>
                }
            </div>
            <p class="muted listing-summary" aria-live="polite">
                { format!("Showing {} of {} projects", paginator.filtered_count(), pager.total()) }
            </p>
            if page.is_empty() {
                <div class="empty-state">
                    <p>{ "No projects match your search." }</p>
                    <button type="button" class="button button-ghost" onclick={on_clear}>{ "Show all projects" }</button>
                </div>
            } else {
                <div class={classes!("project-list", (*mode == ViewMode::List).then_some("is-list"))}>
                    { for page.into_iter().map(|project| project_card(project, *mode)) }
                </div>
            }
            <PageControls
                current={paginator.current_page()}
                total={paginator.total_pages()}
                on_prev={on_prev}
                on_next={on_next}
                on_go={on_go}
            />
        </section>
    }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    html! {
        <div class="page projects">
            <h1 class="sr-only">{ "Projects" }</h1>
            <Showcase />
            <ProjectGrid />
        </div>
    }
}
