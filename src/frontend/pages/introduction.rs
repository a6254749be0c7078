use crate::{
    content::{SocialLink, CV_URL, INTRO_SOCIAL_LINKS, OWNER_NAME, PROFILE_IMAGE, ROLES, STATS},
    frontend::{
        browser::TimeoutGuard,
        router::Link,
    },
    routes::Route,
    typewriter::{Phase, Typewriter, TypewriterTiming},
};
use std::time::Duration;
use yew::prelude::*;

#[hook]
fn use_typewriter(words: &'static [&'static str]) -> (AttrValue, Phase) {
    let machine = use_mut_ref(|| Typewriter::new(words, TypewriterTiming::default()));
    let step = use_state(|| (0_u64, Duration::ZERO));

    {
        let machine = machine.clone();
        let handle = step.clone();
        use_effect_with(*step, move |&(generation, delay)| {
            let guard = TimeoutGuard::new(delay, move || {
                let next_delay = machine.borrow_mut().tick();
                handle.set((generation + 1, next_delay));
            });
            move || drop(guard)
        });
    }

    let machine = machine.borrow();
    (AttrValue::from(machine.text().to_string()), machine.phase())
}

fn social_button(link: &SocialLink) -> Html {
    html! {
        <a
            class="social-button"
            href={link.href}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={link.label}
        >
            <span aria-hidden="true">{ link.icon.glyph() }</span>
        </a>
    }
}

#[function_component(IntroductionPage)]
pub fn introduction_page() -> Html {
    let (role, phase) = use_typewriter(&ROLES);

    html! {
        <section class="page intro" aria-labelledby="intro-heading">
            <div class="intro-copy">
                <p class="eyebrow">{ "Hello, I'm" }</p>
                <h1 id="intro-heading">{ OWNER_NAME }</h1>
                <p class="intro-role" aria-live="polite">
                    <span>{ role }</span>
                    <span
                        class={classes!("caret", (phase == Phase::Holding).then_some("is-holding"))}
                        aria-hidden="true"
                    >{ "|" }</span>
                </p>
                <p class="muted">
                    { "I build dependable web applications end to end, from responsive interfaces to the services behind them." }
                </p>
                <div class="intro-actions">
                    <a class="button button-primary" href={CV_URL} download="">{ "Download CV" }</a>
                    <Link to={Route::Contact} class={classes!("button", "button-ghost")}>{ "Hire Me" }</Link>
                </div>
                <div class="social-row">
                    { for INTRO_SOCIAL_LINKS.iter().map(social_button) }
                </div>
            </div>
            <figure class="intro-portrait">
                <img src={PROFILE_IMAGE} alt={format!("Portrait of {OWNER_NAME}")} />
            </figure>
            <ul class="stats">
                { for STATS.iter().map(|stat| html! {
                    <li class="stat">
                        <span class="stat-number">{ stat.number }</span>
                        <span class="stat-label">{ stat.label }</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}
