use super::router::{use_location, Link};
use crate::{
    content::{OWNER_NAME, PROFILE_IMAGE},
    routes::{is_active, mobile_controls, Route},
    viewport::ViewportStatus,
};
use yew::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let location = use_location();
    let status = use_context::<ViewportStatus>().unwrap_or_default();
    let menu_open = use_state(|| false);

    // Close the drawer whenever the page changes.
    {
        let menu_open = menu_open.clone();
        use_effect_with(location.path.clone(), move |_| {
            menu_open.set(false);
            || ()
        });
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let links = Route::ALL.into_iter().map(|route| {
        let active = is_active(route.path(), &location.path);
        html! {
            <li>
                <Link to={route} class={classes!("nav-link", active.then_some("is-active"))}>
                    { route.label() }
                </Link>
            </li>
        }
    });

    html! {
        <header class={classes!("site-nav", status.nav_scrolled.then_some("is-scrolled"))}>
            <Link to={Route::Introduction} class={classes!("brand")} aria_label={AttrValue::from("Home")}>
                <img src={PROFILE_IMAGE} alt="" class="brand-avatar" />
                <span>{ OWNER_NAME }</span>
            </Link>
            <button
                class="menu-toggle"
                type="button"
                aria-expanded={menu_open.to_string()}
                aria-controls="primary-navigation"
                onclick={on_toggle}
            >
                <span class="sr-only">{ "Toggle navigation" }</span>
                <span aria-hidden="true">{ if *menu_open { "✕" } else { "☰" } }</span>
            </button>
            <nav id="primary-navigation" class={classes!("nav-links", menu_open.then_some("is-open"))}>
                <ul>{ for links }</ul>
            </nav>
        </header>
    }
}

/// Floating previous/next page buttons for narrow screens.
#[function_component(MobilePageNavigation)]
pub fn mobile_page_navigation() -> Html {
    let location = use_location();
    let status = use_context::<ViewportStatus>().unwrap_or_default();

    let Some(controls) = mobile_controls(&location.path, status.mobile_navigation) else {
        return Html::default();
    };

    let button = |route: Option<Route>, class: &'static str, glyph: &'static str| match route {
        Some(route) => html! {
            <Link to={route} class={classes!("page-step", class)} aria_label={AttrValue::from(route.label())}>
                <span aria-hidden="true">{ glyph }</span>
            </Link>
        },
        None => html! {},
    };

    html! {
        <nav class="mobile-page-nav" aria-label="Page navigation">
            { button(controls.prev, "page-step-prev", "‹") }
            { button(controls.next, "page-step-next", "›") }
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p class="muted">{ format!("© {OWNER_NAME}. Built with Rust and Yew.") }</p>
        </footer>
    }
}
