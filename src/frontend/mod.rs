mod browser;
mod carousel;
mod controls;
mod layout;
mod pages;
mod router;

use crate::{
    config::SiteConfig,
    logging::{self, log_event},
    routes::Route,
    viewport::ViewportStatus,
};
use browser::use_viewport_status;
use layout::{Footer, MobilePageNavigation, NavBar};
use log::Level;
use pages::{CertificatesPage, ContactPage, IntroductionPage, ProjectsPage, ResumePage};
use router::{use_history_location, Link, Location};
use serde_json::json;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

#[hook]
pub(crate) fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

fn render_route(route: Option<Route>) -> Html {
    match route {
        Some(Route::Introduction) => html! { <IntroductionPage /> },
        Some(Route::Resume) => html! { <ResumePage /> },
        Some(Route::Projects) => html! { <ProjectsPage /> },
        Some(Route::Certificates) => html! { <CertificatesPage /> },
        Some(Route::Contact) => html! { <ContactPage /> },
        None => html! {
            <section class="page not-found">
                <h1>{ "Page not found" }</h1>
                <Link to={Route::Introduction} class={classes!("button", "button-primary")}>
                    { "Back to the introduction" }
                </Link>
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let location = use_history_location();
    let status = use_viewport_status(props.config.viewport);

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <ContextProvider<Location> context={location.clone()}>
                <ContextProvider<ViewportStatus> context={status}>
                    <a class="skip-link" href="#content">{ "Skip to main content" }</a>
                    <NavBar />
                    <main id="content">
                        { render_route(location.route()) }
                    </main>
                    <MobilePageNavigation />
                    <Footer />
                </ContextProvider<ViewportStatus>>
            </ContextProvider<Location>>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

pub fn run() {
    let config = Rc::new(SiteConfig::from_build_env());
    logging::init(config.log_level);

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log_event(Level::Error, "mount_point_missing", json!({ "id": "app" }));
        return;
    };

    log_event(
        Level::Info,
        "app_started",
        json!({
            "drag_sensitivity": config.drag_sensitivity,
            "contact_endpoint": config.contact_endpoint.as_ref().map(|url| url.as_str()),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
