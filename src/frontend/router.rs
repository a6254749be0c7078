use super::browser::{current_path, push_history, EventListenerGuard};
use crate::{logging::log_event, routes::Route};
use log::Level;
use serde_json::json;
use web_sys::window;
use yew::prelude::*;

/// Current path plus the callback that moves to another one.
#[derive(Clone, PartialEq)]
pub struct Location {
    pub path: AttrValue,
    navigate: Callback<String>,
}

impl Location {
    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.path)
    }

    pub fn navigate(&self, path: &str) {
        self.navigate.emit(path.to_string());
    }
}

/// Owns the path state for the whole app. Call once, at the root, and hand
/// the result to a `ContextProvider`.
#[hook]
pub fn use_history_location() -> Location {
    let path = use_state_eq(current_path);

    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let guard = EventListenerGuard::on_window("popstate", move |_| {
                path.set(current_path());
            });
            move || drop(guard)
        });
    }

    let navigate = {
        let path = path.clone();
        Callback::from(move |next: String| {
            if *path == next {
                return;
            }

            if push_history(&next) {
                log_event(Level::Info, "route_changed", json!({ "from": *path, "to": next }));
                path.set(next);
            } else if let Some(win) = window() {
                let _ = win.location().set_href(&next);
            }
        })
    };

    Location {
        path: AttrValue::from((*path).clone()),
        navigate,
    }
}

#[hook]
pub fn use_location() -> Location {
    use_context::<Location>().unwrap_or_else(|| Location {
        path: AttrValue::from(current_path()),
        navigate: Callback::noop(),
    })
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// In-app anchor. Modified clicks fall through to the browser so links can
/// still open in a new tab.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let location = use_location();
    let href = props.to.path();

    let onclick = {
        let location = location.clone();
        Callback::from(move |event: MouseEvent| {
            if event.button() != 0
                || event.ctrl_key()
                || event.meta_key()
                || event.shift_key()
                || event.alt_key()
            {
                return;
            }
            event.prevent_default();
            location.navigate(href);
        })
    };

    html! {
        <a
            class={props.class.clone()}
            href={href}
            aria-label={props.aria_label.clone()}
            onclick={onclick}
        >
            { props.children.clone() }
        </a>
    }
}
