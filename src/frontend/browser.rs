//! Thin wrappers over `web_sys` that release what they register on drop.

use crate::{
    carousel::TrackGeometry,
    viewport::{ViewportPolicy, ViewportSnapshot, ViewportStatus},
};
use js_sys::{Function, Promise, Reflect};
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let target: EventTarget = window()?.into();
        Self::new(&target, event, handler)
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

pub struct IntervalGuard {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalGuard {
    pub fn new<F>(period: Duration, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(handler);
        let handle = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(period),
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}

pub struct TimeoutGuard {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl TimeoutGuard {
    pub fn new<F>(delay: Duration, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(handler);
        let handle = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(delay),
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.handle);
        }
    }
}

pub async fn sleep(duration: Duration) {
    let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
        let scheduled = window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis(duration))
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }
    });
    let _ = JsFuture::from(promise).await;
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_snapshot() -> ViewportSnapshot {
    let fallback = ViewportSnapshot::default();
    let Some(win) = window() else {
        return fallback;
    };

    ViewportSnapshot {
        width: win
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(fallback.width),
        scroll_y: win.scroll_y().unwrap_or(fallback.scroll_y),
    }
}

/// Tracks window resize and scroll, re-rendering only when the derived
/// [`ViewportStatus`] changes.
#[hook]
pub fn use_viewport_status(policy: ViewportPolicy) -> ViewportStatus {
    let status = use_state_eq(move || policy.status(viewport_snapshot()));

    {
        let status = status.clone();
        use_effect_with(policy, move |policy| {
            let policy = *policy;
            status.set(policy.status(viewport_snapshot()));

            let guards: Vec<EventListenerGuard> = ["resize", "scroll"]
                .into_iter()
                .filter_map(|event| {
                    let status = status.clone();
                    EventListenerGuard::on_window(event, move |_| {
                        status.set(policy.status(viewport_snapshot()));
                    })
                })
                .collect();

            move || drop(guards)
        });
    }

    *status
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push_history(path: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let pushed = win
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)))
        .is_ok();

    if pushed {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
    pushed
}

pub fn scroll_left(element: &Element) -> f64 {
    Reflect::get(element, &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn set_scroll_left(element: &Element, offset: f64) {
    let _ = Reflect::set(
        element,
        &JsValue::from_str("scrollLeft"),
        &JsValue::from_f64(offset),
    );
}

pub fn smooth_scroll_to(element: &Element, offset: f64) {
    let options = ScrollToOptions::new();
    options.set_left(offset);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    element.scroll_to_with_scroll_to_options(&options);
}

/// Reads item pitch from the first two children and the scrollable range
/// from the track itself.
pub fn measure_track(track: &Element) -> TrackGeometry {
    let children = track.children();
    let child = |index| {
        children
            .item(index)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    };

    let item_extent = match (child(0), child(1)) {
        (Some(first), Some(second)) => f64::from(second.offset_left() - first.offset_left()),
        (Some(first), None) => f64::from(first.offset_width()),
        _ => 0.0,
    };
    let max_scroll = f64::from(track.scroll_width() - track.client_width());

    TrackGeometry::new(item_extent, max_scroll)
}
