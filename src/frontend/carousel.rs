//! Binds [`CarouselState`] to one or more horizontally scrolling DOM tracks.
//! The first track is measured and listened to; the rest follow its offset.

use super::browser::{
    measure_track, prefers_reduced_motion, scroll_left, set_scroll_left, smooth_scroll_to,
    EventListenerGuard, IntervalGuard,
};
use crate::carousel::{AutoAdvance, CarouselConfig, CarouselState, TrackGeometry};
use std::{cell::RefCell, rc::Rc, time::Duration};
use web_sys::{Element, EventTarget};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TrackView {
    current_index: usize,
    dragging: bool,
    auto_advancing: bool,
}

impl TrackView {
    fn of(state: &CarouselState) -> Self {
        Self {
            current_index: state.current_index(),
            dragging: state.is_dragging(),
            auto_advancing: state.auto_advance() == AutoAdvance::Running,
        }
    }
}

/// Handles to spread onto the tracks plus the index to highlight. Only
/// `tracks[0]` takes `onscroll`; every track takes the pointer handlers.
#[derive(Clone)]
pub struct DragScroll {
    pub tracks: Rc<Vec<NodeRef>>,
    pub current_index: usize,
    pub dragging: bool,
    pub auto_advancing: bool,
    pub onmousedown: Callback<MouseEvent>,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseup: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub ontouchstart: Callback<TouchEvent>,
    pub onscroll: Callback<Event>,
    pub scroll_to: Callback<usize>,
}

impl DragScroll {
    pub fn track(&self, index: usize) -> NodeRef {
        self.tracks.get(index).cloned().unwrap_or_default()
    }
}

fn primary(tracks: &[NodeRef]) -> Option<Element> {
    tracks.first().and_then(NodeRef::cast::<Element>)
}

fn apply_offset(tracks: &[NodeRef], offset: f64) {
    for element in tracks.iter().filter_map(NodeRef::cast::<Element>) {
        set_scroll_left(&element, offset);
    }
}

#[hook]
pub fn use_drag_scroll(
    item_count: usize,
    config: CarouselConfig,
    tick: Duration,
    track_count: usize,
) -> DragScroll {
    let tracks = use_memo(track_count, |count| {
        (0..(*count).max(1))
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let state: Rc<RefCell<CarouselState>> = use_mut_ref(|| {
        CarouselState::new(item_count, TrackGeometry::uniform(item_count, 0.0), config)
    });
    let view = use_state_eq(|| TrackView::of(&state.borrow()));

    let sync = {
        let state = state.clone();
        let view = view.clone();
        Rc::new(move || view.set(TrackView::of(&state.borrow())))
    };

    // Measure on mount, on resize and once scrolling finishes.
    {
        let tracks = tracks.clone();
        let state = state.clone();
        let sync = sync.clone();
        use_effect_with(item_count, move |_| {
            let measure = {
                let tracks = tracks.clone();
                let state = state.clone();
                let sync = sync.clone();
                move || {
                    if let Some(element) = primary(&tracks) {
                        state.borrow_mut().set_geometry(measure_track(&element));
                        sync();
                    }
                }
            };
            measure();

            let resize = EventListenerGuard::on_window("resize", {
                let measure = measure.clone();
                move |_| measure()
            });
            let scrollend = primary(&tracks).and_then(|element| {
                let target: EventTarget = element.into();
                EventListenerGuard::new(&target, "scrollend", move |_| {
                    state.borrow_mut().settle();
                    sync();
                })
            });

            move || {
                drop(resize);
                drop(scrollend);
            }
        });
    }

    {
        let tracks = tracks.clone();
        let state = state.clone();
        let sync = sync.clone();
        use_effect_with((config.auto_advance, tick), move |(auto_advance, tick)| {
            let guard = (*auto_advance && !prefers_reduced_motion())
                .then(|| {
                    IntervalGuard::new(*tick, move || {
                        if let Some(offset) = state.borrow_mut().auto_advance_tick() {
                            apply_offset(&tracks, offset);
                            sync();
                        }
                    })
                })
                .flatten();
            move || drop(guard)
        });
    }

    let onmousedown = {
        let state = state.clone();
        let sync = sync.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            state.borrow_mut().on_drag_start(f64::from(event.page_x()));
            sync();
        })
    };

    let onmousemove = {
        let tracks = tracks.clone();
        let state = state.clone();
        let sync = sync.clone();
        Callback::from(move |event: MouseEvent| {
            let next = state.borrow_mut().on_drag_move(f64::from(event.page_x()));
            if let Some(offset) = next {
                event.prevent_default();
                apply_offset(&tracks, offset);
                sync();
            }
        })
    };

    let end_drag = {
        let state = state.clone();
        let sync = sync.clone();
        Callback::from(move |_event: MouseEvent| {
            let was_dragging = state.borrow().is_dragging();
            if was_dragging {
                state.borrow_mut().on_drag_end();
                sync();
            }
        })
    };

    let ontouchstart = {
        let state = state.clone();
        let sync = sync.clone();
        Callback::from(move |_event: TouchEvent| {
            state.borrow_mut().on_touch_start();
            sync();
        })
    };

    let onscroll = {
        let tracks = tracks.clone();
        let state = state.clone();
        let sync = sync.clone();
        Callback::from(move |_event: Event| {
            let Some(element) = primary(&tracks) else {
                return;
            };
            let offset = {
                let mut state = state.borrow_mut();
                state.on_scroll(scroll_left(&element));
                state.scroll_offset()
            };
            apply_offset(tracks.get(1..).unwrap_or_default(), offset);
            sync();
        })
    };

    let scroll_to = {
        let tracks = tracks.clone();
        let state = state.clone();
        Callback::from(move |index: usize| {
            if let Some(offset) = state.borrow_mut().scroll_to_index(index) {
                for element in tracks.iter().filter_map(NodeRef::cast::<Element>) {
                    smooth_scroll_to(&element, offset);
                }
            }
            sync();
        })
    };

    DragScroll {
        tracks,
        current_index: view.current_index,
        dragging: view.dragging,
        auto_advancing: view.auto_advancing,
        onmousedown,
        onmousemove,
        onmouseup: end_drag.clone(),
        onmouseleave: end_drag,
        ontouchstart,
        onscroll,
        scroll_to,
    }
}
