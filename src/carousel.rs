//! Drag-to-scroll state for the education cards and the skill rows. Moves
//! return the offset to apply; native scrolls come back via `on_scroll`.

pub const DEFAULT_DRAG_SENSITIVITY: f64 = 1.5;
pub const DEFAULT_AUTO_ADVANCE_STEP_PX: f64 = 0.5;
const SETTLE_TOLERANCE_PX: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    // item width plus gap
    pub item_extent: f64,
    pub max_scroll: f64,
}

impl TrackGeometry {
    pub fn new(item_extent: f64, max_scroll: f64) -> Self {
        Self {
            item_extent: non_negative(item_extent),
            max_scroll: non_negative(max_scroll),
        }
    }

    pub fn uniform(item_count: usize, item_extent: f64) -> Self {
        let item_extent = non_negative(item_extent);
        Self::new(item_extent, item_extent * item_count.saturating_sub(1) as f64)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub sensitivity: f64,
    pub auto_advance: bool,
    pub auto_advance_step: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_DRAG_SENSITIVITY,
            auto_advance: false,
            auto_advance_step: DEFAULT_AUTO_ADVANCE_STEP_PX,
        }
    }
}

impl CarouselConfig {
    pub fn with_sensitivity(self, sensitivity: f64) -> Self {
        Self {
            sensitivity,
            ..self
        }
    }

    pub fn auto_advancing(self) -> Self {
        Self {
            auto_advance: true,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoAdvance {
    Disabled,
    Running,
    Latched,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    start_x: f64,
    base_scroll: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Settled {
    index: usize,
    offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    item_count: usize,
    current_index: usize,
    scroll_offset: f64,
    drag: Option<DragAnchor>,
    pending_target: Option<usize>,
    settled: Option<Settled>,
    geometry: TrackGeometry,
    config: CarouselConfig,
    auto_advance: AutoAdvance,
}

impl CarouselState {
    pub fn new(item_count: usize, geometry: TrackGeometry, config: CarouselConfig) -> Self {
        let auto_advance = if config.auto_advance && item_count > 0 {
            AutoAdvance::Running
        } else {
            AutoAdvance::Disabled
        };

        Self {
            item_count,
            current_index: 0,
            scroll_offset: 0.0,
            drag: None,
            pending_target: None,
            settled: None,
            geometry,
            config,
            auto_advance,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.auto_advance
    }

    pub fn set_geometry(&mut self, geometry: TrackGeometry) {
        self.geometry = geometry;
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
        self.current_index = self.resolve_index(self.scroll_offset);
    }

    pub fn on_drag_start(&mut self, pointer_x: f64) {
        if self.item_count == 0 || self.drag.is_some() {
            return;
        }

        self.interrupt_auto_advance();
        self.pending_target = None;
        self.drag = Some(DragAnchor {
            start_x: pointer_x,
            base_scroll: self.scroll_offset,
        });
    }

    pub fn on_drag_move(&mut self, pointer_x: f64) -> Option<f64> {
        let anchor = self.drag?;
        let delta = (pointer_x - anchor.start_x) * self.config.sensitivity;
        let offset = self.clamp_offset(anchor.base_scroll - delta);

        self.scroll_offset = offset;
        self.settled = None;
        self.current_index = self.index_for(offset);
        Some(offset)
    }

    pub fn on_drag_end(&mut self) {
        self.drag = None;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        if self.item_count == 0 {
            return;
        }

        let offset = self.clamp_offset(offset);
        self.scroll_offset = offset;

        if let Some(target) = self.pending_target {
            let target_offset = self.target_offset(target);
            if (offset - target_offset).abs() <= SETTLE_TOLERANCE_PX {
                self.pending_target = None;
                self.settled = Some(Settled {
                    index: target,
                    offset: target_offset,
                });
            }
        }

        if let Some(settled) = self.settled {
            if (offset - settled.offset).abs() > SETTLE_TOLERANCE_PX {
                self.settled = None;
            }
        }

        self.current_index = self.resolve_index(offset);
    }

    pub fn scroll_to_index(&mut self, index: usize) -> Option<f64> {
        if index >= self.item_count {
            return None;
        }

        self.interrupt_auto_advance();
        let target = self.target_offset(index);
        self.pending_target = Some(index);

        if (target - self.scroll_offset).abs() <= SETTLE_TOLERANCE_PX {
            self.settle();
        }

        Some(target)
    }

    /// Ends a pending `scroll_to_index`. The target only becomes current if
    /// the track actually stopped on it.
    pub fn settle(&mut self) {
        let Some(target) = self.pending_target.take() else {
            return;
        };

        if (self.scroll_offset - self.target_offset(target)).abs() <= SETTLE_TOLERANCE_PX {
            self.settled = Some(Settled {
                index: target,
                offset: self.scroll_offset,
            });
            self.current_index = target;
        } else {
            self.settled = None;
            self.current_index = self.index_for(self.scroll_offset);
        }
    }

    /// A touch takes over from any programmatic scroll.
    pub fn on_touch_start(&mut self) {
        self.interrupt_auto_advance();
        self.pending_target = None;
    }

    pub fn auto_advance_tick(&mut self) -> Option<f64> {
        if self.auto_advance != AutoAdvance::Running || self.drag.is_some() {
            return None;
        }

        if self.geometry.max_scroll <= 0.0 {
            return None;
        }

        let mut next = self.scroll_offset + self.config.auto_advance_step;
        if next >= self.geometry.max_scroll {
            next = 0.0;
        }

        self.scroll_offset = next;
        self.settled = None;
        self.current_index = self.index_for(next);
        Some(next)
    }

    // true the first time only
    pub fn interrupt_auto_advance(&mut self) -> bool {
        if self.auto_advance == AutoAdvance::Running {
            self.auto_advance = AutoAdvance::Latched;
            true
        } else {
            false
        }
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.geometry.max_scroll)
    }

    fn target_offset(&self, index: usize) -> f64 {
        self.clamp_offset(index as f64 * self.geometry.item_extent)
    }

    fn resolve_index(&self, offset: f64) -> usize {
        match self.settled {
            Some(settled) if (offset - settled.offset).abs() <= SETTLE_TOLERANCE_PX => {
                settled.index
            }
            _ => self.index_for(offset),
        }
    }

    fn index_for(&self, offset: f64) -> usize {
        if self.item_count == 0 || self.geometry.item_extent <= 0.0 {
            return 0;
        }

        let raw = (offset / self.geometry.item_extent).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.item_count - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn four_cards() -> CarouselState {
        CarouselState::new(4, TrackGeometry::uniform(4, 300.0), CarouselConfig::default())
    }

    fn skill_row() -> CarouselState {
        CarouselState::new(
            10,
            TrackGeometry::new(124.0, 600.0),
            CarouselConfig::default().auto_advancing(),
        )
    }

    #[test]
    fn scroll_to_index_targets_item_offset_and_settles_on_scroll() {
        let mut carousel = four_cards();

        assert_eq!(carousel.scroll_to_index(2), Some(600.0));
        assert_eq!(carousel.current_index(), 0);

        carousel.on_scroll(600.0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn intermediate_scroll_positions_track_nearest_item() {
        let mut carousel = four_cards();
        carousel.scroll_to_index(3);

        carousel.on_scroll(140.0);
        assert_eq!(carousel.current_index(), 0);
        carousel.on_scroll(160.0);
        assert_eq!(carousel.current_index(), 1);
        carousel.on_scroll(900.0);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn drag_clamps_at_track_start() {
        let mut carousel = four_cards();

        carousel.on_drag_start(100.0);
        assert!(carousel.is_dragging());
        assert_eq!(carousel.on_drag_move(150.0), Some(0.0));
        assert_eq!(carousel.scroll_offset(), 0.0);
    }

    #[test]
    fn drag_left_scrolls_forward_with_sensitivity() {
        let mut carousel = four_cards();

        carousel.on_drag_start(400.0);
        assert_eq!(carousel.on_drag_move(200.0), Some(300.0));
        assert_eq!(carousel.current_index(), 1);

        carousel.on_drag_end();
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.on_drag_move(0.0), None);
    }

    #[test]
    fn drag_clamps_at_track_end() {
        let mut carousel = four_cards();

        carousel.on_drag_start(1_000.0);
        assert_eq!(carousel.on_drag_move(0.0), Some(900.0));
    }

    #[test]
    fn second_drag_start_keeps_original_anchor() {
        let mut carousel = four_cards();

        carousel.on_drag_start(500.0);
        carousel.on_drag_start(100.0);
        assert_eq!(carousel.on_drag_move(300.0), Some(300.0));
    }

    #[test]
    fn empty_carousel_ignores_index_operations() {
        let mut carousel =
            CarouselState::new(0, TrackGeometry::uniform(0, 300.0), CarouselConfig::default());

        assert_eq!(carousel.scroll_to_index(0), None);
        carousel.on_scroll(450.0);
        carousel.on_drag_start(10.0);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.scroll_offset(), 0.0);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut carousel = four_cards();
        assert_eq!(carousel.scroll_to_index(4), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn unreachable_target_settles_at_track_end() {
        // Only the first two items can reach the leading edge.
        let mut carousel =
            CarouselState::new(4, TrackGeometry::new(300.0, 300.0), CarouselConfig::default());

        assert_eq!(carousel.scroll_to_index(3), Some(300.0));
        carousel.on_scroll(300.0);
        assert_eq!(carousel.current_index(), 3);
        carousel.on_scroll(300.0);
        assert_eq!(carousel.current_index(), 3);

        carousel.on_scroll(0.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn explicit_settle_completes_pending_target() {
        let mut carousel = four_cards();
        carousel.scroll_to_index(2);
        carousel.on_scroll(590.0);

        carousel.settle();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn settle_after_interrupted_scroll_keeps_nearest_item() {
        let mut carousel = four_cards();
        carousel.scroll_to_index(3);
        carousel.on_scroll(300.0);
        carousel.on_scroll(0.0);

        carousel.settle();
        assert_eq!(carousel.current_index(), 0);
        carousel.on_scroll(0.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn touch_start_drops_pending_target() {
        let mut carousel = skill_row();
        carousel.scroll_to_index(4);

        carousel.on_touch_start();
        assert_eq!(carousel.auto_advance(), AutoAdvance::Latched);

        carousel.on_scroll(124.0);
        carousel.settle();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn linked_rows_share_one_forward_offset() {
        // Both skill rows are driven from the same state, so every offset
        // handed out stays inside the forward range of the leading row.
        let mut carousel = skill_row();
        let mut offsets: Vec<f64> = (0..4).filter_map(|_| carousel.auto_advance_tick()).collect();

        carousel.on_drag_start(500.0);
        offsets.extend(carousel.on_drag_move(400.0));
        offsets.extend(carousel.on_drag_move(900.0));
        carousel.on_drag_end();

        assert_eq!(offsets, [0.5, 1.0, 1.5, 2.0, 152.0, 0.0]);
        assert!(offsets.iter().all(|offset| (0.0..=600.0).contains(offset)));
        assert_eq!(carousel.auto_advance_tick(), None);
    }

    #[test]
    fn scroll_to_current_position_settles_immediately() {
        let mut carousel = four_cards();
        carousel.on_scroll(300.0);

        carousel.scroll_to_index(1);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn geometry_change_reclamps_offset() {
        let mut carousel = four_cards();
        carousel.on_scroll(900.0);

        carousel.set_geometry(TrackGeometry::new(200.0, 400.0));
        assert_eq!(carousel.scroll_offset(), 400.0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn auto_advance_steps_and_wraps() {
        let mut carousel = skill_row();

        assert_eq!(carousel.auto_advance_tick(), Some(0.5));
        assert_eq!(carousel.auto_advance_tick(), Some(1.0));

        carousel.on_scroll(599.8);
        assert_eq!(carousel.auto_advance_tick(), Some(0.0));
    }

    #[test]
    fn auto_advance_latches_on_drag() {
        let mut carousel = skill_row();
        carousel.auto_advance_tick();

        carousel.on_drag_start(50.0);
        carousel.on_drag_end();

        assert_eq!(carousel.auto_advance(), AutoAdvance::Latched);
        assert_eq!(carousel.auto_advance_tick(), None);
        assert!(!carousel.interrupt_auto_advance());
    }

    #[test]
    fn auto_advance_is_off_unless_configured() {
        let mut carousel = four_cards();
        assert_eq!(carousel.auto_advance(), AutoAdvance::Disabled);
        assert_eq!(carousel.auto_advance_tick(), None);
    }

    proptest! {
        #[test]
        fn every_index_is_reachable(count in 1usize..12, extent in 50.0f64..600.0, pick in 0usize..12) {
            let index = pick % count;
            let mut carousel = CarouselState::new(
                count,
                TrackGeometry::uniform(count, extent),
                CarouselConfig::default(),
            );

            let target = carousel.scroll_to_index(index).expect("index in range");
            carousel.on_scroll(target);
            prop_assert_eq!(carousel.current_index(), index);
        }

        #[test]
        fn on_scroll_is_idempotent(count in 1usize..12, extent in 50.0f64..600.0, offset in -100.0f64..8000.0) {
            let mut carousel = CarouselState::new(
                count,
                TrackGeometry::uniform(count, extent),
                CarouselConfig::default(),
            );

            carousel.on_scroll(offset);
            let first = carousel.clone();
            carousel.on_scroll(offset);
            prop_assert_eq!(carousel, first);
        }

        #[test]
        fn latch_holds_for_remaining_lifetime(ticks_before in 0usize..50, ticks_after in 1usize..200) {
            let mut carousel = skill_row();
            for _ in 0..ticks_before {
                carousel.auto_advance_tick();
            }

            carousel.on_drag_start(10.0);
            carousel.on_drag_end();
            let offset = carousel.scroll_offset();

            for _ in 0..ticks_after {
                prop_assert_eq!(carousel.auto_advance_tick(), None);
            }
            prop_assert_eq!(carousel.scroll_offset(), offset);
        }
    }
}
