//! Viewport-derived layout decisions.
//!
//! The browser observer in `frontend::browser` takes [`ViewportSnapshot`]s
//! on resize and scroll; everything below is plain arithmetic so it can be
//! checked without a window.

pub const DEFAULT_NARROW_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_DESKTOP_BREAKPOINT_PX: f64 = 1024.0;
pub const DEFAULT_MOBILE_NAV_SCROLL_PX: f64 = 550.0;
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 20.0;
pub const NARROW_PAGE_SIZE: usize = 1;
pub const WIDE_PAGE_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSnapshot {
    pub width: f64,
    pub scroll_y: f64,
}

impl Default for ViewportSnapshot {
    fn default() -> Self {
        Self {
            width: 1280.0,
            scroll_y: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportPolicy {
    pub narrow_breakpoint: f64,
    pub desktop_breakpoint: f64,
    pub mobile_nav_scroll: f64,
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        Self {
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT_PX,
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT_PX,
            mobile_nav_scroll: DEFAULT_MOBILE_NAV_SCROLL_PX,
        }
    }
}

impl ViewportPolicy {
    pub fn page_size(&self, snapshot: ViewportSnapshot) -> usize {
        if snapshot.width < self.narrow_breakpoint {
            NARROW_PAGE_SIZE
        } else {
            WIDE_PAGE_SIZE
        }
    }

    pub fn is_desktop(&self, snapshot: ViewportSnapshot) -> bool {
        snapshot.width >= self.desktop_breakpoint
    }

    /// Mobile prev/next controls appear below the desktop breakpoint once
    /// the page has scrolled past the threshold.
    pub fn shows_mobile_navigation(&self, snapshot: ViewportSnapshot) -> bool {
        !self.is_desktop(snapshot) && snapshot.scroll_y > self.mobile_nav_scroll
    }

    pub fn nav_is_scrolled(&self, snapshot: ViewportSnapshot) -> bool {
        snapshot.scroll_y > NAV_SCROLLED_THRESHOLD_PX
    }

    /// Collapses a snapshot into the values components render from, so
    /// scroll events only cause re-renders when a threshold is crossed.
    pub fn status(&self, snapshot: ViewportSnapshot) -> ViewportStatus {
        ViewportStatus {
            page_size: self.page_size(snapshot),
            mobile_navigation: self.shows_mobile_navigation(snapshot),
            nav_scrolled: self.nav_is_scrolled(snapshot),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportStatus {
    pub page_size: usize,
    pub mobile_navigation: bool,
    pub nav_scrolled: bool,
}

impl Default for ViewportStatus {
    fn default() -> Self {
        ViewportPolicy::default().status(ViewportSnapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(width: f64, scroll_y: f64) -> ViewportSnapshot {
        ViewportSnapshot { width, scroll_y }
    }

    #[test]
    fn page_size_switches_at_narrow_breakpoint() {
        let policy = ViewportPolicy::default();
        assert_eq!(policy.page_size(at(390.0, 0.0)), 1);
        assert_eq!(policy.page_size(at(767.0, 0.0)), 1);
        assert_eq!(policy.page_size(at(768.0, 0.0)), 3);
        assert_eq!(policy.page_size(at(1440.0, 0.0)), 3);
    }

    #[test]
    fn mobile_navigation_needs_scroll_and_narrow_width() {
        let policy = ViewportPolicy::default();
        assert!(!policy.shows_mobile_navigation(at(390.0, 550.0)));
        assert!(policy.shows_mobile_navigation(at(390.0, 551.0)));
        assert!(policy.shows_mobile_navigation(at(1023.0, 900.0)));
        assert!(!policy.shows_mobile_navigation(at(1024.0, 900.0)));
    }

    #[test]
    fn nav_background_changes_after_twenty_pixels() {
        let policy = ViewportPolicy::default();
        assert!(!policy.nav_is_scrolled(at(1280.0, 20.0)));
        assert!(policy.nav_is_scrolled(at(1280.0, 21.0)));
    }

    #[test]
    fn status_ignores_scroll_between_thresholds() {
        let policy = ViewportPolicy::default();
        assert_eq!(policy.status(at(390.0, 100.0)), policy.status(at(390.0, 400.0)));
        assert_ne!(policy.status(at(390.0, 400.0)), policy.status(at(390.0, 600.0)));
    }

    #[test]
    fn status_ignores_width_within_a_band() {
        let policy = ViewportPolicy::default();
        assert_eq!(policy.status(at(800.0, 0.0)), policy.status(at(1023.0, 0.0)));
        assert_eq!(policy.status(at(1024.0, 0.0)), policy.status(at(1920.0, 0.0)));
        assert_eq!(policy.status(at(375.0, 600.0)), policy.status(at(767.0, 600.0)));
        assert_ne!(policy.status(at(767.0, 600.0)), policy.status(at(1024.0, 600.0)));
    }
}
