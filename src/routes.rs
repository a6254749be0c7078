//! The fixed page list, active-link matching and mobile prev/next order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Introduction,
    Resume,
    Projects,
    Certificates,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Self::Introduction,
        Self::Resume,
        Self::Projects,
        Self::Certificates,
        Self::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Introduction => "/",
            Self::Resume => "/pages/resume",
            Self::Projects => "/pages/projects",
            Self::Certificates => "/pages/certificate",
            Self::Contact => "/pages/contactMe",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Resume => "Resume",
            Self::Projects => "Projects",
            Self::Certificates => "Certifications",
            Self::Contact => "Hire Me",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = normalize(path);
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|route| *route == self)
            .unwrap_or_default()
    }

    pub fn prev(self) -> Option<Self> {
        self.position()
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.position() + 1).copied()
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// `/` only matches itself; every other link also matches nested paths.
pub fn is_active(href: &str, current_path: &str) -> bool {
    let current = normalize(current_path);
    if href == "/" {
        return current == "/";
    }

    current
        .strip_prefix(href)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MobileControls {
    pub prev: Option<Route>,
    pub next: Option<Route>,
}

/// Prev/next targets for the mobile pager, or `None` when the controls are
/// hidden: unknown page, desktop width, or not scrolled far enough.
pub fn mobile_controls(current_path: &str, visible: bool) -> Option<MobileControls> {
    if !visible {
        return None;
    }

    let route = Route::from_path(current_path)?;
    Some(MobileControls {
        prev: route.prev(),
        next: route.next(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_route_list() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/pages/resume/"), Some(Route::Resume));
        assert_eq!(Route::from_path(""), Some(Route::Introduction));
        assert_eq!(Route::from_path("/pages/blog"), None);
    }

    #[test]
    fn root_is_only_active_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/pages/resume"));
    }

    #[test]
    fn nested_paths_keep_section_active() {
        assert!(is_active("/pages/projects", "/pages/projects"));
        assert!(is_active("/pages/projects", "/pages/projects/furnshop"));
        assert!(!is_active("/pages/projects", "/pages/projectsX"));
        assert!(!is_active("/pages/resume", "/pages/projects"));
    }

    #[test]
    fn first_and_last_pages_hide_one_control() {
        let first = mobile_controls("/", true).expect("known route");
        assert_eq!(first.prev, None);
        assert_eq!(first.next, Some(Route::Resume));

        let last = mobile_controls("/pages/contactMe", true).expect("known route");
        assert_eq!(last.prev, Some(Route::Certificates));
        assert_eq!(last.next, None);
    }

    #[test]
    fn controls_hidden_for_unknown_route_or_when_not_visible() {
        assert_eq!(mobile_controls("/nowhere", true), None);
        assert_eq!(mobile_controls("/pages/projects", false), None);
    }
}
