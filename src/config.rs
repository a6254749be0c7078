use crate::{carousel::CarouselConfig, viewport::ViewportPolicy};
use log::LevelFilter;
use std::{str::FromStr, time::Duration};
use url::Url;

const DEFAULT_DRAG_SENSITIVITY_PERCENT: u64 = 150;
const DEFAULT_AUTO_ADVANCE_INTERVAL_MS: u64 = 16;
const DEFAULT_NARROW_BREAKPOINT_PX: u64 = 768;
const DEFAULT_DESKTOP_BREAKPOINT_PX: u64 = 1024;
const DEFAULT_MOBILE_NAV_SCROLL_PX: u64 = 550;
const DEFAULT_CONTACT_SIMULATED_DELAY_MS: u64 = 1_000;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const DRAG_SENSITIVITY_PERCENT_BOUNDS: (u64, u64) = (50, 400);
const AUTO_ADVANCE_INTERVAL_MS_BOUNDS: (u64, u64) = (8, 1_000);
const NARROW_BREAKPOINT_PX_BOUNDS: (u64, u64) = (320, 1_600);
const DESKTOP_BREAKPOINT_PX_BOUNDS: (u64, u64) = (480, 2_560);
const MOBILE_NAV_SCROLL_PX_BOUNDS: (u64, u64) = (0, 5_000);
const CONTACT_SIMULATED_DELAY_MS_BOUNDS: (u64, u64) = (0, 10_000);

/// Site tunables. Values are baked in at build time (`PORTFOLIO_*`
/// variables seen by `trunk build`); anything missing, unparsable or out of
/// bounds falls back to its default.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub drag_sensitivity: f64,
    pub auto_advance_interval: Duration,
    pub viewport: ViewportPolicy,
    pub contact_endpoint: Option<Url>,
    pub contact_simulated_delay: Duration,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| match name {
            "PORTFOLIO_DRAG_SENSITIVITY_PERCENT" => option_env!("PORTFOLIO_DRAG_SENSITIVITY_PERCENT"),
            "PORTFOLIO_AUTO_ADVANCE_INTERVAL_MS" => option_env!("PORTFOLIO_AUTO_ADVANCE_INTERVAL_MS"),
            "PORTFOLIO_NARROW_BREAKPOINT_PX" => option_env!("PORTFOLIO_NARROW_BREAKPOINT_PX"),
            "PORTFOLIO_DESKTOP_BREAKPOINT_PX" => option_env!("PORTFOLIO_DESKTOP_BREAKPOINT_PX"),
            "PORTFOLIO_MOBILE_NAV_SCROLL_PX" => option_env!("PORTFOLIO_MOBILE_NAV_SCROLL_PX"),
            "PORTFOLIO_CONTACT_SIMULATED_DELAY_MS" => {
                option_env!("PORTFOLIO_CONTACT_SIMULATED_DELAY_MS")
            }
            "PORTFOLIO_CONTACT_ENDPOINT" => option_env!("PORTFOLIO_CONTACT_ENDPOINT"),
            "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
            _ => None,
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let drag_sensitivity_percent = parse_u64_with_bounds(
            lookup("PORTFOLIO_DRAG_SENSITIVITY_PERCENT"),
            DEFAULT_DRAG_SENSITIVITY_PERCENT,
            DRAG_SENSITIVITY_PERCENT_BOUNDS,
        );
        let auto_advance_interval_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_AUTO_ADVANCE_INTERVAL_MS"),
            DEFAULT_AUTO_ADVANCE_INTERVAL_MS,
            AUTO_ADVANCE_INTERVAL_MS_BOUNDS,
        );
        let narrow_breakpoint = parse_u64_with_bounds(
            lookup("PORTFOLIO_NARROW_BREAKPOINT_PX"),
            DEFAULT_NARROW_BREAKPOINT_PX,
            NARROW_BREAKPOINT_PX_BOUNDS,
        );
        let desktop_breakpoint = parse_u64_with_bounds(
            lookup("PORTFOLIO_DESKTOP_BREAKPOINT_PX"),
            DEFAULT_DESKTOP_BREAKPOINT_PX,
            DESKTOP_BREAKPOINT_PX_BOUNDS,
        );
        let mobile_nav_scroll = parse_u64_with_bounds(
            lookup("PORTFOLIO_MOBILE_NAV_SCROLL_PX"),
            DEFAULT_MOBILE_NAV_SCROLL_PX,
            MOBILE_NAV_SCROLL_PX_BOUNDS,
        );
        let contact_simulated_delay_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_CONTACT_SIMULATED_DELAY_MS"),
            DEFAULT_CONTACT_SIMULATED_DELAY_MS,
            CONTACT_SIMULATED_DELAY_MS_BOUNDS,
        );
        let contact_endpoint = parse_http_url(lookup("PORTFOLIO_CONTACT_ENDPOINT"));
        let log_level = parse_log_level(lookup("PORTFOLIO_LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            drag_sensitivity: drag_sensitivity_percent as f64 / 100.0,
            auto_advance_interval: Duration::from_millis(auto_advance_interval_ms),
            viewport: ViewportPolicy {
                narrow_breakpoint: narrow_breakpoint as f64,
                desktop_breakpoint: desktop_breakpoint as f64,
                mobile_nav_scroll: mobile_nav_scroll as f64,
            },
            contact_endpoint,
            contact_simulated_delay: Duration::from_millis(contact_simulated_delay_ms),
            log_level,
        }
    }

    pub fn carousel(&self) -> CarouselConfig {
        CarouselConfig::default().with_sensitivity(self.drag_sensitivity)
    }

    pub fn skill_marquee(&self) -> CarouselConfig {
        self.carousel().auto_advancing()
    }
}

fn parse_non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    parse_non_empty(raw)
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_http_url(raw: Option<&str>) -> Option<Url> {
    let parsed = Url::parse(parse_non_empty(raw)?).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(raw: Option<&str>, default: LevelFilter) -> LevelFilter {
    parse_non_empty(raw)
        .and_then(|value| LevelFilter::from_str(value).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(vars: &'static [(&'static str, &'static str)]) -> SiteConfig {
        SiteConfig::from_lookup(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        })
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = SiteConfig::default();

        assert_eq!(config.drag_sensitivity, 1.5);
        assert_eq!(config.auto_advance_interval, Duration::from_millis(16));
        assert_eq!(config.viewport, ViewportPolicy::default());
        assert_eq!(config.contact_endpoint, None);
        assert_eq!(config.contact_simulated_delay, Duration::from_millis(1_000));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn in_bounds_values_are_used() {
        let config = config_with(&[
            ("PORTFOLIO_DRAG_SENSITIVITY_PERCENT", "200"),
            ("PORTFOLIO_NARROW_BREAKPOINT_PX", " 640 "),
            ("PORTFOLIO_LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.drag_sensitivity, 2.0);
        assert_eq!(config.viewport.narrow_breakpoint, 640.0);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back_to_defaults() {
        let config = config_with(&[
            ("PORTFOLIO_DRAG_SENSITIVITY_PERCENT", "9000"),
            ("PORTFOLIO_AUTO_ADVANCE_INTERVAL_MS", "fast"),
            ("PORTFOLIO_LOG_LEVEL", "loud"),
        ]);

        assert_eq!(config.drag_sensitivity, 1.5);
        assert_eq!(config.auto_advance_interval, Duration::from_millis(16));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn contact_endpoint_must_be_http() {
        let https = config_with(&[("PORTFOLIO_CONTACT_ENDPOINT", "https://forms.example.com/f/abc")]);
        assert_eq!(
            https.contact_endpoint.as_ref().map(Url::as_str),
            Some("https://forms.example.com/f/abc")
        );

        let mailto = config_with(&[("PORTFOLIO_CONTACT_ENDPOINT", "mailto:someone@example.com")]);
        assert_eq!(mailto.contact_endpoint, None);
    }

    #[test]
    fn skill_marquee_enables_auto_advance() {
        let config = SiteConfig::default();
        assert!(config.skill_marquee().auto_advance);
        assert!(!config.carousel().auto_advance);
    }
}
