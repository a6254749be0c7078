//! Structured one-line JSON logging behind the `log` facade.
//!
//! In the browser lines go to the devtools console with the matching
//! severity; host builds (tests, the native stub binary) write to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::{Map, Value};

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = record.args().to_string();
        if line.starts_with('{') {
            emit(record.level(), &line);
        } else {
            let payload = event_payload(
                now_unix_millis(),
                record.level(),
                "message",
                serde_json::json!({ "target": record.target(), "message": line }),
            );
            emit(record.level(), &payload.to_string());
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Logs `event` with extra `fields` merged into the top-level object.
pub fn log_event(level: Level, event: &str, fields: Value) {
    if level > log::max_level() {
        return;
    }

    let payload = event_payload(now_unix_millis(), level, event, fields);
    log::log!(level, "{payload}");
}

fn event_payload(ts: u64, level: Level, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(ts.into()));
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_merges_fields_after_envelope() {
        let payload = event_payload(
            1_700_000_000_000,
            Level::Info,
            "route_changed",
            json!({ "path": "/pages/resume" }),
        );

        assert_eq!(
            payload,
            json!({
                "ts": 1_700_000_000_000u64,
                "level": "info",
                "event": "route_changed",
                "path": "/pages/resume",
            })
        );
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(0, Level::Warn, "noop", Value::Null);
        assert_eq!(payload.as_object().map(Map::len), Some(3));
        assert_eq!(payload["level"], "warn");
    }
}
