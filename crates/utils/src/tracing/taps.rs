//! Traced taps
//!
//! Each helper returns a closure that logs what it observes on the
//! `pipekit::tap` target and returns nothing, so it slots into the `tap*`
//! combinators without changing the value flowing through them:
//!
//! ```
//! use pipekit_core::option;
//! use pipekit_utils::tracing::trace_some;
//!
//! let port = option::tap_some(Some(8080), trace_some("port"));
//! assert_eq!(port, Some(8080));
//! ```
//!
//! Present values and successes log at debug level, absence logs at debug
//! level, failures log at warn level.

use pipekit_core::constants::TAP_TARGET;
use std::fmt::Debug;
use tracing::{debug, warn};

pub fn trace_some<T>(label: &'static str) -> impl Fn(&T)
where
    T: Debug + ?Sized,
{
    move |value: &T| debug!(target: TAP_TARGET, label, value = ?value, "value present")
}

pub fn trace_none(label: &'static str) -> impl Fn() {
    move || debug!(target: TAP_TARGET, label, "value absent")
}

pub fn trace_ok<T>(label: &'static str) -> impl Fn(&T)
where
    T: Debug + ?Sized,
{
    move |value: &T| debug!(target: TAP_TARGET, label, value = ?value, "operation succeeded")
}

/// Log a failure at warn level
pub fn trace_err<E>(label: &'static str) -> impl Fn(&E)
where
    E: Debug + ?Sized,
{
    move |error: &E| warn!(target: TAP_TARGET, label, error = ?error, "operation failed")
}

/// Log any value passing through, for use with the plain `tap` combinator
pub fn trace_value<T>(label: &'static str) -> impl Fn(&T)
where
    T: Debug + ?Sized,
{
    move |value: &T| debug!(target: TAP_TARGET, label, value = ?value, "value observed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracing::capture::TapCaptureLayer;
    use pipekit_core::functional::prelude::*;
    use pipekit_core::{option, result};
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture<R>(f: impl FnOnce() -> R) -> (R, TapCaptureLayer) {
        let layer = TapCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, layer)
    }

    #[test]
    fn test_option_taps() {
        let ((present, absent), layer) = capture(|| {
            let present = option::tap_none(
                option::tap_some(Some(7), trace_some("lookup")),
                trace_none("lookup"),
            );
            let absent = option::tap_none(
                option::tap_some(None::<i32>, trace_some("lookup")),
                trace_none("lookup"),
            );
            (present, absent)
        });

        assert_eq!(present, Some(7));
        assert_eq!(absent, None);

        let events = layer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "value present");
        assert_eq!(events[0].fields.get("value").map(String::as_str), Some("7"));
        assert_eq!(events[1].message, "value absent");
        assert!(events.iter().all(|e| e.label == "lookup" && e.level == Level::DEBUG));
    }

    #[test]
    fn test_result_taps() {
        let (outcomes, layer) = capture(|| {
            ["12", "x"]
                .iter()
                .map(|raw| raw.parse::<i32>())
                .map(|res| result::tap_ok(res, trace_ok("parse")))
                .map(|res| result::tap_error(res, trace_err("parse")))
                .collect::<Vec<_>>()
        });

        assert_eq!(outcomes[0], Ok(12));
        assert!(outcomes[1].is_err());

        let events = layer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, Level::DEBUG);
        assert_eq!(events[0].message, "operation succeeded");
        assert_eq!(events[1].level, Level::WARN);
        assert_eq!(events[1].message, "operation failed");
        assert!(events[1].fields.contains_key("error"));
    }

    #[test]
    fn test_trace_value_with_tap_and_extensions() {
        let (total, layer) = capture(|| {
            let doubled = tap(21, trace_value("input")) * 2;
            Some(doubled)
                .tap_some(trace_some("doubled"))
                .map(|n| n + 1)
        });

        assert_eq!(total, Some(43));
        let labels: Vec<String> = layer.events().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["input", "doubled"]);
    }

    #[test]
    fn test_unsized_values() {
        let (_, layer) = capture(|| {
            let log = trace_value::<str>("name");
            log("pipekit");
        });

        let events = layer.events();
        assert_eq!(events[0].fields.get("value").map(String::as_str), Some("\"pipekit\""));
    }
}
