//! In-memory layer for events emitted by the traced taps
//!
//! Attach a [`TapCaptureLayer`] to a subscriber to inspect what the tap
//! helpers logged, e.g. from tests of code built on the combinators. Only
//! events on the tap target are kept.

use parking_lot::Mutex;
use pipekit_core::constants::TAP_TARGET;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// One event recorded from the tap target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapEvent {
    pub level: Level,
    pub label: String,
    pub message: String,
    /// Remaining fields, rendered with their `Debug` or `Display` output
    pub fields: BTreeMap<String, String>,
}

/// Layer that stores tap events in a shared buffer.
///
/// A layer built with [`TapCaptureLayer::new`] keeps every event until
/// [`TapCaptureLayer::clear`] is called. Attach [`TapCaptureLayer::bounded`]
/// to long-lived subscribers instead: it keeps only the most recent events.
#[derive(Debug, Clone, Default)]
pub struct TapCaptureLayer {
    events: Arc<Mutex<VecDeque<TapEvent>>>,
    limit: Option<usize>,
}

/// Field visitor for extracting event data
#[derive(Default)]
struct TapFieldVisitor {
    fields: BTreeMap<String, String>,
}

impl TapCaptureLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` events, dropping the oldest first
    pub fn bounded(limit: usize) -> Self {
        Self {
            events: Arc::default(),
            limit: Some(limit),
        }
    }

    /// Snapshot of the events captured so far, oldest first
    pub fn events(&self) -> Vec<TapEvent> {
        self.events.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<S> Layer<S> for TapCaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() != TAP_TARGET {
            return;
        }

        let mut visitor = TapFieldVisitor::default();
        event.record(&mut visitor);

        let mut fields = visitor.fields;
        let label = fields.remove("label").unwrap_or_default();
        let message = fields.remove("message").unwrap_or_default();

        let mut events = self.events.lock();
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while events.len() >= limit {
                events.pop_front();
            }
        }
        events.push_back(TapEvent {
            level: *metadata.level(),
            label,
            message,
            fields,
        });
    }
}

impl Visit for TapFieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}
