//! Gesture Trace Recording
//!
//! Serialization format for recorded pointer interactions. A trace holds
//! timed input samples for one card and can be replayed through a fresh
//! [`SwipeEngine`](crate::SwipeEngine) to resolve the decision it encodes,
//! without sleeping: replay drives the engine with synthetic instants.

use crate::app::config::Config;
use crate::gesture::{SwipeDirection, SwipeEngine};
use crate::input::pointer::{PointerPoint, PointerSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Current trace format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// What happened at one point in the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEventKind {
    /// Pointer or touch contact began
    Down,
    /// Pointer moved
    Move,
    /// Pointer or touch contact ended
    Up,
    /// Pointer left the card surface
    Leave,
    /// Explicit apply button pressed
    ApplyButton,
    /// Explicit skip button pressed
    SkipButton,
}

/// One timed input sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSample {
    pub kind: TraceEventKind,
    /// Client coordinates; unused for up/leave/button samples
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Milliseconds since trace start
    pub at_ms: u64,
    /// Input device for down/move samples
    pub source: PointerSource,
}

impl TraceSample {
    /// A gesture-start sample
    pub fn down(x: f64, y: f64, at_ms: u64, source: PointerSource) -> Self {
        Self {
            kind: TraceEventKind::Down,
            x,
            y,
            at_ms,
            source,
        }
    }

    /// A move sample (source matches the opening down sample)
    pub fn move_to(x: f64, y: f64, at_ms: u64, source: PointerSource) -> Self {
        Self {
            kind: TraceEventKind::Move,
            x,
            y,
            at_ms,
            source,
        }
    }

    /// A gesture-end sample
    pub fn up(at_ms: u64, source: PointerSource) -> Self {
        Self {
            kind: TraceEventKind::Up,
            x: 0.0,
            y: 0.0,
            at_ms,
            source,
        }
    }

    /// A pointer-leave sample
    pub fn leave(at_ms: u64, source: PointerSource) -> Self {
        Self {
            kind: TraceEventKind::Leave,
            x: 0.0,
            y: 0.0,
            at_ms,
            source,
        }
    }

    /// An explicit button press
    pub fn button(direction: SwipeDirection, at_ms: u64) -> Self {
        Self {
            kind: match direction {
                SwipeDirection::Right => TraceEventKind::ApplyButton,
                SwipeDirection::Left => TraceEventKind::SkipButton,
            },
            x: 0.0,
            y: 0.0,
            at_ms,
            source: PointerSource::Mouse,
        }
    }
}

/// Trace metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceMetadata {
    /// Unique trace ID
    pub id: Uuid,
    /// Trace name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// When the trace was recorded
    pub created_at: DateTime<Utc>,
    /// Total sample count
    pub sample_count: usize,
    /// Trace duration in milliseconds
    pub duration_ms: u64,
    /// Version of the trace format
    pub format_version: String,
}

impl TraceMetadata {
    /// Create new metadata for a trace
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: Utc::now(),
            sample_count: 0,
            duration_ms: 0,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }

    /// Finalize with the sample count and duration
    pub fn finalize(&mut self, sample_count: usize, duration_ms: u64) {
        self.sample_count = sample_count;
        self.duration_ms = duration_ms;
    }
}

impl Default for TraceMetadata {
    fn default() -> Self {
        Self::new(String::new(), None)
    }
}

/// A recorded interaction with one swipe card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureTrace {
    /// Trace metadata
    pub metadata: TraceMetadata,
    /// Timed input samples, in order
    pub samples: Vec<TraceSample>,
}

impl GestureTrace {
    /// Create a new empty trace
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            metadata: TraceMetadata::new(name, description),
            samples: Vec::new(),
        }
    }

    /// Append a sample
    pub fn push(&mut self, sample: TraceSample) {
        self.samples.push(sample);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the trace holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Finalize the metadata from the recorded samples
    pub fn finalize(&mut self) {
        let duration_ms = self.samples.last().map(|s| s.at_ms).unwrap_or(0);
        self.metadata.finalize(self.samples.len(), duration_ms);
    }

    /// Check structural invariants: supported format version and
    /// non-decreasing sample timestamps.
    pub fn validate(&self) -> crate::Result<()> {
        if self.metadata.format_version != CURRENT_FORMAT_VERSION {
            return Err(crate::Error::Trace(format!(
                "unsupported format version '{}', expected '{}'",
                self.metadata.format_version, CURRENT_FORMAT_VERSION
            )));
        }
        for window in self.samples.windows(2) {
            if window[1].at_ms < window[0].at_ms {
                return Err(crate::Error::Trace(format!(
                    "samples out of order: {} ms after {} ms",
                    window[1].at_ms, window[0].at_ms
                )));
            }
        }
        Ok(())
    }

    /// Save the trace to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a trace from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let trace: Self = serde_json::from_str(&content)?;
        trace.validate()?;
        Ok(trace)
    }

    /// Replay the trace through a fresh engine and return the resolved
    /// direction, if the interaction committed one.
    pub fn replay(&self, config: &Config) -> Option<SwipeDirection> {
        let mut engine = SwipeEngine::with_config(config.clone());
        let resolved = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&resolved);
        engine.set_on_swipe(move |direction| *sink.borrow_mut() = Some(direction));

        let base = Instant::now();
        let mut last = base;
        for sample in &self.samples {
            let at = base + Duration::from_millis(sample.at_ms);
            last = at;
            match sample.kind {
                TraceEventKind::Down => {
                    engine.pointer_down(PointerPoint::new(sample.x, sample.y), sample.source)
                }
                TraceEventKind::Move => engine.pointer_move(PointerPoint::new(sample.x, sample.y)),
                TraceEventKind::Up => engine.pointer_up(at),
                TraceEventKind::Leave => engine.pointer_leave(at),
                TraceEventKind::ApplyButton => engine.decide(SwipeDirection::Right, at),
                TraceEventKind::SkipButton => engine.decide(SwipeDirection::Left, at),
            }
            engine.poll(at);
        }
        // Let a pending exit timer run out.
        engine.poll(last + engine.exit_delay());
        let direction = *resolved.borrow();
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe_right_trace() -> GestureTrace {
        let mut trace = GestureTrace::new("apply_drag".to_string(), None);
        trace.push(TraceSample::down(100.0, 100.0, 0, PointerSource::Mouse));
        trace.push(TraceSample::move_to(180.0, 100.0, 40, PointerSource::Mouse));
        trace.push(TraceSample::move_to(250.0, 100.0, 80, PointerSource::Mouse));
        trace.push(TraceSample::up(120, PointerSource::Mouse));
        trace.finalize();
        trace
    }

    #[test]
    fn test_finalize_fills_metadata() {
        let trace = swipe_right_trace();
        assert_eq!(trace.metadata.sample_count, 4);
        assert_eq!(trace.metadata.duration_ms, 120);
        assert_eq!(trace.metadata.format_version, CURRENT_FORMAT_VERSION);
    }

    #[test]
    fn test_replay_resolves_apply() {
        let trace = swipe_right_trace();
        let direction = trace.replay(&Config::default());
        assert_eq!(direction, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_replay_abandoned_drag() {
        let mut trace = GestureTrace::new("abandoned".to_string(), None);
        trace.push(TraceSample::down(100.0, 100.0, 0, PointerSource::Mouse));
        trace.push(TraceSample::move_to(40.0, 100.0, 50, PointerSource::Mouse));
        trace.push(TraceSample::up(90, PointerSource::Mouse));
        trace.finalize();

        assert_eq!(trace.replay(&Config::default()), None);
    }

    #[test]
    fn test_replay_touch_vertical_scroll_yields() {
        let mut trace = GestureTrace::new("scroll".to_string(), None);
        trace.push(TraceSample::down(100.0, 100.0, 0, PointerSource::Touch));
        trace.push(TraceSample::move_to(110.0, 160.0, 30, PointerSource::Touch));
        trace.push(TraceSample::move_to(300.0, 160.0, 60, PointerSource::Touch));
        trace.push(TraceSample::up(100, PointerSource::Touch));
        trace.finalize();

        assert_eq!(trace.replay(&Config::default()), None);
    }

    #[test]
    fn test_replay_button_press() {
        let mut trace = GestureTrace::new("button_skip".to_string(), None);
        trace.push(TraceSample::button(SwipeDirection::Left, 10));
        trace.finalize();

        assert_eq!(trace.replay(&Config::default()), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_replay_empty_trace() {
        let mut trace = GestureTrace::new("empty".to_string(), None);
        trace.finalize();
        assert_eq!(trace.replay(&Config::default()), None);
    }

    #[test]
    fn test_validate_rejects_out_of_order_samples() {
        let mut trace = GestureTrace::new("bad".to_string(), None);
        trace.push(TraceSample::down(0.0, 0.0, 50, PointerSource::Mouse));
        trace.push(TraceSample::up(10, PointerSource::Mouse));
        trace.finalize();
        assert!(trace.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_version() {
        let mut trace = swipe_right_trace();
        trace.metadata.format_version = "9.9".to_string();
        assert!(trace.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("trace.json");

        let trace = swipe_right_trace();
        trace.save(&path).expect("save failed");

        let loaded = GestureTrace::load(&path).expect("load failed");
        assert_eq!(loaded.metadata.id, trace.metadata.id);
        assert_eq!(loaded.samples, trace.samples);
        assert_eq!(loaded.replay(&Config::default()), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_load_rejects_out_of_order_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");

        let mut trace = GestureTrace::new("bad".to_string(), None);
        trace.push(TraceSample::down(0.0, 0.0, 50, PointerSource::Mouse));
        trace.push(TraceSample::up(10, PointerSource::Mouse));
        trace.finalize();
        trace.save(&path).unwrap();

        assert!(GestureTrace::load(&path).is_err());
    }

    #[test]
    fn test_sample_kind_wire_names() {
        let sample = TraceSample::button(SwipeDirection::Right, 0);
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"apply_button\""));
    }

    #[test]
    fn test_metadata_defaults_on_missing_fields() {
        // Older trace files without a description still deserialize.
        let json = r#"{
            "metadata": { "name": "legacy" },
            "samples": []
        }"#;
        let trace: GestureTrace = serde_json::from_str(json).unwrap();
        assert_eq!(trace.metadata.name, "legacy");
        assert_eq!(trace.metadata.format_version, CURRENT_FORMAT_VERSION);
    }
}
