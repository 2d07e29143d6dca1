#![forbid(unsafe_code)]

//! Drag recognition: transforms raw pointer events into drag lifecycles.
//!
//! [`DragRecognizer`] is a stateful processor that converts a
//! press → move → release sequence into [`DragEvent`]s once the pointer
//! travels past a distance threshold.
//!
//! # State Machine
//!
//! ```text
//! Idle -> Armed -> Dragging -> Idle
//!    \------> Idle (release/cancel before the threshold)
//! ```
//!
//! # Invariants
//! 1. At most one drag is tracked at a time; a second pointer pressing
//!    mid-gesture is ignored.
//! 2. `Start` is emitted exactly once per drag, before any `Move`.
//! 3. Events from a pointer id other than the armed one are ignored.
//! 4. After [`reset`](DragRecognizer::reset), the recognizer is Idle.
//!
//! # Failure Modes
//! - A `Move` with no prior `Down` is dropped (stale events after a cancel).
//! - Capture loss mid-drag emits `Cancel`, never a dangling `Start`.

use web_time::Instant;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::event::{DragEvent, PointerEvent};
use crate::geometry::Point;

/// Thresholds for drag recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Minimum euclidean distance in layout pixels before a press becomes a
    /// drag (default: 4.0).
    pub start_threshold: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            start_threshold: 4.0,
        }
    }
}

/// Tracks an ongoing or potential drag.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    pointer_id: u32,
    origin: Point,
    last_pos: Point,
    pressed_at: Instant,
    started: bool,
}

/// Stateful recognizer that turns pointer events into drag events.
///
/// Call [`process`](DragRecognizer::process) for each incoming
/// [`PointerEvent`]. Most events produce 0 or 1 drag events; the move that
/// crosses the start threshold produces both a `Start` and a `Move`.
#[derive(Debug, Clone)]
pub struct DragRecognizer {
    config: DragConfig,
    drag: Option<DragTracker>,
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl DragRecognizer {
    /// Create a new recognizer with the given configuration.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self { config, drag: None }
    }

    /// Process a raw pointer event, returning any drag events produced.
    pub fn process(&mut self, event: &PointerEvent, now: Instant) -> Vec<DragEvent> {
        let mut out = Vec::with_capacity(2);

        match *event {
            PointerEvent::Down { pointer_id, pos } => {
                if self.drag.is_none() {
                    self.drag = Some(DragTracker {
                        pointer_id,
                        origin: pos,
                        last_pos: pos,
                        pressed_at: now,
                        started: false,
                    });
                }
            }
            PointerEvent::Move { pointer_id, pos } => {
                self.on_move(pointer_id, pos, &mut out);
            }
            PointerEvent::Up { pointer_id, pos } => {
                if let Some(drag) = self.drag
                    && drag.pointer_id == pointer_id
                {
                    self.drag = None;
                    if drag.started {
                        out.push(DragEvent::End {
                            origin: drag.origin,
                            end: pos,
                            duration: now.duration_since(drag.pressed_at),
                        });
                    }
                    // A sub-threshold press-release is a click, not ours.
                }
            }
            PointerEvent::Cancel { pointer_id } => {
                if let Some(drag) = self.drag
                    && drag.pointer_id == pointer_id
                {
                    self.drag = None;
                    if drag.started {
                        out.push(DragEvent::Cancel);
                    }
                }
            }
        }

        out
    }

    fn on_move(&mut self, pointer_id: u32, pos: Point, out: &mut Vec<DragEvent>) {
        let Some(ref mut drag) = self.drag else {
            return;
        };
        if drag.pointer_id != pointer_id {
            return;
        }

        if !drag.started && drag.origin.distance_to(pos) >= self.config.start_threshold {
            drag.started = true;
            out.push(DragEvent::Start {
                origin: drag.origin,
            });
            #[cfg(feature = "tracing")]
            debug!(x = drag.origin.x, y = drag.origin.y, "drag started");
        }

        if drag.started {
            out.push(DragEvent::Move {
                current: pos,
                delta: (pos.x - drag.last_pos.x, pos.y - drag.last_pos.y),
            });
        }

        drag.last_pos = pos;
    }

    /// Unconditionally abandon any tracked drag, emitting `Cancel` if one
    /// had actually started.
    ///
    /// Safety valve for paths where no pointer event is available (Escape
    /// key, window blur).
    pub fn cancel(&mut self) -> Option<DragEvent> {
        let drag = self.drag.take()?;
        if drag.started {
            #[cfg(feature = "tracing")]
            debug!("drag cancelled");
            Some(DragEvent::Cancel)
        } else {
            None
        }
    }

    /// Whether a drag is currently in progress (threshold crossed).
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|d| d.started)
    }

    /// Reset to initial idle state without emitting anything.
    pub fn reset(&mut self) {
        self.drag = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }
}
