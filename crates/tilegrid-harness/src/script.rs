#![forbid(unsafe_code)]

//! Scripted drag traces.
//!
//! A [`DragScript`] grabs a tile by display index at its slot center and
//! walks the pointer through a list of waypoints, feeding every tick
//! through a [`DragRecognizer`] and the fixture's board. After each
//! applied move the fixture is re-measured, mirroring the
//! render → measure → decide loop of a live host.

use tracing::debug;
use web_time::Instant;

use tilegrid_core::drag::DragRecognizer;
use tilegrid_core::event::{DragEvent, PointerEvent};
use tilegrid_core::geometry::Point;
use tilegrid_reorder::{ReorderError, SlotMove};

use crate::fixture::GridFixture;

const POINTER_ID: u32 = 1;

/// A scripted drag: grab, waypoints, drop.
///
/// Waypoints are positions of the dragged tile's *center* (the script
/// grabs tiles dead-center, so pointer and tile center coincide).
#[derive(Debug, Clone)]
pub struct DragScript {
    grab: usize,
    waypoints: Vec<Point>,
}

/// What a replay did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Every applied move, in order.
    pub moves: Vec<SlotMove>,
    /// The display order after the drop.
    pub final_order: Vec<u32>,
    /// The dragged tile's display index after the drop.
    pub final_index: usize,
}

impl DragScript {
    /// Start a script grabbing the tile at display index `grab`.
    #[must_use]
    pub fn grab(grab: usize) -> Self {
        Self {
            grab,
            waypoints: Vec::new(),
        }
    }

    /// Add a waypoint for the dragged tile's center.
    #[must_use]
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.waypoints.push(Point::new(x, y));
        self
    }

    /// Replay against a fixture.
    ///
    /// # Panics
    /// Panics when a tick fails with [`ReorderError`]: the script
    /// re-measures after every move, so a hard error is a bug in the
    /// scenario (or the engine) that the calling test should surface.
    pub fn replay(&self, fixture: &mut GridFixture) -> Replay {
        let mut recognizer = DragRecognizer::default();
        let mut source = self.grab;
        let mut moves = Vec::new();

        let start = fixture.slot_center(self.grab);
        let now = Instant::now();
        recognizer.process(
            &PointerEvent::Down {
                pointer_id: POINTER_ID,
                pos: start,
            },
            now,
        );

        for waypoint in &self.waypoints {
            let events = recognizer.process(
                &PointerEvent::Move {
                    pointer_id: POINTER_ID,
                    pos: *waypoint,
                },
                now,
            );
            for event in events {
                let DragEvent::Move { current, .. } = event else {
                    continue;
                };
                let drag = fixture.drag_centered_at(current.x, current.y);
                match fixture.board_mut().update_order(source, drag) {
                    Ok(Some(applied)) => {
                        debug!(from = applied.from, to = applied.to, "script applied move");
                        source = applied.to;
                        moves.push(applied);
                        fixture.remeasure();
                    }
                    Ok(None) => {}
                    Err(err @ ReorderError::StaleSource { .. }) => {
                        // The script re-measures after every move, so a
                        // stale tick means the scenario itself is broken.
                        panic!("stale tick in scripted drag: {err}");
                    }
                    Err(err) => panic!("scripted drag failed: {err}"),
                }
            }
        }

        let end = self.waypoints.last().copied().unwrap_or(start);
        recognizer.process(
            &PointerEvent::Up {
                pointer_id: POINTER_ID,
                pos: end,
            },
            now,
        );

        Replay {
            moves,
            final_order: fixture.order().to_vec(),
            final_index: source,
        }
    }
}
