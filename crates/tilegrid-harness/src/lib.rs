#![forbid(unsafe_code)]

//! Deterministic fixtures for exercising the reorder engine end to end.
//!
//! [`GridFixture`] wires a measured [`TileBoard`] to a [`GridTemplate`];
//! [`DragScript`] replays a scripted pointer path through a
//! [`DragRecognizer`] and the board, re-measuring after every applied move
//! the way a live host would. Scripts are pure data, so a failing trace
//! can be pasted into a regression test verbatim.

pub mod fixture;
pub mod script;

pub use fixture::GridFixture;
pub use script::{DragScript, Replay};
