#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and drag recognition for the tile grid.
//!
//! # Role in tilegrid
//! `tilegrid-core` is the input layer. It owns the layout-pixel geometry
//! types shared across the workspace and the recognizer that turns raw
//! pointer input into well-formed drag lifecycles.
//!
//! # Primary responsibilities
//! - **Geometry**: [`geometry::TileRect`] (measured slot boxes),
//!   [`geometry::DragRect`] (the live bounding box of a dragged tile).
//! - **Events**: [`event::PointerEvent`] in, [`event::DragEvent`] out.
//! - **Drag recognition**: [`drag::DragRecognizer`], a distance-thresholded
//!   Idle → Armed → Dragging lifecycle.
//!
//! # How it fits in the system
//! The reorder engine (`tilegrid-reorder`) consumes [`geometry::DragRect`]
//! values against a registry of [`geometry::TileRect`] measurements. The
//! host boundary (`tilegrid-web`) feeds browser pointer events through the
//! recognizer and translates the results into reorder queries.

pub mod drag;
pub mod event;
pub mod geometry;

pub use drag::{DragConfig, DragRecognizer};
pub use event::{DragEvent, PointerEvent};
pub use geometry::{DragRect, Point, Span, TileRect};
