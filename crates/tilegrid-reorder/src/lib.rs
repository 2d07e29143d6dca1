#![forbid(unsafe_code)]

//! Drag-reorder decision engine for a wrapping multi-row tile grid.
//!
//! # Role in tilegrid
//! While a tile is dragged across the grid, this crate continuously decides
//! which slot it should occupy and mutates the backing display order with a
//! single remove-then-insert move per decision.
//!
//! # Primary responsibilities
//! - **[`PositionRegistry`]**: last-measured bounding box per display index,
//!   stamped with an explicit [`LayoutGeneration`] so stale measurements are
//!   a checked condition rather than a call-order convention.
//! - **[`ReorderEngine`]**: the pure decision function: given a drag box
//!   and the registry, compute the target slot.
//! - **[`Order`]**: the display order, mutated only by the reorder decision.
//! - **[`TileBoard`]**: the coordinator the host talks to, owning all three.
//! - **[`GridTemplate`]**: fixed-column wrapping slot geometry, the source
//!   of the row gap the engine's margin must match.
//!
//! # How it fits in the system
//! The host measures every tile after each layout pass
//! ([`TileBoard::update_position`]), then calls
//! [`TileBoard::update_order`] on every drag-move tick. An applied move
//! invalidates all measurements; the host re-renders from the new order and
//! measures again before the next decision can see the grid.

pub mod board;
pub mod engine;
pub mod grid;
pub mod order;
pub mod registry;

pub use board::{SlotMove, TileBoard};
pub use engine::{ReorderConfig, ReorderEngine, ReorderError};
pub use grid::GridTemplate;
pub use order::Order;
pub use registry::{LayoutGeneration, PositionRegistry};

pub use tilegrid_core::geometry::{DragRect, Point, Span, TileRect};
