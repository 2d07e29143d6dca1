#![forbid(unsafe_code)]

//! Geometric primitives in layout pixels.
//!
//! All coordinates are `f64` CSS pixels with the origin at the top-left of
//! the host surface, matching what the host's measurement pass reports.

/// A 2D point in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The last-measured bounding box of one tile.
///
/// Stored as left/top plus extent; [`bottom`](TileRect::bottom) and
/// [`right`](TileRect::right) are derived on access.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileRect {
    /// Left edge in layout pixels.
    pub left: f64,
    /// Top edge in layout pixels.
    pub top: f64,
    /// Width in layout pixels.
    pub width: f64,
    /// Height in layout pixels.
    pub height: f64,
}

impl TileRect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal midpoint.
    #[inline]
    #[must_use]
    pub fn mid_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint.
    #[inline]
    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Check if a point is inside the rectangle (left/top inclusive,
    /// right/bottom exclusive).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// The rectangle shifted by the given offsets.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            width: self.width,
            height: self.height,
        }
    }
}

/// One axis of a bounding box, with independent endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the span.
    #[inline]
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Extent of the span.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

/// The live bounding box of the tile currently being dragged.
///
/// Unlike [`TileRect`], which records where a tile was last *measured*,
/// a `DragRect` tracks where the tile *is right now*, mid-gesture. The
/// per-axis center is derived on each query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragRect {
    pub x: Span,
    pub y: Span,
}

impl DragRect {
    /// Create a drag rect from per-axis spans.
    #[must_use]
    pub const fn new(x: Span, y: Span) -> Self {
        Self { x, y }
    }

    /// The drag rect covering a tile rectangle.
    #[must_use]
    pub fn from_rect(rect: TileRect) -> Self {
        Self {
            x: Span::new(rect.left, rect.right()),
            y: Span::new(rect.top, rect.bottom()),
        }
    }

    /// Horizontal center.
    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x.center()
    }

    /// Vertical center.
    #[inline]
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y.center()
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }
}
