//! Screen-space geometry used by every navigation stage.
//!
//! Coordinates follow the browser convention: `x` grows to the right and `y`
//! grows downwards. Rectangles are axis-aligned and measured in pixels.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to produce a usable rectangle for an item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The host could not measure the item (detached node, foreign frame, etc.).
    #[error("item geometry is unavailable: {reason}")]
    Unavailable { reason: String },
    /// One of the coordinates was NaN or infinite.
    #[error("rectangle coordinate '{field}' is not finite ({value})")]
    NonFinite { field: &'static str, value: f64 },
    /// The far edge lies before the near edge on one axis.
    #[error("rectangle edges are inverted on the {axis} axis ({near} > {far})")]
    Inverted { axis: Axis, near: f64, far: f64 },
}

/// One of the two screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis.
    pub const fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// A requested D-pad move. There are no diagonal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Axis the move travels along.
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Axis orthogonal to the move.
    pub const fn perpendicular(self) -> Axis {
        self.axis().perpendicular()
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// `+1.0` when the move grows the coordinate (right, down), `-1.0` otherwise.
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Right | Direction::Down => 1.0,
            Direction::Left | Direction::Up => -1.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ParseDirectionError { input: other.to_string() }),
        }
    }
}

/// Raised when a string is not one of `left`, `right`, `up`, `down`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction '{}'; expected left, right, up or down", self.input)
    }
}

impl Error for ParseDirectionError {}

/// Normalized bounding rectangle of an item.
///
/// Invariants: `right >= left`, `bottom >= top`, `width = right - left`,
/// `height = bottom - top`, and the centers are the midpoints. Rectangles are
/// built fresh for every query because layout may change between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Rectangle {
    /// Degraded rectangle reported for items whose geometry cannot be read.
    pub const ZERO: Rectangle = Rectangle {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
        width: 0.0,
        height: 0.0,
        center_x: 0.0,
        center_y: 0.0,
    };

    /// Builds a rectangle from its four edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, GeometryError> {
        for (field, value) in [("left", left), ("top", top), ("right", right), ("bottom", bottom)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }
        if right < left {
            return Err(GeometryError::Inverted {
                axis: Axis::Horizontal,
                near: left,
                far: right,
            });
        }
        if bottom < top {
            return Err(GeometryError::Inverted {
                axis: Axis::Vertical,
                near: top,
                far: bottom,
            });
        }
        Ok(Self {
            top,
            right,
            bottom,
            left,
            width: right - left,
            height: bottom - top,
            center_x: (left + right) / 2.0,
            center_y: (top + bottom) / 2.0,
        })
    }

    /// Builds a rectangle from its top-left corner and size, the shape most
    /// layout engines report.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        for (field, value) in [("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }
        Self::from_edges(x, y, x + width, y + height)
    }

    /// Same rectangle shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
            left: self.left + dx,
            width: self.width,
            height: self.height,
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
        }
    }

    /// `true` for zero-area rectangles, including [`Rectangle::ZERO`].
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Near edge on `axis` (left or top).
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Far edge on `axis` (right or bottom).
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn center(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.center_x,
            Axis::Vertical => self.center_y,
        }
    }

    /// Edge facing `direction` (the right edge when moving right).
    pub fn leading_edge(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Right | Direction::Down => self.end(direction.axis()),
            Direction::Left | Direction::Up => self.start(direction.axis()),
        }
    }

    /// Edge facing away from `direction` (the left edge when moving right).
    pub fn trailing_edge(&self, direction: Direction) -> f64 {
        self.leading_edge(direction.opposite())
    }

    /// Length of the intersection of both spans on `axis`, never negative.
    pub fn overlap(&self, other: &Rectangle, axis: Axis) -> f64 {
        let start = self.start(axis).max(other.start(axis));
        let end = self.end(axis).min(other.end(axis));
        (end - start).max(0.0)
    }

    /// `true` when the spans on `axis` touch or intersect.
    pub fn spans_intersect(&self, other: &Rectangle, axis: Axis) -> bool {
        self.start(axis) <= other.end(axis) && other.start(axis) <= self.end(axis)
    }

    /// Euclidean distance between the two centers.
    pub fn center_distance(&self, other: &Rectangle) -> f64 {
        (other.center_x - self.center_x).hypot(other.center_y - self.center_y)
    }
}
