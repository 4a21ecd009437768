//! Geometry resolution for tip placement.
//!
//! All rects are in root-local coordinates with the origin at the top-left
//! and y growing downward. The resolver is side-agnostic: callers apply the
//! RTL mirror policy before asking for a position.

use crate::tip::{Align, Position};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Measured extent of an overlay node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Resolved top-left target point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Compute the top-left point for an overlay of `overlay` size placed at
/// `position` relative to `anchor`, inside `root`.
///
/// The overlay must already be measured — `overlay` is its laid-out size,
/// not a request. Center alignment (and the cross axis of `LeftOf`/`RightOf`)
/// is clamped so the overlay stays inside the root; `offset_x`/`offset_y`
/// are applied after clamping and are never clamped themselves, since an
/// explicit offset is caller intent. An overlay larger than the root still
/// resolves (pinned to the root's near edge); constraining tip size is the
/// caller's job via max width.
pub fn resolve_tip_position(
    anchor: Rect,
    root: Rect,
    overlay: Size,
    position: Position,
    align: Align,
    offset_x: f32,
    offset_y: f32,
) -> Point {
    let mut point = match position {
        Position::Above => Point::new(
            aligned_x(anchor, root, overlay, align),
            anchor.y - overlay.height,
        ),
        Position::Below => Point::new(aligned_x(anchor, root, overlay, align), anchor.bottom()),
        Position::LeftOf => {
            Point::new(anchor.x - overlay.width, centered_y(anchor, root, overlay))
        }
        Position::RightOf => Point::new(anchor.right(), centered_y(anchor, root, overlay)),
    };

    point.x += offset_x;
    point.y += offset_y;
    point
}

/// Horizontal placement for `Above`/`Below`.
fn aligned_x(anchor: Rect, root: Rect, overlay: Size, align: Align) -> f32 {
    match align {
        Align::Center => {
            let x = anchor.center_x() - overlay.width / 2.0;
            clamp_to_span(x, overlay.width, root.x, root.right())
        }
        Align::Left => anchor.x,
        Align::Right => anchor.right() - overlay.width,
    }
}

/// Vertical placement for `LeftOf`/`RightOf`: anchor-centered, kept inside root.
fn centered_y(anchor: Rect, root: Rect, overlay: Size) -> f32 {
    let y = anchor.center_y() - overlay.height / 2.0;
    clamp_to_span(y, overlay.height, root.y, root.bottom())
}

/// Shift `value` so `[value, value + extent]` lies within `[min, max]`.
/// When the extent exceeds the span, the near edge wins.
fn clamp_to_span(mut value: f32, extent: f32, min: f32, max: f32) -> f32 {
    if value + extent > max {
        value = max - extent;
    }
    if value < min {
        value = min;
    }
    value
}
