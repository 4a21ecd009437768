//! Tip chrome decoration.
//!
//! The background decorator turns a bare overlay node into tip chrome:
//! fill color, elevation, and the pointer arrow aimed back at the anchor.
//! It is a capability trait so hosts can install their own shape builder.

use crate::host::{NodeId, OverlayHost};
use crate::tip::{Color, Position, Tip};

/// Edge of the tip the arrow sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Chrome description handed to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub color: Color,
    pub elevation: f32,
    pub arrow_edge: Option<ArrowEdge>,
}

/// Builds the visual chrome for a freshly created tip node.
///
/// `position` is the tip's resolved side, after RTL mirroring, so the arrow
/// always points at the anchor it was placed against.
pub trait TipBackground {
    fn decorate(&self, host: &mut dyn OverlayHost, node: NodeId, tip: &Tip, position: Position);
}

/// Default chrome: flat fill in the tip's background color with the arrow
/// on the edge facing the anchor.
#[derive(Debug, Default)]
pub struct DefaultTipBackground;

impl TipBackground for DefaultTipBackground {
    fn decorate(&self, host: &mut dyn OverlayHost, node: NodeId, tip: &Tip, position: Position) {
        let arrow_edge = tip.arrow.then(|| match position {
            Position::Above => ArrowEdge::Bottom,
            Position::Below => ArrowEdge::Top,
            Position::LeftOf => ArrowEdge::Right,
            Position::RightOf => ArrowEdge::Left,
        });
        host.set_backdrop(
            node,
            Backdrop {
                color: tip.background_color,
                elevation: tip.elevation,
                arrow_edge,
            },
        );
    }
}
