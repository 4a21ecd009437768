//! Host toolkit contract.
//!
//! The engine never talks to a concrete widget toolkit. Everything it needs
//! from the retained tree — node creation, measurement, geometry queries,
//! translation, visibility — goes through [`OverlayHost`], implemented by
//! the embedding application.

use std::fmt;

use crate::background::Backdrop;
use crate::geometry::{Rect, Size};
use crate::tip::Tip;

/// Stable opaque key for a node in the host tree.
///
/// The host issues these when nodes are registered; the engine treats them
/// as pure identity. Anchor identity in the tip registry is the anchor's
/// `NodeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ambient reading direction of the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Surface the engine consumes from the UI toolkit.
///
/// All methods run on the UI thread that owns the tree; rect queries for an
/// anchor and its root must share one coordinate space. A created tip node
/// starts invisible and laid out (measurable) so its size is known before
/// it is positioned.
pub trait OverlayHost {
    /// Create an overlay node under `tip.root`, applying message content,
    /// gravity, text size/color, typeface, and max width. The node is added
    /// invisible and must be measurable immediately.
    fn create_tip_node(&mut self, tip: &Tip) -> NodeId;

    /// Remove a node from the tree. Unknown ids are a no-op.
    fn remove_node(&mut self, node: NodeId);

    /// Measured size of a laid-out node.
    fn measure(&self, node: NodeId) -> Size;

    /// Bounding rect of a node in root-local coordinates, or `None` when
    /// the node is not in the tree.
    fn node_rect(&self, node: NodeId) -> Option<Rect>;

    /// Translate a node relative to its laid-out position.
    fn set_translation(&mut self, node: NodeId, x: f32, y: f32);

    fn set_visible(&mut self, node: NodeId, visible: bool);

    fn is_visible(&self, node: NodeId) -> bool;

    /// Transition alpha, driven by the animator.
    fn set_alpha(&mut self, node: NodeId, alpha: f32);

    /// Apply chrome produced by the background decorator.
    fn set_backdrop(&mut self, node: NodeId, backdrop: Backdrop);

    /// Make the node receive tap events. The host's event dispatch is
    /// expected to route taps on such nodes to
    /// [`TipsManager::handle_tap`](crate::manager::TipsManager::handle_tap).
    fn enable_mouse(&mut self, node: NodeId);

    fn layout_direction(&self) -> LayoutDirection;

    /// Whether a node is present in the tree.
    fn contains(&self, node: NodeId) -> bool {
        self.node_rect(node).is_some()
    }
}
