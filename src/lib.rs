//! Anchored overlay tips for retained UI trees.
//!
//! Places short-lived annotation widgets ("tips") next to anchor nodes,
//! computes their position relative to the anchor and root container, and
//! tracks at most one live tip per anchor through show → dismiss, including
//! tap-to-dismiss and right-to-left mirroring. The concrete widget toolkit
//! stays outside the crate: the embedding application implements
//! [`OverlayHost`], routes tap events to [`TipsManager::handle_tap`], and
//! pumps [`TipsManager::tick`] from its frame loop.

pub mod anim;
pub mod background;
pub mod error;
pub mod geometry;
pub mod host;
pub mod manager;
pub mod tip;

pub use anim::{DefaultTipAnimator, TipAnimator, TransitionEnd};
pub use background::{ArrowEdge, Backdrop, DefaultTipBackground, TipBackground};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size, resolve_tip_position};
pub use host::{LayoutDirection, NodeId, OverlayHost};
pub use manager::{DEFAULT_ANIMATION_DURATION, TipDismissListener, TipsManager};
pub use tip::{Align, Color, Gravity, Position, Tip, TipMessage};
