//! Tip registry and lifecycle.
//!
//! [`TipsManager`] owns the anchor → tip mapping and drives every tip
//! through show → dismiss. At most one tip is live per anchor at any time.
//! All operations run on the UI thread that owns the host tree; the only
//! asynchrony is animation completion, delivered through the installed
//! [`TipAnimator`] when the host pumps [`TipsManager::tick`].

use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::anim::{DefaultTipAnimator, TipAnimator};
use crate::background::{DefaultTipBackground, TipBackground};
use crate::error::{Error, Result};
use crate::geometry;
use crate::host::{LayoutDirection, NodeId, OverlayHost};
use crate::tip::Tip;

/// Animation duration applied to tips unless reconfigured.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(400);

/// Receives dismissal notifications once a tip's disappear transition has
/// finished. `by_user` is true when the dismissal came from a tap on the
/// tip itself.
pub trait TipDismissListener {
    fn tip_dismissed(&self, node: NodeId, anchor: NodeId, by_user: bool);
}

/// A live tip owned by the registry.
#[derive(Debug, Clone, Copy)]
struct TipInstance {
    node: NodeId,
    anchor: NodeId,
}

/// Registry and lifecycle manager for overlay tips.
///
/// Scope one manager to the screen or session hosting the tips and call
/// [`dismiss_all`](TipsManager::dismiss_all) at teardown; the registry has
/// no other teardown boundary.
pub struct TipsManager {
    /// Anchor identity → live tip. At most one entry per anchor.
    tips: HashMap<NodeId, TipInstance>,
    /// Reverse binding: tip node → anchor identity. An entry here means the
    /// tip has not been dismissed yet; both maps are updated together.
    bound: HashMap<NodeId, NodeId>,
    animation_duration: Duration,
    animator: Box<dyn TipAnimator>,
    background: Box<dyn TipBackground>,
    listener: Option<Rc<dyn TipDismissListener>>,
}

impl Default for TipsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TipsManager {
    pub fn new() -> Self {
        Self {
            tips: HashMap::new(),
            bound: HashMap::new(),
            animation_duration: DEFAULT_ANIMATION_DURATION,
            animator: Box::new(DefaultTipAnimator::new()),
            background: Box::new(DefaultTipBackground),
            listener: None,
        }
    }

    pub fn with_listener(listener: Rc<dyn TipDismissListener>) -> Self {
        let mut manager = Self::new();
        manager.listener = Some(listener);
        manager
    }

    /// Show a tip for `tip.anchor`, returning its overlay node handle.
    ///
    /// If the anchor already has a live tip, that tip's handle is returned
    /// unchanged — the new request's content and style are ignored; dismiss
    /// first to change a tip's properties. A missing anchor or root is a
    /// soft failure: logs a diagnostic and returns `None`, never panics.
    ///
    /// The handle is usable for registry operations immediately; the appear
    /// transition runs asynchronously via [`tick`](TipsManager::tick).
    pub fn show(&mut self, host: &mut dyn OverlayHost, tip: Tip) -> Option<NodeId> {
        match self.create(host, tip) {
            Ok(node) => {
                self.animator.appear(host, node, self.animation_duration);
                Some(node)
            }
            Err(e) => {
                warn!("unable to create tip: {e}");
                None
            }
        }
    }

    fn create(&mut self, host: &mut dyn OverlayHost, mut tip: Tip) -> Result<NodeId> {
        let Some(anchor_rect) = host.node_rect(tip.anchor) else {
            return Err(Error::AnchorMissing(tip.anchor));
        };
        let Some(root_rect) = host.node_rect(tip.root) else {
            return Err(Error::RootMissing(tip.root));
        };

        // One tip per anchor: reuse the live instance.
        if let Some(existing) = self.tips.get(&tip.anchor) {
            debug!(anchor = %tip.anchor, "anchor already has a live tip, reusing");
            return Ok(existing.node);
        }

        let rtl = host.layout_direction() == LayoutDirection::RightToLeft;
        if rtl {
            tip.position = tip.position.mirrored();
        }

        let node = host.create_tip_node(&tip);
        self.background.decorate(host, node, &tip, tip.position);

        let overlay = host.measure(node);
        let target = geometry::resolve_tip_position(
            anchor_rect,
            root_rect,
            overlay,
            tip.position,
            tip.align,
            tip.offset_x,
            tip.offset_y,
        );

        // Translate from the node's laid-out position to the target. Under
        // RTL the horizontal translation sign flips as well: the position
        // swap alone only mirrors logically, not visually.
        let initial = host.node_rect(node).unwrap_or_default();
        let tx = target.x - initial.x;
        let ty = target.y - initial.y;
        host.set_translation(node, if rtl { -tx } else { tx }, ty);

        host.enable_mouse(node);

        self.bound.insert(node, tip.anchor);
        self.tips.insert(tip.anchor, TipInstance { node, anchor: tip.anchor });
        Ok(node)
    }

    /// Dismiss a tip by its node handle.
    ///
    /// The registry entry is removed here, not when the disappear
    /// transition completes, so repeated calls on the same handle observe
    /// it as already gone: the first call returns `true`, any later one
    /// `false`. The dismissal listener fires once the transition finishes.
    pub fn dismiss(&mut self, host: &mut dyn OverlayHost, node: NodeId, by_user: bool) -> bool {
        let Some(anchor) = self.bound.remove(&node) else {
            return false;
        };
        let Some(instance) = self.tips.remove(&anchor) else {
            return false;
        };

        let listener = self.listener.clone();
        let (node, anchor) = (instance.node, instance.anchor);
        self.animator.disappear(
            host,
            node,
            self.animation_duration,
            Box::new(move |host| {
                host.set_visible(node, false);
                host.remove_node(node);
                if let Some(listener) = listener {
                    listener.tip_dismissed(node, anchor, by_user);
                }
            }),
        );
        true
    }

    /// Dismiss the tip attached to `anchor`, if any (`by_user = false`).
    pub fn dismiss_anchor(&mut self, host: &mut dyn OverlayHost, anchor: NodeId) -> bool {
        self.find_and_dismiss(host, anchor)
    }

    /// Node handle of the live tip for `anchor`. No side effects.
    pub fn find(&self, anchor: NodeId) -> Option<NodeId> {
        self.tips.get(&anchor).map(|instance| instance.node)
    }

    /// Find the tip for `anchor` and dismiss it (`by_user = false`).
    pub fn find_and_dismiss(&mut self, host: &mut dyn OverlayHost, anchor: NodeId) -> bool {
        match self.find(anchor) {
            Some(node) => self.dismiss(host, node, false),
            None => false,
        }
    }

    /// Dismiss every live tip.
    ///
    /// Entries are snapshotted first since each dismissal mutates the map,
    /// and the registry is cleared unconditionally afterwards so no stale
    /// entry can survive a no-op dismissal.
    pub fn dismiss_all(&mut self, host: &mut dyn OverlayHost) {
        let nodes: Vec<NodeId> = self.tips.values().map(|instance| instance.node).collect();
        for node in nodes {
            self.dismiss(host, node, false);
        }
        self.tips.clear();
        self.bound.clear();
    }

    /// Tap-to-dismiss entry point; the host's event dispatch calls this for
    /// taps on tip nodes. Equivalent to [`dismiss`](TipsManager::dismiss)
    /// with `by_user = true`.
    pub fn handle_tap(&mut self, host: &mut dyn OverlayHost, node: NodeId) -> bool {
        self.dismiss(host, node, true)
    }

    /// Advance in-flight transitions. Call from the host's frame loop.
    pub fn tick(&mut self, host: &mut dyn OverlayHost, now: Instant) {
        self.animator.tick(host, now);
    }

    /// Duration applied to subsequent show/dismiss transitions. Not
    /// retroactive to in-flight animations.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    /// Replace the appear/disappear transition provider. Takes effect on
    /// subsequent show/dismiss calls only.
    pub fn set_animator(&mut self, animator: Box<dyn TipAnimator>) {
        self.animator = animator;
    }

    /// Replace the chrome builder used for subsequently created tips.
    pub fn set_background(&mut self, background: Box<dyn TipBackground>) {
        self.background = background;
    }

    /// Number of live tips.
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}
