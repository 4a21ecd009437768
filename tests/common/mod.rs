//! Shared test helpers: an in-memory overlay host and a synchronous animator.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tip_overlay::{
    Backdrop, LayoutDirection, NodeId, OverlayHost, Rect, Size, Tip, TipAnimator,
    TipDismissListener, TransitionEnd,
};

/// One node in the fake retained tree.
#[derive(Debug, Clone)]
pub struct TestNode {
    pub rect: Rect,
    pub measured: Size,
    pub translation: (f32, f32),
    pub visible: bool,
    pub alpha: f32,
    pub backdrop: Option<Backdrop>,
    pub mouse_enabled: bool,
    pub text: String,
}

impl TestNode {
    fn at(rect: Rect) -> Self {
        Self {
            rect,
            measured: Size::new(rect.width, rect.height),
            translation: (0.0, 0.0),
            visible: true,
            alpha: 1.0,
            backdrop: None,
            mouse_enabled: false,
            text: String::new(),
        }
    }
}

/// In-memory [`OverlayHost`]. Created tip nodes are laid out at the root
/// origin with the host's configured `tip_size` (capped by the tip's max
/// width), matching a toolkit that measures before positioning.
pub struct TestHost {
    pub nodes: HashMap<NodeId, TestNode>,
    pub direction: LayoutDirection,
    pub tip_size: Size,
    pub created: usize,
    next_id: u64,
}

#[allow(dead_code)]
impl TestHost {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            direction: LayoutDirection::LeftToRight,
            tip_size: Size::new(60.0, 20.0),
            created: 0,
            next_id: 1,
        }
    }

    pub fn rtl() -> Self {
        let mut host = Self::new();
        host.direction = LayoutDirection::RightToLeft;
        host
    }

    pub fn add_node(&mut self, rect: Rect) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, TestNode::at(rect));
        id
    }

    pub fn node(&self, id: NodeId) -> &TestNode {
        self.nodes.get(&id).expect("node should exist")
    }
}

impl OverlayHost for TestHost {
    fn create_tip_node(&mut self, tip: &Tip) -> NodeId {
        let mut size = self.tip_size;
        if let Some(max_width) = tip.max_width {
            size.width = size.width.min(max_width);
        }
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let mut node = TestNode::at(Rect::new(0.0, 0.0, size.width, size.height));
        node.visible = false;
        node.text = tip.message.text().to_string();
        self.nodes.insert(id, node);
        self.created += 1;
        id
    }

    fn remove_node(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }

    fn measure(&self, node: NodeId) -> Size {
        self.nodes.get(&node).map(|n| n.measured).unwrap_or_default()
    }

    fn node_rect(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(&node).map(|n| n.rect)
    }

    fn set_translation(&mut self, node: NodeId, x: f32, y: f32) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.translation = (x, y);
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.visible = visible;
        }
    }

    fn is_visible(&self, node: NodeId) -> bool {
        self.nodes.get(&node).map(|n| n.visible).unwrap_or(false)
    }

    fn set_alpha(&mut self, node: NodeId, alpha: f32) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.alpha = alpha;
        }
    }

    fn set_backdrop(&mut self, node: NodeId, backdrop: Backdrop) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.backdrop = Some(backdrop);
        }
    }

    fn enable_mouse(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.mouse_enabled = true;
        }
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }
}

/// Animator that completes every transition synchronously. Keeps lifecycle
/// tests deterministic without pumping `tick`.
#[derive(Default)]
#[allow(dead_code)]
pub struct ImmediateAnimator;

impl TipAnimator for ImmediateAnimator {
    fn appear(&mut self, host: &mut dyn OverlayHost, node: NodeId, _duration: Duration) {
        host.set_alpha(node, 1.0);
        host.set_visible(node, true);
    }

    fn disappear(
        &mut self,
        host: &mut dyn OverlayHost,
        node: NodeId,
        _duration: Duration,
        on_end: TransitionEnd,
    ) {
        host.set_alpha(node, 0.0);
        on_end(host);
    }

    fn tick(&mut self, _host: &mut dyn OverlayHost, _now: Instant) {}
}

/// Records every dismissal notification.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingListener {
    pub events: RefCell<Vec<(NodeId, NodeId, bool)>>,
}

#[allow(dead_code)]
impl RecordingListener {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl TipDismissListener for RecordingListener {
    fn tip_dismissed(&self, node: NodeId, anchor: NodeId, by_user: bool) {
        self.events.borrow_mut().push((node, anchor, by_user));
    }
}

/// Standard scene: 400×800 root with an 80×40 anchor at (100, 200).
#[allow(dead_code)]
pub fn standard_scene(host: &mut TestHost) -> (NodeId, NodeId) {
    let root = host.add_node(Rect::new(0.0, 0.0, 400.0, 800.0));
    let anchor = host.add_node(Rect::new(100.0, 200.0, 80.0, 40.0));
    (root, anchor)
}
