//! Appear/disappear transitions.
//!
//! The manager never blocks on an animation: `appear` and `disappear` start
//! a transition and return, and the host's frame loop drives progress by
//! calling [`TipsManager::tick`](crate::manager::TipsManager::tick). A
//! disappear transition carries an `on_end` continuation that must fire
//! exactly once, on the UI thread, after the visual transition finishes —
//! that continuation is where the manager detaches the node and notifies
//! the dismissal listener.

use std::time::{Duration, Instant};

use crate::host::{NodeId, OverlayHost};

/// One-shot continuation invoked when a disappear transition completes.
pub type TransitionEnd = Box<dyn FnOnce(&mut dyn OverlayHost)>;

/// Supplies appear/disappear transitions for tip nodes.
///
/// Overlapping transitions on one node are allowed (a tip dismissed before
/// its appear finishes); the last-started transition determines the final
/// visual state.
pub trait TipAnimator {
    /// Start the appear transition. The node becomes visible here.
    fn appear(&mut self, host: &mut dyn OverlayHost, node: NodeId, duration: Duration);

    /// Start the disappear transition. `on_end` must be invoked exactly
    /// once, after the transition finishes.
    fn disappear(
        &mut self,
        host: &mut dyn OverlayHost,
        node: NodeId,
        duration: Duration,
        on_end: TransitionEnd,
    );

    /// Advance in-flight transitions to `now`.
    fn tick(&mut self, host: &mut dyn OverlayHost, now: Instant);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TransitionKind {
    FadeIn,
    FadeOut,
}

struct Transition {
    node: NodeId,
    kind: TransitionKind,
    started: Instant,
    duration: Duration,
    on_end: Option<TransitionEnd>,
}

/// Default animator: linear alpha fade in both directions.
///
/// Appear makes the node visible at alpha 0 and fades to 1; disappear fades
/// to 0 and runs its continuation. Completions fire from `tick`, so they
/// stay on the thread that drives the UI.
#[derive(Default)]
pub struct DefaultTipAnimator {
    transitions: Vec<Transition>,
}

impl DefaultTipAnimator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TipAnimator for DefaultTipAnimator {
    fn appear(&mut self, host: &mut dyn OverlayHost, node: NodeId, duration: Duration) {
        host.set_alpha(node, 0.0);
        host.set_visible(node, true);
        self.transitions.push(Transition {
            node,
            kind: TransitionKind::FadeIn,
            started: Instant::now(),
            duration,
            on_end: None,
        });
    }

    fn disappear(
        &mut self,
        _host: &mut dyn OverlayHost,
        node: NodeId,
        duration: Duration,
        on_end: TransitionEnd,
    ) {
        self.transitions.push(Transition {
            node,
            kind: TransitionKind::FadeOut,
            started: Instant::now(),
            duration,
            on_end: Some(on_end),
        });
    }

    fn tick(&mut self, host: &mut dyn OverlayHost, now: Instant) {
        let mut i = 0;
        while i < self.transitions.len() {
            let t = &self.transitions[i];
            let elapsed = now.saturating_duration_since(t.started);
            let progress = if t.duration.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f32() / t.duration.as_secs_f32()).min(1.0)
            };

            let alpha = match t.kind {
                TransitionKind::FadeIn => progress,
                TransitionKind::FadeOut => 1.0 - progress,
            };
            host.set_alpha(t.node, alpha);

            if progress >= 1.0 {
                let mut done = self.transitions.remove(i);
                if let Some(on_end) = done.on_end.take() {
                    on_end(host);
                }
            } else {
                i += 1;
            }
        }
    }
}
