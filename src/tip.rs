//! Tip request model.
//!
//! A [`Tip`] is an immutable description of one overlay tip: which anchor it
//! attaches to, which root hosts it, what it says, and how it is placed and
//! styled. Requests are built with chained setters and handed to
//! [`TipsManager::show`](crate::manager::TipsManager::show).

use crate::host::NodeId;

/// Side of the anchor the tip is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Above,
    Below,
    LeftOf,
    RightOf,
}

impl Position {
    /// RTL mirror policy: swap the horizontal sides, leave the vertical
    /// ones alone. Applied once, before geometry resolution.
    pub fn mirrored(self) -> Self {
        match self {
            Self::LeftOf => Self::RightOf,
            Self::RightOf => Self::LeftOf,
            other => other,
        }
    }
}

/// Horizontal alignment against the anchor, used for `Above`/`Below` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Center,
    Left,
    Right,
}

/// Text alignment inside the tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gravity {
    Center,
    #[default]
    Left,
    Right,
}

/// RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Tip message content: plain text, or text paired with a named text style
/// the host resolves (rich/styled rendering is a host concern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipMessage {
    Plain(String),
    Styled { text: String, style: String },
}

impl TipMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Styled { text, .. } => text,
        }
    }
}

/// Default tip chrome color.
pub const DEFAULT_BACKGROUND_COLOR: Color = Color { r: 0.23, g: 0.35, b: 0.6, a: 1.0 };

/// Default tip text color.
pub const DEFAULT_TEXT_COLOR: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

/// An immutable tip request.
///
/// `anchor` and `root` are host node keys; the root must be able to host
/// arbitrarily positioned children. The message may be empty but is always
/// present.
#[derive(Debug, Clone)]
pub struct Tip {
    pub anchor: NodeId,
    pub root: NodeId,
    pub message: TipMessage,
    pub position: Position,
    pub align: Align,
    pub gravity: Gravity,
    pub offset_x: f32,
    pub offset_y: f32,
    pub arrow: bool,
    pub background_color: Color,
    pub text_color: Color,
    pub text_size: f32,
    pub elevation: f32,
    pub max_width: Option<f32>,
    pub typeface: Option<String>,
}

impl Tip {
    pub fn new(anchor: NodeId, root: NodeId, message: impl Into<String>, position: Position) -> Self {
        Self {
            anchor,
            root,
            message: TipMessage::Plain(message.into()),
            position,
            align: Align::Center,
            gravity: Gravity::Left,
            offset_x: 0.0,
            offset_y: 0.0,
            arrow: true,
            background_color: DEFAULT_BACKGROUND_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            text_size: 14.0,
            elevation: 0.0,
            max_width: None,
            typeface: None,
        }
    }

    /// Like [`Tip::new`] but with styled message content.
    pub fn styled(
        anchor: NodeId,
        root: NodeId,
        text: impl Into<String>,
        style: impl Into<String>,
        position: Position,
    ) -> Self {
        let mut tip = Self::new(anchor, root, String::new(), position);
        tip.message = TipMessage::Styled { text: text.into(), style: style.into() };
        tip
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Offset applied on the x axis after the tip has been positioned.
    pub fn offset_x(mut self, offset: f32) -> Self {
        self.offset_x = offset;
        self
    }

    /// Offset applied on the y axis after the tip has been positioned.
    pub fn offset_y(mut self, offset: f32) -> Self {
        self.offset_y = offset;
        self
    }

    pub fn arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn typeface(mut self, typeface: impl Into<String>) -> Self {
        self.typeface = Some(typeface.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_swaps_horizontal_sides_only() {
        assert_eq!(Position::LeftOf.mirrored(), Position::RightOf);
        assert_eq!(Position::RightOf.mirrored(), Position::LeftOf);
        assert_eq!(Position::Above.mirrored(), Position::Above);
        assert_eq!(Position::Below.mirrored(), Position::Below);
    }

    #[test]
    fn builder_defaults_match_contract() {
        let tip = Tip::new(NodeId(1), NodeId(2), "hello", Position::Above);
        assert_eq!(tip.align, Align::Center);
        assert_eq!(tip.gravity, Gravity::Left);
        assert!(tip.arrow);
        assert_eq!(tip.text_size, 14.0);
        assert_eq!(tip.message.text(), "hello");
    }

    #[test]
    fn styled_message_keeps_text_and_style() {
        let tip = Tip::styled(NodeId(1), NodeId(2), "hi", "title-style", Position::Below);
        assert_eq!(tip.message, TipMessage::Styled {
            text: "hi".to_string(),
            style: "title-style".to_string(),
        });
        assert_eq!(tip.message.text(), "hi");
    }
}
