//! Platform-neutral drag payload.

/// MIME name of the only payload kind drop targets accept.
pub const PLAIN_TEXT_MIME: &str = "text/plain";

/// Declared kind of a drag payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadKind {
    PlainText,
    /// Anything else a platform might report (files, URLs, HTML...).
    Other(String),
}

impl PayloadKind {
    /// Classifies a platform-reported MIME type.
    pub fn from_mime(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(PLAIN_TEXT_MIME) {
            Self::PlainText
        } else {
            Self::Other(trimmed.to_string())
        }
    }

    pub fn as_mime(&self) -> &str {
        match self {
            Self::PlainText => PLAIN_TEXT_MIME,
            Self::Other(value) => value.as_str(),
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, Self::PlainText)
    }
}

/// Transfer effect a drag source permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    None,
    Copy,
    Move,
    Link,
}

impl DropEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        }
    }
}

/// Data carried by a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub data: String,
    pub effect_allowed: DropEffect,
}

impl DragPayload {
    pub fn new(kind: PayloadKind, data: impl Into<String>, effect_allowed: DropEffect) -> Self {
        Self {
            kind,
            data: data.into(),
            effect_allowed,
        }
    }

    /// Plain-text payload restricted to move semantics.
    pub fn plain_text(data: impl Into<String>) -> Self {
        Self::new(PayloadKind::PlainText, data, DropEffect::Move)
    }
}
