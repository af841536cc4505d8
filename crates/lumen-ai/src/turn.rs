//! Transcript entries: turns made of ordered segments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One piece of a turn's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { value: String },
    /// Base64 payload with its declared media type.
    InlineBinary { mime_type: String, data: String },
}

impl Segment {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn inline_binary(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineBinary {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { value } => Some(value),
            Self::InlineBinary { .. } => None,
        }
    }
}

/// A message in the transcript. Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    segments: Vec<Segment>,
}

impl Turn {
    /// Returns `None` when `segments` is empty.
    pub fn new(role: Role, segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self { role, segments })
    }

    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            segments: vec![Segment::text(text)],
        }
    }

    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            segments: vec![Segment::text(text)],
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Text segments joined by blank lines.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .filter_map(Segment::as_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_turn_is_rejected() {
        assert!(Turn::new(Role::User, Vec::new()).is_none());
    }

    #[test]
    fn segments_keep_insertion_order() {
        let turn = Turn::new(
            Role::User,
            vec![
                Segment::text("look at this"),
                Segment::inline_binary("image/png", "AAAA"),
            ],
        )
        .unwrap();
        assert_eq!(turn.role(), Role::User);
        assert_eq!(turn.segments().len(), 2);
        assert_eq!(turn.segments()[0].as_text(), Some("look at this"));
        assert!(matches!(
            turn.segments()[1],
            Segment::InlineBinary { ref mime_type, .. } if mime_type == "image/png"
        ));
    }

    #[test]
    fn text_skips_binary_segments() {
        let turn = Turn::new(
            Role::User,
            vec![
                Segment::text("notes"),
                Segment::inline_binary("image/gif", "R0lG"),
                Segment::text("more"),
            ],
        )
        .unwrap();
        assert_eq!(turn.text(), "notes\n\nmore");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
