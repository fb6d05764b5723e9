use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Tag of an outline node: a heading with its level, or a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Heading(usize),
    Bullet,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Heading(level) => write!(f, "h{level}"),
            Tag::Bullet => f.write_str("li"),
        }
    }
}

/// A node of the mindmap tree. Bullets never carry children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub content: String,
    pub children: Vec<Node>,
    pub tag: Tag,
    /// Line range in the normalized input, `(start, start + 1)`.
    /// Traceability only; the tree shape never depends on it.
    pub line_span: (usize, usize),
}

impl Node {
    pub fn heading(level: usize, content: impl Into<String>, line: usize) -> Self {
        Node {
            content: content.into(),
            children: Vec::new(),
            tag: Tag::Heading(level),
            line_span: (line, line + 1),
        }
    }

    pub fn bullet(content: impl Into<String>, line: usize) -> Self {
        Node {
            content: content.into(),
            children: Vec::new(),
            tag: Tag::Bullet,
            line_span: (line, line + 1),
        }
    }
}

#[derive(serde::Serialize)]
struct Payload {
    tag: String,
    lines: String,
}

// The viewer expects `{content, children, payload: {tag, lines}}`, with
// `lines` as a "start,end" string.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Node", 3)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("children", &self.children)?;
        state.serialize_field(
            "payload",
            &Payload {
                tag: self.tag.to_string(),
                lines: format!("{},{}", self.line_span.0, self.line_span.1),
            },
        )?;
        state.end()
    }
}
