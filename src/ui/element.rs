//! Framework-free render output.
//!
//! An `Element` is a tag with a class list, an optional id and children.
//! `Display` prints it in the multi-line snapshot layout:
//!
//! ```text
//! <div
//!   className="square white"
//! >
//!   <div
//!     className="piece white-piece man"
//!   />
//! </div>
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A rendered element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Element {
    pub tag: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "className"))]
    pub class_name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub id: Option<&'static str>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn div(class_name: impl Into<String>) -> Self {
        Element {
            tag: "div",
            class_name: class_name.into(),
            id: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for the element carrying `id`
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        writeln!(f, "{pad}<{}", self.tag)?;
        // Props in name order
        writeln!(f, "{pad}  className=\"{}\"", self.class_name)?;
        if let Some(id) = self.id {
            writeln!(f, "{pad}  id=\"{id}\"")?;
        }
        if self.children.is_empty() {
            return write!(f, "{pad}/>");
        }
        writeln!(f, "{pad}>")?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
            writeln!(f)?;
        }
        write!(f, "{pad}</{}>", self.tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing() {
        let el = Element::div("square black");
        assert_eq!(el.to_string(), "<div\n  className=\"square black\"\n/>");
    }

    #[test]
    fn test_nested() {
        let el = Element::div("square white").with_child(Element::div("piece white-piece man"));
        let expected = "\
<div
  className=\"square white\"
>
  <div
    className=\"piece white-piece man\"
  />
</div>";
        assert_eq!(el.to_string(), expected);
    }

    #[test]
    fn test_id_after_class() {
        let el = Element::div("board").with_id("board");
        assert_eq!(
            el.to_string(),
            "<div\n  className=\"board\"\n  id=\"board\"\n/>"
        );
    }

    #[test]
    fn test_find_by_id() {
        let root = Element::div("outer")
            .with_child(Element::div("a"))
            .with_child(Element::div("board").with_id("board"));
        assert_eq!(root.find_by_id("board").map(|e| e.class_name.as_str()), Some("board"));
        assert!(root.find_by_id("missing").is_none());
    }
}
