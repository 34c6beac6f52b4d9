//! Element tree and document.

use std::fmt::Write as _;

/// A single element: tag, attributes, text content, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute and return self.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: set the id attribute and return self.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    /// Builder: set text content and return self.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: append a child and return self.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Depth-first mutable walk over this element and all
    /// descendants.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// Depth-first immutable walk.
    pub fn walk(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// First descendant (or self) with the given id.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// First descendant (or self) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }
}

/// A page document: a title plus a root element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    root: Element,
}

impl Document {
    /// Create a document with an empty `<html><body/></html>` tree.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            root: Element::new("html").with_child(Element::new("body")),
        }
    }

    /// Create a document with the given root tree. The root should
    /// contain a `body` child for theme application.
    pub fn with_root(root: Element) -> Self {
        Self {
            title: String::new(),
            root,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// The `body` element, if the tree has one.
    pub fn body_mut(&mut self) -> Option<&mut Element> {
        self.root
            .children
            .iter_mut()
            .find(|child| child.tag == "body")
    }

    /// First element with the given id.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    /// First element with the given id, mutable.
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    /// Depth-first mutable walk over the whole tree.
    pub fn walk_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        self.root.walk_mut(&mut f);
    }

    /// Deterministic text serialization of the document, used to
    /// check that apply passes are idempotent.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "title={}", self.title);
        self.root.walk(&mut |el| {
            let mut attrs: Vec<String> =
                el.attrs.iter().map(|(n, v)| format!("{n}={v}")).collect();
            attrs.sort();
            let _ = writeln!(out, "<{} [{}] \"{}\">", el.tag, attrs.join(" "), el.text);
        });
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
