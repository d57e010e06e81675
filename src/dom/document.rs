//! Arena-backed element tree
//!
//! Elements live in a [`Document`] and are addressed by [`NodeId`]. A node
//! has at most one parent; appending it elsewhere moves it.

use std::fmt;

use super::style::{InlineStyle, Style};
use crate::error::{Result, ScrollbarError};

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single element: tag, class name, inline style and tree links.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    class_name: String,
    style: InlineStyle,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Whitespace separated classes of the element
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().any(|c| c == class)
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Owns every element and the links between them.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Option<Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Element {
            tag: tag.to_string(),
            ..Element::default()
        }));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(ScrollbarError::NodeNotFound(id))
    }

    pub fn set_class_name(&mut self, id: NodeId, class_name: &str) -> Result<()> {
        self.get_mut(id)?.class_name = class_name.to_string();
        Ok(())
    }

    /// Apply a style batch in one write, expanding vendor prefixes first
    pub fn set_style(&mut self, id: NodeId, style: &Style) -> Result<()> {
        let expanded = style.auto_prefixed();
        self.get_mut(id)?.style.apply(&expanded);
        Ok(())
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// The child is first detached from its current parent, so appending to
    /// the same parent again moves it to the end.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.contains(parent) {
            return Err(ScrollbarError::NodeNotFound(parent));
        }
        if !self.contains(child) {
            return Err(ScrollbarError::NodeNotFound(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(ScrollbarError::HierarchyRequest { parent, child });
        }

        self.detach(child)?;
        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Remove `id` and its whole subtree from the document
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        self.detach(id)?;

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.nodes.get_mut(next.0).and_then(Option::take) {
                pending.extend(element.children);
            }
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> Result<()> {
        if let Some(parent) = self.get_mut(id)?.parent.take() {
            self.get_mut(parent)?.children.retain(|c| *c != id);
        }
        Ok(())
    }

    /// True when `ancestor` is `node` or one of its ancestors
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(Element::parent);
        }
        false
    }

    /// Serialize a subtree as markup, mostly useful for debugging and tests
    pub fn to_markup(&self, id: NodeId) -> Result<String> {
        let element = self.get(id).ok_or(ScrollbarError::NodeNotFound(id))?;

        let mut markup = format!("<{}", element.tag);
        if !element.class_name.is_empty() {
            markup.push_str(&format!(" class=\"{}\"", element.class_name));
        }
        if !element.style.is_empty() {
            markup.push_str(&format!(" style=\"{}\"", element.style.css_text()));
        }
        markup.push('>');
        for child in &element.children {
            markup.push_str(&self.to_markup(*child)?);
        }
        markup.push_str(&format!("</{}>", element.tag));
        Ok(markup)
    }
}
