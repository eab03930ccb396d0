// src/dom/tree.rs

use thiserror::Error;

/// Index into a [`PageDoc`] arena. Valid only for the document that issued it;
/// a handle kept across documents (or a rebuilt page) is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Change notification kinds, dispatched in typing order: a framework that
/// reconciles on `change` before ever seeing `input` would drop the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Input,
    Change,
    Blur,
}

impl Notice {
    pub fn name(self) -> &'static str {
        match self {
            Notice::Input => "input",
            Notice::Change => "change",
            Notice::Blur => "blur",
        }
    }
}

/// One dispatched notification. `path` is the bubble route: the target first,
/// then each ancestor up to the root, so a listener bound anywhere above the
/// input observes the notice.
#[derive(Clone, Debug)]
pub struct Dispatch {
    pub target: NodeId,
    pub notice: Notice,
    pub path: Vec<NodeId>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    #[error("input is read-only")]
    ReadOnly,
    #[error("stale element handle")]
    Stale,
}

/// Capability contract the filler needs from a host document.
///
/// `set_value_raw` is the framework-bypass write path: it mutates the
/// element's underlying value without going through any framework-level
/// property, so an intercepting UI layer cannot silently discard it.
/// Reconciliation is then driven by the bubbling notices from `notify`.
pub trait Document {
    /// All elements carrying `attr`, in document order.
    fn candidates(&self, attr: &str) -> Vec<NodeId>;

    fn attr(&self, id: NodeId, name: &str) -> Option<&str>;

    /// Nearest ancestor (including `id` itself) with the given tag.
    fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId>;

    /// First descendant input of `container` whose placeholder matches.
    fn find_input(&self, container: NodeId, placeholder: &str) -> Option<NodeId>;

    fn value(&self, id: NodeId) -> &str;

    fn set_value_raw(&mut self, id: NodeId, text: &str) -> Result<(), WriteError>;

    /// Dispatch a bubbling notice against `id`.
    fn notify(&mut self, id: NodeId, notice: Notice) -> Result<(), WriteError>;
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    value: String,
    read_only: bool,
}

/// Arena-backed page document. Mutations are value writes and notice
/// dispatches only; the element structure is fixed once built.
#[derive(Clone, Debug, Default)]
pub struct PageDoc {
    nodes: Vec<Node>,
    dispatches: Vec<Dispatch>,
}

impl PageDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element. Tag and attribute names are stored lowercased;
    /// an `input` picks up its initial value from the `value` attribute and
    /// becomes read-only when `readonly` or `disabled` is present.
    pub fn add(&mut self, tag: &str, attrs: &[(&str, &str)], parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let attrs: Vec<(String, String)> = attrs
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), s!(*v)))
            .collect();
        let value = attrs
            .iter()
            .find(|(k, _)| k == "value")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        let read_only = attrs.iter().any(|(k, _)| k == "readonly" || k == "disabled");

        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            attrs,
            parent,
            children: Vec::new(),
            value,
            read_only,
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    /// Every notice dispatched so far, in dispatch order.
    pub fn dispatches(&self) -> &[Dispatch] {
        &self.dispatches
    }

    pub fn dispatches_for(&self, target: NodeId) -> Vec<&Dispatch> {
        self.dispatches.iter().filter(|d| d.target == target).collect()
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn bubble_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut cur = id;
        while let Some(p) = self.nodes[cur.0].parent {
            path.push(p);
            cur = p;
        }
        path
    }

    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            for c in self.nodes[n.0].children.iter().rev() {
                stack.push(*c);
            }
        }
        out
    }
}

impl Document for PageDoc {
    fn candidates(&self, attr: &str) -> Vec<NodeId> {
        let attr = attr.to_ascii_lowercase();
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.nodes[id.0].attrs.iter().any(|(k, _)| *k == attr))
            .collect()
    }

    fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.get(id)?
            .attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let tag = tag.to_ascii_lowercase();
        let mut cur = Some(id);
        while let Some(n) = cur {
            if self.nodes[n.0].tag == tag {
                return Some(n);
            }
            cur = self.nodes[n.0].parent;
        }
        None
    }

    fn find_input(&self, container: NodeId, placeholder: &str) -> Option<NodeId> {
        self.descendants(container).into_iter().find(|n| {
            self.nodes[n.0].tag == "input"
                && self.attr(*n, "placeholder") == Some(placeholder)
        })
    }

    fn value(&self, id: NodeId) -> &str {
        &self.nodes[id.0].value
    }

    fn set_value_raw(&mut self, id: NodeId, text: &str) -> Result<(), WriteError> {
        let node = self.nodes.get_mut(id.0).ok_or(WriteError::Stale)?;
        if node.read_only {
            return Err(WriteError::ReadOnly);
        }
        node.value = s!(text);
        Ok(())
    }

    fn notify(&mut self, id: NodeId, notice: Notice) -> Result<(), WriteError> {
        if self.get(id).is_none() {
            return Err(WriteError::Stale);
        }
        let path = self.bubble_path(id);
        self.dispatches.push(Dispatch { target: id, notice, path });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_doc() -> (PageDoc, NodeId, NodeId, NodeId) {
        let mut doc = PageDoc::new();
        let th = doc.add("th", &[], None);
        let span = doc.add("span", &[("title", "AVG")], Some(th));
        let div = doc.add("div", &[], Some(th));
        let input = doc.add(
            "input",
            &[("placeholder", "Please enter a description")],
            Some(div),
        );
        (doc, th, span, input)
    }

    #[test]
    fn closest_walks_ancestors_including_self() {
        let (doc, th, span, input) = small_doc();
        assert_eq!(doc.closest(span, "th"), Some(th));
        assert_eq!(doc.closest(th, "th"), Some(th));
        assert_eq!(doc.closest(input, "table"), None);
    }

    #[test]
    fn find_input_searches_nested_descendants() {
        let (doc, th, _, input) = small_doc();
        assert_eq!(doc.find_input(th, "Please enter a description"), Some(input));
        assert_eq!(doc.find_input(th, "something else"), None);
    }

    #[test]
    fn notify_records_full_bubble_path() {
        let (mut doc, th, _, input) = small_doc();
        doc.notify(input, Notice::Input).unwrap();
        let d = &doc.dispatches()[0];
        assert_eq!(d.path.first(), Some(&input));
        assert!(d.path.contains(&th));
    }

    #[test]
    fn readonly_input_rejects_raw_write() {
        let mut doc = PageDoc::new();
        let input = doc.add("input", &[("placeholder", "p"), ("readonly", "")], None);
        assert_eq!(doc.set_value_raw(input, "x"), Err(WriteError::ReadOnly));
        assert_eq!(doc.value(input), "");
    }

    #[test]
    fn value_attribute_seeds_initial_value() {
        let mut doc = PageDoc::new();
        let input = doc.add("input", &[("value", "old text")], None);
        assert_eq!(doc.value(input), "old text");
    }
}
