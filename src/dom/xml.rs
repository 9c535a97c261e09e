//! XML node pool
//!
//! Elements carry an optional namespace prefix split off the qualified
//! name. Text, CDATA and comment nodes hold trimmed payloads.

use super::arena::Arena;
use super::node::{Attributes, NodeId, TreeNode};
use super::NodePool;
use crate::error::Result;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlNodeKind {
    /// Element node
    Element,
    /// Text content
    Text,
    /// CDATA section
    CData,
    /// Comment
    Comment,
    /// Processing instruction (has no notation)
    ProcessingInstruction,
}

#[derive(Debug, Clone)]
pub struct XmlNode {
    pub id: NodeId,
    pub kind: XmlNodeKind,
    /// Lowercased local name; `#text`, `#cdata`, `#comment` or the PI target otherwise
    pub tag: String,
    /// Lowercased namespace prefix
    pub namespace: Option<String>,
    pub attrs: Attributes,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub text_content: Option<String>,
    pub sequence_index: u32,
}

impl XmlNode {
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == XmlNodeKind::Element
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == XmlNodeKind::Text
    }

    #[inline]
    pub fn is_cdata(&self) -> bool {
        self.kind == XmlNodeKind::CData
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind == XmlNodeKind::Comment
    }

    /// `ns:tag` or `tag`
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}:{}", ns, self.tag),
            None => self.tag.clone(),
        }
    }
}

impl TreeNode for XmlNode {
    fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
    fn children(&self) -> &[NodeId] {
        &self.children
    }
    fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }
    fn sequence_index(&self) -> u32 {
        self.sequence_index
    }
}

#[derive(Debug, Clone, Default)]
pub struct XmlNodePool {
    arena: Arena<XmlNode>,
}

impl XmlNodePool {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(
        kind: XmlNodeKind,
        tag: String,
        namespace: Option<String>,
        attrs: Attributes,
        text_content: Option<String>,
    ) -> impl FnOnce(NodeId, u32) -> XmlNode {
        move |id, sequence_index| XmlNode {
            id,
            kind,
            tag,
            namespace,
            attrs,
            parent: None,
            children: Vec::new(),
            text_content,
            sequence_index,
        }
    }

    fn push(
        &mut self,
        kind: XmlNodeKind,
        tag: String,
        namespace: Option<String>,
        attrs: Attributes,
        text_content: Option<String>,
    ) -> NodeId {
        self.arena.push(Self::node(kind, tag, namespace, attrs, text_content))
    }

    fn element(qualified_name: &str, attrs: Attributes) -> impl FnOnce(NodeId, u32) -> XmlNode {
        let (namespace, local) = match qualified_name.split_once(':') {
            Some((prefix, local)) => (Some(prefix.to_lowercase()), local),
            None => (None, qualified_name),
        };
        Self::node(
            XmlNodeKind::Element,
            local.to_lowercase(),
            namespace,
            attrs,
            None,
        )
    }

    /// Create an element from a qualified name such as `ns:tag`
    pub fn create_element(&mut self, qualified_name: &str, attrs: Attributes) -> NodeId {
        self.arena.push(Self::element(qualified_name, attrs))
    }

    /// Create an element and register it as a root
    pub fn create_root_element(&mut self, qualified_name: &str, attrs: Attributes) -> NodeId {
        self.arena.push_root(Self::element(qualified_name, attrs))
    }

    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.push(
            XmlNodeKind::Text,
            "#text".to_string(),
            None,
            Attributes::new(),
            Some(text.trim().to_string()),
        )
    }

    pub fn create_cdata_node(&mut self, text: &str) -> NodeId {
        self.push(
            XmlNodeKind::CData,
            "#cdata".to_string(),
            None,
            Attributes::new(),
            Some(text.trim().to_string()),
        )
    }

    pub fn create_comment_node(&mut self, text: &str) -> NodeId {
        self.push(
            XmlNodeKind::Comment,
            "#comment".to_string(),
            None,
            Attributes::new(),
            Some(text.trim().to_string()),
        )
    }

    pub fn create_processing_instruction(&mut self, target: &str, data: &str) -> NodeId {
        self.push(
            XmlNodeKind::ProcessingInstruction,
            target.to_string(),
            None,
            Attributes::new(),
            Some(data.trim().to_string()),
        )
    }

    pub fn mark_root(&mut self, id: NodeId) -> Result<()> {
        self.arena.mark_root(id)
    }

    pub fn update_parent_child(&mut self, child_id: NodeId, parent_id: NodeId) -> Result<()> {
        self.arena.attach(child_id, parent_id).map(|_| ())
    }
}

impl NodePool for XmlNodePool {
    type Node = XmlNode;

    fn get_node(&self, id: NodeId) -> Option<&XmlNode> {
        self.arena.get(id)
    }

    fn root_ids(&self) -> Vec<NodeId> {
        self.arena.root_ids()
    }

    fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.arena.children_of(id)
    }

    fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn describe(&self, id: NodeId) -> String {
        let Some(node) = self.arena.get(id) else {
            return String::new();
        };
        let text = node.text_content.as_deref().unwrap_or("");
        match node.kind {
            XmlNodeKind::Text => format!("\"{}\"", text),
            XmlNodeKind::CData => format!("<![CDATA[{}]]>", text),
            XmlNodeKind::Comment => format!("<!-- {} -->", text),
            XmlNodeKind::ProcessingInstruction => format!("<?{} {}?>", node.tag, text),
            XmlNodeKind::Element => {
                let mut out = node.qualified_name();
                if !node.attrs.is_empty() {
                    let attrs: Vec<String> = node
                        .attrs
                        .iter()
                        .map(|(k, v)| format!("{}=\"{}\"", k, v))
                        .collect();
                    out.push_str(&format!("[{}]", attrs.join(" ")));
                }
                out
            }
        }
    }
}
