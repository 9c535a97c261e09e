//! JSON node pool
//!
//! Objects and arrays own their members; every object member is a
//! property node whose single child is the member's value. Leaf values
//! keep their declared type explicitly since notation wrappers depend
//! on it.

use serde_json::Value;

use super::arena::Arena;
use super::node::{NodeId, TreeNode};
use super::NodePool;
use crate::error::Result;

/// Declared type of a leaf value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonValueType {
    String,
    Number,
    Boolean,
    Null,
}

/// Type of JSON node
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNodeKind {
    Object,
    Array,
    /// Object member; the value is the single child
    Property { key: String },
    /// Leaf; `value` is the textual payload (`"1.5"`, `"true"`, `"null"`)
    Value {
        value: String,
        value_type: JsonValueType,
    },
}

#[derive(Debug, Clone)]
pub struct JsonNode {
    pub id: NodeId,
    pub kind: JsonNodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Position inside a parent array
    pub index: Option<usize>,
    pub sequence_index: u32,
}

impl TreeNode for JsonNode {
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
pub struct JsonNodePool {
    arena: Arena<JsonNode>,
}

impl JsonNodePool {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: JsonNodeKind, index: Option<usize>) -> NodeId {
        self.arena.push(|id, sequence_index| JsonNode {
            id,
            kind,
            parent: None,
            children: Vec::new(),
            index,
            sequence_index,
        })
    }

    pub fn create_object(&mut self) -> NodeId {
        self.push(JsonNodeKind::Object, None)
    }

    pub fn create_array(&mut self) -> NodeId {
        self.push(JsonNodeKind::Array, None)
    }

    pub fn create_property(&mut self, key: &str) -> NodeId {
        self.push(
            JsonNodeKind::Property {
                key: key.to_string(),
            },
            None,
        )
    }

    pub fn create_value(&mut self, value: &str, value_type: JsonValueType) -> NodeId {
        self.push(
            JsonNodeKind::Value {
                value: value.to_string(),
                value_type,
            },
            None,
        )
    }

    pub fn mark_root(&mut self, id: NodeId) -> Result<()> {
        self.arena.mark_root(id)
    }

    pub fn update_parent_child(&mut self, child_id: NodeId, parent_id: NodeId) -> Result<()> {
        self.arena.attach(child_id, parent_id).map(|_| ())
    }

    /// Build a pool from an already parsed JSON value
    ///
    /// The top-level value becomes the single root. Object member order
    /// follows the value's own map order.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut pool = JsonNodePool::new();
        let root = pool.insert_value(value, None, None)?;
        pool.mark_root(root)?;
        Ok(pool)
    }

    fn insert_value(
        &mut self,
        value: &Value,
        parent: Option<NodeId>,
        index: Option<usize>,
    ) -> Result<NodeId> {
        let (kind, members) = match value {
            Value::Null => (leaf("null", JsonValueType::Null), None),
            Value::Bool(b) => (leaf(&b.to_string(), JsonValueType::Boolean), None),
            Value::Number(n) => (leaf(&n.to_string(), JsonValueType::Number), None),
            Value::String(s) => (leaf(s, JsonValueType::String), None),
            Value::Array(_) => (JsonNodeKind::Array, Some(value)),
            Value::Object(_) => (JsonNodeKind::Object, Some(value)),
        };
        let id = self.push(kind, index);
        if let Some(parent) = parent {
            self.update_parent_child(id, parent)?;
        }

        match members {
            Some(Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    self.insert_value(item, Some(id), Some(i))?;
                }
            }
            Some(Value::Object(map)) => {
                for (key, member) in map {
                    let property = self.create_property(key);
                    self.update_parent_child(property, id)?;
                    self.insert_value(member, Some(property), None)?;
                }
            }
            _ => {}
        }
        Ok(id)
    }
}

fn leaf(value: &str, value_type: JsonValueType) -> JsonNodeKind {
    JsonNodeKind::Value {
        value: value.to_string(),
        value_type,
    }
}

impl NodePool for JsonNodePool {
    type Node = JsonNode;

    fn get_node(&self, id: NodeId) -> Option<&JsonNode> {
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
        match self.arena.get(id).map(|n| &n.kind) {
            Some(JsonNodeKind::Object) => "{}".to_string(),
            Some(JsonNodeKind::Array) => "[]".to_string(),
            Some(JsonNodeKind::Property { key }) => format!("\"{}\": ...", key),
            Some(JsonNodeKind::Value {
                value,
                value_type: JsonValueType::String,
            }) => format!("\"{}\"", value),
            Some(JsonNodeKind::Value { value, .. }) => value.clone(),
            None => String::new(),
        }
    }
}
