//! JSON converter
//!
//! `obj`, `arr`, `prop[key]` and typed leaves `str{}`/`num{}`/`bool{}`/`null`.
//! Members and array items join with `+` under their container.

use indexmap::IndexMap;

use super::{children_group, Converter, Format};
use crate::config::EmmetConfig;
use crate::core::text::{braced, escape_json};
use crate::core::{SubstitutionMap, TokenAllocator};
use crate::dom::{JsonNode, JsonNodeKind, JsonNodePool, JsonValueType, NodeId, NodePool};
use crate::error::{EmmetError, Result};

/// Token -> original maps of a JSON conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonConverterMaps {
    /// Token -> property key
    pub keys: IndexMap<String, String>,
    /// Token -> long string value
    pub values: IndexMap<String, String>,
}

/// JSON node pool to notation converter
pub struct JsonConverter<'c> {
    config: &'c EmmetConfig,
    allocator: TokenAllocator,
    keys: SubstitutionMap,
    values: SubstitutionMap,
}

impl<'c> JsonConverter<'c> {
    pub fn new(config: &'c EmmetConfig) -> Self {
        Self::with_allocator(config, TokenAllocator::new())
    }

    pub fn with_allocator(config: &'c EmmetConfig, allocator: TokenAllocator) -> Self {
        JsonConverter {
            config,
            allocator,
            keys: SubstitutionMap::new("keys"),
            values: SubstitutionMap::new("values"),
        }
    }

    fn simplify_key(&mut self, key: &str) -> Result<String> {
        if !self.config.json.simplify_keys {
            return Ok(key.to_string());
        }
        self.keys.substitute(key.to_string(), key, &mut self.allocator)
    }

    fn simplify_string(&mut self, value: &str) -> Result<String> {
        let json = &self.config.json;
        if json.simplify_long_strings && value.chars().count() > json.string_length_threshold {
            return self
                .values
                .substitute(value.to_string(), value, &mut self.allocator);
        }
        Ok(value.to_string())
    }

    fn node_to_emmet(&mut self, node: &JsonNode) -> Result<String> {
        Ok(match &node.kind {
            JsonNodeKind::Object => "obj".to_string(),
            JsonNodeKind::Array => "arr".to_string(),
            JsonNodeKind::Property { key } => format!("prop[{}]", self.simplify_key(key)?),
            JsonNodeKind::Value { value, value_type } => match value_type {
                JsonValueType::String => braced("str", &escape_json(&self.simplify_string(value)?)),
                JsonValueType::Number => braced("num", value),
                JsonValueType::Boolean => braced("bool", value),
                JsonValueType::Null => "null".to_string(),
            },
        })
    }
}

impl<'c> Converter for JsonConverter<'c> {
    type Pool = JsonNodePool;
    type Maps = JsonConverterMaps;

    const FORMAT: Format = Format::Json;

    fn config(&self) -> &EmmetConfig {
        self.config
    }

    fn build_emmet(&mut self, pool: &JsonNodePool, id: NodeId, level: usize) -> Result<String> {
        let node = pool.get_node(id).ok_or_else(|| EmmetError::missing_node(id))?;
        let node_emmet = self.node_to_emmet(node)?;

        let mut rendered = Vec::with_capacity(node.children.len());
        for child_id in &node.children {
            rendered.push(self.build_emmet(pool, *child_id, level + 1)?);
        }

        Ok(format!(
            "{}{}{}",
            self.config.indent_for(level),
            node_emmet,
            children_group(self.config, rendered)
        ))
    }

    fn into_maps(self) -> JsonConverterMaps {
        JsonConverterMaps {
            keys: self.keys.reversed(),
            values: self.values.reversed(),
        }
    }
}
