//! XML converter
//!
//! Like HTML but without sibling grouping: `ns\:tag#id.class[attrs]{text}`,
//! `cdata{}` and `comment{}` payload nodes.

use indexmap::IndexMap;

use super::{children_group, Converter, Format};
use crate::config::EmmetConfig;
use crate::core::text::{braced, escape_text, render_attribute_list};
use crate::core::{SubstitutionMap, TokenAllocator};
use crate::dom::{Attributes, NodeId, NodePool, XmlNode, XmlNodeKind, XmlNodePool};
use crate::error::{EmmetError, Result};

/// Token -> original maps of an XML conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlConverterMaps {
    /// Token -> namespace prefix
    pub namespaces: IndexMap<String, String>,
    /// Token -> (attribute name, original value)
    pub attributes: IndexMap<String, (String, String)>,
}

impl XmlConverterMaps {
    /// Token -> original value for one attribute name
    pub fn attribute_values(&self, name: &str) -> IndexMap<String, String> {
        self.attributes
            .iter()
            .filter(|(_, (attr, _))| attr == name)
            .map(|(token, (_, value))| (token.clone(), value.clone()))
            .collect()
    }
}

/// XML node pool to notation converter
pub struct XmlConverter<'c> {
    config: &'c EmmetConfig,
    allocator: TokenAllocator,
    namespaces: SubstitutionMap,
    attributes: SubstitutionMap<(String, String)>,
}

impl<'c> XmlConverter<'c> {
    pub fn new(config: &'c EmmetConfig) -> Self {
        Self::with_allocator(config, TokenAllocator::new())
    }

    pub fn with_allocator(config: &'c EmmetConfig, allocator: TokenAllocator) -> Self {
        XmlConverter {
            config,
            allocator,
            namespaces: SubstitutionMap::new("namespaces"),
            attributes: SubstitutionMap::new("attributes"),
        }
    }

    fn is_skipped(&self, node: &XmlNode) -> bool {
        let xml = &self.config.xml;
        match node.kind {
            XmlNodeKind::Comment => xml.skip_comments,
            XmlNodeKind::Element if xml.skip_tags => {
                xml.tags_to_skip.contains(&node.qualified_name())
                    || xml.tags_to_skip.contains(&node.tag)
            }
            _ => false,
        }
    }

    fn simplify_attributes(&mut self, attrs: &Attributes) -> Result<Attributes> {
        let xml = &self.config.xml;
        if !xml.simplify_long_attributes {
            return Ok(attrs.clone());
        }
        let threshold = xml.attribute_length_threshold;
        let mut out = Attributes::with_capacity(attrs.len());
        for (name, value) in attrs {
            let value = if value.chars().count() > threshold {
                self.attributes
                    .substitute((name.clone(), value.clone()), value, &mut self.allocator)?
            } else {
                value.clone()
            };
            out.insert(name.clone(), value);
        }
        Ok(out)
    }

    fn node_to_emmet(&mut self, node: &XmlNode) -> Result<String> {
        let payload = || escape_text(node.text_content.as_deref().unwrap_or(""));
        match node.kind {
            XmlNodeKind::Text => return Ok(braced("", &payload())),
            XmlNodeKind::CData if self.config.xml.preserve_cdata => {
                return Ok(braced("cdata", &payload()))
            }
            XmlNodeKind::CData => return Ok(braced("", &payload())),
            XmlNodeKind::Comment => return Ok(braced("comment", &payload())),
            XmlNodeKind::ProcessingInstruction => {
                return Err(EmmetError::structural(
                    node.id,
                    format!("processing instruction <?{}?> has no notation", node.tag),
                ))
            }
            XmlNodeKind::Element => {}
        }

        let mut out = match &node.namespace {
            Some(ns) if self.config.xml.simplify_namespaces => {
                let token = self
                    .namespaces
                    .substitute(ns.clone(), ns, &mut self.allocator)?;
                format!("{}\\:{}", token, node.tag)
            }
            Some(ns) => format!("{}\\:{}", ns, node.tag),
            None => node.tag.clone(),
        };

        let attrs = self.simplify_attributes(&node.attrs)?;

        if let Some(id) = attrs.get("id").filter(|v| !v.is_empty()) {
            out.push('#');
            out.push_str(id);
        }
        if let Some(class) = attrs.get("class") {
            let classes: Vec<&str> = class.split_whitespace().collect();
            if !classes.is_empty() {
                out.push('.');
                out.push_str(&classes.join("."));
            }
        }

        let remaining = attrs
            .iter()
            .filter(|(k, _)| k.as_str() != "id" && k.as_str() != "class")
            .map(|(k, v)| (k.as_str(), v.as_str()));
        out.push_str(&render_attribute_list(remaining));

        Ok(out)
    }
}

impl<'c> Converter for XmlConverter<'c> {
    type Pool = XmlNodePool;
    type Maps = XmlConverterMaps;

    const FORMAT: Format = Format::Xml;

    fn config(&self) -> &EmmetConfig {
        self.config
    }

    fn build_emmet(&mut self, pool: &XmlNodePool, id: NodeId, level: usize) -> Result<String> {
        let node = pool.get_node(id).ok_or_else(|| EmmetError::missing_node(id))?;
        if self.is_skipped(node) {
            return Ok(String::new());
        }

        let node_emmet = self.node_to_emmet(node)?;

        let mut text_emmet = String::new();
        let mut rendered = Vec::with_capacity(node.children.len());
        for (index, child_id) in node.children.iter().enumerate() {
            let child = pool
                .get_node(*child_id)
                .ok_or_else(|| EmmetError::missing_node(*child_id))?;
            if index == 0 && child.is_text() {
                text_emmet = self.node_to_emmet(child)?;
            } else {
                rendered.push(self.build_emmet(pool, *child_id, level + 1)?);
            }
        }

        Ok(format!(
            "{}{}{}{}",
            self.config.indent_for(level),
            node_emmet,
            text_emmet,
            children_group(self.config, rendered)
        ))
    }

    fn into_maps(self) -> XmlConverterMaps {
        XmlConverterMaps {
            namespaces: self.namespaces.reversed(),
            attributes: self.attributes.reversed(),
        }
    }
}
