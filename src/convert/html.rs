//! HTML converter
//!
//! `tag#id.class[attrs]{text}` per element, `>` into children, `+`
//! between siblings. An element that has element siblings and its own
//! descendant group is wrapped in parentheses so the next `+sibling`
//! attaches at the right depth.

use indexmap::IndexMap;

use super::priority::AttributePriorityFilter;
use super::{children_group, Converter, Format};
use crate::config::EmmetConfig;
use crate::core::text::{braced, escape_text, render_attribute_list};
use crate::core::{SubstitutionMap, TokenAllocator};
use crate::dom::{Attributes, HtmlNode, HtmlNodePool, NodeId, NodePool};
use crate::error::{EmmetError, Result};

/// Token -> original maps of an HTML conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlConverterMaps {
    /// Token -> space-joined class list
    pub classes: IndexMap<String, String>,
    /// Token -> `href` (absolute and relative links share one map)
    pub links: IndexMap<String, String>,
    /// Token -> `src`
    pub images: IndexMap<String, String>,
}

/// HTML node pool to notation converter
pub struct HtmlConverter<'c> {
    config: &'c EmmetConfig,
    priority_filter: AttributePriorityFilter<'c>,
    allocator: TokenAllocator,
    classes: SubstitutionMap,
    links: SubstitutionMap,
    images: SubstitutionMap,
}

impl<'c> HtmlConverter<'c> {
    pub fn new(config: &'c EmmetConfig) -> Self {
        Self::with_allocator(config, TokenAllocator::new())
    }

    pub fn with_allocator(config: &'c EmmetConfig, allocator: TokenAllocator) -> Self {
        HtmlConverter {
            config,
            priority_filter: AttributePriorityFilter::new(&config.html.attributes_priority),
            allocator,
            classes: SubstitutionMap::new("classes"),
            links: SubstitutionMap::new("links"),
            images: SubstitutionMap::new("images"),
        }
    }

    fn is_skipped(&self, node: &HtmlNode) -> bool {
        !node.is_text_node
            && self.config.html.skip_tags
            && self.config.html.tags_to_skip.contains(&node.tag)
    }

    fn node_to_emmet(&mut self, node: &HtmlNode) -> Result<String> {
        if node.is_text_node {
            return Ok(braced("", &escape_text(node.text_content.as_deref().unwrap_or(""))));
        }
        let html = &self.config.html;

        let mut attrs: Attributes = if html.prioritize_attributes {
            self.priority_filter.filter_attributes(&node.attrs)
        } else {
            node.attrs.clone()
        };

        let mut out = node.tag.clone();

        if let Some(id) = attrs.get("id").filter(|v| !v.is_empty()) {
            out.push('#');
            out.push_str(id);
        }

        if let Some(class) = attrs.get("class") {
            let classes: Vec<&str> = class.split_whitespace().collect();
            if !classes.is_empty() {
                if html.simplify_classes {
                    let joined = classes.join(" ");
                    let token = self
                        .classes
                        .substitute(joined.clone(), &joined, &mut self.allocator)?;
                    out.push('.');
                    out.push_str(&token);
                } else {
                    out.push('.');
                    out.push_str(&classes.join("."));
                }
            }
        }

        if node.tag == "a" {
            if let Some(href) = attrs.get("href").filter(|v| !v.is_empty()).cloned() {
                let absolute = href.starts_with("http");
                if (absolute && html.simplify_absolute_links)
                    || (!absolute && html.simplify_relative_links)
                {
                    let token = self.links.substitute(href.clone(), &href, &mut self.allocator)?;
                    attrs.insert("href".to_string(), token);
                }
            }
        }

        if node.tag == "img" && html.simplify_images {
            if let Some(src) = attrs.get("src").filter(|v| !v.is_empty()).cloned() {
                let token = self.images.substitute(src.clone(), &src, &mut self.allocator)?;
                attrs.insert("src".to_string(), token);
            }
        }

        let remaining = attrs
            .iter()
            .filter(|(k, _)| k.as_str() != "id" && k.as_str() != "class")
            .filter(|(_, v)| !(html.skip_empty_attributes && v.is_empty()))
            .map(|(k, v)| (k.as_str(), v.as_str()));
        out.push_str(&render_attribute_list(remaining));

        Ok(out)
    }

    /// Element siblings that will actually be rendered
    fn rendered_siblings(&self, pool: &HtmlNodePool, node: &HtmlNode) -> usize {
        if !self.config.html.skip_tags {
            return pool.siblings_count(node.id);
        }
        let Some(parent) = node.parent else {
            return 0;
        };
        pool.children_of(parent)
            .iter()
            .filter(|id| **id != node.id)
            .filter_map(|id| pool.get_node(*id))
            .filter(|n| !n.is_text_node && !self.is_skipped(n))
            .count()
    }
}

impl<'c> Converter for HtmlConverter<'c> {
    type Pool = HtmlNodePool;
    type Maps = HtmlConverterMaps;

    const FORMAT: Format = Format::Html;

    fn config(&self) -> &EmmetConfig {
        self.config
    }

    fn build_emmet(&mut self, pool: &HtmlNodePool, id: NodeId, level: usize) -> Result<String> {
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
            if index == 0 && child.is_text_node {
                text_emmet = self.node_to_emmet(child)?;
            } else {
                rendered.push(self.build_emmet(pool, *child_id, level + 1)?);
            }
        }
        let group = children_group(self.config, rendered);

        let own = format!("{}{}{}", node_emmet, text_emmet, group);
        let grouped = if !group.is_empty() && self.rendered_siblings(pool, node) > 0 {
            format!("({})", own)
        } else {
            own
        };
        Ok(format!("{}{}", self.config.indent_for(level), grouped))
    }

    fn into_maps(self) -> HtmlConverterMaps {
        HtmlConverterMaps {
            classes: self.classes.reversed(),
            links: self.links.reversed(),
            images: self.images.reversed(),
        }
    }
}
