//! Tree-to-notation converters
//!
//! Every format shares one shape: render roots in document order, join
//! them with `+`, and hand back the reversible maps built on the way.
//! Formats only supply `build_emmet` (one subtree) and their maps.

pub mod html;
pub mod json;
pub mod priority;
pub mod xml;

use crate::config::EmmetConfig;
use crate::dom::{HtmlNodePool, JsonNodePool, NodeId, NodePool, XmlNodePool};
use crate::error::Result;

pub use html::{HtmlConverter, HtmlConverterMaps};
pub use json::{JsonConverter, JsonConverterMaps};
pub use priority::AttributePriorityFilter;
pub use xml::{XmlConverter, XmlConverterMaps};

/// Notation plus the token -> original maps of one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult<M> {
    pub result: String,
    pub maps: M,
}

/// Shared converter shape
pub trait Converter: Sized {
    type Pool: NodePool;
    type Maps;

    const FORMAT: Format;

    fn config(&self) -> &EmmetConfig;

    /// Render one subtree; an empty string means the node contributes nothing
    fn build_emmet(&mut self, pool: &Self::Pool, id: NodeId, level: usize) -> Result<String>;

    /// Token -> original maps accumulated so far
    fn into_maps(self) -> Self::Maps;

    /// Render every root and join them with the sibling separator
    fn convert_roots(&mut self, pool: &Self::Pool) -> Result<String> {
        let mut parts = Vec::new();
        for root in pool.root_ids() {
            let emmet = self.build_emmet(pool, root, 0)?;
            if !emmet.is_empty() {
                parts.push(emmet);
            }
        }
        Ok(parts.join(self.config().sibling_separator()))
    }

    /// Convert a whole pool, consuming the converter and its allocator
    fn convert(mut self, pool: &Self::Pool) -> Result<ConversionResult<Self::Maps>> {
        let config = self.config();
        if config.debug {
            tracing::debug!(format = ?Self::FORMAT, tree = %pool.debug_tree(), "node pool");
        }
        tracing::debug!(
            format = ?Self::FORMAT,
            nodes = pool.node_count(),
            roots = pool.root_ids().len(),
            "converting"
        );
        let result = self.convert_roots(pool)?;
        tracing::debug!(format = ?Self::FORMAT, length = result.len(), "converted");
        Ok(ConversionResult {
            result,
            maps: self.into_maps(),
        })
    }
}

/// Join rendered children under their parent
///
/// Empty renderings are dropped so skipped nodes never leave a stray `+`.
/// Returns an empty string, or the descend operator followed by the group.
pub(crate) fn children_group(config: &EmmetConfig, rendered: Vec<String>) -> String {
    let parts: Vec<String> = rendered.into_iter().filter(|s| !s.is_empty()).collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(
            "{}{}",
            config.descend_operator(),
            parts.join(config.sibling_separator())
        )
    }
}

/// Input format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Html,
    Json,
    Xml,
}

impl Format {
    /// Format by name; unknown names fall back to HTML
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => Format::Json,
            "xml" => Format::Xml,
            _ => Format::Html,
        }
    }
}

/// A populated node pool of any format
#[derive(Debug, Clone)]
pub enum Document {
    Html(HtmlNodePool),
    Json(JsonNodePool),
    Xml(XmlNodePool),
}

impl Document {
    pub fn format(&self) -> Format {
        match self {
            Document::Html(_) => Format::Html,
            Document::Json(_) => Format::Json,
            Document::Xml(_) => Format::Xml,
        }
    }
}

/// Maps of a conversion, tagged by format
#[derive(Debug, Clone, PartialEq)]
pub enum ConverterMaps {
    Html(HtmlConverterMaps),
    Json(JsonConverterMaps),
    Xml(XmlConverterMaps),
}

/// Result of `emmetify`
#[derive(Debug, Clone, PartialEq)]
pub struct EmmetOutput {
    pub result: String,
    pub maps: ConverterMaps,
}

pub fn convert_html(
    pool: &HtmlNodePool,
    config: &EmmetConfig,
) -> Result<ConversionResult<HtmlConverterMaps>> {
    HtmlConverter::new(config).convert(pool)
}

pub fn convert_json(
    pool: &JsonNodePool,
    config: &EmmetConfig,
) -> Result<ConversionResult<JsonConverterMaps>> {
    JsonConverter::new(config).convert(pool)
}

pub fn convert_xml(
    pool: &XmlNodePool,
    config: &EmmetConfig,
) -> Result<ConversionResult<XmlConverterMaps>> {
    XmlConverter::new(config).convert(pool)
}

/// Convert any document with a fresh converter and allocator
pub fn emmetify(document: &Document, config: &EmmetConfig) -> Result<EmmetOutput> {
    let (result, maps) = match document {
        Document::Html(pool) => {
            let out = convert_html(pool, config)?;
            (out.result, ConverterMaps::Html(out.maps))
        }
        Document::Json(pool) => {
            let out = convert_json(pool, config)?;
            (out.result, ConverterMaps::Json(out.maps))
        }
        Document::Xml(pool) => {
            let out = convert_xml(pool, config)?;
            (out.result, ConverterMaps::Xml(out.maps))
        }
    };
    Ok(EmmetOutput { result, maps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Attributes;
    use serde_json::json;

    #[test]
    fn test_format_from_name() {
        assert_eq!(Format::from_name("JSON"), Format::Json);
        assert_eq!(Format::from_name("xml"), Format::Xml);
        assert_eq!(Format::from_name("yaml"), Format::Html);
        assert_eq!(Format::default(), Format::Html);
    }

    #[test]
    fn test_children_group() {
        let mut config = EmmetConfig::default();
        assert_eq!(children_group(&config, vec![]), "");
        assert_eq!(
            children_group(&config, vec!["a".into(), String::new(), "b".into()]),
            ">a+b"
        );
        config.indent = true;
        assert_eq!(children_group(&config, vec!["a".into(), "b".into()]), ">\na+\nb");
    }

    #[test]
    fn test_emmetify_dispatch() {
        let config = EmmetConfig::default();

        let mut html = HtmlNodePool::new();
        html.create_root_element("hr", Attributes::new());
        let out = emmetify(&Document::Html(html), &config).unwrap();
        assert_eq!(out.result, "hr");
        assert!(matches!(out.maps, ConverterMaps::Html(_)));

        let json = JsonNodePool::from_value(&json!([1])).unwrap();
        let doc = Document::Json(json);
        assert_eq!(doc.format(), Format::Json);
        assert_eq!(emmetify(&doc, &config).unwrap().result, "arr>num{1}");

        let mut xml = XmlNodePool::new();
        xml.create_root_element("root", Attributes::new());
        assert_eq!(emmetify(&Document::Xml(xml), &config).unwrap().result, "root");
    }

    #[test]
    fn test_empty_pool() {
        let config = EmmetConfig::default();
        let out = convert_html(&HtmlNodePool::new(), &config).unwrap();
        assert_eq!(out.result, "");
        assert!(out.maps.classes.is_empty());
    }

    #[test]
    fn test_roots_joined() {
        let mut pool = HtmlNodePool::new();
        pool.create_root_element("header", Attributes::new());
        pool.create_root_element("main", Attributes::new());

        let config = EmmetConfig::default();
        assert_eq!(convert_html(&pool, &config).unwrap().result, "header+main");

        let config = EmmetConfig {
            indent: true,
            ..EmmetConfig::default()
        };
        assert_eq!(convert_html(&pool, &config).unwrap().result, "header+\nmain");
    }

    #[test]
    fn test_out_of_range_indent_is_clamped() {
        let mut pool = HtmlNodePool::new();
        let div = pool.create_root_element("div", Attributes::new());
        let p = pool.create_element("p", Attributes::new());
        pool.update_parent_child(p, div).unwrap();

        let wide = EmmetConfig {
            indent: true,
            indent_size: 40,
            ..EmmetConfig::default()
        };
        assert_eq!(convert_html(&pool, &wide).unwrap().result, "div>\n        p");

        let zero = EmmetConfig {
            indent_size: 0,
            ..wide.clone()
        };
        assert_eq!(convert_html(&pool, &zero).unwrap().result, "div>\n p");

        let huge = EmmetConfig {
            indent_size: usize::MAX,
            ..wide
        };
        let out = emmetify(&Document::Html(pool), &huge).unwrap();
        assert_eq!(out.result, "div>\n        p");
    }
}
