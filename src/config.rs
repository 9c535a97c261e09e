//! Conversion configuration
//!
//! All structs deserialize from partial camelCase JSON documents; missing
//! fields take the defaults below.

use indexmap::IndexSet;
use serde::Deserialize;

use crate::error::{EmmetError, Result};

/// Smallest and largest accepted indentation width
pub const MIN_INDENT_SIZE: usize = 1;
pub const MAX_INDENT_SIZE: usize = 8;

/// Length above which JSON strings and XML attribute values count as long
pub const DEFAULT_LENGTH_THRESHOLD: usize = 20;

fn set_of(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Top-level configuration shared by all three converters
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmmetConfig {
    /// Dump the node pool tree at debug level before converting
    pub debug: bool,
    /// Newline-separate siblings and indent nested levels
    pub indent: bool,
    /// Spaces per nesting level, clamped into 1..=8
    pub indent_size: usize,
    pub html: HtmlConfig,
    pub json: JsonConfig,
    pub xml: XmlConfig,
}

impl Default for EmmetConfig {
    fn default() -> Self {
        EmmetConfig {
            debug: false,
            indent: false,
            indent_size: 2,
            html: HtmlConfig::default(),
            json: JsonConfig::default(),
            xml: XmlConfig::default(),
        }
    }
}

impl EmmetConfig {
    /// Deserialize a (possibly partial) JSON configuration and validate it
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: EmmetConfig = serde_json::from_str(input)
            .map_err(|e| EmmetError::Configuration(format!("invalid configuration: {}", e)))?;
        config.validate()
    }

    /// Coerce what can be coerced, reject what cannot
    pub fn validate(mut self) -> Result<Self> {
        let clamped = self.effective_indent_size();
        if clamped != self.indent_size {
            tracing::warn!(
                requested = self.indent_size,
                clamped,
                "indent size out of range, clamping"
            );
            self.indent_size = clamped;
        }
        self.html.attributes_priority.validate()?;
        Ok(self)
    }

    /// Indent width actually used, clamped into 1..=8
    pub fn effective_indent_size(&self) -> usize {
        self.indent_size.clamp(MIN_INDENT_SIZE, MAX_INDENT_SIZE)
    }

    /// Indentation prefix for a nesting level, empty when indentation is off
    pub(crate) fn indent_for(&self, level: usize) -> String {
        if self.indent {
            " ".repeat(self.effective_indent_size() * level)
        } else {
            String::new()
        }
    }

    /// Separator placed between sibling notations
    pub(crate) fn sibling_separator(&self) -> &'static str {
        if self.indent {
            "+\n"
        } else {
            "+"
        }
    }

    /// Operator placed before a non-empty children group
    pub(crate) fn descend_operator(&self) -> &'static str {
        if self.indent {
            ">\n"
        } else {
            ">"
        }
    }

    /// Aggressive HTML preset: tag skipping, attribute priority, class,
    /// image and absolute link simplification
    pub fn compact_html() -> Self {
        let mut config = EmmetConfig::default();
        config.html.skip_tags = true;
        config.html.prioritize_attributes = true;
        config.html.simplify_classes = true;
        config.html.simplify_images = true;
        config.html.simplify_absolute_links = true;
        config.html.simplify_relative_links = false;
        config
    }

    /// Aggressive JSON preset: key and long string simplification
    pub fn compact_json() -> Self {
        let mut config = EmmetConfig::default();
        config.json.simplify_keys = true;
        config.json.simplify_long_strings = true;
        config.json.compact_arrays = true;
        config.json.compact_objects = true;
        config
    }

    /// Aggressive XML preset: namespace and long attribute simplification,
    /// comments dropped
    pub fn compact_xml() -> Self {
        let mut config = EmmetConfig::default();
        config.xml.simplify_namespaces = true;
        config.xml.simplify_long_attributes = true;
        config.xml.skip_comments = true;
        config
    }
}

/// Attribute tiers used by the HTML priority filter
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributesPriority {
    pub primary_attrs: IndexSet<String>,
    pub secondary_attrs: IndexSet<String>,
    pub ignore_attrs: IndexSet<String>,
}

impl Default for AttributesPriority {
    fn default() -> Self {
        AttributesPriority {
            primary_attrs: set_of(&["id", "class", "href", "role", "aria-label", "title"]),
            secondary_attrs: set_of(&["name", "type", "value", "placeholder", "alt", "for"]),
            ignore_attrs: set_of(&[
                "style", "target", "rel", "loading", "srcset", "sizes", "width", "height",
            ]),
        }
    }
}

impl AttributesPriority {
    fn validate(&self) -> Result<()> {
        let kept = self.primary_attrs.iter().chain(self.secondary_attrs.iter());
        for name in kept {
            if self.ignore_attrs.contains(name) {
                return Err(EmmetError::Configuration(format!(
                    "attribute '{}' is both prioritized and ignored",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HtmlConfig {
    pub simplify_classes: bool,
    pub simplify_images: bool,
    pub simplify_absolute_links: bool,
    pub simplify_relative_links: bool,
    pub skip_tags: bool,
    pub skip_empty_attributes: bool,
    pub prioritize_attributes: bool,
    pub tags_to_skip: IndexSet<String>,
    pub attributes_priority: AttributesPriority,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        HtmlConfig {
            simplify_classes: false,
            simplify_images: false,
            simplify_absolute_links: false,
            simplify_relative_links: false,
            skip_tags: false,
            skip_empty_attributes: false,
            prioritize_attributes: false,
            tags_to_skip: set_of(&[
                "script", "style", "noscript", "head", "meta", "link", "title", "base", "svg",
            ]),
            attributes_priority: AttributesPriority::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonConfig {
    pub simplify_keys: bool,
    pub simplify_long_strings: bool,
    pub string_length_threshold: usize,
    /// Accepted for compatibility; rendering does not change
    pub compact_arrays: bool,
    /// Accepted for compatibility; rendering does not change
    pub compact_objects: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        JsonConfig {
            simplify_keys: false,
            simplify_long_strings: false,
            string_length_threshold: DEFAULT_LENGTH_THRESHOLD,
            compact_arrays: false,
            compact_objects: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XmlConfig {
    pub simplify_namespaces: bool,
    pub simplify_long_attributes: bool,
    pub attribute_length_threshold: usize,
    pub skip_comments: bool,
    pub skip_tags: bool,
    #[serde(rename = "preserveCData")]
    pub preserve_cdata: bool,
    pub tags_to_skip: IndexSet<String>,
}

impl Default for XmlConfig {
    fn default() -> Self {
        XmlConfig {
            simplify_namespaces: false,
            simplify_long_attributes: false,
            attribute_length_threshold: DEFAULT_LENGTH_THRESHOLD,
            skip_comments: false,
            skip_tags: false,
            preserve_cdata: true,
            tags_to_skip: set_of(&["xsl:stylesheet", "xsl:template", "xs:schema"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EmmetConfig::default();
        assert!(!config.indent);
        assert_eq!(config.indent_size, 2);
        assert_eq!(config.json.string_length_threshold, 20);
        assert!(config.xml.preserve_cdata);
        assert!(config.html.tags_to_skip.contains("script"));
        assert!(config.html.attributes_priority.primary_attrs.contains("aria-label"));
    }

    #[test]
    fn test_partial_json() {
        let config = EmmetConfig::from_json_str(concat!(
            r#"{"indent": true, "html": {"simplifyClasses": true}, "#,
            r#""xml": {"preserveCData": false}}"#
        ))
        .unwrap();
        assert!(config.indent);
        assert!(config.html.simplify_classes);
        assert!(!config.html.simplify_images);
        assert!(!config.xml.preserve_cdata);
        assert!(config.html.tags_to_skip.contains("svg"));
    }

    #[test]
    fn test_indent_size_is_clamped() {
        let config = EmmetConfig::from_json_str(r#"{"indentSize": 40}"#).unwrap();
        assert_eq!(config.indent_size, MAX_INDENT_SIZE);

        let config = EmmetConfig {
            indent_size: 0,
            ..EmmetConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.indent_size, MIN_INDENT_SIZE);
    }

    #[test]
    fn test_indent_prefix_clamped_without_validate() {
        let wide = EmmetConfig {
            indent: true,
            indent_size: 40,
            ..EmmetConfig::default()
        };
        assert_eq!(wide.indent_for(1), " ".repeat(MAX_INDENT_SIZE));

        let huge = EmmetConfig {
            indent_size: usize::MAX,
            ..wide.clone()
        };
        assert_eq!(huge.indent_for(2).len(), 2 * MAX_INDENT_SIZE);

        let zero = EmmetConfig {
            indent_size: 0,
            ..wide
        };
        assert_eq!(zero.effective_indent_size(), MIN_INDENT_SIZE);
        assert_eq!(zero.indent_for(1), " ");
    }

    #[test]
    fn test_contradictory_tiers_rejected() {
        let result = EmmetConfig::from_json_str(
            r#"{"html": {"attributesPriority": {"primaryAttrs": ["id", "style"]}}}"#,
        );
        assert!(matches!(result, Err(EmmetError::Configuration(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = EmmetConfig::from_json_str(r#"{"indentSize": "wide"}"#);
        assert!(matches!(result, Err(EmmetError::Configuration(_))));
    }

    #[test]
    fn test_compact_presets() {
        let html = EmmetConfig::compact_html();
        assert!(html.html.prioritize_attributes && html.html.simplify_absolute_links);
        assert!(!html.html.simplify_relative_links);
        assert!(EmmetConfig::compact_json().json.simplify_keys);
        assert!(EmmetConfig::compact_xml().xml.skip_comments);
    }

    #[test]
    fn test_separators() {
        let mut config = EmmetConfig::default();
        assert_eq!(config.sibling_separator(), "+");
        assert_eq!(config.indent_for(3), "");
        config.indent = true;
        config.indent_size = 4;
        assert_eq!(config.descend_operator(), ">\n");
        assert_eq!(config.indent_for(2), "        ");
    }
}
