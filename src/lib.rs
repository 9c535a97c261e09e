//! Emmetify - Compact Emmet-style notation for parsed documents
//!
//! Formats:
//! HTML: `div#main.card>p{Hello}+a[href=/next]{More}`
//! JSON: `obj>prop[name]>str{Ada}`
//! XML:  `ns\:feed>entry#1>title{News}`
//!
//! Verbose values (classes, links, images, JSON keys and long strings,
//! XML namespaces and long attributes) can be swapped for short
//! placeholder tokens. Every conversion returns the token -> original
//! maps, and the `xpath` module uses them to rewrite XPaths authored
//! against the notation so they address the original document.
//!
//! Parsing raw markup into a node pool happens outside this crate.

pub mod config;
pub mod convert;
pub mod core;
pub mod dom;
pub mod error;
pub mod xpath;

pub use config::{AttributesPriority, EmmetConfig, HtmlConfig, JsonConfig, XmlConfig};
pub use convert::{
    convert_html, convert_json, convert_xml, emmetify, ConversionResult, Converter,
    ConverterMaps, Document, EmmetOutput, Format, HtmlConverter, HtmlConverterMaps,
    JsonConverter, JsonConverterMaps, XmlConverter, XmlConverterMaps,
};
pub use dom::{
    Attributes, HtmlNodePool, JsonNodePool, JsonValueType, NodeId, NodePool, XmlNodePool,
};
pub use error::{EmmetError, Result};
pub use xpath::{
    restore_classes_in_xpath, restore_images_in_xpath, restore_links_in_xpath,
    restore_xpath_from_html_maps, XPathAttributeRestorer,
};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
