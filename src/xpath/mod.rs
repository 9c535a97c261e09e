//! XPath placeholder restoration
//!
//! - Step lexer that respects predicates and string literals
//! - Per-attribute battery of predicate matchers
//! - Restorer with an LRU cache of compiled batteries

pub mod lexer;
pub mod patterns;
pub mod restore;

pub use lexer::{parse_node_test, split_steps, NodeTest, Step};
pub use patterns::PredicatePatterns;
pub use restore::{
    restore_classes_in_xpath, restore_images_in_xpath, restore_links_in_xpath,
    restore_xpath_from_html_maps, XPathAttributeRestorer,
};
