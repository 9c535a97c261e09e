//! XPath attribute restorer
//!
//! Rewrites placeholder literals in attribute predicates back to the
//! values they stand for, so an XPath written against the notation
//! addresses the original document. Literal substitution only; the
//! expression is never parsed beyond step and predicate boundaries.

use std::num::NonZeroUsize;
use std::rc::Rc;

use indexmap::IndexMap;
use lru::LruCache;

use super::lexer::{parse_node_test, split_steps};
use super::patterns::PredicatePatterns;
use crate::convert::HtmlConverterMaps;
use crate::error::Result;

/// Compiled batteries kept per restorer
const DEFAULT_CACHE_CAPACITY: usize = 16;

/// XPath attribute restorer
pub struct XPathAttributeRestorer {
    cache: LruCache<String, Rc<PredicatePatterns>>,
}

impl XPathAttributeRestorer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        XPathAttributeRestorer {
            cache: LruCache::new(capacity),
        }
    }

    /// Number of compiled batteries currently cached
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn patterns(&mut self, attr: &str) -> Result<Rc<PredicatePatterns>> {
        let key = attr.to_ascii_lowercase();
        if let Some(patterns) = self.cache.get(&key) {
            return Ok(Rc::clone(patterns));
        }
        let patterns = Rc::new(PredicatePatterns::for_attribute(attr)?);
        self.cache.put(key, Rc::clone(&patterns));
        Ok(patterns)
    }

    /// Replace tokens in `attr` predicates with their originals
    ///
    /// `tag` limits the rewrite to steps whose node test matches it; `None`
    /// rewrites every step. Steps without a matching predicate, and literals
    /// absent from `map`, pass through untouched.
    pub fn restore_attribute(
        &mut self,
        xpath: &str,
        tag: Option<&str>,
        attr: &str,
        map: &IndexMap<String, String>,
    ) -> Result<String> {
        if map.is_empty() {
            return Ok(xpath.to_string());
        }
        let patterns = self.patterns(attr)?;
        let lookup = |literal: &str| map.get(literal).map(String::as_str);

        let mut out = String::with_capacity(xpath.len());
        for step in split_steps(xpath) {
            out.push_str(step.separator);

            let test = parse_node_test(step.text);
            let matches_tag = tag.map_or(true, |t| test.name.eq_ignore_ascii_case(t));
            let (head, predicates) = step.text.split_at(test.predicate_start);

            out.push_str(head);
            if matches_tag && !predicates.is_empty() {
                out.push_str(&patterns.substitute(predicates, lookup));
            } else {
                out.push_str(predicates);
            }
        }
        Ok(out)
    }
}

impl Default for XPathAttributeRestorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Restore class tokens in predicates on any element
pub fn restore_classes_in_xpath(xpath: &str, classes: &IndexMap<String, String>) -> Result<String> {
    XPathAttributeRestorer::new().restore_attribute(xpath, None, "class", classes)
}

/// Restore `href` tokens on `a` steps
pub fn restore_links_in_xpath(xpath: &str, links: &IndexMap<String, String>) -> Result<String> {
    XPathAttributeRestorer::new().restore_attribute(xpath, Some("a"), "href", links)
}

/// Restore `src` tokens on `img` steps
pub fn restore_images_in_xpath(xpath: &str, images: &IndexMap<String, String>) -> Result<String> {
    XPathAttributeRestorer::new().restore_attribute(xpath, Some("img"), "src", images)
}

/// Restore classes, links and images from one HTML conversion
pub fn restore_xpath_from_html_maps(xpath: &str, maps: &HtmlConverterMaps) -> Result<String> {
    let mut restorer = XPathAttributeRestorer::new();
    let xpath = restorer.restore_attribute(xpath, None, "class", &maps.classes)?;
    let xpath = restorer.restore_attribute(&xpath, Some("a"), "href", &maps.links)?;
    restorer.restore_attribute(&xpath, Some("img"), "src", &maps.images)
}
