//! Property-based tests for conversion and restoration
//!
//! - Conversions are deterministic for a fixed pool and configuration
//! - Every placeholder differs from its original, is unique, and restores
//!   exactly through the XPath restorer
//! - Skipped nodes never leave a dangling separator

use std::collections::HashSet;

use emmetify::dom::attributes;
use emmetify::{
    convert_html, convert_json, convert_xml, restore_classes_in_xpath, Attributes,
    EmmetConfig, HtmlNodePool, JsonNodePool, XmlNodePool,
};
use proptest::prelude::*;
use serde_json::Value;

/// Space-separated class lists built from plain words
fn class_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9-]{0,8}", 1..4).prop_map(|words| words.join(" "))
}

/// `(tag, class list)` children of one root element
fn html_children_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop_oneof![Just("div"), Just("p"), Just("span"), Just("script"), Just("li")]
                .prop_map(String::from),
            class_list_strategy(),
        ),
        0..12,
    )
}

fn html_pool(children: &[(String, String)]) -> HtmlNodePool {
    let mut pool = HtmlNodePool::new();
    let root = pool.create_root_element("main", Attributes::new());
    for (i, (tag, class)) in children.iter().enumerate() {
        let el = pool.create_element(tag, attributes([("class", class.as_str())]));
        pool.update_parent_child(el, root).unwrap();
        if i % 2 == 0 {
            let text = pool.create_text_node(&format!("item {}", i));
            pool.update_parent_child(text, el).unwrap();
        }
    }
    pool
}

/// XML children: `true` for a comment, `false` for an element
fn xml_pool(kinds: &[bool]) -> XmlNodePool {
    let mut pool = XmlNodePool::new();
    let root = pool.create_root_element("doc", Attributes::new());
    for (i, is_comment) in kinds.iter().enumerate() {
        let id = if *is_comment {
            pool.create_comment_node(&format!("note {}", i))
        } else {
            pool.create_element("entry", Attributes::new())
        };
        pool.update_parent_child(id, root).unwrap();
    }
    pool
}

fn has_dangling_separator(notation: &str) -> bool {
    notation.contains("++")
        || notation.contains(">+")
        || notation.contains("+>")
        || notation.starts_with('+')
        || notation.ends_with('+')
        || notation.ends_with('>')
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_html_conversion_is_deterministic(children in html_children_strategy()) {
        let pool = html_pool(&children);
        let config = EmmetConfig::compact_html();
        let first = convert_html(&pool, &config).unwrap();
        let second = convert_html(&pool, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_class_tokens_round_trip(children in html_children_strategy()) {
        let pool = html_pool(&children);
        let mut config = EmmetConfig::default();
        config.html.simplify_classes = true;
        let out = convert_html(&pool, &config).unwrap();

        let mut seen = HashSet::new();
        for (token, original) in &out.maps.classes {
            prop_assert_ne!(token, original);
            prop_assert!(seen.insert(token.clone()), "duplicate token {}", token);

            let xpath = format!("//div[@class='{}']", token);
            let restored = restore_classes_in_xpath(&xpath, &out.maps.classes).unwrap();
            prop_assert_eq!(restored, format!("//div[@class='{}']", original));
        }

        let distinct: HashSet<&String> = children.iter().map(|(_, c)| c).collect();
        prop_assert_eq!(out.maps.classes.len(), distinct.len());
    }

    #[test]
    fn prop_skipped_tags_leave_no_separator(children in html_children_strategy()) {
        let pool = html_pool(&children);
        let mut config = EmmetConfig::default();
        config.html.skip_tags = true;
        let out = convert_html(&pool, &config).unwrap().result;
        for rendered in [">script", "+script", "(script"] {
            prop_assert!(!out.contains(rendered), "{}", out);
        }
        prop_assert!(!has_dangling_separator(&out), "{}", out);
    }

    #[test]
    fn prop_skipped_comments_leave_no_separator(
        kinds in prop::collection::vec(any::<bool>(), 0..10)
    ) {
        let pool = xml_pool(&kinds);
        let mut config = EmmetConfig::default();
        config.xml.skip_comments = true;
        let out = convert_xml(&pool, &config).unwrap().result;
        prop_assert!(!out.contains("comment{"), "{}", out);
        prop_assert!(!has_dangling_separator(&out), "{}", out);

        let entries = kinds.iter().filter(|c| !**c).count();
        prop_assert_eq!(out.matches("entry").count(), entries);
    }

    #[test]
    fn prop_long_json_strings_never_leak(values in prop::collection::vec("[a-z ]{0,40}", 0..8)) {
        let document = Value::Array(values.iter().cloned().map(Value::String).collect());
        let pool = JsonNodePool::from_value(&document).unwrap();
        let mut config = EmmetConfig::default();
        config.json.simplify_long_strings = true;
        let out = convert_json(&pool, &config).unwrap();

        for value in &values {
            if value.chars().count() > config.json.string_length_threshold {
                prop_assert!(!out.result.contains(value.as_str()));
                prop_assert!(out.maps.values.values().any(|v| v == value));
            }
        }
        for (token, original) in &out.maps.values {
            prop_assert_ne!(token, original);
        }
    }
}
