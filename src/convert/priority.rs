//! HTML attribute priority filter
//!
//! Reduces an element's attributes to the highest tier present:
//! ignored names, `data-*` and `on*` handlers always go; then the
//! primary tier wins outright, else the secondary tier, else nothing.

use crate::config::AttributesPriority;
use crate::dom::Attributes;

pub struct AttributePriorityFilter<'a> {
    priority: &'a AttributesPriority,
}

impl<'a> AttributePriorityFilter<'a> {
    pub fn new(priority: &'a AttributesPriority) -> Self {
        AttributePriorityFilter { priority }
    }

    fn is_data_attribute(name: &str) -> bool {
        name.starts_with("data-")
    }

    fn is_event_handler(name: &str) -> bool {
        name.len() > 2 && name.starts_with("on")
    }

    fn is_dropped(&self, name: &str) -> bool {
        self.priority.ignore_attrs.contains(name)
            || Self::is_data_attribute(name)
            || Self::is_event_handler(name)
    }

    /// Filtered copy of `attrs`, preserving insertion order
    pub fn filter_attributes(&self, attrs: &Attributes) -> Attributes {
        let kept: Vec<(&String, &String)> = attrs
            .iter()
            .filter(|(name, _)| !self.is_dropped(name))
            .collect();

        let tier = |names: &indexmap::IndexSet<String>| -> Attributes {
            kept.iter()
                .filter(|(name, _)| names.contains(name.as_str()))
                .map(|(k, v)| ((*k).clone(), (*v).clone()))
                .collect()
        };

        let primary = tier(&self.priority.primary_attrs);
        if !primary.is_empty() {
            return primary;
        }
        tier(&self.priority.secondary_attrs)
    }
}
