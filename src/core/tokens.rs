//! Placeholder allocation and reversible substitution maps
//!
//! A `TokenAllocator` hands out names from a finite vocabulary without
//! replacement. A `SubstitutionMap` remembers which original value got
//! which token so repeats collapse onto one placeholder.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use super::vocabulary::SINGLE_TOKEN_NAMES;
use crate::error::{EmmetError, Result};

/// Issues unique placeholder names, one allocator per conversion call
#[derive(Debug, Clone)]
pub struct TokenAllocator {
    /// Unused names in allocation order
    names: IndexSet<&'static str>,
    issued: usize,
}

impl TokenAllocator {
    /// Allocator over the built-in vocabulary
    pub fn new() -> Self {
        Self::with_vocabulary(SINGLE_TOKEN_NAMES)
    }

    /// Allocator over a caller-supplied vocabulary (duplicates collapse)
    pub fn with_vocabulary(vocabulary: &[&'static str]) -> Self {
        TokenAllocator {
            names: vocabulary.iter().copied().collect(),
            issued: 0,
        }
    }

    /// Take the next unused name
    pub fn get_name(&mut self) -> Result<&'static str> {
        self.take_at(0)
    }

    /// Take the next unused name that differs from `original`
    ///
    /// A skipped name stays available for later requests.
    pub fn get_name_unlike(&mut self, original: &str) -> Result<&'static str> {
        let pos = self
            .names
            .iter()
            .position(|name| *name != original)
            .ok_or(EmmetError::AllocatorExhausted { issued: self.issued })?;
        self.take_at(pos)
    }

    fn take_at(&mut self, pos: usize) -> Result<&'static str> {
        let name = self
            .names
            .shift_remove_index(pos)
            .ok_or(EmmetError::AllocatorExhausted { issued: self.issued })?;
        self.issued += 1;
        Ok(name)
    }

    /// Names handed out so far
    pub fn issued(&self) -> usize {
        self.issued
    }

    /// Names still available
    pub fn remaining(&self) -> usize {
        self.names.len()
    }
}

impl Default for TokenAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Original value -> token, one map per substitution category
#[derive(Debug, Clone)]
pub struct SubstitutionMap<K = String> {
    category: &'static str,
    forward: IndexMap<K, String>,
}

impl<K: Hash + Eq + Clone> SubstitutionMap<K> {
    pub fn new(category: &'static str) -> Self {
        SubstitutionMap {
            category,
            forward: IndexMap::new(),
        }
    }

    /// Token for `key`, allocating one on first sight
    ///
    /// `literal` is the text the token replaces in the notation; the
    /// allocated token never equals it.
    pub fn substitute(
        &mut self,
        key: K,
        literal: &str,
        allocator: &mut TokenAllocator,
    ) -> Result<String> {
        if let Some(token) = self.forward.get(&key) {
            return Ok(token.clone());
        }
        let token = allocator.get_name_unlike(literal)?;
        tracing::trace!(category = self.category, token, "allocated placeholder");
        self.forward.insert(key, token.to_string());
        Ok(token.to_string())
    }

    pub fn get(&self, key: &K) -> Option<&str> {
        self.forward.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Token -> original, in allocation order
    pub fn reversed(&self) -> IndexMap<String, K> {
        self.forward
            .iter()
            .map(|(original, token)| (token.clone(), original.clone()))
            .collect()
    }
}
