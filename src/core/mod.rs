//! Core notation primitives
//!
//! This module contains the building blocks every converter shares:
//! - Text: Emmet/JSON escaping (memchr fast path) and attribute lists
//! - Tokens: placeholder allocator and reversible substitution maps
//! - Vocabulary: the fixed seed list of placeholder names

pub mod text;
pub mod tokens;
pub mod vocabulary;

pub use tokens::{SubstitutionMap, TokenAllocator};
