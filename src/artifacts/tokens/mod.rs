//! Bracketed token extraction
//!
//! This module turns tagged text into comparable values:
//!
//! - `token`: The `Token` value type (kind plus `:`-separated fields)
//! - `tokenizer`: Lazy extraction of tokens from `[...]` regions of text
//! - `safe_tokens`: The set of token kinds whose changes are never reported

pub mod safe_tokens;
pub mod token;
pub mod tokenizer;

pub const TOKEN_REGEX: &str = r"\[([^\]]*)\]";
pub const FIELD_SEPARATOR: &str = ":";
