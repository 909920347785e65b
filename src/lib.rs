//! Semantic diff of bracketed token streams
//!
//! Text assets such as game raw files carry their content in `[KIND:field:...]`
//! tokens. Comparing two versions line by line drowns real changes in
//! formatting churn, so this crate extracts the tokens, aligns the two token
//! streams and reports only the token-level differences, ignoring kinds
//! listed as safe.
//!
//! - `areas`: Comparison inputs (workspaces) and run state (comparator)
//! - `artifacts`: Tokens, alignment algorithms and diff rendering
//! - `commands`: The path comparison command

pub mod areas;
pub mod artifacts;
pub mod commands;
