//! Token kinds exempt from difference reporting
//!
//! Graphics-related tokens (tiles, glyphs, growth prints) churn between
//! versions of the same data without changing its meaning, so by default
//! their changes are suppressed. Membership is decided by kind only.

use std::collections::BTreeSet;

pub const DEFAULT_SAFE_TOKENS: phf::Set<&'static str> = phf::phf_set! {
    "TILE",
    "T_WORD",
    "GROWTH_PRINT",
    "CREATURE_TILE",
    "TREE_TILE",
    "DEAD_TREE_TILE",
    "PICKED_TILE",
    "SHRUB_TILE",
    "DEAD_SHRUB_TILE",
    "GRASS_TILES",
    "ALT_GRASS_TILES",
    "ITEM_SYMBOL",
    "CREATURE_SOLDIER_TILE",
};

/// Immutable set of token kinds whose differences are not reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeTokens {
    kinds: BTreeSet<String>,
}

impl SafeTokens {
    pub fn empty() -> Self {
        SafeTokens {
            kinds: BTreeSet::new(),
        }
    }

    pub fn with_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kinds.extend(kinds.into_iter().map(Into::into));
        self
    }

    pub fn without_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for kind in kinds {
            self.kinds.remove(kind.as_ref());
        }
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }
}

impl Default for SafeTokens {
    fn default() -> Self {
        SafeTokens::empty().with_kinds(DEFAULT_SAFE_TOKENS.iter().copied())
    }
}
