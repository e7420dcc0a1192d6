//! Bidirectional mapping between token symbols and dense ids
//!
//! Symbols are opaque strings; providers usually compose them from
//! surface, lemma and part-of-speech attributes (e.g. `"run/VB"`).

use crate::error::{CoreError, Result};
use crate::types::{TokenId, SEPARATOR};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Symbol table of one corpus attribute
///
/// Id `0` is reserved for the sentence separator and is never assigned.
/// Serialized as a `{symbol: id}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, TokenId>",
    into = "BTreeMap<String, TokenId>"
)]
pub struct Vocabulary {
    ids: HashMap<String, TokenId>,
    symbols: HashMap<TokenId, String>,
    // One past the largest id in use; may reach `TokenId::MAX + 1`.
    next_id: u64,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            symbols: HashMap::new(),
            next_id: u64::from(SEPARATOR) + 1,
        }
    }

    /// Build a vocabulary from explicit `(symbol, id)` pairs
    ///
    /// Fails if an entry uses the separator id or two symbols share an id.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, TokenId)>,
        S: Into<String>,
    {
        let mut vocabulary = Self::new();
        for (symbol, id) in entries {
            vocabulary.insert(symbol.into(), id)?;
        }
        Ok(vocabulary)
    }

    fn insert(&mut self, symbol: String, id: TokenId) -> Result<()> {
        if id == SEPARATOR {
            return Err(CoreError::ReservedSeparatorId { symbol });
        }
        if let Some(existing) = self.symbols.get(&id) {
            if *existing != symbol {
                return Err(CoreError::DuplicateTokenId {
                    token_id: id,
                    first: existing.clone(),
                    second: symbol,
                });
            }
            return Ok(());
        }

        self.next_id = self.next_id.max(u64::from(id) + 1);
        self.symbols.insert(id, symbol.clone());
        // The first id wins for encoding; every id still decodes.
        self.ids.entry(symbol).or_insert(id);
        Ok(())
    }

    /// Return the id of a symbol, assigning the next free id if it is new
    ///
    /// Fails with [`CoreError::VocabularyFull`] once the id above the
    /// largest one in use would not fit in a [`TokenId`].
    pub fn intern(&mut self, symbol: &str) -> Result<TokenId> {
        if let Some(&id) = self.ids.get(symbol) {
            return Ok(id);
        }

        let id = TokenId::try_from(self.next_id).map_err(|_| CoreError::VocabularyFull {
            symbol: symbol.to_string(),
        })?;
        self.next_id += 1;
        self.ids.insert(symbol.to_string(), id);
        self.symbols.insert(id, symbol.to_string());
        Ok(id)
    }

    /// Look up the id of a symbol
    pub fn id_of(&self, symbol: &str) -> Option<TokenId> {
        self.ids.get(symbol).copied()
    }

    /// Look up the symbol of an id
    pub fn symbol_of(&self, id: TokenId) -> Option<&str> {
        self.symbols.get(&id).map(String::as_str)
    }

    /// Whether the id belongs to a real vocabulary entry
    pub fn contains_id(&self, id: TokenId) -> bool {
        self.symbols.contains_key(&id)
    }

    /// Map a symbol sequence to ids, `None` if any symbol is unknown
    pub fn encode<S: AsRef<str>>(&self, symbols: &[S]) -> Option<Vec<TokenId>> {
        symbols.iter().map(|s| self.id_of(s.as_ref())).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the vocabulary has no entries
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over `(symbol, id)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.ids.iter().map(|(symbol, &id)| (symbol.as_str(), id))
    }
}

impl TryFrom<BTreeMap<String, TokenId>> for Vocabulary {
    type Error = CoreError;

    fn try_from(entries: BTreeMap<String, TokenId>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<Vocabulary> for BTreeMap<String, TokenId> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.ids.into_iter().collect()
    }
}
