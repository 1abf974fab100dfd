use std::collections::HashMap;

use crate::types::{EmbeddedLexicon, PersonForms, StrongEntry};

const EMBEDDED_JSON: &[u8] = include_bytes!("../../data/verbs.json");

/// The static verb tables, loaded once from compile-time embedded data and
/// never mutated afterwards.
pub struct Lexicon {
    /// Fully irregular and modal verbs with their literal paradigms.
    irregular: HashMap<String, PersonForms>,
    /// Strong verbs whose du/er stems mutate (sehen -> sieh).
    strong: HashMap<String, StrongEntry>,
}

impl Lexicon {
    /// Load the tables from embedded JSON data.
    pub fn new() -> Self {
        let data: EmbeddedLexicon =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded verb table JSON is invalid");

        let irregular = data
            .irregular
            .into_iter()
            .map(|e| (e.infinitive, e.forms))
            .collect();
        let strong = data
            .strong
            .into_iter()
            .map(|e| (e.infinitive.clone(), e))
            .collect();

        Self { irregular, strong }
    }

    /// Look up the literal paradigm of a fully irregular or modal verb.
    /// Exact match only; a hit short-circuits all derivation rules.
    pub fn irregular(&self, infinitive: &str) -> Option<&PersonForms> {
        self.irregular.get(infinitive)
    }

    /// Look up the mutated du/er stems of a strong verb.
    pub fn strong_stems(&self, infinitive: &str) -> Option<&StrongEntry> {
        self.strong.get(infinitive)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
