use serde::{Deserialize, Serialize};

use crate::config::VocabularyTables;
use crate::types::AgeGroup;

/// Vocabulary complexity tier for one age band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyTier {
    pub level: String,
    pub complexity: u8,
}

/// Maps an age to its vocabulary tier. Total over all ages; the four bands
/// map to complexity 1 through 4.
pub fn select_vocabulary(age: u8) -> VocabularyTier {
    match AgeGroup::from_age(age) {
        AgeGroup::EarlyChildhood => VocabularyTier {
            level: "Simple".to_string(),
            complexity: 1,
        },
        AgeGroup::ElementaryEarly => VocabularyTier {
            level: "Basic".to_string(),
            complexity: 2,
        },
        AgeGroup::ElementaryLate => VocabularyTier {
            level: "Intermediate".to_string(),
            complexity: 3,
        },
        AgeGroup::MiddleSchool => VocabularyTier {
            level: "Advanced".to_string(),
            complexity: 4,
        },
    }
}

/// Rewrites a concept with the substitution table of the student's age band.
/// Rules run in table order and each replaces all occurrences of its term.
/// This is literal substring replacement, not semantic simplification; a
/// concept with no matching term is returned unchanged.
pub fn adapt_concept(concept: &str, age: u8, tables: &VocabularyTables) -> String {
    let mut adapted = concept.to_string();
    for rule in tables.rules_for(AgeGroup::from_age(age)) {
        if adapted.contains(&rule.term) {
            adapted = adapted.replace(&rule.term, &rule.replacement);
        }
    }
    adapted
}
