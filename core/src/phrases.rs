//! Statement phrase catalog.
//!
//! Every phrase the player can include in the post-meeting statement
//! carries a fixed hawkishness weight. The guidance category (gd*) is
//! the only one the engine tracks across meetings: it drives next
//! meeting's credibility check and market expectations.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    Economic,
    Labor,
    Inflation,
    Guidance,
}

#[derive(Debug, Clone, Copy)]
pub struct StatementPhrase {
    pub id: &'static str,
    pub category: PhraseCategory,
    pub text: &'static str,
    pub hawk_score: i32,
}

pub const STATEMENT_PHRASES: [StatementPhrase; 13] = [
    StatementPhrase {
        id: "ec1",
        category: PhraseCategory::Economic,
        text: "Economic activity has been expanding at a solid pace.",
        hawk_score: 1,
    },
    StatementPhrase {
        id: "ec2",
        category: PhraseCategory::Economic,
        text: "Economic activity has been expanding at a moderate pace.",
        hawk_score: 0,
    },
    StatementPhrase {
        id: "ec3",
        category: PhraseCategory::Economic,
        text: "Economic activity appears to be slowing.",
        hawk_score: -1,
    },
    StatementPhrase {
        id: "lb1",
        category: PhraseCategory::Labor,
        text: "Job gains have remained strong.",
        hawk_score: 1,
    },
    StatementPhrase {
        id: "lb2",
        category: PhraseCategory::Labor,
        text: "Job gains have remained low, with signs of stabilization.",
        hawk_score: 0,
    },
    StatementPhrase {
        id: "lb3",
        category: PhraseCategory::Labor,
        text: "The labor market has shown signs of cooling.",
        hawk_score: -1,
    },
    StatementPhrase {
        id: "in1",
        category: PhraseCategory::Inflation,
        text: "Inflation remains elevated and is a significant concern.",
        hawk_score: 2,
    },
    StatementPhrase {
        id: "in2",
        category: PhraseCategory::Inflation,
        text: "Inflation remains somewhat elevated.",
        hawk_score: 1,
    },
    StatementPhrase {
        id: "in3",
        category: PhraseCategory::Inflation,
        text: "Inflation has made meaningful progress toward 2 percent.",
        hawk_score: -1,
    },
    StatementPhrase {
        id: "gd1",
        category: PhraseCategory::Guidance,
        text: "Further rate increases may be appropriate.",
        hawk_score: 3,
    },
    StatementPhrase {
        id: "gd2",
        category: PhraseCategory::Guidance,
        text: "The Committee will carefully assess incoming data.",
        hawk_score: 1,
    },
    StatementPhrase {
        id: "gd3",
        category: PhraseCategory::Guidance,
        text: "The Committee is prepared to adjust policy as appropriate.",
        hawk_score: -1,
    },
    StatementPhrase {
        id: "gd4",
        category: PhraseCategory::Guidance,
        text: "Further easing may be appropriate.",
        hawk_score: -2,
    },
];

pub fn phrase_by_id(id: &str) -> Option<&'static StatementPhrase> {
    STATEMENT_PHRASES.iter().find(|p| p.id == id)
}

/// The guidance statement ids within a selected-statement list, in
/// selection order.
pub fn guidance_ids(selected: &[String]) -> Vec<String> {
    selected
        .iter()
        .filter(|id| phrase_by_id(id).is_some_and(|p| p.category == PhraseCategory::Guidance))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_ids_are_unique() {
        for (i, a) in STATEMENT_PHRASES.iter().enumerate() {
            for b in &STATEMENT_PHRASES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn guidance_filter_keeps_only_gd_phrases() {
        let selected = vec!["ec1".to_string(), "gd4".to_string(), "in2".to_string()];
        assert_eq!(guidance_ids(&selected), vec!["gd4".to_string()]);
    }
}
