//! Keyword weight tables for each key-point category.
//!
//! Phrases are matched as case-insensitive substrings of a sentence, so
//! `"key"` also hits `"keynote"` and `"need to"` spans a word boundary.

use super::Category;

/// The keyword phrases that vote for one category, with their weights.
#[derive(Debug, Clone, Copy)]
pub struct CategoryKeywords {
    pub category: Category,
    pub weights: &'static [(&'static str, u32)],
}

pub static DEFAULT_KEYWORDS: [CategoryKeywords; 5] = [
    CategoryKeywords {
        category: Category::MainInsights,
        weights: &[
            ("important", 2),
            ("key", 2),
            ("main", 2),
            ("essential", 2),
            ("crucial", 2),
            ("fundamental", 2),
            ("critical", 2),
            ("true", 2),
            ("reality", 2),
            ("fact", 2),
            ("truth", 2),
            ("real", 2),
        ],
    },
    CategoryKeywords {
        category: Category::SuccessPrinciples,
        weights: &[
            ("success", 2),
            ("achieve", 1),
            ("accomplish", 1),
            ("win", 1),
            ("excel", 2),
            ("thrive", 2),
            ("grow", 1),
            ("wealth", 2),
            ("power", 2),
            ("rich", 2),
            ("money", 1),
            ("wealthy", 2),
            ("successful", 2),
            ("top", 2),
            ("best", 2),
        ],
    },
    CategoryKeywords {
        category: Category::PracticalTips,
        weights: &[
            ("should", 1),
            ("must", 2),
            ("need to", 2),
            ("have to", 2),
            ("tip", 2),
            ("advice", 2),
            ("recommend", 1),
            ("suggest", 1),
            ("way to", 2),
            ("how to", 2),
            ("can", 1),
            ("do this", 2),
        ],
    },
    CategoryKeywords {
        category: Category::ChallengesAndSolutions,
        weights: &[
            ("problem", 1),
            ("challenge", 2),
            ("obstacle", 2),
            ("difficult", 1),
            ("solution", 2),
            ("overcome", 2),
            ("handle", 1),
            ("deal with", 1),
            ("solve", 2),
            ("fix", 1),
        ],
    },
    CategoryKeywords {
        category: Category::KeyTakeaways,
        weights: &[
            ("remember", 2),
            ("takeaway", 2),
            ("learn", 1),
            ("understand", 1),
            ("realize", 2),
            ("conclusion", 2),
            ("point is", 2),
            ("truth is", 2),
            ("bottom line", 2),
            ("end of day", 2),
        ],
    },
];

impl CategoryKeywords {
    /// Sum of the weights of every phrase contained in `lowercase_sentence`.
    pub fn keyword_score(&self, lowercase_sentence: &str) -> u32 {
        self.weights
            .iter()
            .filter(|(phrase, _)| lowercase_sentence.contains(&phrase.to_lowercase()))
            .map(|(_, weight)| weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_table() {
        for category in Category::ALL {
            assert!(
                DEFAULT_KEYWORDS.iter().any(|t| t.category == category),
                "no keywords for {category}"
            );
        }
    }

    #[test]
    fn test_weights_are_one_or_two() {
        for table in &DEFAULT_KEYWORDS {
            for (phrase, weight) in table.weights {
                assert!(
                    *weight == 1 || *weight == 2,
                    "{phrase} has weight {weight}"
                );
            }
        }
    }

    #[test]
    fn test_keyword_score_sums_substring_hits() {
        let insights = &DEFAULT_KEYWORDS[0];
        // "important" + "crucial", "real" also hits inside "really"
        assert_eq!(
            insights.keyword_score("an important and crucial point, really"),
            6
        );
        assert_eq!(insights.keyword_score("nothing to see here"), 0);
    }

    #[test]
    fn test_multi_word_phrases_match() {
        let tips = &DEFAULT_KEYWORDS[2];
        assert_eq!(tips.keyword_score("you need to show up"), 2);
    }
}
