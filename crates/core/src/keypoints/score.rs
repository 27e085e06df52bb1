use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use super::{Category, keywords::CategoryKeywords};

/// Sentences with fewer words than this are never scored.
pub const MIN_WORDS: usize = 10;

const FULL_THOUGHT_WORDS: usize = 15;

const ILLUSTRATIVE_MARKERS: [&str; 3] = ["example", "instance", "case"];

static AUXILIARY_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(is|are|was|were|have|has|do|does|should|must|can|will)\b")
        .expect("valid auxiliary verb regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub score: u32,
    pub text: String,
}

impl ScoredSentence {
    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Score of `sentence` for one category, or `None` if it does not qualify:
/// too few words, or no keyword of the category present.
pub fn score_sentence(sentence: &str, keywords: &CategoryKeywords) -> Option<u32> {
    let word_count = sentence.split_whitespace().count();
    if word_count < MIN_WORDS {
        return None;
    }

    let lower = sentence.to_lowercase();
    let mut score = keywords.keyword_score(&lower);
    if score == 0 {
        return None;
    }

    if AUXILIARY_VERB.is_match(&lower) {
        score += 1;
    }
    if word_count >= FULL_THOUGHT_WORDS {
        score += 1;
    }
    if !ILLUSTRATIVE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
    {
        score += 1;
    }

    Some(score)
}

/// Build the candidate pool of every category from `sentences`, preserving
/// sentence order within each pool. A sentence enters a pool at most once;
/// when several tables share a category it keeps its best score.
pub fn score_sentences(
    sentences: &[String],
    tables: &[CategoryKeywords],
) -> BTreeMap<Category, Vec<ScoredSentence>> {
    let mut pools: BTreeMap<Category, Vec<ScoredSentence>> = BTreeMap::new();

    for sentence in sentences {
        let mut best: BTreeMap<Category, u32> = BTreeMap::new();
        for table in tables {
            if let Some(score) = score_sentence(sentence, table) {
                let entry = best.entry(table.category).or_insert(score);
                *entry = (*entry).max(score);
            }
        }

        for (category, score) in best {
            pools.entry(category).or_default().push(ScoredSentence {
                score,
                text: sentence.clone(),
            });
        }
    }

    pools
}

/// Highest score first, shorter sentence on ties. The sort is stable, so
/// equal entries keep their source order.
pub fn rank(pool: &mut [ScoredSentence]) {
    pool.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.char_len().cmp(&b.char_len()))
    });
}

/// Rank a pool and keep the text of the first `limit` entries.
pub fn select_top(mut pool: Vec<ScoredSentence>, limit: usize) -> Vec<String> {
    rank(&mut pool);
    pool.into_iter().take(limit).map(|s| s.text).collect()
}
