//! Heuristic key-point extraction.
//!
//! A transcript goes through a short deterministic pipeline: it is cleaned and
//! split into candidate sentences, each sentence is scored against the keyword
//! table of every category, and the best three sentences of each category are
//! kept. There is no language model involved, only keyword and regex rules.

pub mod clean;
pub mod keywords;
pub mod score;
pub mod segment;

use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer, ser::SerializeMap};

pub use clean::clean_sentence;
pub use keywords::{CategoryKeywords, DEFAULT_KEYWORDS};
pub use score::{ScoredSentence, score_sentence, score_sentences, select_top};
pub use segment::split_sentences;

/// Most sentences kept per category.
pub const MAX_POINTS_PER_CATEGORY: usize = 3;

/// Thematic buckets for key points, declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    MainInsights,
    SuccessPrinciples,
    PracticalTips,
    ChallengesAndSolutions,
    KeyTakeaways,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::MainInsights,
        Category::SuccessPrinciples,
        Category::PracticalTips,
        Category::ChallengesAndSolutions,
        Category::KeyTakeaways,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::MainInsights => "Main Insights",
            Category::SuccessPrinciples => "Success Principles",
            Category::PracticalTips => "Practical Tips",
            Category::ChallengesAndSolutions => "Challenges & Solutions",
            Category::KeyTakeaways => "Key Takeaways",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected sentences per category. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPoints {
    points: BTreeMap<Category, Vec<String>>,
}

impl Default for KeyPoints {
    fn default() -> Self {
        Self {
            points: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }
}

impl KeyPoints {
    pub fn get(&self, category: Category) -> &[String] {
        self.points.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories in output order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.points
            .iter()
            .map(|(category, points)| (*category, points.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.points.values().all(Vec::is_empty)
    }

    pub fn total(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }
}

impl Serialize for KeyPoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.points.len()))?;
        for (category, points) in &self.points {
            map.serialize_entry(category.label(), points)?;
        }
        map.end()
    }
}

/// Key-point extractor over a set of keyword tables.
#[derive(Debug, Clone, Copy)]
pub struct KeyPointExtractor<'a> {
    tables: &'a [CategoryKeywords],
}

impl Default for KeyPointExtractor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPointExtractor<'static> {
    pub fn new() -> Self {
        Self {
            tables: &DEFAULT_KEYWORDS,
        }
    }
}

impl<'a> KeyPointExtractor<'a> {
    pub fn with_tables(tables: &'a [CategoryKeywords]) -> Self {
        Self { tables }
    }

    pub fn extract(&self, transcript: &str) -> KeyPoints {
        let sentences = split_sentences(transcript);
        let pools = score_sentences(&sentences, self.tables);
        tracing::debug!(
            sentences = sentences.len(),
            categories = pools.len(),
            "scored transcript sentences"
        );

        let mut key_points = KeyPoints::default();
        for (category, pool) in pools {
            key_points
                .points
                .insert(category, select_top(pool, MAX_POINTS_PER_CATEGORY));
        }
        key_points
    }
}

/// Extract key points with the default keyword tables.
pub fn extract_key_points(transcript: &str) -> KeyPoints {
    KeyPointExtractor::new().extract(transcript)
}
