//! Domain service traits and in-memory implementations.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use common::NonNegativeInt;

use super::Genre;

/// Capability to check the publishing house's genre quota.
///
/// The quota is a fact external to any one book: a limit on how many
/// books of a genre may be in print concurrently. The aggregate never
/// stores this capability; it receives it for the single operation that
/// consults it.
pub trait PublishingHouse: Send + Sync {
    /// Returns true if no more books of this genre may enter printing.
    ///
    /// A pure query: it must not observe or mutate the aggregate.
    fn is_genre_limit_reached(&self, genre: &Genre) -> bool;
}

/// In-memory publishing house for tests.
///
/// Genres are unconstrained until explicitly saturated.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublishingHouse {
    saturated: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryPublishingHouse {
    /// Creates a publishing house with no saturated genres.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a genre's quota as reached.
    pub fn saturate_genre(&self, genre: &Genre) {
        self.saturated
            .write()
            .unwrap()
            .insert(genre.as_str().to_string());
    }

    /// Clears a genre's quota.
    pub fn release_genre(&self, genre: &Genre) {
        self.saturated.write().unwrap().remove(genre.as_str());
    }
}

impl PublishingHouse for InMemoryPublishingHouse {
    fn is_genre_limit_reached(&self, genre: &Genre) -> bool {
        self.saturated.read().unwrap().contains(genre.as_str())
    }
}

/// Result of analyzing a chapter's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    /// Pages the text lays out to.
    pub total_pages: NonNegativeInt,

    /// Illustrations embedded in the text.
    pub number_of_illustrations: NonNegativeInt,
}

/// Capability to derive page and illustration counts from chapter text.
///
/// Supplied by the caller and invoked once, when chapter content is
/// constructed. Implementations must be deterministic: the same text
/// always yields the same counts.
pub trait ContentAnalyzer: Send + Sync {
    /// Analyzes the text.
    fn analyze(&self, text: &str) -> ContentStats;
}

/// Analyzer that lays text out by word count and counts markdown image
/// markers as illustrations.
#[derive(Debug, Clone)]
pub struct WordCountAnalyzer {
    words_per_page: usize,
}

impl WordCountAnalyzer {
    /// Creates an analyzer laying out `words_per_page` words per page.
    /// Values below 1 are clamped to 1.
    pub fn new(words_per_page: usize) -> Self {
        Self {
            words_per_page: words_per_page.max(1),
        }
    }
}

impl Default for WordCountAnalyzer {
    fn default() -> Self {
        Self::new(250)
    }
}

impl ContentAnalyzer for WordCountAnalyzer {
    fn analyze(&self, text: &str) -> ContentStats {
        let words = text.split_whitespace().count();
        let pages = words.div_ceil(self.words_per_page);
        let illustrations = text.matches("![").count();

        ContentStats {
            total_pages: NonNegativeInt::from_count(pages.min(u32::MAX as usize) as u32),
            number_of_illustrations: NonNegativeInt::from_count(
                illustrations.min(u32::MAX as usize) as u32,
            ),
        }
    }
}

/// Analyzer that reports fixed counts for any text.
#[derive(Debug, Clone, Copy)]
pub struct FixedContentAnalyzer {
    stats: ContentStats,
}

impl FixedContentAnalyzer {
    /// Creates an analyzer always reporting the given counts.
    pub fn new(total_pages: NonNegativeInt, number_of_illustrations: NonNegativeInt) -> Self {
        Self {
            stats: ContentStats {
                total_pages,
                number_of_illustrations,
            },
        }
    }
}

impl ContentAnalyzer for FixedContentAnalyzer {
    fn analyze(&self, _text: &str) -> ContentStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_limit_starts_open() {
        let house = InMemoryPublishingHouse::new();
        let fiction = Genre::new("Fiction").unwrap();
        assert!(!house.is_genre_limit_reached(&fiction));
    }

    #[test]
    fn saturated_genre_reports_limit_reached() {
        let house = InMemoryPublishingHouse::new();
        let fiction = Genre::new("Fiction").unwrap();
        let drama = Genre::new("Drama").unwrap();

        house.saturate_genre(&fiction);

        assert!(house.is_genre_limit_reached(&fiction));
        assert!(!house.is_genre_limit_reached(&drama));

        house.release_genre(&fiction);
        assert!(!house.is_genre_limit_reached(&fiction));
    }

    #[test]
    fn word_count_analyzer_rounds_pages_up() {
        let analyzer = WordCountAnalyzer::new(10);

        let stats = analyzer.analyze("one two three four five six seven eight nine ten eleven");
        assert_eq!(stats.total_pages.value(), 2);
        assert_eq!(stats.number_of_illustrations.value(), 0);
    }

    #[test]
    fn word_count_analyzer_counts_image_markers() {
        let analyzer = WordCountAnalyzer::new(100);

        let stats = analyzer.analyze("text ![map](map.png) more text ![ship](ship.png)");
        assert_eq!(stats.number_of_illustrations.value(), 2);
    }

    #[test]
    fn word_count_analyzer_is_deterministic() {
        let analyzer = WordCountAnalyzer::default();
        let text = "the same text every time";
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }

    #[test]
    fn empty_text_analyzes_to_zero_pages() {
        let analyzer = WordCountAnalyzer::default();
        let stats = analyzer.analyze("");
        assert_eq!(stats.total_pages.value(), 0);
    }

    #[test]
    fn fixed_analyzer_ignores_the_text() {
        let analyzer = FixedContentAnalyzer::new(
            NonNegativeInt::new(12).unwrap(),
            NonNegativeInt::new(3).unwrap(),
        );
        let stats = analyzer.analyze("anything at all");
        assert_eq!(stats.total_pages.value(), 12);
        assert_eq!(stats.number_of_illustrations.value(), 3);
    }
}
