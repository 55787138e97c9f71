//! Item keyword extraction from free-text descriptions

use ahash::AHashSet;
use regex::Regex;
use tracing::info;

/// Sentinel keyword returned when no usable token is found.
pub const UNKNOWN_ITEM: &str = "unknown";

/// Extracts the single keyword naming the lost item from a user sentence
///
/// Two passes over the lowercased word tokens: the "lost X" / "my X" anchor
/// pattern first, then the first non-stopword token as a low-confidence
/// fallback. The keyword is used verbatim downstream; there is no stemming
/// or synonym normalization.
pub struct ItemExtractor {
    word_pattern: Regex,
    anchor_words: AHashSet<&'static str>,
    anchor_exclusions: AHashSet<&'static str>,
    stopwords: AHashSet<&'static str>,
}

impl ItemExtractor {
    pub fn new() -> Self {
        Self {
            // Tokens are maximal runs of Unicode alphanumerics; punctuation
            // never becomes a token.
            word_pattern: Regex::new(r"[\p{L}\p{N}]+").expect("Invalid word pattern"),
            anchor_words: ["lost", "my"].into_iter().collect(),
            anchor_exclusions: ["my", "near", "at", "in", "the"].into_iter().collect(),
            stopwords: ["i", "lost", "my", "near", "at", "in", "the"]
                .into_iter()
                .collect(),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract the item keyword from `text`.
    ///
    /// Never fails: any input without a usable token yields `"unknown"`.
    pub fn extract(&self, text: &str) -> String {
        let tokens = self.tokenize(text);
        let keyword = self
            .anchored_item(&tokens)
            .or_else(|| self.first_content_word(&tokens))
            .unwrap_or(UNKNOWN_ITEM)
            .to_string();
        info!(item = %keyword, text = %text, "extracted item");
        keyword
    }

    /// Pass 1: the token following "lost"/"my", unless it is a function word.
    /// Earliest hit wins; a rejected successor does not stop the scan.
    fn anchored_item<'a>(&self, tokens: &'a [String]) -> Option<&'a str> {
        tokens.windows(2).find_map(|pair| {
            let (anchor, next) = (pair[0].as_str(), pair[1].as_str());
            (self.anchor_words.contains(anchor) && !self.anchor_exclusions.contains(next))
                .then_some(next)
        })
    }

    /// Pass 2: the first token outside the stopword list.
    fn first_content_word<'a>(&self, tokens: &'a [String]) -> Option<&'a str> {
        tokens
            .iter()
            .map(String::as_str)
            .find(|token| !self.stopwords.contains(token))
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}
