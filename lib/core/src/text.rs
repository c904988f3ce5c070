//! Text normalization: lowercasing, tokenization, stop-word removal
//! and lemmatization.
//!
//! All language-dependent state (stop words, lemma rules) lives in an
//! explicitly constructed [`LanguageResources`] that callers inject into
//! the normalizer. Nothing here touches global state.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// English stop words removed before vectorization.
/// Roughly the NLTK English list, trimmed to forms that survive
/// alphabetic-only tokenization.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

/// Rule-based English lemmatizer.
///
/// Reduces regular plural and inflected forms to a base form with a small
/// suffix-rule table (apples -> apple, berries -> berry, boxes -> box).
/// Irregular forms pass through unchanged; for short brainstorming inputs
/// that is an acceptable approximation of dictionary lemmatization.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Lemmatize a single lowercase token
    #[must_use]
    pub fn lemmatize(&self, token: &str) -> String {
        let t = token;
        if t.len() <= 3 {
            return t.to_string();
        }
        if let Some(stem) = t.strip_suffix("sses") {
            return format!("{stem}ss");
        }
        if let Some(stem) = t.strip_suffix("ies") {
            // berries -> berry, but not "ties" -> "ty" style two-letter stems
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        for es_suffix in ["ches", "shes", "xes", "zes"] {
            if let Some(stem) = t.strip_suffix(es_suffix) {
                return format!("{}{}", stem, &es_suffix[..es_suffix.len() - 2]);
            }
        }
        if t.ends_with('s')
            && !t.ends_with("ss")
            && !t.ends_with("us")
            && !t.ends_with("is")
        {
            return t[..t.len() - 1].to_string();
        }
        t.to_string()
    }
}

/// Injected language context: stop words plus lemmatizer.
///
/// Constructed once and shared read-only by all analysis calls.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    stop_words: HashSet<String>,
    lemmatizer: Lemmatizer,
}

impl LanguageResources {
    /// Built-in English resources
    #[must_use]
    pub fn english() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Load stop words from a file, one word per line.
    /// A missing or unreadable file is a configuration error.
    pub fn with_stop_words_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ResourceUnavailable(format!("stop-word file {}: {}", path.display(), e))
        })?;
        let stop_words = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Ok(Self {
            stop_words,
            lemmatizer: Lemmatizer::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    #[inline]
    #[must_use]
    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}

/// Normalizes raw idea strings into cleaned token strings
#[derive(Debug, Clone)]
pub struct TextNormalizer<'a> {
    resources: &'a LanguageResources,
}

impl<'a> TextNormalizer<'a> {
    #[inline]
    #[must_use]
    pub fn new(resources: &'a LanguageResources) -> Self {
        Self { resources }
    }

    /// Tokenize text into lowercase alphabetic tokens
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphabetic())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Normalize one idea: lowercase, tokenize, drop non-alphabetic tokens
    /// and stop words, lemmatize, rejoin with single spaces.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        Self::tokenize(text)
            .into_iter()
            .filter(|t| !self.resources.is_stop_word(t))
            .map(|t| self.resources.lemmatizer().lemmatize(&t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize a whole batch, preserving order
    #[must_use]
    pub fn normalize_all(&self, ideas: &[String]) -> Vec<String> {
        ideas.iter().map(|i| self.normalize(i)).collect()
    }
}
