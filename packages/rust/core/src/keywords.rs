//! Keyword extraction from free-text briefs.
//!
//! A brief goes through two passes:
//! 1. [`normalize`]: lowercase, then replace anything outside the keyword
//!    alphabet with a space
//! 2. whitespace split, dropping short tokens and stopwords
//!
//! The stopword set mixes English and Italian and is part of the ranking
//! contract: editing it changes which items surface for a given brief.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Tokens with this many characters or fewer are never keywords.
pub const MAX_SHORT_TOKEN_CHARS: usize = 2;

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "need", "dare", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by", "from",
    "as", "into", "through", "during", "before", "after", "above", "below", "between", "out",
    "off", "over", "under", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "no", "not", "only", "own", "same", "so", "than", "too", "very", "just",
    "because", "but", "and", "or", "if", "while", "although", "this", "that", "these", "those",
    "i", "me", "my", "we", "our", "you", "your", "it", "its", "they", "them", "their", "what",
    "which", "who", "whom",
];

const ITALIAN_STOPWORDS: &[&str] = &[
    "il", "lo", "la", "le", "gli", "un", "una", "uno", "di", "del", "della", "dei", "delle",
    "da", "dal", "dalla", "dai", "dalle", "in", "nel", "nella", "nei", "nelle", "con", "su",
    "sul", "sulla", "sui", "sulle", "per", "tra", "fra", "che", "chi", "cui", "non", "come",
    "dove", "quando", "quanto", "perché", "anche", "ancora", "ma", "più", "molto", "questo",
    "questa", "questi", "queste", "quello", "quella", "quelli", "quelle", "sono", "è", "ho",
    "ha", "hanno", "essere", "avere", "fare", "mi", "ti", "si", "ci", "vi", "ne", "io", "tu",
    "lui", "lei", "noi", "voi", "loro",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ENGLISH_STOPWORDS
        .iter()
        .chain(ITALIAN_STOPWORDS)
        .copied()
        .collect()
});

/// Membership test against the combined stopword set. Expects lowercase input.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Lowercase `text` and blank out every character outside the keyword
/// alphabet (`a-z`, digits, Italian accented vowels, whitespace, `-`).
///
/// Each rejected character becomes one space, so adjacent words never fuse.
pub fn normalize(text: &str) -> String {
    static NON_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"[^a-z0-9àèéìòùü\s-]").expect("valid regex")
    });

    let lowered = text.to_lowercase();
    NON_KEYWORD_RE.replace_all(&lowered, " ").into_owned()
}

/// Extract keywords from a brief, in left-to-right order with duplicates kept.
///
/// An empty result is a valid outcome (a brief made only of stopwords);
/// scoring treats it as "no signal" and leaves item order untouched.
pub fn extract_keywords(brief: &str) -> Vec<String> {
    normalize(brief)
        .split_whitespace()
        .filter(|token| token.chars().count() > MAX_SHORT_TOKEN_CHARS && !is_stopword(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_blanks_punctuation() {
        assert_eq!(normalize("Brand, Strategy!"), "brand  strategy ");
        assert_eq!(normalize("AI/ML"), "ai ml");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_keeps_accents_and_hyphens() {
        assert_eq!(normalize("Perché PIÙ e-commerce"), "perché più e-commerce");
        assert_eq!(normalize("città"), "città");
        // Accents outside the Italian set are separators.
        assert_eq!(normalize("naïve"), "na ve");
    }

    #[test]
    fn normalize_never_fuses_words() {
        assert_eq!(normalize("brand'positioning"), "brand positioning");
    }

    #[test]
    fn positioning_brief_keeps_domain_terms() {
        let keywords =
            extract_keywords("I need help positioning my brand for a younger audience");
        assert_eq!(
            keywords,
            vec!["help", "positioning", "brand", "younger", "audience"]
        );
    }

    #[test]
    fn stopword_only_brief_yields_nothing() {
        assert!(extract_keywords("a an the").is_empty());
        assert!(extract_keywords("il lo la della questo è").is_empty());
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("?! ... ::").is_empty());
    }

    #[test]
    fn duplicates_and_order_are_kept() {
        let keywords = extract_keywords("Content content, CONTENT strategy");
        assert_eq!(keywords, vec!["content", "content", "content", "strategy"]);
    }

    #[test]
    fn italian_brief() {
        let keywords = extract_keywords("Come posso migliorare la comunicazione del brand?");
        assert_eq!(keywords, vec!["posso", "migliorare", "comunicazione", "brand"]);
    }

    #[test]
    fn extracted_keywords_are_never_short_or_stopwords() {
        let briefs = [
            "I need help positioning my brand for a younger audience",
            "We are a B2B SaaS in the EU; how do we launch an AI product?",
            "Perché la nostra strategia di contenuti non funziona più?",
            "x y z ab cd efg — to be or not to be",
            "Rebrand + re-launch @ 2025 w/ influencers & TikTok",
        ];

        for brief in briefs {
            for kw in extract_keywords(brief) {
                assert!(kw.chars().count() > MAX_SHORT_TOKEN_CHARS, "{kw:?} too short");
                assert!(!is_stopword(&kw), "{kw:?} is a stopword");
            }
        }
    }

    #[test]
    fn stopword_set_is_stable() {
        // "in" appears in both vocabularies.
        assert_eq!(ENGLISH_STOPWORDS.len(), 107);
        assert_eq!(ITALIAN_STOPWORDS.len(), 75);
        assert_eq!(STOPWORDS.len(), 181);

        for word in ["the", "need", "whom", "perché", "più", "loro"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
        for word in ["help", "brand", "audience", "strategia"] {
            assert!(!is_stopword(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn stopwords_are_lowercase() {
        for word in STOPWORDS.iter() {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
