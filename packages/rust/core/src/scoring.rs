//! Lexical relevance scoring over knowledge items.
//!
//! An item's score is the number of keywords (with multiplicity) found as a
//! substring of its searchable text. Substring rather than whole-word
//! matching lets "brand" hit "rebrand" and "branding".

use strategist_shared::{Experience, Framework};

/// Item kinds that expose text for keyword matching.
pub trait Searchable {
    /// Fields matched against keywords, in fixed order:
    /// name, description, challenge, context, then every tag.
    fn searchable_fields(&self) -> Vec<&str>;

    /// The fields joined with a space and lowercased.
    fn searchable_text(&self) -> String {
        self.searchable_fields().join(" ").to_lowercase()
    }
}

impl Searchable for Framework {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for Experience {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.tags.len());
        fields.push(self.challenge.as_str());
        fields.push(self.context.as_str());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// An item paired with its request-local score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a, T> {
    pub item: &'a T,
    pub score: usize,
}

/// Count keywords present in `item`'s searchable text.
pub fn score_item<T: Searchable>(item: &T, keywords: &[String]) -> usize {
    let text = item.searchable_text();
    keywords
        .iter()
        .filter(|kw| text.contains(kw.as_str()))
        .count()
}

/// Score every item, preserving input order.
pub fn score_items<'a, T: Searchable>(
    items: &'a [T],
    keywords: &[String],
) -> Vec<ScoredItem<'a, T>> {
    items
        .iter()
        .map(|item| ScoredItem {
            item,
            score: score_item(item, keywords),
        })
        .collect()
}

/// Rank `items` by descending score.
///
/// - Empty `keywords`: items come back in input order, unscored.
/// - Equal scores keep their input order (`sort_by` is stable).
/// - Never truncates; callers pick their own top-K.
pub fn rank<'a, T: Searchable>(items: &'a [T], keywords: &[String]) -> Vec<&'a T> {
    if keywords.is_empty() {
        return items.iter().collect();
    }

    let mut scored = score_items(items, keywords);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.into_iter().map(|s| s.item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // Unsearched fields carry "brand" so leaks into the score show up.
    fn make_framework(name: &str, description: &str) -> Framework {
        Framework {
            name: name.into(),
            description: description.into(),
            when_to_use: "brand brand brand".into(),
            steps: vec!["brand".into()],
            key_principles: vec![],
        }
    }

    fn make_experience(context: &str, challenge: &str, tags: &[&str]) -> Experience {
        Experience {
            context: context.into(),
            challenge: challenge.into(),
            approach: "brand work".into(),
            result: "brand lift".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn framework_searches_name_and_description_only() {
        let fw = make_framework("Message House", "Umbrella MESSAGE and pillars");
        assert_eq!(fw.searchable_text(), "message house umbrella message and pillars");
        // when_to_use and steps mention "brand" but are not searchable.
        assert_eq!(score_item(&fw, &kws(&["brand"])), 0);
        assert_eq!(score_item(&fw, &kws(&["pillars", "house", "crisis"])), 2);
    }

    #[test]
    fn experience_searches_challenge_context_and_tags() {
        let exp = make_experience(
            "Retail chain",
            "Losing Younger buyers",
            &["Packaging", "retail"],
        );
        assert_eq!(
            exp.searchable_fields(),
            vec!["Losing Younger buyers", "Retail chain", "Packaging", "retail"]
        );
        assert_eq!(score_item(&exp, &kws(&["younger", "packaging", "brand"])), 2);
    }

    #[test]
    fn substring_matches_count() {
        let fw = make_framework("Rebranding Sprint", "");
        assert_eq!(score_item(&fw, &kws(&["brand"])), 1);
    }

    #[test]
    fn duplicate_keywords_count_twice() {
        let fw = make_framework("Content Pillars", "");
        assert_eq!(score_item(&fw, &kws(&["content", "content", "pillars"])), 3);
    }

    #[test]
    fn empty_keywords_is_identity() {
        let items = vec![
            make_framework("C", "brand"),
            make_framework("A", ""),
            make_framework("B", "brand brand"),
        ];
        let ranked = rank(&items, &[]);
        let names: Vec<&str> = ranked.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn matching_items_rank_first() {
        let items = vec![
            make_framework("Channel Plan", "budget across channels"),
            make_framework("Positioning Triangle", "where a brand can win"),
        ];
        let ranked = rank(&items, &kws(&["brand", "younger"]));
        assert_eq!(ranked[0].name, "Positioning Triangle");
        assert_eq!(ranked[1].name, "Channel Plan");
    }

    #[test]
    fn equal_scores_keep_input_order() {
        // Positions 3 and 5 both score 2; position 3 must stay ahead.
        let items = vec![
            make_framework("p0", "nothing"),
            make_framework("p1", "alpha"),
            make_framework("p2", "nothing"),
            make_framework("p3", "alpha beta"),
            make_framework("p4", "alpha beta gamma"),
            make_framework("p5", "beta alpha"),
        ];
        let ranked = rank(&items, &kws(&["alpha", "beta", "gamma"]));
        let names: Vec<&str> = ranked.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["p4", "p3", "p5", "p1", "p0", "p2"]);
    }

    #[test]
    fn rank_is_sorted_stable_permutation() {
        let items: Vec<Experience> = (0..12)
            .map(|i| {
                let tags: Vec<&str> = ["ai", "brand", "content", "launch"]
                    .iter()
                    .copied()
                    .filter(|_| i % 3 != 0)
                    .take(i % 5)
                    .collect();
                make_experience(&format!("case {i}"), "", &tags)
            })
            .collect();
        let keywords = kws(&["brand", "content", "launch", "case"]);

        let ranked = rank(&items, &keywords);
        assert_eq!(ranked.len(), items.len());

        let position = |exp: &Experience| {
            items
                .iter()
                .position(|candidate| std::ptr::eq(candidate, exp))
                .expect("ranked item comes from input")
        };

        let mut seen: Vec<usize> = ranked.iter().map(|&e| position(e)).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..items.len()).collect::<Vec<_>>());

        for pair in ranked.windows(2) {
            let (a, b) = (score_item(pair[0], &keywords), score_item(pair[1], &keywords));
            assert!(a >= b, "scores must be descending");
            if a == b {
                assert!(position(pair[0]) < position(pair[1]), "ties must keep input order");
            }
        }
    }

    #[test]
    fn score_items_preserves_order() {
        let items = vec![make_framework("x", "brand"), make_framework("y", "")];
        let scored = score_items(&items, &kws(&["brand"]));
        assert_eq!(scored[0].score, 1);
        assert_eq!(scored[1].score, 0);
        assert_eq!(scored[1].item.name, "y");
    }
}
