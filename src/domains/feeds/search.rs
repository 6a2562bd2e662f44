//! Feed search engine.
//!
//! Scans entries in document order for a case-insensitive substring match and
//! returns at most `max_results` hits. Results are never relevance-ranked: the
//! first matches found in the feed win.

use serde::{Deserialize, Serialize};

use super::FeedEntry;

/// Which entry fields a search inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFields {
    /// Match against the title or the description.
    TitleAndDescription,
    /// Match against the title only.
    TitleOnly,
}

/// One element of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchHit {
    /// A matching entry.
    Match { title: String, url: String },
    /// Informational marker returned in place of an empty result.
    Message { message: String },
}

impl SearchHit {
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message { .. })
    }
}

/// A configured search over feed entries.
#[derive(Debug, Clone)]
pub struct FeedSearch {
    fields: SearchFields,
    empty_message: String,
}

impl FeedSearch {
    pub fn new(fields: SearchFields, empty_message: impl Into<String>) -> Self {
        Self {
            fields,
            empty_message: empty_message.into(),
        }
    }

    /// Run the search.
    ///
    /// The returned list is never empty: when nothing matches, or when
    /// `max_results` is not positive, it holds exactly one
    /// [`SearchHit::Message`].
    pub fn run(&self, entries: &[FeedEntry], query: &str, max_results: i64) -> Vec<SearchHit> {
        let cap = usize::try_from(max_results).unwrap_or(0);
        if cap == 0 {
            return vec![self.sentinel()];
        }

        let query = query.to_lowercase();
        let mut hits = Vec::new();

        for entry in entries {
            if self.matches(entry, &query) {
                hits.push(SearchHit::Match {
                    title: entry.title.clone(),
                    url: entry.link.clone(),
                });
                if hits.len() >= cap {
                    break;
                }
            }
        }

        if hits.is_empty() {
            return vec![self.sentinel()];
        }
        hits
    }

    fn matches(&self, entry: &FeedEntry, query: &str) -> bool {
        if entry.title.to_lowercase().contains(query) {
            return true;
        }
        match self.fields {
            SearchFields::TitleAndDescription => entry.description.to_lowercase().contains(query),
            SearchFields::TitleOnly => false,
        }
    }

    fn sentinel(&self) -> SearchHit {
        SearchHit::Message {
            message: self.empty_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<FeedEntry> {
        vec![
            FeedEntry::new("Learn Python in 2025", "Beginner guide", "https://a"),
            FeedEntry::new("React Tutorial", "Build apps with JavaScript", "https://b"),
            FeedEntry::new("Python Projects", "", "https://c"),
            FeedEntry::new("Data Structures", "Examples written in python", "https://d"),
        ]
    }

    fn news() -> FeedSearch {
        FeedSearch::new(SearchFields::TitleAndDescription, "No results found")
    }

    fn videos() -> FeedSearch {
        FeedSearch::new(SearchFields::TitleOnly, "No videos found")
    }

    fn titles(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter()
            .filter_map(|h| match h {
                SearchHit::Match { title, .. } => Some(title.as_str()),
                SearchHit::Message { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_matches_in_document_order() {
        let hits = news().run(&entries(), "python", 10);
        assert_eq!(
            titles(&hits),
            vec!["Learn Python in 2025", "Python Projects", "Data Structures"]
        );
    }

    #[test]
    fn test_title_only_ignores_description() {
        let hits = videos().run(&entries(), "python", 10);
        assert_eq!(titles(&hits), vec!["Learn Python in 2025", "Python Projects"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            news().run(&entries(), "PYTHON", 3),
            news().run(&entries(), "python", 3)
        );
    }

    #[test]
    fn test_cap_stops_early() {
        let hits = news().run(&entries(), "python", 2);
        assert_eq!(titles(&hits), vec!["Learn Python in 2025", "Python Projects"]);
    }

    #[test]
    fn test_url_and_original_title_kept() {
        let hits = news().run(&entries(), "react", 3);
        assert_eq!(
            hits,
            vec![SearchHit::Match {
                title: "React Tutorial".to_string(),
                url: "https://b".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_match_returns_sentinel() {
        let hits = news().run(&entries(), "haskell", 3);
        assert_eq!(
            hits,
            vec![SearchHit::Message {
                message: "No results found".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let hits = news().run(&entries(), "", 10);
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|h| !h.is_message()));
    }

    #[test]
    fn test_non_positive_cap_returns_sentinel() {
        for cap in [0, -5] {
            let hits = videos().run(&entries(), "", cap);
            assert_eq!(hits.len(), 1);
            assert!(hits[0].is_message());
        }
    }

    #[test]
    fn test_cap_law() {
        for cap in 0..6 {
            for query in ["", "python", "zzz"] {
                let hits = news().run(&entries(), query, cap);
                assert!(hits.len() <= (cap as usize).max(1));
                assert!(!hits.is_empty());
            }
        }
    }

    #[test]
    fn test_empty_description_does_not_fail() {
        let entries = vec![FeedEntry::new("Untitled", "", "https://e")];
        let hits = news().run(&entries, "guide", 3);
        assert!(hits[0].is_message());
    }

    #[test]
    fn test_sentinel_serialization() {
        let value = serde_json::to_value(videos().run(&[], "x", 3)).unwrap();
        assert_eq!(value, serde_json::json!([{ "message": "No videos found" }]));
    }
}
