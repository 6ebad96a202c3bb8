//! Search-and-tag filter

use super::ContentRecord;

/// Free-text query plus optional tag, ANDed together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    query: String,
    tag: Option<String>,
}

impl Filter {
    /// Build a filter; a blank query or blank tag means "match everything"
    /// on that dimension. A non-blank query is matched as given, spaces
    /// included.
    pub fn new(query: &str, tag: Option<&str>) -> Self {
        let tag = tag
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        let query = if query.trim().is_empty() {
            String::new()
        } else {
            query.to_lowercase()
        };
        Self { query, tag }
    }

    /// True when neither a query nor a tag is set
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.tag.is_none()
    }

    pub fn matches<T: ContentRecord + ?Sized>(&self, record: &T) -> bool {
        if !self.query.is_empty() && !record.search_text().contains(&self.query) {
            return false;
        }
        match &self.tag {
            Some(tag) => record.has_tag(tag),
            None => true,
        }
    }

    /// The matching subsequence, in source order
    pub fn apply<'a, T: ContentRecord>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

/// Filter `records` by `query` and an optional `tag`
pub fn filter<'a, T: ContentRecord>(records: &'a [T], query: &str, tag: Option<&str>) -> Vec<&'a T> {
    Filter::new(query, tag).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BlogPost;
    use chrono::NaiveDate;

    fn post(title: &str, description: &str, tags: &[&str]) -> BlogPost {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut post = BlogPost::new(title, date);
        post.description = description.to_string();
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post
    }

    fn sample() -> Vec<BlogPost> {
        vec![
            post("Cryptocurrency Law in Indonesia", "Bappebti rules", &["Crypto", "regulation"]),
            post("Filing for Bankruptcy", "PKPU and pailit", &["bankruptcy"]),
            post("Drafting NDAs", "Confidentiality clauses", &["contract"]),
            post("Smart Contracts", "Code as contract", &["contract", "crypto"]),
        ]
    }

    fn titles(found: &[&BlogPost]) -> Vec<String> {
        found.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let posts = sample();
        let found = filter(&posts, "", None);
        assert_eq!(found.len(), posts.len());
        for (a, b) in found.iter().zip(posts.iter()) {
            assert_eq!(a.slug, b.slug);
        }
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let posts = sample();
        let found = filter(&posts, "crypto", None);
        assert_eq!(
            titles(&found),
            vec!["Cryptocurrency Law in Indonesia", "Smart Contracts"]
        );
    }

    #[test]
    fn test_query_without_occurrence_does_not_match() {
        let posts = vec![post("Drafting NDAs", "Confidentiality clauses", &["contract"])];
        assert!(filter(&posts, "crypto", None).is_empty());
    }

    #[test]
    fn test_query_searches_description_and_tags() {
        let posts = sample();
        assert_eq!(titles(&filter(&posts, "PKPU", None)), vec!["Filing for Bankruptcy"]);
        assert_eq!(titles(&filter(&posts, "regulation", None)).len(), 1);
    }

    #[test]
    fn test_tag_matches_case_insensitively() {
        let posts = sample();
        let found = filter(&posts, "", Some("CRYPTO"));
        assert_eq!(
            titles(&found),
            vec!["Cryptocurrency Law in Indonesia", "Smart Contracts"]
        );
    }

    #[test]
    fn test_unknown_tag_yields_empty() {
        let posts = sample();
        assert!(filter(&posts, "", Some("tax")).is_empty());
    }

    #[test]
    fn test_query_and_tag_are_anded() {
        let posts = sample();
        let found = filter(&posts, "smart", Some("contract"));
        assert_eq!(titles(&found), vec!["Smart Contracts"]);
        assert!(filter(&posts, "bankruptcy", Some("contract")).is_empty());
    }

    #[test]
    fn test_blank_query_and_tag_match_everything() {
        let posts = sample();
        assert_eq!(filter(&posts, "   ", Some("  ")).len(), posts.len());
        assert!(Filter::new(" ", Some("")).is_empty());
    }

    #[test]
    fn test_query_spaces_are_significant() {
        let posts = vec![
            post("Bylaws", "", &[]),
            post("Company Law", "", &[]),
        ];
        let found = filter(&posts, " law", None);
        assert_eq!(titles(&found), vec!["Company Law"]);
        for p in &found {
            assert!(p.search_text().contains(" law"));
        }
    }

    #[test]
    fn test_clearing_tag_restores_search_results() {
        let posts = sample();
        let with_tag = filter(&posts, "contract", Some("crypto"));
        assert_eq!(titles(&with_tag), vec!["Smart Contracts"]);
        let cleared = filter(&posts, "contract", None);
        assert_eq!(titles(&cleared), vec!["Drafting NDAs", "Smart Contracts"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let posts = sample();
        let first = titles(&filter(&posts, "law", Some("crypto")));
        let second = titles(&filter(&posts, "law", Some("crypto")));
        assert_eq!(first, second);
    }
}
