//! Glossary view: filtered terms grouped by first letter

use indexmap::IndexMap;
use serde::Serialize;

use super::{group_alphabetically, Filter};
use crate::content::GlossaryTerm;

/// The glossary as shown for one search/tag/anchor
#[derive(Debug, Clone, Serialize)]
pub struct GlossaryView<'a> {
    pub groups: IndexMap<char, Vec<&'a GlossaryTerm>>,
    /// Term opened by the URL hash, if it is visible
    pub expanded: Option<&'a GlossaryTerm>,
    pub total: usize,
}

impl<'a> GlossaryView<'a> {
    /// Filter and group `terms`; `anchor` is the URL hash (with or without `#`)
    pub fn build(terms: &'a [GlossaryTerm], search: &str, tag: Option<&str>, anchor: Option<&str>) -> Self {
        let matches = Filter::new(search, tag).apply(terms);
        let expanded = anchor
            .and_then(|a| find_by_anchor(terms, a))
            .filter(|term| matches.iter().any(|m| m.term == term.term));
        let total = matches.len();

        Self {
            groups: group_alphabetically(matches),
            expanded,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Letters that have at least one visible term
    pub fn letters(&self) -> Vec<char> {
        self.groups.keys().copied().collect()
    }
}

/// Find the term whose slugified text equals `anchor`
pub fn find_by_anchor<'a>(terms: &'a [GlossaryTerm], anchor: &str) -> Option<&'a GlossaryTerm> {
    let anchor = anchor.trim().trim_start_matches('#');
    if anchor.is_empty() {
        return None;
    }
    let wanted = slug::slugify(anchor);
    terms.iter().find(|t| t.anchor() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> Vec<GlossaryTerm> {
        let mut pailit = GlossaryTerm::new("Pailit", "Bankruptcy declared by the commercial court.");
        pailit.tags = vec!["Bankruptcy".to_string()];
        let mut pkpu = GlossaryTerm::new("PKPU", "Suspension of debt payment obligations.");
        pkpu.tags = vec!["bankruptcy".to_string()];
        let mut akta = GlossaryTerm::new("Akta notaris", "A deed drawn up by a notary.");
        akta.tags = vec!["notary".to_string()];
        vec![akta, pailit, pkpu]
    }

    #[test]
    fn test_build_groups() {
        let terms = terms();
        let view = GlossaryView::build(&terms, "", None, None);
        assert_eq!(view.letters(), vec!['A', 'P']);
        assert_eq!(view.groups[&'P'].len(), 2);
        assert_eq!(view.total, 3);
        assert!(view.expanded.is_none());
    }

    #[test]
    fn test_build_with_tag_and_search() {
        let terms = terms();
        let view = GlossaryView::build(&terms, "court", Some("BANKRUPTCY"), None);
        assert_eq!(view.total, 1);
        assert_eq!(view.groups[&'P'][0].term, "Pailit");

        let none = GlossaryView::build(&terms, "deed", Some("bankruptcy"), None);
        assert!(none.is_empty());
        assert!(none.groups.is_empty());
    }

    #[test]
    fn test_anchor_expands_term() {
        let terms = terms();
        let view = GlossaryView::build(&terms, "", None, Some("#akta-notaris"));
        assert_eq!(view.expanded.map(|t| t.term.as_str()), Some("Akta notaris"));
    }

    #[test]
    fn test_hidden_anchor_not_expanded() {
        let terms = terms();
        let view = GlossaryView::build(&terms, "", Some("bankruptcy"), Some("akta-notaris"));
        assert!(view.expanded.is_none());
    }

    #[test]
    fn test_find_by_anchor() {
        let terms = terms();
        assert_eq!(find_by_anchor(&terms, "pkpu").unwrap().term, "PKPU");
        assert!(find_by_anchor(&terms, "#unknown").is_none());
        assert!(find_by_anchor(&terms, "#").is_none());
    }
}
