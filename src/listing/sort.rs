//! Ordering for listings

use indexmap::IndexMap;
use std::borrow::Borrow;

use crate::content::{BlogPost, GlossaryTerm};

/// Sort posts newest first. Equal dates keep their relative order.
pub fn sort_by_date_desc<P: Borrow<BlogPost>>(posts: &mut [P]) {
    posts.sort_by(|a, b| {
        let (a, b): (&BlogPost, &BlogPost) = (a.borrow(), b.borrow());
        b.date.cmp(&a.date)
    });
}

/// Group terms by uppercase first letter, groups in alphabetical order.
/// Terms keep their incoming order inside a group.
pub fn group_alphabetically<'a, I>(terms: I) -> IndexMap<char, Vec<&'a GlossaryTerm>>
where
    I: IntoIterator<Item = &'a GlossaryTerm>,
{
    let mut groups: IndexMap<char, Vec<&'a GlossaryTerm>> = IndexMap::new();
    for term in terms {
        groups.entry(term.group_key()).or_default().push(term);
    }
    groups.sort_keys();
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(title: &str, month: u32, day: u32) -> BlogPost {
        let date = NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        BlogPost::new(title, date)
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![post("jan", 1, 1), post("mar", 3, 1), post("feb", 2, 1)];
        sort_by_date_desc(&mut posts);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["mar", "feb", "jan"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut posts = vec![
            post("a", 1, 1),
            post("b", 5, 1),
            post("c", 1, 1),
            post("d", 1, 1),
        ];
        sort_by_date_desc(&mut posts);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_sort_borrowed_view() {
        let posts = vec![post("old", 1, 1), post("new", 2, 1)];
        let mut view: Vec<&BlogPost> = posts.iter().collect();
        sort_by_date_desc(&mut view);
        assert_eq!(view[0].title, "new");
        assert_eq!(posts[0].title, "old");
    }

    #[test]
    fn test_group_alphabetically() {
        let terms = vec![
            GlossaryTerm::new("Wanprestasi", "x"),
            GlossaryTerm::new("akta", "x"),
            GlossaryTerm::new("Actio pauliana", "x"),
            GlossaryTerm::new("pailit", "x"),
        ];
        let groups = group_alphabetically(&terms);
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!['A', 'P', 'W']);
        let a: Vec<_> = groups[&'A'].iter().map(|t| t.term.as_str()).collect();
        assert_eq!(a, vec!["akta", "Actio pauliana"]);
    }

    #[test]
    fn test_group_empty() {
        let terms: Vec<GlossaryTerm> = Vec::new();
        assert!(group_alphabetically(&terms).is_empty());
    }
}
