//! Tag index across a collection

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::ContentRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// First spelling seen in the collection
    pub name: String,
    pub slug: String,
    pub count: usize,
}

/// Distinct tags, merged case-insensitively, most used first
pub fn tag_index<T: ContentRecord>(records: &[T]) -> Vec<TagCount> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut tags: Vec<TagCount> = Vec::new();

    for record in records {
        let mut counted = HashSet::new();
        for tag in record.category_tags() {
            let name = tag.trim();
            if name.is_empty() {
                continue;
            }
            let key = name.to_lowercase();
            if !counted.insert(key.clone()) {
                continue;
            }
            match positions.get(&key) {
                Some(&i) => tags[i].count += 1,
                None => {
                    positions.insert(key, tags.len());
                    tags.push(TagCount {
                        name: name.to_string(),
                        slug: slug::slugify(name),
                        count: 1,
                    });
                }
            }
        }
    }

    tags.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    tags
}
