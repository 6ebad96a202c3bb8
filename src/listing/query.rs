//! Listing state carried in URL query parameters
//!
//! `search`, `tag` and `page` are the single source of truth for a blog
//! listing: state is parsed from the query string and written back to it.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters escaped in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    pub search: String,
    pub tag: Option<String>,
    /// 1-based page number
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            tag: None,
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Parse a query string such as `?search=crypto&tag=law&page=2`.
    ///
    /// Unknown keys are ignored; a missing, malformed or zero `page` is 1.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);

            match decode(key).as_str() {
                "search" => {
                    if !value.trim().is_empty() {
                        parsed.search = value;
                    }
                }
                "tag" => {
                    let value = value.trim();
                    parsed.tag = (!value.is_empty()).then(|| value.to_string());
                }
                "page" => {
                    parsed.page = value.trim().parse::<usize>().ok().filter(|p| *p > 0).unwrap_or(1);
                }
                other => tracing::trace!("Ignoring query parameter '{}'", other),
            }
        }

        parsed
    }

    /// Serialize to a query string without the leading `?`.
    ///
    /// Defaults are omitted, so the unfiltered first page is `""`.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.trim().is_empty() {
            parts.push(format!("search={}", encode(&self.search)));
        }
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.trim().is_empty()) {
            parts.push(format!("tag={}", encode(tag.trim())));
        }
        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }
        parts.join("&")
    }

    /// New search text; resets to page 1
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            search: search.to_string(),
            tag: self.tag.clone(),
            page: 1,
        }
    }

    /// Select a tag; resets to page 1
    pub fn with_tag(&self, tag: &str) -> Self {
        let tag = tag.trim();
        Self {
            search: self.search.clone(),
            tag: (!tag.is_empty()).then(|| tag.to_string()),
            page: 1,
        }
    }

    /// Drop the selected tag; resets to page 1
    pub fn clear_tag(&self) -> Self {
        Self {
            search: self.search.clone(),
            tag: None,
            page: 1,
        }
    }

    /// Navigate to another page, keeping the filters
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            search: self.search.clone(),
            tag: self.tag.clone(),
            page: page.max(1),
        }
    }

    /// Whether any filter is active
    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || self.tag.is_some()
    }

    /// Path plus query for this state, e.g. `/blog?tag=law&page=2`
    pub fn href(&self, base_path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            base_path.to_string()
        } else {
            format!("{}?{}", base_path, query)
        }
    }
}

impl fmt::Display for ListingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_VALUE).to_string()
}
