//! Display of page-view counters

use std::fmt;

/// A page-view count as shown next to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCount {
    Known(u64),
    /// The counter could not be fetched
    Unavailable,
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewCount::Known(n) => f.write_str(&group_thousands(*n)),
            ViewCount::Unavailable => f.write_str("–"),
        }
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
