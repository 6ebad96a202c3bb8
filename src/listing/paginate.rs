//! Fixed-size pagination over a filtered, sorted sequence

use serde::Serialize;
use thiserror::Error;

/// Page size used by blog listings
pub const BLOG_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("page {requested} is out of range (1..={total_pages})")]
    OutOfRange { requested: usize, total_pages: usize },
}

/// Splits a sequence into pages of `page_size` items
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(count / page_size)`
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Clamp a requested page number into `1..=total_pages`.
    /// An empty sequence clamps to page 1.
    pub fn clamp(&self, requested: usize, count: usize) -> usize {
        requested.clamp(1, self.total_pages(count).max(1))
    }

    /// Page `number` (1-based) of `items`.
    ///
    /// Page 1 of an empty sequence is an empty page; any other page outside
    /// `1..=total_pages` is an error.
    pub fn page<'a, T>(&self, items: &'a [T], number: usize) -> Result<Page<'a, T>, PaginationError> {
        let total_pages = self.total_pages(items.len());

        let in_range = (1..=total_pages).contains(&number) || (total_pages == 0 && number == 1);
        if !in_range {
            return Err(PaginationError::OutOfRange {
                requested: number,
                total_pages,
            });
        }

        let start = ((number - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());

        Ok(Page {
            number,
            total_pages,
            total_items: items.len(),
            items: &items[start..end],
        })
    }

    /// Every page in order; empty input has no pages
    pub fn pages<'a, T>(&self, items: &'a [T]) -> Vec<Page<'a, T>> {
        let total_pages = self.total_pages(items.len());
        items
            .chunks(self.page_size)
            .enumerate()
            .map(|(i, chunk)| Page {
                number: i + 1,
                total_pages,
                total_items: items.len(),
                items: chunk,
            })
            .collect()
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: BLOG_PAGE_SIZE,
        }
    }
}

/// One page of results plus its navigation state
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a, T> {
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn prev(&self) -> Option<usize> {
        self.has_prev().then(|| self.number - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(Paginator::new(0).unwrap_err(), PaginationError::ZeroPageSize);
    }

    #[test]
    fn test_twenty_items_nine_per_page() {
        let items: Vec<usize> = (0..20).collect();
        let paginator = Paginator::new(9).unwrap();
        assert_eq!(paginator.total_pages(items.len()), 3);

        let first = paginator.page(&items, 1).unwrap();
        assert_eq!(first.items, &items[0..9]);
        assert!(!first.has_prev());
        assert_eq!(first.next(), Some(2));

        let last = paginator.page(&items, 3).unwrap();
        assert_eq!(last.items, &[18, 19]);
        assert_eq!(last.prev(), Some(2));
        assert!(!last.has_next());
    }

    #[test]
    fn test_pages_partition_input() {
        let paginator = Paginator::default();
        for len in [0usize, 1, 8, 9, 10, 18, 27, 31] {
            let items: Vec<usize> = (0..len).collect();
            let pages = paginator.pages(&items);
            assert_eq!(pages.len(), len.div_ceil(9));
            if let Some((last, full)) = pages.split_last() {
                assert!(full.iter().all(|p| p.items.len() == 9));
                assert!(!last.items.is_empty() && last.items.len() <= 9);
            }
            let rebuilt: Vec<usize> = pages.iter().flat_map(|p| p.items.iter().copied()).collect();
            assert_eq!(rebuilt, items);
        }
    }

    #[test]
    fn test_empty_sequence() {
        let items: Vec<usize> = Vec::new();
        let paginator = Paginator::default();
        assert_eq!(paginator.total_pages(0), 0);
        let page = paginator.page(&items, 1).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_prev());
        assert!(paginator.pages(&items).is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let items: Vec<usize> = (0..5).collect();
        let paginator = Paginator::default();
        assert_eq!(
            paginator.page(&items, 0).unwrap_err(),
            PaginationError::OutOfRange {
                requested: 0,
                total_pages: 1
            }
        );
        assert!(paginator.page(&items, 2).is_err());
        assert!(paginator.page(&Vec::<usize>::new(), 2).is_err());
    }

    #[test]
    fn test_clamp() {
        let paginator = Paginator::default();
        assert_eq!(paginator.clamp(0, 20), 1);
        assert_eq!(paginator.clamp(7, 20), 3);
        assert_eq!(paginator.clamp(2, 20), 2);
        assert_eq!(paginator.clamp(4, 0), 1);
    }
}
