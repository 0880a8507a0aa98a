/// One page of a listing, plus what is needed to describe its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Number of the last page. An empty listing still has one (empty) page.
    pub fn last_page(&self) -> u64 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    /// 1-based position of the first item on this page.
    pub fn from(&self) -> Option<u64> {
        (!self.items.is_empty()).then(|| self.page.saturating_sub(1) * self.per_page + 1)
    }

    /// 1-based position of the last item on this page.
    pub fn to(&self) -> Option<u64> {
        self.from().map(|from| from + self.items.len() as u64 - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, page: u64, per_page: u64, total: u64) -> Page<u32> {
        Page {
            items,
            page,
            per_page,
            total,
        }
    }

    #[test]
    fn test_last_page() {
        assert_eq!(page(vec![], 1, 15, 0).last_page(), 1);
        assert_eq!(page(vec![1; 15], 1, 15, 15).last_page(), 1);
        assert_eq!(page(vec![1; 15], 1, 15, 16).last_page(), 2);
    }

    #[test]
    fn test_from_and_to() {
        let second = page(vec![1, 2, 3], 2, 5, 8);
        assert_eq!(second.from(), Some(6));
        assert_eq!(second.to(), Some(8));

        let past_end = page(vec![], 3, 5, 8);
        assert_eq!(past_end.from(), None);
        assert_eq!(past_end.to(), None);
    }
}
