
pub const DEFAULT_MINIMUM_STOCK: u32 = 10;
pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Quantity under which a product is considered below minimum stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockThreshold(u32);

impl StockThreshold {
    pub fn new(limit: u32) -> Self {
        Self(limit)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true when `quantity` is strictly lower than the threshold.
    pub fn is_below(&self, quantity: i32) -> bool {
        i64::from(quantity) < i64::from(self.0)
    }
}

impl Default for StockThreshold {
    fn default() -> Self {
        Self(DEFAULT_MINIMUM_STOCK)
    }
}

impl std::fmt::Display for StockThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based page index plus a page size already clamped to
/// `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Builds a request, applying defaults for missing values and silently
    /// clamping the size into the allowed range.
    pub fn new(page: Option<u32>, size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            size: clamp_page_size(size.unwrap_or(DEFAULT_PAGE_SIZE)),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Same size, next page index.
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
        }
    }

    /// Number of rows to skip for offset-based sources.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

pub fn clamp_page_size(size: u32) -> u32 {
    size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_apply_defaults_when_values_are_missing() {
        let request = PageRequest::new(None, None);

        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 20);
    }

    #[test]
    fn should_clamp_size_above_maximum_to_100() {
        let request = PageRequest::new(Some(3), Some(150));

        assert_eq!(request.page(), 3);
        assert_eq!(request.size(), 100);
    }

    #[test]
    fn should_raise_zero_size_to_minimum() {
        assert_eq!(PageRequest::new(None, Some(0)).size(), 1);
    }

    #[test]
    fn should_advance_page_and_keep_size() {
        let request = PageRequest::new(Some(1), Some(50)).next();

        assert_eq!(request.page(), 2);
        assert_eq!(request.size(), 50);
        assert_eq!(request.offset(), 100);
    }

    #[test]
    fn should_use_ten_as_default_threshold() {
        assert_eq!(StockThreshold::default().value(), 10);
    }

    #[test]
    fn should_not_be_below_threshold_at_boundary() {
        let threshold = StockThreshold::new(10);

        assert!(!threshold.is_below(10));
        assert!(threshold.is_below(9));
        assert!(threshold.is_below(0));
        assert!(threshold.is_below(-1));
    }

    proptest! {
        #[test]
        fn size_is_always_within_bounds(size in any::<u32>()) {
            let request = PageRequest::new(None, Some(size));
            prop_assert!((MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&request.size()));
        }

        #[test]
        fn valid_sizes_are_kept_unchanged(size in 1u32..=100) {
            prop_assert_eq!(PageRequest::new(None, Some(size)).size(), size);
        }

        #[test]
        fn oversized_requests_use_exactly_max(size in 101u32..) {
            prop_assert_eq!(PageRequest::new(None, Some(size)).size(), MAX_PAGE_SIZE);
        }

        #[test]
        fn below_minimum_iff_quantity_lower_than_limit(quantity in any::<i32>(), limit in 0u32..1000) {
            let threshold = StockThreshold::new(limit);
            prop_assert_eq!(threshold.is_below(quantity), i64::from(quantity) < i64::from(limit));
        }
    }
}
