/// Ordered slice of a larger result set plus the metadata needed to request
/// the next slice.
///
/// `is_last` is the only flag traversal relies on. `total_pages` and
/// `total_elements` are informational and may be missing or stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    pub is_first: bool,
    pub is_last: bool,
}

impl<T> Page<T> {
    /// Builds a page whose metadata is derived from a known element count.
    pub fn from_totals(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(size))
        };
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);

        Self {
            content,
            page,
            size,
            total_elements: Some(total_elements),
            total_pages: Some(total_pages),
            is_first: page == 0,
            is_last: u64::from(page) + 1 >= u64::from(total_pages),
        }
    }

    /// Replaces the content, keeping every metadata field untouched.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            is_first: self.is_first,
            is_last: self.is_last,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
