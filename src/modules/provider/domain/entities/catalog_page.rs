use super::raw_book::RawBook;

/// One page of results from a catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<RawBook>,
    /// Total hits reported by the provider, when it reports one
    pub total_items: Option<u32>,
}

impl CatalogPage {
    pub fn new(items: Vec<RawBook>, total_items: Option<u32>) -> Self {
        Self { items, total_items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
