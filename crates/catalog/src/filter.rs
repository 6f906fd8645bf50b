//! Filter/paginate engine: derive the visible page from the full catalog.
//!
//! Filtering is a pure derivation re-run on every input change. The
//! `Browser` container owns the filter state plus the current page and
//! enforces the one stateful rule: any filter change resets the page to 1,
//! so a stale page number from a previous filter is never kept.

use std::collections::BTreeSet;

use serde::Serialize;

use shopfront_core::Product;

/// Fixed number of products per page.
pub const PAGE_SIZE: usize = 12;

const DEFAULT_PRICE_MIN: f64 = 0.0;
const DEFAULT_PRICE_MAX: f64 = 1000.0;

/// The current search/category/price selection.
///
/// Every predicate has an explicit "no restriction" state: empty query and
/// empty category set match all products, and the default price range spans
/// the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    query: String,
    categories: BTreeSet<String>,
    price_range: (f64, f64),
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            categories: BTreeSet::new(),
            price_range: (DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Add the category to the selection, or remove it if already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn price_range(&self) -> (f64, f64) {
        self.price_range
    }

    /// Set the inclusive price bounds.
    ///
    /// Malformed input is normalized rather than propagated: NaN bounds fall
    /// back to the defaults and a reversed range is swapped.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        let mut min = if min.is_nan() { DEFAULT_PRICE_MIN } else { min };
        let mut max = if max.is_nan() { DEFAULT_PRICE_MAX } else { max };
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        self.price_range = (min, max);
    }

    /// Whether any predicate restricts the catalog.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || !self.categories.is_empty()
            || self.price_range != (DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)
    }

    /// All three predicates, composed with AND. Commutative by construction.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_query = self.query.is_empty()
            || product
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase());

        let matches_category =
            self.categories.is_empty() || self.categories.contains(&product.category);

        let (min, max) = self.price_range;
        let matches_price = product.price >= min && product.price <= max;

        matches_query && matches_category && matches_price
    }
}

/// Keep the products matching `filter`, preserving input order.
pub fn apply_filters(products: &[Product], filter: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// One visible page of a filtered catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub items: Vec<Product>,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Matching products across all pages. Zero means the filter matched
    /// nothing — an explicit empty state, distinct from "no filter applied".
    pub total_count: usize,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Slice one page out of a filtered list.
///
/// `requested_page` is clamped to `[1, max(1, total_pages)]`, so asking for a
/// page past the end shows the last page rather than an empty one.
pub fn paginate(filtered: Vec<Product>, requested_page: usize) -> PageView {
    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE);
    let page = requested_page.clamp(1, total_pages.max(1));

    let items = filtered
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    PageView {
        items,
        page,
        total_pages,
        total_count,
    }
}

/// Filter + page state for one browsing session.
///
/// Owned by a single consumer; every filter mutation resets the page to 1
/// and advances the view generation. Async fetches started under an older
/// generation should be discarded on arrival instead of applied to the
/// current view.
#[derive(Debug, Clone, PartialEq)]
pub struct Browser {
    filter: FilterState,
    page: usize,
    generation: u64,
}

impl Default for Browser {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            page: 1,
            generation: 0,
        }
    }
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Token identifying the current view state. Capture it when starting a
    /// fetch and check it with [`Browser::is_current`] when the fetch lands.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result fetched under `generation` still belongs to the
    /// current view.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.invalidate();
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.filter.toggle_category(category);
        self.invalidate();
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.filter.set_price_range(min, max);
        self.invalidate();
    }

    /// Reset every predicate and return to the first page.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.page = 1;
        self.generation += 1;
    }

    /// Navigate without touching the filter. Zero is treated as page 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn has_active_filters(&self) -> bool {
        self.filter.is_active()
    }

    /// Derive the page currently visible for `products`.
    pub fn visible_page(&self, products: &[Product]) -> PageView {
        paginate(apply_filters(products, &self.filter), self.page)
    }
}
