use serde::{Deserialize, Serialize};

use shopfront_core::{Product, ProductId};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

/// Flat shipping rate below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: f64 = 5.0;

/// Cart line: one product-quantity pairing.
///
/// Invariant: `quantity >= 1` for any line present in a cart. Decrementing a
/// line to zero removes it; a zero-quantity line is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// Order summary derived from the cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CartSummary {
    /// How much more to add for free shipping, if the threshold is not met.
    pub fn remaining_for_free_shipping(&self) -> Option<f64> {
        if self.shipping > 0.0 {
            Some(FREE_SHIPPING_THRESHOLD - self.subtotal)
        } else {
            None
        }
    }
}

/// In-memory shopping cart for one session.
///
/// Line items keep insertion order (display order). All mutations are total:
/// malformed input (zero quantity, unknown id) is a no-op, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart (session start).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the same product id if present,
    /// otherwise appends a new line. `quantity == 0` is a no-op.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem { product, quantity });
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// `new_quantity <= 0` removes the line entirely (decrementing to zero is
    /// removal, not a stored zero). Unknown product ids are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line for `product_id` if present.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines (badge count, not line count).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines. Recomputed on every read.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.price * f64::from(i.quantity))
            .sum()
    }

    /// Order summary with the shipping rule applied. An empty cart ships
    /// nothing and owes nothing.
    pub fn summary(&self) -> CartSummary {
        let subtotal = self.total();
        let shipping = if self.is_empty() || subtotal >= FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING_RATE
        };

        CartSummary {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}
