//! `shopfront-cart` — session-scoped shopping cart.
//!
//! The cart is an explicitly owned state container: the shell holds exactly
//! one per session and mutates it through the methods here. Derived values
//! (`total`, `item_count`, `summary`) are recomputed from the line items on
//! every read; there is no independently mutable total to drift.

pub mod cart;

pub use cart::{Cart, CartItem, CartSummary, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD};
