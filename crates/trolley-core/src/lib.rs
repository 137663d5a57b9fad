//! # Trolley Core
//!
//! Pure types for the trolley cart kernel: products, cart entries, and the
//! snapshot codec.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over cart state.
//!
//! ## Key Types
//!
//! - [`Cart`] - The ordered list of held products, one entry per product id
//! - [`CartItem`] - A catalog product plus its held quantity
//! - [`ProductInfo`] - Catalog metadata as served by the product endpoint
//! - [`Stock`] - Available quantity as served by the stock endpoint
//! - [`ProductId`] - Strongly typed product identifier
//!
//! ## Snapshots
//!
//! The persistent form of a cart is a bare JSON array of flat items. See the
//! [`snapshot`] module.

pub mod cart;
pub mod error;
pub mod product;
pub mod snapshot;
pub mod types;

pub use cart::{Cart, CartItem};
pub use error::{CoreError, SnapshotError};
pub use product::{ProductInfo, Stock};
pub use types::ProductId;
