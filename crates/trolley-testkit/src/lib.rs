//! # Trolley Testkit
//!
//! Testing utilities for Trolley.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Pinned snapshot texts with the carts they encode
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: In-memory components and helper doubles for cart tests
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the persisted snapshot shape:
//!
//! ```rust
//! use trolley_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, encoded) in verify_all_vectors() {
//!     assert!(matches, "{} drifted: {}", name, encoded);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use trolley_testkit::generators::{cart_from_params, CartParams};
//!
//! proptest! {
//!     #[test]
//!     fn test_carts_have_unique_entries(params: CartParams) {
//!         let cart = cart_from_params(&params);
//!         prop_assert_eq!(cart.len(), params.entries.len());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up cart scenarios:
//!
//! ```rust,ignore
//! use trolley::ProductId;
//! use trolley_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! fixture.stock_product(1, "Hover Sneaker", 179.9, 5);
//! let notifier = fixture.notifier.clone();
//!
//! let mut cart = fixture.open().await;
//! cart.add_product(ProductId::new(1)).await?;
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    product_info, sample_products, FailingCatalog, FailingStore, RecordingNotifier, TestFixture,
};
pub use generators::{cart_from_params, CartParams};
pub use vectors::{
    all_vectors, rejection_vectors, verify_all_vectors, verify_rejection_vectors, GoldenVector,
    RejectionVector,
};
