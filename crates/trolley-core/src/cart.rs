//! Cart state: an ordered list of held products.
//!
//! Invariants maintained by every constructor and mutator:
//! - at most one entry per product id
//! - every amount is at least 1
//! - insertion order is preserved: new items append, updates stay in place

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::product::ProductInfo;
use crate::types::ProductId;

/// A catalog product held in the cart together with its quantity.
///
/// Serializes flat, reproducing the persisted entry shape:
/// `{"id":..,"title":..,"price":..,"image":..,"amount":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The catalog product.
    #[serde(flatten)]
    pub product: ProductInfo,
    /// Quantity held, always >= 1.
    pub amount: u32,
}

impl CartItem {
    /// Create an item holding `amount` units of `product`.
    pub fn new(product: ProductInfo, amount: u32) -> Self {
        Self { product, amount }
    }

    /// The product id of this entry.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times held amount.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// The ordered cart: one entry per product id, insertion order preserved.
///
/// A cart serializes as a bare JSON array of flat items. Note that the
/// validating entry point for untrusted data is [`crate::snapshot::decode`];
/// the mutators here keep the invariants for in-process use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from items, validating the invariants.
    ///
    /// Rejects duplicate product ids and zero amounts. Item order is kept.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CoreError::DuplicateProduct(item.id()));
            }
            if item.amount == 0 {
                return Err(CoreError::InvalidAmount {
                    product: item.id(),
                    amount: 0,
                });
            }
        }
        Ok(Self { items })
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Look up the entry for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Whether an entry for this product exists.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// The held amount for a product, if present.
    pub fn amount_of(&self, id: ProductId) -> Option<u32> {
        self.get(id).map(|item| item.amount)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no products.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new entry holding one unit of `product`.
    ///
    /// Fails if an entry for the product already exists.
    pub fn add_new(&mut self, product: ProductInfo) -> Result<(), CoreError> {
        if self.contains(product.id) {
            return Err(CoreError::DuplicateProduct(product.id));
        }
        self.items.push(CartItem::new(product, 1));
        Ok(())
    }

    /// Increment the held amount of an existing entry by one.
    ///
    /// Returns the new amount.
    pub fn increment(&mut self, id: ProductId) -> Result<u32, CoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(CoreError::UnknownProduct(id))?;
        item.amount += 1;
        Ok(item.amount)
    }

    /// Set the held amount of an existing entry to exactly `amount`.
    pub fn set_amount(&mut self, id: ProductId, amount: u32) -> Result<(), CoreError> {
        if amount == 0 {
            return Err(CoreError::InvalidAmount {
                product: id,
                amount,
            });
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(CoreError::UnknownProduct(id))?;
        item.amount = amount;
        Ok(())
    }

    /// Remove the entry for a product, returning it if it was present.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Total units held across all entries.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Sum of all entry subtotals.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
