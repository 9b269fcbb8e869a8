//! # Product Catalog
//!
//! Owns every [`Product`] record, keyed by id.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Operations                                   │
//! │                                                                         │
//! │  add() ──────────► validate ──► assign next id ──► insert              │
//! │  update() ───────► validate ──► lookup ──► overwrite price + quantity  │
//! │  remove() ───────► lookup ──► delete (sales keep their snapshots)      │
//! │  set_discount() ─► lookup ──► replace discount                         │
//! │  adjust_stock() ─► lookup ──► check result >= 0 ──► apply delta        │
//! │  list() ─────────► products in id order (read only)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids come from a counter that only moves forward; removing product 3 never
//! lets a later product become product 3.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::{Discount, Money};
use crate::types::{Product, ProductId, FIRST_ID};
use crate::validation::{validate_name, validate_price, validate_stock_quantity};

/// The product arena.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: BTreeMap<ProductId, Product>,
    next_id: u64,
}

impl ProductCatalog {
    /// Creates an empty catalog whose first product will get id 1.
    pub fn new() -> Self {
        ProductCatalog {
            products: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }

    /// Adds a product with no discount and returns its new id.
    ///
    /// ## Errors
    /// - `Validation` if the name is blank, or price/quantity is negative
    pub fn add(
        &mut self,
        name: &str,
        price: Money,
        quantity: i64,
        category: &str,
        supplier: &str,
    ) -> CoreResult<ProductId> {
        validate_name("name", name)?;
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        let id = ProductId::take_next(&mut self.next_id);
        debug!(%id, name = %name.trim(), %price, quantity, "Adding product");

        self.products.insert(
            id,
            Product {
                id,
                name: name.trim().to_string(),
                price,
                quantity,
                category: category.trim().to_string(),
                supplier: supplier.trim().to_string(),
                discount: Discount::zero(),
            },
        );

        Ok(id)
    }

    /// Overwrites price and quantity (last write wins).
    ///
    /// Outstanding open sales are not consulted; their line items already hold
    /// their own snapshots.
    pub fn update(&mut self, id: ProductId, price: Money, quantity: i64) -> CoreResult<()> {
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        let product = self.get_mut(id)?;
        debug!(%id, %price, quantity, "Updating product");
        product.price = price;
        product.quantity = quantity;

        Ok(())
    }

    /// Permanently deletes a product and returns the removed record.
    pub fn remove(&mut self, id: ProductId) -> CoreResult<Product> {
        let product = self
            .products
            .remove(&id)
            .ok_or(CoreError::ProductNotFound(id))?;
        debug!(%id, name = %product.name, "Removed product");
        Ok(product)
    }

    /// Replaces the product's own discount.
    ///
    /// The range check lives in [`Discount`]'s constructors, so any value that
    /// reaches this point is already within [0, 1].
    pub fn set_discount(&mut self, id: ProductId, discount: Discount) -> CoreResult<()> {
        let product = self.get_mut(id)?;
        debug!(%id, %discount, "Setting product discount");
        product.discount = discount;
        Ok(())
    }

    /// Applies a signed stock delta (negative for shrinkage, positive for
    /// restocking) and returns the new quantity.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the id is unknown
    /// - `InsufficientStock` if the result would be negative; nothing changes
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> CoreResult<i64> {
        let product = self.get_mut(id)?;

        let new_quantity = product
            .quantity
            .checked_add(delta)
            .filter(|q| *q >= 0)
            .ok_or_else(|| CoreError::InsufficientStock {
                product_id: id,
                name: product.name.clone(),
                available: product.quantity,
                requested: delta.saturating_neg(),
            })?;

        debug!(%id, delta, new_quantity, "Adjusting stock");
        product.quantity = new_quantity;
        Ok(new_quantity)
    }

    /// Looks up a product.
    pub fn get(&self, id: ProductId) -> CoreResult<&Product> {
        self.products.get(&id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Mutable lookup, only for the sale path inside this crate.
    pub(crate) fn get_mut(&mut self, id: ProductId) -> CoreResult<&mut Product> {
        self.products
            .get_mut(&id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// All products, ordered by id ascending.
    pub fn list(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn catalog_with_milk() -> (ProductCatalog, ProductId) {
        let mut catalog = ProductCatalog::new();
        let id = catalog
            .add("Milk", Money::from_cents(1000), 5, "Dairy", "Acme")
            .unwrap();
        (catalog, id)
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut catalog = ProductCatalog::new();
        let a = catalog.add("A", Money::from_cents(100), 1, "", "").unwrap();
        let b = catalog.add("B", Money::from_cents(200), 2, "", "").unwrap();

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(a).unwrap().discount.is_zero());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let (mut catalog, milk) = catalog_with_milk();
        catalog.remove(milk).unwrap();

        let bread = catalog
            .add("Bread", Money::from_cents(250), 3, "Bakery", "Local")
            .unwrap();
        assert_eq!(bread.get(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut catalog = ProductCatalog::new();

        let err = catalog
            .add("Milk", Money::from_cents(-1), 5, "Dairy", "Acme")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = catalog
            .add("Milk", Money::from_cents(100), -5, "Dairy", "Acme")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert!(catalog.add(" ", Money::zero(), 0, "", "").is_err());
        assert!(catalog.is_empty());

        // A rejected add must not burn an id
        let id = catalog.add("Milk", Money::zero(), 0, "", "").unwrap();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn test_update_is_last_write_wins() {
        let (mut catalog, milk) = catalog_with_milk();

        catalog.update(milk, Money::from_cents(1200), 9).unwrap();
        catalog.update(milk, Money::from_cents(1100), 7).unwrap();

        let product = catalog.get(milk).unwrap();
        assert_eq!(product.price.cents(), 1100);
        assert_eq!(product.quantity, 7);
    }

    #[test]
    fn test_update_missing_or_invalid() {
        let (mut catalog, milk) = catalog_with_milk();

        let err = catalog
            .update(ProductId::new(42), Money::from_cents(1), 1)
            .unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));

        assert!(catalog.update(milk, Money::from_cents(100), -1).is_err());
        assert_eq!(catalog.get(milk).unwrap().quantity, 5);
    }

    #[test]
    fn test_remove() {
        let (mut catalog, milk) = catalog_with_milk();

        let removed = catalog.remove(milk).unwrap();
        assert_eq!(removed.name, "Milk");
        assert!(catalog.get(milk).is_err());
        assert_eq!(catalog.remove(milk).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_set_discount() {
        let (mut catalog, milk) = catalog_with_milk();

        catalog
            .set_discount(milk, Discount::from_fraction(0.2).unwrap())
            .unwrap();
        assert_eq!(catalog.get(milk).unwrap().discounted_price().cents(), 800);

        assert!(catalog
            .set_discount(ProductId::new(9), Discount::zero())
            .is_err());
    }

    #[test]
    fn test_adjust_stock() {
        let (mut catalog, milk) = catalog_with_milk();

        assert_eq!(catalog.adjust_stock(milk, 10).unwrap(), 15);
        assert_eq!(catalog.adjust_stock(milk, -15).unwrap(), 0);

        let err = catalog.adjust_stock(milk, -1).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => {
                assert_eq!(available, 0);
                assert_eq!(requested, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(catalog.get(milk).unwrap().quantity, 0);
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let mut catalog = ProductCatalog::new();
        for name in ["C", "A", "B"] {
            catalog.add(name, Money::from_cents(100), 1, "", "").unwrap();
        }

        let ids: Vec<u64> = catalog.list().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
