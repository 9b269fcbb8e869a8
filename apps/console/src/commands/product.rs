//! # Product Commands
//!
//! Catalog maintenance: everything the "Product Management" menu can do.

use mart_core::{Discount, Money, Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::rejected;
use crate::error::ApiError;
use crate::state::StoreState;

/// Input for [`add_product`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub name: String,
    pub price: Money,
    pub quantity: i64,
    pub category: String,
    pub supplier: String,
}

pub fn add_product(store: &StoreState, req: AddProductRequest) -> Result<ProductId, ApiError> {
    debug!(name = %req.name, price = %req.price, quantity = req.quantity, "add_product command");

    let id = store
        .with_store_mut(|s| {
            s.add_product(&req.name, req.price, req.quantity, &req.category, &req.supplier)
        })
        .map_err(|e| rejected("add_product", e))?;

    info!(product_id = %id, name = %req.name, "Product added");
    Ok(id)
}

/// Overwrites price and quantity on hand.
pub fn update_product(
    store: &StoreState,
    id: ProductId,
    price: Money,
    quantity: i64,
) -> Result<(), ApiError> {
    debug!(product_id = %id, %price, quantity, "update_product command");

    store
        .with_store_mut(|s| s.update_product(id, price, quantity))
        .map_err(|e| rejected("update_product", e))?;

    info!(product_id = %id, "Product updated");
    Ok(())
}

pub fn remove_product(store: &StoreState, id: ProductId) -> Result<Product, ApiError> {
    debug!(product_id = %id, "remove_product command");

    let removed = store
        .with_store_mut(|s| s.remove_product(id))
        .map_err(|e| rejected("remove_product", e))?;

    info!(product_id = %id, name = %removed.name, "Product removed");
    Ok(removed)
}

/// Sets a product discount given as a fraction (`0.15` = 15% off).
pub fn set_product_discount(
    store: &StoreState,
    id: ProductId,
    fraction: f64,
) -> Result<Discount, ApiError> {
    debug!(product_id = %id, fraction, "set_product_discount command");

    let discount = Discount::from_fraction(fraction).map_err(|e| rejected("set_product_discount", e))?;
    store
        .with_store_mut(|s| s.set_product_discount(id, discount))
        .map_err(|e| rejected("set_product_discount", e))?;

    info!(product_id = %id, %discount, "Product discount set");
    Ok(discount)
}

/// Restocks (positive) or writes off (negative); returns the new quantity.
pub fn adjust_stock(store: &StoreState, id: ProductId, delta: i64) -> Result<i64, ApiError> {
    debug!(product_id = %id, delta, "adjust_stock command");

    let quantity = store
        .with_store_mut(|s| s.adjust_stock(id, delta))
        .map_err(|e| rejected("adjust_stock", e))?;

    info!(product_id = %id, delta, quantity, "Stock adjusted");
    Ok(quantity)
}

pub fn list_products(store: &StoreState) -> Vec<Product> {
    debug!("list_products command");
    store.with_store(|s| s.list_products().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn milk() -> AddProductRequest {
        AddProductRequest {
            name: "Milk".to_string(),
            price: Money::from_cents(1000),
            quantity: 5,
            category: "Dairy".to_string(),
            supplier: "Acme".to_string(),
        }
    }

    #[test]
    fn test_add_update_list() {
        let store = StoreState::new();
        let id = add_product(&store, milk()).unwrap();

        update_product(&store, id, Money::from_cents(1100), 8).unwrap();

        let products = list_products(&store);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.cents(), 1100);
        assert_eq!(products[0].quantity, 8);
    }

    #[test]
    fn test_invalid_product_is_validation_error() {
        let store = StoreState::new();
        let mut req = milk();
        req.price = Money::from_cents(-5);

        let err = add_product(&store, req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list_products(&store).is_empty());
    }

    #[test]
    fn test_remove_unknown_product() {
        let store = StoreState::new();
        let err = remove_product(&store, ProductId::new(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_discount_out_of_range() {
        let store = StoreState::new();
        let id = add_product(&store, milk()).unwrap();

        let err = set_product_discount(&store, id, 1.5).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let discount = set_product_discount(&store, id, 0.25).unwrap();
        assert_eq!(discount.bps(), 2500);
    }

    #[test]
    fn test_adjust_stock_below_zero() {
        let store = StoreState::new();
        let id = add_product(&store, milk()).unwrap();

        assert_eq!(adjust_stock(&store, id, 3).unwrap(), 8);
        let err = adjust_stock(&store, id, -9).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }
}
