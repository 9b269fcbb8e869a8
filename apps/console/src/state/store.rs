//! # Store State
//!
//! Shared handle to the one [`Store`] a console session works on.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>`. Every command does its whole
//! job inside a single `with_store`/`with_store_mut` call, so the stock check
//! and decrement of an item addition, or the finalize and revenue posting of
//! a sale completion, never interleave with another command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command A ──lock──► [ check stock → decrement → append ] ──unlock──►  │
//! │  command B ───────────────── waits ─────────────────────► lock ──► ... │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mart_core::Store;

/// Cloneable, lock-protected store handle.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Creates a handle around an empty store.
    pub fn new() -> Self {
        Self::from_store(Store::new())
    }

    /// Wraps an existing store (used for the demo seed and in tests).
    pub fn from_store(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store_state.with_store(|s| s.list_products().count());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|s| s.add_to_sale(sale, product, 2))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        f(&mut self.lock())
    }

    // A panic inside a closure cannot leave the store half-updated: core
    // operations validate before they write. The poisoned guard is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mart_core::Money;
    use std::thread;

    #[test]
    fn test_clones_share_one_store() {
        let state = StoreState::new();
        let other = state.clone();

        other
            .with_store_mut(|s| s.add_product("Milk", Money::from_cents(100), 1, "", ""))
            .unwrap();

        assert_eq!(state.with_store(|s| s.list_products().count()), 1);
    }

    #[test]
    fn test_concurrent_sales_never_oversell() {
        let state = StoreState::new();
        let milk = state
            .with_store_mut(|s| s.add_product("Milk", Money::from_cents(100), 50, "", ""))
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    let mut sold = 0;
                    for _ in 0..20 {
                        let ok = state.with_store_mut(|s| {
                            let sale = s.create_sale();
                            s.add_to_sale(sale, milk, 1).is_ok()
                        });
                        if ok {
                            sold += 1;
                        }
                    }
                    sold
                })
            })
            .collect();

        let sold: i64 = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(sold, 50);
        assert_eq!(state.with_store(|s| s.product(milk).unwrap().quantity), 0);
    }
}
