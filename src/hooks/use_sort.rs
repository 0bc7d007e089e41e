use gloo_storage::Storage;
use gloo_storage::errors::StorageError;
use yew::prelude::*;

use crate::config::Config;
use crate::models::catalog::SortOrder;

/// Handle returned by `use_sort` hook
#[derive(Clone, PartialEq)]
pub struct SortHandle {
    pub order: SortOrder,
    pub set_order: Callback<SortOrder>,
}

/// Custom hook for the listing sort order with localStorage persistence
#[hook]
pub fn use_sort() -> SortHandle {
    // Load sort order from localStorage, fallback to newest first
    let order = use_state(|| load_sort_preference().unwrap_or_default());

    // Effect: Persist sort order to localStorage on change
    {
        let order_value = *order;
        use_effect_with(order_value, move |order| {
            save_sort_preference(*order);
            || ()
        });
    }

    let set_order = {
        let order = order.clone();
        Callback::from(move |new_order| order.set(new_order))
    };

    SortHandle {
        order: *order,
        set_order,
    }
}

/// Load sort preference from localStorage
fn load_sort_preference() -> Option<SortOrder> {
    match gloo_storage::LocalStorage::get(Config::SORT_STORAGE_KEY) {
        Ok(order) => Some(order),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            gloo::console::warn!(format!("Sort preference unavailable ({e}), using default"));
            None
        }
    }
}

/// Save sort preference to localStorage
fn save_sort_preference(order: SortOrder) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::SORT_STORAGE_KEY, order) {
        gloo::console::warn!(format!("Failed to save sort order: {e:?}"));
    }
}
