// src/shared/display_order.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// New position for one row of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReorderItem {
    pub id: i32,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderValidationError {
    #[error("display_order {0} is used more than once")]
    DuplicateOrder(i32),

    #[error("id {0} appears more than once")]
    DuplicateId(i32),

    #[error("display_order must not be negative (got {0})")]
    NegativeOrder(i32),

    #[error("display_order {0} is out of range")]
    OrderOutOfRange(i32),
}

/// Position for a row appended to a list whose current maximum is
/// `current_max` (`None` for an empty list). `None` when the list already
/// ends at `i32::MAX`.
pub fn next_display_order(current_max: Option<i32>) -> Option<i32> {
    match current_max {
        Some(max) => max.checked_add(1),
        None => Some(0),
    }
}

/// Temporary value written in the first pass of a reorder. Distinct for
/// every valid target and never collides with a real (non-negative) order.
pub fn parked_display_order(display_order: i32) -> i32 {
    -1 - display_order
}

pub fn validate_reorder(items: &[ReorderItem]) -> Result<(), ReorderValidationError> {
    let mut ids = HashSet::with_capacity(items.len());
    let mut orders = HashSet::with_capacity(items.len());

    for item in items {
        if item.display_order < 0 {
            return Err(ReorderValidationError::NegativeOrder(item.display_order));
        }
        if item.display_order == i32::MAX {
            return Err(ReorderValidationError::OrderOutOfRange(item.display_order));
        }
        if !ids.insert(item.id) {
            return Err(ReorderValidationError::DuplicateId(item.id));
        }
        if !orders.insert(item.display_order) {
            return Err(ReorderValidationError::DuplicateOrder(item.display_order));
        }
    }

    Ok(())
}
