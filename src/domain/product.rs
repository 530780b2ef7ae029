use crate::error::{Result, VendError};
use serde::{Deserialize, Serialize};

/// A stocked product: display name, price in pence, units on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: u32,
    pub count: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u32, count: u32) -> Self {
        Self {
            name: name.into(),
            price,
            count,
        }
    }

    pub fn increase_count(&mut self, increment: u32) -> u32 {
        self.count += increment;
        self.count
    }

    /// Same contract as [`Coin::decrease_count`]: underflow is a hard
    /// error and the count stays put.
    ///
    /// [`Coin::decrease_count`]: crate::domain::coin::Coin::decrease_count
    pub fn decrease_count(&mut self, decrement: u32) -> Result<u32> {
        if decrement > self.count {
            return Err(VendError::NegativeCount);
        }
        self.count -= decrement;
        Ok(self.count)
    }
}
