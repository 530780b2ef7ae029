use crate::domain::product::Product;
use crate::error::{Result, VendError};
use std::collections::HashMap;

/// Product catalog with case-insensitive lookup.
///
/// Keys are lower-cased once at construction; probes lower-case only the
/// incoming name. Two products whose names differ only by case collapse
/// to one entry, last one in wins.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: HashMap<String, Product>,
}

impl Inventory {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|p| (p.name.to_lowercase(), p))
            .collect();
        Self { products }
    }

    pub fn find(&self, name: &str) -> Result<&Product> {
        self.products
            .get(&name.to_lowercase())
            .ok_or_else(|| VendError::ProductNotFound(name.to_owned()))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Product> {
        self.products
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| VendError::ProductNotFound(name.to_owned()))
    }

    pub fn increase_count(&mut self, name: &str, increase_by: u32) -> Result<u32> {
        Ok(self.find_mut(name)?.increase_count(increase_by))
    }

    pub fn decrease_count(&mut self, name: &str, decrease_by: u32) -> Result<u32> {
        self.find_mut(name)?.decrease_count(decrease_by)
    }

    /// Products sorted by name, for stable reporting.
    pub fn products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}
