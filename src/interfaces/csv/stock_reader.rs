use crate::domain::coin::Denomination;
use crate::domain::product::Product;
use crate::error::{Result, VendError};
use serde::Deserialize;
use std::io::Read;

/// Reads product stock from a CSV source (`name,price,count` rows).
pub struct StockReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StockReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendError::from))
    }
}

/// One row of a coin-float file. Unknown denominations fail at parse
/// time, before the machine ever sees them.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct CoinRecord {
    pub denomination: Denomination,
    pub count: u32,
}

/// Reads a coin float from a CSV source (`denomination,count` rows).
pub struct FloatReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FloatReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn coins(self) -> impl Iterator<Item = Result<CoinRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendError::from))
    }
}
