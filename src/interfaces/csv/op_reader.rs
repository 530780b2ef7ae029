use crate::error::{Result, VendError};
use serde::Deserialize;
use std::io::Read;

/// One row of a session script.
///
/// `value` carries the pence amount for `insert` and the product name
/// for `purchase`; `eject` and `balance` rows leave it empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OpRecord {
    pub op: OpKind,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Insert,
    Purchase,
    Eject,
    Balance,
}

/// Reads session ops from a CSV source.
///
/// Wraps `csv::Reader` and yields `Result<OpRecord>` lazily, so a long
/// script streams without loading into memory. Whitespace is trimmed and
/// record lengths are flexible.
pub struct OpReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OpReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn ops(self) -> impl Iterator<Item = Result<OpRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendError::from))
    }
}
