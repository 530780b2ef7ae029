use crate::error::{Result, VendError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Face values accepted by the machine, in pence.
pub const DENOMINATIONS: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

/// A coin face value restricted to the fixed denomination set.
///
/// Construction is the single validation point: once a `Denomination`
/// exists it is known to be one of [`DENOMINATIONS`]. Serde goes through
/// the same gate, so deserializing `3` fails rather than producing an
/// invalid coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Denomination(u32);

impl Denomination {
    pub fn new(value: u32) -> Result<Self> {
        if DENOMINATIONS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(VendError::UnknownDenomination(value))
        }
    }

    /// The face value in pence.
    pub fn pence(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Denomination {
    type Error = VendError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Denomination> for u32 {
    fn from(denomination: Denomination) -> Self {
        denomination.0
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.0)
    }
}

/// One denomination slot in the machine's float: a face value and how
/// many of that coin the machine holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denomination: Denomination,
    pub count: u32,
}

impl Coin {
    pub fn new(denomination: Denomination, count: u32) -> Self {
        Self {
            denomination,
            count,
        }
    }

    pub fn increase_count(&mut self, increment: u32) -> u32 {
        self.count += increment;
        self.count
    }

    /// Fails with [`VendError::NegativeCount`] if the decrement would
    /// underflow; the count is untouched on failure.
    pub fn decrease_count(&mut self, decrement: u32) -> Result<u32> {
        if decrement > self.count {
            return Err(VendError::NegativeCount);
        }
        self.count -= decrement;
        Ok(self.count)
    }
}
