use crate::currency;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VendError>;

/// Failure taxonomy for the vending machine.
///
/// The first two kinds are invariant violations: they indicate caller
/// misuse and always propagate. The next four are business errors with a
/// defined recovery path inside [`VendingMachine::purchase`]; they never
/// escape that boundary as `Err`. `Csv` and `Io` belong to the CSV
/// adapters and are never produced by the domain.
///
/// [`VendingMachine::purchase`]: crate::application::machine::VendingMachine::purchase
#[derive(Error, Debug)]
pub enum VendError {
    #[error("{0} is not a valid coin denomination (valid: 1 2 5 10 20 50 100 200)")]
    UnknownDenomination(u32),
    #[error("count cannot go below zero")]
    NegativeCount,
    #[error("no such product: {0}")]
    ProductNotFound(String),
    #[error("product out of stock: {0}")]
    OutOfStock(String),
    #[error("Insufficient payment, please provide an additional {}", currency::pounds(*shortfall))]
    InsufficientFunds { shortfall: u32 },
    #[error("exact change not available")]
    ExactChangeUnavailable,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_formats_shortfall() {
        let err = VendError::InsufficientFunds { shortfall: 100 };
        assert_eq!(
            err.to_string(),
            "Insufficient payment, please provide an additional £1.00"
        );
    }

    #[test]
    fn test_unknown_denomination_names_value() {
        let err = VendError::UnknownDenomination(3);
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains("1 2 5 10 20 50 100 200"));
    }
}
