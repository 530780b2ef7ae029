//! Display formatting for pence values.
//!
//! The domain passes integers everywhere; only notification text needs a
//! human-readable rendering.

// TODO: thousands separator
pub fn pounds(pence: impl Into<u64>) -> String {
    let pence = pence.into();
    format!("£{}.{:02}", pence / 100, pence % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds() {
        assert_eq!(pounds(150_u32), "£1.50");
        assert_eq!(pounds(100_u32), "£1.00");
        assert_eq!(pounds(5_u32), "£0.05");
        assert_eq!(pounds(0_u32), "£0.00");
        assert_eq!(pounds(179_000_u64), "£1790.00");
    }
}
