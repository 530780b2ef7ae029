//! Inbound and outbound adapters around the application core.

pub mod csv;
