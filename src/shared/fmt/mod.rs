//! Display formatting for domain quantities.
//!
//! `num` handles plain number strings and percentages; `decimal` handles
//! `rust_decimal::Decimal` quantities (prices, supplies, market caps).

pub mod decimal;
pub mod num;
