//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `view.rs` — Derived display/chart data, ready for rendering
//! - `client.rs` — Sub-client with HTTP methods

pub mod coin;
pub mod price_history;
