//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods (where data accumulates)
//! - `client.rs` — Sub-client driving the resource slice through operations

pub mod admin;
pub mod asset;
pub mod chat;
pub mod coin;
pub mod order;
pub mod payment_details;
pub mod wallet;
pub mod watchlist;
pub mod withdrawal;
