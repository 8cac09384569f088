//! Admin operations: withdrawal approval.
//!
//! Types live in the `withdrawal` slice; this module only adds the
//! admin-gated sub-client.

#[cfg(feature = "http")]
pub mod client;
