//! Law tests for the identity library: one module per capability family,
//! property-based where arbitrary values matter, plus coverage for the
//! dynamic capability witness.

pub mod arb;

#[cfg(test)]
mod laws;
