#![cfg_attr(test, allow(clippy::unit_arg))]

/// Game domain types and rules.
pub mod chess;
