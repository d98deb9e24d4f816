//! Subcommands of the `searchlab` binary

pub mod degrees;
pub mod play;
pub mod solve;
