//! Library crate root for extracting AWS credential profiles as shell exports.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod credentials;
pub mod output;
pub mod runtime;
