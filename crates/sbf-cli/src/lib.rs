//! # sbf-cli — command handlers
//!
//! One module per subcommand; each exposes its clap `Args` struct and a
//! `run` function returning `anyhow::Result<()>`. The binary entry point
//! in `main.rs` only assembles and dispatches.

pub mod convert;
pub mod split;
pub mod validate;
