//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod run;
pub mod show;
pub mod vars;
