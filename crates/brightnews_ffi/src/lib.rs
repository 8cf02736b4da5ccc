//! App-shell binding crate for BrightNews core.

pub mod api;
