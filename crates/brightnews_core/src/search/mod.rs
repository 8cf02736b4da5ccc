//! Keyword filtering entry points.
//!
//! # Responsibility
//! - Expose the single substring-match rule shared by backend search
//!   and the client-side feed filter.
//! - Keep result shaping inside core.

pub mod filter;
