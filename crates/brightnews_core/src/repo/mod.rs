//! Store abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for session and
//!   feed state.
//! - Keep store internals behind traits so services and tests can
//!   construct isolated instances.
//!
//! # Invariants
//! - Session stores enforce email uniqueness on every write path.
//! - Feed stores are read-only after construction.

pub mod feed_repo;
pub mod session_repo;
