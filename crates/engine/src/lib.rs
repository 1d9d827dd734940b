//! Bravura Engine library.
//!
//! Wraps the character rules of `bravura-domain` in async use cases.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration (load, apply one rule, save)
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for unit and integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// E2E scenarios against the in-memory store.
#[cfg(test)]
mod e2e_tests;

pub use app::{App, Repositories, Services};
