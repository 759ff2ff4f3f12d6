//! Business rules of the portfolio comment service.
//!
//! The use cases only depend on the [`repositories`] traits and
//! are agnostic of the storage backend that implements them.

pub mod display;
pub mod limit;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use portfolio_entities::{comment::*, id::*, time::*};
}
