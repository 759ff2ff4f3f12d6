#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # portfolio-entities
//!
//! Reusable, agnostic domain entities for the portfolio comment service.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod id;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
