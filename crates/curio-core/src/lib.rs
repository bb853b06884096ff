//! # Curio Core
//!
//! Core types, traits, and error definitions for the Curio item service.
//! This crate provides the foundational abstractions shared by every layer
//! of the application.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
