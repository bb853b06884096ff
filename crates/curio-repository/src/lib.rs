//! # Curio Repository
//!
//! Data-access layer for the Curio item service: the Postgres connection
//! pool and the `ItemRepository` implementation.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
