//! Configuration modules, each loaded from environment variables:
//!
//! - [`cors`]: CORS allowed-origins configuration
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token signing configuration

pub mod cors;
pub mod database;
pub mod jwt;
