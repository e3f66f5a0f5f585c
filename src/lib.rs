pub mod config;
pub mod error;
pub mod questions;
pub mod routes;
pub mod server;
pub mod writer;

pub use config::Config;
pub use questions::{normalize, CanonicalQuestion};
