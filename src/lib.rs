//! Client for the LocalEats restaurant guide API.

mod api_interfaces;
mod api_key;
pub mod cache;
pub mod client;
pub mod command;
pub mod config;
pub mod constants;
pub mod dao;
pub mod error;
pub mod filter;
pub mod image;
pub mod model;
pub mod query;
pub mod repository;
mod util;

pub use api_key::ApiKey;
pub use client::Client;
pub use config::Config;
pub use error::{ConfigError, DataError, InvalidArgument, SaveError};
pub use util::default_http_client;
