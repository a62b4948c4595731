//! Configuration loading
//!
//! Reads [`ClientConfig`](korapay_domain::ClientConfig) from environment
//! variables and TOML/JSON files, and loads `.env` files on request.

pub mod loader;

pub use loader::{
    load, load_dotenv, load_from_env, load_from_env_with, load_from_file, probe_config_paths,
};
