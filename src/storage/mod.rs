// src/storage/mod.rs

pub mod token_store;

pub use token_store::{InMemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
