// src/domain/watchlist/mod.rs

pub mod entity;
pub mod invariants;

pub use entity::Watchlist;
pub use invariants::{
    validate_watchlist, validate_watchlist_description, validate_watchlist_name,
    DESCRIPTION_MAX_LEN, NAME_MAX_LEN,
};
