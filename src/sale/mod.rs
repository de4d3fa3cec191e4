//! Listing registry: fixed-price sale terms, purchase, and views.

pub mod types;

mod listing;
mod purchase;
mod views;

pub use types::*;
