

pub mod base;
pub mod client;
pub mod models;

pub use base::{ApiError, MetabaseApi};
pub use client::MetabaseClient;
pub use models::{Item, ItemModel};
