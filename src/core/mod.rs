// Word of the Day - core/mod.rs
//
// Core business logic layer.
// Dependencies: util layer and data crates (csv, chrono, unicode-normalization).
// Must NOT depend on: ui, platform, app.

pub mod export;
pub mod model;
pub mod normalize;
pub mod paging;
pub mod query;
pub mod store;
