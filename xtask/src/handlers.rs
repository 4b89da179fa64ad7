pub mod crates;
pub mod setup;
pub mod testing;
pub mod web;
