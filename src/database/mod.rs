/// Connection pool management
pub mod connection;
/// Row types and queries against the game statistics schema
pub mod models;
