/// In-memory cache of per-chat play-time query results
pub mod session_cache;
/// Background task evicting expired cache entries
pub mod sweeper;
