//! # Play Time Bot
//!
//! A Telegram bot that looks up a player's recorded play-time statistics
//! from a PostgreSQL database and presents them as paginated messages with
//! inline navigation buttons.
//!
//! ## Features
//! - `/play_time <ckey>` command querying per-role time trackers
//! - Role labels cleaned up and ranked by time spent, descending
//! - Paginated output with prev/next inline keyboard navigation
//! - In-memory session cache so page flips never re-query the database
//! - Periodic sweep evicting cached sessions after a fixed TTL

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database connection pool and play-time queries
pub mod database;
/// Shared session cache and the background sweeper task
pub mod services;
/// Utility functions for duration formatting, roles, and pagination
pub mod utils;
