/// Duration formatting and parsing for the canonical "HH:MM:SS" form
pub mod duration;
/// Message pagination and inline keyboard construction
pub mod pagination;
/// Role label cleanup and ranking
pub mod roles;
