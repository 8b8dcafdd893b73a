/// Command definitions and command implementations
pub mod commands;
/// Update dispatch schema, message and callback handlers
pub mod handlers;
