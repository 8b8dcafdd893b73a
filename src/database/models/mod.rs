pub mod play_time;

pub use play_time::PlayTimeRow;
