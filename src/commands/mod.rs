pub mod discover;
pub mod optimize;
