pub mod index;
pub mod story;
