pub mod debate;
pub mod info;
