pub mod buffer;
pub mod constants;
pub mod generator;
