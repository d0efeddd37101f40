pub mod device_manager;
pub mod engine;
pub mod renderer;
