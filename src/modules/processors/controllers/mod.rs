pub mod processor_controller;

pub use processor_controller::configure;
