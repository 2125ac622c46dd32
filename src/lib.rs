pub mod core;
pub mod flow;
pub mod platform;
pub mod registry;

// Optional components
pub mod logging;
