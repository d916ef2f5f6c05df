pub mod event;
pub mod properties;
pub mod render;
