pub mod aspect;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
