//! Core processing building blocks: aspect fitting, border padding, the
//! per-image pipeline and PNG encoding. These are the primitives consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
