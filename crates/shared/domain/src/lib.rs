//! # Domain Models
//!
//! Pure data types for the repository client: configuration sections, fixed
//! API constants and record/metadata shapes. The only dependencies are `serde`
//! and `serde_json`; keep I/O, networking and validation out of this crate.

pub mod config;
pub mod constants;
pub mod record;
