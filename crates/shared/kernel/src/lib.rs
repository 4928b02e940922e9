//! Kernel utilities shared by the client and the shell.
//! Keep this crate free of networking: it loads configuration and metadata files
//! and validates caller input before anything reaches the repository.
//!
//! ## Validation
//! ```rust
//! use eshare_kernel::validation::{PidDefect, check_pid_syntax};
//! use eshare_kernel::ValidationError;
//!
//! assert!(check_pid_syntax(Some("00.00000/xxxx-yyyy-zzzz")).is_ok());
//! assert!(matches!(
//!     check_pid_syntax(Some("/suffix")),
//!     Err(ValidationError::MalformedPid { defect: PidDefect::EmptyPrefix, .. })
//! ));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use eshare_domain::config::ShellConfig;
//! use eshare_kernel::config::load_config;
//!
//! let cfg: ShellConfig = load_config(Some("eshare.toml"))?;
//! ```

pub mod config;
mod error;
pub mod metadata;
pub mod validation;

pub use crate::error::{ValidationError, ValidationErrorExt};
pub use eshare_domain as domain;
