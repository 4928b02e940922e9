//! Facade crate for the repository client and its shared modules.
//! Re-exports domain/kernel primitives and the records client.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use eshare_domain as domain;
pub use eshare_kernel as kernel;
pub use eshare_records as records;

pub use eshare_kernel::validation::{check_pid_syntax, validate_metadata, validate_metadata_file};
pub use eshare_records::{DraftRecord, DraftSource, ShareClient, ShareError};

/// Feature slices compiled into this build.
pub mod features {
    pub const ENABLED: &[&str] = &["records"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_slice_is_enabled() {
        assert!(features::is_enabled("records"));
        assert!(!features::is_enabled("licensing"));
    }

    #[test]
    fn validators_are_reachable_from_the_facade() {
        assert!(check_pid_syntax(Some("11304/0d5e")).is_ok());
        assert!(kernel::metadata::load_metadata("/no/such/file.json").is_err());
    }
}
