use crate::error::{ShareError, ShareErrorExt};
use std::fmt;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// The repository API token.
///
/// Formatting never shows the value and the buffer is wiped on drop. Read it
/// with [`AccessToken::expose`] only where it goes on the wire.
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Reads a token file, stripping surrounding whitespace.
    ///
    /// # Errors
    /// * [`ShareError::Io`] if the file cannot be read.
    /// * [`ShareError::Token`] if it contains only whitespace.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ShareError> {
        let path = path.as_ref();
        let raw = Zeroizing::new(
            fs::read_to_string(path).context(format!("Reading token file {}", path.display()))?,
        );

        let token = raw.trim();
        if token.is_empty() {
            return Err(ShareError::Token {
                message: "token file is empty".into(),
                context: Some(path.display().to_string().into()),
            });
        }

        Ok(Self::new(token))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
