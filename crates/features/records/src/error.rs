use eshare_kernel::ValidationError;
use std::borrow::Cow;

/// A specialized [`ShareError`] enum of this crate.
#[eshare_derive::share_error]
pub enum ShareError {
    /// Caller input rejected before any request was sent.
    #[error("Invalid input{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },

    /// The client could not be built from the given settings.
    #[error("Invalid client configuration{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The token file exists but holds no token.
    #[error("Access token unavailable{}: {message}", format_context(.context))]
    Token { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Reading the token file or an upload failed locally.
    #[error("Local I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The request never produced a usable response (DNS, TLS, timeout, bad JSON body).
    #[error("Request failed{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The repository answered with a non-success status other than 404.
    #[error("Repository answered {status}{}: {message}", format_context(.context))]
    Status { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The addressed entity does not exist, or lacks a field the call needs.
    #[error("Remote entity not found or incomplete{}: {message}", format_context(.context))]
    EntityUnavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal client error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ShareError {
    pub(crate) fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::EntityUnavailable { message: message.into(), context: None }
    }
}
