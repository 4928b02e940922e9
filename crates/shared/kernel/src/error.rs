use crate::validation::PidDefect;
use eshare_domain::constants::PID_SYNTAX;
use std::borrow::Cow;

/// Rejections raised before anything is sent to the repository.
#[eshare_derive::share_error]
pub enum ValidationError {
    /// No identifier was supplied at all.
    #[error("PID value is missing{}", format_context(.context))]
    MissingValue { context: Option<Cow<'static, str>> },

    /// The identifier does not have the `prefix/suffix` shape.
    #[error(
        "PID syntax not correct{}: {defect} in '{pid}' (expected {})",
        format_context(.context),
        PID_SYNTAX
    )]
    MalformedPid { pid: String, defect: PidDefect, context: Option<Cow<'static, str>> },

    /// A mandatory metadata key is absent.
    #[error("Mandatory metadata item missing{}: '{field}'", format_context(.context))]
    MissingField { field: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A metadata item exists but has the wrong JSON type.
    #[error("Metadata item '{field}' must be {expected}{}", format_context(.context))]
    WrongType {
        field: Cow<'static, str>,
        expected: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// A path argument such as a record or file bucket id is empty.
    #[error("Argument '{name}' must not be empty{}", format_context(.context))]
    EmptyArgument { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Metadata file unreadable{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Metadata is not valid JSON{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
