use std::borrow::Cow;

/// A specialized [`RepositoryError`] enum of this crate.
#[folio_derive::folio_error]
pub enum RepositoryError {
    /// The request never produced a usable response (offline, CORS, malformed JSON...).
    #[error("Repository transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The API answered with a non-success status.
    #[error(
        "GitHub API limit exceeded or user not found{}: HTTP {status}",
        format_context(.context)
    )]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues.
    #[error("Internal repository error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
