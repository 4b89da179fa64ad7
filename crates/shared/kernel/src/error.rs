use std::borrow::Cow;

/// Failures reported by host capabilities (browser APIs or their stand-ins).
#[folio_derive::folio_error]
pub enum HostError {
    /// The capability does not exist in this environment (no window, storage disabled...).
    #[error("Host capability unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The host refused the request (autoplay blocked, quota exceeded...).
    #[error("Host rejected request{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues.
    #[error("Internal host error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
