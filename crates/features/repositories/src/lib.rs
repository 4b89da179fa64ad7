//! Repositories slice.
//!
//! On page load the panel asks a [`RepositorySource`] for the account's most recently
//! updated repositories, exactly once, and renders the outcome:
//!
//! * a card per repository,
//! * a "no repositories" placeholder for an empty listing,
//! * a fixed error placeholder when the request fails (the cause is logged).
//!
//! There is no retry and no caching; a reload fetches again.

mod error;
mod github;
mod language;
mod panel;

pub use error::{RepositoryError, RepositoryErrorExt};
pub use github::GithubClient;
pub use language::{FALLBACK_COLOR, UNKNOWN_LANGUAGE, language_color};
pub use panel::{
    EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE, NO_DESCRIPTION, RepositoryCard, RepositoryPanel, load,
};

use folio_domain::repository::RepositorySummary;
use std::future::Future;

/// Anything able to list an account's repositories, newest activity first.
pub trait RepositorySource {
    /// Fetches at most `limit` repositories of `account`.
    fn fetch(
        &self,
        account: &str,
        limit: u8,
    ) -> impl Future<Output = Result<Vec<RepositorySummary>, RepositoryError>>;
}
