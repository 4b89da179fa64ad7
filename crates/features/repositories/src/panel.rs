use crate::RepositorySource;
use crate::error::RepositoryError;
use crate::language::{UNKNOWN_LANGUAGE, language_color};
use folio_domain::repository::RepositorySummary;
use tracing::{error, info};

pub const LOADING_MESSAGE: &str = "Loading repositories...";
pub const EMPTY_MESSAGE: &str = "No repositories found.";
pub const ERROR_MESSAGE: &str =
    "Unable to load repositories. Please check your GitHub username or try again later.";
pub const NO_DESCRIPTION: &str = "No description available";

/// Display-ready view of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCard {
    pub name: String,
    /// Opened in a new tab.
    pub url: String,
    pub description: String,
    pub language: String,
    /// Swatch color of `language`.
    pub color: &'static str,
    pub stars: u64,
    pub forks: u64,
}

impl From<RepositorySummary> for RepositoryCard {
    fn from(repo: RepositorySummary) -> Self {
        let language = repo.language.filter(|name| !name.is_empty());
        let color = language_color(language.as_deref());
        Self {
            name: repo.name,
            url: repo.html_url,
            description: repo
                .description
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
            language: language.unwrap_or_else(|| UNKNOWN_LANGUAGE.to_owned()),
            color,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
        }
    }
}

/// What the repositories container shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RepositoryPanel {
    /// Request in flight.
    #[default]
    Loading,
    Empty,
    /// The request failed; the cause is only logged.
    Unavailable,
    Loaded(Vec<RepositoryCard>),
}

impl RepositoryPanel {
    /// Builds the panel from a finished fetch, keeping at most `limit` cards in source order.
    #[must_use]
    pub fn from_result(
        result: Result<Vec<RepositorySummary>, RepositoryError>,
        limit: u8,
    ) -> Self {
        match result {
            Ok(repos) if repos.is_empty() => Self::Empty,
            Ok(repos) => Self::Loaded(
                repos.into_iter().take(usize::from(limit)).map(RepositoryCard::from).collect(),
            ),
            Err(e) => {
                error!(error = %e, "Error fetching repositories");
                Self::Unavailable
            },
        }
    }

    /// The single message shown instead of cards, if any.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Unavailable => Some(ERROR_MESSAGE),
            Self::Loaded(_) => None,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[RepositoryCard] {
        match self {
            Self::Loaded(cards) => cards,
            _ => &[],
        }
    }
}

/// Fetches `account`'s repositories once and turns the outcome into a panel.
pub async fn load(source: &impl RepositorySource, account: &str, limit: u8) -> RepositoryPanel {
    let panel = RepositoryPanel::from_result(source.fetch(account, limit).await, limit);
    if let RepositoryPanel::Loaded(cards) = &panel {
        info!(account, count = cards.len(), "Repositories loaded");
    }
    panel
}
