use serde::Deserialize;
use std::ops::Deref;
use std::sync::Arc;

/// Top-level site configuration shared across features.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub profile: ProfileConfig,
    pub repositories: RepositoriesConfig,
    pub layout: LayoutConfig,
    pub projects: Vec<ProjectConfig>,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Who the site belongs to and how to reach them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub github_account: String,
    pub email: String,
    pub resume: ResumeConfig,
}

/// Downloadable resume asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub href: String,
    pub filename: String,
}

/// Repository listing endpoint and paging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RepositoriesConfig {
    pub api_base: String,
    pub sort: String,
    pub per_page: u8,
}

/// Scroll geometry of the page chrome.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the fixed navigation bar, subtracted from scroll targets.
    pub header_offset: f64,
    /// Scroll offset past which the navigation bar casts a shadow.
    pub shadow_threshold: f64,
}

/// One showcased project card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    pub description: String,
    /// Short muted clip played while hovering the card.
    #[serde(default)]
    pub preview: Option<String>,
    /// Full-length video opened in the modal viewer.
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

// --- Default ---

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            github_account: "sameer-at-git".to_owned(),
            email: "mdsameersayed0@gmail.com".to_owned(),
            resume: ResumeConfig::default(),
        }
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            href: "assets/resume.pdf".to_owned(),
            filename: "Resume-Md.Sameer Sayed.pdf".to_owned(),
        }
    }
}

impl Default for RepositoriesConfig {
    fn default() -> Self {
        Self { api_base: "https://api.github.com".to_owned(), sort: "updated".to_owned(), per_page: 24 }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { header_offset: 80.0, shadow_threshold: 100.0 }
    }
}
