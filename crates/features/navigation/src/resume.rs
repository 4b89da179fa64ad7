use folio_domain::config::ResumeConfig;
use folio_kernel::HostError;
use folio_kernel::host::Browser;
use tracing::{info, warn};

/// Resume buttons: instead of following the link, download the file under a fixed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLink {
    href: String,
    filename: String,
}

impl ResumeLink {
    #[must_use]
    pub fn new(href: impl Into<String>, filename: impl Into<String>) -> Self {
        Self { href: href.into(), filename: filename.into() }
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Starts the download through the browser.
    ///
    /// # Errors
    /// Propagates the [`HostError`] when the browser could not start the download.
    pub fn download(&self, browser: &impl Browser) -> Result<(), HostError> {
        browser
            .download(&self.href, &self.filename)
            .inspect(|()| info!(file = %self.filename, "Resume download started"))
            .inspect_err(|err| warn!(%err, "Resume download failed"))
    }
}

impl From<&ResumeConfig> for ResumeLink {
    fn from(config: &ResumeConfig) -> Self {
        Self::new(config.href.clone(), config.filename.clone())
    }
}
