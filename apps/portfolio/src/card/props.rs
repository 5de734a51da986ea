use serde::{Deserialize, Serialize};

/// Where an activated card goes when it has nothing to expand.
pub const DEFAULT_HREF: &str = "#";

/// One entry on the resume: a job, a degree, a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeCardProps {
    pub logo_url: String,
    pub alt_text: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ResumeCardProps {
    pub fn new(
        logo_url: impl Into<String>,
        alt_text: impl Into<String>,
        title: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            logo_url: logo_url.into(),
            alt_text: alt_text.into(),
            title: title.into(),
            subtitle: None,
            href: None,
            badges: Vec::new(),
            period: period.into(),
            description: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_badges<I, S>(mut self, badges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.badges = badges.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description, if there is any text to expand. Empty counts as none.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn has_description(&self) -> bool {
        self.description().is_some()
    }

    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or(DEFAULT_HREF)
    }

    /// Letter shown when the logo fails to load.
    pub fn avatar_fallback(&self) -> Option<char> {
        self.alt_text.chars().next()
    }
}
