/// One bookmarked link, as produced by the preview service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewRecord {
    pub url: String,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub img: Option<String>,
    pub favicon: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PreviewRecord {
    /// Records in the collection must carry a link and the domain it lives on.
    pub fn is_well_formed(&self) -> bool {
        !self.url.trim().is_empty() && !self.domain.trim().is_empty()
    }

    /// First label of the domain (`"github.com"` -> `"github"`), used to pick
    /// a card accent.
    pub fn accent(&self) -> &str {
        self.domain.split('.').next().unwrap_or_default()
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}
