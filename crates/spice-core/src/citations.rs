//! Source citations attached to an insight
//!
//! Citations are not parsed from the insight text; they arrive alongside it
//! and are co-rendered below the formatted document.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Most citations ever shown for one insight
pub const MAX_SURFACED_CITATIONS: usize = 5;

/// Display text used when a citation has neither a title nor a domain
pub const FALLBACK_SOURCE_TEXT: &str = "Source";

/// A source reference supporting an insight
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Citation {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            url: url.into(),
            snippet: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// A citation prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfacedCitation {
    /// Title, else domain, else "Source"
    pub text: String,
    /// Link target; `#` when the citation has no URL
    pub href: String,
    /// Host without a leading `www.`; empty when the URL does not parse
    pub domain: String,
    pub snippet: Option<String>,
}

/// Prepare at most `limit` citations for display, keeping their order
pub fn surface_citations(citations: &[Citation], limit: usize) -> Vec<SurfacedCitation> {
    citations.iter().take(limit).map(surface).collect()
}

fn surface(citation: &Citation) -> SurfacedCitation {
    let href = if citation.url.is_empty() {
        "#".to_string()
    } else {
        citation.url.clone()
    };
    let domain = domain_for_url(&href);

    let text = non_empty(citation.title.as_deref())
        .map(str::to_string)
        .or_else(|| (!domain.is_empty()).then(|| domain.clone()))
        .unwrap_or_else(|| FALLBACK_SOURCE_TEXT.to_string());

    SurfacedCitation {
        text,
        href,
        domain,
        snippet: non_empty(citation.snippet.as_deref()).map(str::to_string),
    }
}

/// Host of `url` with a leading `www.` removed, or an empty string
pub fn domain_for_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
            .unwrap_or_default(),
        Err(e) => {
            debug!(url, error = %e, "Citation URL did not parse");
            String::new()
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
