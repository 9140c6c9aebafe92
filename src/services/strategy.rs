// src/services/strategy.rs

//! Extraction strategy seam.
//!
//! The pipeline only talks to [`ExtractionStrategy`]. When the site markup
//! changes, either the selectors in the config change or a new strategy is
//! added here; the pipeline, merger and renderer stay untouched.

use url::Url;

use crate::error::Result;
use crate::models::{DetailRecord, ListEntry, SiteSelectors};

use super::{DetailExtractor, ListExtractor};

/// Turns raw list and decision pages into records.
pub trait ExtractionStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Parse a list page. Relative links resolve against `base`.
    fn extract_list(&self, html: &str, base: &Url) -> Vec<ListEntry>;

    /// Parse a decision page.
    fn extract_detail(&self, html: &str) -> DetailRecord;
}

/// Selector-driven strategy for the ikpec.or.kr markup.
pub struct SiteExtractor {
    list: ListExtractor,
    detail: DetailExtractor,
}

impl SiteExtractor {
    pub fn new(selectors: &SiteSelectors) -> Result<Self> {
        Ok(Self {
            list: ListExtractor::new(selectors)?,
            detail: DetailExtractor::new(selectors)?,
        })
    }
}

impl Default for SiteExtractor {
    fn default() -> Self {
        Self {
            list: ListExtractor::default(),
            detail: DetailExtractor::default(),
        }
    }
}

impl ExtractionStrategy for SiteExtractor {
    fn name(&self) -> &str {
        "selectors"
    }

    fn extract_list(&self, html: &str, base: &Url) -> Vec<ListEntry> {
        self.list.extract(html, base)
    }

    fn extract_detail(&self, html: &str) -> DetailRecord {
        self.detail.extract(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_selectors() {
        let selectors = SiteSelectors {
            list_container: "section#decisions".into(),
            list_link: "a.decision".into(),
            ..SiteSelectors::default()
        };
        let strategy = SiteExtractor::new(&selectors).unwrap();
        let html = r#"<section id="decisions"><ul>
            <li><a class="decision" href="/view?id=3"><strong>새 구조</strong></a></li>
            </ul></section>"#;
        let base = Url::parse("https://www.ikpec.or.kr/m2/").unwrap();
        let entries = strategy.extract_list(html, &base);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://www.ikpec.or.kr/view?id=3");
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let selectors = SiteSelectors {
            detail_body: "div[".into(),
            ..SiteSelectors::default()
        };
        assert!(SiteExtractor::new(&selectors).is_err());
    }
}
