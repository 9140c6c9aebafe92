// src/services/list.rs

//! Monthly list page extraction.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{ListEntry, SiteSelectors};
use crate::utils::text::stripped_text;
use crate::utils::{parse_selector, resolve_url};

/// Parses a list page into entries, in document order.
pub struct ListExtractor {
    container: Selector,
    row: Selector,
    link: Selector,
    number: Selector,
    title: Selector,
    kind: Selector,
    title_attr: String,
}

impl ListExtractor {
    /// Compile the list-page selectors.
    pub fn new(selectors: &SiteSelectors) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&selectors.list_container)?,
            row: parse_selector(&selectors.list_row)?,
            link: parse_selector(&selectors.list_link)?,
            number: parse_selector(&selectors.list_number)?,
            title: parse_selector(&selectors.list_title)?,
            kind: parse_selector(&selectors.list_type)?,
            title_attr: selectors.list_title_attr.clone(),
        })
    }

    /// Extract all entries; relative links are resolved against `base`.
    ///
    /// A page without the list container yields no entries. Rows without a
    /// decision link, or whose link cannot be resolved, are skipped; rows
    /// with a link but no title are kept with an empty title.
    pub fn extract(&self, html: &str, base: &Url) -> Vec<ListEntry> {
        let document = Html::parse_document(html);

        let Some(container) = document.select(&self.container).next() else {
            log::debug!("List container not found");
            return Vec::new();
        };

        container
            .select(&self.row)
            .filter_map(|row| self.parse_row(row, base))
            .collect()
    }

    fn parse_row(&self, row: ElementRef<'_>, base: &Url) -> Option<ListEntry> {
        let link = row.select(&self.link).next()?;
        let href = link.value().attr("href").unwrap_or("");
        let Some(url) = resolve_url(base, href) else {
            log::debug!("Unresolvable decision link: {href}");
            return None;
        };

        let mut title = self.child_text(link, &self.title).unwrap_or_default();
        if title.is_empty() {
            title = link
                .value()
                .attr(&self.title_attr)
                .map(|t| t.trim().to_string())
                .unwrap_or_default();
        }

        Some(ListEntry {
            title,
            url,
            decision_no: self.child_text(link, &self.number),
            decision_type: self.child_text(link, &self.kind),
        })
    }

    /// Stripped text of the first matching child, `None` if absent or blank.
    fn child_text(&self, parent: ElementRef<'_>, selector: &Selector) -> Option<String> {
        parent
            .select(selector)
            .next()
            .map(stripped_text)
            .filter(|text| !text.is_empty())
    }
}

impl Default for ListExtractor {
    fn default() -> Self {
        Self::new(&SiteSelectors::default()).expect("default selectors are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.ikpec.or.kr/m2/").unwrap()
    }

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body><div class="rst_list_l"><ul>{rows}</ul></div></body></html>"#
        )
    }

    #[test]
    fn test_missing_container_yields_nothing() {
        let html = "<html><body><div class='other'><ul><li>\
                    <a href='sub2_1_1.asp?x=1'><strong>t</strong></a></li></ul></div></body></html>";
        assert!(ListExtractor::default().extract(html, &base()).is_empty());
    }

    #[test]
    fn test_full_row() {
        let html = page(
            r#"<li><a href="sub2_1_1.asp?DecideNo=2025-1268">
                 <span>2025-1268</span>
                 <strong>OO일보 보도 관련</strong>
                 <u class="rl_btn green">주의</u>
               </a></li>"#,
        );
        let entries = ListExtractor::default().extract(&html, &base());
        assert_eq!(
            entries,
            vec![ListEntry {
                title: "OO일보 보도 관련".into(),
                url: "https://www.ikpec.or.kr/m2/sub2_1_1.asp?DecideNo=2025-1268".into(),
                decision_no: Some("2025-1268".into()),
                decision_type: Some("주의".into()),
            }]
        );
    }

    #[test]
    fn test_row_without_decision_link_is_dropped() {
        let html = page(
            r#"<li><a href="/notice.asp">공지</a></li>
               <li><a href="/m2/sub2_1_1.asp?DecideNo=7"><strong>남는 항목</strong></a></li>"#,
        );
        let entries = ListExtractor::default().extract(&html, &base());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "남는 항목");
        assert_eq!(
            entries[0].url,
            "https://www.ikpec.or.kr/m2/sub2_1_1.asp?DecideNo=7"
        );
        assert_eq!(entries[0].decision_no, None);
        assert_eq!(entries[0].decision_type, None);
    }

    #[test]
    fn test_title_falls_back_to_attribute() {
        let html = page(
            r#"<li><a href="sub2_1_1.asp?a=1" title="속성 제목"><strong> </strong></a></li>"#,
        );
        let entries = ListExtractor::default().extract(&html, &base());
        assert_eq!(entries[0].title, "속성 제목");
    }

    #[test]
    fn test_untitled_row_is_kept() {
        let html = page(r#"<li><a href="sub2_1_1.asp?a=2"><span>2019-1</span></a></li>"#);
        let entries = ListExtractor::default().extract(&html, &base());
        assert_eq!(entries.len(), 1);
        assert!(entries[0].title.is_empty());
        assert_eq!(entries[0].decision_no.as_deref(), Some("2019-1"));
    }

    #[test]
    fn test_unresolvable_link_is_dropped() {
        let html = page(
            r#"<li><a href="https://www.ikpec.or.kr:99999/m2/sub2_1_1.asp?DecideNo=1"><strong>깨진 링크</strong></a></li>
               <li><a href="sub2_1_1.asp?DecideNo=2"><strong>정상 링크</strong></a></li>"#,
        );
        let entries = ListExtractor::default().extract(&html, &base());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "정상 링크");
        assert!(Url::parse(&entries[0].url).is_ok());
    }

    #[test]
    fn test_document_order() {
        let html = page(
            r#"<li><a href="sub2_1_1.asp?n=3"><strong>셋</strong></a></li>
               <li><a href="sub2_1_1.asp?n=1"><strong>하나</strong></a></li>
               <li><a href="sub2_1_1.asp?n=2"><strong>둘</strong></a></li>"#,
        );
        let titles: Vec<_> = ListExtractor::default()
            .extract(&html, &base())
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["셋", "하나", "둘"]);
    }
}
