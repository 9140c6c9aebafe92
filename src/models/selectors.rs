// src/models/selectors.rs

//! CSS selectors and text markers for the list and decision pages.
//!
//! The defaults describe the current ikpec.or.kr markup:
//!
//! ```text
//! div.rst_list_l > ul > li > a[href*=sub2_1_1.asp]
//!     span            decision number
//!     strong          title
//!     u.rl_btn        decision type
//!
//! div.rst_result_view
//!     div.rst_titleW
//!         u.rl_btn                     decision type
//!         h3.type01 > i                decision number, rest of h3 is the title
//!         dd                           "<outlet>   발행인 <name>"
//!     div.rst_contW > ul > li
//!         h3.type01                    section heading (주 문 / 이 유 / 적용 조항)
//!         p                            section content
//! ```

use serde::{Deserialize, Serialize};

/// Selectors for one site schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteSelectors {
    /// The single container wrapping all list rows
    pub list_container: String,

    /// One row inside the list container
    pub list_row: String,

    /// Anchor pointing at a decision page
    pub list_link: String,

    /// Decision number inside the anchor
    pub list_number: String,

    /// Title inside the anchor
    pub list_title: String,

    /// Decision type badge inside the anchor
    pub list_type: String,

    /// Anchor attribute holding a fallback title
    pub list_title_attr: String,

    /// Main container of a decision page
    pub detail_container: String,

    /// Header zone inside the main container
    pub detail_header: String,

    /// Decision type badge in the header zone
    pub detail_type: String,

    /// Title heading in the header zone
    pub detail_heading: String,

    /// Decision number marker nested inside the title heading
    pub detail_number: String,

    /// Outlet/publisher line in the header zone
    pub detail_outlet: String,

    /// Token separating the outlet from the publisher
    pub publisher_marker: String,

    /// Body zone inside the main container
    pub detail_body: String,

    /// One section inside the body zone
    pub body_section: String,

    /// Section heading
    pub section_heading: String,

    /// Section content
    pub section_content: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            list_container: "div.rst_list_l".to_string(),
            list_row: "li".to_string(),
            list_link: r#"a[href*="sub2_1_1.asp"]"#.to_string(),
            list_number: "span".to_string(),
            list_title: "strong".to_string(),
            list_type: "u.rl_btn".to_string(),
            list_title_attr: "title".to_string(),
            detail_container: "div.rst_result_view".to_string(),
            detail_header: "div.rst_titleW".to_string(),
            detail_type: "u.rl_btn".to_string(),
            detail_heading: "h3.type01".to_string(),
            detail_number: "i".to_string(),
            detail_outlet: "dd".to_string(),
            publisher_marker: "발행인".to_string(),
            detail_body: "div.rst_contW".to_string(),
            body_section: "li".to_string(),
            section_heading: "h3.type01".to_string(),
            section_content: "p".to_string(),
        }
    }
}

impl SiteSelectors {
    /// All CSS selector strings, paired with their field names.
    pub fn css(&self) -> [(&'static str, &str); 16] {
        [
            ("list_container", self.list_container.as_str()),
            ("list_row", self.list_row.as_str()),
            ("list_link", self.list_link.as_str()),
            ("list_number", self.list_number.as_str()),
            ("list_title", self.list_title.as_str()),
            ("list_type", self.list_type.as_str()),
            ("detail_container", self.detail_container.as_str()),
            ("detail_header", self.detail_header.as_str()),
            ("detail_type", self.detail_type.as_str()),
            ("detail_heading", self.detail_heading.as_str()),
            ("detail_number", self.detail_number.as_str()),
            ("detail_outlet", self.detail_outlet.as_str()),
            ("detail_body", self.detail_body.as_str()),
            ("body_section", self.body_section.as_str()),
            ("section_heading", self.section_heading.as_str()),
            ("section_content", self.section_content.as_str()),
        ]
    }
}
