// tests/recorded_pages.rs

//! Extraction against recorded sample pages.

use ikpec::models::{ListEntry, UNTITLED};
use ikpec::render::MarkdownRenderer;
use ikpec::services::{ExtractionStrategy, SiteExtractor, merge};
use url::Url;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(path).unwrap()
}

fn base() -> Url {
    Url::parse("https://www.ikpec.or.kr/m2/").unwrap()
}

#[test]
fn list_page_entries() {
    let entries = SiteExtractor::default().extract_list(&fixture("list_page.html"), &base());

    assert_eq!(
        entries,
        vec![
            ListEntry {
                title: "OO일보 보도 관련".into(),
                url: "https://www.ikpec.or.kr/m2/sub2_1_1.asp?Year=2025&DecideNo=2025-1268".into(),
                decision_no: Some("2025-1268".into()),
                decision_type: Some("주의".into()),
            },
            ListEntry {
                title: "△△신문 기사 관련".into(),
                url: "https://www.ikpec.or.kr/m2/sub2_1_1.asp?Year=2025&DecideNo=2025-1269".into(),
                decision_no: Some("2025-1269".into()),
                decision_type: Some("경고".into()),
            },
            ListEntry {
                title: "□□경제 광고 관련".into(),
                url: "https://www.ikpec.or.kr/m2/sub2_1_1.asp?Year=2025&DecideNo=2025-1270".into(),
                decision_no: Some("2025-1270".into()),
                decision_type: None,
            },
        ]
    );
}

#[test]
fn list_urls_are_absolute() {
    let entries = SiteExtractor::default().extract_list(&fixture("list_page.html"), &base());
    assert!(entries.iter().all(|e| e.url.starts_with("https://")));
}

#[test]
fn structured_decision_page() {
    let detail = SiteExtractor::default().extract_detail(&fixture("detail_structured.html"));

    assert_eq!(detail.decision_type, "주의");
    assert_eq!(detail.decision_no, "2025-1268");
    assert_eq!(detail.title, "OO일보 보도 관련");
    assert_eq!(detail.newspaper, "중부매일");
    assert!(detail.publisher.starts_with("발행인"));
    assert_eq!(
        detail.decision_text,
        "중부매일 2025년 5월 12일자 3면 기사에 대하여 주의한다."
    );
    assert_eq!(
        detail.reason,
        "위 기사는 확인되지 않은 내용을 사실처럼 보도하였다.\n이는 신문윤리실천요강을 위반한 것이다."
    );
    assert!(detail.applied_rules.starts_with("신문윤리실천요강 제3조"));
    assert!(detail.full_content.contains("주 문"));
    assert!(detail.full_content.contains("적용 조항"));
}

#[test]
fn unstructured_decision_page_falls_back_to_full_content() {
    let strategy = SiteExtractor::default();
    let detail = strategy.extract_detail(&fixture("detail_unstructured.html"));

    assert_eq!(detail.title, "제목만 있는 결정");
    assert_eq!(detail.newspaper, "□□경제");
    assert!(detail.publisher.is_empty());
    assert!(!detail.has_structured_body());
    assert_eq!(
        detail.full_content,
        "위원회는 다음과 같이 결정한다.\n해당 광고는 독자를 오도할 우려가 있다."
    );

    let entry = strategy
        .extract_list(&fixture("list_page.html"), &base())
        .remove(2);
    let record = merge(&entry, detail);
    let doc = MarkdownRenderer::new().render_decision(&record);
    assert!(doc.contains("## 전체 내용\n\n위원회는 다음과 같이 결정한다."));
    assert!(!doc.contains("## 주문"));
    assert!(!doc.contains("## 이유"));
    assert!(!doc.contains("## 적용 조항"));
}

#[test]
fn overlapping_heading_is_a_reason() {
    let detail = SiteExtractor::default().extract_detail(&fixture("detail_overlap.html"));
    assert_eq!(detail.decision_no, "2025-1300");
    assert_eq!(detail.title, "겹치는 제목 사례");
    assert_eq!(detail.reason, "두 그룹에 모두 해당하는 제목");
    assert!(detail.applied_rules.is_empty());
    assert!(detail.decision_text.is_empty());
}

#[test]
fn list_page_is_not_a_decision_page() {
    let strategy = SiteExtractor::default();
    assert_eq!(
        strategy.extract_detail(&fixture("list_page.html")),
        Default::default()
    );
    assert!(
        strategy
            .extract_list(&fixture("detail_structured.html"), &base())
            .is_empty()
    );
}

#[test]
fn untitled_everywhere_gets_placeholder() {
    let html = r#"<div class="rst_list_l"><ul>
        <li><a href="sub2_1_1.asp?DecideNo=9"><strong></strong></a></li>
        </ul></div>"#;
    let strategy = SiteExtractor::default();
    let entry = strategy.extract_list(html, &base()).remove(0);
    let detail = strategy.extract_detail("<div class='rst_result_view'></div>");
    assert_eq!(merge(&entry, detail).title, UNTITLED);
}
