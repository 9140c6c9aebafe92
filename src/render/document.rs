//! Single decision document.

use crate::models::MergedRecord;

pub(super) fn render(record: &MergedRecord, timestamp: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}\n", record.title));

    let info: Vec<String> = [
        ("결정번호", &record.decision_no),
        ("결정유형", &record.decision_type),
        ("언론사", &record.newspaper),
        ("발행인", &record.publisher),
        ("원문 URL", &record.url),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("- **{label}**: {value}"))
    .collect();

    if !info.is_empty() {
        lines.push("## 기본 정보\n".to_string());
        lines.extend(info);
        lines.push(String::new());
    }

    if record.uses_fallback_body() {
        push_section(&mut lines, "전체 내용", &record.full_content);
    } else {
        push_section(&mut lines, "주문", &record.decision_text);
        push_section(&mut lines, "이유", &record.reason);
        push_section(&mut lines, "적용 조항", &record.applied_rules);
    }

    lines.push("---".to_string());
    lines.push(format!("*생성 시간: {timestamp}*"));

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str, body: &str) {
    if body.is_empty() {
        return;
    }
    lines.push(format!("## {heading}\n"));
    lines.push(body.to_string());
    lines.push(String::new());
}
