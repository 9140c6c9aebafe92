//! Period index document.

use crate::models::{MergedRecord, Period};

pub(super) fn render(period: Period, records: &[MergedRecord], timestamp: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# 신문윤리위원회 심의결정 - {}\n", period.label()));
    lines.push(format!("- **생성 시간**: {timestamp}"));
    lines.push(format!("- **총 심의 건수**: {}건\n", records.len()));
    lines.push("## 심의 목록\n".to_string());

    for (i, record) in records.iter().enumerate() {
        let n = i + 1;
        match &record.filename {
            Some(filename) => lines.push(format!("{n}. [{}](./{filename})", record.title)),
            None => lines.push(format!("{n}. {}", record.title)),
        }
        if !record.url.is_empty() {
            lines.push(format!("   - 원문: {}", record.url));
        }
    }

    lines.join("\n")
}
