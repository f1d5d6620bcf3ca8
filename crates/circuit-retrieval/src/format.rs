//! Text rendering of result lists.

use std::fmt::Write;
use std::sync::Arc;

use circuit_core::models::Record;

const SEPARATOR: &str = "────────────────────";

/// Render the final result presentation. One record gets a detail card,
/// several get a numbered list.
pub fn format_final_results(records: &[Arc<Record>]) -> String {
    match records {
        [] => "抱歉，没有找到相关的电路图。请尝试更换关键词重新搜索。".to_string(),
        [only] => format!(
            "✅ **已为您找到精确匹配的电路图**\n\n{}",
            detail_lines(only).trim_end()
        ),
        many => {
            let mut out = format!("✅ **为您找到 {} 个相关结果**\n\n", many.len());
            for (i, record) in many.iter().enumerate() {
                let _ = writeln!(out, "**结果 {}：**", i + 1);
                out.push_str(&detail_lines(record));
                if i + 1 < many.len() {
                    let _ = write!(out, "{SEPARATOR}\n\n");
                } else {
                    out.push('\n');
                }
            }
            out
        }
    }
}

fn detail_lines(record: &Record) -> String {
    format!(
        "📄 **文档标题**：{}\n🔢 **文档ID**：{}\n📁 **分类**：{}\n",
        record.display_name, record.id, record.hierarchy_path
    )
}
