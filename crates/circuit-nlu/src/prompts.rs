//! Prompt templates for the chat-completion provider.
//!
//! Every prompt asks for a single JSON object; replies are still parsed
//! defensively in [`crate::parse`].

use std::sync::Arc;

use circuit_core::models::{AnsweredQuestion, IntentContext, Record};
use serde_json::json;

use crate::options::PotentialOptions;

pub const KEYWORD_SYSTEM: &str = "你是关键词提取助手，只输出 JSON。";
pub const INTENT_SYSTEM: &str = "你是意图识别助手，只输出 JSON。";
pub const QUESTION_SYSTEM: &str = "你是电路图搜索助手，根据候选数据设计能有效缩小范围的选择题，只输出 JSON。";
pub const CORRECTION_SYSTEM: &str = "你熟悉车辆与工程机械电路图资料，负责修正不规范的查询，只输出 JSON。";

pub fn keyword_prompt(query: &str) -> String {
    format!(
        r#"从下面的车辆电路图搜索查询中提取关键词。

规则：
1. 去掉"电路图"和"图"，它们在数据里写法不统一
2. 保留品牌、车型、型号、系统、部件等有意义的词
3. 不要合并或改写词语，ECU、BCM 这类术语原样保留

示例：
"东风天龙仪表电路图" -> {{"keywords": ["东风", "天龙", "仪表"]}}
"我要找三一SY215C9的液压电脑板" -> {{"keywords": ["三一", "SY215C9", "液压", "电脑板"]}}
"解放J6的整车电路图" -> {{"keywords": ["解放", "J6", "整车"]}}

查询："{query}"

返回格式：{{"keywords": ["词1", "词2"]}}"#
    )
}

pub fn intent_prompt(context: &IntentContext, text: &str) -> String {
    let mut ctx = format!(
        "- 当前搜索主题：{}\n- 是否有待回答的问题：{}\n- 已回答的问题数：{}",
        if context.current_query.is_empty() {
            "（无）"
        } else {
            context.current_query.as_str()
        },
        if context.has_current_question() { "是" } else { "否" },
        context.previous_questions_count,
    );
    if let Some(q) = &context.current_question {
        ctx.push_str(&format!("\n- 当前问题：{q}"));
    }
    if !context.available_options.is_empty() {
        ctx.push_str(&format!("\n- 当前选项：{}", context.available_options.join("、")));
    }

    format!(
        r#"判断用户这句话在电路图搜索对话中的意图。

用户输入："{text}"

对话上下文：
{ctx}

意图只能是以下之一：
- new_search：提出了全新的电路图查找需求
- provide_clue：在当前搜索基础上补充信息以缩小范围
- other：与电路图搜索无关，例如问候或闲聊

选项选择、返回上一步和重置由按钮触发，不在这里判断。

返回格式：
{{"intent": "new_search", "confidence": "high/medium/low", "reasoning": "判断理由",
  "additional_info": {{"new_query": "新搜索的查询内容", "clue_keywords": ["线索关键词"]}}}}"#
    )
}

pub fn question_prompt(
    query: &str,
    batch: &[Arc<Record>],
    previous: &[AnsweredQuestion],
    potential: &PotentialOptions,
) -> String {
    let rows: Vec<_> = batch
        .iter()
        .map(|r| json!({"ID": r.id, "层级路径": r.hierarchy_path, "关联文件名称": r.display_name}))
        .collect();
    let asked: Vec<_> = previous
        .iter()
        .map(|q| json!({"question": q.question, "user_choice": q.user_choice}))
        .collect();
    let rows = serde_json::to_string_pretty(&rows).unwrap_or_default();
    let asked = serde_json::to_string_pretty(&asked).unwrap_or_default();
    let potential = serde_json::to_string_pretty(potential).unwrap_or_default();

    format!(
        r#"用户查询："{query}"

当前批次共 {count} 个候选结果：
{rows}

已经问过的问题（不要重复）：
{asked}

从数据中提取的候选选项：
{potential}

请设计一个选择题帮助用户缩小范围：
1. 选项必须是能直接在指定字段里找到的具体值，例如"仪表电路图"、"针脚定义"、"BCM"
2. 不要在选项里加括号说明或"完整的""相关"之类的修饰
3. 选项之间要能把候选结果区分开

返回格式：
{{"analysis": "对这批结果的分析", "question": "给用户的问题", "options": ["选项1", "选项2"],
  "filter_field": "关联文件名称 或 层级路径", "filter_logic": "包含", "design_reasoning": "选项设计依据"}}"#,
        count = batch.len(),
    )
}

pub fn correction_prompt(query: &str) -> String {
    format!(
        r#"修正下面这条电路图搜索查询里的错别字、简写和口语化表达。

常见情况：
- 品牌型号错别字："小忪" -> "小松"，"重汽豪汉" -> "重汽豪瀚"，"庆龄" -> "庆铃"
- 数字误写："2ooo" -> "2000"
- 口语化："发动机线路" -> "发动机电路图"，"仪表盘的图" -> "仪表电路图"
- 型号补全："XE135" -> "XE135G"，"SY215" -> "SY215C9"

不确定的地方不要改，不要改变用户原意。

查询："{query}"

返回格式：
{{"original_query": "原查询", "corrected_query": "修正后的查询", "explanation": "修改说明", "confidence": "high/medium/low"}}"#
    )
}
