//! User-facing message texts.

pub const GREETING: &str = "欢迎使用车辆电路图导航助手！请告诉我您要查找的车型、系统或部件，例如：\"东风天龙仪表电路图\"。";

pub const EMPTY_INPUT: &str = "消息不能为空";

pub const NO_PENDING_QUESTION: &str = "请先提出搜索需求。";

pub const NO_RESULTS: &str = "🔍 抱歉，没有找到相关的电路图。\n\n建议：\n1. 使用更具体的车型或系统名称\n2. 检查关键词是否有误\n3. 尝试不同的表述方式";

pub const NO_MORE_RESULTS: &str = "❌ 已经没有更多结果了，请尝试其他搜索条件。";

pub const BACK_AT_FIRST_STEP: &str = "❌ 已经是第一步，无法返回。";

pub const BACK_PREFIX: &str = "✅ 已返回上一步。";

pub const BACK_CONTINUE: &str = "✅ 已返回上一步，请继续您的搜索。";

pub const RESET_DONE: &str = "✅ 对话已重置，您可以开始新的搜索。";

pub const NO_CURRENT_RESULTS: &str = "📊 **当前没有搜索结果**\n\n请先进行搜索。";

/// Redirects for turns unrelated to circuit search.
pub const FRIENDLY_RESPONSES: [&str; 4] = [
    "您好！我是车辆电路图导航助手，主要帮助您查找车辆电路图文档。如果您需要搜索电路图，请告诉我车型、系统或部件名称。",
    "我专注于车辆电路图搜索服务。请告诉我您需要查找的电路图信息，例如：'东风天龙的仪表图'或'三一挖掘机的电路图'。",
    "我是电路图搜索助手，可以帮您快速定位车辆电路图。请输入您的搜索需求，例如：'徐工XE135G的针脚定义'或'红岩杰狮保险丝图纸'。",
    "欢迎使用车辆电路图导航助手！我可以帮您查找各种车辆电路图。请描述您的需求，比如车型和需要的电路图类型。",
];

pub fn current_search_note(query: &str) -> String {
    format!("\n\n（您当前正在搜索：{query}）")
}

pub fn no_match_for_choice(selection: &str) -> String {
    format!(
        "❌ 根据您选择的\"{selection}\"，没有找到相关电路图。\n\n可能的原因：\n1. 选项文本与实际数据不匹配\n2. 数据中可能使用不同的表述\n\n建议：\n1. 尝试更简洁的表述（如\"仪表电路图\"而不是\"完整的仪表电路图\"）\n2. 使用\"返回上一步\"选择其他选项\n3. 重新描述您的具体需求"
    )
}

pub fn batch_info(start: usize, end: usize, total: usize, remaining: usize) -> String {
    let mut info = format!(
        "\n\n📊 **当前分析批次信息**\n- 正在分析第 {}-{end} 个结果（共 {total} 个）",
        start + 1
    );
    if remaining > 0 {
        info.push_str(&format!("\n- 后续还有 {remaining} 个结果待分析"));
    }
    info
}
