//! 关键词响应解析 - 业务能力层
//!
//! 从 LLM 的自由文本响应中提取带标签行的关键词列表。
//! 提取和修正两个调用点共用这一份解析逻辑，避免两处格式漂移。
//!
//! 容错规则：
//! - 标签后的冒号同时接受半角 `:` 和全角 `：`
//! - 标签文本接受中英文写法（"英文关键词" / "English keywords"）
//! - 关键词之间的分隔符接受半角/全角的逗号和分号
//! - 缺少对应标签行时返回空列表，不视为错误

use regex::Regex;
use std::sync::OnceLock;

fn chinese_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:中文关键词|Chinese\s+keywords?)\s*[:：]\s*(.+)").unwrap()
    })
}

fn english_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:英文关键词|English\s+keywords?)\s*[:：]\s*(.+)").unwrap()
    })
}

fn separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[,，;；]").unwrap())
}

/// 解析 LLM 响应，提取中英文关键词列表
///
/// # 参数
/// - `response`: LLM 响应文本
///
/// # 返回
/// 返回 `(中文关键词列表, 英文关键词列表)`
pub fn parse_keyword_lines(response: &str) -> (Vec<String>, Vec<String>) {
    let chinese = match chinese_line_regex().captures(response) {
        Some(caps) => split_keywords(&caps[1]),
        None => Vec::new(),
    };

    let english = match english_line_regex().captures(response) {
        Some(caps) => split_keywords(&caps[1]),
        None => Vec::new(),
    };

    (chinese, english)
}

/// 按逗号/分号切分关键词，去除空白并丢弃空项
pub fn split_keywords(value: &str) -> Vec<String> {
    let value = value.trim().trim_end_matches([';', '；']);
    separator_regex()
        .split(value)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
