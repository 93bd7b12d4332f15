//! 格式验证 Agent - 业务能力层
//!
//! 验证提取的英文关键词是否符合文献来源的格式约定：
//! - ArXiv/IEEE: 应为缩写（长度 <= 5 字符，或全大写）
//! - SciHub: 应为完整词组（含空格的多词，或长度 > 5 且非全大写）
//! - Google Scholar/ACL: 不做约束，直接通过
//!
//! 纯函数实现，不调用 LLM。

use tracing::{info, warn};

use crate::models::{PaperSource, StepName, WorkflowState};

/// 格式验证 Agent
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// 执行格式验证
    ///
    /// 上一步已出错时跳过检查，直接路由到终态。
    pub fn process(&self, mut state: WorkflowState) -> WorkflowState {
        if state.error {
            warn!("⚠️ 上一步已出错，跳过验证");
            state.validation_message = "跳过验证：上一步已出错".to_string();
            state.needs_correction = false;
            state.current_step = StepName::Complete;
            return state;
        }

        let (is_valid, message) = validate_keywords(state.english_keywords(), state.paper_source);

        if is_valid {
            info!("✓ 关键词格式验证通过");
        } else {
            warn!("⚠️ 关键词格式验证失败: {}", message);
        }

        state.validation_message = message;
        state.needs_correction = !is_valid;
        state.current_step = if is_valid {
            StepName::Complete
        } else {
            StepName::Correct
        };
        state
    }
}

/// 验证关键词格式
///
/// # 参数
/// - `english_keywords`: 英文关键词列表
/// - `paper_source`: 文献来源
///
/// # 返回
/// 返回 `(是否有效, 验证消息)`
pub fn validate_keywords(english_keywords: &[String], paper_source: PaperSource) -> (bool, String) {
    if english_keywords.is_empty() {
        return (false, "错误：没有提取到英文关键词".to_string());
    }

    if paper_source.requires_abbreviation() {
        let non_abbrev: Vec<&str> = english_keywords
            .iter()
            .filter(|kw| !is_abbreviation(kw))
            .map(|kw| kw.as_str())
            .collect();
        if !non_abbrev.is_empty() {
            return (
                false,
                format!(
                    "格式错误：ArXiv/IEEE 应使用缩写形式。以下关键词不是缩写: {}",
                    non_abbrev.join(", ")
                ),
            );
        }
    } else if paper_source.requires_full_phrase() {
        let non_full: Vec<&str> = english_keywords
            .iter()
            .filter(|kw| !is_full_phrase(kw))
            .map(|kw| kw.as_str())
            .collect();
        if !non_full.is_empty() {
            return (
                false,
                format!(
                    "格式错误：SciHub 应使用完整英文词组。以下关键词可能是缩写: {}",
                    non_full.join(", ")
                ),
            );
        }
    }

    (true, "格式正确".to_string())
}

/// 判断关键词是否为缩写
///
/// 规则：长度 <= 5 字符，或者全大写
fn is_abbreviation(keyword: &str) -> bool {
    let keyword = keyword.trim();
    keyword.chars().count() <= 5 || is_all_uppercase(keyword)
}

/// 判断关键词是否为完整词组
///
/// 规则：包含多个单词（有空格），或者长度 > 5 且非全大写
fn is_full_phrase(keyword: &str) -> bool {
    let keyword = keyword.trim();
    keyword.split_whitespace().count() > 1
        || (keyword.chars().count() > 5 && !is_all_uppercase(keyword))
}

/// 是否全大写（至少含一个大写字母，且不含小写字母）
fn is_all_uppercase(s: &str) -> bool {
    let mut has_upper = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaperSource;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arxiv_accepts_abbreviations() {
        let (valid, message) = validate_keywords(&kw(&["LLM", "HFL"]), PaperSource::ArXiv);
        assert!(valid);
        assert_eq!(message, "格式正确");
    }

    #[test]
    fn test_arxiv_rejects_full_phrase_and_names_offender() {
        let (valid, message) =
            validate_keywords(&kw(&["Large Language Models"]), PaperSource::ArXiv);
        assert!(!valid);
        assert!(message.contains("Large Language Models"));
        assert!(message.contains("缩写"));
    }

    #[test]
    fn test_arxiv_accepts_long_all_uppercase() {
        // 超过 5 字符但全大写，仍视为缩写
        let (valid, _) = validate_keywords(&kw(&["TRANSFORMER"]), PaperSource::Ieee);
        assert!(valid);
    }

    #[test]
    fn test_scihub_accepts_full_phrase() {
        let (valid, _) = validate_keywords(&kw(&["Large Language Models"]), PaperSource::SciHub);
        assert!(valid);
    }

    #[test]
    fn test_scihub_rejects_abbreviation() {
        let (valid, message) = validate_keywords(&kw(&["LLM"]), PaperSource::SciHub);
        assert!(!valid);
        assert!(message.contains("LLM"));
    }

    #[test]
    fn test_scihub_accepts_long_single_word() {
        // 单词但超过 5 字符且非全大写，视为完整词
        let (valid, _) = validate_keywords(&kw(&["Transformer"]), PaperSource::SciHub);
        assert!(valid);
    }

    #[test]
    fn test_empty_keywords_invalid_for_any_source() {
        let (valid, message) = validate_keywords(&[], PaperSource::GoogleScholar);
        assert!(!valid);
        assert!(message.contains("没有提取到英文关键词"));
    }

    #[test]
    fn test_unconstrained_sources_pass_through() {
        let (valid, _) = validate_keywords(&kw(&["LLM", "Large Language Models"]), PaperSource::GoogleScholar);
        assert!(valid);
        let (valid, _) = validate_keywords(&kw(&["LLM", "Large Language Models"]), PaperSource::Acl);
        assert!(valid);
    }

    #[test]
    fn test_error_state_short_circuits() {
        let validator = Validator::new();
        let state = crate::models::WorkflowState::new("输入", PaperSource::ArXiv, None)
            .fail("关键词提取失败: 超时");

        let out = validator.process(state);
        assert!(out.error);
        assert!(!out.needs_correction);
        assert_eq!(out.current_step, crate::models::StepName::Complete);
        assert!(out.validation_message.contains("跳过验证"));
    }

    #[test]
    fn test_process_sets_correction_flag() {
        let validator = Validator::new();
        let mut state = crate::models::WorkflowState::new("输入", PaperSource::ArXiv, None);
        state.english_keywords = Some(kw(&["Hierarchical Federated Learning"]));

        let out = validator.process(state);
        assert!(out.needs_correction);
        assert_eq!(out.current_step, crate::models::StepName::Correct);
    }
}
