//! 工作流状态定义
//!
//! `WorkflowState` 是多智能体工作流的核心数据结构，
//! 由编排器独占持有，在各节点间按值传递。
//! 每个字段的更新都是显式的——节点返回更新后的完整状态，
//! 不存在隐式的字段透传。
//!
//! 约定：
//! - `error == true` 表示状态已终止，下游节点必须直接短路；
//! - `needs_correction == true` 表示英文关键词未通过来源的格式校验；
//! - `retry_count` 只由修正节点递增，循环上限由编排器统一控制。

use crate::models::source::PaperSource;

/// 工作流当前所处的步骤
///
/// 仅用于外部观测（日志/调用方展示），控制流由编排器的转移逻辑决定，
/// 但每个节点必须保证该字段与实际位置一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StepName {
    /// 关键词提取
    Extract,
    /// 格式验证
    Validate,
    /// 关键词修正
    Correct,
    /// 终态
    Complete,
}

/// 多智能体工作流的完整状态
#[derive(Debug, Clone, serde::Serialize)]
pub struct WorkflowState {
    // --- 用户输入（创建后不变） ---
    /// 用户的研究需求描述
    pub user_message: String,
    /// 文献来源，决定关键词格式约定
    pub paper_source: PaperSource,
    /// 用户预设关键词（非空时跳过 LLM 提取）
    pub user_keywords: Option<Vec<String>>,

    // --- 提取结果 ---
    /// LLM 的原始输出（修正提示词需要引用）
    pub raw_extraction: Option<String>,
    pub chinese_keywords: Option<Vec<String>>,
    pub english_keywords: Option<Vec<String>>,

    // --- 验证结果 ---
    pub validation_message: String,
    pub needs_correction: bool,

    // --- 错误标记 ---
    pub error: bool,
    pub error_message: Option<String>,

    // --- 工作流控制 ---
    pub current_step: StepName,
    pub retry_count: u32,
}

impl WorkflowState {
    /// 创建初始工作流状态
    ///
    /// # 参数
    /// - `user_message`: 用户输入的查询文本
    /// - `paper_source`: 文献来源
    /// - `user_keywords`: 用户预设的关键词（可选）
    pub fn new(
        user_message: impl Into<String>,
        paper_source: PaperSource,
        user_keywords: Option<Vec<String>>,
    ) -> Self {
        Self {
            user_message: user_message.into(),
            paper_source,
            user_keywords,
            raw_extraction: None,
            chinese_keywords: None,
            english_keywords: None,
            validation_message: String::new(),
            needs_correction: false,
            error: false,
            error_message: None,
            current_step: StepName::Extract,
            retry_count: 0,
        }
    }

    /// 将状态标记为不可恢复的失败并置为终态
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.error = true;
        self.error_message = Some(message.into());
        self.current_step = StepName::Complete;
        self
    }

    /// 取英文关键词（未提取时返回空切片）
    pub fn english_keywords(&self) -> &[String] {
        self.english_keywords.as_deref().unwrap_or(&[])
    }
}

/// 单篇论文的评分结果
///
/// 每次评分独立创建，评完即并入调用方的排序列表，不跨论文共享。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PaperScore {
    /// 总评分 (0-20)
    pub total_score: u32,
    /// 关键词匹配分 (0-10)
    pub keyword_score: u32,
    /// 语义相似分 (0-10)
    pub semantic_score: u32,
    /// 评分理由
    pub reasoning: Option<String>,
}

impl PaperScore {
    /// 全零评分（缺少输入或评分失败时使用）
    pub fn zero(reasoning: impl Into<String>) -> Self {
        Self {
            total_score: 0,
            keyword_score: 0,
            semantic_score: 0,
            reasoning: Some(reasoning.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = WorkflowState::new("查找联邦学习相关文章", PaperSource::ArXiv, None);
        assert_eq!(state.current_step, StepName::Extract);
        assert_eq!(state.retry_count, 0);
        assert!(!state.error);
        assert!(!state.needs_correction);
        assert!(state.english_keywords().is_empty());
    }

    #[test]
    fn test_fail_is_terminal() {
        let state = WorkflowState::new("任意输入", PaperSource::SciHub, None)
            .fail("关键词提取失败: 网络超时");
        assert!(state.error);
        assert_eq!(state.current_step, StepName::Complete);
        assert_eq!(state.error_message.as_deref(), Some("关键词提取失败: 网络超时"));
    }

    #[test]
    fn test_zero_score() {
        let score = PaperScore::zero("错误：没有提供论文摘要");
        assert_eq!(score.total_score, 0);
        assert_eq!(score.keyword_score, 0);
        assert_eq!(score.semantic_score, 0);
        assert!(score.reasoning.unwrap().contains("摘要"));
    }
}
