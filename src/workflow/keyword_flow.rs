//! 关键词工作流 - 流程层
//!
//! ## 职责
//!
//! 编排完整的关键词提取流程，这是一个带环的状态机：
//!
//! ```text
//! extract → validate → complete          (验证通过 / 硬失败)
//!               ↓  ↑
//!             correct                    (验证失败且未达重试上限)
//! ```
//!
//! ## 设计原则
//!
//! 1. **编排器独占状态**：状态在节点间按值传递，节点不保留引用
//! 2. **上限集中控制**：重试上限只由本层强制执行，节点只递增计数
//! 3. **节点不抛错**：所有失败编码为状态上的 `error` 标记，
//!    只有编排器决定何时终止循环

use tracing::{error, info};

use crate::clients::ChatModel;
use crate::config::Config;
use crate::models::{PaperSource, StepName, WorkflowState};
use crate::services::{Corrector, KeywordExtractor, Validator};

/// 关键词提取工作流
pub struct KeywordWorkflow<C> {
    extractor: KeywordExtractor<C>,
    validator: Validator,
    corrector: Corrector<C>,
    /// 修正循环的硬上限，防止提取/修正无法收敛时无限震荡
    max_retries: u32,
}

impl<C: ChatModel + Clone> KeywordWorkflow<C> {
    /// 创建新的关键词工作流
    ///
    /// # 参数
    /// - `config`: 程序配置
    /// - `client`: LLM 客户端（各 Agent 克隆共享）
    pub fn new(config: &Config, client: C) -> Self {
        Self {
            extractor: KeywordExtractor::new(config, client.clone()),
            validator: Validator::new(),
            corrector: Corrector::new(config, client),
            max_retries: config.max_retries,
        }
    }
}

impl<C: ChatModel> KeywordWorkflow<C> {
    /// 运行一次完整的工作流
    ///
    /// # 参数
    /// - `user_message`: 用户的研究需求描述
    /// - `paper_source`: 文献来源
    /// - `user_keywords`: 用户预设关键词（可选）
    ///
    /// # 返回
    /// 返回终态：要么携带可用的关键词集合（`error == false`），
    /// 要么携带错误说明（`error == true`）。调用方必须先检查 `error`。
    pub async fn run(
        &self,
        user_message: impl Into<String>,
        paper_source: PaperSource,
        user_keywords: Option<Vec<String>>,
    ) -> WorkflowState {
        let state = WorkflowState::new(user_message, paper_source, user_keywords);
        self.run_state(state).await
    }

    /// 从给定的初始状态运行工作流
    pub async fn run_state(&self, mut state: WorkflowState) -> WorkflowState {
        info!("🚀 关键词工作流启动，来源: {}", state.paper_source);

        // 提取总是第一步；用户预设关键词只是跳过其中的 LLM 调用，
        // 不会跳过后续的验证
        state = self.extractor.process(state).await;

        loop {
            state = self.validator.process(state);

            // 验证通过或已有硬失败：终止
            if state.error || !state.needs_correction {
                break;
            }

            // 上限检查只在这里做，修正节点自身不终止循环
            if state.retry_count >= self.max_retries {
                error!("❌ 修正次数已达上限 ({})，工作流终止", self.max_retries);
                let message = format!(
                    "修正次数已达上限 ({})，关键词格式仍不符合 {} 的要求: {}",
                    self.max_retries, state.paper_source, state.validation_message
                );
                state = state.fail(message);
                break;
            }

            state = self.corrector.process(state).await;

            // 修正阶段的硬失败直接终止，不再回到验证
            if state.error {
                break;
            }
        }

        if state.error {
            error!(
                "❌ 工作流失败: {}",
                state.error_message.as_deref().unwrap_or("未知错误")
            );
        } else {
            info!(
                "✅ 工作流完成，英文关键词: [{}] (修正 {} 次)",
                state.english_keywords().join(", "),
                state.retry_count
            );
        }

        debug_assert_eq!(state.current_step, StepName::Complete);
        state
    }
}
