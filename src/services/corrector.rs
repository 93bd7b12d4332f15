//! 关键词修正 Agent - 业务能力层
//!
//! 验证失败时，携带验证器给出的失败原因重新生成关键词，
//! 让模型看到"为什么错"而不只是"错了"。
//! 修正属于低频调用，默认使用比提取更强的模型。
//!
//! 解析复用 `keyword_parse` 中与提取完全相同的逻辑。

use tracing::{debug, info};

use crate::clients::{ChatModel, ChatRequest};
use crate::config::Config;
use crate::models::{StepName, WorkflowState};
use crate::services::keyword_parse::parse_keyword_lines;

const SYSTEM_PROMPT: &str = r#"你是一个专业的学术关键词修正专家。
请根据错误信息，将关键词修正为正确格式。

规则：
- ArXiv/IEEE: 使用英文缩写（如 LLM, FL, MD）
- SciHub: 使用完整英文词组（如 Large Language Models）

直接输出修正后的关键词，格式：
中文关键词: xxx, xxx
英文关键词: xxx, xxx"#;

/// 关键词修正 Agent
pub struct Corrector<C> {
    client: C,
    model_name: String,
    temperature: f32,
    max_tokens: u32,
}

impl<C: ChatModel> Corrector<C> {
    /// 创建新的关键词修正 Agent
    pub fn new(config: &Config, client: C) -> Self {
        Self {
            client,
            model_name: config.corrector_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// 构建修正提示词
    ///
    /// 包含原始输入、目标来源、验证失败原因和上一次的原始输出。
    fn build_prompt(&self, state: &WorkflowState) -> String {
        format!(
            "原始输入: {}\n文献来源: {}\n错误信息: {}\n原输出: {}\n\n请严格按照 {} 的格式要求，重新生成关键词。",
            state.user_message,
            state.paper_source,
            state.validation_message,
            state.raw_extraction.as_deref().unwrap_or(""),
            state.paper_source
        )
    }

    /// 执行关键词修正
    ///
    /// # 参数
    /// - `state`: 工作流状态（要求 `needs_correction == true`）
    ///
    /// # 返回
    /// 返回更新后的状态；修正成功后回到验证步骤
    pub async fn process(&self, mut state: WorkflowState) -> WorkflowState {
        // 防御：不需要修正时不做任何事
        if !state.needs_correction {
            debug!("needs_correction 为 false，修正节点不做处理");
            return state;
        }

        info!(
            "🔧 正在修正关键词 (第 {} 次)，模型: {}",
            state.retry_count + 1,
            self.model_name
        );

        let prompt = self.build_prompt(&state);
        let request = ChatRequest {
            system_prompt: Some(SYSTEM_PROMPT),
            user_prompt: &prompt,
            model_name: &self.model_name,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        match self.client.chat(request).await {
            Ok(response) => {
                debug!("修正响应: {}", response);
                let (chinese, english) = parse_keyword_lines(&response);

                state.chinese_keywords = Some(chinese);
                state.english_keywords = Some(english);
                state.raw_extraction = Some(response);
                state.validation_message = "已修正".to_string();
                state.needs_correction = false;
                state.retry_count += 1;
                state.current_step = StepName::Validate;
                state
            }
            Err(e) => state.fail(format!("关键词修正失败: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::models::PaperSource;

    #[derive(Clone)]
    struct NoCallChat;

    impl ChatModel for NoCallChat {
        async fn chat(&self, _request: ChatRequest<'_>) -> Result<String, LlmError> {
            panic!("不应发生 LLM 调用");
        }
    }

    #[test]
    fn test_noop_when_correction_not_needed() {
        let corrector = Corrector::new(&Config::default(), NoCallChat);
        let mut state = WorkflowState::new("查找大模型文章", PaperSource::ArXiv, None);
        state.english_keywords = Some(vec!["LLM".to_string()]);
        state.needs_correction = false;
        state.current_step = StepName::Correct;

        let out = tokio_test::block_on(corrector.process(state));

        // 防御性守卫：状态原样返回，计数不变
        assert_eq!(out.retry_count, 0);
        assert_eq!(out.english_keywords(), &["LLM".to_string()]);
        assert!(!out.error);
    }
}
