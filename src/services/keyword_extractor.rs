//! 关键词提取 Agent - 业务能力层
//!
//! 从用户的研究需求描述中提取中英文学术关键词。
//! 根据不同的文献来源（ArXiv/IEEE/SciHub）返回不同格式的关键词。
//!
//! 职责：
//! - 只负责"提取"这一步，不关心验证和修正
//! - 用户已提供关键词时直接采用，不调用 LLM
//! - 所有失败都写入状态的错误标记，不向外抛出

use tracing::{debug, info};

use crate::clients::{ChatModel, ChatRequest};
use crate::config::Config;
use crate::models::{StepName, WorkflowState};
use crate::services::keyword_parse::parse_keyword_lines;

const SYSTEM_PROMPT: &str = r#"你是一个优秀的学术领域专家，能够从用户描述中提取科研关键词。

## 输出规则

根据文献来源不同，输出格式不同：

### ArXiv/IEEE 来源
返回中文关键词和**英文缩写**关键词：
中文关键词: 大模型, 分层联邦学习, 模型蒸馏
英文关键词: llm, hfl, md

### SciHub 来源
返回中文关键词和**英文全称**关键词：
中文关键词: 大模型, 分层联邦学习, 模型蒸馏
英文关键词: Large Language Models, Hierarchical Federated Learning, Model Distillation

## 特殊情况

- 严格按照指定格式输出，不要添加其他内容
- 每个关键词用逗号分隔
- 只会输入一个文献信息来源，最终只返回一种格式的内容"#;

/// 关键词提取 Agent
pub struct KeywordExtractor<C> {
    client: C,
    model_name: String,
    temperature: f32,
    max_tokens: u32,
}

impl<C: ChatModel> KeywordExtractor<C> {
    /// 创建新的关键词提取 Agent
    pub fn new(config: &Config, client: C) -> Self {
        Self {
            client,
            model_name: config.extractor_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// 构建提取提示词
    fn build_prompt(&self, state: &WorkflowState) -> String {
        format!(
            "请从以下用户描述中提取学术关键词。\n\n用户描述: \"{}\"\n文献来源: {}\n\n请按照指定格式输出中文和英文关键词。",
            state.user_message, state.paper_source
        )
    }

    /// 执行关键词提取
    ///
    /// # 参数
    /// - `state`: 工作流状态
    ///
    /// # 返回
    /// 返回更新后的状态，包含提取的关键词
    pub async fn process(&self, mut state: WorkflowState) -> WorkflowState {
        // 用户已提供关键词：直接采用，不调用 LLM
        if let Some(user_keywords) = state.user_keywords.clone().filter(|k| !k.is_empty()) {
            info!("✓ 检测到用户预设关键词 ({} 个)，跳过 LLM 提取", user_keywords.len());
            state.raw_extraction = Some(format!("英文关键词: {}", user_keywords.join(", ")));
            state.english_keywords = Some(user_keywords);
            state.error = false;
            state.error_message = None;
            state.current_step = StepName::Validate;
            return state;
        }

        if state.user_message.trim().is_empty() {
            return state.fail("错误：没有提供用户消息");
        }

        info!("🔍 正在提取关键词，来源: {}", state.paper_source);

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
                debug!("提取响应: {}", response);
                let (chinese, english) = parse_keyword_lines(&response);
                info!("✓ 提取完成: 中文 {} 个, 英文 {} 个", chinese.len(), english.len());

                state.chinese_keywords = Some(chinese);
                state.english_keywords = Some(english);
                state.raw_extraction = Some(response);
                state.error = false;
                state.error_message = None;
                state.current_step = StepName::Validate;
                state
            }
            Err(e) => state.fail(format!("关键词提取失败: {}", e)),
        }
    }
}
