//! LLM API 客户端
//!
//! 封装所有与 LLM API 相关的调用逻辑。
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（SiliconFlow、DeepSeek 等）
//!
//! 各 Agent 通过 `ChatModel` trait 持有注入的客户端实例，
//! 而不是进程级单例，测试时可以替换为 mock 实现。

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;

/// 一次聊天请求的全部参数
#[derive(Debug, Clone)]
pub struct ChatRequest<'a> {
    /// 系统提示词（可选）
    pub system_prompt: Option<&'a str>,
    /// 用户提示词
    pub user_prompt: &'a str,
    /// 模型名称
    pub model_name: &'a str,
    /// 采样温度
    pub temperature: f32,
    /// 最大输出 token 数
    pub max_tokens: u32,
}

/// LLM 调用能力抽象
///
/// 单次请求/响应，无状态，可在多个 Agent 间克隆共享。
#[allow(async_fn_in_trait)]
pub trait ChatModel: Send + Sync {
    /// 发送一次聊天请求，返回响应文本
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String, LlmError>;
}

/// 基于 `async-openai` 的 LLM 客户端
#[derive(Clone)]
pub struct LlmClient {
    client: Client<OpenAIConfig>,
}

impl LlmClient {
    /// 根据配置创建新的 LLM 客户端
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

impl ChatModel for LlmClient {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String, LlmError> {
        debug!("调用 LLM API，模型: {}", request.model_name);
        debug!("用户消息长度: {} 字符", request.user_prompt.len());

        // 构建消息列表
        let mut messages = Vec::new();

        if let Some(sys_msg) = request.system_prompt {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.user_prompt)
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(request.model_name)
            .messages(messages)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        // 调用 API
        let response = self.client.chat().create(chat_request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            LlmError::RequestFailed {
                model: request.model_name.to_string(),
                source: Box::new(e),
            }
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyResponse {
                model: request.model_name.to_string(),
            })?;

        Ok(content.trim().to_string())
    }
}
