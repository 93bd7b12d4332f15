//! 错误类型定义
//!
//! 库的对外错误面。节点内部的失败（LLM 调用失败、格式校验失败等）
//! 不通过 Result 向外传播，而是写入工作流状态（`error` / `error_message`），
//! 这里的类型只覆盖真正需要返回 Err 的边界：配置加载和 LLM 传输层。

use thiserror::Error;

/// 应用程序结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// LLM 调用错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// LLM 调用错误
///
/// 区分传输失败、空响应和请求构建失败三类，
/// 调用方（各 Agent）统一将其转化为状态中的错误标记。
#[derive(Debug, Error)]
pub enum LlmError {
    /// 网络/认证/超时等传输层失败
    #[error("LLM API 调用失败 (模型: {model}): {source}")]
    RequestFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// API 调用成功但没有返回任何内容
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyResponse { model: String },

    /// 请求参数不合法（构建请求阶段失败）
    #[error("构建 LLM 请求失败: {0}")]
    InvalidRequest(String),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 {path}: {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 解析配置文件失败
    #[error("无法解析配置文件 {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
