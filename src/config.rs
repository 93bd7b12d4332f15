use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    /// 关键词提取使用的模型
    pub extractor_model: String,
    /// 关键词修正使用的模型（低频调用，允许使用更强的模型）
    pub corrector_model: String,
    /// 论文评分使用的模型
    pub scorer_model: String,
    /// 采样温度（低温度保证输出稳定性）
    pub temperature: f32,
    pub max_tokens: u32,
    // --- 工作流配置 ---
    /// 修正循环的最大重试次数
    pub max_retries: u32,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.siliconflow.cn/v1".to_string(),
            extractor_model: "Qwen/Qwen3-32B".to_string(),
            corrector_model: "deepseek-ai/DeepSeek-V3".to_string(),
            scorer_model: "Qwen/Qwen3-32B".to_string(),
            temperature: 0.3,
            max_tokens: 2048,
            max_retries: 10,
            verbose_logging: false,
            output_log_file: "workflow_log.txt".to_string(),
        }
    }
}

/// 配置文件结构（所有字段可选，缺省回退到默认值）
#[derive(Debug, Deserialize)]
struct ConfigFile {
    llm_api_key: Option<String>,
    llm_api_base_url: Option<String>,
    extractor_model: Option<String>,
    corrector_model: Option<String>,
    scorer_model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    max_retries: Option<u32>,
    verbose_logging: Option<bool>,
    output_log_file: Option<String>,
}

impl Config {
    /// 从环境变量加载配置（缺省使用默认值）
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            extractor_model: std::env::var("EXTRACTOR_MODEL").unwrap_or(default.extractor_model),
            corrector_model: std::env::var("CORRECTOR_MODEL").unwrap_or(default.corrector_model),
            scorer_model: std::env::var("SCORER_MODEL").unwrap_or(default.scorer_model),
            temperature: std::env::var("LLM_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.temperature),
            max_tokens: std::env::var("LLM_MAX_TOKENS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_tokens),
            max_retries: std::env::var("MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_retries),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 从 TOML 配置文件加载配置
    ///
    /// 文件中缺省的字段回退到默认值。
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        let default = Self::default();
        Ok(Self {
            llm_api_key: file.llm_api_key.unwrap_or(default.llm_api_key),
            llm_api_base_url: file.llm_api_base_url.unwrap_or(default.llm_api_base_url),
            extractor_model: file.extractor_model.unwrap_or(default.extractor_model),
            corrector_model: file.corrector_model.unwrap_or(default.corrector_model),
            scorer_model: file.scorer_model.unwrap_or(default.scorer_model),
            temperature: file.temperature.unwrap_or(default.temperature),
            max_tokens: file.max_tokens.unwrap_or(default.max_tokens),
            max_retries: file.max_retries.unwrap_or(default.max_retries),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
            output_log_file: file.output_log_file.unwrap_or(default.output_log_file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_retries, 10);
        assert_eq!(config.extractor_model, "Qwen/Qwen3-32B");
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_from_partial_toml() {
        let content = r#"
            corrector_model = "deepseek-ai/DeepSeek-V3.1"
            max_retries = 3
        "#;
        let file: ConfigFile = toml::from_str(content).unwrap();
        assert_eq!(file.max_retries, Some(3));
        assert_eq!(file.corrector_model.as_deref(), Some("deepseek-ai/DeepSeek-V3.1"));
        assert!(file.llm_api_key.is_none());
    }
}
