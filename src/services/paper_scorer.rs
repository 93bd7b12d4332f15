//! 论文评分 Agent - 业务能力层
//!
//! 评估用户需求与论文摘要的匹配度，双维度评分：
//! 1. 关键词匹配度 (1-10分): 统计关键词在摘要中的出现频率
//! 2. 语义相似度 (1-10分): 评估主题一致性
//!
//! 与关键词工作流相互独立，每篇论文单独评分，不跨论文共享状态。
//! 模型输出同样是带标签行的半结构化文本，解析时不盲信模型的算术：
//! 声明总分与分项之和偏差超过 2 时以分项之和为准。

use futures::future::join_all;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::clients::{ChatModel, ChatRequest};
use crate::config::Config;
use crate::models::{PaperRecord, PaperScore, ScoredPaper};

const SYSTEM_PROMPT: &str = r#"你是一个专业的科研论文匹配专家，请严格按以下规则评估用户需求与论文摘要的匹配度：

## 评分规则

### 关键词匹配度 (1-10分)
- 统计用户提供关键词在摘要中的出现频率
- 完全匹配得2分/词，部分匹配得1分/词
- 总分按比例换算到10分制

### 语义相似度 (1-10分)
- 评估用户需求描述与摘要内容的主题一致性
- 考虑研究目标、方法、结论的匹配程度

## 输出格式（必须严格遵循）

总评分: [1-20的整数]
关键词得分: [1-10的整数]
语义得分: [1-10的整数]
理由: [简短说明]"#;

fn total_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:总评分|Total\s*score)\s*[:：]\s*(\d+)").unwrap())
}

fn keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:关键词得分|Keyword\s*score)\s*[:：]\s*(\d+)").unwrap())
}

fn semantic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:语义得分|Semantic\s*score)\s*[:：]\s*(\d+)").unwrap())
}

fn reason_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:理由|Reason)\s*[:：]\s*(.+)").unwrap())
}

/// 论文评分 Agent
pub struct PaperScorer<C> {
    client: C,
    model_name: String,
    temperature: f32,
    max_tokens: u32,
}

impl<C: ChatModel> PaperScorer<C> {
    /// 创建新的论文评分 Agent
    pub fn new(config: &Config, client: C) -> Self {
        Self {
            client,
            model_name: config.scorer_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// 构建评分提示词
    fn build_prompt(&self, requirement: &str, abstract_text: &str, keywords: &[String]) -> String {
        let keywords_str = if keywords.is_empty() {
            "无".to_string()
        } else {
            keywords.join(", ")
        };

        format!(
            "请评估以下内容的匹配度：\n\n## 用户需求\n{}\n\n## 关键词\n{}\n\n## 论文摘要\n{}\n\n请按照指定格式输出评分结果。",
            requirement, keywords_str, abstract_text
        )
    }

    /// 对单篇论文评分
    ///
    /// # 参数
    /// - `requirement`: 用户需求描述
    /// - `abstract_text`: 论文摘要
    /// - `keywords`: 关键词列表
    ///
    /// # 返回
    /// 返回评分结果；摘要为空或调用失败时返回全零评分，不向外抛出
    pub async fn score(
        &self,
        requirement: &str,
        abstract_text: &str,
        keywords: &[String],
    ) -> PaperScore {
        if abstract_text.trim().is_empty() {
            return PaperScore::zero("错误：没有提供论文摘要");
        }

        let prompt = self.build_prompt(requirement, abstract_text, keywords);
        let request = ChatRequest {
            system_prompt: Some(SYSTEM_PROMPT),
            user_prompt: &prompt,
            model_name: &self.model_name,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        match self.client.chat(request).await {
            Ok(response) => {
                debug!("评分响应: {}", response);
                parse_scores(&response)
            }
            Err(e) => {
                warn!("论文评分失败: {}", e);
                PaperScore::zero(format!("评分失败: {}", e))
            }
        }
    }

    /// 批量评分并排序
    ///
    /// 每篇论文独立评分（并发执行，互不依赖），
    /// 最终按总分降序稳定排序，同分保持原始相对顺序。
    ///
    /// # 参数
    /// - `requirement`: 用户需求描述
    /// - `papers`: 论文列表
    /// - `keywords`: 关键词列表
    pub async fn score_papers(
        &self,
        requirement: &str,
        papers: Vec<PaperRecord>,
        keywords: &[String],
    ) -> Vec<ScoredPaper> {
        info!("📊 开始批量评分，共 {} 篇论文", papers.len());

        let futures = papers
            .iter()
            .map(|paper| self.score(requirement, &paper.abstract_text, keywords));
        let scores = join_all(futures).await;

        let mut scored: Vec<ScoredPaper> = papers
            .into_iter()
            .zip(scores)
            .map(|(paper, score)| ScoredPaper { paper, score })
            .collect();

        // Vec::sort_by 是稳定排序
        scored.sort_by(|a, b| b.score.total_score.cmp(&a.score.total_score));

        info!("✓ 批量评分完成");
        scored
    }
}

/// 解析评分响应
///
/// 各分项独立解析并钳制到有效范围，缺少标签时使用默认值
/// （总分 10，分项各 5）。总分与分项之和偏差超过 2 时，
/// 以分项之和覆盖声明总分。
pub fn parse_scores(response: &str) -> PaperScore {
    let total_declared = total_regex()
        .captures(response)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .map(|v| v.clamp(1, 20) as u32)
        .unwrap_or(10);

    let keyword_score = keyword_regex()
        .captures(response)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .map(|v| v.clamp(1, 10) as u32)
        .unwrap_or(5);

    let semantic_score = semantic_regex()
        .captures(response)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .map(|v| v.clamp(1, 10) as u32)
        .unwrap_or(5);

    let reasoning = reason_regex()
        .captures(response)
        .map(|caps| caps[1].trim().to_string());

    let calculated = keyword_score + semantic_score;
    let total_score = if total_declared.abs_diff(calculated) > 2 {
        calculated
    } else {
        total_declared
    };

    PaperScore {
        total_score,
        keyword_score,
        semantic_score,
        reasoning,
    }
}
