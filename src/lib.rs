//! # Paper Search Agent
//!
//! 文献检索助手的多智能体关键词工作流核心
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - LLM API 封装，`ChatModel` trait 作为可替换的注入点
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 四个 Agent，各自只处理一个步骤
//! - `KeywordExtractor` - 从用户描述提取中英文关键词
//! - `Validator` - 按来源格式约定校验英文关键词（纯函数）
//! - `Corrector` - 携带失败原因重新生成关键词
//! - `PaperScorer` - 需求/摘要双维度评分（独立于工作流）
//! - `keyword_parse` - 提取与修正共用的带标签行解析
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/KeywordWorkflow` - 带环状态机：
//!   extract → validate → (correct → validate)* → complete
//! - 状态按值在节点间传递，重试上限由本层统一强制
//!
//! ### ④ 数据模型（Models）
//! - `WorkflowState` - 贯穿全流程的共享状态记录
//! - `PaperSource` - 文献来源及其格式约定
//! - `PaperRecord` - 统一的论文记录与去重

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ChatModel, ChatRequest, LlmClient};
pub use config::Config;
pub use error::{AppError, LlmError, Result};
pub use models::{dedup_papers, PaperRecord, PaperScore, PaperSource, ScoredPaper, StepName, WorkflowState};
pub use services::{Corrector, KeywordExtractor, PaperScorer, Validator};
pub use workflow::KeywordWorkflow;
