//! 论文记录模型
//!
//! 不同信息源返回的论文结构各不相同（ArXiv 用 `pdf_url`、IEEE 用
//! `paper_url`、SciHub 用 `pmid`）。边界层的适配器负责把各来源的
//! 原始结构映射到统一的 `PaperRecord`，核心逻辑（去重、评分）
//! 只依赖统一字段，不再按来源区分访问方式。

use crate::models::state::PaperScore;
use std::collections::HashSet;

/// 统一的论文记录
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PaperRecord {
    /// 标题
    pub title: String,
    /// 摘要（评分的唯一必需字段）
    pub abstract_text: String,
    /// 去重用的唯一标识（规范化 URL 或来源分配的 ID）
    pub identifier: String,
    /// 原文链接
    pub url: Option<String>,
    /// 发表日期
    pub published: Option<String>,
    /// 作者列表
    pub authors: Vec<String>,
}

/// 附带评分的论文记录
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScoredPaper {
    pub paper: PaperRecord,
    pub score: PaperScore,
}

/// 按唯一标识去重，保留首次出现的记录
///
/// 幂等：对已去重的列表再次去重结果不变。
pub fn dedup_papers(papers: Vec<PaperRecord>) -> Vec<PaperRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(papers.len());

    for paper in papers {
        if seen.insert(paper.identifier.clone()) {
            unique.push(paper);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, title: &str) -> PaperRecord {
        PaperRecord {
            title: title.to_string(),
            abstract_text: String::new(),
            identifier: id.to_string(),
            url: None,
            published: None,
            authors: vec![],
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let papers = vec![paper("a", "A"), paper("a", "A-dupe"), paper("b", "B")];
        let unique = dedup_papers(papers);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].title, "A");
        assert_eq!(unique[1].title, "B");
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let papers = vec![paper("1", "A"), paper("1", "A2"), paper("2", "B"), paper("2", "B2")];
        let once = dedup_papers(papers);
        let twice = dedup_papers(once.clone());
        assert_eq!(once.len(), twice.len());
        let ids: Vec<_> = twice.iter().map(|p| p.identifier.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_papers(vec![]).is_empty());
    }
}
