//! 文献来源枚举
//!
//! 来源决定英文关键词的格式约定：
//! - ArXiv / IEEE：英文缩写（如 LLM, HFL）
//! - SciHub：英文全称词组（如 Large Language Models）
//! - Google Scholar / ACL：不做格式约束

/// 文献来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PaperSource {
    ArXiv,
    Ieee,
    SciHub,
    GoogleScholar,
    Acl,
}

impl PaperSource {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            PaperSource::ArXiv => "ArXiv",
            PaperSource::Ieee => "IEEE",
            PaperSource::SciHub => "SciHub",
            PaperSource::GoogleScholar => "Google Scholar",
            PaperSource::Acl => "ACL",
        }
    }

    /// 尝试从字符串解析来源（容忍大小写和常见写法）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arxiv" => Some(PaperSource::ArXiv),
            "ieee" => Some(PaperSource::Ieee),
            "scihub" | "sci-hub" => Some(PaperSource::SciHub),
            "google scholar" | "googlescholar" | "scholar" => Some(PaperSource::GoogleScholar),
            "acl" => Some(PaperSource::Acl),
            _ => None,
        }
    }

    /// 该来源是否要求英文关键词为缩写形式
    pub fn requires_abbreviation(self) -> bool {
        matches!(self, PaperSource::ArXiv | PaperSource::Ieee)
    }

    /// 该来源是否要求英文关键词为完整词组
    pub fn requires_full_phrase(self) -> bool {
        matches!(self, PaperSource::SciHub)
    }
}

impl std::fmt::Display for PaperSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(PaperSource::from_str("ArXiv"), Some(PaperSource::ArXiv));
        assert_eq!(PaperSource::from_str("arxiv"), Some(PaperSource::ArXiv));
        assert_eq!(PaperSource::from_str("IEEE"), Some(PaperSource::Ieee));
        assert_eq!(PaperSource::from_str("sci-hub"), Some(PaperSource::SciHub));
        assert_eq!(PaperSource::from_str("Google Scholar"), Some(PaperSource::GoogleScholar));
        assert_eq!(PaperSource::from_str("未知来源"), None);
    }

    #[test]
    fn test_format_contract() {
        assert!(PaperSource::ArXiv.requires_abbreviation());
        assert!(PaperSource::Ieee.requires_abbreviation());
        assert!(!PaperSource::SciHub.requires_abbreviation());
        assert!(PaperSource::SciHub.requires_full_phrase());
        // Google Scholar / ACL 不做格式约束
        assert!(!PaperSource::GoogleScholar.requires_abbreviation());
        assert!(!PaperSource::GoogleScholar.requires_full_phrase());
        assert!(!PaperSource::Acl.requires_full_phrase());
    }
}
