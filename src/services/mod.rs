pub mod corrector;
pub mod keyword_extractor;
pub mod keyword_parse;
pub mod paper_scorer;
pub mod validator;

pub use corrector::Corrector;
pub use keyword_extractor::KeywordExtractor;
pub use paper_scorer::PaperScorer;
pub use validator::Validator;
