pub mod keyword_flow;

pub use keyword_flow::KeywordWorkflow;
