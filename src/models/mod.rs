pub mod paper;
pub mod source;
pub mod state;

pub use paper::{dedup_papers, PaperRecord, ScoredPaper};
pub use source::PaperSource;
pub use state::{PaperScore, StepName, WorkflowState};
