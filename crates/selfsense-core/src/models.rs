pub mod answer;
pub mod assessment;
pub mod condition;
pub mod history;
pub mod profile;
pub mod threshold;

pub use answer::Answers;
pub use assessment::{Assessment, RiskFactor, RiskTier, Severity};
pub use condition::{AnswerOption, Category, Condition, Question};
pub use history::HistoryEntry;
pub use profile::{Gender, NewProfile, Profile};
pub use threshold::{RiskLogic, RiskThreshold};
