//! statement-engine: normalizer, category rules, aggregator and result assembler

pub mod accounts;
pub mod aggregator;
pub mod analyzer;
pub mod assembler;
pub mod category_rules;
pub mod normalizer;

pub use accounts::summarize_account;
pub use aggregator::aggregate;
pub use analyzer::{Analysis, StatementAnalyzer};
pub use assembler::assemble;
pub use category_rules::{BUILTIN_RULES, CategoryRule, RuleSet, categorize};
pub use normalizer::{Normalized, normalize, normalize_one};
