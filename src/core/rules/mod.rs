pub mod platform;
pub mod synthesis;

pub use platform::{OsConstraint, OsName, PlatformRule, RuleAction};
pub use synthesis::{synthesize_rules, ArchRules};
