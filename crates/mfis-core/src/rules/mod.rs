mod rule;
mod rule_list;

pub use rule::Rule;
pub use rule_list::RuleList;
