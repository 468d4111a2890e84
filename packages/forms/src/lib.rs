pub mod email;
pub mod errors;
pub mod form;
pub mod rules;
pub mod submission;

#[cfg(test)]
pub mod test_helpers;

pub use email::is_valid_email;
pub use errors::FormErrors;
pub use form::Form;
pub use rules::{FormRules, Rule, RuleSet};
pub use submission::Submission;
