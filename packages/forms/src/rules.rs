use crate::errors::FormErrors;
use crate::form::Form;
use crate::submission::Submission;

/// Something that knows which checks a form needs.
pub trait FormRules {
    fn apply(&self, form: &mut Form<'_>);

    fn validate(&self, submission: &Submission) -> Result<(), FormErrors> {
        let mut form = Form::new(submission);
        self.apply(&mut form);
        form.validate()
    }

    fn is_valid(&self, submission: &Submission) -> bool {
        self.validate(submission).is_ok()
    }
}

/// A single named check and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required(Vec<String>),
    MinLength { field: String, min: usize },
    Email(String),
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required(_) => "required",
            Rule::MinLength { .. } => "min_length",
            Rule::Email(_) => "email",
        }
    }
}

impl FormRules for Rule {
    fn apply(&self, form: &mut Form<'_>) {
        match self {
            Rule::Required(fields) => form.required(fields),
            Rule::MinLength { field, min } => {
                form.min_length(field, *min);
            }
            Rule::Email(field) => {
                form.is_email(field);
            }
        }
    }
}

/// Ordered list of rules, all applied on every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .push(Rule::Required(fields.into_iter().map(Into::into).collect()));
        self
    }

    pub fn min_length(mut self, field: impl Into<String>, min: usize) -> Self {
        self.rules.push(Rule::MinLength {
            field: field.into(),
            min,
        });
        self
    }

    pub fn email(mut self, field: impl Into<String>) -> Self {
        self.rules.push(Rule::Email(field.into()));
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FormRules for RuleSet {
    fn apply(&self, form: &mut Form<'_>) {
        for rule in &self.rules {
            tracing::trace!(rule = rule.name(), "applying rule");
            rule.apply(form);
        }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
