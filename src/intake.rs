use crate::setup::Config;
use forms::{Form, FormErrors, FormRules, RuleSet, Submission};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub valid: bool,
    pub errors: FormErrors,
}

/// Decodes an `application/x-www-form-urlencoded` body. A trailing newline
/// left by the shell is ignored.
pub(crate) fn decode(body: &[u8]) -> Submission {
    url::form_urlencoded::parse(body.trim_ascii_end()).collect()
}

pub(crate) fn rules_from(config: &Config) -> RuleSet {
    let mut rules = RuleSet::new().required(config.required.iter().cloned());
    for (field, min) in &config.min_lengths {
        rules = rules.min_length(field.clone(), *min);
    }
    rules.email(config.email_field.clone())
}

pub(crate) fn check(submission: &Submission, rules: &RuleSet) -> Report {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("form_submission", request_id = %request_id);
    let _guard = span.enter();

    let mut form = Form::new(submission);
    rules.apply(&mut form);

    let valid = form.valid();
    let errors = form.into_errors();
    if valid {
        tracing::info!(fields = submission.len(), "form accepted");
    } else {
        tracing::warn!(invalid_fields = errors.len(), errors = %errors, "form rejected");
    }

    Report { valid, errors }
}
