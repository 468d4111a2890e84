use crate::email::is_valid_email;
use crate::errors::FormErrors;
use crate::submission::Submission;

pub const BLANK_MESSAGE: &str = "This field cannot be blank";
pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

/// Runs checks against one submission and collects the failures.
///
/// Checks never stop at the first failure. Run as many as the form needs,
/// then ask [`Form::valid`] once and render [`Form::errors`] back to the user.
///
/// ```
/// use forms::{Form, Submission};
///
/// let submission: Submission = [("email", "someone@example.com")].into_iter().collect();
/// let mut form = Form::new(&submission);
/// form.required(["email", "name"]);
/// form.is_email("email");
///
/// assert!(!form.valid());
/// assert_eq!(form.errors().get("name"), "This field cannot be blank");
/// assert_eq!(form.errors().get("email"), "");
/// ```
#[derive(Debug)]
pub struct Form<'a> {
    data: &'a Submission,
    errors: FormErrors,
}

impl<'a> Form<'a> {
    pub fn new(data: &'a Submission) -> Self {
        Self {
            data,
            errors: FormErrors::new(),
        }
    }

    /// True if the field was submitted with a non-blank first value.
    pub fn has(&self, field: &str) -> bool {
        self.data
            .first(field)
            .is_some_and(|value| !value.trim().is_empty())
    }

    /// Records a blank-field error for every listed field that is missing or blank.
    pub fn required<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for field in fields {
            let field = field.as_ref();
            if !self.has(field) {
                tracing::debug!(field, check = "required", "field is blank");
                self.errors.add(field, BLANK_MESSAGE);
            }
        }
    }

    /// Checks the first value holds at least `min` characters.
    ///
    /// Length is counted in chars, so `"héllo"` is 5 long.
    pub fn min_length(&mut self, field: &str, min: usize) -> bool {
        let Some(value) = self.data.first(field) else {
            tracing::debug!(field, check = "min_length", "field is missing");
            self.errors.add(field, REQUIRED_MESSAGE);
            return false;
        };

        let length = value.chars().count();
        if length < min {
            tracing::debug!(field, check = "min_length", length, min, "field is too short");
            self.errors.add(
                field,
                format!("This field must be at least {} characters long", min),
            );
            return false;
        }

        tracing::trace!(field, check = "min_length", "passed");
        true
    }

    pub fn is_email(&mut self, field: &str) -> bool {
        let valid = self.data.first(field).is_some_and(is_valid_email);
        if !valid {
            tracing::debug!(field, check = "is_email", "not an email address");
            self.errors.add(field, INVALID_EMAIL_MESSAGE);
        }
        valid
    }

    /// True when no check run so far has recorded an error
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> &'a str {
        self.data.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FormErrors {
        self.errors
    }

    /// Finish the pass, handing back the collected errors if there are any.
    pub fn validate(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
