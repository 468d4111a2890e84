use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Validation messages collected for a form, keyed by field name.
///
/// Messages for a field keep the order they were added in. The bag is
/// append-only: checks add to it, nothing removes from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: HashMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the field's list, creating the list if needed
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(Vec::new)
            .push(message.into());
    }

    /// First message recorded for the field, or an empty string if it has none
    pub fn get(&self, field: &str) -> &str {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get_all(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Field names with recorded messages, sorted
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Append every message from `other`, field by field
    pub fn merge(&mut self, other: FormErrors) {
        for (field, mut messages) in other.errors {
            self.errors
                .entry(field)
                .or_insert_with(Vec::new)
                .append(&mut messages);
        }
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.fields()
            .into_iter()
            .flat_map(|field| self.get_all(field).iter().cloned())
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}
