use std::collections::HashMap;

/// Decoded form fields, keyed by name. A key may carry several values; the
/// checks only ever look at the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    values: HashMap<String, Vec<String>>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for `key`, keeping any values already present.
    pub fn add(&mut self, key: &str, value: &str) {
        self.values
            .entry(key.to_string())
            .or_insert_with(Vec::new)
            .push(value.to_string());
    }

    /// First value submitted for `key`, or an empty string when there is none.
    pub fn get(&self, key: &str) -> &str {
        self.first(key).unwrap_or("")
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn first(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Submission::new();
        for (key, value) in iter {
            submission.add(key.as_ref(), value.as_ref());
        }
        submission
    }
}

impl From<HashMap<String, Vec<String>>> for Submission {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}
