use indexmap::IndexMap;

/// Key/value pairs of one profile, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialRecord {
    profile: String,
    entries: IndexMap<String, String>,
}

impl CredentialRecord {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            entries: IndexMap::new(),
        }
    }

    /// Insert a pair. A repeated key keeps its first position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key ignoring ASCII case.
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.get(key).or_else(|| {
            self.entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str())
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
