/// Ordered header storage with case-insensitive name lookup.
///
/// HTTP header names compare case-insensitively, but serialization order
/// matters for deterministic output, so entries are kept in a plain vector
/// in insertion order. `insert` replaces an existing entry in place
/// (last value wins), which keeps duplicate request headers from silently
/// accumulating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a header, replacing the value of an existing entry with the
    /// same (case-insensitive) name while keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_case_insensitively() {
        let mut headers = HeaderMap::new();
        headers.insert("Host", "one");
        headers.insert("host", "two");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("HOST"), Some("two"));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", "text/html");
        headers.insert("Location", "/sub/");

        let names: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Content-Type", "Location"]);
    }
}
