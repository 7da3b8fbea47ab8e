use crate::error::ResourceError;
use std::collections::HashMap;
use std::path::Path;

/// IFC type code to classification description table.
///
/// Read from lines of the form `IfcWall: 23-10 Walls`. Keys and values are
/// trimmed, lines without a colon are ignored and later duplicates replace
/// earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationMap {
    entries: HashMap<String, String>,
}

impl ClassificationMap {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let content = std::fs::read_to_string(&path).map_err(|source| ResourceError::Config {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        let map = Self::parse(&content);
        log::debug!(
            "loaded {} classification mappings from {}",
            map.len(),
            path.as_ref().display()
        );
        Ok(map)
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let Some((code, description)) = line.split_once(':') else {
                continue;
            };
            let code = code.trim().trim_start_matches('\u{feff}');
            if code.is_empty() {
                continue;
            }
            entries.insert(code.to_string(), description.trim().to_string());
        }

        Self { entries }
    }

    #[must_use]
    pub fn get(&self, type_code: &str) -> Option<&str> {
        self.entries.get(type_code).map(String::as_str)
    }

    /// Mapped type codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClassificationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
