//! Synonym table for token expansion.

use std::path::Path;

use ahash::AHashMap;

use crate::analysis::resource::{LoadResource, ResourceKind, read_resource};
use crate::error::{DecompoundError, Result};

/// Maps lowercase terms to their synonyms.
///
/// Every term of a group is a synonym of every other term of that group. A
/// term listed in several groups collects the synonyms of all of them.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    synonyms: AHashMap<String, Vec<Box<[char]>>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a synonym table from a JSON file.
    ///
    /// The JSON file should contain an array of synonym groups, where each group
    /// is an array of terms that are synonyms of each other.
    ///
    /// Example format:
    /// ```json
    /// [
    ///   ["auto", "wagen", "pkw"],
    ///   ["bahn", "eisenbahn"]
    /// ]
    /// ```
    pub fn parse_json(content: &str) -> Result<Self> {
        let groups: Vec<Vec<String>> = serde_json::from_str(content)
            .map_err(|e| DecompoundError::parse(format!("Failed to parse synonym JSON: {e}")))?;
        Ok(Self::from_synonym_groups(groups))
    }

    /// Build a synonym table from synonym groups.
    pub fn from_synonym_groups<G, S>(groups: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = SynonymTable::new();
        for group in groups {
            let terms: Vec<String> = group
                .into_iter()
                .map(|term| term.as_ref().trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect();
            table.add_synonym_group(&terms);
        }
        table
    }

    /// Add a group whose terms are all synonyms of each other.
    pub fn add_synonym_group(&mut self, terms: &[String]) {
        for term in terms {
            let entry = self.synonyms.entry(term.clone()).or_default();
            for other in terms {
                if other == term {
                    continue;
                }
                let other: Box<[char]> = other.chars().collect();
                if !entry.contains(&other) {
                    entry.push(other);
                }
            }
        }
    }

    /// Synonyms of an already lowercased term.
    pub fn get_synonyms(&self, term: &str) -> Option<&[Box<[char]>]> {
        self.synonyms
            .get(term)
            .map(|synonyms| synonyms.as_slice())
            .filter(|synonyms| !synonyms.is_empty())
    }
}

impl LoadResource for SynonymTable {
    const KIND: ResourceKind = ResourceKind::Synonyms;

    fn load(path: &Path) -> Result<Self> {
        let content = read_resource(Self::KIND, path)?;
        Self::parse_json(&content)
    }

    fn len(&self) -> usize {
        self.synonyms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(synonyms: &[Box<[char]>]) -> Vec<String> {
        synonyms.iter().map(|s| s.iter().collect()).collect()
    }

    #[test]
    fn test_bidirectional_groups() {
        let table = SynonymTable::from_synonym_groups([vec!["Auto", "Wagen", "PKW"]]);

        assert_eq!(texts(table.get_synonyms("auto").unwrap()), vec!["wagen", "pkw"]);
        assert_eq!(texts(table.get_synonyms("pkw").unwrap()), vec!["auto", "wagen"]);
        assert!(table.get_synonyms("haus").is_none());
    }

    #[test]
    fn test_term_in_several_groups() {
        let table = SynonymTable::from_synonym_groups([
            vec!["bahn", "eisenbahn"],
            vec!["bahn", "zug", "eisenbahn"],
        ]);

        assert_eq!(
            texts(table.get_synonyms("bahn").unwrap()),
            vec!["eisenbahn", "zug"]
        );
    }

    #[test]
    fn test_single_term_group_has_no_synonyms() {
        let table = SynonymTable::from_synonym_groups([vec!["allein"]]);
        assert!(table.get_synonyms("allein").is_none());
    }

    #[test]
    fn test_parse_json() {
        let table = SynonymTable::parse_json(r#"[["auto", "wagen"], ["bahn", "zug"]]"#).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(texts(table.get_synonyms("zug").unwrap()), vec!["bahn"]);

        assert!(SynonymTable::parse_json("{not json").is_err());
    }
}
