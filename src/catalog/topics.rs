//! Topic groups: trigger phrase -> explicit node id list

use crate::graph::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, Vec<NodeId>>", into = "IndexMap<String, Vec<NodeId>>")]
pub struct TopicTable {
    groups: IndexMap<String, Vec<NodeId>>,
}

impl From<IndexMap<String, Vec<NodeId>>> for TopicTable {
    fn from(groups: IndexMap<String, Vec<NodeId>>) -> Self {
        let mut table = TopicTable::new();
        for (phrase, ids) in groups {
            table.insert(&phrase, ids);
        }
        table
    }
}

impl From<TopicTable> for IndexMap<String, Vec<NodeId>> {
    fn from(table: TopicTable) -> Self {
        table.groups
    }
}

impl TopicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group. The phrase is stored lower-cased and trimmed; an
    /// existing phrase gets its list replaced.
    pub fn insert<I, S>(&mut self, phrase: &str, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return;
        }
        self.groups.insert(phrase, ids.into_iter().map(Into::into).collect());
    }

    pub fn with_group<I, S>(mut self, phrase: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.insert(phrase, ids);
        self
    }

    /// Groups whose trigger phrase occurs in `query`.
    ///
    /// `query` must already be normalized (trimmed, lower-cased).
    pub fn matching<'a>(&'a self, query: &'a str) -> impl Iterator<Item = (&'a str, &'a [NodeId])> + 'a {
        self.groups
            .iter()
            .filter(move |(phrase, _)| query.contains(phrase.as_str()))
            .map(|(phrase, ids)| (phrase.as_str(), ids.as_slice()))
    }

    pub fn group(&self, phrase: &str) -> Option<&[NodeId]> {
        self.groups.get(phrase).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NodeId])> {
        self.groups.iter().map(|(p, ids)| (p.as_str(), ids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TopicTable {
        TopicTable::new()
            .with_group("Iran", ["MOFA-JS-003", "FINANCE-IRAN-001"])
            .with_group("russia", ["MOFA-JS-001"])
            .with_group("  ", ["ignored"])
    }

    #[test]
    fn test_phrases_are_normalized() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.group("iran").unwrap().len(), 2);
        assert!(table.group("Iran").is_none());
    }

    #[test]
    fn test_matching_is_substring_of_query() {
        let table = table();
        let hits: Vec<&str> = table.matching("iran and russia talks").map(|(p, _)| p).collect();
        assert_eq!(hits, vec!["iran", "russia"]);
        assert_eq!(table.matching("tehran").count(), 0);
        assert_eq!(table.matching("iranian").count(), 1);
    }

    #[test]
    fn test_deserialized_phrases_are_normalized() {
        let table: TopicTable = serde_json::from_str(r#"{" Foreign Affairs ": ["ORG-MOFA-001"]}"#).unwrap();
        assert!(table.group("foreign affairs").is_some());
    }
}
