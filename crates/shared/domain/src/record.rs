use crate::constants::{RELATED_IDENTIFIER_TYPE_HANDLE, RELATION_IS_DERIVED_FROM};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiers of a freshly created draft record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub record_id: String,
    pub filebucket_id: String,
}

impl fmt::Display for DraftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {} (file bucket {})", self.record_id, self.filebucket_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub title: String,
}

/// A DataCite-style link from a record to another identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedIdentifier {
    pub related_identifier: String,
    pub related_identifier_type: String,
    pub relation_type: String,
}

impl RelatedIdentifier {
    /// The record is derived from the dataset behind `pid`.
    #[must_use]
    pub fn derived_from_handle(pid: impl Into<String>) -> Self {
        Self {
            related_identifier: pid.into(),
            related_identifier_type: RELATED_IDENTIFIER_TYPE_HANDLE.to_owned(),
            relation_type: RELATION_IS_DERIVED_FROM.to_owned(),
        }
    }
}

/// The smallest metadata document the repository accepts for a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMetadata {
    pub titles: Vec<Title>,
    pub community: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub related_identifiers: Vec<RelatedIdentifier>,
    pub open_access: bool,
}

impl DraftMetadata {
    /// Open-access metadata with a single title.
    #[must_use]
    pub fn new(community: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            titles: vec![Title { title: title.into() }],
            community: community.into(),
            related_identifiers: Vec::new(),
            open_access: true,
        }
    }

    #[must_use]
    pub fn with_related(mut self, related: RelatedIdentifier) -> Self {
        self.related_identifiers.push(related);
        self
    }
}

/// One JSON-patch operation, as sent to PATCH endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    pub value: serde_json::Value,
}

impl PatchOperation {
    /// Moves a draft into the `submitted` publication state.
    #[must_use]
    pub fn submit_for_publication() -> Self {
        Self {
            op: "add".to_owned(),
            path: "/publication_state".to_owned(),
            value: serde_json::Value::String("submitted".to_owned()),
        }
    }
}
