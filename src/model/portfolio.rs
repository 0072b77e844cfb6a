//! Portfolio document types. The owner document holds the scalar
//! profile fields next to the three list fields (`skills`, `projects`,
//! `experiences`); each list field is managed by its own store so a
//! save of one never disturbs the others.

use crate::core::{ListRecord, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ListRecord for Project {
    fn record_id(&self) -> RecordId {
        RecordId::Str(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub currently_working: bool,
    pub description: String,
    pub skills: Vec<String>,
}

impl ListRecord for Experience {
    fn record_id(&self) -> RecordId {
        RecordId::Str(self.id.clone())
    }
}

/// Scalar profile fields of the owner document. The list fields live
/// in their own stores; this type exists for the profile merge path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
