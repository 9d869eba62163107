use serde::{Deserialize, Serialize};

use crate::envelope::{nested_response, Envelope};

/// A category of a custom classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(skip)]
    envelope: Envelope,

    pub category_id: String,

    pub label: String,

    /// Query deciding whether a document belongs in the category,
    /// e.g. `concept('sport>golf')`.
    pub query: String,
}

nested_response!(Category);

/// A page of classifier categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryList {
    #[serde(skip)]
    envelope: Envelope,

    /// Identifier of the classifier.
    pub id: String,

    pub offset: i64,

    pub limit: i64,

    pub total: i64,

    /// Unix timestamp of the classifier's last change.
    pub last_updated: i64,

    pub categories: Vec<Category>,
}

nested_response!(CategoryList);
