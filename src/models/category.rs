use serde::{Deserialize, Serialize};

/// Project category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category_id")]
    pub id: String,
    pub name: String,
}
