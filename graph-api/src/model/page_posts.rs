use serde::Deserialize;
use serde::Serialize;

/// Posts of a page, newest first as the API returns them.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePosts {
    #[serde(default)]
    pub data: Vec<PagePost>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePost {
    pub id: Option<String>,
    pub message: Option<String>,
    pub created_time: String,
}
