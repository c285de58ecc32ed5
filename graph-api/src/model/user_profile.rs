use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::lenient::{lenient, number_or_string, string_or_number};

/// A user record as the Graph API returns it.
///
/// Every field may be missing. A field whose shape is not the expected one
/// decodes to `None` rather than failing the whole record.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub birthday: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hometown: Option<NamedRef>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<NamedRef>,
    #[serde(deserialize_with = "lenient")]
    pub likes: Option<Connection>,
    #[serde(deserialize_with = "lenient")]
    pub events: Option<Connection>,
    #[serde(deserialize_with = "lenient")]
    pub photos: Option<Connection>,
    #[serde(deserialize_with = "lenient")]
    pub videos: Option<Connection>,
    #[serde(deserialize_with = "lenient")]
    pub friends: Option<Connection>,
    #[serde(deserialize_with = "lenient")]
    pub posts: Option<Connection>,
    #[serde(deserialize_with = "lenient")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub age_range: Option<AgeRange>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub picture: Option<Picture>,
}

/// A page reference such as a hometown or current location.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// An edge like `likes` or `friends`. Only the length of `data` matters here.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    #[serde(deserialize_with = "lenient")]
    pub data: Option<Vec<Value>>,
}

impl Connection {
    pub fn count(&self) -> Option<usize> {
        self.data.as_ref().map(Vec::len)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRange {
    #[serde(deserialize_with = "number_or_string")]
    pub min: Option<u32>,
    #[serde(deserialize_with = "number_or_string")]
    pub max: Option<u32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    #[serde(deserialize_with = "lenient")]
    pub data: Option<PictureData>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PictureData {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub height: Option<u32>,
    #[serde(deserialize_with = "number_or_string")]
    pub width: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub is_silhouette: Option<bool>,
}

impl UserProfile {
    /// Decode whatever a successful response held. Anything that is not a
    /// JSON object yields an empty profile.
    pub fn from_json(val: Value) -> Self {
        serde_json::from_value(val).unwrap_or_default()
    }

    pub fn picture_url(&self) -> Option<&str> {
        self.picture
            .as_ref()
            .and_then(|p| p.data.as_ref())
            .and_then(|d| d.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_sparse_profile() {
        let user: UserProfile = serde_json::from_value(json!({
            "id": "42",
            "name": "Ada",
            "age_range": {"min": 21},
            "friends": {"data": [], "summary": {"total_count": 310}},
            "picture": {"data": {"url": "https://cdn.example.com/a.jpg", "is_silhouette": false}}
        }))
        .unwrap();

        assert_eq!(user.id.as_deref(), Some("42"));
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.age_range, Some(AgeRange { min: Some(21), max: None }));
        assert_eq!(user.friends.as_ref().and_then(Connection::count), Some(0));
        assert_eq!(user.likes, None);
        assert_eq!(user.picture_url(), Some("https://cdn.example.com/a.jpg"));
    }

    #[test]
    fn missing_id_is_tolerated() {
        let user = UserProfile::from_json(json!({"name": "Bob"}));
        assert_eq!(user.id, None);
        assert_eq!(user.name.as_deref(), Some("Bob"));
    }

    #[test]
    fn odd_shapes_degrade_per_field() {
        let user = UserProfile::from_json(json!({
            "id": 1234,
            "name": "Bob",
            "email": 7,
            "age_range": {"min": "21"},
            "likes": {"data": "oops"},
            "hometown": "Oslo",
            "picture": {"data": {"url": "https://cdn.example.com/b.jpg", "width": "50"}}
        }));

        assert_eq!(user.id.as_deref(), Some("1234"));
        assert_eq!(user.name.as_deref(), Some("Bob"));
        assert_eq!(user.email, None);
        assert_eq!(user.age_range, Some(AgeRange { min: Some(21), max: None }));
        assert_eq!(user.likes, Some(Connection { data: None }));
        assert_eq!(user.hometown, None);
        assert_eq!(user.picture_url(), Some("https://cdn.example.com/b.jpg"));
    }

    #[test]
    fn non_object_is_an_empty_profile() {
        assert_eq!(UserProfile::from_json(json!("text")), UserProfile::default());
        assert_eq!(UserProfile::from_json(json!(true)), UserProfile::default());
    }
}
