use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{Error, Result, GENERIC_FAILURE};
use crate::model::page_posts::PagePosts;
use crate::model::user_profile::UserProfile;
use crate::RequestConfig;

/// Profile fields requested for every user lookup.
pub const USER_FIELDS: &[&str] = &[
    "id",
    "name",
    "birthday",
    "hometown",
    "location",
    "likes",
    "events",
    "photos",
    "videos",
    "friends",
    "posts",
    "gender",
    "link",
    "age_range",
    "email",
    "picture",
];

pub const PAGE_POST_FIELDS: &[&str] = &["message", "created_time"];

#[derive(Clone, Debug)]
pub struct API {
    client: reqwest::Client,
    config: RequestConfig,
}

impl API {
    pub fn new(config: RequestConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(API { client, config })
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn user_data_url(&self, user_id: &str) -> String {
        format!(
            "{}/{}?fields={}&access_token={}",
            self.config.base_url(),
            user_id,
            USER_FIELDS.join(","),
            self.config.access_token()
        )
    }

    pub fn page_posts_url(&self, page_id: &str) -> String {
        format!(
            "{}/{}/posts?fields={}&access_token={}",
            self.config.base_url(),
            page_id,
            PAGE_POST_FIELDS.join(","),
            self.config.access_token()
        )
    }

    /// Fetch a user's profile fields and return the body untouched.
    ///
    /// The id is sent as given; trimming and emptiness checks belong to the
    /// caller.
    pub async fn get_user_data(&self, user_id: &str) -> Result<Value> {
        self.get_json(&self.user_data_url(user_id)).await
    }

    pub async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let val = self.get_user_data(user_id).await?;
        Ok(UserProfile::from_json(val))
    }

    /// Fetch a page's posts (`message`, `created_time`).
    pub async fn get_page_posts(&self, page_id: &str) -> Result<PagePosts> {
        let val = self.get_json(&self.page_posts_url(page_id)).await?;
        Ok(serde_json::from_value(val)?)
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        // reqwest errors carry the request url, and with it the access token.
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;
        let parsed = serde_json::from_slice::<Value>(&body);

        if !status.is_success() {
            return Err(api_error(status, parsed.ok().as_ref()));
        }
        Ok(parsed?)
    }
}

fn api_error(status: StatusCode, body: Option<&Value>) -> Error {
    let message = body
        .and_then(|v| v.pointer("/error/message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string();
    Error::Api { status, message }
}
