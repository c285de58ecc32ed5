//! The page the controller drives: an input, a trigger button, a loading
//! indicator, an error line and a results container.

use std::{fs, path::Path};

use anyhow::Result;
use graph_api::model::user_profile::UserProfile;

use crate::render::{render_card, CardView};
use crate::utils::escape_html;

pub const INPUT_ID: &str = "pageIdInput";
pub const TRIGGER_ID: &str = "fetchBtn";
pub const LOADING_ID: &str = "loading";
pub const ERROR_ID: &str = "error";
pub const RESULTS_ID: &str = "results";

/// Writes go one way: the controller sets state, nothing reads it back for
/// decisions except the input value and the trigger flag.
pub trait Surface {
    fn input_value(&self) -> String;
    fn trigger_enabled(&self) -> bool;
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn set_loading(&mut self, visible: bool);
    /// Replace the error text. An empty message clears it.
    fn set_error(&mut self, message: &str);
    fn clear_error(&mut self) {
        self.set_error("");
    }
    fn clear_results(&mut self);
    /// Replace the results with a card for `user`.
    fn render_user(&mut self, user: &UserProfile);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    input: String,
    trigger_enabled: bool,
    loading: bool,
    error: String,
    results: Option<String>,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self {
            input: String::new(),
            trigger_enabled: true,
            loading: false,
            error: String::new(),
            results: None,
        }
    }
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn results(&self) -> Option<&str> {
        self.results.as_deref()
    }

    pub fn to_html(&self) -> String {
        let loading_class = if self.loading { "" } else { " class=\"hidden\"" };
        let disabled = if self.trigger_enabled { "" } else { " disabled" };
        let results = self.results.as_deref().unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Graph Profile</title>
<style>
  .hidden {{ display: none; }}
  .card {{ border: 1px solid #ddd; border-radius: 8px; padding: 16px; max-width: 420px; }}
  #{ERROR_ID} {{ color: #c0392b; }}
</style>
</head>
<body>
<input type="text" id="{INPUT_ID}" value="{input}" placeholder="User ID">
<button id="{TRIGGER_ID}"{disabled}>Fetch</button>
<div id="{LOADING_ID}"{loading_class}>Loading...</div>
<div id="{ERROR_ID}">{error}</div>
<div id="{RESULTS_ID}">
{results}
</div>
</body>
</html>
"#,
            input = escape_html(&self.input),
            error = escape_html(&self.error),
        )
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_html())?;
        Ok(())
    }
}

impl Surface for HtmlPage {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    fn clear_results(&mut self) {
        self.results = None;
    }

    fn render_user(&mut self, user: &UserProfile) {
        self.clear_results();
        self.results = Some(render_card(&CardView::from_user(user)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserProfile {
        UserProfile {
            id: Some("1".into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn clear_error_empties_region() {
        let mut page = HtmlPage::new();
        page.set_error("X");
        assert_eq!(page.error(), "X");
        page.clear_error();
        assert_eq!(page.error(), "");
    }

    #[test]
    fn set_error_replaces_instead_of_appending() {
        let mut page = HtmlPage::new();
        page.set_error("first");
        page.set_error("second");
        assert_eq!(page.error(), "second");
    }

    #[test]
    fn set_loading_is_idempotent() {
        let mut page = HtmlPage::new();
        page.set_loading(true);
        page.set_loading(true);
        assert!(page.loading());
        page.set_loading(false);
        page.set_loading(false);
        assert!(!page.loading());
    }

    #[test]
    fn render_user_replaces_previous_card() {
        let mut page = HtmlPage::new();
        page.render_user(&user("First"));
        page.render_user(&user("Second"));
        let results = page.results().unwrap();
        assert!(results.contains("<h2>Second</h2>"));
        assert!(!results.contains("First"));
        assert_eq!(results.matches("class=\"card\"").count(), 1);
    }

    #[test]
    fn document_reflects_state() {
        let mut page = HtmlPage::new();
        let idle = page.to_html();
        assert!(idle.contains(r#"<div id="loading" class="hidden">"#));
        assert!(idle.contains(r#"<button id="fetchBtn">"#));

        page.set_input("me & you");
        page.set_trigger_enabled(false);
        page.set_loading(true);
        page.set_error("<bad>");
        let busy = page.to_html();
        assert!(busy.contains(r#"<div id="loading">"#));
        assert!(busy.contains(r#"<button id="fetchBtn" disabled>"#));
        assert!(busy.contains(r#"value="me &amp; you""#));
        assert!(busy.contains(r#"<div id="error">&lt;bad&gt;</div>"#));
    }
}
