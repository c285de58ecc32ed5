use anyhow::{anyhow, Result};
use graph_api::{model::user_profile::UserProfile, API};
use tracing::warn;

use crate::page::{HtmlPage, Surface};
use crate::stdio::{loading_bar, WriteBar};

use super::ctx::Context;

pub fn build_api<'a>(ctx: &impl Context<'a>) -> Result<API> {
    API::new(ctx.request_config()).map_err(|e| anyhow!("failed to build http client: {e}"))
}

/// The page plus a terminal spinner standing in for its loading indicator.
pub struct CliSurface {
    pub page: HtmlPage,
    bar: &'static WriteBar,
}

impl CliSurface {
    pub fn new() -> Self {
        Self {
            page: HtmlPage::new(),
            bar: loading_bar(),
        }
    }
}

impl Default for CliSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for CliSurface {
    fn input_value(&self) -> String {
        self.page.input_value()
    }

    fn trigger_enabled(&self) -> bool {
        self.page.trigger_enabled()
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.page.set_trigger_enabled(enabled);
    }

    fn set_loading(&mut self, visible: bool) {
        self.page.set_loading(visible);
        let res = if visible {
            self.bar.show()
        } else {
            self.bar.hide()
        };
        if let Err(e) = res {
            warn!("loading indicator: {e}");
        }
    }

    fn set_error(&mut self, message: &str) {
        self.page.set_error(message);
    }

    fn clear_results(&mut self) {
        self.page.clear_results();
    }

    fn render_user(&mut self, user: &UserProfile) {
        self.page.render_user(user);
    }
}
