use std::path::PathBuf;

use derive_builder::Builder;
use graph_api::RequestConfig;

pub trait Context<'a> {
    /// Base url of the Graph API, version segment included if any.
    ///
    /// Example: https://graph.facebook.com, https://graph.facebook.com/v19.0
    fn api_base_url(&self) -> &'a str;
    fn access_token(&self) -> &'a str;
    fn output_path(&self) -> &'a PathBuf;

    fn request_config(&self) -> RequestConfig {
        RequestConfig::new(self.api_base_url(), self.access_token())
    }
}

#[derive(Clone, Builder, PartialEq, Eq)]
pub struct Args {
    access_token: String,
    #[builder(default = "String::from(\"https://graph.facebook.com\")")]
    api_base_url: String,
    #[builder(default = "PathBuf::from(\"card.html\")")]
    output_path: PathBuf,
}

impl Args {
    pub fn builder() -> ArgsBuilder {
        ArgsBuilder::default()
    }
}

impl<'a> Context<'a> for &'a Args {
    fn api_base_url(&self) -> &'a str {
        &self.api_base_url
    }

    fn access_token(&self) -> &'a str {
        &self.access_token
    }

    fn output_path(&self) -> &'a PathBuf {
        &self.output_path
    }
}
