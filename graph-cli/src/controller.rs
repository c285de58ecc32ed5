use std::fmt::Display;
use std::future::Future;
use std::ops::{Deref, DerefMut};

use graph_api::{model::user_profile::UserProfile, serde_json::Value, API};
use tracing::{debug, info, warn};

use crate::page::Surface;

pub const EMPTY_INPUT: &str = "User ID cannot be empty";
pub const NO_USER_DATA: &str = "No user data found";

/// Anything that can look up a user's raw profile JSON.
pub trait UserSource {
    type Error: Display;

    fn fetch_user_data(&self, user_id: &str)
        -> impl Future<Output = Result<Value, Self::Error>>;
}

impl UserSource for API {
    type Error = graph_api::Error;

    fn fetch_user_data(&self, user_id: &str) -> impl Future<Output = Result<Value, Self::Error>> {
        self.get_user_data(user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The trigger was disabled; nothing happened.
    Ignored,
    Invalid,
    Empty,
    Rendered,
    Failed(String),
}

pub struct Controller<S> {
    source: S,
}

impl<S: UserSource> Controller<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one click: validate, fetch, show the card or the error.
    ///
    /// Once a request has been issued the loading indicator is hidden and the
    /// trigger re-enabled on the way out, including when the returned future
    /// is dropped before it completes.
    pub async fn on_trigger<U: Surface>(&self, surface: &mut U) -> Outcome {
        if !surface.trigger_enabled() {
            debug!("trigger disabled, click ignored");
            return Outcome::Ignored;
        }

        surface.clear_error();
        let input = surface.input_value();
        let user_id = input.trim();
        if user_id.is_empty() {
            surface.set_error(EMPTY_INPUT);
            return Outcome::Invalid;
        }

        let mut busy = Busy::enter(surface);
        info!("fetching user {user_id}");

        let outcome = match self.source.fetch_user_data(user_id).await {
            Ok(data) if is_empty(&data) => {
                busy.set_error(NO_USER_DATA);
                Outcome::Empty
            }
            Ok(data) => {
                busy.render_user(&UserProfile::from_json(data));
                Outcome::Rendered
            }
            Err(e) => fail(&mut *busy, e.to_string()),
        };
        drop(busy);
        outcome
    }
}

/// Holds the surface in its loading state until dropped.
struct Busy<'a, U: Surface> {
    surface: &'a mut U,
}

impl<'a, U: Surface> Busy<'a, U> {
    fn enter(surface: &'a mut U) -> Self {
        surface.set_trigger_enabled(false);
        surface.set_loading(true);
        Busy { surface }
    }
}

impl<U: Surface> Drop for Busy<'_, U> {
    fn drop(&mut self) {
        self.surface.set_loading(false);
        self.surface.set_trigger_enabled(true);
    }
}

impl<U: Surface> Deref for Busy<'_, U> {
    type Target = U;

    fn deref(&self) -> &U {
        self.surface
    }
}

impl<U: Surface> DerefMut for Busy<'_, U> {
    fn deref_mut(&mut self) -> &mut U {
        self.surface
    }
}

fn fail(surface: &mut impl Surface, message: String) -> Outcome {
    warn!("request failed: {message}");
    surface.set_error(&message);
    Outcome::Failed(message)
}

fn is_empty(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use graph_api::serde_json::json;

    use super::*;

    #[test]
    fn empty_equivalents() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({"id": "1"})));
    }
}
