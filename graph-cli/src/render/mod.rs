//! Card rendering: which lines a profile produces, then the markup for them.

use graph_api::model::user_profile::{Connection, NamedRef, UserProfile};

mod html;

pub use html::render_card;

pub const DEFAULT_HEADING: &str = "User";
pub const PICTURE_SIZE_PX: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text { label: &'static str, value: String },
    Link {
        label: &'static str,
        href: String,
        text: &'static str,
    },
    Count {
        label: &'static str,
        count: usize,
        unit: &'static str,
    },
}

impl Line {
    pub fn label(&self) -> &'static str {
        match self {
            Line::Text { label, .. } | Line::Link { label, .. } | Line::Count { label, .. } => {
                *label
            }
        }
    }
}

/// Everything a card shows, without any markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub heading: String,
    pub picture: Option<String>,
    pub lines: Vec<Line>,
}

impl CardView {
    pub fn from_user(user: &UserProfile) -> Self {
        let heading = present(&user.name).unwrap_or(DEFAULT_HEADING).to_string();
        let picture = user
            .picture_url()
            .filter(|u| !u.is_empty())
            .map(str::to_string);

        let mut lines = Vec::new();
        let mut text = |label, value: Option<&str>| {
            if let Some(value) = value {
                lines.push(Line::Text {
                    label,
                    value: value.to_string(),
                });
            }
        };

        text("Email", present(&user.email));
        text("Birthday", present(&user.birthday));
        text("Gender", present(&user.gender));
        let age = user.age_range.as_ref().map(|range| {
            let min = range.min.map(|m| m.to_string()).unwrap_or_default();
            let max = range.max.map_or_else(|| "+".to_string(), |m| m.to_string());
            format!("{min}-{max}")
        });
        text("Age Range", age.as_deref());
        text("Hometown", ref_name(&user.hometown));
        text("Location", ref_name(&user.location));

        if let Some(href) = present(&user.link).filter(|l| is_web_url(l)) {
            lines.push(Line::Link {
                label: "Profile",
                href: href.to_string(),
                text: "View Profile",
            });
        }

        let connections = [
            ("Likes", &user.likes, "items"),
            ("Events", &user.events, "events"),
            ("Photos", &user.photos, "photos"),
            ("Videos", &user.videos, "videos"),
            ("Friends", &user.friends, "friends"),
            ("Posts", &user.posts, "posts"),
        ];
        for (label, conn, unit) in connections {
            if let Some(count) = conn.as_ref().and_then(Connection::count) {
                lines.push(Line::Count { label, count, unit });
            }
        }

        CardView {
            heading,
            picture,
            lines,
        }
    }

    pub fn line(&self, label: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.label() == label)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Only `http` and `https` links are turned into anchors.
fn is_web_url(link: &str) -> bool {
    let link = link.trim_start().to_ascii_lowercase();
    link.starts_with("http://") || link.starts_with("https://")
}

fn ref_name(field: &Option<NamedRef>) -> Option<&str> {
    field.as_ref().and_then(|r| present(&r.name))
}

#[cfg(test)]
mod tests {
    use graph_api::serde_json::{self, json, Value};

    use super::*;

    fn user(val: Value) -> UserProfile {
        serde_json::from_value(val).unwrap()
    }

    fn labels(card: &CardView) -> Vec<&'static str> {
        card.lines.iter().map(Line::label).collect()
    }

    #[test]
    fn bare_profile_has_default_heading_and_no_lines() {
        let card = CardView::from_user(&user(json!({"id": "1"})));
        assert_eq!(card.heading, "User");
        assert_eq!(card.picture, None);
        assert!(card.lines.is_empty());
    }

    #[test]
    fn full_profile_keeps_fixed_order() {
        let card = CardView::from_user(&user(json!({
            "id": "1",
            "name": "Ada Lovelace",
            "posts": {"data": [{}, {}]},
            "friends": {"data": [{}]},
            "videos": {"data": []},
            "photos": {"data": [{}, {}, {}]},
            "events": {"data": []},
            "likes": {"data": [{}, {}, {}, {}]},
            "link": "https://social.example.com/ada",
            "location": {"id": "2", "name": "London"},
            "hometown": {"name": "Marylebone"},
            "age_range": {"min": 21, "max": 30},
            "gender": "female",
            "birthday": "12/10/1815",
            "email": "ada@example.com",
            "picture": {"data": {"url": "https://cdn.example.com/ada.jpg"}}
        })));

        assert_eq!(card.heading, "Ada Lovelace");
        assert_eq!(card.picture.as_deref(), Some("https://cdn.example.com/ada.jpg"));
        assert_eq!(
            labels(&card),
            [
                "Email", "Birthday", "Gender", "Age Range", "Hometown", "Location", "Profile",
                "Likes", "Events", "Photos", "Videos", "Friends", "Posts"
            ]
        );
        assert_eq!(
            card.line("Likes"),
            Some(&Line::Count {
                label: "Likes",
                count: 4,
                unit: "items"
            })
        );
        assert_eq!(
            card.line("Profile"),
            Some(&Line::Link {
                label: "Profile",
                href: "https://social.example.com/ada".into(),
                text: "View Profile"
            })
        );
    }

    #[test]
    fn line_present_only_when_field_present() {
        let card = CardView::from_user(&user(json!({
            "id": "1",
            "birthday": "01/01/1990",
            "location": {"name": "Oslo"},
            "friends": {"data": []}
        })));
        assert_eq!(labels(&card), ["Birthday", "Location", "Friends"]);
        assert_eq!(
            card.line("Friends"),
            Some(&Line::Count {
                label: "Friends",
                count: 0,
                unit: "friends"
            })
        );
    }

    #[test]
    fn empty_strings_and_nameless_refs_are_omitted() {
        let card = CardView::from_user(&user(json!({
            "id": "1",
            "name": "",
            "email": "",
            "hometown": {"id": "99"},
            "likes": {"paging": {}}
        })));
        assert_eq!(card.heading, "User");
        assert!(card.lines.is_empty());
    }

    #[test]
    fn link_needs_web_scheme() {
        for link in ["javascript:alert(1)", " JavaScript:alert(1)", "data:text/html,hi", "/relative"] {
            let card = CardView::from_user(&user(json!({"id": "1", "link": link})));
            assert_eq!(card.line("Profile"), None, "{link}");
        }
        let card = CardView::from_user(&user(json!({"id": "1", "link": "HTTPS://social.example.com/x"})));
        assert!(card.line("Profile").is_some());
    }

    #[test]
    fn age_range_without_max_uses_plus() {
        let open = CardView::from_user(&user(json!({"id": "1", "age_range": {"min": 20}})));
        let closed =
            CardView::from_user(&user(json!({"id": "1", "age_range": {"min": 20, "max": 30}})));

        let value = |card: &CardView| match card.line("Age Range") {
            Some(Line::Text { value, .. }) => value.clone(),
            other => panic!("unexpected line {other:?}"),
        };
        assert_eq!(value(&open), "20-+");
        assert_eq!(value(&closed), "20-30");
    }
}
