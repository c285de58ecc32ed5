mod lenient;
pub mod page_posts;
pub mod user_profile;
