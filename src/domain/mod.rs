pub mod contact;
pub mod event;
pub mod media_item;
pub mod new_subscriber;
pub mod newsletter;
pub mod newsletter_category;
pub mod newsletter_content;
pub mod professor;
pub mod subscriber;
pub mod subscriber_email;
pub mod subscriber_name;
pub mod subscriber_preferences;
pub mod subscriber_status;
pub mod team_member;
pub mod user;
pub mod validation;
pub mod volunteer;
