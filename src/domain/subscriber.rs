use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_preferences::SubscriberPreferences;
use crate::domain::subscriber_status::SubscriberStatus;

/// A stored newsletter recipient. `unsubscribed_at` is set exactly when `status` is
/// `Unsubscribed`.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: Uuid,
    pub email: SubscriberEmail,
    pub first_name: Option<SubscriberName>,
    pub last_name: Option<SubscriberName>,
    pub status: SubscriberStatus,
    pub preferences: SubscriberPreferences,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}
