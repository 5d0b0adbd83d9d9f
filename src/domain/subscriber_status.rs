#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    // Reserved for a confirmation step; nothing moves a subscriber into it.
    Pending,
    Unsubscribed,
}

impl SubscriberStatus {
    pub fn is_unsubscribed(&self) -> bool {
        matches!(self, SubscriberStatus::Unsubscribed)
    }

    /// Status after a subscribe request for an address that already has a record.
    pub fn on_resubscribe(self) -> SubscriberStatus {
        match self {
            SubscriberStatus::Unsubscribed => SubscriberStatus::Active,
            other => other,
        }
    }

    pub fn parse(status: String) -> Result<SubscriberStatus, String> {
        match status.as_str() {
            "active" => Ok(SubscriberStatus::Active),
            "pending" => Ok(SubscriberStatus::Pending),
            "unsubscribed" => Ok(SubscriberStatus::Unsubscribed),
            _ => Err(format!("{} is not a valid subscriber status", status)),
        }
    }
}

impl AsRef<str> for SubscriberStatus {
    fn as_ref(&self) -> &str {
        match self {
            SubscriberStatus::Active => "active",
            SubscriberStatus::Pending => "pending",
            SubscriberStatus::Unsubscribed => "unsubscribed",
        }
    }
}
