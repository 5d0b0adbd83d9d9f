use serde::Deserialize;

use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_preferences::SubscriberPreferences;
use crate::domain::validation::{
    required_email, EntityKind, FieldErrors, InsertPayload, ValidationError,
};

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
    pub first_name: Option<SubscriberName>,
    pub last_name: Option<SubscriberName>,
    pub preferences: SubscriberPreferences,
}

/// Subscribe form body. `status`, `subscribedAt` and `unsubscribedAt` are not accepted.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriberBody {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferences: Option<Vec<String>>,
}

impl InsertPayload for NewSubscriberBody {
    const KIND: EntityKind = EntityKind::NewsletterSubscriber;
    type Validated = NewSubscriber;

    fn validate(self) -> Result<NewSubscriber, ValidationError> {
        let mut errors = FieldErrors::default();
        let email = errors.check("email", required_email(self.email));
        let first_name = errors.check("firstName", SubscriberName::parse_optional(self.first_name));
        let last_name = errors.check("lastName", SubscriberName::parse_optional(self.last_name));
        let preferences =
            errors.check("preferences", SubscriberPreferences::parse(self.preferences));

        let (Some(email), Some(first_name), Some(last_name), Some(preferences)) =
            (email, first_name, last_name, preferences)
        else {
            return Err(errors.into_error());
        };

        Ok(NewSubscriber {
            email,
            first_name,
            last_name,
            preferences,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct UnsubscribeBody {
    pub email: Option<String>,
}

impl UnsubscribeBody {
    pub fn parse(self) -> Result<SubscriberEmail, ValidationError> {
        required_email(self.email).map_err(|reason| ValidationError::single("email", reason))
    }
}
