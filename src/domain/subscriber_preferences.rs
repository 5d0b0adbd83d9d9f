use std::collections::BTreeSet;

use crate::domain::newsletter_category::NewsletterCategory;

/// The newsletter categories a subscriber opted into.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubscriberPreferences(BTreeSet<NewsletterCategory>);

impl SubscriberPreferences {
    /// Parses a subscribe request's preferences, which must name at least one category.
    pub fn parse(tags: Option<Vec<String>>) -> Result<SubscriberPreferences, String> {
        let tags = tags.unwrap_or_default();

        if tags.is_empty() {
            return Err(String::from("at least one preference is required"));
        }

        Self::from_tags(tags)
    }

    /// Reads stored tags back. Only records that are not active may have none.
    pub fn from_tags(tags: Vec<String>) -> Result<SubscriberPreferences, String> {
        let categories = tags
            .iter()
            .map(|tag| NewsletterCategory::parse(tag.trim()))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self(categories))
    }

    pub fn to_tags(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|category| category.as_ref().to_string())
            .collect()
    }
}
