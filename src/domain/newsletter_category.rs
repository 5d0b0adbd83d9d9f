#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsletterCategory {
    Events,
    Activities,
    General,
    Achievements,
}

impl NewsletterCategory {
    pub fn parse(category: &str) -> Result<NewsletterCategory, String> {
        match category {
            "events" => Ok(NewsletterCategory::Events),
            "activities" => Ok(NewsletterCategory::Activities),
            "general" => Ok(NewsletterCategory::General),
            "achievements" => Ok(NewsletterCategory::Achievements),
            _ => Err(format!("{} is not a newsletter category", category)),
        }
    }
}

impl AsRef<str> for NewsletterCategory {
    fn as_ref(&self) -> &str {
        match self {
            NewsletterCategory::Events => "events",
            NewsletterCategory::Activities => "activities",
            NewsletterCategory::General => "general",
            NewsletterCategory::Achievements => "achievements",
        }
    }
}
