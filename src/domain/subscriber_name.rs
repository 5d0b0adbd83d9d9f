use unicode_segmentation::UnicodeSegmentation;

const MAX_CHAR_LENGHT: usize = 256;
const FORBIDDEN_CHARS: [char; 9] = ['/', '{', '}', '"', '>', '<', '\\', '(', ')'];

/// A person's first or last name as typed into one of the public forms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubscriberName(String);

impl SubscriberName {
    pub fn parse(name: String) -> Result<SubscriberName, String> {
        let is_empty_or_whitespace = name.trim().is_empty();
        let is_too_long = name.graphemes(true).count() > MAX_CHAR_LENGHT;
        let contains_forbidden_chars = name.chars().any(|char| FORBIDDEN_CHARS.contains(&char));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_chars {
            return Err(format!("{} is not a valid name", name));
        }

        Ok(Self(name.trim().to_string()))
    }

    pub fn parse_required(name: Option<String>) -> Result<SubscriberName, String> {
        match name {
            None => Err(String::from("is required")),
            Some(name) => Self::parse(name),
        }
    }

    /// Blank input means the name was left out.
    pub fn parse_optional(name: Option<String>) -> Result<Option<SubscriberName>, String> {
        match name {
            Some(name) if !name.trim().is_empty() => Self::parse(name).map(Some),
            _ => Ok(None),
        }
    }
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
