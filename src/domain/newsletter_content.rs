//! Newsletter bodies use a small line-oriented markup: `# ` headings, `## ` sub-headings,
//! `- ` list items and blank lines as breaks. Anything else is a paragraph.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading(String),
    SubHeading(String),
    ListItem(String),
    Break,
    Paragraph(String),
}

pub fn parse_content(content: &str) -> Vec<ContentBlock> {
    content.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> ContentBlock {
    if let Some(text) = line.strip_prefix("# ") {
        ContentBlock::Heading(text.to_string())
    } else if let Some(text) = line.strip_prefix("## ") {
        ContentBlock::SubHeading(text.to_string())
    } else if let Some(text) = line.strip_prefix("- ") {
        ContentBlock::ListItem(text.to_string())
    } else if line.trim().is_empty() {
        ContentBlock::Break
    } else {
        ContentBlock::Paragraph(line.to_string())
    }
}
