use crate::error::{ModelError, Result};

/// A collaborator credited on a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub linked_in: String,
}

/// Front matter of a post or project record.
///
/// Every field is optional in the source files; missing values fall back to
/// empty strings and empty lists so callers never have to special-case them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PostMetadata {
    pub title: String,
    pub published_at: Option<String>,
    pub summary: String,
    pub image: String,
    pub images: Vec<String>,
    pub tag: Option<String>,
    pub team: Vec<TeamMember>,
    pub link: String,
    pub technologies: Vec<String>,

    // Extra-curricular
    pub category: String,
    pub description: String,
    pub duration: String,
    pub achievement: String,

    // Co-curricular
    pub img: String,
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "order::deserialize")
    )]
    pub order: Option<i64>,
}

impl PostMetadata {
    /// Avatar sources of the credited team, in front-matter order.
    pub fn avatars(&self) -> impl Iterator<Item = &str> {
        self.team
            .iter()
            .map(|member| member.avatar.as_str())
            .filter(|avatar| !avatar.is_empty())
    }

    /// First listed image, falling back to the single `image` field.
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .iter()
            .map(String::as_str)
            .find(|src| !src.is_empty())
            .or_else(|| (!self.image.is_empty()).then_some(self.image.as_str()))
    }
}

/// A single content record: its slug (file stem), metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub slug: String,
    pub metadata: PostMetadata,
    pub content: String,
}

impl PostRecord {
    pub fn new(
        slug: impl Into<String>,
        metadata: PostMetadata,
        content: impl Into<String>,
    ) -> Result<Self> {
        let slug = slug.into();
        if slug.trim().is_empty()
            || slug.contains(['/', '\\'])
            || slug.chars().any(char::is_whitespace)
        {
            return Err(ModelError::InvalidSlug(slug));
        }
        Ok(Self {
            slug,
            metadata,
            content: content.into(),
        })
    }
}

/// Parse the leading integer of a string the way front matter authors expect:
/// surrounding whitespace is ignored, an optional sign is honoured and trailing
/// garbage is dropped (`"12th"` is `12`). Returns `None` when no digits lead.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(feature = "serde")]
mod order {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawOrder {
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawOrder>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawOrder::Int(value)) => Some(value),
            Some(RawOrder::Float(value)) if value.is_finite() => {
                Some(value.trunc() as i64)
            }
            Some(RawOrder::Float(_)) => None,
            Some(RawOrder::Text(text)) => super::parse_leading_int(&text),
            None => None,
        })
    }
}
