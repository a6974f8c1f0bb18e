//! Copy, imagery and figures of the landing page, embedded at build time.

use serde::Deserialize;

use crate::error::ContentError;

const EMBEDDED: &str = include_str!("../assets/content.json");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: String,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub partners: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub comparison: Comparison,
    pub process: Vec<ProcessStep>,
    pub gallery: Vec<Project>,
    pub positioning: Positioning,
    pub form: FormOptions,
    pub nav: Vec<Link>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub lines: Vec<String>,
    pub subtitle: String,
    pub video: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: u32,
    pub label: String,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Comparison {
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub src: String,
    pub title: String,
    pub location: String,
    /// Extra grid classes, e.g. "wide tall".
    #[serde(default)]
    pub span: String,
    /// Parallax strength relative to the scroll.
    #[serde(default = "unit_speed")]
    pub speed: f64,
}

fn unit_speed() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Positioning {
    pub quote: String,
    pub lead: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    pub project_types: Vec<Choice>,
    pub budgets: Vec<Choice>,
    pub delays: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub street: String,
    pub city: String,
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub area: String,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(EMBEDDED)
    }

    /// Embedded content, or an empty page if it fails to parse.
    pub fn load() -> Self {
        Self::embedded().unwrap_or_else(|err| {
            log::error!("Falling back to empty content: {}", err);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded content");
        assert_eq!(content.stats.iter().map(|s| s.value).collect::<Vec<_>>(), vec![120, 15, 98]);
        assert_eq!(content.process.len(), 4);
        assert_eq!(content.gallery.len(), 7);
        assert!(content.form.project_types.iter().any(|c| c.value == "creation"));
        assert_eq!(content.hero.primary_cta.href, "#contact");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let content = SiteContent::parse(r#"{ "gallery": [{ "src": "a.jpg", "title": "A", "location": "B" }] }"#)
            .expect("partial content");
        assert_eq!(content.gallery[0].speed, 1.0);
        assert!(content.stats.is_empty());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(matches!(SiteContent::parse("{ \"stats\": 3 }"), Err(ContentError::Parse(_))));
    }
}
