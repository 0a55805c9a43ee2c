//! Education articles compiled into the binary
//!
//! Each article is a markdown file per locale under `content/education/`.
//! Locales without a translation fall back to English.

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    Cardiology,
    Wellness,
    Chronic,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Cardiology,
        Category::Wellness,
        Category::Chronic,
    ];

    /// Stable id used in tab ids and message keys (`education.categories.<id>`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Cardiology => "cardiology",
            Category::Wellness => "wellness",
            Category::Chronic => "chronic",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == id)
    }
}

struct ArticleSource {
    slug: &'static str,
    category: Category,
    reading_minutes: u8,
    en: &'static str,
    fr: Option<&'static str>,
    ar: Option<&'static str>,
}

const ARTICLES: &[ArticleSource] = &[
    ArticleSource {
        slug: "understanding-symptoms",
        category: Category::General,
        reading_minutes: 4,
        en: include_str!("../../content/education/en/understanding-symptoms.md"),
        fr: Some(include_str!("../../content/education/fr/understanding-symptoms.md")),
        ar: Some(include_str!("../../content/education/ar/understanding-symptoms.md")),
    },
    ArticleSource {
        slug: "heart-health",
        category: Category::Cardiology,
        reading_minutes: 5,
        en: include_str!("../../content/education/en/heart-health.md"),
        fr: Some(include_str!("../../content/education/fr/heart-health.md")),
        ar: None,
    },
    ArticleSource {
        slug: "sleep-hygiene",
        category: Category::Wellness,
        reading_minutes: 3,
        en: include_str!("../../content/education/en/sleep-hygiene.md"),
        fr: Some(include_str!("../../content/education/fr/sleep-hygiene.md")),
        ar: None,
    },
    ArticleSource {
        slug: "living-with-diabetes",
        category: Category::Chronic,
        reading_minutes: 6,
        en: include_str!("../../content/education/en/living-with-diabetes.md"),
        fr: None,
        ar: None,
    },
];

/// Resolved article for one locale
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub slug: &'static str,
    pub category: Category,
    pub reading_minutes: u8,
    pub title: String,
    pub excerpt: String,
    pub body: &'static str,
    /// Locale the body is actually written in (differs on fallback)
    pub locale: Locale,
}

impl ArticleSource {
    fn resolve(&self, locale: Locale) -> Article {
        let (body, actual) = match locale {
            Locale::Fr => self.fr.map(|b| (b, Locale::Fr)),
            Locale::Ar => self.ar.map(|b| (b, Locale::Ar)),
            Locale::En => None,
        }
        .unwrap_or((self.en, Locale::En));

        Article {
            slug: self.slug,
            category: self.category,
            reading_minutes: self.reading_minutes,
            title: extract_title(body).unwrap_or(self.slug).to_string(),
            excerpt: extract_excerpt(body),
            body,
            locale: actual,
        }
    }
}

/// All articles, optionally filtered by category, in registry order
pub fn list_articles(locale: Locale, category: Option<Category>) -> Vec<Article> {
    ARTICLES
        .iter()
        .filter(|a| category.is_none_or(|c| a.category == c))
        .map(|a| a.resolve(locale))
        .collect()
}

pub fn find_article(locale: Locale, slug: &str) -> Option<Article> {
    ARTICLES.iter().find(|a| a.slug == slug).map(|a| a.resolve(locale))
}

fn extract_title(body: &str) -> Option<&str> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}

/// First non-heading paragraph line
fn extract_excerpt(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or_default()
        .to_string()
}
