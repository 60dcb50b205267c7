use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const THEMES_JSON: &str = include_str!("./themes.json");
const HIGHLIGHTS_JSON: &str = include_str!("./highlights.json");
const SKILLS_JSON: &str = include_str!("./skills.json");
const PROFILE_JSON: &str = include_str!("./profile.json");

/// The downloadable resume document, embedded verbatim.
pub const RESUME_MARKDOWN: &str = include_str!("./resume.md");

static CATALOG: Lazy<Result<Catalog, ContentError>> = Lazy::new(load_catalog);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Malformed {document} document: {reason}")]
    Malformed {
        document: &'static str,
        reason: String,
    },
    #[error("Theme catalog is empty")]
    NoThemes,
    #[error("Duplicate theme id '{0}'")]
    DuplicateThemeId(String),
    #[error("Highlight catalog is empty")]
    NoHighlights,
    #[error("Highlight '{0}' lists no outcomes")]
    NoOutcomes(String),
    #[error("Skill group '{0}' lists no items")]
    EmptySkillGroup(String),
    #[error("Profile references resume file '{0}' but the embedded document is empty")]
    MissingResume(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub focus: String,
    pub description: String,
    pub outcomes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuickTile {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub role: String,
    pub org: String,
    pub period: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub email: String,
    pub location: String,
    pub availability: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub eyebrow: String,
    pub name: String,
    pub headline: String,
    pub lede: String,
    pub stats: Vec<Stat>,
    pub tiles: Vec<QuickTile>,
    pub approach: Vec<String>,
    pub focus_areas: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub education: Education,
    pub contact: Contact,
    pub resume_file: String,
    pub footer_note: String,
}

impl Profile {
    /// Footer byline with the current year.
    pub fn footer_line(&self) -> String {
        format!("© {} {} · {}", Local::now().year(), self.name, self.footer_note)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: Profile,
    pub themes: Vec<Theme>,
    pub highlights: Vec<Highlight>,
    pub skills: Vec<SkillGroup>,
}

/// Parsed, validated content pack. The same instance backs every surface.
pub fn catalog() -> Result<&'static Catalog, ContentError> {
    CATALOG.as_ref().map_err(Clone::clone)
}

fn load_catalog() -> Result<Catalog, ContentError> {
    let catalog = Catalog {
        profile: parse("profile", PROFILE_JSON)?,
        themes: parse("themes", THEMES_JSON)?,
        highlights: parse("highlights", HIGHLIGHTS_JSON)?,
        skills: parse("skills", SKILLS_JSON)?,
    };
    validate(&catalog)?;
    Ok(catalog)
}

fn parse<T: serde::de::DeserializeOwned>(
    document: &'static str,
    raw: &str,
) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|err| ContentError::Malformed {
        document,
        reason: err.to_string(),
    })
}

fn validate(catalog: &Catalog) -> Result<(), ContentError> {
    if catalog.themes.is_empty() {
        return Err(ContentError::NoThemes);
    }
    for (index, theme) in catalog.themes.iter().enumerate() {
        if catalog.themes[..index].iter().any(|seen| seen.id == theme.id) {
            return Err(ContentError::DuplicateThemeId(theme.id.clone()));
        }
    }

    if catalog.highlights.is_empty() {
        return Err(ContentError::NoHighlights);
    }
    for highlight in &catalog.highlights {
        if highlight.outcomes.is_empty() {
            return Err(ContentError::NoOutcomes(highlight.title.clone()));
        }
    }

    for group in &catalog.skills {
        if group.items.is_empty() {
            return Err(ContentError::EmptySkillGroup(group.title.clone()));
        }
    }

    // The export path writes RESUME_MARKDOWN under this name; a blank name or
    // document would produce a useless download.
    if catalog.profile.resume_file.trim().is_empty() || RESUME_MARKDOWN.trim().is_empty() {
        return Err(ContentError::MissingResume(
            catalog.profile.resume_file.clone(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_pack_parses_and_validates() {
        let catalog = catalog().expect("embedded content pack is valid");
        assert_eq!(catalog.themes.len(), 4);
        assert_eq!(catalog.highlights.len(), 3);
        assert_eq!(catalog.skills.len(), 4);
        assert!(!catalog.profile.resume_file.is_empty());
    }

    #[test]
    fn theme_catalog_boots_on_aurora_and_includes_noir() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.themes[0].id, "aurora");
        assert!(catalog.themes.iter().any(|theme| theme.id == "noir"));
    }

    #[test]
    fn every_highlight_carries_outcomes() {
        for highlight in &catalog().unwrap().highlights {
            assert_eq!(highlight.outcomes.len(), 3);
            assert!(!highlight.focus.is_empty());
        }
    }

    #[test]
    fn validation_rejects_duplicate_theme_ids() {
        let mut catalog = catalog().unwrap().clone();
        let duplicate = catalog.themes[0].clone();
        catalog.themes.push(duplicate);
        assert_eq!(
            validate(&catalog),
            Err(ContentError::DuplicateThemeId("aurora".into()))
        );
    }

    #[test]
    fn validation_rejects_empty_outcome_lists() {
        let mut catalog = catalog().unwrap().clone();
        catalog.highlights[0].outcomes.clear();
        assert!(matches!(
            validate(&catalog),
            Err(ContentError::NoOutcomes(_))
        ));
    }

    #[test]
    fn validation_rejects_empty_skill_groups() {
        let mut catalog = catalog().unwrap().clone();
        catalog.skills[0].items.clear();
        assert!(matches!(
            validate(&catalog),
            Err(ContentError::EmptySkillGroup(_))
        ));
    }

    #[test]
    fn validation_rejects_a_blank_resume_reference() {
        let mut catalog = catalog().unwrap().clone();
        catalog.profile.resume_file = "  ".into();
        assert!(matches!(
            validate(&catalog),
            Err(ContentError::MissingResume(_))
        ));
    }

    #[test]
    fn footer_line_carries_the_current_year() {
        let catalog = catalog().unwrap();
        let year = Local::now().year().to_string();
        assert!(catalog.profile.footer_line().contains(&year));
        assert!(catalog.profile.footer_line().starts_with('©'));
    }

    #[test]
    fn resume_document_mentions_the_profile_owner() {
        let catalog = catalog().unwrap();
        assert!(RESUME_MARKDOWN.contains(&catalog.profile.name));
    }
}
