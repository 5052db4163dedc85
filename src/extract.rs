//! Projection of a full content document down to its translatable view.
//!
//! The translatable view contains only the human-readable strings that are
//! eligible for machine translation. Ids, URLs, image references, and icon
//! identifiers never appear in the view in either direction; nav and social
//! links project down to `{ name }` only. Every array keeps the length and
//! ordering of its source so the merge engine can correlate by position.

use serde::{Deserialize, Serialize};

use crate::content::{ContentDocument, ThemeButton, TranslationButton};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableNavLink {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableHero {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableAbout {
    pub title: String,
    pub introduction_title: String,
    pub introduction: String,
    pub soft_skills_title: String,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableSkills {
    pub title: String,
    pub frontend_title: String,
    pub frontend_skills: Vec<String>,
    pub backend_title: String,
    pub backend_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableProject {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableProjects {
    pub title: String,
    pub items: Vec<TranslatableProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableCollaboration {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableCollaborations {
    pub title: String,
    pub items: Vec<TranslatableCollaboration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableTechnology {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableTechnologies {
    pub title: String,
    pub items: Vec<TranslatableTechnology>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableSocialLink {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableFooter {
    pub copyright: String,
    pub social_links: Vec<TranslatableSocialLink>,
}

/// The subset of a content document eligible for machine translation.
///
/// The translation service receives this structure as JSON and must return
/// a structurally identical document (same keys, same array lengths) with
/// translated string values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatableContent {
    pub nav_links: Vec<TranslatableNavLink>,
    pub hero: TranslatableHero,
    pub about: TranslatableAbout,
    pub skills: TranslatableSkills,
    pub projects: TranslatableProjects,
    pub collaborations: TranslatableCollaborations,
    pub technologies: TranslatableTechnologies,
    pub footer: TranslatableFooter,
    pub translation_button: TranslationButton,
    pub theme_button: ThemeButton,
}

/// Project a full content document down to its translatable view.
///
/// Pure and total: no failure conditions, no side effects. Array lengths
/// and ordering are preserved.
pub fn extract_translatable(doc: &ContentDocument) -> TranslatableContent {
    TranslatableContent {
        nav_links: doc
            .nav_links
            .iter()
            .map(|link| TranslatableNavLink { name: link.name.clone() })
            .collect(),
        hero: TranslatableHero {
            name: doc.hero.name.clone(),
            description: doc.hero.description.clone(),
        },
        about: TranslatableAbout {
            title: doc.about.title.clone(),
            introduction_title: doc.about.introduction_title.clone(),
            introduction: doc.about.introduction.clone(),
            soft_skills_title: doc.about.soft_skills_title.clone(),
            soft_skills: doc.about.soft_skills.clone(),
        },
        skills: TranslatableSkills {
            title: doc.skills.title.clone(),
            frontend_title: doc.skills.frontend_title.clone(),
            frontend_skills: doc.skills.frontend_skills.clone(),
            backend_title: doc.skills.backend_title.clone(),
            backend_skills: doc.skills.backend_skills.clone(),
        },
        projects: TranslatableProjects {
            title: doc.projects.title.clone(),
            items: doc
                .projects
                .items
                .iter()
                .map(|item| TranslatableProject {
                    title: item.title.clone(),
                    description: item.description.clone(),
                })
                .collect(),
        },
        collaborations: TranslatableCollaborations {
            title: doc.collaborations.title.clone(),
            items: doc
                .collaborations
                .items
                .iter()
                .map(|item| TranslatableCollaboration {
                    title: item.title.clone(),
                    description: item.description.clone(),
                    team: item.team.clone(),
                })
                .collect(),
        },
        technologies: TranslatableTechnologies {
            title: doc.technologies.title.clone(),
            items: doc
                .technologies
                .items
                .iter()
                .map(|item| TranslatableTechnology { name: item.name.clone() })
                .collect(),
        },
        footer: TranslatableFooter {
            copyright: doc.footer.copyright.clone(),
            social_links: doc
                .footer
                .social_links
                .iter()
                .map(|link| TranslatableSocialLink { name: link.name.clone() })
                .collect(),
        },
        translation_button: doc.translation_button.clone(),
        theme_button: doc.theme_button.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::english_content;
    use serde_json::Value;

    /// Field names that must never appear anywhere in a translatable view.
    const FORBIDDEN_KEYS: &[&str] = &[
        "id",
        "href",
        "icon",
        "imageUrl",
        "liveUrl",
        "repoUrl",
        "profilePictureUrl",
    ];

    fn assert_no_forbidden_keys(value: &Value, path: &str) {
        match value {
            Value::Object(map) => {
                for (key, nested) in map {
                    assert!(
                        !FORBIDDEN_KEYS.contains(&key.as_str()),
                        "forbidden key '{}' found at {}",
                        key,
                        path
                    );
                    assert_no_forbidden_keys(nested, &format!("{}.{}", path, key));
                }
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    assert_no_forbidden_keys(item, &format!("{}[{}]", path, i));
                }
            }
            _ => {}
        }
    }

    #[test]
    fn test_extraction_never_contains_non_translatable_fields() {
        let view = extract_translatable(&english_content());
        let json = serde_json::to_value(&view).expect("serialize");
        assert_no_forbidden_keys(&json, "$");
    }

    #[test]
    fn test_extraction_preserves_array_lengths() {
        let doc = english_content();
        let view = extract_translatable(&doc);

        assert_eq!(view.nav_links.len(), doc.nav_links.len());
        assert_eq!(view.about.soft_skills.len(), doc.about.soft_skills.len());
        assert_eq!(view.skills.frontend_skills.len(), doc.skills.frontend_skills.len());
        assert_eq!(view.skills.backend_skills.len(), doc.skills.backend_skills.len());
        assert_eq!(view.projects.items.len(), doc.projects.items.len());
        assert_eq!(view.collaborations.items.len(), doc.collaborations.items.len());
        assert_eq!(view.technologies.items.len(), doc.technologies.items.len());
        assert_eq!(view.footer.social_links.len(), doc.footer.social_links.len());
    }

    #[test]
    fn test_extraction_preserves_ordering() {
        let doc = english_content();
        let view = extract_translatable(&doc);

        for (link, extracted) in doc.nav_links.iter().zip(&view.nav_links) {
            assert_eq!(link.name, extracted.name);
        }
        for (item, extracted) in doc.projects.items.iter().zip(&view.projects.items) {
            assert_eq!(item.title, extracted.title);
            assert_eq!(item.description, extracted.description);
        }
    }

    #[test]
    fn test_extraction_keeps_collaboration_teams() {
        let doc = english_content();
        let view = extract_translatable(&doc);

        assert_eq!(view.collaborations.items[0].team, doc.collaborations.items[0].team);
        assert!(view.collaborations.items[2].team.is_none());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let doc = english_content();
        assert_eq!(extract_translatable(&doc), extract_translatable(&doc));
    }

    #[test]
    fn test_extraction_keeps_button_labels() {
        let doc = english_content();
        let view = extract_translatable(&doc);
        assert_eq!(view.translation_button, doc.translation_button);
        assert_eq!(view.theme_button, doc.theme_button);
    }

    #[test]
    fn test_view_serializes_to_camel_case() {
        let view = extract_translatable(&english_content());
        let json = serde_json::to_value(&view).expect("serialize");
        assert!(json["about"].get("introductionTitle").is_some());
        assert!(json["skills"].get("frontendSkills").is_some());
        assert!(json["footer"].get("socialLinks").is_some());
    }
}
