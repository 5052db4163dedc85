//! The full bilingual content model driving every page section.
//!
//! A `ContentDocument` is pure data: nested records of strings, string
//! arrays, and non-textual fields (numeric ids, URLs, icon identifiers).
//! The English document seeded at startup is the canonical baseline; the
//! Spanish document is derived from it by the translation pipeline and
//! cached by the language session.
//!
//! Icons are opaque identifiers (`Icon`), resolved to renderable assets by
//! the rendering layer. They never carry behavior and are never translated.

use serde::{Deserialize, Serialize};

/// Placeholder token in `footer.copyright`, substituted with the current
/// year at render time.
pub const YEAR_TOKEN: &str = "{year}";

/// Opaque icon identifier resolved by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    React,
    TypeScript,
    NodeJs,
    TailwindCss,
    PostgreSql,
    Docker,
    NextJs,
    Git,
    GitHub,
    LinkedIn,
    Twitter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub description: String,
    pub profile_picture_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub introduction_title: String,
    pub introduction: String,
    pub soft_skills_title: String,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub title: String,
    pub frontend_title: String,
    pub frontend_skills: Vec<String>,
    pub backend_title: String,
    pub backend_skills: Vec<String>,
}

/// A personal project card. `id` is unique within its section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projects {
    pub title: String,
    pub items: Vec<Project>,
}

/// A collaboration card. `team` lists collaborator names (proper nouns,
/// untranslated by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborations {
    pub title: String,
    pub items: Vec<Collaboration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub name: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technologies {
    pub title: String,
    pub items: Vec<Technology>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: Icon,
}

/// Footer content. `copyright` contains exactly one `{year}` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub copyright: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationButton {
    pub to_spanish: String,
    pub to_english: String,
    pub loading: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeButton {
    pub light: String,
    pub dark: String,
}

/// The full content document for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub nav_links: Vec<NavLink>,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub collaborations: Collaborations,
    pub technologies: Technologies,
    pub footer: Footer,
    pub translation_button: TranslationButton,
    pub theme_button: ThemeButton,
}

impl ContentDocument {
    /// Render the footer copyright with `{year}` substituted.
    pub fn rendered_copyright(&self, year: i32) -> String {
        self.footer.copyright.replace(YEAR_TOKEN, &year.to_string())
    }
}

/// The canonical English content document.
pub fn english_content() -> ContentDocument {
    ContentDocument {
        nav_links: vec![
            NavLink { name: "About".into(), href: "#about".into() },
            NavLink { name: "Skills".into(), href: "#skills".into() },
            NavLink { name: "Projects".into(), href: "#projects".into() },
            NavLink { name: "Collaborations".into(), href: "#collaborations".into() },
            NavLink { name: "Technologies".into(), href: "#technologies".into() },
        ],
        hero: Hero {
            name: "Your Name Here".into(),
            description: "Passionate Full-Stack Developer creating innovative web solutions."
                .into(),
            profile_picture_url: "https://picsum.photos/200/200".into(),
        },
        about: About {
            title: "About Me".into(),
            introduction_title: "Introduction / Cover Letter Snippet".into(),
            introduction: "Driven by a passion for crafting seamless user experiences and \
                robust backend systems, I thrive in collaborative environments where I can \
                contribute to impactful projects. I am eager to leverage my skills in modern \
                web technologies to build efficient and scalable applications."
                .into(),
            soft_skills_title: "Soft Skills".into(),
            soft_skills: vec![
                "Effective Communication".into(),
                "Problem Solving".into(),
                "Team Collaboration".into(),
                "Adaptability".into(),
                "Time Management".into(),
                "Creativity".into(),
            ],
        },
        skills: Skills {
            title: "Technical Skills".into(),
            frontend_title: "Frontend".into(),
            frontend_skills: vec![
                "JavaScript (ES6+)".into(),
                "React".into(),
                "Next.js".into(),
                "HTML5".into(),
                "CSS3/Sass".into(),
                "Tailwind CSS".into(),
            ],
            backend_title: "Backend".into(),
            backend_skills: vec![
                "Node.js".into(),
                "Express".into(),
                "SQL (PostgreSQL)".into(),
                "NoSQL (MongoDB)".into(),
                "Docker".into(),
                "Git/GitHub".into(),
            ],
        },
        projects: Projects {
            title: "Personal Projects".into(),
            items: vec![
                Project {
                    id: 1,
                    title: "Project Alpha".into(),
                    description: "A description of Project Alpha, highlighting its key \
                        features and the technologies used."
                        .into(),
                    image_url: "https://picsum.photos/400/250?random=1".into(),
                    live_url: Some("#".into()),
                    repo_url: Some("#".into()),
                },
                Project {
                    id: 2,
                    title: "Project Beta".into(),
                    description: "Details about Project Beta, focusing on the problem it \
                        solves and the development process."
                        .into(),
                    image_url: "https://picsum.photos/400/250?random=2".into(),
                    live_url: Some("#".into()),
                    repo_url: Some("#".into()),
                },
                Project {
                    id: 3,
                    title: "Project Gamma".into(),
                    description: "An overview of Project Gamma, explaining its purpose and \
                        technical implementation."
                        .into(),
                    image_url: "https://picsum.photos/400/250?random=3".into(),
                    live_url: Some("#".into()),
                    repo_url: None,
                },
            ],
        },
        collaborations: Collaborations {
            title: "Collaborations".into(),
            items: vec![
                Collaboration {
                    id: 1,
                    title: "Collaborative Initiative X".into(),
                    description: "A joint effort on Initiative X, showcasing teamwork and \
                        shared goals."
                        .into(),
                    image_url: "https://picsum.photos/400/250?random=4".into(),
                    live_url: Some("#".into()),
                    repo_url: None,
                    team: Some(vec!["Collaborator 1".into(), "Collaborator 2".into()]),
                },
                Collaboration {
                    id: 2,
                    title: "Team Project Y".into(),
                    description: "Developed Project Y with a team, focusing on integration \
                        and communication."
                        .into(),
                    image_url: "https://picsum.photos/400/250?random=5".into(),
                    live_url: None,
                    repo_url: Some("#".into()),
                    team: Some(vec!["Another Dev".into(), "Designer".into()]),
                },
                Collaboration {
                    id: 3,
                    title: "Open Source Contribution Z".into(),
                    description: "Contributed to the open-source project Z, improving \
                        specific features."
                        .into(),
                    image_url: "https://picsum.photos/400/250?random=6".into(),
                    live_url: None,
                    repo_url: Some("#".into()),
                    team: None,
                },
            ],
        },
        technologies: Technologies {
            title: "Technologies I Use".into(),
            items: vec![
                Technology { name: "React".into(), icon: Icon::React },
                Technology { name: "TypeScript".into(), icon: Icon::TypeScript },
                Technology { name: "Node.js".into(), icon: Icon::NodeJs },
                Technology { name: "Tailwind CSS".into(), icon: Icon::TailwindCss },
                Technology { name: "PostgreSQL".into(), icon: Icon::PostgreSql },
                Technology { name: "Docker".into(), icon: Icon::Docker },
                Technology { name: "Next.js".into(), icon: Icon::NextJs },
                Technology { name: "Git".into(), icon: Icon::Git },
            ],
        },
        footer: Footer {
            copyright: "© {year} PersonaFlow. All rights reserved.".into(),
            social_links: vec![
                SocialLink { name: "GitHub".into(), href: "#".into(), icon: Icon::GitHub },
                SocialLink { name: "LinkedIn".into(), href: "#".into(), icon: Icon::LinkedIn },
                SocialLink { name: "Twitter".into(), href: "#".into(), icon: Icon::Twitter },
            ],
        },
        translation_button: TranslationButton {
            to_spanish: "Translate to Spanish".into(),
            to_english: "View in English".into(),
            loading: "Translating...".into(),
        },
        theme_button: ThemeButton {
            light: "Light".into(),
            dark: "Dark".into(),
        },
    }
}
