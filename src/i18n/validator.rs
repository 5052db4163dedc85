//! Structural validation of translated views.
//!
//! The translation model is instructed to return a document structurally
//! identical to its input. This module checks how well it complied: hard
//! sanity failures become errors (the response is rejected), recoverable
//! drift becomes warnings (logged, then handled downstream — length
//! mismatches degrade safely in the merge, a missing `{year}` token is
//! restored by the repair pass).

use crate::content::YEAR_TOKEN;
use crate::extract::TranslatableContent;

/// Validation report containing errors and warnings about a translated view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural failures; the response must be rejected.
    pub errors: Vec<String>,

    /// Recoverable drift; logged and handled downstream.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated views.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate a translated view against the source view it was derived
    /// from.
    ///
    /// Errors: an empty hero name, or an empty nav-link list when the
    /// source had entries. Warnings: any paired array whose length drifted
    /// (the merge engine correlates by position and leaves unmatched
    /// indices untranslated), and a copyright string missing the `{year}`
    /// token (restored later by the repair pass).
    pub fn validate(
        source: &TranslatableContent,
        translated: &TranslatableContent,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.hero.name.trim().is_empty() {
            report.errors.push("Hero name is empty in the translated view".to_string());
        }
        if translated.nav_links.is_empty() && !source.nav_links.is_empty() {
            report.errors.push("Nav links are empty in the translated view".to_string());
        }

        Self::check_length(
            &mut report,
            "navLinks",
            source.nav_links.len(),
            translated.nav_links.len(),
        );
        Self::check_length(
            &mut report,
            "about.softSkills",
            source.about.soft_skills.len(),
            translated.about.soft_skills.len(),
        );
        Self::check_length(
            &mut report,
            "skills.frontendSkills",
            source.skills.frontend_skills.len(),
            translated.skills.frontend_skills.len(),
        );
        Self::check_length(
            &mut report,
            "skills.backendSkills",
            source.skills.backend_skills.len(),
            translated.skills.backend_skills.len(),
        );
        Self::check_length(
            &mut report,
            "projects.items",
            source.projects.items.len(),
            translated.projects.items.len(),
        );
        Self::check_length(
            &mut report,
            "collaborations.items",
            source.collaborations.items.len(),
            translated.collaborations.items.len(),
        );
        Self::check_length(
            &mut report,
            "technologies.items",
            source.technologies.items.len(),
            translated.technologies.items.len(),
        );
        Self::check_length(
            &mut report,
            "footer.socialLinks",
            source.footer.social_links.len(),
            translated.footer.social_links.len(),
        );

        if source.footer.copyright.contains(YEAR_TOKEN)
            && !translated.footer.copyright.contains(YEAR_TOKEN)
        {
            report.warnings.push(format!(
                "Copyright lost the '{}' placeholder: {:?}",
                YEAR_TOKEN, translated.footer.copyright
            ));
        }

        report
    }

    fn check_length(report: &mut ValidationReport, field: &str, source: usize, translated: usize) {
        if source != translated {
            report.warnings.push(format!(
                "Array length mismatch in {}: source has {}, translation has {}",
                field, source, translated
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::english_content;
    use crate::extract::extract_translatable;

    fn source_view() -> TranslatableContent {
        extract_translatable(&english_content())
    }

    #[test]
    fn test_validate_identical_views_is_clean() {
        let source = source_view();
        let report = TranslationValidator::validate(&source, &source.clone());
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_empty_hero_name_is_error() {
        let source = source_view();
        let mut translated = source.clone();
        translated.hero.name = "   ".into();

        let report = TranslationValidator::validate(&source, &translated);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Hero name"));
    }

    #[test]
    fn test_validate_empty_nav_links_is_error() {
        let source = source_view();
        let mut translated = source.clone();
        translated.nav_links.clear();

        let report = TranslationValidator::validate(&source, &translated);
        assert!(report.has_errors());
        assert!(report.errors.iter().any(|e| e.contains("Nav links")));
    }

    #[test]
    fn test_validate_length_drift_is_warning() {
        let source = source_view();
        let mut translated = source.clone();
        translated.projects.items.pop();

        let report = TranslationValidator::validate(&source, &translated);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("projects.items"));
    }

    #[test]
    fn test_validate_missing_year_token_is_warning() {
        let source = source_view();
        let mut translated = source.clone();
        translated.footer.copyright = "Todos los derechos reservados © 2024".into();

        let report = TranslationValidator::validate(&source, &translated);
        assert!(!report.has_errors());
        assert!(report.warnings.iter().any(|w| w.contains("{year}")));
    }

    #[test]
    fn test_validate_collects_multiple_warnings() {
        let source = source_view();
        let mut translated = source.clone();
        translated.about.soft_skills.pop();
        translated.technologies.items.pop();

        let report = TranslationValidator::validate(&source, &translated);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_report_helpers() {
        let mut report = ValidationReport::new();
        assert!(report.is_clean());

        report.warnings.push("w".into());
        assert!(report.has_warnings());
        assert!(!report.has_errors());
        assert!(!report.is_clean());

        report.errors.push("e".into());
        assert!(report.has_errors());
    }
}
