//! Merge engine: reconstitute a full content document from the original
//! document plus a translated view.
//!
//! The merge is a structural copy-and-patch: every field present in the
//! translated view overwrites the corresponding field in a copy of the
//! original; every field absent from the view (ids, URLs, image and icon
//! references) is carried over unchanged. The original is never mutated so
//! it remains usable as the immutable baseline for the other language.
//!
//! Arrays correlate by positional index. If the translated view violates
//! the length invariant, indices beyond the shorter array keep the original
//! untranslated values; this is a silent, safe degradation rather than an
//! error (a known risk, not hidden).

use crate::content::ContentDocument;
use crate::extract::TranslatableContent;

/// Merge a translated view back into a copy of the original document.
pub fn merge_translated(
    original: &ContentDocument,
    translated: &TranslatableContent,
) -> ContentDocument {
    let mut merged = original.clone();

    for (link, translated_link) in merged.nav_links.iter_mut().zip(&translated.nav_links) {
        link.name = translated_link.name.clone();
    }

    merged.hero.name = translated.hero.name.clone();
    merged.hero.description = translated.hero.description.clone();

    merged.about.title = translated.about.title.clone();
    merged.about.introduction_title = translated.about.introduction_title.clone();
    merged.about.introduction = translated.about.introduction.clone();
    merged.about.soft_skills_title = translated.about.soft_skills_title.clone();
    merge_string_list(&mut merged.about.soft_skills, &translated.about.soft_skills);

    merged.skills.title = translated.skills.title.clone();
    merged.skills.frontend_title = translated.skills.frontend_title.clone();
    merge_string_list(&mut merged.skills.frontend_skills, &translated.skills.frontend_skills);
    merged.skills.backend_title = translated.skills.backend_title.clone();
    merge_string_list(&mut merged.skills.backend_skills, &translated.skills.backend_skills);

    merged.projects.title = translated.projects.title.clone();
    for (item, translated_item) in merged.projects.items.iter_mut().zip(&translated.projects.items)
    {
        item.title = translated_item.title.clone();
        item.description = translated_item.description.clone();
    }

    merged.collaborations.title = translated.collaborations.title.clone();
    for (item, translated_item) in merged
        .collaborations
        .items
        .iter_mut()
        .zip(&translated.collaborations.items)
    {
        item.title = translated_item.title.clone();
        item.description = translated_item.description.clone();
        item.team = translated_item.team.clone();
    }

    merged.technologies.title = translated.technologies.title.clone();
    for (item, translated_item) in merged
        .technologies
        .items
        .iter_mut()
        .zip(&translated.technologies.items)
    {
        item.name = translated_item.name.clone();
    }

    merged.footer.copyright = translated.footer.copyright.clone();
    for (link, translated_link) in merged
        .footer
        .social_links
        .iter_mut()
        .zip(&translated.footer.social_links)
    {
        link.name = translated_link.name.clone();
    }

    merged.translation_button = translated.translation_button.clone();
    merged.theme_button = translated.theme_button.clone();

    merged
}

/// Overwrite positionally; extra original entries are left untranslated and
/// extra translated entries are ignored.
fn merge_string_list(target: &mut [String], translated: &[String]) {
    for (entry, translated_entry) in target.iter_mut().zip(translated) {
        *entry = translated_entry.clone();
    }
}
