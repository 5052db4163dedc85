//! Bilingual portfolio content with an AI-backed translation pipeline.
//!
//! The crate owns the portfolio's content model and the machinery that
//! derives its Spanish rendition from the canonical English document:
//!
//! 1. `extract` projects the document down to its translatable view
//! 2. `translator` sends the view to the text-completion service and
//!    validates the response
//! 3. `repair` fixes known model quirks (the `{year}` placeholder)
//! 4. `merge` patches the translated strings back into a copy of the
//!    original document
//! 5. `session` caches the merged result and drives the language toggle
//!
//! Rendering, routing, and styling are out of scope; the rendering layer
//! reads `session::LanguageSession::active_document` and calls `toggle`.

pub mod config;
pub mod content;
pub mod extract;
pub mod i18n;
pub mod merge;
pub mod repair;
pub mod retry;
pub mod session;
pub mod translator;
