//! Language session: process-local state machine behind the language
//! toggle.
//!
//! The session owns the immutable source document and derives the target
//! document on demand by running the pipeline (extract, translate, repair,
//! merge). The merged result is cached per process, so switching back and
//! forth after the first successful translation never issues another
//! request. On failure the baseline document stays active; a partially
//! translated document is never displayed.
//!
//! The session is dependency-injected and owned by the composition root.
//! `toggle` is its sole mutator. The `translating` flag guards against a
//! re-entrant toggle while a request is in flight (cooperative concurrency;
//! there is no parallelism to lock against).

use tracing::{debug, info, warn};

use crate::content::{ContentDocument, YEAR_TOKEN};
use crate::extract::extract_translatable;
use crate::i18n::{Language, TranslationMetrics};
use crate::merge::merge_translated;
use crate::repair::repair_copyright_placeholder;
use crate::retry::{with_retry_if, RetryConfig};
use crate::translator::{TranslationClient, TranslationError};

/// Observable session state, derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Showing the baseline language.
    Source,
    /// Showing the target language from cache.
    TargetCached,
    /// Target requested, pipeline in flight.
    Translating,
    /// Last toggle failed; the baseline document is still displayed.
    Error,
}

pub struct LanguageSession {
    client: TranslationClient,
    retry_config: RetryConfig,

    source_language: Language,
    target_language: Language,

    source_document: ContentDocument,
    active_language: Language,
    active_document: ContentDocument,
    cached_target_document: Option<ContentDocument>,

    translating: bool,
    last_error: Option<String>,
}

impl LanguageSession {
    /// Create a session showing `source_document` in the canonical
    /// language, with Spanish as the translation target.
    pub fn new(client: TranslationClient, source_document: ContentDocument) -> Self {
        Self {
            client,
            retry_config: RetryConfig::api_call(),
            source_language: Language::canonical(),
            target_language: Language::Es,
            active_language: Language::canonical(),
            active_document: source_document.clone(),
            source_document,
            cached_target_document: None,
            translating: false,
            last_error: None,
        }
    }

    /// Override the retry policy applied around the translation request.
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn active_language(&self) -> Language {
        self.active_language
    }

    /// The document the rendering layer should display right now.
    pub fn active_document(&self) -> &ContentDocument {
        &self.active_document
    }

    pub fn is_translating(&self) -> bool {
        self.translating
    }

    pub fn status(&self) -> SessionStatus {
        if self.translating {
            SessionStatus::Translating
        } else if self.last_error.is_some() {
            SessionStatus::Error
        } else if self.active_language == self.target_language {
            SessionStatus::TargetCached
        } else {
            SessionStatus::Source
        }
    }

    /// Surface the last pipeline error once, clearing it so it does not
    /// reappear on unrelated re-renders.
    pub fn take_last_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Switch between the source and target language.
    ///
    /// From the source (or error) state, a cached target document is
    /// activated instantly; otherwise the pipeline runs. From the target
    /// state, the baseline document is restored and the cache retained.
    /// While a translation is in flight the call is a no-op.
    pub async fn toggle(&mut self) {
        if self.translating {
            debug!("Toggle ignored: translation already in flight");
            return;
        }

        if self.active_language == self.target_language {
            self.active_language = self.source_language;
            self.active_document = self.source_document.clone();
            return;
        }

        let metrics = TranslationMetrics::global();
        if let Some(cached) = &self.cached_target_document {
            debug!("Serving {} from cache", self.target_language.name());
            metrics.record_cache_hit();
            self.active_document = cached.clone();
            self.active_language = self.target_language;
            self.last_error = None;
            return;
        }

        metrics.record_cache_miss();
        self.translating = true;
        self.last_error = None;

        info!(
            "Translating content from {} to {}",
            self.source_language.name(),
            self.target_language.name()
        );
        let result = self.run_pipeline().await;
        self.translating = false;

        match result {
            Ok(document) => {
                self.cached_target_document = Some(document.clone());
                self.active_document = document;
                self.active_language = self.target_language;
                info!("Translation to {} complete", self.target_language.name());
            }
            Err(e) => {
                // The baseline document stays active; never display a
                // partially translated result.
                warn!("Translation pipeline failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Extract, translate (retrying transient failures only), repair,
    /// merge.
    async fn run_pipeline(&self) -> Result<ContentDocument, TranslationError> {
        let view = extract_translatable(&self.source_document);

        let translated = with_retry_if(
            &self.retry_config,
            "Content translation",
            || async {
                self.client
                    .translate(&view, self.source_language, self.target_language)
                    .await
            },
            |e| matches!(e, TranslationError::Unavailable(_)),
        )
        .await?;

        if !translated.footer.copyright.contains(YEAR_TOKEN) {
            TranslationMetrics::global().record_placeholder_repair();
        }
        let repaired =
            repair_copyright_placeholder(translated, &self.source_document.footer.copyright);

        Ok(merge_translated(&self.source_document, &repaired))
    }
}
