//! Integration tests for the translation pipeline.
//!
//! These tests drive the full extract -> translate -> repair -> merge
//! sequence through the language session against a mocked chat-completions
//! endpoint, verifying the cross-module behavior the individual unit tests
//! cannot see.

use std::time::Duration;

use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use portfolio_translator::config::Config;
use portfolio_translator::content::{english_content, ContentDocument, YEAR_TOKEN};
use portfolio_translator::extract::{extract_translatable, TranslatableContent};
use portfolio_translator::i18n::Language;
use portfolio_translator::merge::merge_translated;
use portfolio_translator::repair::repair_copyright_placeholder;
use portfolio_translator::retry::RetryConfig;
use portfolio_translator::session::{LanguageSession, SessionStatus};
use portfolio_translator::translator::TranslationClient;

// ==================== Test Helpers ====================

fn create_test_config(api_url: &str) -> Config {
    Config {
        openai_api_key: "test-openai-key".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        openai_api_url: api_url.to_string(),
        max_completion_tokens: 4000,
        request_timeout_secs: 30,
    }
}

fn create_session(mock_server: &MockServer) -> LanguageSession {
    let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
    let client = TranslationClient::new(config).expect("Should build client");
    LanguageSession::new(client, english_content())
        .with_retry_config(RetryConfig::new(1, Duration::from_millis(10)))
}

/// A complete Spanish view with the structure of the English source.
fn spanish_view() -> TranslatableContent {
    let mut view = extract_translatable(&english_content());
    view.nav_links[0].name = "Sobre mí".into();
    view.nav_links[1].name = "Habilidades".into();
    view.nav_links[2].name = "Proyectos".into();
    view.nav_links[3].name = "Colaboraciones".into();
    view.nav_links[4].name = "Tecnologías".into();
    view.hero.name = "Tu Nombre Aquí".into();
    view.hero.description =
        "Desarrollador Full-Stack apasionado creando soluciones web innovadoras.".into();
    view.about.title = "Sobre Mí".into();
    view.about.introduction_title = "Introducción / Fragmento de Carta de Presentación".into();
    view.about.soft_skills_title = "Habilidades Blandas".into();
    view.skills.title = "Habilidades Técnicas".into();
    view.projects.title = "Proyectos Personales".into();
    view.projects.items[0].title = "Proyecto Alfa".into();
    view.projects.items[0].description = "Una descripción del Proyecto Alfa.".into();
    view.collaborations.title = "Colaboraciones".into();
    view.technologies.title = "Tecnologías que Uso".into();
    view.footer.copyright = "© {year} PersonaFlow. Todos los derechos reservados.".into();
    view.translation_button.to_spanish = "Traducir al español".into();
    view.translation_button.to_english = "Ver en inglés".into();
    view.translation_button.loading = "Traduciendo...".into();
    view.theme_button.light = "Claro".into();
    view.theme_button.dark = "Oscuro".into();
    view
}

fn chat_response_with(view: &TranslatableContent) -> serde_json::Value {
    let content = serde_json::to_string(view).expect("serialize view");
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
}

// ==================== Full Pipeline Tests ====================

#[tokio::test]
async fn test_full_pipeline_produces_merged_spanish_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-openai-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response_with(&spanish_view())))
        .mount(&mock_server)
        .await;

    let mut session = create_session(&mock_server);
    session.toggle().await;

    assert_eq!(session.status(), SessionStatus::TargetCached);
    assert_eq!(session.active_language(), Language::Es);

    let document = session.active_document();
    let baseline = english_content();

    // Translated strings flowed through
    assert_eq!(document.nav_links[0].name, "Sobre mí");
    assert_eq!(document.hero.name, "Tu Nombre Aquí");
    assert_eq!(document.projects.items[0].title, "Proyecto Alfa");
    assert_eq!(document.theme_button.light, "Claro");

    // Non-translatable fields are untouched
    assert_eq!(document.nav_links[0].href, baseline.nav_links[0].href);
    assert_eq!(document.hero.profile_picture_url, baseline.hero.profile_picture_url);
    for (original, merged) in baseline.projects.items.iter().zip(&document.projects.items) {
        assert_eq!(original.id, merged.id);
        assert_eq!(original.image_url, merged.image_url);
        assert_eq!(original.live_url, merged.live_url);
        assert_eq!(original.repo_url, merged.repo_url);
    }
    for (original, merged) in baseline
        .technologies
        .items
        .iter()
        .zip(&document.technologies.items)
    {
        assert_eq!(original.icon, merged.icon);
    }
}

#[tokio::test]
async fn test_request_carries_instructions_and_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        // Instruction set and the extracted document both travel in the body
        .and(body_string_contains("professional translator"))
        .and(body_string_contains("{year}"))
        .and(body_string_contains("Project Alpha"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response_with(&spanish_view())))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = create_session(&mock_server);
    session.toggle().await;
    assert_eq!(session.status(), SessionStatus::TargetCached);
}

#[tokio::test]
async fn test_toggle_twice_issues_single_request() {
    // Source -> target -> source -> target: the cache serves the second
    // activation, so exactly one external request is issued.
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response_with(&spanish_view())))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = create_session(&mock_server);

    session.toggle().await;
    assert_eq!(session.active_language(), Language::Es);

    session.toggle().await;
    assert_eq!(session.active_language(), Language::En);
    assert_eq!(session.active_document(), &english_content());

    session.toggle().await;
    assert_eq!(session.active_language(), Language::Es);
    assert_eq!(session.active_document().hero.name, "Tu Nombre Aquí");
}

#[tokio::test]
async fn test_failed_request_leaves_baseline_displayed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let mut session = create_session(&mock_server);
    session.toggle().await;

    assert_eq!(session.active_language(), Language::En);
    assert_eq!(session.active_document(), &english_content());

    let error = session.take_last_error().expect("Should record an error");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn test_malformed_payload_never_partially_applied() {
    // The model answers 200 with prose instead of the document; nothing of
    // it may leak into the displayed content.
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Claro, aquí tienes..."}}]
        })))
        .mount(&mock_server)
        .await;

    let mut session = create_session(&mock_server);
    session.toggle().await;

    assert_eq!(session.status(), SessionStatus::Error);
    assert_eq!(session.active_document(), &english_content());
    assert!(session
        .take_last_error()
        .expect("Should record an error")
        .contains("structure"));
}

#[tokio::test]
async fn test_pipeline_restores_year_placeholder_end_to_end() {
    // The model translates the placeholder into a literal year; the merged
    // document must carry the token again.
    let mock_server = MockServer::start().await;
    let mut view = spanish_view();
    view.footer.copyright = "Todos los derechos reservados © 2024".into();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response_with(&view)))
        .mount(&mock_server)
        .await;

    let mut session = create_session(&mock_server);
    session.toggle().await;

    assert_eq!(
        session.active_document().footer.copyright,
        "Todos los derechos reservados © {year}"
    );
    assert!(session
        .active_document()
        .rendered_copyright(2026)
        .contains("2026"));
}

#[tokio::test]
async fn test_session_retries_transient_failures_within_one_toggle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response_with(&spanish_view())))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
    let client = TranslationClient::new(config).expect("Should build client");
    let mut session = LanguageSession::new(client, english_content())
        .with_retry_config(RetryConfig::new(3, Duration::from_millis(10)));

    session.toggle().await;
    assert_eq!(session.status(), SessionStatus::TargetCached);
    assert_eq!(session.active_document().hero.name, "Tu Nombre Aquí");
}

// ==================== Pipeline Function Composition ====================

#[test]
fn test_extract_repair_merge_identity_round_trip() {
    let baseline = english_content();
    let view = extract_translatable(&baseline);
    let repaired = repair_copyright_placeholder(view, &baseline.footer.copyright);
    let merged = merge_translated(&baseline, &repaired);
    assert_eq!(merged, baseline);
}

#[test]
fn test_repair_then_merge_keeps_token_for_rendering() {
    let baseline = english_content();
    let mut view = extract_translatable(&baseline);
    view.footer.copyright = "Todos los derechos reservados".into();

    let repaired = repair_copyright_placeholder(view, &baseline.footer.copyright);
    let merged: ContentDocument = merge_translated(&baseline, &repaired);

    assert_eq!(
        merged.footer.copyright,
        "Todos los derechos reservados {year}"
    );
    assert!(merged.footer.copyright.contains(YEAR_TOKEN));
}
