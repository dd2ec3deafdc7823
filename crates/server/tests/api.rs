//! End-to-end handler tests against the router, with fake adapters injected
//! through the application state.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use janseva_config::Settings;
use janseva_core::{ChatModel, SpeechError, SpeechToText, TextToSpeech, Translator};
use janseva_llm::TranslationAdapter;
use janseva_server::{create_router, AppState};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Chat model that captures the prompt and answers with a fixed reply.
struct CapturingChat {
    reply: &'static str,
    last_prompt: Mutex<Option<String>>,
}

impl CapturingChat {
    fn new(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply,
            last_prompt: Mutex::new(None),
        })
    }

    fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for CapturingChat {
    async fn ask(&self, prompt: &str) -> String {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.to_string()
    }
}

/// Translator that records every call and tags its output.
#[derive(Default)]
struct RecordingTranslator {
    translate_calls: Mutex<Vec<(String, String, String)>>,
    detect_calls: Mutex<u32>,
}

impl RecordingTranslator {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn calls(&self) -> Vec<(String, String, String)> {
        self.translate_calls.lock().unwrap().clone()
    }

    fn detect_count(&self) -> u32 {
        *self.detect_calls.lock().unwrap()
    }
}

#[async_trait]
impl Translator for RecordingTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        self.translate_calls.lock().unwrap().push((
            text.to_string(),
            source.to_string(),
            target.to_string(),
        ));
        format!("[{}] {}", target, text)
    }

    async fn detect_language(&self, _text: &str) -> String {
        *self.detect_calls.lock().unwrap() += 1;
        "hi".to_string()
    }
}

/// Speech recognizer with a canned outcome.
struct FakeStt {
    outcome: Mutex<Option<Result<String, SpeechError>>>,
}

impl FakeStt {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Some(Ok(text.to_string()))),
        })
    }

    fn err(err: SpeechError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Some(Err(err))),
        })
    }
}

#[async_trait]
impl SpeechToText for FakeStt {
    async fn transcribe(&self, _audio: &[u8], _language: &str) -> Result<String, SpeechError> {
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(SpeechError::NotConfigured))
    }
}

/// Synthesizer answering fixed bytes.
struct FakeTts;

#[async_trait]
impl TextToSpeech for FakeTts {
    async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>, SpeechError> {
        Ok(vec![0x49, 0x44, 0x33, 0x04])
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

struct Fakes {
    chat: Arc<dyn ChatModel>,
    translator: Arc<dyn Translator>,
    stt: Arc<dyn SpeechToText>,
    tts: Arc<dyn TextToSpeech>,
}

impl Default for Fakes {
    fn default() -> Self {
        Self {
            chat: CapturingChat::new("Hello from the assistant"),
            translator: Arc::new(TranslationAdapter::unconfigured()),
            stt: FakeStt::err(SpeechError::NotConfigured),
            tts: Arc::new(FakeTts),
        }
    }
}

async fn test_app(fakes: Fakes) -> Router {
    let records = janseva_persistence::init("sqlite::memory:", true)
        .await
        .expect("in-memory store");

    let mut settings = Settings::default();
    let tts_dir = std::env::temp_dir().join(format!("janseva-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&tts_dir).unwrap();
    settings.media.tts_dir = tts_dir.to_string_lossy().into_owned();

    let state = AppState::new(
        Arc::new(settings),
        records,
        fakes.chat,
        fakes.translator,
        fakes.stt,
        fakes.tts,
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

const BOUNDARY: &str = "JansevaTestBoundary";

fn multipart_request(
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, name, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

// ---------------------------------------------------------------------------
// Chat, translate, history
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chat_requires_a_message() {
    let app = test_app(Fakes::default()).await;
    let (status, body) = send(&app, json_request("POST", "/api/chat", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["error"], json!("message is required"));
}

#[tokio::test]
async fn chat_translates_inbound_exactly_once_for_english_target() {
    let chat = CapturingChat::new("Hello from the assistant");
    let translator = RecordingTranslator::new();
    let app = test_app(Fakes {
        chat: chat.clone(),
        translator: translator.clone(),
        ..Fakes::default()
    })
    .await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/chat",
            json!({
                "message": "namaste",
                "source_language": "hi",
                "target_language": "en",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["bot_reply"], json!("Hello from the assistant"));

    // Exactly one translate-to-English call before the chat call, none after.
    assert_eq!(
        translator.calls(),
        vec![("namaste".to_string(), "hi".to_string(), "en".to_string())]
    );
    assert_eq!(translator.detect_count(), 0);
    assert_eq!(chat.last_prompt().as_deref(), Some("[en] namaste"));
}

#[tokio::test]
async fn chat_translates_reply_for_non_english_target() {
    let translator = RecordingTranslator::new();
    let app = test_app(Fakes {
        translator: translator.clone(),
        ..Fakes::default()
    })
    .await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/chat",
            json!({
                "message": "namaste",
                "source_language": "hi",
                "target_language": "ta",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bot_reply"], json!("[ta] Hello from the assistant"));

    let calls = translator.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, "hi");
    assert_eq!(calls[0].2, "en");
    assert_eq!(calls[1].0, "Hello from the assistant");
    assert_eq!(calls[1].1, "en");
    assert_eq!(calls[1].2, "ta");
}

#[tokio::test]
async fn chat_detects_language_when_source_is_absent() {
    let translator = RecordingTranslator::new();
    let app = test_app(Fakes {
        translator: translator.clone(),
        ..Fakes::default()
    })
    .await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/chat", json!({ "message": "namaste" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(translator.detect_count(), 1);
    assert_eq!(body["source_language"], json!("hi"));
    // Target defaults to the detected source.
    assert_eq!(body["target_language"], json!("hi"));
}

#[tokio::test]
async fn chat_generates_an_opaque_session_id() {
    let app = test_app(Fakes::default()).await;

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/chat",
            json!({ "message": "hello", "source_language": "en" }),
        ),
    )
    .await;

    let session_id = body["session_id"].as_str().unwrap();
    assert_eq!(session_id.len(), 32);
    assert!(session_id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn chat_history_round_trips_through_the_store() {
    let app = test_app(Fakes::default()).await;

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/chat",
            json!({
                "message": "hello",
                "session_id": "sess-1",
                "source_language": "en",
            }),
        ),
    )
    .await;
    assert_eq!(body["session_id"], json!("sess-1"));

    let (status, body) = send(&app, get_request("/api/history?session_id=sess-1")).await;
    assert_eq!(status, StatusCode::OK);
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["user_message"], json!("hello"));
    assert_eq!(history[0]["bot_message"], json!("Hello from the assistant"));
}

#[tokio::test]
async fn history_requires_a_session_id() {
    let app = test_app(Fakes::default()).await;
    let (status, body) = send(&app, get_request("/api/history")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("session_id is required"));
}

#[tokio::test]
async fn translate_requires_text() {
    let app = test_app(Fakes::default()).await;
    let (status, _) = send(
        &app,
        json_request("POST", "/api/translate", json!({ "text": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn translate_with_unconfigured_adapter_uses_the_hindi_tag_verbatim() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/translate",
            json!({ "text": "hello", "target_language": "hi" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated_text"], json!("[हिंदी अनुवाद] hello"));
    assert_eq!(body["source_language"], json!("en"));
    assert_eq!(body["target_language"], json!("hi"));
}

#[tokio::test]
async fn translate_is_a_no_op_for_matching_languages() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/translate",
            json!({ "text": "hello", "source_language": "hi", "target_language": "HI" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated_text"], json!("hello"));
}

// ---------------------------------------------------------------------------
// Complaints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complaint_with_empty_issue_is_rejected_and_not_inserted() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/complaints",
            json!({ "name": "Asha", "issue": "   " }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("issue is required"));

    let (_, body) = send(&app, get_request("/api/complaints")).await;
    assert!(body["complaints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn complaint_lifecycle_create_get_update() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/complaints",
            json!({ "name": "Asha", "contact": "9876543210", "issue": "Water leak" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("open"));
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, get_request(&format!("/api/complaints/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["complaint"]["issue"], json!("Water leak"));

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/complaints/{}", id),
            json!({ "status": "in_progress" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("in_progress"));

    let (_, body) = send(&app, get_request(&format!("/api/complaints/{}", id))).await;
    assert_eq!(body["complaint"]["status"], json!("in_progress"));
}

#[tokio::test]
async fn complaint_status_update_on_unknown_id_still_answers_ok() {
    let app = test_app(Fakes::default()).await;
    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            "/api/complaints/9999",
            json!({ "status": "closed" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn complaint_status_update_requires_a_status() {
    let app = test_app(Fakes::default()).await;
    let (status, _) = send(
        &app,
        json_request("PATCH", "/api/complaints/1", json!({ "status": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_complaint_is_not_found() {
    let app = test_app(Fakes::default()).await;
    let (status, _) = send(&app, get_request("/api/complaints/404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Applications and services
// ---------------------------------------------------------------------------

#[tokio::test]
async fn services_are_seeded() {
    let app = test_app(Fakes::default()).await;
    let (status, body) = send(&app, get_request("/api/services")).await;
    assert_eq!(status, StatusCode::OK);

    let services = body["services"].as_array().unwrap();
    assert_eq!(services.len(), 6);
    assert!(services
        .iter()
        .any(|s| s["service_id"] == json!("health") && s["title"] == json!("Health Department")));
}

#[tokio::test]
async fn application_referencing_unknown_service_is_rejected() {
    let app = test_app(Fakes::default()).await;

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/applications",
            json!({
                "service_id": "space_program",
                "name": "Asha",
                "email": "a@x.com",
                "purpose": "launch",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, get_request("/api/applications")).await;
    assert!(body["applications"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn application_details_round_trip() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/applications",
            json!({
                "service_id": "municipal",
                "name": "Ravi",
                "email": "r@x.com",
                "purpose": "water connection",
                "details": { "ward": "12", "connection_type": "domestic" },
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();

    let (_, body) = send(&app, get_request(&format!("/api/applications/{}", id))).await;
    assert_eq!(body["application"]["details"]["ward"], json!("12"));
    assert_eq!(body["application"]["status"], json!("Submitted"));
}

#[tokio::test]
async fn apply_end_to_end_issues_a_ticket() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        multipart_request(
            "/api/apply",
            &[
                ("service_id", "health"),
                ("name", "Asha"),
                ("email", "a@x.com"),
                ("purpose", "certificate"),
            ],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let ticket = body["ticket_number"].as_str().unwrap();
    assert_eq!(ticket.len(), 8);
    assert!(ticket
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let (_, body) = send(&app, get_request("/api/applications")).await;
    let applications = body["applications"].as_array().unwrap();
    assert!(applications
        .iter()
        .any(|a| a["ticket_number"] == json!(ticket) && a["status"] == json!("Submitted")));
}

#[tokio::test]
async fn apply_requires_the_mandatory_fields() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        multipart_request(
            "/api/apply",
            &[("service_id", "health"), ("name", "Asha"), ("email", "a@x.com")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("purpose is required"));
}

#[tokio::test]
async fn apply_with_unknown_service_is_404() {
    let app = test_app(Fakes::default()).await;

    let (status, _) = send(
        &app,
        multipart_request(
            "/api/apply",
            &[
                ("service_id", "space_program"),
                ("name", "Asha"),
                ("email", "a@x.com"),
                ("purpose", "launch"),
            ],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn uploaded_document_downloads_byte_exact() {
    let app = test_app(Fakes::default()).await;
    let content = b"%PDF-1.4 fake document bytes\x00\xff";

    let (status, _) = send(
        &app,
        multipart_request(
            "/api/apply",
            &[
                ("service_id", "revenue"),
                ("name", "Ravi"),
                ("email", "r@x.com"),
                ("purpose", "income certificate"),
            ],
            Some(("document", "proof.pdf", content)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get_request("/api/saved_files")).await;
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    let id = files[0]["id"].as_i64().unwrap();
    assert_eq!(files[0]["file_name"], json!("proof.pdf"));

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/download/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/octet-stream"
    );
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("proof.pdf"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], &content[..]);
}

#[tokio::test]
async fn saved_files_filters_by_email() {
    let app = test_app(Fakes::default()).await;

    for (email, filename) in [("a@x.com", "a.pdf"), ("b@y.com", "b.pdf")] {
        let (status, _) = send(
            &app,
            multipart_request(
                "/api/apply",
                &[
                    ("service_id", "health"),
                    ("name", "Someone"),
                    ("email", email),
                    ("purpose", "records"),
                ],
                Some(("document", filename, b"data")),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, get_request("/api/saved_files?email=b@y.com")).await;
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["file_name"], json!("b.pdf"));
}

#[tokio::test]
async fn download_without_an_attached_document_is_404() {
    let app = test_app(Fakes::default()).await;

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/applications",
            json!({
                "service_id": "health",
                "name": "Asha",
                "email": "a@x.com",
                "purpose": "certificate",
            }),
        ),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, get_request(&format!("/api/download/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("no file attached"));
}

// ---------------------------------------------------------------------------
// Voice
// ---------------------------------------------------------------------------

#[tokio::test]
async fn voice_to_text_requires_an_audio_part() {
    let app = test_app(Fakes::default()).await;
    let (status, body) = send(
        &app,
        multipart_request("/api/voice-to-text", &[("language", "en")], None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("No audio file uploaded with key 'audio'"));
}

#[tokio::test]
async fn voice_to_text_returns_the_transcript() {
    let app = test_app(Fakes {
        stt: FakeStt::ok("hello there"),
        ..Fakes::default()
    })
    .await;

    let (status, body) = send(
        &app,
        multipart_request(
            "/api/voice-to-text",
            &[("language", "HI")],
            Some(("audio", "clip.wav", b"RIFFxxxx")),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], json!("hello there"));
    assert_eq!(body["language"], json!("hi"));
}

#[tokio::test]
async fn unintelligible_audio_is_a_bad_request() {
    let app = test_app(Fakes {
        stt: FakeStt::err(SpeechError::UnrecognizedAudio),
        ..Fakes::default()
    })
    .await;

    let (status, body) = send(
        &app,
        multipart_request(
            "/api/voice-to-text",
            &[],
            Some(("audio", "clip.wav", b"RIFFxxxx")),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Could not understand audio"));
}

#[tokio::test]
async fn recognition_backend_failure_is_a_server_error() {
    let app = test_app(Fakes {
        stt: FakeStt::err(SpeechError::EngineUnavailable("connection reset".to_string())),
        ..Fakes::default()
    })
    .await;

    let (status, _) = send(
        &app,
        multipart_request(
            "/api/voice-to-text",
            &[],
            Some(("audio", "clip.wav", b"RIFFxxxx")),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn text_to_speech_requires_text() {
    let app = test_app(Fakes::default()).await;
    let (status, _) = send(
        &app,
        json_request("POST", "/api/text-to-speech", json!({ "text": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn text_to_speech_writes_a_servable_file() {
    let app = test_app(Fakes::default()).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/text-to-speech",
            json!({ "text": "namaste", "language": "hi" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let filename = body["filename"].as_str().unwrap();
    assert!(filename.starts_with("tts_") && filename.ends_with(".mp3"));
    assert_eq!(body["audio_url"], json!(format!("/tts/{}", filename)));

    // The file is served back via the static route.
    let response = app
        .clone()
        .oneshot(get_request(&format!("/tts/{}", filename)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], &[0x49, 0x44, 0x33, 0x04]);
}
