//! End-to-end submission tests against an in-process grading server

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

use judge_client::{
    api::{build_http_client, HttpGradingBackend, UserApi},
    config::{ApiConfig, ProfileConfig},
    constants::endpoints,
    models::{
        language::{CPP, PYTHON},
        LifecycleState, SubmissionInput, UploadedFile,
    },
    services::ProfileService,
    views::CaseStatus,
    ClientError, SubmissionController, SubmitAttempt, SubmitError,
};

/// One multipart field as the server saw it
#[derive(Debug, Clone)]
struct RecordedField {
    name: String,
    file_name: Option<String>,
    data: Vec<u8>,
}

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<Vec<RecordedField>>>>,
}

impl Recorder {
    fn requests(&self) -> Vec<Vec<RecordedField>> {
        self.requests.lock().unwrap().clone()
    }

    async fn record(&self, mut multipart: Multipart) {
        let mut fields = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let data = field.bytes().await.unwrap().to_vec();
            fields.push(RecordedField {
                name,
                file_name,
                data,
            });
        }
        self.requests.lock().unwrap().push(fields);
    }
}

fn field<'a>(fields: &'a [RecordedField], name: &str) -> Option<&'a RecordedField> {
    fields.iter().find(|f| f.name == name)
}

async fn graded(State(recorder): State<Recorder>, multipart: Multipart) -> impl IntoResponse {
    recorder.record(multipart).await;
    Json(json!({
        "summary": "1/2 passed",
        "details": [
            {"passed": true, "expected_output": "1", "actual_output": "1"},
            {"passed": false, "expected_output": "2", "actual_output": "1"}
        ]
    }))
}

async fn internal_error(State(recorder): State<Recorder>, multipart: Multipart) -> impl IntoResponse {
    recorder.record(multipart).await;
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

async fn empty_bad_gateway() -> impl IntoResponse {
    (StatusCode::BAD_GATEWAY, "")
}

async fn not_json() -> impl IntoResponse {
    (StatusCode::OK, "<html>judge is down</html>")
}

/// Start a judge on a random port and return its base URL
async fn spawn_judge(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn backend_for(base_url: &str) -> HttpGradingBackend {
    let config = ApiConfig::with_base_url(base_url);
    HttpGradingBackend::new(build_http_client(&config).unwrap(), &config)
}

fn submit_router(recorder: &Recorder, handler: axum::routing::MethodRouter<Recorder>) -> Router {
    Router::new()
        .route(endpoints::SUBMIT, handler)
        .with_state(recorder.clone())
}

#[tokio::test]
async fn test_typed_code_is_graded_and_view_resets() {
    let recorder = Recorder::default();
    let base_url = spawn_judge(submit_router(&recorder, post(graded))).await;

    let controller = SubmissionController::new("42", backend_for(&base_url));
    controller.select_language(Some(PYTHON));
    controller.set_typed_code("print(1)");

    let attempt = controller.submit().await;
    assert!(matches!(attempt, SubmitAttempt::Finished(Ok(_))));

    let requests = recorder.requests();
    assert_eq!(requests.len(), 1);
    let fields = &requests[0];
    assert_eq!(field(fields, "problemId").unwrap().data, b"42");
    assert_eq!(field(fields, "languageId").unwrap().data, b"71");
    assert_eq!(field(fields, "code").unwrap().data, b"print(1)");
    assert!(field(fields, "codeFile").is_none());

    let state = controller.state();
    let outcome = state.outcome().unwrap();
    assert_eq!(outcome.summary, "1/2 passed");

    let rendered = controller.rendered_outcome().unwrap();
    assert_eq!(rendered.cases.len(), 2);
    assert_eq!(rendered.cases[1].status, CaseStatus::Failed);
    let comparison = rendered.cases[1].comparison.as_ref().unwrap();
    assert_eq!(comparison.expected, "2");
    assert_eq!(comparison.received, "1");

    assert_eq!(controller.input(), SubmissionInput::Empty);
    assert_eq!(controller.language(), None);
}

#[tokio::test]
async fn test_uploaded_file_is_sent_as_code_file() {
    let recorder = Recorder::default();
    let base_url = spawn_judge(submit_router(&recorder, post(graded))).await;

    let controller = SubmissionController::new("7", backend_for(&base_url));
    controller.select_language(Some(CPP));
    controller.set_typed_code("draft");
    controller.set_uploaded_file(Some(UploadedFile::new(
        "main.cpp",
        b"int main() { return 0; }".to_vec(),
    )));

    controller.submit().await;

    let requests = recorder.requests();
    let fields = &requests[0];
    let code_file = field(fields, "codeFile").unwrap();
    assert_eq!(code_file.file_name.as_deref(), Some("main.cpp"));
    assert_eq!(code_file.data, b"int main() { return 0; }");
    assert_eq!(field(fields, "languageId").unwrap().data, b"54");
    assert!(field(fields, "code").is_none());
}

#[tokio::test]
async fn test_server_error_body_is_surfaced_and_input_kept() {
    let recorder = Recorder::default();
    let base_url = spawn_judge(submit_router(&recorder, post(internal_error))).await;

    let controller = SubmissionController::new("42", backend_for(&base_url));
    controller.select_language(Some(PYTHON));
    controller.set_typed_code("print(1)");

    let attempt = controller.submit().await;

    assert_eq!(
        attempt,
        SubmitAttempt::Finished(Err(SubmitError::Rejected {
            status: 500,
            message: "internal error".to_string(),
        }))
    );
    match controller.state() {
        LifecycleState::Failed(message) => assert!(message.contains("internal error")),
        other => panic!("unexpected state: {other:?}"),
    }
    assert_eq!(controller.input().typed_text(), Some("print(1)"));
    assert_eq!(controller.language(), Some(PYTHON));
    assert_eq!(recorder.requests().len(), 1);
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status_text() {
    let recorder = Recorder::default();
    let base_url = spawn_judge(submit_router(&recorder, post(empty_bad_gateway))).await;

    let controller = SubmissionController::new("1", backend_for(&base_url));
    controller.select_language(Some(CPP));
    controller.set_typed_code("int main() {}");
    controller.submit().await;

    assert_eq!(
        controller.state(),
        LifecycleState::Failed("Submission failed: Bad Gateway".to_string())
    );
}

#[tokio::test]
async fn test_truncated_error_body_falls_back_to_status_text() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        // Read until the closing multipart boundary
        while !request.ends_with(b"--\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        // Promise more body than is sent, then hang up
        socket
            .write_all(b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 64\r\n\r\npartial")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let controller = SubmissionController::new("1", backend_for(&format!("http://{addr}")));
    controller.select_language(Some(PYTHON));
    controller.set_typed_code("print(1)");

    assert_eq!(
        controller.submit().await,
        SubmitAttempt::Finished(Err(SubmitError::Rejected {
            status: 502,
            message: "Bad Gateway".to_string(),
        }))
    );
}

#[tokio::test]
async fn test_malformed_success_body_fails() {
    let recorder = Recorder::default();
    let base_url = spawn_judge(submit_router(&recorder, post(not_json))).await;

    let controller = SubmissionController::new("1", backend_for(&base_url));
    controller.select_language(Some(PYTHON));
    controller.set_typed_code("print(1)");

    match controller.submit().await {
        SubmitAttempt::Finished(Err(SubmitError::MalformedResponse(_))) => {}
        other => panic!("unexpected attempt: {other:?}"),
    }
    assert!(controller.state().error_message().is_some());
    assert_eq!(controller.input().typed_text(), Some("print(1)"));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Grab a free port, then close it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = SubmissionController::new("1", backend_for(&format!("http://{addr}")));
    controller.select_language(Some(PYTHON));
    controller.set_typed_code("print(1)");

    match controller.submit().await {
        SubmitAttempt::Finished(Err(SubmitError::Transport(_))) => {}
        other => panic!("unexpected attempt: {other:?}"),
    }
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let recorder = Recorder::default();
    let base_url = spawn_judge(submit_router(&recorder, post(graded))).await;

    let controller = SubmissionController::new("1", backend_for(&base_url));
    controller.submit().await;
    assert_eq!(
        controller.state().error_message(),
        Some("Please select a programming language.")
    );

    controller.select_language(Some(CPP));
    controller.set_typed_code("   ");
    controller.submit().await;
    assert_eq!(
        controller.state().error_message(),
        Some("Please enter a solution or upload a file.")
    );

    assert!(recorder.requests().is_empty());
}

#[tokio::test]
async fn test_profile_summary_from_current_user() {
    let router = Router::new().route(
        endpoints::CURRENT_USER,
        get(|| async {
            Json(json!({
                "username": "alice",
                "email": "alice@example.com",
                "submissions": [{"id": 1}, {"id": 2}, {"id": 3}]
            }))
        }),
    );
    let base_url = spawn_judge(router).await;
    let config = ApiConfig::with_base_url(&base_url);
    let api = UserApi::new(build_http_client(&config).unwrap(), &config);

    let summary = ProfileService::load(&api, &ProfileConfig::default())
        .await
        .unwrap();

    assert_eq!(summary.username, "alice");
    assert_eq!(summary.solved, 3);
    assert_eq!(summary.unsolved, 7);
    assert_eq!(summary.caption(), "Solved: 3 / 10");
}

#[tokio::test]
async fn test_profile_requires_session() {
    let router = Router::new().route(
        endpoints::CURRENT_USER,
        get(|| async { StatusCode::UNAUTHORIZED }),
    );
    let base_url = spawn_judge(router).await;
    let config = ApiConfig::with_base_url(&base_url);
    let api = UserApi::new(build_http_client(&config).unwrap(), &config);

    let result = ProfileService::load(&api, &ProfileConfig::default()).await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
}
