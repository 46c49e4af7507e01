/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use std::time::Duration;
use test_utilities::mocks::*;
use vulnscope::ports::outbound::{DEEP_ANALYSIS_SLOT, SCAN_RESULT_SLOT};
use vulnscope::prelude::*;
use vulnscope::scan_review::domain::{CONNECTIVITY_FAILURE, NO_RELEVANT_INFORMATION};

const SCAN_REPLY: &str = r#"{
    "brief_summary": "User input reaches SQL and HTML sinks.",
    "llm_results": {
        "vulnerabilities": [
            {"type": "SQL Injection", "severity": "Critical", "location": "line 2", "description": "query built by concatenation"},
            {"type": "XSS", "severity": "medium", "location": "line 3", "description": "unescaped output"}
        ],
        "risk_score": 8.5
    },
    "pattern_results": {
        "sql_injection": [{"match": "execute(q + id)", "line": 2}],
        "xss": [{"match": "innerHTML", "line": 3}]
    },
    "recommendations": [{"vulnerability_type": "SQL Injection", "recommendation": "Use bound parameters"}],
    "file_content": "import db\ndb.execute(q + id)\nel.innerHTML = name",
    "remediated_file_content": "import db\ndb.execute(q, (id,))\nel.textContent = name"
}"#;

#[tokio::test]
async fn test_scan_file_happy_path() {
    let repository = MockStateRepository::new();
    let scan_service = MockScanService::new().with_upload_reply(SCAN_REPLY);
    let progress_reporter = MockProgressReporter::new();

    let mut use_case = ScanFileUseCase::new(
        MockSourceFileReader::new("import db\ndb.execute(q + id)\nel.innerHTML = name"),
        scan_service.clone(),
        repository.clone(),
        progress_reporter.clone(),
    );

    let model = use_case
        .execute(ScanRequest::new(PathBuf::from("src/app.py")))
        .await
        .unwrap();

    assert_eq!(model.vulnerabilities.len(), 2);
    assert_eq!(model.pattern_match_count(), 2);
    assert_eq!(
        model.summary.as_deref(),
        Some("User input reaches SQL and HTML sinks.")
    );

    // Only the file name travels to the backend
    let uploaded = scan_service.uploaded.lock().unwrap().clone();
    assert_eq!(uploaded.len(), 1);
    assert_eq!(uploaded[0].file_name, "app.py");

    // Payload persisted verbatim
    assert_eq!(repository.slot(SCAN_RESULT_SLOT).as_deref(), Some(SCAN_REPLY));

    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.starts_with("Completed:")));
}

#[tokio::test]
async fn test_scan_then_show_reuses_persisted_result() {
    let repository = MockStateRepository::new();

    let mut scan = ScanFileUseCase::new(
        MockSourceFileReader::new("x"),
        MockScanService::new().with_upload_reply(SCAN_REPLY),
        repository.clone(),
        MockProgressReporter::new(),
    );
    let scanned = scan
        .execute(ScanRequest::new(PathBuf::from("app.py")))
        .await
        .unwrap();

    let mut show = ShowAnalysisUseCase::new(repository);
    let shown = show.execute().unwrap();

    assert_eq!(scanned, shown);
}

#[tokio::test]
async fn test_scan_unreadable_reply_is_not_persisted() {
    let repository = MockStateRepository::new().with_slot(SCAN_RESULT_SLOT, SCAN_REPLY);

    let mut use_case = ScanFileUseCase::new(
        MockSourceFileReader::new("x"),
        MockScanService::new().with_upload_reply("<html>502 Bad Gateway</html>"),
        repository.clone(),
        MockProgressReporter::new(),
    );

    let result = use_case
        .execute(ScanRequest::new(PathBuf::from("app.py")))
        .await;

    assert!(result.is_err());
    assert_eq!(repository.slot(SCAN_RESULT_SLOT).as_deref(), Some(SCAN_REPLY));
}

#[tokio::test]
async fn test_scan_missing_file_sends_nothing() {
    let scan_service = MockScanService::new().with_upload_reply(SCAN_REPLY);

    let mut use_case = ScanFileUseCase::new(
        MockSourceFileReader::missing(),
        scan_service.clone(),
        MockStateRepository::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(ScanRequest::new(PathBuf::from("gone.py")))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("gone.py"));
    assert_eq!(scan_service.upload_count(), 0);
}

#[tokio::test]
async fn test_scan_with_unreachable_backend() {
    let repository = MockStateRepository::new();

    let mut use_case = ScanFileUseCase::new(
        MockSourceFileReader::new("x"),
        MockScanService::unreachable(),
        repository.clone(),
        MockProgressReporter::new(),
    );

    let result = use_case
        .execute(ScanRequest::new(PathBuf::from("app.py")))
        .await;

    assert!(result.is_err());
    assert!(repository.slot(SCAN_RESULT_SLOT).is_none());
}

#[test]
fn test_show_without_result_fails() {
    let mut use_case = ShowAnalysisUseCase::new(MockStateRepository::new());
    let err = use_case.execute().unwrap_err();
    assert!(err.to_string().contains("No scan result found"));
}

#[test]
fn test_show_with_malformed_slot_fails_like_missing() {
    let repository = MockStateRepository::new().with_slot(SCAN_RESULT_SLOT, "{not json");
    let mut use_case = ShowAnalysisUseCase::new(repository);
    assert!(use_case.execute().is_err());
}

#[test]
fn test_show_builds_highlight_and_diff() {
    let repository = MockStateRepository::new().with_slot(SCAN_RESULT_SLOT, SCAN_REPLY);
    let model = ShowAnalysisUseCase::new(repository).execute().unwrap();

    let highlighted = model.highlighted_source.unwrap();
    assert_eq!(
        highlighted.render_with("[", "]"),
        "import db\ndb.[execute(q + id)]\nel.[innerHTML] = name"
    );

    let diff = model.remediation_diff.unwrap();
    assert_eq!(diff.changed_line_numbers(), vec![2, 3]);
}

#[tokio::test]
async fn test_deep_analysis_persists_response() {
    let repository = MockStateRepository::new();
    let scan_service = MockScanService::new()
        .with_deep_reply(serde_json::json!({"findings": [{"kind": "taint"}]}));

    let use_case = DeepAnalysisUseCase::new(
        MockSourceFileReader::new("print(1)"),
        scan_service.clone(),
        repository.clone(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(ScanRequest::new(PathBuf::from("main.py")))
        .await
        .unwrap();

    assert_eq!(response["findings"][0]["kind"], "taint");
    let stored: serde_json::Value =
        serde_json::from_str(&repository.slot(DEEP_ANALYSIS_SLOT).unwrap()).unwrap();
    assert_eq!(stored, response);
    // Scan result slot untouched
    assert!(repository.slot(SCAN_RESULT_SLOT).is_none());
}

#[tokio::test]
async fn test_check_server_status() {
    let connected = CheckServerUseCase::new(MockScanService::new())
        .execute()
        .await;
    assert!(connected.is_connected());

    let not_connected = CheckServerUseCase::new(MockScanService::unreachable())
        .execute()
        .await;
    assert_eq!(not_connected, ServerStatus::NotConnected);
}

#[tokio::test]
async fn test_question_session_flow() {
    let service = MockQuestionService::new()
        .with_chunks(&["Use parameterized queries.", "Validate input."])
        .with_reply(QuestionReply::default())
        .with_error("index offline");
    let mut controller = QuestionSessionController::new(service.clone());

    let status = controller
        .submit("  How do I prevent SQL injection?  ", std::future::pending())
        .await
        .unwrap();
    assert_eq!(status, SessionStatus::Answered);
    assert_eq!(controller.session().answer_fragments().len(), 2);

    let status = controller
        .submit("What about LDAP?", std::future::pending())
        .await
        .unwrap();
    assert_eq!(status, SessionStatus::Failed);
    assert_eq!(
        controller.session().error_message(),
        Some(NO_RELEVANT_INFORMATION)
    );
    assert!(controller.session().answer_fragments().is_empty());

    let status = controller
        .submit("And XXE?", std::future::pending())
        .await
        .unwrap();
    assert_eq!(status, SessionStatus::Failed);
    assert_eq!(controller.session().error_message(), Some("index offline"));

    // Queue exhausted: transport failure
    let status = controller
        .submit("Anything else?", std::future::pending())
        .await
        .unwrap();
    assert_eq!(status, SessionStatus::Failed);
    assert_eq!(
        controller.session().error_message(),
        Some(CONNECTIVITY_FAILURE)
    );

    // Trimmed text is what gets sent
    assert_eq!(
        service.get_queries()[0],
        "How do I prevent SQL injection?"
    );
}

#[tokio::test]
async fn test_question_cancel_returns_to_idle() {
    let service = MockQuestionService::new()
        .with_chunks(&["late answer"])
        .with_delay(Duration::from_secs(30));
    let mut controller = QuestionSessionController::new(service);

    let status = controller
        .submit("slow question", tokio::time::sleep(Duration::from_millis(10)))
        .await
        .unwrap();

    assert_eq!(status, SessionStatus::Idle);
    assert_eq!(controller.session().question_text(), "");
    assert!(controller.session().answer_fragments().is_empty());
    assert!(controller.session().error_message().is_none());
}

#[tokio::test]
async fn test_blank_question_is_never_sent() {
    let service = MockQuestionService::new().with_chunks(&["unused"]);
    let mut controller = QuestionSessionController::new(service.clone());

    assert!(controller
        .submit("   ", std::future::pending())
        .await
        .is_err());
    assert!(service.get_queries().is_empty());
    assert_eq!(controller.session().status(), SessionStatus::Idle);
}

#[test]
fn test_formatters_render_stored_result() {
    let repository = MockStateRepository::new().with_slot(SCAN_RESULT_SLOT, SCAN_REPLY);
    let model = ShowAnalysisUseCase::new(repository).execute().unwrap();

    let text = TextFormatter::new(false)
        .format_analysis(&model, ReportScope::Full)
        .unwrap();
    assert!(text.contains("[[innerHTML]]"));
    assert!(text.contains("SQL Injection"));

    let markdown = MarkdownFormatter::new()
        .format_analysis(&model, ReportScope::Full)
        .unwrap();
    assert!(markdown.contains("<mark>innerHTML</mark>"));

    let json = JsonFormatter::new()
        .format_analysis(&model, ReportScope::DiffOnly)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["remediation_diff"]["lines"][1]["changed"], true);
    assert_eq!(value["remediation_diff"]["lines"][0]["changed"], false);
}
