use github_activity::activity::{ActivityCommand, show_activity};
use github_activity::feed::error::FetchError;
use github_activity::render::RenderSummary;
use serde_json::json;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

fn minimal_config() -> (TempDir, PathBuf) {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "version = 1\n[api]\ntoken_env = \"GITHUB_ACTIVITY_TEST_UNSET_TOKEN\"\n")
        .unwrap();
    (tmp, path)
}

fn command(server: &mockito::Server, config: PathBuf, user: &str) -> ActivityCommand {
    ActivityCommand {
        username: user.to_string(),
        config: Some(config),
        api_url: Some(server.url()),
        ..ActivityCommand::default()
    }
}

#[test]
fn shown_count_never_exceeds_clamped_limit() {
    let mut server = mockito::Server::new();
    let events: Vec<_> = (0..150)
        .map(|i| json!({"type": "PushEvent", "repo": {"name": format!("a/r{i}")}, "payload": {"size": i}}))
        .collect();
    let _mock = server
        .mock("GET", "/users/alice/events")
        .with_body(serde_json::Value::Array(events).to_string())
        .expect(3)
        .create();
    let (_tmp, config) = minimal_config();

    for (requested, expected) in [(0, 1), (30, 30), (1000, 100)] {
        let mut cmd = command(&server, config.clone(), "alice");
        cmd.limit = Some(requested);
        let mut out = Vec::new();
        let summary = show_activity(&cmd, &mut out).unwrap();
        assert_eq!(summary, RenderSummary::Shown(expected));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), expected);
    }
}

#[test]
fn fetch_failures_keep_their_kind() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/users/alice/events")
        .with_status(500)
        .with_body("boom")
        .create();
    let (_tmp, config) = minimal_config();

    let mut out = Vec::new();
    let err = show_activity(&command(&server, config, "alice"), &mut out).unwrap_err();
    match err.downcast_ref::<FetchError>() {
        Some(FetchError::Api { status, body }) => {
            assert_eq!(status, "500 Internal Server Error");
            assert_eq!(body, "boom");
        }
        other => panic!("expected api error, got {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn filtered_out_events_report_type() {
    let mut server = mockito::Server::new();
    let body = json!([{"type": "ForkEvent", "repo": {"name": "a/b"}, "payload": {}}]).to_string();
    let _mock = server
        .mock("GET", "/users/alice/events")
        .with_body(body)
        .create();
    let (_tmp, config) = minimal_config();

    let mut cmd = command(&server, config, "alice");
    cmd.event_type = Some("PushEvent".to_string());
    let mut out = Vec::new();
    let summary = show_activity(&cmd, &mut out).unwrap();
    assert_eq!(summary, RenderSummary::NoneMatched);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "No events of type \"PushEvent\" found.\n"
    );
}
