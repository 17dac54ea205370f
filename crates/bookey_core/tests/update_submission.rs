use std::sync::Once;

use bookey_core::{
    update, AppState, Effect, Msg, NotificationKind, NotificationView, PreviewRecord,
    SubmissionFailure, NOTIFICATION_TTL, SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bookey_logging::initialize_for_tests);
}

fn record(title: &str, domain: &str, tags: Option<&[&str]>) -> PreviewRecord {
    PreviewRecord {
        url: format!("https://{domain}/{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        description: String::new(),
        domain: domain.to_string(),
        img: Some(format!("https://{domain}/og.png")),
        favicon: None,
        tags: tags.map(|tags| tags.iter().map(|t| t.to_string()).collect()),
    }
}

fn loaded() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::PreviewsLoaded(Ok(vec![
            record("GitHub Repo", "github.com", Some(&["code"])),
            record("YouTube Video", "youtube.com", None),
        ])),
    );
    state
}

fn submit(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlInputChanged(url.to_string()));
    update(state, Msg::UrlSubmitted)
}

#[test]
fn submit_emits_create_and_marks_in_flight() {
    init_logging();
    let (state, effects) = submit(loaded(), "https://example.com");

    assert_eq!(
        effects,
        vec![Effect::CreatePreview {
            url: "https://example.com".to_string()
        }]
    );
    assert!(state.view().is_submitting);
    assert_eq!(state.view().pending_url, "https://example.com");
}

#[test]
fn successful_submission_prepends_and_notifies() {
    init_logging();
    let state = loaded();
    let before = state.records().len();
    let (state, _) = submit(state, "https://example.com");

    let created = record("Example Domain", "example.com", None);
    let (state, effects) = update(state, Msg::PreviewCreated(Ok(created.clone())));

    assert_eq!(state.records().len(), before + 1);
    assert_eq!(state.records()[0], created);
    assert_eq!(state.visible()[0], created);

    let view = state.view();
    assert!(!view.is_submitting);
    assert!(view.pending_url.is_empty());
    assert_eq!(
        view.notification,
        Some(NotificationView {
            message: SUBMIT_SUCCESS_MESSAGE.to_string(),
            kind: NotificationKind::Success,
        })
    );
    assert_eq!(view.notification.unwrap().message, "Link added successfully!");
    assert_eq!(
        effects,
        vec![Effect::ScheduleNotificationExpiry {
            ticket: 1,
            after: NOTIFICATION_TTL,
        }]
    );
}

#[test]
fn failed_submission_keeps_input_and_collection() {
    init_logging();
    let state = loaded();
    let before = state.records().to_vec();
    let (state, _) = submit(state, "https://bad.example");

    let (state, effects) = update(
        state,
        Msg::PreviewCreated(Err(SubmissionFailure::new("http status 500"))),
    );

    assert_eq!(state.records(), before.as_slice());
    let view = state.view();
    assert!(!view.is_submitting);
    assert_eq!(view.pending_url, "https://bad.example");
    assert_eq!(
        view.notification,
        Some(NotificationView {
            message: "Failed to add link. Please try again.".to_string(),
            kind: NotificationKind::Error,
        })
    );
    assert_eq!(SUBMIT_FAILURE_MESSAGE, "Failed to add link. Please try again.");
    assert_eq!(effects.len(), 1);
}

#[test]
fn malformed_created_record_counts_as_failure() {
    init_logging();
    let (state, _) = submit(loaded(), "https://example.com");
    let mut created = record("No Domain", "example.com", None);
    created.domain.clear();

    let (state, _) = update(state, Msg::PreviewCreated(Ok(created)));

    assert_eq!(state.records().len(), 2);
    assert_eq!(
        state.view().notification.map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    init_logging();
    let (state, _) = submit(loaded(), "https://first.example");
    let before = state.clone();

    let (state, effects) = update(state, Msg::UrlSubmitted);
    assert!(effects.is_empty());
    assert_eq!(state, before);

    // The input is disabled while submitting, so edits are dropped too.
    let (next, effects) = submit(state, "https://second.example");
    assert!(effects.is_empty());
    assert_eq!(next.view().pending_url, "https://first.example");
    assert_eq!(next.records(), before.records());
    assert!(next.view().notification.is_none());
}

#[test]
fn empty_or_invalid_url_is_skipped_silently() {
    init_logging();
    for input in ["", "   ", "not a url"] {
        let (state, effects) = submit(loaded(), input);
        assert!(effects.is_empty(), "input {input:?} should be skipped");
        assert!(!state.view().is_submitting);
        assert!(state.view().notification.is_none());
    }
}

#[test]
fn new_record_is_visible_even_when_search_does_not_match() {
    init_logging();
    let (state, _) = update(loaded(), Msg::SearchChanged("code".to_string()));
    assert_eq!(state.visible().len(), 1);

    let (state, _) = submit(state, "https://news.example");
    let created = record("Daily News", "news.example", None);
    let (state, _) = update(state, Msg::PreviewCreated(Ok(created.clone())));

    assert_eq!(state.visible()[0], created);
    assert_eq!(state.visible()[1].title, "GitHub Repo");
    assert_eq!(state.visible().len(), 2);

    // Editing the search applies the filter to the new record as well.
    let (state, _) = update(state, Msg::SearchChanged("cod".to_string()));
    assert_eq!(state.visible().len(), 1);
    assert_eq!(state.visible()[0].title, "GitHub Repo");
}

#[test]
fn answer_without_submission_in_flight_is_ignored() {
    init_logging();
    let state = loaded();
    let (next, effects) = update(
        state.clone(),
        Msg::PreviewCreated(Ok(record("Stray", "stray.example", None))),
    );

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn submission_can_be_retried_after_failure() {
    init_logging();
    let (state, _) = submit(loaded(), "https://flaky.example");
    let (state, _) = update(
        state,
        Msg::PreviewCreated(Err(SubmissionFailure::new("timeout"))),
    );

    let (state, effects) = update(state, Msg::UrlSubmitted);
    assert_eq!(
        effects,
        vec![Effect::CreatePreview {
            url: "https://flaky.example".to_string()
        }]
    );
    assert!(state.view().is_submitting);
}

#[test]
fn consecutive_non_matching_links_all_stay_visible() {
    init_logging();
    let (state, _) = update(loaded(), Msg::SearchChanged("github".to_string()));
    assert_eq!(state.visible().len(), 1);

    let (state, _) = submit(state, "https://a.example");
    let (state, _) = update(
        state,
        Msg::PreviewCreated(Ok(record("News A", "a.example", None))),
    );
    let (state, _) = submit(state, "https://b.example");
    let (state, _) = update(
        state,
        Msg::PreviewCreated(Ok(record("News B", "b.example", None))),
    );

    let titles: Vec<_> = state.visible().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["News B", "News A", "GitHub Repo"]);
    assert_eq!(state.records().len(), 4);
}
