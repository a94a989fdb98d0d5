use crate::common::{client_for, missing_page_body, revisions_body};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use wiki_time_travel::dates::DateBound;
use wiki_time_travel::{PopupView, Session, SessionState, TabPort, TravelError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Tab fake that records every navigation
#[derive(Default)]
struct RecordingTab {
    url: String,
    navigated: Vec<String>,
}

impl TabPort for RecordingTab {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn navigate(&mut self, url: &str) {
        self.navigated.push(url.to_string());
    }
}

/// View fake that keeps whatever the session last showed
#[derive(Default)]
struct RecordingView {
    placeholder_shown: bool,
    title: Option<String>,
    creation_text: Option<String>,
    bound: Option<DateBound>,
    action_enabled: bool,
    errors: Vec<String>,
}

impl PopupView for RecordingView {
    fn show_not_a_page(&mut self) {
        self.placeholder_shown = true;
    }

    fn show_page(&mut self, title: &str, creation_text: &str, bound: &DateBound) {
        self.title = Some(title.to_string());
        self.creation_text = Some(creation_text.to_string());
        self.bound = Some(*bound);
    }

    fn set_action_enabled(&mut self, enabled: bool) {
        self.action_enabled = enabled;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn session_for(
    mock_server: &MockServer,
    url: &str,
) -> Session<RecordingTab, RecordingView> {
    let tab = RecordingTab {
        url: url.to_string(),
        ..RecordingTab::default()
    };
    Session::new(client_for(mock_server), tab, RecordingView::default())
        .with_today(ymd(2024, 5, 1))
}

async fn mount_earth_first_revision(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("rvdir", "newer"))
        .and(query_param("titles", "Earth"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(revisions_body(
                "Earth",
                281897,
                "2001-11-06T17:29:34Z",
            )),
        )
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_full_session_for_earth() {
    let mock_server = MockServer::start().await;
    mount_earth_first_revision(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("titles", "Earth"))
        .and(query_param("rvstart", "2010-01-01T23:59:59.999Z"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(revisions_body(
                "Earth",
                335133917,
                "2009-12-31T20:10:00Z",
            )),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server, "https://en.wikipedia.org/wiki/Earth");

    let state = session.load().await.expect("Session failed to load");
    assert!(state.accepts_action());

    let view = session.view();
    assert_eq!(view.title.as_deref(), Some("Earth"));
    assert_eq!(
        view.creation_text.as_deref(),
        Some("Page created on 6 November 2001")
    );
    let bound = view.bound.expect("Bound not shown");
    assert_eq!(bound.min_date(), ymd(2001, 11, 6));
    assert_eq!(bound.max_date(), ymd(2024, 5, 1));
    assert!(!view.action_enabled);
    assert!(!view.placeholder_shown);

    assert!(session.select_date("2010-01-01"));
    assert!(session.view().action_enabled);

    let target = session.travel().await.expect("Travel failed");
    let expected = format!("{}/w/index.php?&oldid=335133917", mock_server.uri());
    assert_eq!(target, expected);
    assert_eq!(session.tab().navigated, vec![expected]);
}

#[tokio::test]
async fn test_not_a_page_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server, "https://google.com");
    let state = session.load().await.expect("Classification never fails");

    assert_eq!(state, &SessionState::NotAPage);
    assert!(session.view().placeholder_shown);
    assert!(session.view().title.is_none());
    assert!(matches!(
        session.travel().await,
        Err(TravelError::NotReady)
    ));
    assert!(session.tab().navigated.is_empty());
}

#[tokio::test]
async fn test_oldid_url_resolves_then_bounds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("revids", "1190893509"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"698": {"pageid": 698, "ns": 0, "title": "Atlantic Ocean"}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("rvdir", "newer"))
        .and(query_param("titles", "Atlantic_Ocean"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(revisions_body(
                "Atlantic Ocean",
                233194,
                "2001-10-06T09:02:11Z",
            )),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(
        &mock_server,
        "https://en.wikipedia.org/w/index.php?&oldid=1190893509",
    );
    session.load().await.expect("Session failed to load");

    let (page, bound) = session.state().page().expect("Page state expected");
    assert_eq!(page.title, "Atlantic Ocean");
    assert_eq!(page.language_code, "en");
    assert_eq!(bound.min_date(), ymd(2001, 10, 6));
}

#[tokio::test]
async fn test_failed_first_revision_keeps_action_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(missing_page_body("Earth")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server, "https://en.wikipedia.org/wiki/Earth");
    let result = session.load().await;

    assert!(matches!(result, Err(TravelError::Lookup(_))));
    assert!(matches!(session.state(), SessionState::Failed { .. }));
    assert!(session.view().title.is_none());
    assert_eq!(session.view().errors.len(), 1);
    assert!(!session.view().action_enabled);

    assert!(!session.select_date("2010-01-01"));
    assert!(!session.view().action_enabled);
    assert!(matches!(
        session.travel().await,
        Err(TravelError::NotReady)
    ));
}

#[tokio::test]
async fn test_failed_resolution_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server, "https://en.wikipedia.org/w/index.php?oldid=7");
    let result = session.load().await;

    assert!(matches!(result, Err(TravelError::Resolution(_))));
    assert!(session.state().is_terminal());
    assert_eq!(session.view().errors.len(), 1);
}

#[tokio::test]
async fn test_date_gate() {
    let mock_server = MockServer::start().await;
    mount_earth_first_revision(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("rvstart", "2001-11-05T23:59:59.999Z"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server, "https://en.wikipedia.org/wiki/Earth");
    session.load().await.expect("Session failed to load");

    assert!(session.select_date("2001-11-06"));
    assert!(session.select_date("2024-05-01"));
    assert!(!session.select_date("2024-05-02"));
    assert!(!session.select_date(""));
    assert!(matches!(
        session.travel().await,
        Err(TravelError::NoDateSelected)
    ));

    assert!(!session.select_date("2001-11-05"));
    assert!(!session.view().action_enabled);
    match session.travel().await {
        Err(TravelError::InvalidDateSelection { selected, min, max }) => {
            assert_eq!(selected, ymd(2001, 11, 5));
            assert_eq!(min, ymd(2001, 11, 6));
            assert_eq!(max, ymd(2024, 5, 1));
        }
        other => panic!("Expected invalid selection, got {:?}", other),
    }
    assert!(session.tab().navigated.is_empty());
}

#[tokio::test]
async fn test_failed_point_lookup_does_not_navigate() {
    let mock_server = MockServer::start().await;
    mount_earth_first_revision(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("rvstart", "2015-06-01T23:59:59.999Z"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server, "https://en.wikipedia.org/wiki/Earth");
    session.load().await.expect("Session failed to load");
    session.select_date("2015-06-01");

    let result = session.travel().await;
    assert!(matches!(result, Err(TravelError::Lookup(_))));
    assert!(session.tab().navigated.is_empty());
    assert_eq!(session.view().errors.len(), 1);
}

#[tokio::test]
async fn test_session_without_pinned_today_ends_at_current_date() {
    let mock_server = MockServer::start().await;
    mount_earth_first_revision(&mock_server).await;

    let tab = RecordingTab {
        url: "https://en.wikipedia.org/wiki/Earth".to_string(),
        ..RecordingTab::default()
    };
    let mut session = Session::new(client_for(&mock_server), tab, RecordingView::default());

    let before = Utc::now().date_naive();
    session.load().await.expect("Session failed to load");
    let after = Utc::now().date_naive();

    let bound = session.view().bound.expect("Bound not shown");
    assert_eq!(bound.min_date(), ymd(2001, 11, 6));
    assert!(bound.max_date() == before || bound.max_date() == after);
}
