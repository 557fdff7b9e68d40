use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use volunteer_portal::error::{Error, ErrorKind};
use volunteer_portal::events::{Event, EventFieldEdit, EditorHost, Shift};
use volunteer_portal::messages::Severity;
use volunteer_portal::Portal;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingHost {
    loading: Mutex<Vec<bool>>,
    refreshes: AtomicUsize,
    deselects: AtomicUsize,
}

#[async_trait]
impl EditorHost for RecordingHost {
    fn set_loading(&self, loading: bool) {
        self.loading.lock().unwrap().push(loading);
    }

    async fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }

    fn deselect(&self) {
        self.deselects.fetch_add(1, Ordering::SeqCst);
    }
}

fn food_drive() -> Event {
    Event {
        event_id: 3,
        name: "Food Drive".to_string(),
        description: "Sorting donations".to_string(),
        address: "1 Main St".to_string(),
        transport: "Square One".to_string(),
        active: true,
        shifts: vec![Arc::new(Shift {
            shift_id: 30,
            shift_num: 1,
            date: Some("2018-06-01".to_string()),
            start_time: "09:00:00".to_string(),
            end_time: "12:00:00".to_string(),
            max_spots: 5,
            spots_taken: 1,
            meals: Default::default(),
            notes: String::new(),
            signed_up: false,
        })],
    }
}

fn portal(server: &MockServer) -> Portal {
    let portal = Portal::new(&server.uri()).unwrap();
    portal.tokens().set("admin-token");
    portal
}

#[tokio::test]
async fn test_submit_success_notifies_and_refreshes() {
    let server = MockServer::start().await;
    let portal = portal(&server);

    Mock::given(method("POST"))
        .and(path("/api/events/3"))
        .and(header("Authorization", "Bearer admin-token"))
        .and(body_json(json!({
            "name": "Bake Sale",
            "description": "Sorting donations",
            "address": "1 Main St",
            "transport": "Square One",
            "active": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": "Event updated" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut editor = portal.edit_event(food_drive());
    editor.set_field(EventFieldEdit::Name("Bake Sale".to_string()));

    let host = RecordingHost::default();
    let result = editor.submit(&host).await;

    assert_eq!(result.unwrap(), "Event updated");
    assert_eq!(host.refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(host.deselects.load(Ordering::SeqCst), 0);
    assert_eq!(*host.loading.lock().unwrap(), vec![true, false]);
    assert!(!editor.is_busy());

    let messages = portal.messages().list();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "Event updated");
    assert_eq!(messages[0].severity, Severity::Positive);
}

#[tokio::test]
async fn test_submit_rejection_notifies_with_details() {
    let server = MockServer::start().await;
    let portal = portal(&server);

    Mock::given(method("POST"))
        .and(path("/api/events/3"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": "Name taken", "details": "duplicate" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let editor = portal.edit_event(food_drive());
    let host = RecordingHost::default();
    let err = editor.submit(&host).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Rejected);
    assert_eq!(err.details(), Some("duplicate"));
    assert_eq!(host.refreshes.load(Ordering::SeqCst), 0);
    assert_eq!(*host.loading.lock().unwrap(), vec![true, false]);

    let messages = portal.messages().list();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "Name taken");
    assert_eq!(messages[0].more.as_deref(), Some("duplicate"));
    assert_eq!(messages[0].severity, Severity::Negative);
}

#[tokio::test]
async fn test_submit_without_token_stays_local() {
    let server = MockServer::start().await;
    let portal = Portal::new(&server.uri()).unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": "nope" })))
        .expect(0)
        .mount(&server)
        .await;

    let editor = portal.edit_event(food_drive());
    let host = RecordingHost::default();
    let err = editor.submit(&host).await.unwrap_err();

    assert!(matches!(err, Error::Unauthorized));
    assert_eq!(*host.loading.lock().unwrap(), vec![true, false]);
    assert_eq!(portal.messages().list()[0].message, "Not authorized");
}

#[tokio::test]
async fn test_transport_failure_clears_loading() {
    // Nothing listens on port 9
    let portal = Portal::new("http://127.0.0.1:9").unwrap();
    portal.tokens().set("admin-token");

    let editor = portal.edit_event(food_drive());
    let host = RecordingHost::default();
    let err = editor.submit(&host).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(*host.loading.lock().unwrap(), vec![true, false]);
    assert_eq!(portal.messages().list()[0].severity, Severity::Negative);
}

#[tokio::test]
async fn test_delete_deselects_after_refresh() {
    let server = MockServer::start().await;
    let portal = portal(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/events/3"))
        .and(header("Authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": "Event deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    let editor = portal.edit_event(food_drive());
    let host = RecordingHost::default();

    assert_eq!(editor.delete(&host).await.unwrap(), "Event deleted");
    assert_eq!(host.refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(host.deselects.load(Ordering::SeqCst), 1);
    assert_eq!(portal.messages().list()[0].message, "Event deleted");
}

#[tokio::test]
async fn test_failed_delete_does_not_deselect() {
    let server = MockServer::start().await;
    let portal = portal(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/events/3"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "Admins only" })))
        .mount(&server)
        .await;

    let editor = portal.edit_event(food_drive());
    let host = RecordingHost::default();

    let err = editor.delete(&host).await.unwrap_err();
    assert_eq!(err.to_string(), "Admins only");
    assert_eq!(host.deselects.load(Ordering::SeqCst), 0);
    assert!(portal.messages().list()[0].more.is_none());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_rejected() {
    let server = MockServer::start().await;
    let portal = portal(&server);

    Mock::given(method("POST"))
        .and(path("/api/events/3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": "Event updated" }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let editor = portal.edit_event(food_drive());
    let host = RecordingHost::default();

    let (first, second) = tokio::join!(editor.submit(&host), editor.submit(&host));

    assert!(first.is_ok());
    assert!(matches!(second, Err(Error::Busy)));
    assert_eq!(*host.loading.lock().unwrap(), vec![true, false]);
    assert_eq!(portal.messages().len(), 1);
}

#[tokio::test]
async fn test_list_events() {
    let server = MockServer::start().await;
    let portal = portal(&server);

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "event_id": 3,
                "name": "Food Drive",
                "description": "Sorting donations",
                "address": "1 Main St",
                "transport": "",
                "active": true,
                "shifts": [{
                    "shift_id": 30,
                    "shift_num": 1,
                    "date": "2018-06-01",
                    "start_time": "09:00:00",
                    "end_time": "12:00:00",
                    "max_spots": 5,
                    "spots_taken": 5,
                    "meals": ["lunch", "snack"],
                    "notes": "Wear closed-toe shoes",
                    "signed_up": false
                }]
            }]
        })))
        .mount(&server)
        .await;

    let events = portal.events().list().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].shifts[0].meals.len(), 2);
    assert!(events[0].is_full());
}
