#![allow(clippy::unwrap_used)]
// End-to-end container tests: Console -> gateway clients -> wiremock,
// asserting the reconciliation visible through the Store.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use secrecy::ExposeSecret;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pgdesk_core::{
    Console, Credentials, CredentialStore, GatewayConfig, MemoryCredentialStore, NoticeDraft,
    RoomDraft, TenantDraft, TicketStatus,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Console, Arc<MemoryCredentialStore>) {
    let server = MockServer::start().await;
    let credentials = Arc::new(MemoryCredentialStore::new());
    let config = GatewayConfig {
        url: Url::parse(&server.uri()).unwrap(),
        timeout: Duration::from_secs(5),
        insecure: false,
    };
    let console = Console::new(&config, Arc::clone(&credentials) as Arc<dyn CredentialStore>)
        .unwrap();
    (server, console, credentials)
}

// ── Fallback policy ─────────────────────────────────────────────────

#[tokio::test]
async fn empty_room_list_substitutes_the_demo_fallback() {
    let (server, console, _) = setup().await;

    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    console.fetch_rooms(None).await.unwrap();

    let state = console.store().rooms_snapshot();
    let ids: Vec<i64> = state.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, [1000, 2000, 3000, 4000]);
    let labels: Vec<&str> = state.items.iter().map(|r| r.status.label()).collect();
    assert_eq!(labels, ["Full", "Available", "Full", "Available"]);
    // Empty-success: fallback shown, but no error banner.
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn failed_room_fetch_records_error_and_falls_back() {
    let (server, console, _) = setup().await;

    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "message": "rooms service down" })),
        )
        .mount(&server)
        .await;

    let result = console.fetch_rooms(None).await;
    assert!(result.is_err());

    let state = console.store().rooms_snapshot();
    assert_eq!(state.error.as_deref(), Some("rooms service down"));
    // Cache was empty, so the fallback keeps the console usable.
    assert_eq!(state.items.len(), 4);
}

#[tokio::test]
async fn empty_ticket_list_stays_empty() {
    let (server, console, _) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ticketssmicroservice/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    console.fetch_tickets(None).await.unwrap();
    assert!(console.store().tickets_snapshot().items.is_empty());
}

// ── Create / reconcile ──────────────────────────────────────────────

#[tokio::test]
async fn created_tenant_is_prepended_with_a_generated_id() {
    let (server, console, _) = setup().await;

    Mock::given(method("GET"))
        .and(path("/tenantsmicroservice/tenants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    // Service acknowledges without echoing the created entity.
    Mock::given(method("POST"))
        .and(path("/tenantsmicroservice/tenants"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    console.fetch_tenants(None).await.unwrap();
    let before = console.store().tenants_snapshot().items.len();

    let created = console
        .create_tenant(TenantDraft {
            tenant_id: None,
            name: "Asha Iyer".into(),
            phone: "9XXXXXXXX4".into(),
            room: "C1".into(),
            check_in: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            due: 0.0,
        })
        .await
        .unwrap()
        .expect("validation should pass");

    // Generated id: `T` + six digits.
    assert_eq!(created.tenant_id.len(), 7);
    assert!(created.tenant_id.starts_with('T'));
    assert!(created.tenant_id[1..].chars().all(|c| c.is_ascii_digit()));

    let state = console.store().tenants_snapshot();
    assert_eq!(state.items.len(), before + 1);
    assert_eq!(state.items[0].name, "Asha Iyer");
}

#[tokio::test]
async fn blank_room_name_aborts_silently_before_any_request() {
    let (server, console, _) = setup().await;

    Mock::given(method("POST"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = console
        .create_room(RoomDraft {
            name: "   ".into(),
            sharing_type: "2-sharing".into(),
            capacity: 2,
            occupied: 0,
            price: 6000.0,
        })
        .await
        .unwrap();

    assert!(outcome.is_none());
    let state = console.store().rooms_snapshot();
    assert!(state.error.is_none());
    assert!(!state.saving);
    assert!(state.items.is_empty());
}

// ── Domain verbs ────────────────────────────────────────────────────

#[tokio::test]
async fn ticket_status_change_replaces_in_place_and_reissues_freely() {
    let (server, console, _) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ticketssmicroservice/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 5,
            "ticketId": "TCK-0005",
            "title": "Leaking tap",
            "room": "B1",
            "priority": "HIGH",
            "description": "kitchen sink",
            "status": "OPEN",
            "createdAt": "2026-08-01T10:00:00Z",
        }])))
        .mount(&server)
        .await;
    // No transition guard: the same call twice still hits the wire twice.
    Mock::given(method("PATCH"))
        .and(path("/ticketssmicroservice/tickets/5/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "ticketId": "TCK-0005",
            "title": "Leaking tap",
            "room": "B1",
            "priority": "HIGH",
            "description": "kitchen sink",
            "status": "CLOSED",
            "createdAt": "2026-08-01T10:00:00Z",
        })))
        .expect(2)
        .mount(&server)
        .await;

    console.fetch_tickets(None).await.unwrap();
    console
        .update_ticket_status(5, &TicketStatus::Closed)
        .await
        .unwrap();

    let state = console.store().tickets_snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].status, TicketStatus::Closed);
    assert_eq!(state.items[0].status.label(), "Closed");

    // Repeat: state-wise a no-op, but the request is still issued.
    console
        .update_ticket_status(5, &TicketStatus::Closed)
        .await
        .unwrap();
    assert_eq!(
        console.store().tickets_snapshot().items[0].status,
        TicketStatus::Closed
    );
}

#[tokio::test]
async fn notice_create_prepends_a_uuid_entity() {
    let (server, console, _) = setup().await;

    Mock::given(method("GET"))
        .and(path("/noticessmicroservice/notices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/noticessmicroservice/notices"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    console.fetch_notices().await.unwrap();
    let before = console.store().notices_snapshot().items.len();

    let notice = console
        .create_notice(NoticeDraft {
            title: "Water maintenance on Sunday".into(),
        })
        .await
        .unwrap()
        .expect("validation should pass");

    assert!(uuid::Uuid::parse_str(&notice.notice_id).is_ok());

    let state = console.store().notices_snapshot();
    assert_eq!(state.items.len(), before + 1);
    assert_eq!(state.items[0].title, "Water maintenance on Sunday");
}

#[tokio::test]
async fn retitling_an_uncached_notice_puts_and_appends() {
    let (server, console, _) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/noticessmicroservice/notices/n-404"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    // Nothing fetched yet, so the id is not in the cache.
    let notice = console
        .update_notice("n-404", "Rent due reminder")
        .await
        .unwrap()
        .expect("validation should pass");

    assert_eq!(notice.notice_id, "n-404");
    assert_eq!(notice.title, "Rent due reminder");

    let state = console.store().notices_snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].notice_id, "n-404");
}

// ── Session ─────────────────────────────────────────────────────────

#[tokio::test]
async fn login_writes_the_token_through_and_later_requests_carry_it() {
    let (server, console, credentials) = setup().await;

    Mock::given(method("POST"))
        .and(path("/usermicroservice/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-xyz" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .and(header("authorization", "Bearer jwt-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(!console.is_authenticated());

    console
        .login(Credentials {
            email: "owner@pg.example".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert!(console.is_authenticated());
    assert!(console.store().session_snapshot().authenticated);
    assert_eq!(
        credentials.load().unwrap().unwrap().expose_secret(),
        "jwt-xyz"
    );

    // The holder is read at send time: the next request is authorized.
    console.fetch_rooms(None).await.unwrap();
}

#[tokio::test]
async fn failed_login_leaves_held_state_untouched() {
    let (server, console, credentials) = setup().await;

    Mock::given(method("POST"))
        .and(path("/usermicroservice/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401),
        )
        .mount(&server)
        .await;

    let result = console
        .login(Credentials {
            email: "owner@pg.example".into(),
            password: "wrong".into(),
        })
        .await;

    assert!(result.is_err());
    assert!(!console.is_authenticated());
    assert!(credentials.load().unwrap().is_none());
    let session = console.store().session_snapshot();
    assert!(session.error.is_some());
    assert!(!session.loading);
}

#[tokio::test]
async fn logout_clears_holder_and_durable_slot() {
    let (server, console, credentials) = setup().await;

    Mock::given(method("POST"))
        .and(path("/usermicroservice/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-abc" })))
        .mount(&server)
        .await;

    console
        .login(Credentials {
            email: "owner@pg.example".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();
    assert!(console.is_authenticated());

    console.logout();

    assert!(!console.is_authenticated());
    assert!(credentials.load().unwrap().is_none());
    assert!(!console.store().session_snapshot().authenticated);
}

#[tokio::test]
async fn restored_token_authenticates_the_next_process() {
    let server = MockServer::start().await;
    let credentials = Arc::new(MemoryCredentialStore::new());
    credentials
        .store(&secrecy::SecretString::from("stored-jwt".to_owned()))
        .unwrap();

    let config = GatewayConfig {
        url: Url::parse(&server.uri()).unwrap(),
        timeout: Duration::from_secs(5),
        insecure: false,
    };
    let console =
        Console::new(&config, credentials as Arc<dyn CredentialStore>).unwrap();

    assert!(console.is_authenticated());
    assert!(console.store().session_snapshot().authenticated);
}

// ── Update semantics ────────────────────────────────────────────────

#[tokio::test]
async fn room_update_preserves_list_position() {
    let (server, console, _) = setup().await;

    let rooms = json!([
        { "id": 1, "name": "A1", "type": "3-sharing", "capacity": 3, "occupied": 3, "price": 5500.0, "status": "FULL" },
        { "id": 2, "name": "A2", "type": "3-sharing", "capacity": 3, "occupied": 2, "price": 5500.0, "status": "AVAILABLE" },
        { "id": 3, "name": "B1", "type": "2-sharing", "capacity": 2, "occupied": 2, "price": 6500.0, "status": "FULL" },
    ]);
    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&rooms))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/roomsmicroservice/rooms/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            { "id": 2, "name": "A2-renamed", "type": "3-sharing", "capacity": 3, "occupied": 2, "price": 5800.0, "status": "AVAILABLE" }
        )))
        .mount(&server)
        .await;

    console.fetch_rooms(None).await.unwrap();
    console
        .update_room(
            2,
            RoomDraft {
                name: "A2-renamed".into(),
                sharing_type: "3-sharing".into(),
                capacity: 3,
                occupied: 2,
                price: 5800.0,
            },
        )
        .await
        .unwrap();

    let state = console.store().rooms_snapshot();
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[1].name, "A2-renamed");
    assert_eq!(state.items[1].price, 5800.0);
}

#[tokio::test]
async fn delete_removes_exactly_one_entry() {
    let (server, console, _) = setup().await;

    let rooms = json!([
        { "id": 1, "name": "A1", "type": "3-sharing", "capacity": 3, "occupied": 3, "price": 5500.0, "status": "FULL" },
        { "id": 2, "name": "A2", "type": "3-sharing", "capacity": 3, "occupied": 2, "price": 5500.0, "status": "AVAILABLE" },
    ]);
    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&rooms))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/roomsmicroservice/rooms/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    console.fetch_rooms(None).await.unwrap();
    console.delete_room(1).await.unwrap();

    let state = console.store().rooms_snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);
}

// ── Export ──────────────────────────────────────────────────────────

#[tokio::test]
async fn csv_export_returns_bytes_without_touching_the_cache() {
    let (server, console, _) = setup().await;

    let csv = "tenantId,name\nT001,Rahul Sharma\n";
    Mock::given(method("GET"))
        .and(path("/tenantsmicroservice/tenants/export"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(csv, "text/csv"))
        .mount(&server)
        .await;

    let bytes = console.export_tenants_csv(None).await.unwrap();
    assert_eq!(bytes.as_ref(), csv.as_bytes());
    assert!(console.store().tenants_snapshot().items.is_empty());
    assert!(!console.store().tenants_exporting());
}

#[tokio::test]
async fn export_flag_is_raised_while_the_request_is_in_flight() {
    let (server, console, _) = setup().await;

    let csv = "tenantId,name\nT001,Rahul Sharma\n";
    Mock::given(method("GET"))
        .and(path("/tenantsmicroservice/tenants/export"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(csv, "text/csv")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let mut exporting = console.store().subscribe_tenants_exporting();
    let worker = tokio::spawn({
        let console = console.clone();
        async move { console.export_tenants_csv(None).await }
    });

    // Observable while the delayed response is still pending.
    exporting.wait_for(|up| *up).await.unwrap();
    assert!(console.store().tenants_exporting());

    let bytes = worker.await.unwrap().unwrap();
    assert_eq!(bytes.as_ref(), csv.as_bytes());
    assert!(!console.store().tenants_exporting());
}
