#![allow(clippy::unwrap_used)]
// Integration tests for the gateway domain clients using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pgdesk_api::rooms::RoomsClient;
use pgdesk_api::tenants::TenantsClient;
use pgdesk_api::tickets::TicketsClient;
use pgdesk_api::{Error, TokenHolder};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Url, TokenHolder) {
    let server = MockServer::start().await;
    let url = Url::parse(&server.uri()).unwrap();
    (server, url, TokenHolder::new())
}

fn room_json(id: i64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "3-sharing",
        "capacity": 3,
        "occupied": 2,
        "price": 5500.0,
        "status": status,
    })
}

// ── Bearer attachment ───────────────────────────────────────────────

#[tokio::test]
async fn attaches_bearer_header_when_token_held() {
    let (server, url, token) = setup().await;
    token.set(SecretString::from("tok-abc".to_owned()));
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.list(None).await.unwrap();
}

#[tokio::test]
async fn omits_bearer_header_when_no_token() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    // Any request carrying an Authorization header must NOT match.
    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client.list(None).await.unwrap();
}

// ── Collection-root path ────────────────────────────────────────────

#[tokio::test]
async fn collection_root_requests_carry_no_trailing_slash() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    // The services map the exact route; a slashed variant is a 404.
    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([room_json(1, "A1", "FULL")])))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = client.list(None).await.unwrap();
    assert_eq!(rooms.len(), 1);
}

// ── List + query filter ─────────────────────────────────────────────

#[tokio::test]
async fn list_passes_query_filter() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .and(query_param("q", "A1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([room_json(1, "A1", "FULL")])),
        )
        .mount(&server)
        .await;

    let rooms = client.list(Some("A1")).await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "A1");
    assert_eq!(rooms[0].status.as_deref(), Some("FULL"));
}

#[tokio::test]
async fn list_quarantines_malformed_elements() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    // Middle element is missing required fields; the other two survive.
    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            room_json(1, "A1", "FULL"),
            { "garbage": true },
            room_json(2, "A2", "AVAILABLE"),
        ])))
        .mount(&server)
        .await;

    let rooms = client.list(None).await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, 1);
    assert_eq!(rooms[1].id, 2);
}

// ── Error handling ──────────────────────────────────────────────────

#[tokio::test]
async fn extracts_server_message_from_error_body() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms/7"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Room 7 not found" })),
        )
        .mount(&server)
        .await;

    let err = client.get(7).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.server_message(), "Room 7 not found");
}

#[tokio::test]
async fn long_multibyte_non_json_body_reports_not_panics() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    // A proxy error page: 2xx, non-JSON, >200 bytes of multibyte text.
    let body = "\u{2026}".repeat(100);
    Mock::given(method("GET"))
        .and(path("/roomsmicroservice/rooms/7"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let err = client.get(7).await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn unauthorized_maps_to_dedicated_variant() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    Mock::given(method("DELETE"))
        .and(path("/roomsmicroservice/rooms/3"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.delete(3).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
}

// ── Echo-optional create ────────────────────────────────────────────

#[tokio::test]
async fn create_with_empty_body_yields_none() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    Mock::given(method("POST"))
        .and(path("/roomsmicroservice/rooms"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let payload = pgdesk_api::rooms::RoomRequest {
        name: "D1".into(),
        sharing_type: "2-sharing".into(),
        capacity: 2,
        occupied: 0,
        price: 7000.0,
    };
    let echo = client.create(&payload).await.unwrap();
    assert!(echo.is_none());
}

// ── Domain verbs ────────────────────────────────────────────────────

#[tokio::test]
async fn ticket_status_patch_sends_wire_enum() {
    let (server, url, token) = setup().await;
    let client = TicketsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    Mock::given(method("PATCH"))
        .and(path("/ticketssmicroservice/tickets/5/status"))
        .and(body_json(json!({ "status": "IN_PROGRESS" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "ticketId": "TCK-0005",
            "title": "Leaking tap",
            "room": "B1",
            "priority": "HIGH",
            "description": "kitchen",
            "status": "IN_PROGRESS",
            "createdAt": "2026-08-01T10:00:00Z",
        })))
        .mount(&server)
        .await;

    let ticket = client.update_status(5, "IN_PROGRESS").await.unwrap();
    assert_eq!(ticket.status, "IN_PROGRESS");
    assert_eq!(ticket.ticket_id.as_deref(), Some("TCK-0005"));
}

#[tokio::test]
async fn tenant_export_returns_raw_csv_bytes() {
    let (server, url, token) = setup().await;
    let client = TenantsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    let csv = "id,name,room\n1,Rahul Sharma,A1\n";
    Mock::given(method("GET"))
        .and(path("/tenantsmicroservice/tenants/export"))
        .and(query_param("q", "rahul"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(csv, "text/csv"),
        )
        .mount(&server)
        .await;

    let bytes = client.export_csv(Some("rahul")).await.unwrap();
    assert_eq!(bytes.as_ref(), csv.as_bytes());
}

#[tokio::test]
async fn allocate_replaces_with_server_echo() {
    let (server, url, token) = setup().await;
    let client = RoomsClient::with_client(&url, reqwest::Client::new(), token).unwrap();

    Mock::given(method("POST"))
        .and(path("/roomsmicroservice/rooms/2/allocate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json(2, "A2", "FULL")))
        .mount(&server)
        .await;

    let room = client.allocate(2).await.unwrap();
    assert_eq!(room.id, 2);
    assert_eq!(room.status.as_deref(), Some("FULL"));
}
