/// Integration tests for the HubSpot client with mocked HTTP responses.
/// Tests the CRM calls the create-pet flow depends on without hitting the
/// real platform.
use pet_sync_api::crm_client::HubSpotClient;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> HubSpotClient {
    HubSpotClient::new(mock_server.uri(), "test_token".to_string())
        .expect("client construction should not fail")
}

#[tokio::test]
async fn test_create_pet_returns_external_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/pets"))
        .and(header("Authorization", "Bearer test_token"))
        // Age is stringified on the wire; the CRM stores properties as text
        .and(body_partial_json(serde_json::json!({
            "properties": {
                "name": "Ella",
                "age": "1",
                "breed": "Pelo Curto Brasileiro",
                "contactId": "44671233162"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "512",
            "properties": { "name": "Ella" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .create_pet("Ella", 1, "Pelo Curto Brasileiro", "44671233162")
        .await;

    assert_eq!(result.unwrap(), "512");
}

#[tokio::test]
async fn test_create_pet_accepts_numeric_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/pets"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 98765 })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.create_pet("Rex", 4, "Labrador", "123").await;

    assert_eq!(result.unwrap(), "98765");
}

#[tokio::test]
async fn test_create_pet_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/pets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.create_pet("Rex", 4, "Labrador", "123").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_create_pet_response_without_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/pets"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "status": "ok" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.create_pet("Rex", 4, "Labrador", "123").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_contact_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/44671233162"))
        .and(query_param("properties", "firstname,lastname,email"))
        .and(header("Authorization", "Bearer test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "44671233162",
            "properties": {
                "firstname": "Joao",
                "lastname": "da Silva",
                "email": "joao@example.com"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let contact = client.get_contact("44671233162").await.unwrap();

    assert_eq!(contact.id, "44671233162");
    assert_eq!(contact.firstname, "Joao");
    assert_eq!(contact.lastname, "da Silva");
    assert_eq!(contact.email, "joao@example.com");
}

#[tokio::test]
async fn test_get_contact_missing_properties_default_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/777"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "777" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let contact = client.get_contact("777").await.unwrap();

    assert_eq!(contact.id, "777");
    assert_eq!(contact.firstname, "");
    assert_eq!(contact.lastname, "");
    assert_eq!(contact.email, "");
}

#[tokio::test]
async fn test_get_contact_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/0"))
        .respond_with(ResponseTemplate::new(404).set_body_string("contact not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_contact("0").await;

    assert!(result.is_err());
}
