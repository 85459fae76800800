//! Integration tests for the ContactApiClient using mockito for HTTP mocking.

use contact_manager::{ClientError, ContactApiClient, ContactForm};
use mockito::{Matcher, Server};
use serde_json::json;

const ADA_ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

fn ada_json() -> serde_json::Value {
    json!({
        "_id": ADA_ID,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "123-456-7890",
        "message": "",
        "createdAt": "2024-01-12T10:30:00.000Z"
    })
}

#[test]
fn test_get_contacts() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/contacts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "count": 1,
                "data": [ada_json()]
            })
            .to_string(),
        )
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let contacts = client.get_contacts().unwrap();

    mock.assert();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id.as_str(), ADA_ID);
    assert_eq!(contacts[0].name, "Ada Lovelace");
    assert_eq!(client.metrics().contacts_fetched_total(), 1);
}

#[test]
fn test_get_contacts_missing_message_defaults_empty() {
    let mut server = Server::new();

    let mut contact = ada_json();
    contact.as_object_mut().unwrap().remove("message");

    let mock = server
        .mock("GET", "/contacts")
        .with_status(200)
        .with_body(json!({ "success": true, "count": 1, "data": [contact] }).to_string())
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let contacts = client.get_contacts().unwrap();

    mock.assert();
    assert_eq!(contacts[0].message, "");
}

#[test]
fn test_create_contact() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contacts")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "123-456-7890",
            "message": "Hi"
        })))
        .with_status(201)
        .with_body(
            json!({
                "success": true,
                "message": "Contact created successfully",
                "data": ada_json()
            })
            .to_string(),
        )
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let form = ContactForm::new("Ada Lovelace", "ada@example.com", "123-456-7890").with_message("Hi");
    let contact = client.create_contact(&form).unwrap();

    mock.assert();
    assert_eq!(contact.id.as_str(), ADA_ID);
    assert_eq!(client.metrics().contacts_created_total(), 1);
}

#[test]
fn test_create_contact_surfaces_server_message() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contacts")
        .with_status(400)
        .with_body(
            json!({
                "success": false,
                "message": "Please provide name, email, and phone"
            })
            .to_string(),
        )
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let err = client.create_contact(&ContactForm::default()).unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::InvalidRequest(_)));
    assert_eq!(
        err.server_message(),
        Some("Please provide name, email, and phone")
    );
    assert_eq!(client.metrics().http_errors_total(), 1);
    assert_eq!(client.metrics().contacts_created_total(), 0);
}

#[test]
fn test_delete_contact() {
    let mut server = Server::new();

    let mock = server
        .mock("DELETE", format!("/contacts/{}", ADA_ID).as_str())
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "message": "Contact deleted successfully",
                "data": { "id": ADA_ID }
            })
            .to_string(),
        )
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    client.delete_contact(ADA_ID).unwrap();

    mock.assert();
    assert_eq!(client.metrics().contacts_deleted_total(), 1);
}

#[test]
fn test_delete_contact_not_found() {
    let mut server = Server::new();

    let mock = server
        .mock("DELETE", format!("/contacts/{}", ADA_ID).as_str())
        .with_status(404)
        .with_body(json!({ "success": false, "message": "Contact not found" }).to_string())
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let err = client.delete_contact(ADA_ID).unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::NotFound(ref m) if m == "Contact not found"));
}

#[test]
fn test_delete_contact_encodes_id() {
    let mut server = Server::new();

    let mock = server
        .mock("DELETE", "/contacts/a%20b")
        .with_status(400)
        .with_body(json!({ "success": false, "message": "Invalid contact ID" }).to_string())
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let err = client.delete_contact("a b").unwrap_err();

    mock.assert();
    assert_eq!(err.server_message(), Some("Invalid contact ID"));
}

#[test]
fn test_server_error_status() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/contacts")
        .with_status(500)
        .with_body(
            json!({
                "success": false,
                "message": "Server error",
                "error": "Storage error: disk full"
            })
            .to_string(),
        )
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let err = client.get_contacts().unwrap_err();

    mock.assert();
    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Server error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_non_json_error_body_is_kept() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/contacts")
        .with_status(502)
        .with_body("Bad Gateway")
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let err = client.get_contacts().unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::ApiError { status: 502, ref message } if message == "Bad Gateway"));
}

#[test]
fn test_invalid_json_response() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/contacts")
        .with_status(200)
        .with_body("not json")
        .create();

    let client = ContactApiClient::with_base_url(server.url());
    let err = client.get_contacts().unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::JsonError(_)));
}

#[test]
fn test_connection_failure() {
    // Nothing listens on port 1.
    let client = ContactApiClient::with_base_url("http://127.0.0.1:1/api");
    let err = client.get_contacts().unwrap_err();

    assert!(matches!(err, ClientError::HttpError(_)));
    assert_eq!(err.server_message(), None);
    assert_eq!(client.metrics().http_errors_total(), 1);
}
