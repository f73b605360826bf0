// profile-core/profile-core-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use profile_core_client::domain::user_profiles::services::UserProfileService;
use profile_core_client::dtos::ProfileField;
use profile_core_client::infra::user_profile::{
    FirestoreConfig, FirestoreError, FirestoreUserProfileService,
};
use profile_core_client::user_id;

use crate::tests::async_test;

const DOCUMENT_PATH: &str = "/v1/projects/demo/databases/(default)/documents/users/u1";

fn service(server: &MockServer) -> FirestoreUserProfileService {
    FirestoreUserProfileService::new(FirestoreConfig {
        base_url: Url::parse(&format!("{}/v1", server.uri())).unwrap(),
        ..FirestoreConfig::new("demo")
    })
}

#[async_test]
async fn test_loads_document() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DOCUMENT_PATH))
        .and(header("authorization", "Bearer id-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/demo/databases/(default)/documents/users/u1",
            "fields": {
                "name": { "stringValue": "Jane Doe" },
                "userBio": { "stringValue": "Hello" },
                "userBirthday": { "stringValue": "March 3, 1990" },
                "userVerification": { "booleanValue": true },
                "followers": { "integerValue": "42" }
            },
            "createTime": "2021-09-06T10:00:00.000000Z",
            "updateTime": "2021-09-06T10:00:00.000000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server);
    service.set_id_token(Some(SecretString::new("id-token".to_string())));

    let document = service
        .load_profile_document("users", &user_id!("u1"))
        .await?
        .expect("Expected a document");

    assert_eq!(document.len(), 5);
    assert_eq!(document.string(ProfileField::Name), "Jane Doe");
    assert_eq!(document.string(ProfileField::UserBio), "Hello");
    assert_eq!(document.string(ProfileField::UserBirthday), "March 3, 1990");
    assert_eq!(document.get(ProfileField::UserVerification), Some(&json!(true)));
    assert_eq!(document.string(ProfileField::UserVerification), "");

    Ok(())
}

#[async_test]
async fn test_sends_no_authorization_without_token() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DOCUMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/demo/databases/(default)/documents/users/u1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let document = service(&server)
        .load_profile_document("users", &user_id!("u1"))
        .await?;

    assert_eq!(document.map(|document| document.is_empty()), Some(true));

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));

    Ok(())
}

#[async_test]
async fn test_missing_document_is_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DOCUMENT_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "status": "NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    let document = service(&server)
        .load_profile_document("users", &user_id!("u1"))
        .await?;

    assert_eq!(document, None);
    Ok(())
}

#[async_test]
async fn test_server_error_is_propagated() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service(&server)
        .load_profile_document("users", &user_id!("u1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FirestoreError>(),
        Some(FirestoreError::Status(status)) if status.as_u16() == 500
    ));

    Ok(())
}

#[async_test]
async fn test_malformed_body_is_an_error() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{"))
        .mount(&server)
        .await;

    let result = service(&server)
        .load_profile_document("users", &user_id!("u1"))
        .await;

    assert!(matches!(
        result.as_ref().map_err(|err| err.downcast_ref::<FirestoreError>()),
        Err(Some(FirestoreError::Http(_)))
    ));

    Ok(())
}
