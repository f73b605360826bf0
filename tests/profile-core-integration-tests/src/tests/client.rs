// profile-core/profile-core-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use profile_core_client::dtos::{AppConfig, ProfileDocument, ProfileField};
use profile_core_client::infra::account::StaticAuthenticationService;
use profile_core_client::infra::user_profile::{
    FirestoreConfig, FirestoreUserProfileService, InMemoryUserProfileService,
};
use profile_core_client::test::ConstantTimeProvider;
use profile_core_client::{user_id, Client, ClientEvent};

use crate::tests::async_test;
use crate::tests::helpers::{png_bytes, wait_for, RecordingDelegate};

#[async_test]
async fn test_profile_screen_with_default_image_loader() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/avatars/jane.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(4, 4)))
        .expect(1)
        .mount(&server)
        .await;

    let store = InMemoryUserProfileService::new();
    store.insert(
        "members",
        &user_id!("jane"),
        ProfileDocument::new()
            .with(ProfileField::Name, "Jane Doe")
            .with(
                ProfileField::UserProfileImage,
                format!("{}/avatars/jane.png", server.uri()),
            )
            .with(ProfileField::UserJoined, "September 6, 2021"),
    );

    let delegate = RecordingDelegate::default();
    let events = delegate.events();

    let client = Client::builder()
        .set_authentication_service(StaticAuthenticationService::new(Some(user_id!("jane"))))
        .set_user_profile_service(store)
        .set_time_provider(ConstantTimeProvider::ymd(2024, 5, 1))
        .set_config(AppConfig {
            users_collection: "members".to_string(),
            ..Default::default()
        })
        .set_delegate(Some(Box::new(delegate)))
        .build()?;

    let screen = client.open_profile_screen();
    let mut snapshots = screen.subscribe();

    screen.fetch_user_data().await;
    let snapshot = wait_for(&mut snapshots, |snapshot| snapshot.photo.is_some()).await;

    assert_eq!(snapshot.profile.name, "Jane Doe");
    assert_eq!(
        snapshot.profile.user_joined.known().map(|date| date.to_rfc3339()),
        Some("2021-09-06T00:00:00+00:00".to_string())
    );
    assert_eq!(
        snapshot.photo.as_ref().map(|image| (image.width(), image.height())),
        Some((4, 4))
    );
    assert_eq!(
        *events.lock(),
        vec![ClientEvent::ProfileChanged, ClientEvent::ProfilePhotoChanged]
    );

    Ok(())
}

#[async_test]
async fn test_screens_follow_session_changes() -> Result<()> {
    let auth = Arc::new(StaticAuthenticationService::default());
    let store = Arc::new(InMemoryUserProfileService::new());
    store.insert(
        "users",
        &user_id!("jane"),
        ProfileDocument::new().with(ProfileField::UserName, "jane"),
    );

    let client = Client::builder()
        .set_authentication_service(auth.clone())
        .set_user_profile_service(store.clone())
        .build()?;

    assert_eq!(client.profile.load_user_profile().await?, None);

    auth.sign_in(user_id!("jane"));
    let profile = client.profile.load_user_profile().await?;
    assert_eq!(profile.map(|profile| profile.user_name), Some("jane".to_string()));

    store.remove("users", &user_id!("jane"));
    assert_eq!(client.profile.load_user_profile().await?, None);

    auth.sign_out();
    assert_eq!(client.profile.load_user_profile().await?, None);

    // Screens share the client's services but not their state.
    let first = client.open_profile_screen();
    let second = client.open_profile_screen();
    first.dismiss().await;
    assert!(first.snapshot().is_dismissed);
    assert!(!second.snapshot().is_dismissed);

    Ok(())
}

#[async_test]
async fn test_images_service_rejects_invalid_urls() -> Result<()> {
    let client = Client::builder()
        .set_authentication_service(StaticAuthenticationService::default())
        .set_user_profile_service(InMemoryUserProfileService::new())
        .build()?;

    assert_eq!(client.images.load_image("").await, None);
    assert_eq!(client.images.load_image("data:image/png;base64,AAAA").await, None);

    Ok(())
}

#[async_test]
async fn test_firestore_token_is_updated_after_build() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/demo/databases/(default)/documents/users/jane"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/demo/databases/(default)/documents/users/jane",
            "fields": { "userName": { "stringValue": "jane" } }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let store = Arc::new(FirestoreUserProfileService::new(FirestoreConfig {
        base_url: Url::parse(&format!("{}/v1", server.uri()))?,
        ..FirestoreConfig::new("demo")
    }));

    let client = Client::builder()
        .set_authentication_service(StaticAuthenticationService::new(Some(user_id!("jane"))))
        .set_user_profile_service(store.clone())
        .build()?;

    assert!(client.profile.load_user_profile().await.is_err());

    store.set_id_token(Some(SecretString::new("fresh-token".to_string())));
    let profile = client.profile.load_user_profile().await?;
    assert_eq!(profile.map(|profile| profile.user_name), Some("jane".to_string()));

    Ok(())
}
