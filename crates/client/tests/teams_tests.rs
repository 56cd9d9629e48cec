//! Team endpoint tests.
//!
//! This module tests the team accessor methods:
//! - Listing, creating, fetching, updating, and deleting teams
//! - Team membership operations on the nested users path
//!
//! # Invariants
//! - Embedded users decode one level deep, never recursively
//! - Membership operations accept a user reference by identifier or email

mod common;

use chartio_client::{CreateTeamParams, UpdateTeamParams};
use common::*;

#[tokio::test]
async fn test_list_teams() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("teams/list_teams.json");

    Mock::given(method("GET"))
        .and(path("/v1/acme/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let collection = client.list_teams().await.unwrap();

    assert_eq!(collection.count, 2);
    assert_eq!(collection.teams[0].name, "Data Engineering");
    assert!(collection.teams[1].is_owner);

    let embedded = collection.teams[0].embedded.as_ref().expect("embedded users");
    assert_eq!(embedded.count, 1);
    assert_eq!(embedded.users[0].email, "ada@acme.com");
    assert_eq!(collection.teams[1].embedded, None);
}

#[tokio::test]
async fn test_create_team() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("teams/create_team.json");

    Mock::given(method("POST"))
        .and(path("/v1/acme/teams"))
        .and(body_json(serde_json::json!({"name": "Analysts"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let params = CreateTeamParams {
        name: "Analysts".to_string(),
    };
    let team = client.create_team(&params).await.unwrap();

    assert_eq!(team.id, 9);
    assert_eq!(team.name, "Analysts");
    let embedded = team.embedded.expect("embedded users");
    assert_eq!(embedded.count, 0);
    assert!(embedded.users.is_empty());
}

#[tokio::test]
async fn test_get_team() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("teams/get_team.json");

    Mock::given(method("GET"))
        .and(path("/v1/acme/teams/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let team = client.get_team("5").await.unwrap();

    assert_eq!(team.id, 5);
    assert_eq!(
        team.updated_at,
        Some(Timestamp::parse("2024-02-01T12:00:00.25").unwrap())
    );
    let embedded = team.embedded.expect("embedded users");
    assert_eq!(embedded.count, 2);
    assert_eq!(embedded.users[1].email, "grace@acme.com");
}

#[tokio::test]
async fn test_update_team() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("teams/update_team.json");

    Mock::given(method("PATCH"))
        .and(path("/v1/acme/teams/5"))
        .and(body_json(serde_json::json!({"name": "Platform Engineering"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let params = UpdateTeamParams {
        name: Some("Platform Engineering".to_string()),
    };
    let team = client.update_team("5", &params).await.unwrap();

    assert_eq!(team.name, "Platform Engineering");
}

#[tokio::test]
async fn test_delete_team() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/acme/teams/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    assert!(client.delete_team("5").await.is_ok());
}

#[tokio::test]
async fn test_add_team_user_by_id() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("teams/add_team_user.json");

    Mock::given(method("PATCH"))
        .and(path("/v1/acme/teams/5/users"))
        .and(body_json(serde_json::json!({"id": "11"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let team = client
        .add_team_user("5", &UserRef::Id("11".to_string()))
        .await
        .unwrap();

    let embedded = team.embedded.expect("embedded users");
    assert_eq!(embedded.count, 2);
    assert_eq!(embedded.users[1].email, "margaret@acme.com");
}

#[tokio::test]
async fn test_add_team_user_by_email() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("teams/add_team_user.json");

    Mock::given(method("PATCH"))
        .and(path("/v1/acme/teams/5/users"))
        .and(body_json(serde_json::json!({"email": "margaret@acme.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .add_team_user("5", &UserRef::Email("margaret@acme.com".to_string()))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_team_user_by_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/acme/teams/5/users/x@y.com"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .delete_team_user("5", &UserRef::Email("x@y.com".to_string()))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_team_user_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/acme/teams/5/users/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .delete_team_user("5", &UserRef::Id("7".to_string()))
        .await;

    assert!(result.is_ok());
}
