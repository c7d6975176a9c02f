use crate::tests::fakes::{DirectoryCall, InMemoryStore, ScriptedDirectory};
use crate::{BootstrapError, UserSyncService, run_bootstrap};

use usync_config::BootstrapConfig;
use usync_core::NewUser;

use googletest::prelude::*;
use serde_json::json;

#[tokio::test]
async fn given_default_config_when_bootstrapping_then_mirrors_three_and_deletes_second() {
    // Given
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default().with_sample_users();
    let svc = UserSyncService::new(store.clone(), directory.clone());

    // When
    let report = run_bootstrap(&svc, &BootstrapConfig::default())
        .await
        .unwrap();

    // Then
    assert_eq!(report.mirrored.len(), 3);
    assert_eq!(report.deleted.len(), 1);
    assert_that!(report.deleted[0].email, eq("janet.weaver@reqres.in"));

    let emails: Vec<String> = store.rows().into_iter().map(|r| r.email).collect();
    assert_eq!(
        emails,
        vec![
            "george.bluth@reqres.in".to_string(),
            "emma.wong@reqres.in".to_string()
        ]
    );
    assert_eq!(
        directory.calls(),
        vec![
            DirectoryCall::Fetch(1),
            DirectoryCall::Fetch(2),
            DirectoryCall::Fetch(3),
            DirectoryCall::Delete(2),
        ]
    );
}

#[tokio::test]
async fn given_rows_from_previous_run_when_bootstrapping_again_then_no_duplicates() {
    // Given
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default().with_sample_users();
    let svc = UserSyncService::new(store.clone(), directory.clone());
    let config = BootstrapConfig {
        delete_ids: vec![],
        ..BootstrapConfig::default()
    };
    run_bootstrap(&svc, &config).await.unwrap();

    // When
    let report = run_bootstrap(&svc, &config).await.unwrap();

    // Then
    assert_eq!(report.mirrored.len(), 3);
    assert_eq!(store.rows().len(), 3);
}

#[tokio::test]
async fn given_disabled_config_when_bootstrapping_then_does_nothing() {
    // Given
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default().with_sample_users();
    let svc = UserSyncService::new(store.clone(), directory.clone());
    let config = BootstrapConfig {
        enabled: false,
        ..BootstrapConfig::default()
    };

    // When
    let report = run_bootstrap(&svc, &config).await.unwrap();

    // Then
    assert!(report.mirrored.is_empty());
    assert!(report.deleted.is_empty());
    assert!(directory.calls().is_empty());
}

#[tokio::test]
async fn given_failing_fetch_when_bootstrapping_then_aborts_with_that_id() {
    // Given
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default().with_sample_users();
    directory.on_fetch(2, 500, json!({"error": "down"}));
    let svc = UserSyncService::new(store.clone(), directory.clone());

    // When
    let result = run_bootstrap(&svc, &BootstrapConfig::default()).await;

    // Then
    match result {
        Err(BootstrapError::Fetch { remote_id, .. }) => assert_that!(remote_id, eq(2)),
        other => panic!("expected Fetch error, got {:?}", other),
    }
    assert_eq!(store.rows().len(), 1);
}

#[tokio::test]
async fn given_unreadable_payload_when_bootstrapping_then_aborts_with_payload_error() {
    // Given
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default();
    directory.on_fetch(1, 200, json!({"data": {"id": 1}}));
    let svc = UserSyncService::new(store.clone(), directory.clone());
    let config = BootstrapConfig {
        enabled: true,
        mirror_ids: vec![1],
        delete_ids: vec![],
    };

    // When
    let result = run_bootstrap(&svc, &config).await;

    // Then
    assert!(matches!(result, Err(BootstrapError::Payload { remote_id: 1, .. })));
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn given_delete_of_unmirrored_id_when_bootstrapping_then_aborts_with_delete_error() {
    // Given
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default().with_sample_users();
    let svc = UserSyncService::new(store.clone(), directory.clone());
    let config = BootstrapConfig {
        enabled: true,
        mirror_ids: vec![1],
        delete_ids: vec![3],
    };

    // When
    let result = run_bootstrap(&svc, &config).await;

    // Then
    assert!(matches!(result, Err(BootstrapError::Delete { remote_id: 3, .. })));
    assert!(!directory.calls().contains(&DirectoryCall::Delete(3)));
}

#[tokio::test]
async fn given_sample_email_created_earlier_when_bootstrapping_then_delete_still_succeeds() {
    // Given: Janet was created through the API under directory id 500
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default().with_sample_users();
    directory.on_create(
        201,
        json!({"name": "Janet", "email": "janet.weaver@reqres.in", "id": "500"}),
    );
    let svc = UserSyncService::new(store.clone(), directory.clone());
    svc.create(&NewUser::new("Janet", "janet.weaver@reqres.in"))
        .await
        .unwrap();

    // When
    let report = run_bootstrap(&svc, &BootstrapConfig::default())
        .await
        .unwrap();

    // Then
    assert_that!(report.deleted[0].email, eq("janet.weaver@reqres.in"));
    let emails: Vec<String> = store.rows().into_iter().map(|r| r.email).collect();
    assert_eq!(
        emails,
        vec![
            "george.bluth@reqres.in".to_string(),
            "emma.wong@reqres.in".to_string()
        ]
    );
}

#[tokio::test]
async fn given_create_that_got_a_sample_id_when_bootstrapping_then_only_mirrored_row_is_deleted() {
    // Given: A regular create that the directory numbered 2
    let store = InMemoryStore::default();
    let directory = ScriptedDirectory::default().with_sample_users();
    directory.on_create(
        201,
        json!({"name": "John Doe", "email": "johndoe@example.com", "id": "2"}),
    );
    let svc = UserSyncService::new(store.clone(), directory.clone());
    svc.create(&NewUser::new("John Doe", "johndoe@example.com"))
        .await
        .unwrap();

    // When
    let report = run_bootstrap(&svc, &BootstrapConfig::default())
        .await
        .unwrap();

    // Then: The newer mirrored Janet goes, John stays reachable under id 2
    assert_that!(report.deleted[0].email, eq("janet.weaver@reqres.in"));
    let john = store
        .rows()
        .into_iter()
        .find(|r| r.email == "johndoe@example.com");
    assert_that!(john.and_then(|r| r.remote_id), some(eq(2)));
    assert_eq!(store.rows().len(), 3);
}
