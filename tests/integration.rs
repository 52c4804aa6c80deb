use std::collections::HashMap;
use std::sync::Arc;

use identity_auth::auth::AuthService;
use identity_auth::error::AuthError;
use identity_auth::identity::{Credential, CredentialRequest, Identity};
use identity_auth::seed::{seed_demo_identities, seed_missing_demo_identities};
use identity_auth::store::{FileStore, MemoryStore, Query, RecordStore};

// Helper to build a service over a freshly seeded in-memory store
async fn seeded_service() -> AuthService<MemoryStore<Identity>> {
    let store = MemoryStore::new();
    seed_demo_identities(&store).await.unwrap();
    AuthService::new(store)
}

#[tokio::test]
async fn test_demo_user_authenticates() {
    let service = seeded_service().await;

    let identity = service
        .authenticate(&CredentialRequest::user_pass("johndoe", "password"))
        .await
        .unwrap()
        .expect("johndoe should authenticate");
    assert_eq!(identity.id, "johndoe");
    assert_eq!(identity.name, "John Doe");
}

#[tokio::test]
async fn test_rejections_are_absent_identities() {
    let service = seeded_service().await;

    for (username, password) in [
        ("johndoe", "wrong"),
        ("janedoe", ""),
        ("nosuchuser", "password"),
        ("", "password"),
    ] {
        let result = service
            .authenticate(&CredentialRequest::user_pass(username, password))
            .await
            .unwrap();
        assert!(result.is_none(), "{username}/{password} authenticated");
    }
}

#[tokio::test]
async fn test_invalid_and_unsupported_requests_raise() {
    let service = seeded_service().await;

    let err = service
        .authenticate(&CredentialRequest {
            credentialtype: Some("UserPass".into()),
            data: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidRequest(_)));

    let err = service
        .authenticate(&CredentialRequest::new("OAuth", HashMap::new()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unsupported credential type: OAuth");
}

#[tokio::test]
async fn test_credential_type_is_case_sensitive() {
    let service = seeded_service().await;
    let mut request = CredentialRequest::user_pass("johndoe", "password");
    request.credentialtype = Some("userpass".into());

    let err = service.authenticate(&request).await.unwrap_err();
    assert!(matches!(err, AuthError::UnsupportedCredentialType(ref t) if t == "userpass"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_authentications() {
    let service = Arc::new(seeded_service().await);

    let mut handles = Vec::new();
    for i in 0..32 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let (user, password) = if i % 2 == 0 {
                ("johndoe", "password")
            } else {
                ("janedoe", "nope")
            };
            let result = service
                .authenticate(&CredentialRequest::user_pass(user, password))
                .await
                .unwrap();
            (i, result.map(|identity| identity.id))
        }));
    }

    for handle in handles {
        let (i, id) = handle.await.unwrap();
        if i % 2 == 0 {
            assert_eq!(id.as_deref(), Some("johndoe"));
        } else {
            assert_eq!(id, None);
        }
    }
    assert_eq!(service.store().len().await, 2);
}

#[tokio::test]
async fn test_file_store_seed_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("identities.db");

    {
        let store: FileStore<Identity> = FileStore::open(&path).await.unwrap();
        assert_eq!(seed_missing_demo_identities(&store).await.unwrap(), 2);
        store
            .insert(
                Identity::new("alice", "Alice")
                    .with_credential(Credential::stored_password("alice123")),
            )
            .await
            .unwrap();
    }

    let store: FileStore<Identity> = FileStore::open(&path).await.unwrap();
    assert_eq!(seed_missing_demo_identities(&store).await.unwrap(), 0);
    assert_eq!(store.len().await, 3);
    assert!(
        store
            .find_one(&Query::where_eq("id", "janedoe"))
            .await
            .unwrap()
            .is_some()
    );

    let service = AuthService::new(store);
    let alice = service
        .authenticate(&CredentialRequest::user_pass("alice", "alice123"))
        .await
        .unwrap();
    assert_eq!(alice.map(|i| i.name), Some("Alice".to_string()));
}
