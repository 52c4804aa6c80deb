//! Demo data
//!
//! Populates a store with the demonstration identities used by fixtures and
//! local runs.

use log::info;

use crate::error::StoreError;
use crate::identity::{Credential, Identity};
use crate::store::{Query, RecordStore};

pub const DEMO_PASSWORD: &str = "password";

/// The demo identities, in insertion order.
pub fn demo_identities() -> Vec<Identity> {
    vec![
        Identity::new("johndoe", "John Doe")
            .with_credential(Credential::stored_password(DEMO_PASSWORD)),
        Identity::new("janedoe", "Jane Doe")
            .with_credential(Credential::stored_password(DEMO_PASSWORD)),
    ]
}

/// Inserts every demo identity. Fails on the first store error, including a
/// duplicate id.
pub async fn seed_demo_identities<S: RecordStore<Identity>>(store: &S) -> Result<(), StoreError> {
    for identity in demo_identities() {
        let id = identity.id.clone();
        store.insert(identity).await?;
        info!("Seeded identity {}", id);
    }
    Ok(())
}

/// Inserts the demo identities whose ids are not in the store yet, so a
/// persistent store can be seeded on every start. Returns how many were inserted.
pub async fn seed_missing_demo_identities<S: RecordStore<Identity>>(
    store: &S,
) -> Result<usize, StoreError> {
    let mut inserted = 0;
    for identity in demo_identities() {
        if store
            .find_one(&Query::where_eq("id", identity.id.as_str()))
            .await?
            .is_some()
        {
            continue;
        }
        let id = identity.id.clone();
        store.insert(identity).await?;
        info!("Seeded identity {}", id);
        inserted += 1;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::USER_PASS;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_seed_contains_exactly_demo_identities() {
        let store = MemoryStore::new();
        seed_demo_identities(&store).await.unwrap();
        assert_eq!(store.len().await, 2);

        for (id, name) in [("johndoe", "John Doe"), ("janedoe", "Jane Doe")] {
            let identity = store
                .find_one(&Query::where_eq("id", id))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(identity.name, name);
            assert_eq!(identity.token, None);
            assert_eq!(identity.credentials.len(), 1);

            let cred = identity.credential(USER_PASS).unwrap();
            assert_eq!(cred.credentialtype, USER_PASS);
            assert_eq!(cred.get("password"), Some("password"));
        }
    }

    #[tokio::test]
    async fn test_seeding_twice_hits_duplicate() {
        let store = MemoryStore::new();
        seed_demo_identities(&store).await.unwrap();
        let err = seed_demo_identities(&store).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "johndoe"));
    }

    #[tokio::test]
    async fn test_seed_missing_is_idempotent() {
        let store = MemoryStore::new();
        store
            .insert(Identity::new("janedoe", "Jane Doe"))
            .await
            .unwrap();

        assert_eq!(seed_missing_demo_identities(&store).await.unwrap(), 1);
        assert_eq!(seed_missing_demo_identities(&store).await.unwrap(), 0);
        assert_eq!(store.len().await, 2);
    }
}
