//! Technician search and the admin gate.

use chrono::Duration;
use hf_config::{AdminConfig, DirectoryConfig};
use hf_core::entities::{DEFAULT_ADMIN_PASSPHRASE, NewTechnician};
use hf_core::enums::{ApplianceKind, TechnicianStatus};
use hf_store::{
    AdminGate, AdminQuery, Confirmation, Directory, KEY_ADMIN_PASSWORD, RecordStore, StoreError,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn form(name: &str, city: &str, specialties: &[ApplianceKind]) -> NewTechnician {
    NewTechnician {
        name: name.into(),
        phone: "11999998888".into(),
        city: city.into(),
        specialties: specialties.to_vec(),
        payment_proof: Some("data:image/png;base64,iVBORw0KGgo=".into()),
    }
}

fn no_featured() -> DirectoryConfig {
    DirectoryConfig::default()
}

fn with_featured() -> DirectoryConfig {
    DirectoryConfig {
        include_featured: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn search_returns_only_approved() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login(DEFAULT_ADMIN_PASSPHRASE).await.unwrap();

    let approved = store
        .register_technician(form("Carlos", "São Paulo", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();
    store
        .register_technician(form("Bruno", "São Paulo", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();
    let approved = gate.approve(&session, &approved.id).await.unwrap();

    let results = Directory::new(&store, &no_featured())
        .search("são paulo", None)
        .await
        .unwrap();
    assert_eq!(results, vec![approved]);
}

#[tokio::test]
async fn specialty_filter_excludes_non_matching() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login(DEFAULT_ADMIN_PASSPHRASE).await.unwrap();

    let tech = store
        .register_technician(form("Ana", "Rio de Janeiro", &[ApplianceKind::ArCondicionado]))
        .await
        .unwrap();
    gate.approve(&session, &tech.id).await.unwrap();

    let directory = Directory::new(&store, &no_featured());
    assert!(
        directory
            .search("rio", Some(ApplianceKind::Geladeira))
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        directory
            .search("rio", Some(ApplianceKind::ArCondicionado))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[rstest]
#[case("SÃO PAULO")]
#[case("paulo")]
#[case("  são  ")]
#[tokio::test]
async fn city_match_is_case_insensitive_substring(#[case] query: &str) {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login(DEFAULT_ADMIN_PASSPHRASE).await.unwrap();
    let tech = store
        .register_technician(form("Carlos", "São Paulo", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();
    gate.approve(&session, &tech.id).await.unwrap();

    let results = Directory::new(&store, &no_featured())
        .search(query, None)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn blank_city_returns_nothing() {
    let store = RecordStore::in_memory().await.unwrap();
    let directory = Directory::new(
        &store,
        &with_featured(),
    );
    assert!(directory.search("   ", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn featured_technicians_come_first_when_enabled() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login(DEFAULT_ADMIN_PASSPHRASE).await.unwrap();
    let tech = store
        .register_technician(form("Joana", "São Paulo", &[ApplianceKind::Geladeira]))
        .await
        .unwrap();
    gate.approve(&session, &tech.id).await.unwrap();

    let directory = Directory::new(
        &store,
        &with_featured(),
    );
    let names: Vec<String> = directory
        .search("são paulo", Some(ApplianceKind::Geladeira))
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Carlos Manutenção", "Joana"]);
}

#[tokio::test]
async fn approve_is_idempotent() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login(DEFAULT_ADMIN_PASSPHRASE).await.unwrap();
    let tech = store
        .register_technician(form("Carlos", "Campinas", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();

    let once = gate.approve(&session, &tech.id).await.unwrap();
    let twice = gate.approve(&session, &tech.id).await.unwrap();
    assert_eq!(once, twice);
    assert_eq!(once.status, TechnicianStatus::Approved);
    assert!(once.is_verified);
    assert_eq!(store.get_technician(&tech.id).await.unwrap(), once);
}

#[tokio::test]
async fn login_accepts_only_the_exact_passphrase() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    for wrong in ["", "admin", "Admin123", "admin123 ", " admin123"] {
        assert!(matches!(
            gate.login(wrong).await,
            Err(StoreError::AccessDenied)
        ));
    }
    gate.login("admin123").await.unwrap();
}

#[tokio::test]
async fn rotation_invalidates_old_passphrase_and_other_sessions() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let keeper = gate.login("admin123").await.unwrap();
    let other = gate.login("admin123").await.unwrap();

    gate.rotate_passphrase(&keeper, "troca-2026").await.unwrap();

    assert!(matches!(
        gate.login("admin123").await,
        Err(StoreError::AccessDenied)
    ));
    gate.login("troca-2026").await.unwrap();
    gate.verify(&keeper).await.unwrap();
    assert!(matches!(
        gate.verify(&other).await,
        Err(StoreError::AccessDenied)
    ));

    // a fresh gate over the same store sees the rotated value
    let fresh = AdminGate::new(&store, &AdminConfig::default());
    fresh.login("troca-2026").await.unwrap();
}

#[tokio::test]
async fn blank_rotation_is_rejected() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login("admin123").await.unwrap();
    assert!(gate.rotate_passphrase(&session, "   ").await.is_err());
    gate.login("admin123").await.unwrap();
}

#[tokio::test]
async fn sessions_expire_after_ttl() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::with_ttl(&store, Duration::zero());
    let session = gate.login("admin123").await.unwrap();
    assert!(matches!(
        gate.stats(&session).await,
        Err(StoreError::SessionExpired)
    ));
    // once expired the token is forgotten
    assert!(matches!(
        gate.verify(&session).await,
        Err(StoreError::AccessDenied)
    ));
}

#[tokio::test]
async fn admin_list_filters_and_sorts_newest_first() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login("admin123").await.unwrap();

    let a = store
        .register_technician(form("Carlos Manutenção", "São Paulo", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let b = store
        .register_technician(form("Ana", "Campinas", &[ApplianceKind::Geladeira]))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let c = store
        .register_technician(form("Paulo", "Santos", &[ApplianceKind::Microondas]))
        .await
        .unwrap();
    gate.approve(&session, &b.id).await.unwrap();

    let all = gate
        .admin_list(&session, &AdminQuery::default())
        .await
        .unwrap();
    let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![c.id.as_str(), b.id.as_str(), a.id.as_str()]);

    // "paulo" matches Carlos by city and Paulo by name
    let by_text = gate
        .admin_list(
            &session,
            &AdminQuery {
                search: Some("PAULO".into()),
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(by_text.len(), 2);

    let pending = gate
        .admin_list(
            &session,
            &AdminQuery {
                search: None,
                status: Some(TechnicianStatus::Pending),
            },
        )
        .await
        .unwrap();
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|t| t.status == TechnicianStatus::Pending));
}

#[tokio::test]
async fn stats_and_delete() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login("admin123").await.unwrap();
    let a = store
        .register_technician(form("A", "X", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();
    let b = store
        .register_technician(form("B", "Y", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();
    let c = store
        .register_technician(form("C", "Z", &[ApplianceKind::Lavadora]))
        .await
        .unwrap();
    gate.approve(&session, &a.id).await.unwrap();
    gate.reject(&session, &b.id).await.unwrap();

    let stats = gate.stats(&session).await.unwrap();
    assert_eq!((stats.total, stats.pending, stats.approved), (3, 1, 1));

    assert!(
        gate.delete(&session, &c.id, Confirmation::confirmed())
            .await
            .unwrap()
    );
    let remaining: Vec<String> = store
        .list_technicians()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(remaining, vec![a.id, b.id]);
}

#[tokio::test]
async fn fee_update_is_validated_and_persisted() {
    let store = RecordStore::in_memory().await.unwrap();
    let gate = AdminGate::new(&store, &AdminConfig::default());
    let session = gate.login("admin123").await.unwrap();

    assert!(gate.set_system_fee(&session, "quarenta").await.is_err());
    assert_eq!(store.load_settings().await.unwrap().system_fee, "49.90");

    assert_eq!(gate.set_system_fee(&session, "59,90").await.unwrap(), "59.90");
    assert_eq!(store.load_settings().await.unwrap().system_fee, "59.90");
    assert_eq!(gate.system_fee(&session).await.unwrap(), "59.90");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn fee_updates_never_undo_a_rotation() {
    let store: &'static RecordStore =
        Box::leak(Box::new(RecordStore::in_memory().await.unwrap()));
    let gate: &'static AdminGate<'static> =
        Box::leak(Box::new(AdminGate::new(store, &AdminConfig::default())));
    let session = gate.login(DEFAULT_ADMIN_PASSPHRASE).await.unwrap();

    for round in 0..20 {
        let fee_session = session.clone();
        let fees = tokio::spawn(async move {
            for cents in 0..10 {
                gate.set_system_fee(&fee_session, &format!("{round}.{cents}0"))
                    .await
                    .unwrap();
            }
        });
        let rotate_session = session.clone();
        let rotation = tokio::spawn(async move {
            gate.rotate_passphrase(&rotate_session, &format!("nova{round}"))
                .await
                .unwrap();
        });
        fees.await.unwrap();
        rotation.await.unwrap();

        let expected = format!("nova{round}");
        assert_eq!(
            store.db().kv_get(KEY_ADMIN_PASSWORD).await.unwrap(),
            Some(expected.clone())
        );
        assert_eq!(store.load_settings().await.unwrap().admin_passphrase, expected);
        assert_eq!(
            store.load_settings().await.unwrap().system_fee,
            format!("{round}.90")
        );
    }
    assert!(matches!(
        gate.login(DEFAULT_ADMIN_PASSPHRASE).await,
        Err(StoreError::AccessDenied)
    ));
}
