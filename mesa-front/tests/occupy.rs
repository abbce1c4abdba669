// Occupation workflow behaviour against recording doubles.

mod common;

use std::sync::Arc;

use common::{
    CallLog, MockGuestStore, MockRefresh, MockReservationStore, MockTableStore, client, table,
};
use mesa_client::ClientError;
use mesa_front::{FrontError, OccupyPhase, OccupySession};
use shared::models::{ClientCreate, TableStatus};

struct Harness {
    session: OccupySession,
    log: Arc<CallLog>,
    tables: Arc<MockTableStore>,
    guests: Arc<MockGuestStore>,
    reservations: Arc<MockReservationStore>,
}

fn harness_with_staff(staff_id: Option<i64>) -> Harness {
    let log = Arc::new(CallLog::default());
    let guests = Arc::new(MockGuestStore::new(log.clone(), Some(client(1, "Ana"))));
    let reservations = Arc::new(MockReservationStore::new(log.clone()));
    let tables = Arc::new(MockTableStore::new(log.clone()));
    let refresh = Arc::new(MockRefresh::new(log.clone()));
    let session = OccupySession::new(
        table(2, 8, TableStatus::Free),
        staff_id,
        guests.clone(),
        reservations.clone(),
        tables.clone(),
        refresh,
    );
    Harness {
        session,
        log,
        tables,
        guests,
        reservations,
    }
}

fn harness() -> Harness {
    harness_with_staff(Some(3))
}

async fn found_client(h: &Harness) {
    h.session.set_cpf_input("52998224725");
    h.session.search_client().await.unwrap();
    assert!(matches!(h.session.snapshot().phase, OccupyPhase::ClientFound(_)));
}

#[tokio::test]
async fn test_party_size_defaults_to_capacity() {
    let h = harness();
    assert_eq!(h.session.snapshot().party_size, 4);
}

#[tokio::test]
async fn test_search_known_cpf_finds_client() {
    let h = harness();
    h.session.set_cpf_input("529.982.247-25");
    assert_eq!(h.session.snapshot().cpf_input, "529.982.247-25");

    h.session.search_client().await.unwrap();

    let state = h.session.snapshot();
    match state.phase {
        OccupyPhase::ClientFound(found) => assert_eq!(found.name, "Ana"),
        phase => panic!("expected ClientFound, got {phase:?}"),
    }
    assert_eq!(h.log.entries(), vec!["find_client cpf=52998224725"]);
}

#[tokio::test]
async fn test_search_unknown_cpf_reports_not_found() {
    let h = harness();
    h.session.set_cpf_input("111.444.777-35");
    h.session.search_client().await.unwrap();

    let state = h.session.snapshot();
    assert_eq!(state.phase, OccupyPhase::ClientNotFound);
    assert!(state.error.unwrap().contains("Register"));
}

#[tokio::test]
async fn test_search_invalid_cpf_never_hits_network() {
    let h = harness();
    h.session.set_cpf_input("5299822");

    let err = h.session.search_client().await.unwrap_err();
    assert!(matches!(err, FrontError::Validation(_)));
    assert!(h.log.entries().is_empty());
}

#[tokio::test]
async fn test_search_transport_error_returns_to_idle() {
    let h = harness();
    *h.guests.search_error.lock().unwrap() =
        Some(ClientError::Remote("gateway timeout".to_string()));
    h.session.set_cpf_input("52998224725");

    h.session.search_client().await.unwrap_err();

    let state = h.session.snapshot();
    assert_eq!(state.phase, OccupyPhase::Idle);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn test_editing_cpf_discards_found_client() {
    let h = harness();
    found_client(&h).await;

    h.session.set_cpf_input("52998224724");
    assert_eq!(h.session.snapshot().phase, OccupyPhase::Idle);
}

#[tokio::test]
async fn test_party_size_zero_rejected_before_network() {
    let h = harness();
    found_client(&h).await;
    let calls_after_search = h.log.entries().len();

    let err = h.session.set_party_size(0).unwrap_err();

    assert!(matches!(err, FrontError::Validation(_)));
    assert_eq!(h.log.entries().len(), calls_after_search, "no network call may happen");
    assert!(h.session.snapshot().error.is_some());
}

#[tokio::test]
async fn test_rejected_party_size_keeps_last_valid_value() {
    let h = harness();
    found_client(&h).await;
    h.session.set_party_size(2).unwrap();

    let err = h.session.set_party_size(5).unwrap_err();
    assert!(err.user_message().contains("capacity (4)"));

    // The bad edit is not stored; the previous size survives.
    let state = h.session.snapshot();
    assert_eq!(state.party_size, 2);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn test_confirm_without_client_is_rejected() {
    let h = harness();
    let err = h.session.confirm().await.unwrap_err();
    assert!(matches!(err, FrontError::Validation(_)));
    assert!(h.log.entries().is_empty());
}

#[tokio::test]
async fn test_confirm_without_staff_is_session_error() {
    let h = harness_with_staff(None);
    found_client(&h).await;
    let calls_after_search = h.log.entries().len();

    let err = h.session.confirm().await.unwrap_err();

    assert!(matches!(err, FrontError::SessionRequired));
    assert_eq!(h.log.entries().len(), calls_after_search);
}

#[tokio::test]
async fn test_confirm_orders_reservation_status_refresh() {
    let h = harness();
    found_client(&h).await;
    h.session.set_party_size(2).unwrap();

    let reservation = h.session.confirm().await.unwrap();
    assert_eq!(reservation.party_size, 2);

    let entries = h.log.entries();
    assert_eq!(
        entries,
        vec![
            "find_client cpf=52998224725",
            "create_reservation client=1 table=2 party=2",
            "update_table_status id=2 status=Occupied",
            "refresh",
        ]
    );

    let state = h.session.snapshot();
    assert!(matches!(state.phase, OccupyPhase::Succeeded(_)));
    assert!(state.success.unwrap().contains("Table 8"));
}

#[tokio::test]
async fn test_reservation_failure_skips_status_update() {
    let h = harness();
    found_client(&h).await;
    *h.reservations.error.lock().unwrap() =
        Some(ClientError::Remote("Reserva inválida".to_string()));

    let err = h.session.confirm().await.unwrap_err();
    assert_eq!(err.user_message(), "Reserva inválida");

    let entries = h.log.entries();
    assert!(entries.iter().all(|e| !e.starts_with("update_table_status")));
    assert!(entries.iter().all(|e| e != "refresh"));
    // Retryable: the found client survives.
    assert!(matches!(h.session.snapshot().phase, OccupyPhase::ClientFound(_)));
}

#[tokio::test]
async fn test_status_failure_after_reservation_is_surfaced() {
    let h = harness();
    found_client(&h).await;
    *h.tables.status_update_error.lock().unwrap() =
        Some(ClientError::Remote("Mesa indisponível".to_string()));

    let err = h.session.confirm().await.unwrap_err();
    assert_eq!(err.user_message(), "Mesa indisponível");

    // The reservation was created and stays orphaned; no refresh runs.
    let entries = h.log.entries();
    assert!(entries.iter().any(|e| e.starts_with("create_reservation")));
    assert!(entries.iter().all(|e| e != "refresh"));
    assert!(matches!(h.session.snapshot().phase, OccupyPhase::ClientFound(_)));
}

#[tokio::test]
async fn test_register_adopts_created_client() {
    let h = harness();
    let created = h
        .session
        .register_client(ClientCreate {
            name: "Carla".to_string(),
            cpf: "111.444.777-35".to_string(),
            email: "carla@example.com".to_string(),
            phone: "(11)98765-4321".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Carla");

    let state = h.session.snapshot();
    match state.phase {
        OccupyPhase::ClientFound(found) => assert_eq!(found.id, created.id),
        phase => panic!("expected ClientFound, got {phase:?}"),
    }
    // CPF field is pre-filled so no re-search is needed.
    assert_eq!(state.cpf_input, "111.444.777-35");
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let h = harness();
    let err = h
        .session
        .register_client(ClientCreate {
            name: String::new(),
            cpf: "52998224725".to_string(),
            email: "x@example.com".to_string(),
            phone: "11987654321".to_string(),
            notes: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, FrontError::Validation(_)));
    assert!(h.log.entries().is_empty());
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let h = harness();
    found_client(&h).await;
    h.session.set_party_size(2).unwrap();

    h.session.reset();

    let state = h.session.snapshot();
    assert_eq!(state.phase, OccupyPhase::Idle);
    assert_eq!(state.party_size, 4);
    assert!(state.cpf_input.is_empty());
    assert!(state.error.is_none() && state.success.is_none());
}
