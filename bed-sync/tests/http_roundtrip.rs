use bed_ledger::{BedField, Readiness, WardKey};
use bed_sync::{BedSyncController, SyncConfig, SyncError};
use mockito::Matcher;

const WARDS_PATH: &str = "/bed-management/bed-wards";

fn config(server: &mockito::ServerGuard) -> SyncConfig {
    SyncConfig {
        server_url: server.url(),
        hospital_id: 4,
        auth_token: Some("ops-token".to_string()),
        timeout_secs: 5,
    }
}

const LISTING: &str = r#"{
    "success": true,
    "wards": [
        {"id": 11, "ward_type": "general", "ac_type": "ac",
         "total_beds": 20, "available_beds": 6, "reserved_beds": 2},
        {"id": 12, "ward_type": "private_room", "ac_type": "not_applicable",
         "room_config": "2bed_with_bath",
         "total_beds": 4, "available_beds": 1, "reserved_beds": 0},
        {"id": 13, "ward_type": "dental", "ac_type": "ac",
         "total_beds": 3, "available_beds": 3, "reserved_beds": 0}
    ]
}"#;

#[tokio::test]
async fn test_load_edit_save_against_http_backend() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", WARDS_PATH)
        .match_query(Matcher::UrlEncoded("hospital_id".into(), "4".into()))
        .match_header("authorization", "Bearer ops-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LISTING)
        .expect(2)
        .create_async()
        .await;
    let upsert = server
        .mock("POST", WARDS_PATH)
        .match_header("authorization", "Bearer ops-token")
        .match_body(Matcher::PartialJson(serde_json::json!({"hospital_id": 4})))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .expect(11)
        .create_async()
        .await;

    let mut controller = BedSyncController::from_config(&config(&server)).unwrap();

    let report = controller.load().await.unwrap();
    assert_eq!(report.applied, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(controller.ledger().occupied(WardKey::GeneralAc), 12);
    assert_eq!(controller.ledger().get(WardKey::Private2BedWithBath).total, Some(4));

    let summary = controller.ledger().aggregate();
    assert_eq!((summary.total_available, summary.total_capacity), (7, 24));
    assert_eq!(summary.readiness(), Readiness::Medium);

    controller.set(WardKey::Icu, BedField::Total, "10").unwrap();
    controller.set(WardKey::Icu, BedField::Available, "3").unwrap();

    let saved = controller.save().await.unwrap();
    assert_eq!(saved.upserted, 11);
    assert_eq!(saved.reload.applied, 2);

    list.assert_async().await;
    upsert.assert_async().await;

    // Backend listing has no ICU row, so the reload resets it.
    assert_eq!(controller.ledger().get(WardKey::Icu).total, Some(0));
}

#[tokio::test]
async fn test_save_failure_reports_ward_and_progress() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", WARDS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"success": true, "wards": []}"#)
        .create_async()
        .await;
    server
        .mock("POST", WARDS_PATH)
        .with_status(500)
        .create_async()
        .await;

    let mut controller = BedSyncController::from_config(&config(&server)).unwrap();
    controller.reset_to_defaults();

    let err = controller.save().await.unwrap_err();
    match &err {
        SyncError::SaveAborted {
            ward,
            completed,
            total,
            ..
        } => {
            assert_eq!(*ward, WardKey::GeneralAc);
            assert_eq!(*completed, 0);
            assert_eq!(*total, 11);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_load_unreachable_backend_keeps_ledger() {
    let config = SyncConfig {
        server_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..SyncConfig::default()
    };
    let mut controller = BedSyncController::from_config(&config).unwrap();
    controller.reset_to_defaults();
    let before = controller.ledger().clone();

    let err = controller.load().await.unwrap_err();
    assert!(matches!(err, SyncError::Network(_)));
    assert_eq!(*controller.ledger(), before);
}
