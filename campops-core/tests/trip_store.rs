use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use tempfile::TempDir;

use campops_core::{NewTrip, StorageEngine, TripError, TripRepository, TripType, TripUpdate};

fn setup() -> (TempDir, TripRepository) {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::new(dir.path().join("campops.sqlite")).unwrap();
    engine.initialize().unwrap();
    (dir, TripRepository::new(engine))
}

fn sample_trip(name: &str) -> NewTrip {
    NewTrip {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
        trip_type: TripType::CarCamping,
        group_size: 4,
    }
}

#[test]
fn create_then_fetch_round_trips_fields() {
    let (_dir, repo) = setup();

    let id = repo.create(&sample_trip("Yosemite weekend")).unwrap();
    assert!(id.starts_with("trip-"));

    let trip = repo.fetch_by_id(&id).unwrap().unwrap();
    assert_eq!(trip.id, id);
    assert_eq!(trip.name, "Yosemite weekend");
    assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2026, 9, 4).unwrap());
    assert_eq!(trip.end_date, NaiveDate::from_ymd_opt(2026, 9, 7).unwrap());
    assert_eq!(trip.trip_type, TripType::CarCamping);
    assert_eq!(trip.group_size, 4);
    assert_eq!(trip.created_at, trip.updated_at);
}

#[test]
fn fetch_unknown_trip_is_none() {
    let (_dir, repo) = setup();
    assert!(repo.fetch_by_id("trip-missing").unwrap().is_none());
}

#[test]
fn list_orders_by_most_recently_updated() {
    let (_dir, repo) = setup();

    let first = repo.create(&sample_trip("First")).unwrap();
    thread::sleep(Duration::from_millis(5));
    let second = repo.create(&sample_trip("Second")).unwrap();

    let trips = repo.list().unwrap();
    assert_eq!(trips[0].id, second);
    assert_eq!(trips[1].id, first);

    // Touching the older trip moves it back to the front.
    thread::sleep(Duration::from_millis(5));
    repo.update(
        &first,
        &TripUpdate {
            group_size: Some(6),
            ..TripUpdate::default()
        },
    )
    .unwrap();

    let trips = repo.list().unwrap();
    assert_eq!(trips[0].id, first);
    assert_eq!(trips[1].id, second);
}

#[test]
fn update_refreshes_updated_at_only() {
    let (_dir, repo) = setup();

    let id = repo.create(&sample_trip("Lost Coast")).unwrap();
    let before = repo.fetch_by_id(&id).unwrap().unwrap();

    thread::sleep(Duration::from_millis(5));
    repo.update(
        &id,
        &TripUpdate {
            name: Some("Lost Coast trail".to_string()),
            trip_type: Some(TripType::Backpacking),
            ..TripUpdate::default()
        },
    )
    .unwrap();

    let after = repo.fetch_by_id(&id).unwrap().unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, "Lost Coast trail");
    assert_eq!(after.trip_type, TripType::Backpacking);
    assert_eq!(after.group_size, before.group_size);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[test]
fn update_unknown_trip_is_not_found() {
    let (_dir, repo) = setup();
    let err = repo
        .update(
            "trip-missing",
            &TripUpdate {
                group_size: Some(2),
                ..TripUpdate::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TripError::NotFound { ref trip_id } if trip_id == "trip-missing"));
}

#[test]
fn delete_unknown_trip_is_not_found() {
    let (_dir, repo) = setup();
    let err = repo.delete("trip-missing").unwrap_err();
    assert!(matches!(err, TripError::NotFound { .. }));
}

#[test]
fn delete_removes_trip_from_listing() {
    let (_dir, repo) = setup();

    let id = repo.create(&sample_trip("One night")).unwrap();
    repo.delete(&id).unwrap();

    assert!(repo.fetch_by_id(&id).unwrap().is_none());
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn create_rejects_blank_name() {
    let (_dir, repo) = setup();
    let mut input = sample_trip("  ");
    input.name = "   ".to_string();
    let err = repo.create(&input).unwrap_err();
    assert!(matches!(err, TripError::EmptyName));
}

#[test]
fn create_rejects_non_positive_group_size() {
    let (_dir, repo) = setup();
    let mut input = sample_trip("Solo");
    input.group_size = 0;
    let err = repo.create(&input).unwrap_err();
    assert!(matches!(err, TripError::InvalidGroupSize(0)));
}

#[test]
fn update_rejects_blank_name() {
    let (_dir, repo) = setup();
    let id = repo.create(&sample_trip("Valid")).unwrap();
    let err = repo
        .update(
            &id,
            &TripUpdate {
                name: Some(String::new()),
                ..TripUpdate::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TripError::EmptyName));
}
