use chrono::{NaiveDate, TimeZone, Utc};
use tripclock::core::calculator::day_bucket::{
    PALETTE, PALETTE_SIZE, color_for_bucket, color_index, day_bucket, day_color,
};
use tripclock::core::calculator::timeline::build_itinerary;
use tripclock::models::activity::{ActivityRecord, ActivitySlot};
use tripclock::models::activity_kind::ActivityKind;
use tripclock::models::day_anchor::DayAnchor;
use tripclock::utils::time::TimePolicy;

fn anchor(y: i32, m: u32, d: u32) -> DayAnchor {
    DayAnchor::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn record(id: i64, kind: ActivityKind, title: &str, day: DayAnchor, time: &str) -> ActivityRecord {
    let mut rec = ActivityRecord::new(
        1,
        kind,
        title,
        ActivitySlot::split(day, Some(time.to_string())),
        None,
    );
    rec.id = id;
    rec
}

#[test]
fn test_day_bucket_counts_whole_days() {
    let start = anchor(2026, 9, 2);
    assert_eq!(day_bucket(start, anchor(2026, 9, 4).instant()), 2);
    assert_eq!(day_bucket(start, start.instant()), 0);

    let late_evening = anchor(2026, 9, 2).date().and_hms_opt(23, 59, 0).unwrap();
    assert_eq!(day_bucket(start, late_evening), 0);
}

#[test]
fn test_day_bucket_floors_before_trip_start() {
    let start = anchor(2026, 9, 2);
    assert_eq!(day_bucket(start, anchor(2026, 9, 1).instant()), -1);

    let prev_evening = anchor(2026, 9, 1).date().and_hms_opt(22, 0, 0).unwrap();
    assert_eq!(day_bucket(start, prev_evening), -1);
}

#[test]
fn test_color_selection_is_cyclic_and_floor_modulo() {
    assert_eq!(PALETTE.len(), PALETTE_SIZE);
    assert_eq!(color_index(0), 0);
    assert_eq!(color_index(7), 7);
    assert_eq!(color_index(8), 0);
    assert_eq!(color_index(-1), 7);
    assert_eq!(color_index(-8), 0);
    assert_eq!(color_index(-9), 7);
    assert_eq!(color_for_bucket(10), color_for_bucket(2));
}

#[test]
fn test_day_color_is_stable_across_calls() {
    let start = anchor(2026, 9, 2);
    let event = anchor(2026, 9, 4).instant();
    let first = day_color(start, event);
    for _ in 0..5 {
        assert_eq!(day_color(start, event), first);
    }
    assert_eq!(first.name, PALETTE[2].name);
}

#[test]
fn test_itinerary_sorts_mixed_kinds_within_a_day() {
    let start = anchor(2026, 9, 1);
    let day = anchor(2026, 9, 2);

    let records = vec![
        record(1, ActivityKind::Hotel, "Villa check-in", day, "17:00"),
        record(2, ActivityKind::Transportation, "Car pickup", day, "10:00"),
        record(3, ActivityKind::Route, "Drive to Mikuláš", day, "2:00 PM"),
    ];

    let itinerary = build_itinerary(start, &records, TimePolicy::Permissive);
    assert_eq!(itinerary.days.len(), 1);

    let group = &itinerary.days[0];
    assert_eq!(group.bucket, 1);
    assert_eq!(group.color.name, PALETTE[1].name);

    let titles: Vec<&str> = group.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Car pickup", "Drive to Mikuláš", "Villa check-in"]);
    assert_eq!(group.entries[1].time.as_deref(), Some("14:00"));
}

#[test]
fn test_itinerary_order_does_not_depend_on_input_order() {
    let start = anchor(2026, 9, 1);
    let day = anchor(2026, 9, 3);

    let a = record(10, ActivityKind::Restaurant, "Dinner", day, "19:00");
    let b = record(11, ActivityKind::Hotel, "Check-in", day, "19:00");
    let c = record(12, ActivityKind::Site, "Castle", day, "11:00");

    let forward = build_itinerary(start, &[a.clone(), b.clone(), c.clone()], TimePolicy::Strict);
    let backward = build_itinerary(start, &[c, b, a], TimePolicy::Strict);

    let ids = |it: &tripclock::core::calculator::timeline::Itinerary| {
        it.entries().map(|e| e.activity_id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&forward), ids(&backward));
    // Same instant: hotel ranks before restaurant.
    assert_eq!(ids(&forward), vec![12, 11, 10]);
}

#[test]
fn test_itinerary_groups_by_day_and_places_end_slots() {
    let start = anchor(2026, 9, 1);
    let mut stay = ActivityRecord::new(
        1,
        ActivityKind::Hotel,
        "Villa",
        ActivitySlot::split(anchor(2026, 9, 2), Some("17:00".into())),
        Some(ActivitySlot::split(anchor(2026, 9, 4), Some("10:00".into()))),
    );
    stay.id = 1;
    let visit = record(2, ActivityKind::Site, "Cave", anchor(2026, 9, 3), "09:00");

    let itinerary = build_itinerary(start, &[stay, visit], TimePolicy::Permissive);

    let buckets: Vec<i64> = itinerary.days.iter().map(|d| d.bucket).collect();
    assert_eq!(buckets, vec![1, 2, 3]);
    assert_eq!(itinerary.len(), 3);

    let checkout = &itinerary.day(anchor(2026, 9, 4)).unwrap().entries[0];
    assert_eq!(checkout.slot, "Check-out");
    assert!(!checkout.legacy);
}

#[test]
fn test_missing_time_sorts_at_start_of_day() {
    let start = anchor(2026, 9, 1);
    let day = anchor(2026, 9, 2);

    let mut open = ActivityRecord::new(
        1,
        ActivityKind::Site,
        "Old town walk",
        ActivitySlot::split(day, None),
        None,
    );
    open.id = 5;
    let lunch = record(6, ActivityKind::Restaurant, "Lunch", day, "12:30");

    let itinerary = build_itinerary(start, &[lunch, open], TimePolicy::Strict);
    let first = itinerary.entries().next().unwrap();
    assert_eq!(first.title, "Old town walk");
    assert_eq!(first.time, None);
}

#[test]
fn test_legacy_rows_use_their_utc_reading() {
    let start = anchor(2026, 9, 1);
    let at = Utc.with_ymd_and_hms(2026, 9, 2, 8, 15, 0).unwrap();

    let mut legacy = ActivityRecord::new(
        1,
        ActivityKind::Transportation,
        "Flight",
        ActivitySlot::legacy(at),
        None,
    );
    legacy.id = 1;
    let pickup = record(2, ActivityKind::Transportation, "Car pickup", anchor(2026, 9, 2), "10:00");

    let itinerary = build_itinerary(start, &[pickup, legacy], TimePolicy::Permissive);
    let entries: Vec<_> = itinerary.entries().collect();

    assert_eq!(entries[0].title, "Flight");
    assert!(entries[0].legacy);
    assert_eq!(entries[0].time.as_deref(), Some("08:15"));
    assert_eq!(entries[1].title, "Car pickup");
}

#[test]
fn test_strict_view_keeps_entries_with_malformed_stored_time() {
    let start = anchor(2026, 9, 1);
    let day = anchor(2026, 9, 2);

    let walk = record(1, ActivityKind::Site, "Old town walk", day, "after lunch");
    let castle = record(2, ActivityKind::Site, "Castle", day, "25:99");
    let dinner = record(3, ActivityKind::Restaurant, "Dinner", day, "19:00");

    let itinerary = build_itinerary(start, &[dinner, castle, walk], TimePolicy::Strict);
    assert_eq!(itinerary.len(), 3);

    let titles: Vec<&str> = itinerary.entries().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Old town walk", "Castle", "Dinner"]);

    let first = itinerary.entries().next().unwrap();
    assert_eq!(first.instant.instant(), day.instant());
    assert_eq!(first.time.as_deref(), Some("after lunch"));
}
