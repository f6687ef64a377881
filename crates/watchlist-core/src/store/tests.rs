use super::*;
use watchlist_models::WatchState;

fn entry(imdb_id: &str, title: &str) -> CatalogEntry {
    CatalogEntry::new(imdb_id, title, "1999")
}

fn stars(value: u8) -> StarRating {
    StarRating::new(value).unwrap()
}

fn assert_partitioned(store: &WatchlistStore) {
    let unwatched = store.unwatched();
    let watched = store.watched();
    assert_eq!(unwatched.len() + watched.len(), store.len());
    for item in &unwatched {
        assert!(!watched.iter().any(|w| w.imdb_id() == item.imdb_id()));
    }
}

#[test]
fn test_add_initializes_item() {
    let mut store = WatchlistStore::new();
    let before = Utc::now();
    assert!(store.add(entry("tt0133093", "The Matrix")));

    let item = store.get("tt0133093").unwrap();
    assert_eq!(item.title(), "The Matrix");
    assert!(!item.watched);
    assert_eq!(item.rating, StarRating::UNRATED);
    assert_eq!(item.review, "");
    assert!(item.added_at >= before);
}

#[test]
fn test_add_is_idempotent() {
    let mut store = WatchlistStore::new();
    assert!(store.add(entry("tt0133093", "The Matrix")));
    let added_at = store.get("tt0133093").unwrap().added_at;

    assert!(!store.add(entry("tt0133093", "The Matrix (again)")));
    assert_eq!(store.len(), 1);

    let item = store.get("tt0133093").unwrap();
    assert_eq!(item.title(), "The Matrix");
    assert_eq!(item.added_at, added_at);
}

#[test]
fn test_add_keeps_insertion_order() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt3", "C"));
    store.add(entry("tt1", "A"));
    store.add(entry("tt2", "B"));

    let ids: Vec<&str> = store.items().iter().map(|i| i.imdb_id()).collect();
    assert_eq!(ids, vec!["tt3", "tt1", "tt2"]);
}

#[test]
fn test_remove() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.add(entry("tt2", "B"));

    assert!(store.remove("tt1"));
    assert!(!store.contains("tt1"));
    assert!(store.contains("tt2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_unknown_id_changes_nothing() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.save_review("tt1", stars(4), "Good");
    let snapshot = store.items().to_vec();

    assert!(!store.remove("tt404"));
    assert_eq!(store.items(), snapshot.as_slice());
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.save_review("tt1", stars(3), "Fine");
    store.toggle_watched("tt1");
    let original = store.get("tt1").unwrap().clone();

    assert_eq!(store.toggle_watched("tt1"), Some(true));
    assert_eq!(store.toggle_watched("tt1"), Some(false));

    let item = store.get("tt1").unwrap();
    assert_eq!(item.watched, original.watched);
    assert_eq!(item.rating, original.rating);
    assert_eq!(item.review, original.review);
}

#[test]
fn test_toggle_unknown_id() {
    let mut store = WatchlistStore::new();
    assert_eq!(store.toggle_watched("tt404"), None);
    assert!(store.is_empty());
}

#[test]
fn test_unwatching_keeps_rating_and_review() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.save_review("tt1", stars(5), "Loved it");
    store.toggle_watched("tt1");

    let item = store.get("tt1").unwrap();
    assert!(!item.watched);
    assert_eq!(item.rating, stars(5));
    assert_eq!(item.review, "Loved it");
    assert_eq!(item.state(), WatchState::Unwatched);
}

#[test]
fn test_save_review_forces_watched() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::Unwatched);

    assert!(store.save_review("tt1", stars(4), ""));
    let item = store.get("tt1").unwrap();
    assert!(item.watched);
    assert_eq!(item.state(), WatchState::WatchedRated);

    // Already watched items stay watched
    assert!(store.save_review("tt1", stars(2), "Worse on rewatch"));
    let item = store.get("tt1").unwrap();
    assert!(item.watched);
    assert_eq!(item.rating, stars(2));
    assert_eq!(item.review, "Worse on rewatch");
}

#[test]
fn test_save_review_with_zero_rating_is_watched_unrated() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.save_review("tt1", StarRating::UNRATED, "Just a note");
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::WatchedUnrated);
}

#[test]
fn test_save_review_unknown_id() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    assert!(!store.save_review("tt404", stars(5), "Ghost"));
    assert!(!store.get("tt1").unwrap().watched);
}

#[test]
fn test_state_machine_transitions() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::Unwatched);

    store.toggle_watched("tt1");
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::WatchedUnrated);

    store.toggle_watched("tt1");
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::Unwatched);

    store.save_review("tt1", stars(4), "");
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::WatchedRated);

    store.toggle_watched("tt1");
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::Unwatched);

    store.save_review("tt1", stars(1), "");
    assert_eq!(store.get("tt1").unwrap().state(), WatchState::WatchedRated);
}

#[test]
fn test_views_partition_store_through_mutations() {
    let mut store = WatchlistStore::new();
    assert_partitioned(&store);

    for (id, title) in [("tt1", "A"), ("tt2", "B"), ("tt3", "C"), ("tt4", "D")] {
        store.add(entry(id, title));
        assert_partitioned(&store);
    }

    store.toggle_watched("tt1");
    assert_partitioned(&store);
    store.save_review("tt2", stars(3), "ok");
    assert_partitioned(&store);
    store.toggle_watched("tt2");
    assert_partitioned(&store);
    store.remove("tt3");
    assert_partitioned(&store);

    let watched: Vec<&str> = store.watched().iter().map(|i| i.imdb_id()).collect();
    let unwatched: Vec<&str> = store.unwatched().iter().map(|i| i.imdb_id()).collect();
    assert_eq!(watched, vec!["tt1"]);
    assert_eq!(unwatched, vec!["tt2", "tt4"]);
}

#[test]
fn test_ratings_stay_in_range() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    for value in [0, 5, 1, 4, 2, 3, 5, 0] {
        store.save_review("tt1", stars(value), "");
        let rating = store.get("tt1").unwrap().rating.value();
        assert!(rating <= StarRating::MAX);
        assert_eq!(rating, value);
    }
}

#[test]
fn test_average_rating_empty_is_zero() {
    let mut store = WatchlistStore::new();
    assert_eq!(store.average_rating(), 0.0);

    store.add(entry("tt1", "A"));
    store.toggle_watched("tt1");
    assert_eq!(store.average_rating(), 0.0);
}

#[test]
fn test_average_rating_over_watched_rated_items() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.add(entry("tt2", "B"));
    store.add(entry("tt3", "C"));
    store.save_review("tt1", stars(3), "");
    store.save_review("tt2", stars(5), "");
    // Watched but unrated: excluded
    store.toggle_watched("tt3");

    assert_eq!(store.average_rating(), 4.0);
}

#[test]
fn test_average_rating_ignores_unwatched_ratings() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.add(entry("tt2", "B"));
    store.save_review("tt1", stars(2), "");
    store.save_review("tt2", stars(5), "");
    store.toggle_watched("tt2");

    assert_eq!(store.average_rating(), 2.0);
}

#[test]
fn test_stats() {
    let mut store = WatchlistStore::new();
    store.add(entry("tt1", "A"));
    store.add(entry("tt2", "B"));
    store.add(entry("tt3", "C"));
    store.save_review("tt1", stars(4), "");

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.unwatched, 2);
    assert_eq!(stats.watched, 1);
    assert_eq!(stats.average_rating, 4.0);
    assert_eq!(stats.average_rating_display(), "4.0");
}
