use super::*;
use watchlist_sources::testing::MockCatalog;
use watchlist_sources::CatalogError;

const MATRIX_ID: &str = "tt0133093";

async fn session() -> (Session, Arc<MockCatalog>) {
    let catalog = Arc::new(MockCatalog::new());
    catalog
        .set_entries(vec![
            CatalogEntry::new(MATRIX_ID, "The Matrix", "1999").with_poster("N/A"),
            CatalogEntry::new("tt0234215", "The Matrix Reloaded", "2003"),
            CatalogEntry::new("tt0088763", "Back to the Future", "1985"),
        ])
        .await;
    (Session::new(catalog.clone()), catalog)
}

fn stars(value: u8) -> StarRating {
    StarRating::new(value).unwrap()
}

#[tokio::test]
async fn test_search_add_and_review_end_to_end() {
    let (mut session, _) = session().await;

    let results = session.submit_search("Matrix").await.unwrap();
    assert!(results.iter().any(|e| e.imdb_id == MATRIX_ID));

    assert!(session.add_result(MATRIX_ID));
    assert!(session.in_watchlist(MATRIX_ID));
    assert_eq!(session.store().unwatched().len(), 1);

    session.open_review(MATRIX_ID).unwrap();
    session.set_draft_rating(stars(5));
    session.set_draft_review("Great film");
    assert!(session.save_review());

    assert_eq!(session.store().watched().len(), 1);
    let item = session.store().get(MATRIX_ID).unwrap();
    assert_eq!(item.rating, stars(5));
    assert_eq!(item.review, "Great film");
    assert!(item.watched);
    assert!(session.review_draft().is_none());
}

#[tokio::test]
async fn test_add_result_is_idempotent() {
    let (mut session, _) = session().await;
    session.submit_search("matrix").await.unwrap();

    assert!(session.add_result(MATRIX_ID));
    assert!(!session.add_result(MATRIX_ID));
    assert_eq!(session.store().len(), 1);
}

#[tokio::test]
async fn test_add_result_requires_current_result() {
    let (mut session, _) = session().await;
    session.submit_search("future").await.unwrap();

    assert!(!session.add_result(MATRIX_ID));
    assert!(session.store().is_empty());
}

#[tokio::test]
async fn test_successful_search_switches_to_results_view() {
    let (mut session, _) = session().await;
    session.set_view(ViewMode::Watched);

    session.submit_search("matrix").await.unwrap();
    assert_eq!(session.view(), ViewMode::Search);
}

#[tokio::test]
async fn test_failed_search_keeps_view() {
    let (mut session, catalog) = session().await;
    session.set_view(ViewMode::Unwatched);

    catalog.set_next_error(CatalogError::ParseError("bad json".to_string())).await;
    let err = session.submit_search("matrix").await.unwrap_err();

    assert_eq!(err, SearchError::NetworkFailure);
    assert_eq!(session.view(), ViewMode::Unwatched);
    assert!(session.results().is_empty());
    assert_eq!(session.error(), Some(&SearchError::NetworkFailure));
}

#[tokio::test]
async fn test_watchlist_survives_failed_search() {
    let (mut session, _) = session().await;
    session.submit_search("matrix").await.unwrap();
    session.add_result(MATRIX_ID);

    session.submit_search("nothing like this").await.unwrap_err();
    assert!(session.in_watchlist(MATRIX_ID));
    assert!(session.results().is_empty());
}

#[tokio::test]
async fn test_open_review_seeds_draft() {
    let (mut session, _) = session().await;
    session.submit_search("matrix").await.unwrap();
    session.add_result(MATRIX_ID);

    let draft = session.open_review(MATRIX_ID).unwrap().clone();
    assert_eq!(draft.title, "The Matrix");
    assert_eq!(draft.rating, StarRating::UNRATED);
    assert_eq!(draft.review, "");

    session.set_draft_rating(stars(3));
    session.set_draft_review("Good");
    session.save_review();

    let draft = session.open_review(MATRIX_ID).unwrap();
    assert_eq!(draft.rating, stars(3));
    assert_eq!(draft.review, "Good");
}

#[tokio::test]
async fn test_open_review_unknown_item() {
    let (mut session, _) = session().await;
    assert!(session.open_review(MATRIX_ID).is_none());
    assert!(session.review_draft().is_none());
}

#[tokio::test]
async fn test_cancel_review_discards_draft() {
    let (mut session, _) = session().await;
    session.submit_search("matrix").await.unwrap();
    session.add_result(MATRIX_ID);

    session.open_review(MATRIX_ID);
    session.set_draft_rating(stars(1));
    session.cancel_review();

    assert!(!session.save_review());
    let item = session.store().get(MATRIX_ID).unwrap();
    assert_eq!(item.rating, StarRating::UNRATED);
    assert!(!item.watched);
}

#[tokio::test]
async fn test_draft_edits_without_dialog_are_ignored() {
    let (mut session, _) = session().await;
    session.set_draft_rating(stars(4));
    session.set_draft_review("nothing open");
    assert!(session.review_draft().is_none());
}

#[tokio::test]
async fn test_removing_reviewed_item_closes_dialog() {
    let (mut session, _) = session().await;
    session.submit_search("matrix").await.unwrap();
    session.add_result(MATRIX_ID);
    session.open_review(MATRIX_ID);

    assert!(session.remove(MATRIX_ID));
    assert!(session.review_draft().is_none());
    assert!(!session.save_review());
}

#[tokio::test]
async fn test_view_items_and_empty_states() {
    let (mut session, _) = session().await;
    assert_eq!(session.view(), ViewMode::Search);
    assert!(session.shows_empty_state());

    session.submit_search("matrix").await.unwrap();
    assert!(!session.shows_empty_state());
    session.add_result(MATRIX_ID);
    session.add_result("tt0234215");
    session.toggle_watched("tt0234215");

    session.set_view(ViewMode::Unwatched);
    let unwatched: Vec<&str> = session.view_items().iter().map(|i| i.imdb_id()).collect();
    assert_eq!(unwatched, vec![MATRIX_ID]);
    assert!(!session.shows_empty_state());

    session.set_view(ViewMode::Watched);
    let watched: Vec<&str> = session.view_items().iter().map(|i| i.imdb_id()).collect();
    assert_eq!(watched, vec!["tt0234215"]);

    session.toggle_watched("tt0234215");
    assert!(session.shows_empty_state());
}

#[tokio::test]
async fn test_search_error_hides_empty_state() {
    let (mut session, _) = session().await;
    session.submit_search("nothing like this").await.unwrap_err();
    assert!(!session.shows_empty_state());
}

#[test]
fn test_view_labels() {
    let stats = WatchlistStats { total: 5, unwatched: 3, watched: 2, average_rating: 4.5 };
    assert_eq!(ViewMode::Search.label(&stats), "Search Results");
    assert_eq!(ViewMode::Unwatched.label(&stats), "To Watch (3)");
    assert_eq!(ViewMode::Watched.label(&stats), "Watched (2)");
    assert_eq!(ViewMode::Watched.empty_message(), "You haven't watched any movies yet!");
}
