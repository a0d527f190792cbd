//! Library service over the in-memory store: import/export and statistics

mod utils;

use bookshelf_lib::modules::book::ReadingStatus;
use bookshelf_lib::modules::library::LibrarySort;
use bookshelf_lib::shared::errors::AppError;
use chrono::{TimeZone, Utc};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use utils::factories::saved_book;
use utils::helpers::in_memory_library;

#[tokio::test]
async fn test_export_import_round_trip() {
    let source = in_memory_library();
    let mut plague = saved_book("OL1W", "La Peste", "Albert Camus").with_pages(279);
    plague.isbn = Some("9782070360420".to_string());
    plague.language = vec!["fre".to_string()];
    assert_ok!(source.save_book(plague).await);
    assert_ok!(source.save_book(saved_book("g2", "Noces", "Albert Camus")).await);
    assert_ok!(
        source
            .update_status(
                "OL1W",
                ReadingStatus::Completed,
                Some(Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap()),
            )
            .await
    );

    let exported = source.export_json().await.unwrap();

    let target = in_memory_library();
    assert_eq!(target.import_json(&exported).await.unwrap(), 2);

    let mut before = source.list_books(LibrarySort::Title).await.unwrap();
    let mut after = target.list_books(LibrarySort::Title).await.unwrap();
    before.sort_by(|a, b| a.id.cmp(&b.id));
    after.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_importing_an_object_is_rejected() {
    let library = in_memory_library();
    let payload = json!({"id": "1", "title": "La Peste"}).to_string();

    let error = assert_err!(library.import_json(&payload).await);
    assert!(matches!(error, AppError::ValidationError(_)));
    assert!(error.to_string().contains("expected a JSON array"));
    assert!(library.list_books(LibrarySort::Recent).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_statistics_follow_status_changes() {
    let library = in_memory_library();
    for (id, pages, month) in [("a", 120, 1), ("b", 300, 3), ("c", 0, 3)] {
        let book = saved_book(id, id, "Auteur").with_pages(pages);
        assert_ok!(library.save_book(book).await);
        assert_ok!(
            library
                .update_status(
                    id,
                    ReadingStatus::Completed,
                    Some(Utc.with_ymd_and_hms(2024, month, 5, 0, 0, 0).unwrap()),
                )
                .await
        );
    }
    assert_ok!(library.update_status("c", ReadingStatus::Reading, None).await);

    let stats = library.statistics().await.unwrap();
    assert_eq!(stats.total_books, 2);
    assert_eq!(stats.total_pages, 420);
    assert_eq!(stats.average_pages_per_book, 210);
    assert_eq!(stats.monthly[0].month, "2024-03");
    assert_eq!(stats.monthly[0].books, 1);
}

#[tokio::test]
async fn test_delete_without_id() {
    let library = in_memory_library();
    assert!(matches!(
        library.remove_book("  ").await,
        Err(AppError::InvalidInput(_))
    ));
}
