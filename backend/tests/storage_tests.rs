//! Ledger file tests
//!
//! Tests for CSV persistence including:
//! - Missing files load as empty ledgers
//! - Dates survive a save/load cycle as dates
//! - Unreadable dates load as missing and still reconcile

use chrono::NaiveDate;
use receipt_tracker::LedgerStore;
use shared::{CollectionStatus, Ledgers, NewCollection, NewIssuance};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_in(dir: &TempDir) -> LedgerStore {
    LedgerStore::new(
        dir.path().join("verilenler.csv"),
        dir.path().join("alinanlar.csv"),
    )
}

fn sample_ledgers() -> Ledgers {
    let mut ledgers = Ledgers::default();
    ledgers
        .append_issuance(NewIssuance {
            date: date(2024, 5, 14),
            department: "Mutfak".to_string(),
            location: "Lobi, Kat 1".to_string(),
            range_start: 100,
            range_end: 102,
            recipient: Some("Ayşe Yılmaz".to_string()),
            note: None,
        })
        .unwrap();
    ledgers
        .append_collection(NewCollection {
            date: date(2024, 5, 20),
            serial_number: 101,
            department: "Mutfak".to_string(),
            location: "Lobi, Kat 1".to_string(),
            note: Some("eksiksiz".to_string()),
        })
        .unwrap();
    ledgers
}

#[tokio::test]
async fn test_missing_files_load_empty() {
    let dir = TempDir::new().unwrap();
    let ledgers = store_in(&dir).load().await.unwrap();
    assert_eq!(ledgers, Ledgers::default());
}

#[tokio::test]
async fn test_round_trip_preserves_records() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let ledgers = sample_ledgers();

    store.persist(&ledgers).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, ledgers);
    assert_eq!(loaded.issuances[0].date, Some(date(2024, 5, 14)));
    assert_eq!(loaded.collections[0].date, Some(date(2024, 5, 20)));
}

#[tokio::test]
async fn test_file_layout() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.persist(&sample_ledgers()).await.unwrap();

    let issuances = std::fs::read_to_string(store.issuance_path()).unwrap();
    let mut lines = issuances.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,department,location,rangeStart,rangeEnd,recipient,note")
    );
    assert_eq!(
        lines.next(),
        Some("1,2024-05-14,Mutfak,\"Lobi, Kat 1\",100,102,Ayşe Yılmaz,")
    );

    let collections = std::fs::read_to_string(store.collection_path()).unwrap();
    let mut lines = collections.lines();
    assert_eq!(lines.next(), Some("id,serialNumber,date,department,location,note"));
    assert_eq!(
        lines.next(),
        Some("1,101,2024-05-20,Mutfak,\"Lobi, Kat 1\",eksiksiz")
    );
}

#[tokio::test]
async fn test_empty_ledgers_keep_schema() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.persist(&Ledgers::default()).await.unwrap();

    let collections = std::fs::read_to_string(store.collection_path()).unwrap();
    assert_eq!(collections, "id,serialNumber,date,department,location,note\n");
    assert_eq!(store.load().await.unwrap(), Ledgers::default());
}

#[tokio::test]
async fn test_legacy_timestamps_and_bad_dates() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.issuance_path(),
        "id,date,department,location,rangeStart,rangeEnd,recipient,note\n\
         1,2024-03-01 00:00:00,A,Loc1,1,2,,\n\
         2,yarın,B,Loc2,5,5,,not okunamadı\n",
    )
    .unwrap();
    std::fs::write(
        store.collection_path(),
        "id,serialNumber,date,department,location,note\n2,5,,B,Loc2,\n",
    )
    .unwrap();

    let ledgers = store.load().await.unwrap();
    assert_eq!(ledgers.issuances[0].date, Some(date(2024, 3, 1)));
    assert_eq!(ledgers.issuances[1].date, None);
    assert_eq!(ledgers.issuances[1].note.as_deref(), Some("not okunamadı"));

    let entries = ledgers.reconcile();
    assert_eq!(entries.len(), 3);
    let undated = &entries[2];
    assert_eq!(undated.serial_number, 5);
    assert_eq!((undated.day, undated.month, undated.year), (None, None, None));
    assert_eq!(undated.status, CollectionStatus::Collected);
    assert_eq!(undated.collected_date, None);
}

#[tokio::test]
async fn test_turkish_column_names_load_and_resave_in_english() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.issuance_path(),
        "RecId,Tarih,Dükkan,İş Yeri,Seri Başlangıç,Seri Bitiş,Teslim Alan,Açıklama\n\
         3,2024-05-14,Mutfak,Lobi,100,102,Ayşe,\n",
    )
    .unwrap();
    std::fs::write(
        store.collection_path(),
        "RecId,Seri No,Tarih,Dükkan,İş Yeri,Açıklama\n3,101,2024-05-20 00:00:00,Mutfak,Lobi,\n",
    )
    .unwrap();

    let ledgers = store.load().await.unwrap();
    assert_eq!(ledgers.issuances[0].id, 3);
    assert_eq!(ledgers.issuances[0].recipient.as_deref(), Some("Ayşe"));
    assert_eq!(ledgers.collections[0].serial_number, 101);
    assert_eq!(ledgers.collections[0].date, Some(date(2024, 5, 20)));
    assert!(ledgers.is_collected(3, 101));

    store.persist(&ledgers).await.unwrap();
    let issuances = std::fs::read_to_string(store.issuance_path()).unwrap();
    assert!(issuances.starts_with("id,date,department,location,rangeStart,rangeEnd,"));
    assert_eq!(store.load().await.unwrap(), ledgers);
}

#[tokio::test]
async fn test_persist_creates_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("data").join("2024");
    let store = LedgerStore::new(nested.join("v.csv"), nested.join("a.csv"));

    store.persist(&sample_ledgers()).await.unwrap();
    assert!(nested.join("v.csv").exists());
    assert!(nested.join("a.csv").exists());
}

mod date_parsing {
    use super::*;
    use proptest::prelude::*;
    use receipt_tracker::storage::parse_date;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn stored_dates_parse_with_or_without_time(
            days in 0i64..20_000,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let d = date(1990, 1, 1) + chrono::Duration::days(days);
            let plain = d.format("%Y-%m-%d").to_string();
            let spaced = format!("{plain} {hour:02}:{minute:02}:00");
            let iso = format!("{plain}T{hour:02}:{minute:02}:00");

            prop_assert_eq!(parse_date(&plain), Some(d));
            prop_assert_eq!(parse_date(&spaced), Some(d));
            prop_assert_eq!(parse_date(&iso), Some(d));
        }

        #[test]
        fn free_text_never_parses(text in "[a-zA-Z ]{0,12}") {
            prop_assert_eq!(parse_date(&text), None);
        }
    }
}
