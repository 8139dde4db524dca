//! Expansion of issued ranges into per-serial status rows

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{CollectionRecord, IssuanceRecord, ReconciledEntry};
use crate::validation::MAX_SERIALS_PER_ISSUANCE;

/// Expand every issuance range into one entry per serial and mark each serial
/// collected when a collection record carries the same issuance id and serial.
///
/// Entries follow ledger order, ascending within a range. When the collection
/// ledger holds the same pair twice, the first record's date wins. Collection
/// records pointing at unknown issuance ids never match anything. Stored
/// ranges that are reversed or wider than [`MAX_SERIALS_PER_ISSUANCE`]
/// contribute no entries.
pub fn reconcile(
    issuances: &[IssuanceRecord],
    collections: &[CollectionRecord],
) -> Vec<ReconciledEntry> {
    let mut collected: HashMap<(i64, i64), Option<NaiveDate>> =
        HashMap::with_capacity(collections.len());
    for record in collections {
        collected
            .entry((record.issuance_id, record.serial_number))
            .or_insert(record.date);
    }

    let mut entries = Vec::new();

    for record in issuances {
        let count = record.serial_count();
        if count == 0 || count > MAX_SERIALS_PER_ISSUANCE {
            continue;
        }
        for serial_number in record.range_start..=record.range_end {
            entries.push(ReconciledEntry::new(
                record.id,
                record.date,
                &record.department,
                &record.location,
                serial_number,
                collected.get(&(record.id, serial_number)).copied(),
            ));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CollectionStatus;
    use chrono::Datelike;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn issuance(id: i64, department: &str, start: i64, end: i64) -> IssuanceRecord {
        IssuanceRecord {
            id,
            date: Some(date(2024, 5, 14)),
            department: department.to_string(),
            location: "Loc1".to_string(),
            range_start: start,
            range_end: end,
            recipient: None,
            note: None,
        }
    }

    fn collection(issuance_id: i64, serial_number: i64, on: NaiveDate) -> CollectionRecord {
        CollectionRecord {
            issuance_id,
            serial_number,
            date: Some(on),
            department: "A".to_string(),
            location: "Loc1".to_string(),
            note: None,
        }
    }

    #[test]
    fn test_empty_ledgers() {
        assert!(reconcile(&[], &[]).is_empty());
        assert!(reconcile(&[], &[collection(1, 5, date(2024, 1, 1))]).is_empty());
    }

    #[test]
    fn test_all_pending_without_collections() {
        let entries = reconcile(&[issuance(1, "A", 100, 102)], &[]);
        let serials: Vec<i64> = entries.iter().map(|e| e.serial_number).collect();
        assert_eq!(serials, vec![100, 101, 102]);
        assert!(entries.iter().all(|e| e.status == CollectionStatus::Pending));
        assert!(entries.iter().all(|e| e.collected_date.is_none()));
    }

    #[test]
    fn test_single_collection_marks_one_serial() {
        let d = date(2024, 6, 2);
        let entries = reconcile(&[issuance(1, "A", 100, 102)], &[collection(1, 101, d)]);

        assert_eq!(entries[0].status, CollectionStatus::Pending);
        assert_eq!(entries[1].status, CollectionStatus::Collected);
        assert_eq!(entries[1].collected_date, Some(d));
        assert_eq!(entries[2].status, CollectionStatus::Pending);
    }

    #[test]
    fn test_first_collection_date_wins() {
        let first = date(2024, 6, 2);
        let second = date(2024, 6, 9);
        let entries = reconcile(
            &[issuance(1, "A", 5, 5)],
            &[collection(1, 5, first), collection(1, 5, second)],
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].collected_date, Some(first));
    }

    #[test]
    fn test_collection_for_other_issuance_is_ignored() {
        let entries = reconcile(
            &[issuance(1, "A", 1, 3), issuance(2, "A", 1, 3)],
            &[collection(2, 2, date(2024, 6, 1)), collection(9, 1, date(2024, 6, 1))],
        );
        let collected: Vec<(i64, i64)> = entries
            .iter()
            .filter(|e| e.status.is_collected())
            .map(|e| (e.issuance_id, e.serial_number))
            .collect();
        assert_eq!(collected, vec![(2, 2)]);
    }

    #[test]
    fn test_single_serial_range() {
        let entries = reconcile(&[issuance(1, "A", 42, 42)], &[]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].serial_number, 42);
    }

    #[test]
    fn test_reversed_range_contributes_nothing() {
        let entries = reconcile(&[issuance(1, "A", 50, 10), issuance(2, "B", 1, 2)], &[]);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.issuance_id == 2));
    }

    #[test]
    fn test_oversized_stored_range_contributes_nothing() {
        let entries = reconcile(
            &[
                issuance(1, "A", i64::MIN, i64::MAX),
                issuance(2, "A", 0, i64::MAX),
                issuance(3, "B", 7, 8),
            ],
            &[collection(2, 5, date(2024, 6, 1))],
        );
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.issuance_id == 3));
    }

    #[test]
    fn test_serial_count_saturates() {
        assert_eq!(issuance(1, "A", i64::MIN, i64::MAX).serial_count(), u64::MAX);
        assert_eq!(issuance(1, "A", 3, 1).serial_count(), 0);
        assert_eq!(issuance(1, "A", 3, 3).serial_count(), 1);
    }

    #[test]
    fn test_date_decomposition() {
        let entries = reconcile(&[issuance(1, "A", 1, 1)], &[]);
        assert_eq!(entries[0].day, Some(14));
        assert_eq!(entries[0].month, Some(5));
        assert_eq!(entries[0].year, Some(2024));
    }

    #[test]
    fn test_missing_date_degrades_to_null_fields() {
        let mut record = issuance(1, "A", 1, 2);
        record.date = None;
        let entries = reconcile(&[record], &[collection(1, 2, date(2024, 6, 1))]);

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.day.is_none() && e.month.is_none() && e.year.is_none()));
        assert_eq!(entries[1].status, CollectionStatus::Collected);
    }

    #[test]
    fn test_collected_with_unreadable_date_stays_collected() {
        let mut record = collection(1, 1, date(2024, 6, 1));
        record.date = None;
        let entries = reconcile(&[issuance(1, "A", 1, 1)], &[record]);
        assert_eq!(entries[0].status, CollectionStatus::Collected);
        assert_eq!(entries[0].collected_date, None);
    }

    fn ledger_strategy() -> impl Strategy<Value = Vec<IssuanceRecord>> {
        prop::collection::vec((0i64..500, 0i64..40, 1u32..=28), 0..8).prop_map(|ranges| {
            ranges
                .into_iter()
                .enumerate()
                .map(|(i, (start, len, day))| IssuanceRecord {
                    id: i as i64 + 1,
                    date: NaiveDate::from_ymd_opt(2024, 2, day),
                    department: format!("D{}", i % 3),
                    location: "Loc".to_string(),
                    range_start: start,
                    range_end: start + len,
                    recipient: None,
                    note: None,
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Each record yields end - start + 1 distinct serials inside its range
        #[test]
        fn prop_range_expansion_cardinality(issuances in ledger_strategy()) {
            let entries = reconcile(&issuances, &[]);
            for record in &issuances {
                let mine: Vec<i64> = entries
                    .iter()
                    .filter(|e| e.issuance_id == record.id)
                    .map(|e| e.serial_number)
                    .collect();
                prop_assert_eq!(mine.len() as i64, record.range_end - record.range_start + 1);
                prop_assert!(mine.iter().all(|s| record.covers(*s)));
                prop_assert!(mine.windows(2).all(|w| w[0] < w[1]));
            }
        }

        /// Reconciling unchanged ledgers twice gives the same rows
        #[test]
        fn prop_reconcile_is_idempotent(
            issuances in ledger_strategy(),
            picks in prop::collection::vec((0usize..8, 0i64..40), 0..10)
        ) {
            let collections: Vec<CollectionRecord> = picks
                .into_iter()
                .filter_map(|(idx, offset)| {
                    issuances.get(idx).map(|r| {
                        let serial = r.range_start + offset.min(r.range_end - r.range_start);
                        collection(r.id, serial, date(2024, 3, 1))
                    })
                })
                .collect();

            let first = reconcile(&issuances, &collections);
            let second = reconcile(&issuances, &collections);
            prop_assert_eq!(first, second);
        }

        /// Exactly the collected pairs are marked, with their stored date
        #[test]
        fn prop_only_collected_pairs_are_marked(
            issuances in ledger_strategy(),
            picks in prop::collection::vec((0usize..8, 0i64..40, 1u32..=28), 0..10)
        ) {
            let collections: Vec<CollectionRecord> = picks
                .into_iter()
                .filter_map(|(idx, offset, day)| {
                    issuances.get(idx).map(|r| {
                        let serial = r.range_start + offset.min(r.range_end - r.range_start);
                        collection(r.id, serial, date(2024, 4, day))
                    })
                })
                .collect();

            for entry in reconcile(&issuances, &collections) {
                let first = collections.iter().find(|c| {
                    c.issuance_id == entry.issuance_id && c.serial_number == entry.serial_number
                });
                match first {
                    Some(c) => {
                        prop_assert_eq!(entry.status, CollectionStatus::Collected);
                        prop_assert_eq!(entry.collected_date, c.date);
                    }
                    None => prop_assert_eq!(entry.status, CollectionStatus::Pending),
                }
                if let Some(d) = entry.issued_date {
                    prop_assert_eq!(entry.day, Some(d.day()));
                }
            }
        }
    }
}
