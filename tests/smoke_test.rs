use std::sync::Arc;

use birthday_core::{
    astro::compatibility,
    derive, init,
    roster::builtin_roster,
    search::IndexConfig,
    stats,
    storage::MemoryStore,
    store::FilterStore,
};
use chrono::NaiveDate;

#[test]
fn dashboard_pipeline_smoke() {
    init();

    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let records = derive::build(&builtin_roster(), today).unwrap();

    let next = stats::next_celebration(&records).unwrap();
    assert_eq!(next.name, "Dorothée");
    assert_eq!(next.days_until, 8);

    let roster = stats::roster_records(&records).unwrap();
    assert_eq!(roster.elder, "Marie");
    assert_eq!(roster.rookie, "Nicolas");

    let matrix = stats::compatibility_matrix(&records);
    let people = records.iter().filter(|r| r.category.is_person()).count();
    assert_eq!(matrix.names.len(), people);
    for (i, row) in matrix.scores.iter().enumerate() {
        assert_eq!(row[i], 100);
        for (j, score) in row.iter().enumerate() {
            assert_eq!(*score, matrix.scores[j][i]);
        }
    }
    assert_eq!(compatibility(&records[0], &records[0]), 100);

    let mut store = FilterStore::new(
        records,
        IndexConfig::default(),
        Arc::new(MemoryStore::new()),
    );
    assert_eq!(store.filtered().len(), 27);
    store.set_search("aquamarine");
    assert!(store.filtered().names().contains(&"Brigitte"));
}
