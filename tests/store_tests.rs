mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use birthday_core::{
    derive,
    i18n::Locale,
    roster::{builtin_roster, Category},
    search::IndexConfig,
    storage::{json_backend::JsonFileStore, KeyValueStore, FILTER_STATE_KEY},
    store::{FilterStore, Theme},
};
use common::{day, sample_roster, setup_test_env};

fn store_over(persistence: Arc<dyn KeyValueStore>) -> FilterStore {
    let records = derive::build(&sample_roster(), day(2024, 3, 1)).unwrap();
    FilterStore::new(records, IndexConfig::default(), persistence)
}

#[test]
fn default_view_hides_anniversaries_and_sorts_by_countdown() {
    let (persistence, _, _) = setup_test_env();
    let store = store_over(persistence);
    assert_eq!(store.filtered().names(), vec!["Cy", "Ada Lovelace", "Bob"]);
}

#[test]
fn state_survives_a_restart_without_the_expanded_row() {
    let (persistence, _, base) = setup_test_env();
    {
        let mut store = store_over(persistence.clone());
        store.set_search("bob");
        store.toggle_category(Category::Anniversary);
        store.toggle_theme();
        let key = store.filtered().iter().next().unwrap().key();
        store.toggle_expanded(key);
        assert!(store.expanded().is_some());
    }

    let reopened = Arc::new(JsonFileStore::new(Some(base)).unwrap());
    assert!(reopened.get(FILTER_STATE_KEY).unwrap().is_some());
    let store = store_over(reopened);
    let state = store.state();
    assert_eq!(state.search, "bob");
    assert!(state.show.anniversary);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.expanded, None);
    assert_eq!(store.filtered().names(), vec!["Bob"]);
}

#[test]
fn subscribers_see_each_change_after_it_is_applied() {
    let (persistence, _, _) = setup_test_env();
    let mut store = store_over(persistence);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = store.subscribe(move |state, view| {
        sink.borrow_mut().push((state.search.clone(), view.len()));
    });

    store.set_search("ada");
    store.set_search("");
    assert!(store.unsubscribe(id));
    store.set_search("cy");

    assert_eq!(
        *seen.borrow(),
        vec![("ada".to_string(), 1), (String::new(), 3)]
    );
}

#[test]
fn french_index_matches_localized_labels() {
    let (persistence, _, _) = setup_test_env();
    let records = derive::build(&builtin_roster(), day(2024, 3, 1)).unwrap();
    let config = IndexConfig {
        locale: Locale::Fr,
        ..IndexConfig::default()
    };
    let mut store = FilterStore::new(records, config, persistence);
    store.set_search("Poissons");
    let names = store.filtered().names();
    assert!(names.contains(&"Brigitte"), "{names:?}");
    assert!(names.contains(&"Dorothée"), "{names:?}");
}
