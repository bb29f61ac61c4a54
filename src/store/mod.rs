//! Reactive filter store: search text, category toggles and theme drive a
//! sorted view over the derived records.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::derive::DerivedBirthday;
use crate::roster::{Category, RecordKey};
use crate::search::{IndexConfig, SearchIndex};
use crate::storage::{read_json, write_json, KeyValueStore, FILTER_STATE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

/// Which categories the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryToggles {
    pub male: bool,
    pub female: bool,
    pub anniversary: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self {
            male: true,
            female: true,
            anniversary: false,
        }
    }
}

impl CategoryToggles {
    pub fn allows(&self, category: Category) -> bool {
        match category {
            Category::Male => self.male,
            Category::Female => self.female,
            Category::Anniversary => self.anniversary,
        }
    }

    pub fn toggle(&mut self, category: Category) {
        let flag = match category {
            Category::Male => &mut self.male,
            Category::Female => &mut self.female,
            Category::Anniversary => &mut self.anniversary,
        };
        *flag = !*flag;
    }
}

/// User-controlled filter settings. `expanded` is session-only and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    pub show: CategoryToggles,
    pub theme: Theme,
    #[serde(skip)]
    pub expanded: Option<RecordKey>,
}

/// Read-only view over the records selected by the current [`FilterState`].
#[derive(Debug, Clone, Copy)]
pub struct FilteredView<'a> {
    records: &'a [DerivedBirthday],
    indices: &'a [usize],
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Positions of the selected records in the full record set.
    pub fn indices(&self) -> &'a [usize] {
        self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a DerivedBirthday> + 'a {
        let records = self.records;
        self.indices.iter().map(move |index| &records[*index])
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.iter().map(|record| record.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FilterState, &FilteredView<'_>)>;

pub struct FilterStore {
    records: Vec<DerivedBirthday>,
    index: SearchIndex,
    state: FilterState,
    view: Vec<usize>,
    persistence: Arc<dyn KeyValueStore>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStore")
            .field("records", &self.records.len())
            .field("state", &self.state)
            .field("view", &self.view.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl FilterStore {
    /// Builds the search index and rehydrates the persisted state.
    ///
    /// A missing or unreadable state falls back to [`FilterState::default`].
    pub fn new(
        records: Vec<DerivedBirthday>,
        config: IndexConfig,
        persistence: Arc<dyn KeyValueStore>,
    ) -> Self {
        let state = match read_json::<FilterState>(persistence.as_ref(), FILTER_STATE_KEY) {
            Ok(Some(state)) => state,
            Ok(None) => FilterState::default(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable filter state");
                FilterState::default()
            }
        };
        let index = SearchIndex::new(&records, config);
        let mut store = Self {
            records,
            index,
            state,
            view: Vec::new(),
            persistence,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.recompute();
        store
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn records(&self) -> &[DerivedBirthday] {
        &self.records
    }

    pub fn filtered(&self) -> FilteredView<'_> {
        FilteredView {
            records: &self.records,
            indices: &self.view,
        }
    }

    /// Record currently expanded, when it is still part of the view.
    pub fn expanded(&self) -> Option<&DerivedBirthday> {
        let key = self.state.expanded.as_ref()?;
        self.filtered()
            .iter()
            .find(|record| record.name == key.name && record.date == key.date)
    }

    /// Applies `change`, recomputes the view, persists, then notifies subscribers in order.
    pub fn update<F>(&mut self, change: F)
    where
        F: FnOnce(&mut FilterState),
    {
        change(&mut self.state);
        self.recompute();
        self.persist();
        self.notify();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.search = text);
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.update(|state| state.show.toggle(category));
    }

    pub fn toggle_theme(&mut self) {
        self.update(|state| state.theme = state.theme.toggled());
    }

    /// Expands `key`, or collapses it when it is already expanded.
    pub fn toggle_expanded(&mut self, key: RecordKey) {
        self.update(|state| {
            state.expanded = if state.expanded.as_ref() == Some(&key) {
                None
            } else {
                Some(key)
            };
        });
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&FilterState, &FilteredView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn recompute(&mut self) {
        let query = self.state.search.trim();
        let candidates = if query.is_empty() {
            (0..self.records.len()).collect()
        } else {
            self.index.matching_indices(query)
        };
        let show = self.state.show;
        let records = &self.records;
        let mut view: Vec<usize> = candidates
            .into_iter()
            .filter(|index| show.allows(records[*index].category))
            .collect();
        view.sort_by_key(|index| records[*index].days_until);
        tracing::trace!(query, shown = view.len(), total = records.len(), "filter view recomputed");
        self.view = view;
    }

    fn persist(&self) {
        if let Err(err) = write_json(self.persistence.as_ref(), FILTER_STATE_KEY, &self.state) {
            tracing::warn!(error = %err, "failed to persist filter state");
        }
    }

    fn notify(&mut self) {
        let view = FilteredView {
            records: &self.records,
            indices: &self.view,
        };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state, &view);
        }
    }
}
