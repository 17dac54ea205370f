use crate::filter;
use crate::PreviewRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed,
}

/// Owns the authoritative collection and the visible subset.
///
/// `load`, `prepend` and `refilter` are the only ways either list changes,
/// and each of them leaves the visible subset consistent with the search
/// text it was given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataStore {
    records: Vec<PreviewRecord>,
    visible: Vec<PreviewRecord>,
    load_state: LoadState,
    /// Number of records at the front of `records` added by `prepend` since
    /// the last load or search change. They stay visible regardless of the
    /// filter.
    pinned: usize,
}

impl DataStore {
    pub fn records(&self) -> &[PreviewRecord] {
        &self.records
    }

    pub fn visible(&self) -> &[PreviewRecord] {
        &self.visible
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Returns false if a load was already started.
    pub(crate) fn begin_load(&mut self) -> bool {
        if self.load_state != LoadState::NotStarted {
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Replaces both lists with `records` in received order. Malformed
    /// records are dropped; returns how many.
    pub(crate) fn load(&mut self, records: Vec<PreviewRecord>, search_text: &str) -> usize {
        let received = records.len();
        self.records = records
            .into_iter()
            .filter(PreviewRecord::is_well_formed)
            .collect();
        self.load_state = LoadState::Loaded;
        self.pinned = 0;
        self.refresh(search_text);
        received - self.records.len()
    }

    /// Both lists stay empty.
    pub(crate) fn load_failed(&mut self) {
        self.records.clear();
        self.visible.clear();
        self.pinned = 0;
        self.load_state = LoadState::Failed;
    }

    /// Inserts `record` at the front of the collection and of the visible
    /// subset, whether or not it matches `search_text`.
    pub(crate) fn prepend(&mut self, record: PreviewRecord, search_text: &str) {
        self.records.insert(0, record);
        self.pinned += 1;
        self.refresh(search_text);
    }

    /// Search text changed: the filter applies to every record again.
    pub(crate) fn refilter(&mut self, search_text: &str) {
        self.pinned = 0;
        self.refresh(search_text);
    }

    fn refresh(&mut self, search_text: &str) {
        let (pinned, rest) = self.records.split_at(self.pinned.min(self.records.len()));
        let mut visible = pinned.to_vec();
        visible.extend(filter::recompute(rest, search_text));
        self.visible = visible;
    }
}
