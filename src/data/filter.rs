use std::collections::BTreeSet;

use super::model::{Domains, GameDataset, GameRecord, YearRange};

// ---------------------------------------------------------------------------
// Filter predicate: which genres, ratings and years are selected
// ---------------------------------------------------------------------------

/// The current widget values, rebuilt on every UI event.
///
/// All three predicates are conjunctive. An empty set selects nothing; it is
/// never treated as "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub genres: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    pub years: YearRange,
}

impl FilterSelection {
    /// Everything selected: the default state of the widgets.
    pub fn all(domains: &Domains) -> Self {
        FilterSelection {
            genres: domains.genres.clone(),
            ratings: domains.ratings.clone(),
            years: domains.year_range,
        }
    }

    /// Whether a record passes every predicate.
    pub fn matches(&self, rec: &GameRecord) -> bool {
        self.years.contains(rec.year)
            && self.ratings.contains(&rec.rating)
            && self.genres.contains(&rec.genre)
    }

    /// True when no record can possibly match.
    pub fn is_vacuous(&self) -> bool {
        self.genres.is_empty() || self.ratings.is_empty() || self.years.is_empty()
    }
}

/// Return indices of records that pass the selection, in table order.
pub fn filtered_indices(dataset: &GameDataset, selection: &FilterSelection) -> Vec<usize> {
    if selection.is_vacuous() {
        return Vec::new();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect()
}
