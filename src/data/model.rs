use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

/// Whether a text cell counts as missing.
pub fn is_blank_cell(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Records released before this year are outside the analysis window.
pub const MIN_RELEASE_YEAR: i32 = 2000;

// ---------------------------------------------------------------------------
// Column names as they appear in the source header
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Name";
pub const COL_PLATFORM: &str = "Platform";
pub const COL_YEAR: &str = "Year_of_Release";
pub const COL_GENRE: &str = "Genre";
pub const COL_PUBLISHER: &str = "Publisher";
pub const COL_CRITIC_SCORE: &str = "Critic_Score";
pub const COL_USER_SCORE: &str = "User_Score";
pub const COL_RATING: &str = "Rating";

/// Every column a source file must provide.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_NAME,
    COL_PLATFORM,
    COL_YEAR,
    COL_GENRE,
    COL_PUBLISHER,
    COL_CRITIC_SCORE,
    COL_USER_SCORE,
    COL_RATING,
];

// ---------------------------------------------------------------------------
// RawRecord – one row as read from disk, before cleaning
// ---------------------------------------------------------------------------

/// A source row with every cell optional.
///
/// Numeric cells that fail to parse (`tbd`, `N/A`, ...) are read as `None`
/// rather than failing the whole file. Cells of columns outside the model are
/// not kept, only whether any of them was blank.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Platform")]
    pub platform: Option<String>,
    #[serde(rename = "Year_of_Release", default, deserialize_with = "csv::invalid_option")]
    pub year: Option<f64>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Publisher")]
    pub publisher: Option<String>,
    #[serde(rename = "Critic_Score", default, deserialize_with = "csv::invalid_option")]
    pub critic_score: Option<f64>,
    #[serde(rename = "User_Score", default, deserialize_with = "csv::invalid_option")]
    pub user_score: Option<f64>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    /// Some cell of the source row, in any column, was empty or null.
    #[serde(skip)]
    pub has_blank_cell: bool,
}

impl RawRecord {
    /// Convert into a typed record, or `None` if any cell of the row is missing.
    pub fn into_record(self) -> Option<GameRecord> {
        if self.has_blank_cell {
            return None;
        }
        let text = |v: Option<String>| v.filter(|s| !is_blank_cell(s));
        let number = |v: Option<f64>| v.filter(|f| f.is_finite());

        Some(GameRecord {
            title: text(self.name)?,
            platform: text(self.platform)?,
            year: number(self.year)? as i32,
            genre: text(self.genre)?,
            publisher: text(self.publisher)?,
            critic_score: number(self.critic_score)?,
            user_score: number(self.user_score)?,
            rating: text(self.rating)?,
        })
    }
}

// ---------------------------------------------------------------------------
// GameRecord – one cleaned row
// ---------------------------------------------------------------------------

/// A single game release on one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub title: String,
    pub platform: String,
    pub year: i32,
    pub genre: String,
    /// Kept for completeness; nothing filters or aggregates on it.
    pub publisher: String,
    pub critic_score: f64,
    pub user_score: f64,
    pub rating: String,
}

// ---------------------------------------------------------------------------
// YearRange
// ---------------------------------------------------------------------------

/// Inclusive range of release years. `low > high` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    pub low: i32,
    pub high: i32,
}

impl YearRange {
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.low <= year && year <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// Domains – distinct values observed at load time
// ---------------------------------------------------------------------------

/// Filter domains used to seed the widgets and the default selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Domains {
    pub genres: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    pub platforms: BTreeSet<String>,
    /// Every distinct year present, ascending.
    pub years: Vec<i32>,
    /// `(min, max)` of `years`.
    pub year_range: YearRange,
}

impl Domains {
    /// Collect domains from cleaned records. `None` for an empty slice.
    pub fn from_records(records: &[GameRecord]) -> Option<Self> {
        let mut genres = BTreeSet::new();
        let mut ratings = BTreeSet::new();
        let mut platforms = BTreeSet::new();
        let mut years = BTreeSet::new();

        for rec in records {
            genres.insert(rec.genre.clone());
            ratings.insert(rec.rating.clone());
            platforms.insert(rec.platform.clone());
            years.insert(rec.year);
        }

        let year_range = YearRange::new(*years.first()?, *years.last()?);
        Some(Domains {
            genres,
            ratings,
            platforms,
            years: years.into_iter().collect(),
            year_range,
        })
    }
}

// ---------------------------------------------------------------------------
// GameDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The cleaned table plus its domains. Immutable once built.
#[derive(Debug, Clone)]
pub struct GameDataset {
    pub records: Vec<GameRecord>,
    pub domains: Domains,
}

impl GameDataset {
    /// Build the dataset, or `None` when there are no records to describe.
    pub fn from_records(records: Vec<GameRecord>) -> Option<Self> {
        let domains = Domains::from_records(&records)?;
        Some(GameDataset { records, domains })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawRecord {
        RawRecord {
            name: Some("Halo 2".into()),
            platform: Some("XB".into()),
            year: Some(2004.0),
            genre: Some("Shooter".into()),
            publisher: Some("Microsoft Game Studios".into()),
            critic_score: Some(95.0),
            user_score: Some(7.7),
            rating: Some("M".into()),
            has_blank_cell: false,
        }
    }

    #[test]
    fn complete_raw_record_converts() {
        let rec = raw().into_record().unwrap();
        assert_eq!(rec.year, 2004);
        assert_eq!(rec.platform, "XB");
        assert_eq!(rec.user_score, 7.7);
    }

    #[test]
    fn any_missing_field_drops_the_row() {
        let cases: [fn(&mut RawRecord); 9] = [
            |r| r.name = None,
            |r| r.platform = Some("  ".into()),
            |r| r.year = None,
            |r| r.genre = None,
            |r| r.publisher = None,
            |r| r.critic_score = Some(f64::NAN),
            |r| r.user_score = None,
            |r| r.rating = Some(String::new()),
            |r| r.has_blank_cell = true,
        ];
        for mutate in cases {
            let mut r = raw();
            mutate(&mut r);
            assert!(r.clone().into_record().is_none(), "{r:?}");
        }
    }

    #[test]
    fn year_range_is_inclusive_and_inverted_is_empty() {
        let r = YearRange::new(2001, 2003);
        assert!(r.contains(2001) && r.contains(2003));
        assert!(!r.contains(2000) && !r.contains(2004));

        let inverted = YearRange::new(2005, 2001);
        assert!(inverted.is_empty());
        assert!((1990..2020).all(|y| !inverted.contains(y)));
    }

    #[test]
    fn domains_are_sorted_and_bounded() {
        let mut a = raw().into_record().unwrap();
        let mut b = a.clone();
        a.year = 2008;
        a.genre = "Action".into();
        b.year = 2002;
        b.rating = "T".into();

        let domains = Domains::from_records(&[a, b]).unwrap();
        assert_eq!(domains.years, vec![2002, 2008]);
        assert_eq!(domains.year_range, YearRange::new(2002, 2008));
        assert_eq!(
            domains.genres.iter().collect::<Vec<_>>(),
            vec!["Action", "Shooter"]
        );
        assert_eq!(domains.ratings.len(), 2);
        assert!(Domains::from_records(&[]).is_none());
    }
}
