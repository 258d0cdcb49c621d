//! Candidate dates of a single meeting.

use std::collections::BTreeSet;
use std::ops::Bound;

use chrono::NaiveDate;

/// The set of dates still possible for one meeting.
///
/// Dates are kept sorted, so iteration order is ascending and stable
/// across runs. A domain only shrinks after construction: there is no
/// insertion operation. `Clone` is a deep copy.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_csp::domain::MeetingDomain;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
/// let domain = MeetingDomain::from_range(start, end);
/// assert_eq!(domain.len(), 5); // leap year: 27, 28, 29, 1, 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingDomain {
    dates: BTreeSet<NaiveDate>,
}

impl MeetingDomain {
    /// Every date in `[start, end]`, both inclusive.
    ///
    /// Returns an empty domain when `start > end`.
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            dates: start.iter_days().take_while(|d| *d <= end).collect(),
        }
    }

    /// A domain holding exactly the given dates (duplicates collapse).
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Iterates over the candidates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Smallest candidate.
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Smallest candidate strictly after `date`.
    pub fn next_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.dates
            .range((Bound::Excluded(date), Bound::Unbounded))
            .next()
            .copied()
    }

    /// Whether `date` is still a candidate.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Removes a candidate. Returns whether it was present.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    /// Keeps only the candidates for which `keep` returns `true`.
    ///
    /// Returns the number of removed candidates.
    pub fn retain<F: FnMut(NaiveDate) -> bool>(&mut self, mut keep: F) -> usize {
        let before = self.dates.len();
        self.dates.retain(|d| keep(*d));
        before - self.dates.len()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether no candidate remains.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
