//! Per-status tallies for sections and whole reports

use crate::{Item, Section, Status};
use serde::{Deserialize, Serialize};

/// Number of checks per status; absent statuses count as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct StatusCounts {
    pub pass: usize,
    pub warn: usize,
    pub note: usize,
    pub info: usize,
}

impl StatusCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a collection of items
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut counts = Self::new();
        for item in items {
            counts.record(item.status);
        }
        counts
    }

    /// Tally every item of every section
    pub fn from_sections(sections: &[Section]) -> Self {
        Self::from_items(sections.iter().flat_map(|s| s.items.iter()))
    }

    pub fn record(&mut self, status: Status) {
        match status {
            Status::Pass => self.pass += 1,
            Status::Warn => self.warn += 1,
            Status::Note => self.note += 1,
            Status::Info => self.info += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Pass => self.pass,
            Status::Warn => self.warn,
            Status::Note => self.note,
            Status::Info => self.info,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.warn + self.note + self.info
    }

    /// (status, count) pairs in PASS, WARN, NOTE, INFO order
    pub fn iter(&self) -> impl Iterator<Item = (Status, usize)> + '_ {
        Status::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: Status) -> Item {
        Item::new(status, "1.1", "check")
    }

    #[test]
    fn test_empty_defaults_to_zero() {
        let counts = StatusCounts::from_items(&Vec::<Item>::new());
        for status in Status::ALL {
            assert_eq!(counts.get(status), 0);
        }
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_each_status() {
        let items = vec![
            item(Status::Pass),
            item(Status::Warn),
            item(Status::Warn),
            item(Status::Info),
        ];
        let counts = StatusCounts::from_items(&items);
        assert_eq!(counts.pass, 1);
        assert_eq!(counts.warn, 2);
        assert_eq!(counts.note, 0);
        assert_eq!(counts.info, 1);
        assert_eq!(counts.total(), items.len());
    }

    #[test]
    fn test_from_sections_matches_per_section_sum() {
        let mut a = Section::new("1", "Host");
        a.items = vec![item(Status::Pass), item(Status::Note)];
        let mut b = Section::new("2", "Daemon");
        b.items = vec![item(Status::Note), item(Status::Warn), item(Status::Pass)];
        let sections = vec![a, b];

        let global = StatusCounts::from_sections(&sections);
        for status in Status::ALL {
            let per_section: usize = sections.iter().map(|s| s.counts().get(status)).sum();
            assert_eq!(global.get(status), per_section);
        }
        assert_eq!(global.total(), 5);
    }

    #[test]
    fn test_iter_is_in_display_order() {
        let mut counts = StatusCounts::new();
        counts.record(Status::Info);
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Status::Pass, 0),
                (Status::Warn, 0),
                (Status::Note, 0),
                (Status::Info, 1)
            ]
        );
    }

    #[test]
    fn test_serializes_with_status_keys() {
        let counts = StatusCounts {
            pass: 3,
            warn: 1,
            note: 0,
            info: 2,
        };
        let value = serde_json::to_value(counts).unwrap();
        assert_eq!(value["PASS"], 3);
        assert_eq!(value["WARN"], 1);
        assert_eq!(value["NOTE"], 0);
        assert_eq!(value["INFO"], 2);
    }
}
