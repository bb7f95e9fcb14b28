//! Scaled-score calibration tables.
//!
//! Four hand-calibrated tables map a raw correct-answer count to a
//! `(lower, upper)` scaled-score band. The values are opaque calibration
//! data and must not be edited. Each table covers exactly `0..=max_key`;
//! anything beyond it is a miss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scaled-score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: i32,
    pub upper: i32,
}

impl Bounds {
    /// Floor of the band midpoint.
    pub fn midpoint(&self) -> i32 {
        (self.lower + self.upper) / 2
    }
}

const fn b(lower: i32, upper: i32) -> Bounds {
    Bounds { lower, upper }
}

/// Subject family a table is calibrated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Verbal,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Math => write!(f, "math"),
            Subject::Verbal => write!(f, "verbal"),
        }
    }
}

/// Whether a table scores a full test or a single sectional module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestScope {
    Full,
    Sectional,
}

/// A calibration table indexed by raw correct-answer count.
#[derive(Debug, PartialEq, Eq)]
pub struct ScoreBandTable {
    subject: Subject,
    scope: TestScope,
    bands: &'static [Bounds],
}

impl ScoreBandTable {
    /// Select one of the four built-in tables.
    pub fn for_test(subject: Subject, scope: TestScope) -> &'static ScoreBandTable {
        match (scope, subject) {
            (TestScope::Full, Subject::Math) => &FULL_MATH,
            (TestScope::Full, Subject::Verbal) => &FULL_VERBAL,
            (TestScope::Sectional, Subject::Math) => &SECTIONAL_MATH,
            (TestScope::Sectional, Subject::Verbal) => &SECTIONAL_VERBAL,
        }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn scope(&self) -> TestScope {
        self.scope
    }

    /// Largest raw count with an entry.
    pub fn max_key(&self) -> u32 {
        self.bands.len() as u32 - 1
    }

    /// Band for a raw correct count, `None` outside `0..=max_key`.
    pub fn lookup(&self, raw_correct: u32) -> Option<Bounds> {
        self.bands.get(raw_correct as usize).copied()
    }

    /// All `(raw_correct, band)` entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, Bounds)> + '_ {
        self.bands.iter().enumerate().map(|(k, b)| (k as u32, *b))
    }
}

/// Full-test Math, raw counts `0..=44`.
pub static FULL_MATH: ScoreBandTable = ScoreBandTable {
    subject: Subject::Math,
    scope: TestScope::Full,
    bands: &FULL_MATH_BANDS,
};

/// Full-test Verbal, raw counts `0..=54`.
pub static FULL_VERBAL: ScoreBandTable = ScoreBandTable {
    subject: Subject::Verbal,
    scope: TestScope::Full,
    bands: &FULL_VERBAL_BANDS,
};

/// Sectional Math, raw counts `0..=22`.
pub static SECTIONAL_MATH: ScoreBandTable = ScoreBandTable {
    subject: Subject::Math,
    scope: TestScope::Sectional,
    bands: &SECTIONAL_MATH_BANDS,
};

/// Sectional Verbal, raw counts `0..=27`.
pub static SECTIONAL_VERBAL: ScoreBandTable = ScoreBandTable {
    subject: Subject::Verbal,
    scope: TestScope::Sectional,
    bands: &SECTIONAL_VERBAL_BANDS,
};

#[rustfmt::skip]
static FULL_MATH_BANDS: [Bounds; 45] = [
    b(200, 200), b(200, 200), b(200, 200), b(200, 200), b(200, 200),
    b(200, 200), b(210, 220), b(230, 240), b(240, 250), b(260, 270),
    b(270, 280), b(290, 300), b(300, 310), b(320, 330), b(330, 340),
    b(350, 360), b(360, 370), b(380, 390), b(390, 400), b(410, 420),
    b(420, 430), b(440, 450), b(450, 460), b(470, 480), b(480, 490),
    b(500, 510), b(510, 520), b(530, 540), b(540, 550), b(560, 570),
    b(570, 580), b(590, 600), b(600, 610), b(620, 630), b(630, 640),
    b(650, 660), b(660, 670), b(680, 690), b(690, 700), b(710, 720),
    b(720, 730), b(740, 750), b(750, 760), b(770, 780), b(800, 800),
];

#[rustfmt::skip]
static FULL_VERBAL_BANDS: [Bounds; 55] = [
    b(200, 200), b(200, 200), b(200, 200), b(200, 200), b(200, 200),
    b(200, 200), b(200, 200), b(210, 220), b(220, 230), b(230, 240),
    b(240, 250), b(250, 260), b(260, 270), b(280, 290), b(290, 300),
    b(300, 310), b(310, 320), b(330, 340), b(340, 350), b(350, 360),
    b(360, 370), b(370, 380), b(390, 400), b(400, 410), b(410, 420),
    b(420, 430), b(440, 450), b(450, 460), b(460, 470), b(470, 480),
    b(480, 490), b(500, 510), b(510, 520), b(520, 530), b(530, 540),
    b(550, 560), b(560, 570), b(570, 580), b(580, 590), b(590, 600),
    b(610, 620), b(620, 630), b(630, 640), b(640, 650), b(660, 670),
    b(670, 680), b(680, 690), b(690, 700), b(700, 710), b(720, 730),
    b(730, 740), b(740, 750), b(750, 760), b(770, 780), b(800, 800),
];

#[rustfmt::skip]
static SECTIONAL_MATH_BANDS: [Bounds; 23] = [
    b(200, 200), b(200, 200), b(200, 200), b(200, 200), b(200, 200),
    b(200, 200), b(210, 220), b(220, 230), b(230, 240), b(250, 260),
    b(260, 270), b(270, 280), b(280, 290), b(300, 310), b(310, 320),
    b(320, 330), b(340, 350), b(350, 360), b(360, 370), b(370, 380),
    b(380, 390), b(390, 400), b(400, 400),
];

#[rustfmt::skip]
static SECTIONAL_VERBAL_BANDS: [Bounds; 28] = [
    b(200, 200), b(200, 200), b(200, 200), b(200, 200), b(200, 200),
    b(200, 200), b(200, 200), b(210, 220), b(220, 230), b(230, 240),
    b(240, 250), b(250, 260), b(260, 270), b(270, 280), b(280, 290),
    b(290, 300), b(300, 310), b(310, 320), b(320, 330), b(330, 340),
    b(340, 350), b(350, 360), b(360, 370), b(370, 380), b(380, 390),
    b(390, 395), b(395, 400), b(400, 400),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_match_calibration() {
        assert_eq!(FULL_MATH.max_key(), 44);
        assert_eq!(FULL_VERBAL.max_key(), 54);
        assert_eq!(SECTIONAL_MATH.max_key(), 22);
        assert_eq!(SECTIONAL_VERBAL.max_key(), 27);
    }

    #[test]
    fn lookup_spot_checks() {
        assert_eq!(FULL_MATH.lookup(38), Some(b(690, 700)));
        assert_eq!(FULL_MATH.lookup(44), Some(b(800, 800)));
        assert_eq!(FULL_VERBAL.lookup(7), Some(b(210, 220)));
        assert_eq!(FULL_VERBAL.lookup(53), Some(b(770, 780)));
        assert_eq!(SECTIONAL_MATH.lookup(22), Some(b(400, 400)));
        assert_eq!(SECTIONAL_VERBAL.lookup(25), Some(b(390, 395)));
    }

    #[test]
    fn lookup_outside_domain_misses() {
        assert_eq!(FULL_MATH.lookup(45), None);
        assert_eq!(SECTIONAL_VERBAL.lookup(28), None);
    }

    #[test]
    fn bands_are_monotonic_and_ordered() {
        for table in [&FULL_MATH, &FULL_VERBAL, &SECTIONAL_MATH, &SECTIONAL_VERBAL] {
            let mut prev = b(200, 200);
            for (key, band) in table.entries() {
                assert!(band.lower <= band.upper, "{:?} key {key}", table.subject());
                assert!(band.lower >= prev.lower, "{:?} key {key}", table.subject());
                prev = band;
            }
        }
    }

    #[test]
    fn selection_by_subject_and_scope() {
        let t = ScoreBandTable::for_test(Subject::Verbal, TestScope::Sectional);
        assert_eq!(t.subject(), Subject::Verbal);
        assert_eq!(t.scope(), TestScope::Sectional);
        assert_eq!(t.max_key(), 27);
    }

    #[test]
    fn midpoint_floors() {
        assert_eq!(b(390, 395).midpoint(), 392);
        assert_eq!(b(690, 700).midpoint(), 695);
    }
}
