//! Blood-pressure parsing and scoring.
//!
//! Readings arrive as free-form text. Only `<digits>/<digits>` (after trimming surrounding
//! whitespace) is accepted; everything else is "unparsed" and scores zero. A side too large
//! for `u16` saturates at `u16::MAX`.

use serde::{Deserialize, Serialize};

/// Parsed systolic/diastolic pair.
///
/// Both halves are `Some` or both are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BloodPressureReading {
    pub systolic: Option<u16>,
    pub diastolic: Option<u16>,
}

impl BloodPressureReading {
    pub const UNPARSED: Self = Self {
        systolic: None,
        diastolic: None,
    };

    pub fn is_parsed(&self) -> bool {
        self.systolic.is_some() && self.diastolic.is_some()
    }
}

/// Parses a raw blood-pressure field. Never fails; a non-match yields
/// [`BloodPressureReading::UNPARSED`].
pub fn parse_blood_pressure(raw: Option<&str>) -> BloodPressureReading {
    let Some((systolic, diastolic)) = raw.map(str::trim).and_then(|t| t.split_once('/')) else {
        return BloodPressureReading::UNPARSED;
    };

    match (parse_component(systolic), parse_component(diastolic)) {
        (Some(systolic), Some(diastolic)) => BloodPressureReading {
            systolic: Some(systolic),
            diastolic: Some(diastolic),
        },
        _ => BloodPressureReading::UNPARSED,
    }
}

fn parse_component(part: &str) -> Option<u16> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(part.parse().unwrap_or(u16::MAX))
}

/// Which rule of the blood-pressure table matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    Unparsed,
    Normal,
    Elevated,
    Stage1,
    Stage2,
    /// No rule matched. Unreachable with the current table but scored as zero.
    Unclassified,
}

impl BloodPressureCategory {
    pub fn score(self) -> u8 {
        match self {
            BloodPressureCategory::Unparsed
            | BloodPressureCategory::Normal
            | BloodPressureCategory::Unclassified => 0,
            BloodPressureCategory::Elevated => 1,
            BloodPressureCategory::Stage1 => 2,
            BloodPressureCategory::Stage2 => 3,
        }
    }
}

/// Categorises a parsed reading.
///
/// Rules are evaluated in order. Stage 1 matches on systolic 130-139 OR diastolic 80-89,
/// and is checked before stage 2, so `150/85` is stage 1.
pub fn blood_pressure_category(reading: BloodPressureReading) -> BloodPressureCategory {
    let (Some(s), Some(d)) = (reading.systolic, reading.diastolic) else {
        return BloodPressureCategory::Unparsed;
    };

    if s < 120 && d < 80 {
        BloodPressureCategory::Normal
    } else if (120..=129).contains(&s) && d < 80 {
        BloodPressureCategory::Elevated
    } else if (130..=139).contains(&s) || (80..=89).contains(&d) {
        BloodPressureCategory::Stage1
    } else if s >= 140 || d >= 90 {
        BloodPressureCategory::Stage2
    } else {
        BloodPressureCategory::Unclassified
    }
}

/// Blood-pressure sub-score in `0..=3` for a raw field.
pub fn blood_pressure_score(raw: Option<&str>) -> u8 {
    blood_pressure_category(parse_blood_pressure(raw)).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(s: u16, d: u16) -> BloodPressureReading {
        BloodPressureReading {
            systolic: Some(s),
            diastolic: Some(d),
        }
    }

    #[test]
    fn test_parse_accepts_digits_slash_digits() {
        assert_eq!(parse_blood_pressure(Some("120/80")), reading(120, 80));
        assert_eq!(parse_blood_pressure(Some("  95/60 ")), reading(95, 60));
        assert_eq!(parse_blood_pressure(Some("0/0")), reading(0, 0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in [
            "", "/", "150/", "/90", "INVALID", "N/A", "120/80/70", "120 / 80", "12a/80",
            "-120/80", "+120/80", "120.5/80",
        ] {
            assert_eq!(
                parse_blood_pressure(Some(raw)),
                BloodPressureReading::UNPARSED,
                "input: {raw:?}"
            );
        }
        assert!(!parse_blood_pressure(None).is_parsed());
    }

    #[test]
    fn test_oversized_component_saturates() {
        assert_eq!(parse_blood_pressure(Some("99999/80")), reading(u16::MAX, 80));
        assert_eq!(parse_blood_pressure(Some("120/123456789012")), reading(120, u16::MAX));
        // Diastolic stage-1 clause wins over the saturated systolic.
        assert_eq!(blood_pressure_score(Some("99999/80")), 2);
        assert_eq!(blood_pressure_score(Some("250/99999")), 3);
    }

    #[test]
    fn test_category_table() {
        assert_eq!(blood_pressure_category(reading(118, 76)), BloodPressureCategory::Normal);
        assert_eq!(blood_pressure_category(reading(120, 79)), BloodPressureCategory::Elevated);
        assert_eq!(blood_pressure_category(reading(129, 79)), BloodPressureCategory::Elevated);
        assert_eq!(blood_pressure_category(reading(130, 70)), BloodPressureCategory::Stage1);
        assert_eq!(blood_pressure_category(reading(139, 79)), BloodPressureCategory::Stage1);
        assert_eq!(blood_pressure_category(reading(140, 70)), BloodPressureCategory::Stage2);
        assert_eq!(blood_pressure_category(reading(110, 90)), BloodPressureCategory::Stage2);
        assert_eq!(
            blood_pressure_category(BloodPressureReading::UNPARSED),
            BloodPressureCategory::Unparsed
        );
    }

    #[test]
    fn test_stage1_diastolic_clause_takes_precedence() {
        // Normal systolic, stage-1 diastolic.
        assert_eq!(blood_pressure_score(Some("110/85")), 2);
        // Elevated systolic, stage-1 diastolic.
        assert_eq!(blood_pressure_score(Some("125/85")), 2);
        // Stage-2 systolic still lands in stage 1 because that rule is checked first.
        assert_eq!(blood_pressure_score(Some("150/85")), 2);
        // Stage-1 systolic with stage-2 diastolic likewise.
        assert_eq!(blood_pressure_score(Some("135/95")), 2);
    }

    #[test]
    fn test_scores() {
        assert_eq!(blood_pressure_score(Some("118/76")), 0);
        assert_eq!(blood_pressure_score(Some("125/78")), 1);
        assert_eq!(blood_pressure_score(Some("135/78")), 2);
        assert_eq!(blood_pressure_score(Some("150/95")), 3);
        assert_eq!(blood_pressure_score(Some("")), 0);
        assert_eq!(blood_pressure_score(None), 0);
    }

    #[test]
    fn test_every_parsed_reading_has_a_rule() {
        for s in (0..=300).step_by(5) {
            for d in (0..=200).step_by(5) {
                let category = blood_pressure_category(reading(s, d));
                assert_ne!(category, BloodPressureCategory::Unclassified, "{s}/{d}");
                assert!(category.score() <= 3);
            }
        }
    }

    #[test]
    fn test_unclassified_scores_zero() {
        assert_eq!(BloodPressureCategory::Unclassified.score(), 0);
    }
}
