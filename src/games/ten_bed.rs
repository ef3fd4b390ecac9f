//! Ten in the Bed
//!
//! Numbers 1–10 are dragged into a bed. Gestures are handled by the host;
//! this tracks which numbers are in, announces each drop, and notices when
//! the bed is full.

use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::audio::{Speaker, SpeechOptions};
use crate::domain::{DomainError, DomainResult};

pub const BED_NUMBERS: RangeInclusive<u32> = 1..=10;

/// What a drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BedDrop {
    Added,
    /// Already in the bed; nothing changed
    AlreadyInBed,
    /// Added, and it was the last one
    Completed,
}

pub struct TenInBed {
    in_bed: BTreeSet<u32>,
    completed: bool,
    speaker: Arc<dyn Speaker>,
    options: SpeechOptions,
}

impl TenInBed {
    pub fn new(speaker: Arc<dyn Speaker>, options: SpeechOptions) -> Self {
        Self {
            in_bed: BTreeSet::new(),
            completed: false,
            speaker,
            options,
        }
    }

    pub fn drop_in_bed(&mut self, number: u32) -> DomainResult<BedDrop> {
        if !BED_NUMBERS.contains(&number) {
            return Err(DomainError::InvalidInput(format!(
                "{} is not a number from 1 to 10",
                number
            )));
        }
        if !self.in_bed.insert(number) {
            return Ok(BedDrop::AlreadyInBed);
        }

        self.speaker
            .speak(&format!("Number {} in the bed", number), &self.options);

        if self.in_bed.len() == BED_NUMBERS.count() {
            self.completed = true;
            log::info!("Ten in the bed completed");
            self.speaker.speak("All ten in the bed!", &self.options);
            return Ok(BedDrop::Completed);
        }
        Ok(BedDrop::Added)
    }

    /// Numbers in the bed, ascending
    pub fn in_bed(&self) -> Vec<u32> {
        self.in_bed.iter().copied().collect()
    }

    /// Numbers still waiting to be dragged in, ascending
    pub fn remaining(&self) -> Vec<u32> {
        BED_NUMBERS.filter(|n| !self.in_bed.contains(n)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn reset(&mut self) {
        self.in_bed.clear();
        self.completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingSpeaker;

    fn game() -> (TenInBed, Arc<RecordingSpeaker>) {
        let speaker = Arc::new(RecordingSpeaker::default());
        (TenInBed::new(speaker.clone(), SpeechOptions::default()), speaker)
    }

    #[test]
    fn test_drop_announces_and_sorts() {
        let (mut bed, speaker) = game();
        assert_eq!(bed.drop_in_bed(7).unwrap(), BedDrop::Added);
        assert_eq!(bed.drop_in_bed(2).unwrap(), BedDrop::Added);

        assert_eq!(bed.in_bed(), vec![2, 7]);
        assert_eq!(bed.remaining(), vec![1, 3, 4, 5, 6, 8, 9, 10]);
        assert_eq!(speaker.spoken(), vec!["Number 7 in the bed", "Number 2 in the bed"]);
    }

    #[test]
    fn test_repeat_drop_is_silent() {
        let (mut bed, speaker) = game();
        bed.drop_in_bed(4).unwrap();
        assert_eq!(bed.drop_in_bed(4).unwrap(), BedDrop::AlreadyInBed);
        assert_eq!(speaker.spoken().len(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let (mut bed, speaker) = game();
        assert!(bed.drop_in_bed(0).is_err());
        assert!(bed.drop_in_bed(11).is_err());
        assert!(bed.in_bed().is_empty());
        assert!(speaker.spoken().is_empty());
    }

    #[test]
    fn test_all_ten_completes() {
        let (mut bed, speaker) = game();
        for n in (2..=10).rev() {
            assert_eq!(bed.drop_in_bed(n).unwrap(), BedDrop::Added);
        }
        assert!(!bed.is_complete());

        assert_eq!(bed.drop_in_bed(1).unwrap(), BedDrop::Completed);
        assert!(bed.is_complete());
        assert!(bed.remaining().is_empty());
        assert_eq!(speaker.last().as_deref(), Some("All ten in the bed!"));

        bed.reset();
        assert!(!bed.is_complete());
        assert_eq!(bed.remaining().len(), 10);
    }
}
