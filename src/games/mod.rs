//! Mini-games

mod quiz;
mod ten_bed;

pub use quiz::{Question, QuizGame, QuizKind, QuizPhase, Verdict};
pub use ten_bed::{BedDrop, TenInBed, BED_NUMBERS};
