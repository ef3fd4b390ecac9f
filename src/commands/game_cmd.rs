//! Commands for the mini-games
//!
//! Each command plays one short session: the host supplies the child's
//! answers (or drops) in order and gets back what happened.

use serde::Serialize;

use crate::audio::MusicSession;
use crate::domain::Category;
use crate::games::{Question, QuizGame, QuizKind, TenInBed, Verdict};
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub kind: QuizKind,
    /// One entry per answer; `None` when no question was pending
    pub verdicts: Vec<Option<Verdict>>,
    /// The question left pending at the end
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BedReport {
    pub in_bed: Vec<u32>,
    pub remaining: Vec<u32>,
    pub complete: bool,
}

/// Pose a question and judge `answers` in turn
pub async fn play_quiz(
    state: &AppState,
    kind: QuizKind,
    answers: Vec<String>,
    seed: Option<u64>,
) -> Result<QuizReport, String> {
    let speaker = state.speaker.clone();
    let options = state.config.speech;

    let mut game = match kind {
        QuizKind::Letters => QuizGame::letters(speaker, options),
        QuizKind::Numbers => QuizGame::numbers(speaker, options),
        QuizKind::People => {
            let people = state
                .cards
                .load_collection(Category::People)
                .await
                .map_err(|e| e.to_string())?;
            let child = state.profiles.profile_or_default();
            QuizGame::people(people, child.display_name(), speaker, options)
        }
    };
    if let Some(seed) = seed {
        game = game.with_seed(seed);
    }

    game.start();
    let verdicts: Vec<Option<Verdict>> = answers.iter().map(|answer| game.answer(answer)).collect();

    Ok(QuizReport {
        kind,
        verdicts,
        question: game.question().cloned(),
    })
}

/// Drop numbers into the bed in order, with the game music playing
pub async fn play_ten_in_bed(state: &AppState, drops: Vec<u32>) -> Result<BedReport, String> {
    let mut music = MusicSession::start(state.music.clone());
    let mut bed = TenInBed::new(state.speaker.clone(), state.config.speech);

    for number in drops {
        bed.drop_in_bed(number).map_err(|e| e.user_message().to_string())?;
    }
    music.leave();

    Ok(BedReport {
        in_bed: bed.in_bed(),
        remaining: bed.remaining(),
        complete: bed.is_complete(),
    })
}
