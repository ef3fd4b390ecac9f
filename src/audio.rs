//! Audio Collaborators
//!
//! Speech and background music are provided by the host platform. The core
//! only talks to them through these traits.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Arc;

/// Volume for looped background music in the games
pub const MUSIC_VOLUME: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechOptions {
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

/// Text-to-speech engine
///
/// Fire-and-forget: implementations must not block and decide themselves
/// what happens to an utterance that overlaps a previous one.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str, options: &SpeechOptions);
}

/// Speaker for hosts without a speech engine
///
/// Logs the utterance and echoes it to stderr, leaving stdout to command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSpeaker;

impl LogSpeaker {
    fn echo<W: Write>(mut out: W, text: &str) -> io::Result<()> {
        writeln!(out, "🔊 {}", text)
    }
}

impl Speaker for LogSpeaker {
    fn speak(&self, text: &str, options: &SpeechOptions) {
        log::info!("speak (rate {}, pitch {}): {}", options.rate, options.pitch, text);
        if let Err(e) = Self::echo(io::stderr().lock(), text) {
            log::debug!("speech echo failed: {}", e);
        }
    }
}

/// Looping background music
pub trait MusicPlayer: Send + Sync {
    fn play_looping(&self, volume: f32);
    fn stop(&self);
    fn unload(&self);
}

/// Player for hosts without an audio backend
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMusicPlayer;

impl MusicPlayer for LogMusicPlayer {
    fn play_looping(&self, volume: f32) {
        log::info!("music: looping at volume {}", volume);
    }

    fn stop(&self) {
        log::info!("music: stopped");
    }

    fn unload(&self) {
        log::debug!("music: unloaded");
    }
}

/// Music that plays while a game screen is mounted
///
/// Stops and unloads the track when the screen is left, whether through
/// `leave()` or by dropping the session.
pub struct MusicSession {
    player: Arc<dyn MusicPlayer>,
    active: bool,
}

impl MusicSession {
    pub fn start(player: Arc<dyn MusicPlayer>) -> Self {
        player.play_looping(MUSIC_VOLUME);
        Self { player, active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn leave(&mut self) {
        if self.active {
            self.active = false;
            self.player.stop();
            self.player.unload();
        }
    }
}

impl Drop for MusicSession {
    fn drop(&mut self) {
        self.leave();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Speaker that remembers everything it was asked to say
    #[derive(Default)]
    pub struct RecordingSpeaker {
        spoken: Mutex<Vec<String>>,
    }

    impl RecordingSpeaker {
        pub fn spoken(&self) -> Vec<String> {
            self.spoken.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<String> {
            self.spoken.lock().unwrap().last().cloned()
        }
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&self, text: &str, _options: &SpeechOptions) {
            self.spoken.lock().unwrap().push(text.to_string());
        }
    }

    #[derive(Default)]
    pub struct RecordingPlayer {
        pub calls: Mutex<Vec<String>>,
    }

    impl MusicPlayer for RecordingPlayer {
        fn play_looping(&self, volume: f32) {
            self.calls.lock().unwrap().push(format!("play {}", volume));
        }

        fn stop(&self) {
            self.calls.lock().unwrap().push("stop".to_string());
        }

        fn unload(&self) {
            self.calls.lock().unwrap().push("unload".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingPlayer;
    use super::*;

    #[test]
    fn test_default_speech_options() {
        assert_eq!(SpeechOptions::default(), SpeechOptions { rate: 1.0, pitch: 1.0 });
    }

    #[test]
    fn test_log_speaker_echo_line() {
        let mut out = Vec::new();
        LogSpeaker::echo(&mut out, "I want Water").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "🔊 I want Water\n");

        // Echo goes to stderr, so stdout stays clean for JSON output
        LogSpeaker.speak("Hello", &SpeechOptions::default());
    }

    #[test]
    fn test_music_session_cleans_up_once() {
        let player = Arc::new(RecordingPlayer::default());
        let mut session = MusicSession::start(player.clone());
        assert!(session.is_active());

        session.leave();
        drop(session);

        assert_eq!(*player.calls.lock().unwrap(), vec!["play 0.2", "stop", "unload"]);
    }

    #[test]
    fn test_music_session_cleans_up_on_drop() {
        let player = Arc::new(RecordingPlayer::default());
        {
            let _session = MusicSession::start(player.clone());
        }
        assert_eq!(player.calls.lock().unwrap().len(), 3);
    }
}
