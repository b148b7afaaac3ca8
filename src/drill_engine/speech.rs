//! Spoken output: utterance text, voice choice, and the speaker capability.
//!
//! The platform speech engine is abstracted behind [`Speaker`]. Callers build
//! a [`Narrator`] once with the loaded [`Preferences`] and the voices the
//! platform reports, then ask it to read numbers, words, letters,
//! solutions and clock times. Every utterance cancels whatever is still pending first.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::drill_engine::{
    clock::{time_text, ClockTime},
    error::Result,
    models::Problem,
    preferences::{Preferences, VoicePreference},
};

/// Slower than conversational speech so young listeners can follow.
pub const DEFAULT_RATE: f32 = 0.7;
pub const DEFAULT_PITCH: f32 = 1.0;
pub const LETTER_PITCH: f32 = 1.1;
pub const DEFAULT_VOLUME: f32 = 1.0;

const DAD_NAME_HINTS: [&str; 7] = ["male", "man", "david", "james", "daniel", "alex", "tom"];
const CHILD_NAME_HINTS: [&str; 5] = ["child", "kids", "girl", "junior", "young"];
const MOM_NAME_HINTS: [&str; 7] = ["female", "woman", "samantha", "susan", "karen", "tessa", "serena"];

/// A voice as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Voice { name: name.into(), lang: lang.into() }
    }

    fn is_english(&self) -> bool {
        self.lang.contains("en")
    }

    fn name_has_any(&self, hints: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        hints.iter().any(|h| name.contains(h))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Voice name; `None` leaves the platform default.
    pub voice: Option<String>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Utterance {
            text: text.into(),
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
            volume: DEFAULT_VOLUME,
            voice: None,
        }
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_voice(mut self, voice: Option<&Voice>) -> Self {
        self.voice = voice.map(|v| v.name.clone());
        self
    }
}

/// Pick an English voice matching the preference.
///
/// Dad prefers male-sounding names, then any English voice not marked
/// female. Mom prefers child voices, then female names, then any English
/// voice.
pub fn select_voice(voices: &[Voice], preference: VoicePreference) -> Option<&Voice> {
    let english = || voices.iter().filter(|v| v.is_english());
    match preference {
        VoicePreference::Dad => english()
            .find(|v| v.name_has_any(&DAD_NAME_HINTS))
            .or_else(|| english().find(|v| !v.name.to_lowercase().contains("female"))),
        VoicePreference::Mom => english()
            .find(|v| v.name_has_any(&CHILD_NAME_HINTS))
            .or_else(|| english().find(|v| v.name_has_any(&MOM_NAME_HINTS)))
            .or_else(|| english().next()),
    }
}

/// Phonetic spelling for a letter, or the input itself for anything else.
pub fn phonetic(letter: &str) -> String {
    let sound = match letter.to_lowercase().as_str() {
        "a" => "ay", "b" => "bee", "c" => "see", "d" => "dee", "e" => "ee",
        "f" => "eff", "g" => "gee", "h" => "aitch", "i" => "eye", "j" => "jay",
        "k" => "kay", "l" => "ell", "m" => "em", "n" => "en", "o" => "oh",
        "p" => "pee", "q" => "cue", "r" => "arr", "s" => "ess", "t" => "tee",
        "u" => "you", "v" => "vee", "w" => "double-you", "x" => "ex", "y" => "why",
        "z" => "zee",
        _ => return letter.to_string(),
    };
    sound.to_string()
}

/// e.g. `"30 divided by 5 equals 6"`.
pub fn solution_text(problem: &Problem) -> String {
    format!(
        "{} {} {} equals {}",
        problem.first_operand,
        problem.operator.spoken(),
        problem.second_operand,
        problem.result
    )
}

/// Platform text-to-speech capability.
pub trait Speaker {
    /// Drop anything queued or playing.
    fn cancel_all(&mut self);

    /// Start speaking. Implementations signal completion on their own terms.
    fn speak(&mut self, utterance: Utterance) -> Result<()>;
}

/// Stands in for platforms without speech support.
#[derive(Debug, Default)]
pub struct NoopSpeaker;

impl Speaker for NoopSpeaker {
    fn cancel_all(&mut self) {}

    fn speak(&mut self, utterance: Utterance) -> Result<()> {
        warn!(text = %utterance.text, "speech synthesis not supported, dropping utterance");
        Ok(())
    }
}

/// Captures utterances instead of playing them.
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    pub spoken: Vec<Utterance>,
    pub cancellations: usize,
}

impl Speaker for RecordingSpeaker {
    fn cancel_all(&mut self) {
        self.cancellations += 1;
    }

    fn speak(&mut self, utterance: Utterance) -> Result<()> {
        self.spoken.push(utterance);
        Ok(())
    }
}

pub struct Narrator<S: Speaker> {
    speaker: S,
    preferences: Preferences,
    voices: Vec<Voice>,
}

impl<S: Speaker> Narrator<S> {
    pub fn new(speaker: S, preferences: Preferences, voices: Vec<Voice>) -> Self {
        Narrator { speaker, preferences, voices }
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    pub fn into_speaker(self) -> S {
        self.speaker
    }

    /// Voices often arrive after startup; replace the list when they do.
    pub fn set_voices(&mut self, voices: Vec<Voice>) {
        self.voices = voices;
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    fn say(&mut self, utterance: Utterance) -> Result<()> {
        let voice = select_voice(&self.voices, self.preferences.voice_preference);
        let utterance = utterance.with_voice(voice);
        debug!(text = %utterance.text, voice = ?utterance.voice, "speaking");
        self.speaker.cancel_all();
        self.speaker.speak(utterance)
    }

    pub fn speak_number(&mut self, number: i64) -> Result<()> {
        self.say(Utterance::new(number.to_string()))
    }

    pub fn speak_word(&mut self, word: &str) -> Result<()> {
        self.say(Utterance::new(word))
    }

    pub fn speak_letter(&mut self, letter: &str) -> Result<()> {
        self.say(Utterance::new(phonetic(letter)).with_pitch(LETTER_PITCH))
    }

    pub fn speak_solution(&mut self, problem: &Problem) -> Result<()> {
        self.say(Utterance::new(solution_text(problem)))
    }

    /// Times table rows read the same way as multiplication solutions.
    pub fn speak_times_row(&mut self, row: &Problem) -> Result<()> {
        self.speak_solution(row)
    }

    pub fn speak_time(&mut self, time: ClockTime) -> Result<()> {
        self.say(Utterance::new(time_text(time)))
    }
}
