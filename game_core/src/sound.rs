//! Sound cues
//!
//! The simulation never talks to an audio device. Events are mapped to
//! [`SoundCue`]s and handed to a [`SoundTrigger`], which owns the backend
//! and its readiness. Playback is fire-and-forget: failures are logged and
//! dropped.

use crate::resources::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Ball hits top or bottom wall
    WallBounce,
    /// Ball hits either paddle
    PaddleBounce,
    /// Either side scores
    Score,
}

impl SoundCue {
    pub fn from_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::WallBounce => SoundCue::WallBounce,
            GameEvent::PaddleBounce(_) => SoundCue::PaddleBounce,
            GameEvent::Scored(_) => SoundCue::Score,
        }
    }

    /// Synth parameters for backends that generate tones
    pub fn tone(self) -> Tone {
        match self {
            // Higher ping
            SoundCue::WallBounce => Tone {
                frequency_hz: 400.0,
                duration_ms: 80.0,
                waveform: Waveform::Sine,
                gain: 0.3,
            },
            // Solid thump
            SoundCue::PaddleBounce => Tone {
                frequency_hz: 600.0,
                duration_ms: 100.0,
                waveform: Waveform::Square,
                gain: 0.4,
            },
            // Low buzz
            SoundCue::Score => Tone {
                frequency_hz: 150.0,
                duration_ms: 400.0,
                waveform: Waveform::Sawtooth,
                gain: 0.5,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// A single oscillator beep with a linear fade-out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: f32,
    pub waveform: Waveform,
    pub gain: f32,
}

/// Errors a backend may report while starting a cue
#[derive(thiserror::Error, Debug)]
pub enum SoundError {
    #[error("audio backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to play {cue:?}: {reason}")]
    Playback { cue: SoundCue, reason: String },
}

/// Audio output capable of playing a cue
pub trait SoundBackend {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError>;
}

/// Browsers only allow audio after a user gesture, so backends start locked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SoundReadiness {
    #[default]
    Locked,
    Ready,
}

/// Owns the backend and decides whether a cue is played or dropped
pub struct SoundTrigger<B> {
    backend: Option<B>,
    readiness: SoundReadiness,
    muted: bool,
    dropped: u64,
}

impl<B> Default for SoundTrigger<B> {
    fn default() -> Self {
        Self {
            backend: None,
            readiness: SoundReadiness::Locked,
            muted: false,
            dropped: 0,
        }
    }
}

impl<B: SoundBackend> SoundTrigger<B> {
    /// Trigger with no backend yet; every cue is dropped
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(backend: B) -> Self {
        Self {
            backend: Some(backend),
            ..Self::default()
        }
    }

    /// Attach a backend that was created lazily
    pub fn attach(&mut self, backend: B) {
        self.backend = Some(backend);
    }

    /// Mark audio as allowed (after the first user gesture)
    pub fn unlock(&mut self) {
        if self.readiness != SoundReadiness::Ready {
            log::info!("audio unlocked");
        }
        self.readiness = SoundReadiness::Ready;
    }

    pub fn readiness(&self) -> SoundReadiness {
        self.readiness
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == SoundReadiness::Ready && self.backend.is_some() && !self.muted
    }

    /// Number of cues that were requested but not played
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Play `cue` if possible. Never fails.
    pub fn try_play(&mut self, cue: SoundCue) {
        if !self.is_ready() {
            self.dropped += 1;
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(e) = backend.play(cue) {
            self.dropped += 1;
            log::warn!("sound cue dropped: {e}");
        }
    }

    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.try_play(SoundCue::from_event(event));
        }
    }
}

/// Backend that records cues instead of playing them
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub played: Vec<SoundCue>,
}

impl SoundBackend for RecordingBackend {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        self.played.push(cue);
        Ok(())
    }
}
