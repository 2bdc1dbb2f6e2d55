//! Headless Pong runner
//!
//! Drives a `Session` without a display or audio device: a scripted input
//! source stands in for the player, sound cues are logged, and the final
//! frame is printed as JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use game_core::{
    Config, GameEvent, GameRng, InputSignal, InputSource, KeyState, LastFrame, Session,
    Simulation, SoundBackend, SoundCue, SoundError, SoundTrigger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputMode {
    /// Nobody at the controls
    None,
    /// Pointer sweeping up and down the field
    Sweep,
    /// Up and down keys held alternately
    Keys,
}

#[derive(Debug, Parser)]
#[command(name = "pong-headless", about = "Run the Pong simulation without a display")]
struct Args {
    /// Number of frames to run
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Serve RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Elapsed frame units passed to each tick
    #[arg(long, default_value_t = 1.0)]
    elapsed: f32,

    /// Wall-clock milliseconds per frame
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    frame_ms: f64,

    /// JSON config file; defaults are used for missing keys
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = InputMode::Sweep)]
    input: InputMode,
}

/// Scripted stand-in for mouse and keyboard
struct ScriptedInput {
    mode: InputMode,
    keys: KeyState,
    field_height: f32,
    tick: u64,
}

impl ScriptedInput {
    fn new(mode: InputMode, field_height: f32) -> Self {
        Self {
            mode,
            keys: KeyState::new(),
            field_height,
            tick: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSignal {
        self.tick += 1;
        match self.mode {
            InputMode::None => InputSignal::default(),
            InputMode::Sweep => {
                let phase = self.tick as f32 / 90.0;
                let y = self.field_height * (0.5 + 0.4 * phase.sin());
                InputSignal::pointer(y)
            }
            InputMode::Keys => {
                if self.tick % 120 == 1 {
                    self.keys.key_up("ArrowDown");
                    self.keys.key_down("ArrowUp");
                } else if self.tick % 120 == 61 {
                    self.keys.key_up("ArrowUp");
                    self.keys.key_down("ArrowDown");
                }
                InputSignal::direction(self.keys.direction())
            }
        }
    }
}

/// Writes cues to the log instead of a speaker
#[derive(Default)]
struct LogBackend {
    played: u64,
}

impl SoundBackend for LogBackend {
    fn play(&mut self, cue: SoundCue) -> Result<(), SoundError> {
        let tone = cue.tone();
        log::trace!(
            "beep {cue:?}: {:.0}Hz {:?} for {:.0}ms",
            tone.frequency_hz,
            tone.waveform,
            tone.duration_ms
        );
        self.played += 1;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::new(),
    };
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!(
        "Running {} frames on a {}x{} field, input {:?}",
        args.frames,
        config.field_width,
        config.field_height,
        args.input
    );

    let input = ScriptedInput::new(args.input, config.field_height);
    let sim = Simulation::new(config, rng)?;
    let mut sound = SoundTrigger::with_backend(LogBackend::default());
    sound.unlock();

    let mut session = Session::start(sim, input, sound, LastFrame::default());

    let mut bounces = 0u64;
    for frame in 0..args.frames {
        let now_ms = frame as f64 * args.frame_ms;
        for event in session.frame(now_ms, args.elapsed) {
            if let GameEvent::PaddleBounce(_) = event {
                bounces += 1;
            }
        }
    }

    let score = session.simulation().score();
    log::info!(
        "Finished: player {} - cpu {}, {} paddle hits, {} cues played",
        score.player,
        score.cpu,
        bounces,
        session.sound().backend().map(|b| b.played).unwrap_or(0)
    );

    if let Some(frame) = session.renderer().frame {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    }
    Ok(())
}
