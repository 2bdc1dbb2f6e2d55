//! Per-frame driver wiring the simulation to its collaborators
//!
//! The caller owns the clock and calls [`Session::frame`] once per displayed
//! frame with a monotonic timestamp and the elapsed frame time. The session
//! decides whether the simulation steps (post-score pause), forwards events
//! to the sound trigger and hands a snapshot to the renderer.

use crate::{
    GameEvent, InputBuffer, InputSource, PauseState, Renderer, Simulation, SoundBackend,
    SoundTrigger,
};

pub struct Session<I, S, R> {
    sim: Simulation,
    input: I,
    sound: SoundTrigger<S>,
    renderer: R,
    pause: PauseState,
    buffer: InputBuffer,
    frames: u64,
}

impl<I, S, R> Session<I, S, R>
where
    I: InputSource,
    S: SoundBackend,
    R: Renderer,
{
    pub fn new(sim: Simulation, input: I, sound: SoundTrigger<S>, renderer: R) -> Self {
        Self {
            sim,
            input,
            sound,
            renderer,
            pause: PauseState::new(),
            buffer: InputBuffer::new(),
            frames: 0,
        }
    }

    /// Serve the opening ball and build the session
    pub fn start(mut sim: Simulation, input: I, sound: SoundTrigger<S>, renderer: R) -> Self {
        sim.start();
        Self::new(sim, input, sound, renderer)
    }

    /// Run one displayed frame. Returns the events produced, empty while paused.
    pub fn frame(&mut self, now_ms: f64, elapsed: f32) -> Vec<GameEvent> {
        self.frames += 1;

        // Input is sampled every frame so nothing is lost during a pause
        self.buffer.push(self.input.poll());

        let mut events = Vec::new();
        if self.pause.is_advancing(now_ms) {
            let control = self.buffer.take().resolve();
            events.extend_from_slice(self.sim.step(control, elapsed));

            if let Some(scorer) = events.iter().find_map(|e| match e {
                GameEvent::Scored(side) => Some(*side),
                _ => None,
            }) {
                let pause_ms = self.sim.config().pause_ms;
                self.pause.start(now_ms, pause_ms);
                log::debug!("{scorer:?} point, pausing {pause_ms}ms at frame {}", self.frames);
            }

            self.sound.play_events(&events);
        }

        match self.sim.frame(self.pause.is_paused()) {
            Some(frame) => self.renderer.render(&frame),
            None => log::warn!("frame {} has no entities to render", self.frames),
        }

        events
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn pause_state(&self) -> PauseState {
        self.pause
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn sound(&self) -> &SoundTrigger<S> {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut SoundTrigger<S> {
        &mut self.sound
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
