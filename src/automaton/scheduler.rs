use super::grid::{Automaton, Builder, Cell};
use crate::{Error, Result};
use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// A cellular automaton rule: seeds generation 0 and produces each cell's
/// next state from its context.
///
/// Both callbacks read the previous generation through the [`Cell`] context
/// and return the state to store; they never mutate the grid directly.
pub trait Rule {
    type State: Clone + Default;

    /// Initial state of one cell. Neighbor reads are not meaningful here.
    fn construct(&mut self, cell: &mut Cell<Self::State>) -> Self::State;

    /// Next state of one cell from its previous state and neighborhood.
    fn transition(&mut self, cell: &mut Cell<Self::State>) -> Self::State;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
}

/// Owns an automaton and its rule and drives ticking.
///
/// The phase machine is `Idle -> Running -> Idle`: [`start`](Simulation::start)
/// runs the construction pass and arms the pacer, each [`tick`](Simulation::tick)
/// is one full scan plus buffer swap, [`stop`](Simulation::stop) returns to
/// idle. Everything is synchronous on the calling thread, so ticks can never
/// overlap and a started scan always runs to completion.
pub struct Simulation<R: Rule> {
    automaton: Automaton<R::State>,
    rule: R,
    phase: Phase,
    fps: u32,
    pacer: Pacer,
}

impl<R: Rule> Simulation<R> {
    pub fn new(builder: Builder, rule: R) -> Result<Self> {
        let fps = builder.fps();
        if fps == 0 {
            return Err(Error::ZeroFramerate);
        }
        Ok(Self {
            automaton: builder.build()?,
            rule,
            phase: Phase::Idle,
            fps,
            pacer: Pacer::new(tick_interval(fps)),
        })
    }

    pub fn automaton(&self) -> &Automaton<R::State> {
        &self.automaton
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn framerate(&self) -> u32 {
        self.fps
    }

    /// Ticks per second actually achieved by paced ticking, smoothed.
    pub fn measured_fps(&self) -> f64 {
        self.pacer.measured_fps()
    }

    /// Changes the tick rate. Allowed in either phase; while running the
    /// pacer is re-armed with the new interval and the simulation stays
    /// running.
    pub fn set_framerate(&mut self, fps: u32) -> Result<()> {
        if fps == 0 {
            return Err(Error::ZeroFramerate);
        }
        self.fps = fps;
        self.pacer.set_interval(tick_interval(fps));
        Ok(())
    }

    /// Runs the construction pass and enters the running phase.
    pub fn start(&mut self) -> Result<()> {
        if self.phase == Phase::Running {
            return Err(Error::AlreadyRunning);
        }
        log::debug!(
            "starting {}x{} simulation at {} fps",
            self.automaton.width(),
            self.automaton.height(),
            self.fps
        );
        let rule = &mut self.rule;
        self.automaton.construct(|cell| rule.construct(cell));
        self.pacer.rearm();
        self.phase = Phase::Running;
        Ok(())
    }

    /// Leaves the running phase; no further ticks until the next `start`.
    pub fn stop(&mut self) -> Result<()> {
        if self.phase == Phase::Idle {
            return Err(Error::NotRunning);
        }
        log::debug!(
            "stopped after {} generations",
            self.automaton.generation()
        );
        self.phase = Phase::Idle;
        Ok(())
    }

    /// One full scan plus buffer swap. Gated by the phase flag: fails with
    /// [`Error::NotRunning`] while idle.
    pub fn tick(&mut self) -> Result<()> {
        if self.phase == Phase::Idle {
            return Err(Error::NotRunning);
        }
        let rule = &mut self.rule;
        self.automaton.step(|cell| rule.transition(cell));
        Ok(())
    }

    /// Drives `ticks` paced ticks, sleeping between them to hold the
    /// configured rate.
    pub fn run_for(&mut self, ticks: u64) -> Result<()> {
        for _ in 0..ticks {
            self.tick()?;
            self.pacer.delay();
        }
        Ok(())
    }
}

/// Interval between ticks at the given rate, truncated to milliseconds.
fn tick_interval(fps: u32) -> Duration {
    Duration::from_millis(1000 / fps as u64)
}

/// Sleep-based tick pacing with a smoothed rate readout.
struct Pacer {
    interval: Duration,
    timer: Instant,
    frametime_smoothed: f64,
}

impl Pacer {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.rearm();
    }

    fn rearm(&mut self) {
        self.timer = Instant::now();
    }

    fn measured_fps(&self) -> f64 {
        if self.frametime_smoothed == 0. {
            0.
        } else {
            1. / self.frametime_smoothed
        }
    }

    fn delay(&mut self) {
        let elapsed = self.timer.elapsed();
        if self.interval > elapsed {
            sleep(self.interval - elapsed);
        }

        let frametime = self.timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.timer = Instant::now();
    }
}
