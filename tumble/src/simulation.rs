use std::iter::FusedIterator;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::core::body::InertiaTensor;
use crate::core::solve::{ExplicitEuler, Integrator};
use crate::core::state::RotationalState;
use crate::error::{Result, SimError};
use crate::investigation::diagnostics::{Counters, Tracker};
use crate::investigation::observer::RunObserver;

/// Snapshot of one emitted step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Internal step index this record was taken at.
    pub step: u64,
    pub t: f64,
    pub angle: DVec3,
    pub omega: DVec3,
    pub alpha: DVec3,
    pub jerk: DVec3,
    pub counters: Counters,
}

impl StepRecord {
    fn snapshot(step: u64, state: &RotationalState, counters: Counters) -> Self {
        Self {
            step,
            t: state.t,
            angle: state.angle,
            omega: state.omega,
            alpha: state.alpha,
            jerk: state.jerk,
            counters,
        }
    }
}

/// The complete output of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub inertia: InertiaTensor,
    pub records: Vec<StepRecord>,
}

impl RunResult {
    /// Counters as of the last emitted record.
    pub fn final_counters(&self) -> Option<Counters> {
        self.records.last().map(|r| r.counters)
    }
}

/// Decides which internal steps are emitted and computes jerk across the
/// emitted interval, so jerk describes the sampled trajectory rather than
/// every internal step.
#[derive(Debug, Clone)]
pub(crate) struct Sampler {
    store_every: u64,
    interval: f64,
    last_alpha: Option<DVec3>,
}

impl Sampler {
    /// `store_every` must be at least 1; [`Simulation::new`] rejects zero.
    pub(crate) fn new(store_every: u64, dt: f64) -> Self {
        debug_assert!(store_every > 0, "zero stride reached the sampler");
        Self {
            store_every,
            interval: store_every as f64 * dt,
            last_alpha: None,
        }
    }

    pub fn should_emit(&self, step: u64) -> bool {
        step % self.store_every == 0
    }

    /// Jerk at an emission. Zero for the first one.
    pub fn jerk(&mut self, alpha: DVec3) -> DVec3 {
        let jerk = match self.last_alpha {
            Some(prev) => (alpha - prev) / self.interval,
            None => DVec3::ZERO,
        };
        self.last_alpha = Some(alpha);
        jerk
    }
}

/// Index of the last internal step for `[start, stop]` at step `dt`.
///
/// The quotient is truncated, but one that lands within floating-point noise
/// of a whole number is taken as that number (10 / 1e-4 gives 100000).
/// Fails when the count does not fit the step counter.
pub fn last_step_index(start: f64, stop: f64, dt: f64) -> Result<u64> {
    let raw = (stop - start) / dt;
    if !(raw < u64::MAX as f64) {
        return Err(SimError::HorizonTooLong { steps: raw });
    }
    let nearest = raw.round();
    if (raw - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        Ok(nearest as u64)
    } else {
        Ok(raw.floor() as u64)
    }
}

/// A validated run. Each call to [`Simulation::trajectory`] replays the run
/// from its initial conditions.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: RunConfig,
    inertia: InertiaTensor,
    last_step: u64,
}

impl Simulation {
    pub fn new(config: RunConfig) -> Result<Self> {
        let inertia = config.body.inertia()?;

        if !(config.dt.is_finite() && config.dt > 0.0) {
            return Err(SimError::InvalidTimeStep(config.dt));
        }
        if !config.start.is_finite() {
            return Err(SimError::NonFinite("start time"));
        }
        if !config.stop.is_finite() {
            return Err(SimError::NonFinite("stop time"));
        }
        if config.stop < config.start {
            return Err(SimError::InvertedInterval {
                start: config.start,
                stop: config.stop,
            });
        }
        if !config.initial.angle.is_finite() {
            return Err(SimError::NonFinite("initial angle"));
        }
        if !config.initial.omega.is_finite() {
            return Err(SimError::NonFinite("initial angular velocity"));
        }
        if config.store_every == 0 {
            return Err(SimError::ZeroStride);
        }

        let last_step = last_step_index(config.start, config.stop, config.dt)?;
        tracing::debug!(
            moments = ?inertia.moments(),
            last_step,
            store_every = config.store_every,
            "simulation validated"
        );

        Ok(Self {
            config,
            inertia,
            last_step,
        })
    }

    pub fn inertia(&self) -> &InertiaTensor {
        &self.inertia
    }

    /// Number of internal steps, including step 0.
    pub fn internal_steps(&self) -> u64 {
        self.last_step + 1
    }

    /// Number of records a full run emits.
    pub fn expected_records(&self) -> u64 {
        self.last_step / self.config.store_every + 1
    }

    /// A fresh, lazily evaluated run.
    pub fn trajectory(&self) -> Trajectory {
        Trajectory::new(self)
    }

    /// Runs to completion and collects every record.
    pub fn run(&self) -> Result<RunResult> {
        let mut records = Vec::with_capacity(self.expected_records().min(1 << 20) as usize);
        for record in self.trajectory() {
            records.push(record?);
        }
        Ok(RunResult {
            inertia: self.inertia,
            records,
        })
    }
}

/// Lazily integrates a run, yielding one [`StepRecord`] per sampled step.
///
/// Each internal step evaluates accelerations, updates the diagnostics,
/// possibly emits, and only then advances velocity, angle and time. The
/// stream cannot be rewound; ask the [`Simulation`] for a new one instead.
pub struct Trajectory {
    config: RunConfig,
    inertia: InertiaTensor,
    last_step: u64,
    step: u64,
    state: RotationalState,
    previous: Option<RotationalState>,
    integrator: ExplicitEuler,
    tracker: Box<dyn Tracker>,
    sampler: Sampler,
    observer: Option<Box<dyn RunObserver>>,
    emitted: u64,
    started: bool,
    finished: bool,
}

impl Trajectory {
    fn new(sim: &Simulation) -> Self {
        let config = sim.config.clone();
        let state = RotationalState::new(config.start, config.initial.angle, config.initial.omega);
        Self {
            tracker: config.diagnostics.tracker(&sim.inertia),
            sampler: Sampler::new(config.store_every, config.dt),
            inertia: sim.inertia,
            last_step: sim.last_step,
            step: 0,
            state,
            previous: None,
            integrator: ExplicitEuler,
            observer: None,
            emitted: 0,
            started: false,
            finished: false,
            config,
        }
    }

    pub fn with_observer(mut self, observer: impl RunObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    fn finish(&mut self) {
        self.finished = true;
        let counters = self.tracker.counters();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_finish(self.step, self.emitted, counters);
        }
    }
}

impl Iterator for Trajectory {
    type Item = Result<StepRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            if let Some(observer) = self.observer.as_mut() {
                observer.on_start(&self.config, &self.inertia);
            }
        }

        while self.step <= self.last_step {
            let step = self.step;

            if let Err(err) = self.integrator.accelerate(&mut self.state, &self.inertia) {
                tracing::error!(%err, step, "integration aborted");
                self.finished = true;
                return Some(Err(err));
            }

            let counters = match &self.previous {
                Some(old) => self.tracker.on_step(old, &self.state),
                None => self.tracker.counters(),
            };
            self.previous = Some(self.state);

            let record = if self.sampler.should_emit(step) {
                self.state.jerk = self.sampler.jerk(self.state.alpha);
                Some(StepRecord::snapshot(step, &self.state, counters))
            } else {
                None
            };

            self.integrator.advance(&mut self.state, self.config.dt);
            self.step += 1;

            if let Some(record) = record {
                self.emitted += 1;
                return Some(Ok(record));
            }
        }

        self.finish();
        None
    }
}

impl FusedIterator for Trajectory {}
