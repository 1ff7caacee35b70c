use std::fmt;

use serde::Serialize;
use tumble::core::state::RotationalState;
use tumble::investigation::diagnostics::Counters;
use tumble::investigation::probe::{AngularMomentumProbe, Probe, RotationalEnergyProbe, relative_drift};
use tumble::{StepRecord, core::body::InertiaTensor};

/// What a finished run reports.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub moments: [f64; 3],
    pub records: u64,
    pub first: Option<StepRecord>,
    pub last: Option<StepRecord>,
    pub counters: Option<Counters>,
    pub energy_drift: Option<f64>,
    pub momentum_drift: Option<f64>,
}

impl RunSummary {
    pub fn new(inertia: &InertiaTensor) -> Self {
        Self {
            moments: inertia.moments().to_array(),
            records: 0,
            first: None,
            last: None,
            counters: None,
            energy_drift: None,
            momentum_drift: None,
        }
    }

    pub fn record(&mut self, record: StepRecord) {
        self.records += 1;
        if self.first.is_none() {
            self.first = Some(record);
        }
        self.counters = Some(record.counters);
        self.last = Some(record);
    }

    /// Fills in the drift of the conserved quantities between the first and
    /// last record.
    pub fn close(&mut self, inertia: &InertiaTensor) {
        let (Some(first), Some(last)) = (self.first, self.last) else {
            return;
        };
        let at = |r: StepRecord| RotationalState { omega: r.omega, ..Default::default() };
        let drift = |probe: &dyn Probe| {
            let d = relative_drift(probe.measure(&at(first), inertia), probe.measure(&at(last), inertia));
            if !d.is_finite() {
                tracing::warn!(probe = probe.name(), "non-finite drift; the run diverged");
            }
            d
        };
        self.energy_drift = Some(drift(&RotationalEnergyProbe));
        self.momentum_drift = Some(drift(&AngularMomentumProbe));
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [ix, iy, iz] = self.moments;
        writeln!(f, "moments of inertia   ({ix:.3}, {iy:.3}, {iz:.3})")?;
        writeln!(f, "records              {}", self.records)?;
        if let Some(last) = &self.last {
            writeln!(f, "final t              {:.6}", last.t)?;
            writeln!(f, "final angle          {:.6}", last.angle)?;
            writeln!(f, "final W              {:.6}", last.omega)?;
        }
        match self.counters {
            Some(Counters::SignChanges { n_x, n_y, n_z }) => {
                writeln!(f, "sign changes         ({n_x}, {n_y}, {n_z})")?
            }
            Some(Counters::Flips { axis: Some(axis), n }) => writeln!(f, "flips about {axis}        {n}")?,
            Some(Counters::Flips { axis: None, .. }) => writeln!(f, "flips                no intermediate axis")?,
            Some(Counters::None) | None => {}
        }
        if let (Some(e), Some(l)) = (self.energy_drift, self.momentum_drift) {
            writeln!(f, "energy drift         {:+.3e}", e)?;
            writeln!(f, "momentum drift       {:+.3e}", l)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn record(step: u64, omega: DVec3) -> StepRecord {
        StepRecord {
            step,
            t: step as f64,
            angle: DVec3::ZERO,
            omega,
            alpha: DVec3::ZERO,
            jerk: DVec3::ZERO,
            counters: Counters::None,
        }
    }

    #[test]
    fn tracks_first_and_last() {
        let inertia = InertiaTensor::new(1.0, 2.0, 3.0).unwrap();
        let mut summary = RunSummary::new(&inertia);
        summary.record(record(0, DVec3::new(0.0, 1.0, 0.0)));
        summary.record(record(1, DVec3::new(0.0, 2.0, 0.0)));
        summary.close(&inertia);

        assert_eq!(summary.records, 2);
        assert_eq!(summary.first.unwrap().step, 0);
        assert_eq!(summary.last.unwrap().step, 1);
        assert_eq!(summary.energy_drift, Some(3.0));
        assert_eq!(summary.momentum_drift, Some(1.0));
    }

    #[test]
    fn empty_summary_has_no_drift() {
        let inertia = InertiaTensor::new(1.0, 2.0, 3.0).unwrap();
        let mut summary = RunSummary::new(&inertia);
        summary.close(&inertia);
        assert_eq!(summary.energy_drift, None);
    }
}
