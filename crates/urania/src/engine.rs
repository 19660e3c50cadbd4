use crate::aspects::{self, Aspect};
use crate::bodies::BodySet;
use crate::chart::{self, Chart};
use crate::cycles::{self, CycleState, Resonance};
use crate::ephemeris::{sample_instants, GeoLocation, PositionResolver, PositionTable};
use crate::error::{ConfigurationError, ResolutionError, Result};
use crate::forecast::{Forecast, ForecastSample, Horizon};
use crate::patterns::{self, Pattern};
use crate::profile::AnalysisProfile;
use crate::sentiment::{self, CompositeReport};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

/// Everything computed for one (instant, observer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub chart: Chart,
    pub aspects: Vec<Aspect>,
    pub patterns: Vec<Pattern>,
    pub cycles: Vec<CycleState>,
    pub resonance: Vec<Resonance>,
    pub report: CompositeReport,
}

/// The analysis pipeline over a position source and a validated profile.
pub struct Urania<R> {
    resolver: R,
    profile: AnalysisProfile,
}

impl<R: PositionResolver> Urania<R> {
    /// Validate the profile and build the engine.
    pub fn new(resolver: R, profile: AnalysisProfile) -> std::result::Result<Self, ConfigurationError> {
        profile.validate()?;
        Ok(Self { resolver, profile })
    }

    pub fn with_default_profile(resolver: R) -> Self {
        Self {
            resolver,
            profile: AnalysisProfile::default(),
        }
    }

    pub fn profile(&self) -> &AnalysisProfile {
        &self.profile
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn compute_chart(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
        bodies: &BodySet,
    ) -> Result<Chart> {
        Ok(chart::compute_chart(&self.resolver, instant, location, bodies, &self.profile)?)
    }

    pub fn compute_aspects(&self, chart: &Chart) -> Vec<Aspect> {
        aspects::compute_aspects(chart, &self.profile.aspects)
    }

    pub fn compute_patterns(&self, aspects: &[Aspect], chart: &Chart) -> Vec<Pattern> {
        patterns::compute_patterns(aspects, chart, self.profile.symmetry_window_deg)
    }

    pub fn compute_cycles(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
        bodies: &BodySet,
    ) -> Result<Vec<CycleState>> {
        Ok(cycles::compute_cycles(&self.resolver, instant, location, bodies, &self.profile)?)
    }

    pub fn harmonic_resonance(&self, cycles: &[CycleState]) -> Vec<Resonance> {
        cycles::harmonic_resonance(cycles, self.profile.resonance_threshold)
    }

    pub fn compute_composite_index(
        &self,
        chart: &Chart,
        aspects: &[Aspect],
        cycles: &[CycleState],
    ) -> CompositeReport {
        sentiment::compute_composite_index(chart, aspects, cycles, &self.profile)
    }

    /// Run the full pipeline once. Cycles reuse the chart's samples.
    pub fn snapshot(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
        bodies: &BodySet,
    ) -> Result<Snapshot> {
        let chart = self.compute_chart(instant, location, bodies)?;
        let aspects = self.compute_aspects(&chart);
        let patterns = self.compute_patterns(&aspects, &chart);
        let reference = cycles::reference_longitude(&self.resolver, &chart, &self.profile)?;
        let cycles = cycles::cycles_for_chart(&chart, reference);
        let resonance = self.harmonic_resonance(&cycles);
        let report = self.compute_composite_index(&chart, &aspects, &cycles);

        Ok(Snapshot {
            chart,
            aspects,
            patterns,
            cycles,
            resonance,
            report,
        })
    }

    /// Snapshot every sample instant of the horizon in parallel and average
    /// the aggregate index. The first resolution failure aborts the forecast.
    pub fn forecast(
        &self,
        start: DateTime<Utc>,
        location: &GeoLocation,
        bodies: &BodySet,
        horizon: Horizon,
    ) -> Result<Forecast> {
        let instants = horizon
            .sample_instants(start)
            .ok_or(ResolutionError::OutOfRange {
                body: self.profile.reference_body,
                instant: start,
            })?;
        let samples = instants
            .par_iter()
            .map(|instant| {
                self.snapshot(*instant, location, bodies).map(|snapshot| ForecastSample {
                    instant: *instant,
                    aggregate: snapshot.report.aggregate,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("{} forecast from {}: {} samples", horizon.label(), start, samples.len());
        Ok(Forecast::from_samples(horizon, start, samples))
    }

    /// Resolve every position the given snapshot instants need up front and
    /// return an engine over the resulting table.
    pub fn prefetch(
        &self,
        instants: &[DateTime<Utc>],
        location: &GeoLocation,
        bodies: &BodySet,
    ) -> Result<Urania<PositionTable>> {
        let reference = self.profile.reference_body;
        let mut all = Vec::with_capacity(instants.len() * 2);
        for instant in instants {
            all.extend(sample_instants(reference, *instant)?);
        }
        all.sort();
        all.dedup();

        let mut needed = bodies.as_slice().to_vec();
        if !bodies.contains(self.profile.reference_body) {
            needed.push(self.profile.reference_body);
        }

        let table = PositionTable::prefetch(&self.resolver, &needed, &all, location)?;
        Ok(Urania {
            resolver: table,
            profile: self.profile.clone(),
        })
    }
}
