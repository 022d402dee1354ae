//! Frequency module - represents a set of angular frequencies to query
//!
//! Provides a convenient way to build the frequency axis a Padé approximant
//! is evaluated on. Internally every grid is stored as angular frequency
//! (radians per unit time), matching the time step of the sampled signal.

use std::f64::consts::PI;

use crate::error::{PadeError, Result};

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    /// Angular frequency, radians per unit time
    #[default]
    Angular,
    /// Ordinary frequency, cycles per unit time
    Ordinary,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to angular frequency
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Angular => 1.0,
            FrequencyUnit::Ordinary => 2.0 * PI,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "angular" | "rad" | "omega" => Some(FrequencyUnit::Angular),
            "ordinary" | "cycles" | "hz" => Some(FrequencyUnit::Ordinary),
            _ => None,
        }
    }
}

/// Sweep type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    #[default]
    Linear,
    Log,
}

/// An ordered set of angular frequencies
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    /// Angular frequencies
    w: Vec<f64>,
    /// Display unit
    unit: FrequencyUnit,
    /// Sweep type (linear or log)
    sweep_type: SweepType,
}

impl FrequencyGrid {
    /// Create a new grid with start/stop/npoints
    ///
    /// # Arguments
    /// * `start` - Start frequency in the specified unit
    /// * `stop` - Stop frequency in the specified unit
    /// * `npoints` - Number of frequency points
    /// * `unit` - Frequency unit
    /// * `sweep_type` - Linear or logarithmic sweep
    ///
    /// A logarithmic sweep needs `start > 0` and `stop > 0`.
    ///
    /// # Example
    /// ```
    /// use pade_core::frequency::{FrequencyGrid, FrequencyUnit, SweepType};
    /// let grid = FrequencyGrid::new(0.5, 1.5, 11, FrequencyUnit::Angular, SweepType::Linear).unwrap();
    /// assert_eq!(grid.npoints(), 11);
    /// assert!(FrequencyGrid::new(0.0, 1.5, 11, FrequencyUnit::Angular, SweepType::Log).is_err());
    /// ```
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: FrequencyUnit,
        sweep_type: SweepType,
    ) -> Result<Self> {
        if sweep_type == SweepType::Log {
            if !(start > 0.0) {
                return Err(PadeError::InvalidArgument {
                    arg: "start",
                    reason: "must be positive for a logarithmic sweep",
                });
            }
            if !(stop > 0.0) {
                return Err(PadeError::InvalidArgument {
                    arg: "stop",
                    reason: "must be positive for a logarithmic sweep",
                });
            }
        }

        let mult = unit.multiplier();
        Ok(Self {
            w: sweep(start * mult, stop * mult, npoints, sweep_type),
            unit,
            sweep_type,
        })
    }

    /// Linear grid of angular frequencies
    pub fn linspace(start: f64, stop: f64, npoints: usize) -> Self {
        Self {
            w: sweep(start, stop, npoints, SweepType::Linear),
            unit: FrequencyUnit::Angular,
            sweep_type: SweepType::Linear,
        }
    }

    /// Create from a frequency vector given in `unit`
    pub fn from_vec(values: Vec<f64>, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        Self {
            w: values.into_iter().map(|x| x * mult).collect(),
            unit,
            sweep_type: SweepType::Linear, // actual sweep type unknown
        }
    }

    /// Positive FFT bins `1..n/2` of an `n`-point transform with time step `dt`
    ///
    /// This is the frequency axis returned by [`crate::signal::ft`], which makes
    /// the Padé spectrum directly comparable to the FFT reference.
    pub fn fft_bins(n: usize, dt: f64) -> Self {
        Self {
            w: crate::signal::positive_angular_frequencies(n, dt).to_vec(),
            unit: FrequencyUnit::Angular,
            sweep_type: SweepType::Linear,
        }
    }

    /// Get the angular frequencies
    #[inline]
    pub fn w(&self) -> &[f64] {
        &self.w
    }

    /// Get the frequencies in the display unit
    pub fn scaled(&self) -> Vec<f64> {
        let mult = self.unit.multiplier();
        self.w.iter().map(|&x| x / mult).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.w.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    /// Get the start angular frequency
    #[inline]
    pub fn start(&self) -> f64 {
        self.w.first().copied().unwrap_or(0.0)
    }

    /// Get the stop angular frequency
    #[inline]
    pub fn stop(&self) -> f64 {
        self.w.last().copied().unwrap_or(0.0)
    }

    /// Spacing of a linear grid (0 for fewer than two points)
    pub fn step(&self) -> f64 {
        if self.w.len() < 2 {
            return 0.0;
        }
        (self.stop() - self.start()) / (self.w.len() - 1) as f64
    }

    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    #[inline]
    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// Get the frequency span
    #[inline]
    pub fn span(&self) -> f64 {
        self.stop() - self.start()
    }
}

/// `npoints` values from `start` to `stop`, both included
fn sweep(start: f64, stop: f64, npoints: usize, sweep_type: SweepType) -> Vec<f64> {
    match (npoints, sweep_type) {
        (0, _) => Vec::new(),
        (1, _) => vec![start],
        (_, SweepType::Linear) => {
            let step = (stop - start) / (npoints - 1) as f64;
            (0..npoints).map(|i| start + i as f64 * step).collect()
        }
        (_, SweepType::Log) => {
            let log_start = start.ln();
            let log_step = (stop.ln() - log_start) / (npoints - 1) as f64;
            (0..npoints)
                .map(|i| (log_start + i as f64 * log_step).exp())
                .collect()
        }
    }
}
