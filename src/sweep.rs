//! Frequency sweep requested from the engine (`FR` card).

use std::fmt;

use crate::cards::format::Real;
use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Linear frequency sweep, expressed in MHz as the card expects.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySweep {
    /// Number of frequency steps.
    pub steps: u32,
    /// First frequency in MHz.
    pub start_mhz: Scalar,
    /// Increment between steps in MHz.
    pub step_mhz: Scalar,
}

impl FrequencySweep {
    /// Single frequency at `frequency_hz`, with the customary 0.5 MHz increment field.
    #[must_use]
    pub fn single(frequency_hz: Scalar) -> Self {
        Self { steps: 1, start_mhz: frequency_hz / 1.0e6, step_mhz: 0.5 }
    }

    /// Sweep of `steps` frequencies starting at `start_mhz`.
    #[must_use]
    pub fn linear(start_mhz: Scalar, step_mhz: Scalar, steps: u32) -> Self {
        Self { steps, start_mhz, step_mhz }
    }

    /// Every frequency of the sweep in MHz.
    #[must_use]
    pub fn frequencies_mhz(&self) -> Vec<Scalar> {
        let n = self.steps as usize;
        let stop = self.start_mhz + self.step_mhz * (n.max(1) - 1) as Scalar;
        linspace(self.start_mhz, stop, n)
    }
}

impl Default for FrequencySweep {
    fn default() -> Self {
        Self::linear(8.0, 0.5, 1)
    }
}

impl fmt::Display for FrequencySweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FR 0 {} 0 0 {} {}", self.steps, Real(self.start_mhz), Real(self.step_mhz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn single_frequency_card() {
        let fr = FrequencySweep::single(10.5e6);
        assert_eq!(fr.to_string(), "FR 0 1 0 0 10.5 0.5");
        assert_eq!(fr.frequencies_mhz(), vec![10.5]);
    }

    #[test]
    fn multi_step_sweep_lists_frequencies() {
        let fr = FrequencySweep::linear(8.0, 0.5, 9);
        let f = fr.frequencies_mhz();
        assert_eq!(f.len(), 9);
        assert_relative_eq!(f[8], 12.0, epsilon = 1e-12);
        assert_eq!(fr.to_string(), "FR 0 9 0 0 8.0 0.5");
    }

    #[test]
    fn empty_sweep_has_no_frequencies() {
        assert!(FrequencySweep::linear(8.0, 0.5, 0).frequencies_mhz().is_empty());
    }
}
