//! Run configuration for one deck.

use crate::array::ArrayLayout;
use crate::beamform::{self, BeamPattern};
use crate::cards::{Ground, RadiationPattern};
use crate::constants::{ALUMINUM_CONDUCTIVITY, COPPER_CONDUCTIVITY, DEFAULT_MIN_FREQUENCY_HZ};
use crate::elements::ElementKind;
use crate::errors::Result;
use crate::geometry::ReflectorFence;
use crate::math::{Scalar, R3};
use crate::sweep::FrequencySweep;

/// How element phases are derived.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseMode {
    /// Uniform ramp steering the beam to `beam` (0 leaves the array unsteered).
    Uniform {
        /// Beam number, 1-based.
        beam: u32,
        /// Beam layout of the radar.
        pattern: BeamPattern,
    },
    /// Fixed phase step between adjacent elements.
    Progressive {
        /// Phase step in degrees.
        step_deg: Scalar,
    },
    /// Broadened beam from mirrored sub-arrays.
    Broadened {
        /// Sub-arrays of the main array.
        main_subarrays: usize,
        /// Sub-arrays of the interferometer array.
        interferometer_subarrays: usize,
    },
    /// Parabolic taper (not implemented).
    Parabolic,
    /// Circular taper (not implemented).
    Circular,
}

impl Default for PhaseMode {
    fn default() -> Self {
        Self::Uniform { beam: 0, pattern: BeamPattern::default() }
    }
}

impl PhaseMode {
    /// Broadened beam with four main and two interferometer sub-arrays.
    #[must_use]
    pub fn broadened() -> Self {
        Self::Broadened { main_subarrays: 4, interferometer_subarrays: 2 }
    }

    /// Steers the default 16-beam layout to `beam`.
    #[must_use]
    pub fn beam(beam: u32) -> Self {
        Self::Uniform { beam, pattern: BeamPattern::default() }
    }

    /// Phases of the main and interferometer arrays, each computed with its own spacing.
    pub fn phases(
        &self,
        frequency_hz: Scalar,
        main: &ArrayLayout,
        interferometer: &ArrayLayout,
    ) -> Result<(Vec<Scalar>, Vec<Scalar>)> {
        Ok((
            self.array_phases(frequency_hz, main, true)?,
            self.array_phases(frequency_hz, interferometer, false)?,
        ))
    }

    fn array_phases(
        &self,
        frequency_hz: Scalar,
        layout: &ArrayLayout,
        is_main: bool,
    ) -> Result<Vec<Scalar>> {
        let (d, n) = (layout.spacing_m, layout.num_elements);
        match *self {
            Self::Uniform { beam, pattern } => {
                let step = pattern.steering_phase(beam, frequency_hz, d)?;
                Ok(beamform::progressive_phase(step, n))
            }
            Self::Progressive { step_deg } => Ok(beamform::progressive_phase(step_deg, n)),
            Self::Broadened { .. } if n == 0 => Ok(Vec::new()),
            Self::Broadened { main_subarrays, interferometer_subarrays } => {
                let m = if is_main { main_subarrays } else { interferometer_subarrays };
                beamform::broadened_phase(frequency_hz, d, n, m)
            }
            Self::Parabolic => beamform::parabolic_phase(frequency_hz, d, n),
            Self::Circular => beamform::circular_phase(frequency_hz, d, n),
        }
    }
}

/// Reflector fence settings shared by the main and interferometer fences.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FenceConfig {
    /// Wires per fence.
    pub num_wires: u32,
    /// Spacing along the slope, meters.
    pub spacing_m: Scalar,
    /// Height of the top wire, meters.
    pub start_height_m: Scalar,
    /// Slope angle, degrees.
    pub angle_deg: Scalar,
    /// Wire gauge (AWG).
    pub awg: u32,
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self { num_wires: 21, spacing_m: 0.707, start_height_m: 15.0, angle_deg: 45.0, awg: 13 }
    }
}

impl FenceConfig {
    /// Fence behind `layout`, `(n + 1)·d` long and sharing its offset.
    #[must_use]
    pub fn fence_for(&self, layout: &ArrayLayout) -> ReflectorFence {
        let length = (layout.num_elements + 1) as Scalar * layout.spacing_m;
        ReflectorFence {
            start_height_m: self.start_height_m,
            angle_deg: self.angle_deg,
            awg: self.awg,
            ..ReflectorFence::new(length, self.spacing_m, self.num_wires)
        }
        .with_offset(layout.offset)
    }
}

/// Everything needed to generate one deck.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    /// Main array.
    pub main: ArrayLayout,
    /// Interferometer array; zero elements disables it.
    pub interferometer: ArrayLayout,
    /// Element design used by both arrays.
    pub element: ElementKind,
    /// Operating frequency, Hz.
    pub frequency_hz: Scalar,
    /// Lowest design frequency used for wire segmentation, Hz.
    pub min_frequency_hz: Scalar,
    /// Phase distribution.
    pub phase_mode: PhaseMode,
    /// Reflector fences, if any.
    pub fence: Option<FenceConfig>,
    /// `GE` ground-plane flag.
    pub ground_plane: i32,
    /// Ground parameters.
    pub ground: Ground,
    /// Frequency sweep; `None` runs the single operating frequency.
    pub sweep: Option<FrequencySweep>,
    /// Radiation pattern request.
    pub pattern: RadiationPattern,
    /// Conductor material override, S/m.
    pub conductivity: Option<Scalar>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            main: ArrayLayout::new(16, 15.24),
            interferometer: ArrayLayout::new(4, 15.24)
                .with_offset(R3::new(0.0, -100.0, 0.0))
                .with_magnitude(0.0),
            element: ElementKind::default(),
            frequency_hz: 10.5e6,
            min_frequency_hz: DEFAULT_MIN_FREQUENCY_HZ,
            phase_mode: PhaseMode::default(),
            fence: Some(FenceConfig::default()),
            ground_plane: 1,
            ground: Ground::default(),
            sweep: None,
            pattern: RadiationPattern::default(),
            conductivity: None,
        }
    }
}

impl DeckConfig {
    /// Sets the element design.
    #[must_use]
    pub fn with_element(mut self, element: ElementKind) -> Self {
        self.element = element;
        self
    }

    /// Sets the main array.
    #[must_use]
    pub fn with_main(mut self, main: ArrayLayout) -> Self {
        self.main = main;
        self
    }

    /// Sets the interferometer array.
    #[must_use]
    pub fn with_interferometer(mut self, interferometer: ArrayLayout) -> Self {
        self.interferometer = interferometer;
        self
    }

    /// Sets the operating frequency in Hz.
    #[must_use]
    pub fn with_frequency(mut self, frequency_hz: Scalar) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Sets the phase distribution.
    #[must_use]
    pub fn with_phase_mode(mut self, phase_mode: PhaseMode) -> Self {
        self.phase_mode = phase_mode;
        self
    }

    /// Enables or disables the reflector fences.
    #[must_use]
    pub fn with_fence(mut self, fence: Option<FenceConfig>) -> Self {
        self.fence = fence;
        self
    }

    /// Replaces the single-frequency `FR` card with `sweep`.
    #[must_use]
    pub fn with_sweep(mut self, sweep: FrequencySweep) -> Self {
        self.sweep = Some(sweep);
        self
    }

    /// Forces every wire to `siemens_per_m`.
    #[must_use]
    pub fn with_conductivity(mut self, siemens_per_m: Scalar) -> Self {
        self.conductivity = Some(siemens_per_m);
        self
    }

    /// Conductivity written for every wire: the override, else aluminium for log-periodic arrays
    /// and copper otherwise.
    #[must_use]
    pub fn wire_conductivity(&self) -> Scalar {
        self.conductivity.unwrap_or(match self.element {
            ElementKind::LogPeriodic(_) => ALUMINUM_CONDUCTIVITY,
            ElementKind::Ttfd(_) | ElementKind::Yagi(_) => COPPER_CONDUCTIVITY,
        })
    }

    /// The `FR` card contents.
    #[must_use]
    pub fn frequency_sweep(&self) -> FrequencySweep {
        self.sweep.unwrap_or_else(|| FrequencySweep::single(self.frequency_hz))
    }
}
