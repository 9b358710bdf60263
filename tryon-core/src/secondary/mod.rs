//! Idle motion: small time-driven sway of the figure root plus a head nod.
//!
//! The pose is a pure function of elapsed seconds, so restarting the clock
//! restarts the motion and sampling never accumulates error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleMotion {
    /// Root yaw amplitude, radians.
    pub amplitude: f32,
    /// Root yaw angular frequency, rad/s.
    pub frequency: f32,
    pub head_amplitude: f32,
    pub head_frequency: f32,
    /// Hold the figure still while a garment is being worn.
    pub freeze_while_dressed: bool,
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self { amplitude: 0.02, frequency: 0.3, head_amplitude: 0.01, head_frequency: 0.5, freeze_while_dressed: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IdlePose {
    pub root_yaw: f32,
    pub head_pitch: f32,
}

impl IdleMotion {
    pub fn sample(&self, t: f32) -> IdlePose {
        IdlePose {
            root_yaw: (t * self.frequency).sin() * self.amplitude,
            head_pitch: (t * self.head_frequency).sin() * self.head_amplitude,
        }
    }

    /// Pose for the current frame; `dressed` is whether a garment is selected.
    pub fn pose(&self, t: f32, dressed: bool) -> IdlePose {
        if dressed && self.freeze_while_dressed { IdlePose::default() } else { self.sample(t) }
    }

    /// Seconds for one full root sway.
    pub fn period(&self) -> f32 { std::f32::consts::TAU / self.frequency }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sway_stays_within_amplitude() {
        let m = IdleMotion::default();
        for i in 0..2000 {
            let p = m.sample(i as f32 * 0.037);
            assert!(p.root_yaw.abs() <= m.amplitude + 1e-7);
            assert!(p.head_pitch.abs() <= m.head_amplitude + 1e-7);
        }
    }

    #[test]
    fn sway_is_periodic() {
        let m = IdleMotion::default();
        for t in [0.0, 1.3, 4.7, 12.25] {
            let a = m.sample(t).root_yaw;
            let b = m.sample(t + m.period()).root_yaw;
            assert!((a - b).abs() < 1e-5, "t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn freeze_policy_only_applies_when_dressed() {
        let m = IdleMotion { freeze_while_dressed: true, ..Default::default() };
        assert_eq!(m.pose(3.0, true), IdlePose::default());
        assert_eq!(m.pose(3.0, false), m.sample(3.0));
        let continuous = IdleMotion::default();
        assert_eq!(continuous.pose(3.0, true), continuous.sample(3.0));
    }
}
