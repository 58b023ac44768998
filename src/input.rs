//! Accelerometer input
//!
//! The sensor pushes samples on its own schedule (every
//! `SENSOR_INTERVAL_MS` by default) while the simulation reads the latest
//! value once per frame. The register is last-value-wins: no queue, no lock.
//! A frame may observe a half-written sample; that is acceptable for tilt
//! input.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;

use crate::consts::SENSOR_ALPHA;

#[derive(Debug, Default)]
struct Axes {
    x: AtomicU32,
    y: AtomicU32,
    z: AtomicU32,
}

impl Axes {
    fn load(&self) -> Vec3 {
        Vec3::new(
            f32::from_bits(self.x.load(Ordering::Relaxed)),
            f32::from_bits(self.y.load(Ordering::Relaxed)),
            f32::from_bits(self.z.load(Ordering::Relaxed)),
        )
    }

    fn store(&self, v: Vec3) {
        self.x.store(v.x.to_bits(), Ordering::Relaxed);
        self.y.store(v.y.to_bits(), Ordering::Relaxed);
        self.z.store(v.z.to_bits(), Ordering::Relaxed);
    }
}

/// Shared handle to the smoothed accelerometer reading.
///
/// Clones point at the same register, so one clone can live in the sensor
/// callback while the character reads another.
#[derive(Debug, Clone, Default)]
pub struct Accelerometer {
    axes: Arc<Axes>,
}

impl Accelerometer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw sample through the low-pass filter into the register.
    ///
    /// Each axis is filtered against its own previous output.
    pub fn push_sample(&self, x: f32, y: f32, z: f32) {
        let raw = Vec3::new(x, y, z);
        let prev = self.axes.load();
        self.axes.store(prev + (raw - prev) * SENSOR_ALPHA);
    }

    /// Overwrite the register without filtering
    pub fn set_raw(&self, value: Vec3) {
        self.axes.store(value);
    }

    /// Latest smoothed reading
    pub fn latest(&self) -> Vec3 {
        self.axes.load()
    }

    pub fn clear(&self) {
        self.axes.store(Vec3::ZERO);
    }
}
