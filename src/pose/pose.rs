use std::marker::PhantomData;

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Unit marker for the angles stored in a [`Pose`]
pub trait AngleUnit: Copy {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radians {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degrees {}

impl AngleUnit for Radians {}

impl AngleUnit for Degrees {}

/// Camera orientation as a yaw/pitch/roll triple.
///
/// The unit is part of the type, so a pose in radians cannot be handed to
/// code expecting degrees. Only degree poses are serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose<U: AngleUnit> {
    yaw: f64,
    pitch: f64,
    roll: f64,
    unit: PhantomData<U>,
}

impl<U: AngleUnit> Pose<U> {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self {
            yaw,
            pitch,
            roll,
            unit: PhantomData,
        }
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> (f64, f64, f64) {
        (f(self.yaw), f(self.pitch), f(self.roll))
    }
}

impl Pose<Radians> {
    pub fn to_degrees(&self) -> Pose<Degrees> {
        let (yaw, pitch, roll) = self.map(f64::to_degrees);
        Pose::new(yaw, pitch, roll)
    }
}

impl Pose<Degrees> {
    pub fn to_radians(&self) -> Pose<Radians> {
        let (yaw, pitch, roll) = self.map(f64::to_radians);
        Pose::new(yaw, pitch, roll)
    }
}

impl Serialize for Pose<Degrees> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Pose", 3)?;
        state.serialize_field("yaw", &self.yaw)?;
        state.serialize_field("pitch", &self.pitch)?;
        state.serialize_field("roll", &self.roll)?;
        state.end()
    }
}
