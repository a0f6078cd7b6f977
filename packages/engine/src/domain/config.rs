//! Stage configuration.
//!
//! Every section is `#[serde(default)]`, so a JSON overlay only needs the keys it
//! changes: `{"gravity": {"y": 0.8}, "notes": {"count": 15}}`.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::StageError;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 1024.0, height: 768.0 }
    }
}

/// Gravity in "stage units"; multiplied by `GRAVITY_SCALE` per tick
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub x: f32,
    pub y: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self { x: 0.0, y: 0.3 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange {
    pub min: f32,
    pub max: f32,
}

impl Default for SpawnRange {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BalloonConfig {
    pub count: usize,
    pub radius: SpawnRange,
    pub restitution: f32,
    pub air_friction: f32,
    pub density: f32,
}

impl Default for BalloonConfig {
    fn default() -> Self {
        Self {
            count: 8,
            radius: SpawnRange { min: 25.0, max: 40.0 },
            restitution: 0.8,
            air_friction: 0.02,
            density: 0.0008,
        }
    }
}

/// Rectangular decorations (cake slices, banknotes)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RectBodyConfig {
    pub count: usize,
    pub width: f32,
    pub height: f32,
    pub restitution: f32,
    pub air_friction: f32,
    pub density: f32,
}

impl RectBodyConfig {
    pub fn cake() -> Self {
        Self {
            count: 3,
            width: 40.0,
            height: 30.0,
            restitution: 0.6,
            air_friction: 0.03,
            density: 0.001,
        }
    }

    pub fn note() -> Self {
        Self {
            count: 12,
            width: 60.0,
            height: 30.0,
            restitution: 0.9,
            air_friction: 0.04,
            density: 0.0005,
        }
    }
}

/// Partial `RectBodyConfig`; missing keys fall back to the section's own base
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RectBodyOverlay {
    count: Option<usize>,
    width: Option<f32>,
    height: Option<f32>,
    restitution: Option<f32>,
    air_friction: Option<f32>,
    density: Option<f32>,
}

impl RectBodyOverlay {
    fn apply(self, base: RectBodyConfig) -> RectBodyConfig {
        RectBodyConfig {
            count: self.count.unwrap_or(base.count),
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            restitution: self.restitution.unwrap_or(base.restitution),
            air_friction: self.air_friction.unwrap_or(base.air_friction),
            density: self.density.unwrap_or(base.density),
        }
    }
}

fn cake_overlay<'de, D: Deserializer<'de>>(d: D) -> Result<RectBodyConfig, D::Error> {
    RectBodyOverlay::deserialize(d).map(|o| o.apply(RectBodyConfig::cake()))
}

fn note_overlay<'de, D: Deserializer<'de>>(d: D) -> Result<RectBodyConfig, D::Error> {
    RectBodyOverlay::deserialize(d).map(|o| o.apply(RectBodyConfig::note()))
}

/// Probabilistic keep-alive forcing and the scroll gust
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ForcingConfig {
    /// Per body, per tick
    pub jitter_probability: f32,
    /// Upper bound of the random jitter impulse magnitude
    pub jitter_impulse: f32,
    /// Per balloon, per tick
    pub buoyancy_probability: f32,
    pub buoyancy_impulse: f32,
    /// Upward velocity change applied to every body on scroll
    pub gust_lift: f32,
    /// Max horizontal velocity change on scroll, as a fraction of `gust_lift`
    pub gust_spread: f32,
    /// Upper bound of the random spawn speed
    pub spawn_speed: f32,
}

impl Default for ForcingConfig {
    fn default() -> Self {
        Self {
            jitter_probability: 0.08,
            jitter_impulse: 0.3,
            buoyancy_probability: 0.025,
            buoyancy_impulse: 0.6,
            gust_lift: 1.5,
            gust_spread: 0.3,
            spawn_speed: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    pub stiffness: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { stiffness: 0.2 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub ticks_per_second: f32,
    /// Longest frame gap simulated; longer gaps (background tabs) are dropped
    pub max_frame_ms: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { ticks_per_second: 60.0, max_frame_ms: 100.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct StageConfig {
    pub viewport: ViewportConfig,
    pub gravity: GravityConfig,
    pub balloons: BalloonConfig,
    #[serde(deserialize_with = "cake_overlay")]
    pub cakes: RectBodyConfig,
    #[serde(deserialize_with = "note_overlay")]
    pub notes: RectBodyConfig,
    pub forcing: ForcingConfig,
    pub pointer: PointerConfig,
    pub timing: TimingConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            gravity: GravityConfig::default(),
            balloons: BalloonConfig::default(),
            cakes: RectBodyConfig::cake(),
            notes: RectBodyConfig::note(),
            forcing: ForcingConfig::default(),
            pointer: PointerConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl StageConfig {
    /// Parse a JSON overlay on top of the defaults and reject unusable values
    pub fn from_json(json: &str) -> Result<Self, StageError> {
        let cfg: StageConfig = serde_json::from_str(json)?;
        cfg.check()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String, StageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Hard errors: values the simulation cannot run with.
    pub fn check(&self) -> Result<(), StageError> {
        let finite_positive = |v: f32| v.is_finite() && v > 0.0;
        if !finite_positive(self.viewport.width) || !finite_positive(self.viewport.height) {
            return Err(StageError::InvalidConfig(format!(
                "viewport must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        let probabilities = [
            ("forcing.jitter_probability", self.forcing.jitter_probability),
            ("forcing.buoyancy_probability", self.forcing.buoyancy_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(StageError::InvalidConfig(format!("{name} must be in [0, 1], got {p}")));
            }
        }
        if !(self.pointer.stiffness > 0.0 && self.pointer.stiffness <= 1.0) {
            return Err(StageError::InvalidConfig(format!(
                "pointer.stiffness must be in (0, 1], got {}",
                self.pointer.stiffness
            )));
        }
        if !finite_positive(self.timing.ticks_per_second) {
            return Err(StageError::InvalidConfig("timing.ticks_per_second must be > 0".into()));
        }
        let magnitudes = [
            ("forcing.jitter_impulse", self.forcing.jitter_impulse),
            ("forcing.buoyancy_impulse", self.forcing.buoyancy_impulse),
            ("forcing.gust_lift", self.forcing.gust_lift),
            ("forcing.gust_spread", self.forcing.gust_spread),
            ("forcing.spawn_speed", self.forcing.spawn_speed),
            ("balloons.radius.min", self.balloons.radius.min),
            ("balloons.radius.max", self.balloons.radius.max),
        ];
        for (name, v) in magnitudes {
            if !(v.is_finite() && v >= 0.0) {
                return Err(StageError::InvalidConfig(format!("{name} must be finite and >= 0, got {v}")));
            }
        }
        if self.balloons.radius.min <= 0.0 || self.balloons.radius.max < self.balloons.radius.min {
            return Err(StageError::InvalidConfig(format!(
                "balloons.radius range invalid: [{}, {}]",
                self.balloons.radius.min, self.balloons.radius.max
            )));
        }
        for (name, r) in [("cakes", &self.cakes), ("notes", &self.notes)] {
            if r.count > 0 && (r.width <= 0.0 || r.height <= 0.0) {
                return Err(StageError::InvalidConfig(format!("{name} size must be positive")));
            }
        }
        Ok(())
    }

    /// Non-fatal warnings for values that run but look wrong.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.gravity.y < 0.0 {
            w.push(format!("gravity.y is negative ({}); bodies will float up", self.gravity.y));
        }
        if self.gravity.y.abs() > 2.0 {
            w.push(format!("gravity.y {} is strong for a floating background", self.gravity.y));
        }
        let total = self.balloons.count + self.cakes.count + self.notes.count;
        if total == 0 {
            w.push("roster is empty; nothing will be drawn".into());
        }
        if total > 200 {
            w.push(format!("{total} bodies is heavy for a decorative layer"));
        }
        for (name, r) in [
            ("balloons.restitution", self.balloons.restitution),
            ("cakes.restitution", self.cakes.restitution),
            ("notes.restitution", self.notes.restitution),
        ] {
            if !(0.0..=1.0).contains(&r) {
                w.push(format!("{name} {r} outside [0, 1]; clamped"));
            }
        }
        if self.forcing.jitter_probability > 0.25 {
            w.push(format!(
                "forcing.jitter_probability {} makes bodies twitchy",
                self.forcing.jitter_probability
            ));
        }
        if self.timing.max_frame_ms < 1000.0 / self.timing.ticks_per_second {
            w.push("timing.max_frame_ms is shorter than one tick; frames may run zero ticks".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_clean() {
        let cfg = StageConfig::default();
        assert!(cfg.check().is_ok());
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.balloons.count, 8);
        assert_eq!(cfg.cakes.count, 3);
        assert_eq!(cfg.notes.count, 12);
    }

    #[test]
    fn json_overlay_keeps_other_defaults() {
        let cfg = StageConfig::from_json(r#"{"gravity": {"y": 0.8}, "notes": {"count": 15}}"#)
            .expect("overlay should parse");
        assert_eq!(cfg.gravity.y, 0.8);
        assert_eq!(cfg.gravity.x, 0.0);
        assert_eq!(cfg.notes.count, 15);
        assert_eq!(cfg.notes.width, 60.0);
        assert_eq!(cfg.balloons, BalloonConfig::default());
    }

    #[test]
    fn rejects_bad_probability_and_viewport() {
        let err = StageConfig::from_json(r#"{"forcing": {"jitter_probability": 1.5}}"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(_)));

        let err = StageConfig::from_json(r#"{"viewport": {"width": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("viewport"));

        let err = StageConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(_)));
    }

    #[test]
    fn partial_cake_overlay_keeps_cake_defaults() {
        let cfg = StageConfig::from_json(r#"{"cakes": {"count": 5}}"#).expect("overlay should parse");
        assert_eq!(cfg.cakes.count, 5);
        assert_eq!(cfg.cakes.width, 40.0);
        assert_eq!(cfg.cakes.restitution, 0.6);
        assert_eq!(cfg.notes, RectBodyConfig::note());

        let cfg = StageConfig::from_json(r#"{"notes": {"height": 20}}"#).expect("overlay should parse");
        assert_eq!(cfg.notes.height, 20.0);
        assert_eq!(cfg.notes.count, 12);
        assert_eq!(cfg.cakes, RectBodyConfig::cake());
    }

    #[test]
    fn rejects_overflowing_magnitudes() {
        let err = StageConfig::from_json(r#"{"forcing": {"jitter_probability": 1.0, "jitter_impulse": 1e39}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("jitter_impulse"));

        let err = StageConfig::from_json(r#"{"forcing": {"gust_spread": -1}}"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(_)));

        let err = StageConfig::from_json(r#"{"balloons": {"radius": {"min": 25, "max": 1e39}}}"#).unwrap_err();
        assert!(err.to_string().contains("balloons.radius.max"));
    }

    #[test]
    fn validate_reports_warnings() {
        let mut cfg = StageConfig::default();
        cfg.gravity.y = -3.0;
        cfg.balloons.count = 0;
        cfg.cakes.count = 0;
        cfg.notes.count = 0;
        let joined = cfg.validate().join(" | ");
        assert!(joined.contains("negative"));
        assert!(joined.contains("strong"));
        assert!(joined.contains("roster is empty"));
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = StageConfig::default();
        let json = cfg.to_json().expect("serialize");
        assert_eq!(StageConfig::from_json(&json).expect("parse"), cfg);
    }
}
