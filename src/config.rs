use anyhow::{anyhow, bail, Result};
use sdl2::keyboard::Scancode;

use crate::quad::MAX_AMPLITUDE;

pub const DEFAULT_WIDTH: f32 = 2.0;
pub const DEFAULT_HEIGHT: f32 = 2.0;
pub const DEFAULT_AMPLITUDE: f32 = 0.05;
pub const DEFAULT_TRIGGER_KEY: &str = "Space";

/// Validated runtime settings for the quad and the frame loop.
#[derive(Clone, Debug)]
pub struct QuadConfig {
    pub width: f32,
    pub height: f32,
    pub amplitude: f32,
    pub trigger: Scancode,
    pub seed: u64,
    pub frame_limit: Option<u64>,
    pub window_size: (u32, u32),
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            amplitude: DEFAULT_AMPLITUDE,
            trigger: Scancode::Space,
            seed: 0,
            frame_limit: None,
            window_size: (1280, 720),
        }
    }
}

impl QuadConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                bail!("quad {name} must be a positive number, got {value}");
            }
        }
        if !(0.0..=MAX_AMPLITUDE).contains(&self.amplitude) {
            bail!(
                "jitter amplitude must be between 0 and {MAX_AMPLITUDE}, got {}",
                self.amplitude
            );
        }
        if self.frame_limit == Some(0) {
            bail!("frame limit must be at least 1");
        }
        let (w, h) = self.window_size;
        if w == 0 || h == 0 {
            bail!("window size must be non-zero, got {w}x{h}");
        }
        Ok(())
    }
}

/// Resolves an SDL scancode name such as `Space`, `J` or `Left Shift`.
pub fn parse_trigger_key(name: &str) -> Result<Scancode> {
    Scancode::from_name(name.trim()).ok_or_else(|| anyhow!("unknown key name: {name:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = QuadConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (2.0, 2.0));
        assert_eq!(config.amplitude, 0.05);
    }

    #[test]
    fn rejects_degenerate_quads() {
        for (width, height) in [(0.0, 1.0), (1.0, -2.0), (f32::NAN, 1.0), (1.0, f32::INFINITY)] {
            let config = QuadConfig {
                width,
                height,
                ..QuadConfig::default()
            };
            assert!(config.validate().is_err(), "{width}x{height} accepted");
        }
    }

    #[test]
    fn rejects_bad_amplitude() {
        for amplitude in [-0.1, f32::NAN, f32::MAX, f32::INFINITY, MAX_AMPLITUDE * 2.0] {
            let config = QuadConfig {
                amplitude,
                ..QuadConfig::default()
            };
            assert!(config.validate().is_err());
        }
        let still = QuadConfig {
            amplitude: 0.0,
            ..QuadConfig::default()
        };
        assert!(still.validate().is_ok());
        let ceiling = QuadConfig {
            amplitude: MAX_AMPLITUDE,
            ..QuadConfig::default()
        };
        assert!(ceiling.validate().is_ok());
    }

    #[test]
    fn frame_limit_must_allow_a_frame() {
        let none = QuadConfig {
            frame_limit: Some(0),
            ..QuadConfig::default()
        };
        assert!(none.validate().is_err());
        let one = QuadConfig {
            frame_limit: Some(1),
            ..QuadConfig::default()
        };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn rejects_empty_window() {
        let config = QuadConfig {
            window_size: (0, 720),
            ..QuadConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn key_names() {
        assert_eq!(parse_trigger_key(DEFAULT_TRIGGER_KEY).unwrap(), Scancode::Space);
        assert_eq!(parse_trigger_key("J").unwrap(), Scancode::J);
        assert!(parse_trigger_key("NotARealKey").is_err());
    }
}
