//! Configuration
//!
//! Every section has defaults matching the built-in demo, so a JSON file
//! only needs the fields it changes:
//!
//!     use fillpoly::{Config, FillRule};
//!     let cfg = Config::from_json(r#"{ "fill": { "rule": "non_zero" } }"#).unwrap();
//!     assert_eq!(cfg.fill.rule, FillRule::NonZero);
//!     assert_eq!(cfg.view.scale, 122.0);
//!

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Palette;
use crate::error::Result;
use crate::fill::FillRule;
use crate::fill::LAMBDA_EPSILON;
use crate::geometry::Point;

#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub fill: FillConfig,
    pub colors: Palette,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Initial view and limits of the pan / zoom controls
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Screen position of the model origin
    pub origin: Point,
    /// Screen pixels per model unit
    pub scale: f64,
    /// Pixels moved per frame while an arrow key is held
    pub pan_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Initial y of the debug scanline
    pub scanline_y: f64,
    /// Draw the debug scanline and its crossings
    pub show_scanline: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(200.0, 0.0),
            scale: 122.0,
            pan_step: 2.0,
            min_scale: 1.0,
            max_scale: 500.0,
            scanline_y: 0.0,
            show_scanline: true,
        }
    }
}

/// Fill engine settings
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Below this |dx| an edge's lambda is measured along y
    pub lambda_epsilon: f64,
    pub rule: FillRule,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self { lambda_epsilon: LAMBDA_EPSILON, rule: FillRule::EvenOdd }
    }
}
