//! Errors

use std::fmt;
use thiserror::Error;

/// Why a point sequence is not a usable polygon
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PolygonDefect {
    /// Fewer than 4 points (a closed triangle needs 4)
    TooFewPoints(usize),
    /// Last point differs from the first
    NotClosed,
    /// Edge starting at this vertex index has zero length
    ZeroLengthEdge(usize),
    /// Point at this index has a NaN or infinite coordinate
    NonFinite(usize),
    /// Point at this index lies beyond [MAX_COORDINATE](crate::MAX_COORDINATE)
    OutOfRange(usize),
}

impl fmt::Display for PolygonDefect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolygonDefect::TooFewPoints(n) =>
                write!(f, "{} points, at least 4 required", n),
            PolygonDefect::NotClosed =>
                write!(f, "first and last points differ"),
            PolygonDefect::ZeroLengthEdge(i) =>
                write!(f, "edge {} has zero length", i),
            PolygonDefect::NonFinite(i) =>
                write!(f, "point {} is not finite", i),
            PolygonDefect::OutOfRange(i) =>
                write!(f, "point {} is out of range", i),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("lines are parallel or coincident, no unique meet")]
    DegenerateIntersection,
    #[error("invalid polygon: {0}")]
    InvalidPolygon(PolygonDefect),
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
