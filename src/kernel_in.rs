// Internal interface of the crate/lib between input modules and the solid kernel

use std::ops::{Add, Sub};

use thiserror::Error;

// CityJSON metric output is quantized to 3 decimals (milimeter grid)
pub static QUANT_FAKT: f64 = 1000.0;

/// World-space metric position (local planar projection, not geographic degrees)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Add for Point3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Point3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Point3D {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Ground distance, the z coordinate is ignored
    pub fn distance_2d(&self, other: &Point3D) -> f64 {
        let a = other.x - self.x;
        let b = other.y - self.y;
        f64::sqrt(a * a + b * b)
    }

    /// Ground midpoint between two points, z is left at 0
    pub fn midpoint_2d(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: (self.x + other.x) / 2.,
            y: (self.y + other.y) / 2.,
            z: 0.,
        }
    }

    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Snap all coordinates to the 3-decimal output grid
    pub fn quantized(self) -> Self {
        Self {
            x: (self.x * QUANT_FAKT).round() / QUANT_FAKT,
            y: (self.y * QUANT_FAKT).round() / QUANT_FAKT,
            z: (self.z * QUANT_FAKT).round() / QUANT_FAKT,
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::fmt::Display for Point3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The six known roof archetypes with their CityGML roof type codes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoofShape {
    Flat,
    Monopitch,
    Dualpent,
    Gabled,
    Hipped,
    Pavilion,
}

impl RoofShape {
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code {
            "1000" => Ok(RoofShape::Flat),
            "1010" => Ok(RoofShape::Monopitch),
            "1020" => Ok(RoofShape::Dualpent),
            "1030" => Ok(RoofShape::Gabled),
            "1040" => Ok(RoofShape::Hipped),
            "1070" => Ok(RoofShape::Pavilion),
            _ => Err(ValidationError::UnknownRoofCode(code.to_string())),
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            RoofShape::Flat => "1000",
            RoofShape::Monopitch => "1010",
            RoofShape::Dualpent => "1020",
            RoofShape::Gabled => "1030",
            RoofShape::Hipped => "1040",
            RoofShape::Pavilion => "1070",
        }
    }
}

/// User parameters of one building-creation request
#[derive(Clone, Copy, Debug)]
pub struct BuildingSpec {
    pub roof_shape: RoofShape,
    /// Total height, ground to the highest roof point
    pub height: f64,
    /// Vertical extent of the roof, 0 for flat
    pub roof_height: f64,
    /// Footprint edge the ridge/slope is anchored to, 0..=3
    pub orientation: u8,
}

impl BuildingSpec {
    pub fn from_code(
        roof_code: &str,
        height: f64,
        roof_height: f64,
        orientation: u8,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            roof_shape: RoofShape::from_code(roof_code)?,
            height,
            roof_height,
            orientation,
        })
    }
}

/// Malformed input to the solid kernel. Local, synchronous and not
/// recoverable by retry; the caller has to correct the input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("a building footprint needs exactly 4 corner points, got {0}")]
    CornerCount(usize),
    #[error("building height must be positive, got {0}")]
    NonPositiveHeight(f64),
    #[error("unknown roof type code: {0}")]
    UnknownRoofCode(String),
    #[error("roof orientation must be 0..=3, got {0}")]
    OrientationOutOfRange(u8),
}
