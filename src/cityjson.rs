// CityJSON wire types, see https://www.cityjson.org/specs/
//
// Only what this kernel exchanges with its collaborators: the geometry
// object, the per-feature record (CityJSONSeq line) and the base document
// owning the affine transform. Attributes stay an open map the kernel never
// inspects; geometry is a closed enum over the five known kinds, each with
// its legal boundary nesting depth.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::kernel_in::Point3D;

pub type Ring = Vec<usize>;
/// A face: one outer ring, optionally holes (this kernel emits no holes)
pub type Surface = Vec<Ring>;
pub type Shell = Vec<Surface>;

/// Semantic surface classes this kernel labels faces with
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceType {
    GroundSurface,
    WallSurface,
    RoofSurface,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SemanticSurface {
    #[serde(rename = "type")]
    pub surface_type: SurfaceType,
}

/// The fixed ordered surface list; `values` entries index into it
/// (0 = ground, 1 = wall, 2 = roof).
pub fn building_surfaces() -> Vec<SemanticSurface> {
    vec![
        SemanticSurface {
            surface_type: SurfaceType::GroundSurface,
        },
        SemanticSurface {
            surface_type: SurfaceType::WallSurface,
        },
        SemanticSurface {
            surface_type: SurfaceType::RoofSurface,
        },
    ]
}

/// Surface list plus the per-face label indices. The nesting depth of
/// `values` follows the boundaries depth of the geometry kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Semantics<V> {
    pub surfaces: Vec<SemanticSurface>,
    pub values: V,
}

/// The five CityJSON geometry kinds with their boundary nesting depths.
/// Vertex indices reference a list stored NEXT to the geometry (on the
/// feature or document), never inside it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum CityJsonGeometry {
    MultiPoint {
        lod: String,
        boundaries: Vec<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        semantics: Option<Semantics<Vec<Option<usize>>>>,
    },
    MultiLineString {
        lod: String,
        boundaries: Vec<Vec<usize>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        semantics: Option<Semantics<Vec<Option<usize>>>>,
    },
    MultiSurface {
        lod: String,
        boundaries: Vec<Surface>,
        #[serde(skip_serializing_if = "Option::is_none")]
        semantics: Option<Semantics<Vec<Option<usize>>>>,
    },
    Solid {
        lod: String,
        boundaries: Vec<Shell>,
        #[serde(skip_serializing_if = "Option::is_none")]
        semantics: Option<Semantics<Vec<Vec<Option<usize>>>>>,
    },
    MultiSolid {
        lod: String,
        boundaries: Vec<Vec<Shell>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        semantics: Option<Semantics<Vec<Vec<Vec<Option<usize>>>>>>,
    },
}

/// Affine transform owned by the base document:
/// `world = local * scale + translate`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: [f64; 3],
    pub translate: [f64; 3],
}

impl Transform {
    pub fn to_local(&self, world: &Point3D) -> [f64; 3] {
        [
            (world.x - self.translate[0]) / self.scale[0],
            (world.y - self.translate[1]) / self.scale[1],
            (world.z - self.translate[2]) / self.scale[2],
        ]
    }

    pub fn to_world(&self, local: &[f64; 3]) -> Point3D {
        Point3D {
            x: local[0] * self.scale[0] + self.translate[0],
            y: local[1] * self.scale[1] + self.translate[1],
            z: local[2] * self.scale[2] + self.translate[2],
        }
    }
}

/// A city object of a feature. The kernel only creates "Building" objects,
/// the attributes stay a free-form map for any caller-side extras.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CityObject {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    pub geometry: Vec<CityJsonGeometry>,
}

/// One CityJSONSeq feature line. The vertex list lives here in document-local
/// coordinates; the geometry objects only hold indices into it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CityJsonFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(rename = "CityObjects")]
    pub city_objects: BTreeMap<String, CityObject>,
    pub vertices: Vec<[f64; 3]>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    #[serde(rename = "referenceSystem", skip_serializing_if = "Option::is_none")]
    pub reference_system: Option<String>,
    /// min x,y,z then max x,y,z, world space
    #[serde(
        rename = "geographicalExtent",
        skip_serializing_if = "Option::is_none"
    )]
    pub geographical_extent: Option<[f64; 6]>,
}

/// The base document (first CityJSONSeq line). It owns the transform all
/// feature vertex lists are relative to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CityJsonDocument {
    #[serde(rename = "type")]
    pub document_type: String,
    pub version: String,
    pub transform: Transform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CityJsonDocument {
    pub fn new(transform: Transform) -> Self {
        Self {
            document_type: "CityJSON".to_string(),
            version: "2.0".to_string(),
            transform,
            metadata: None,
        }
    }
}
