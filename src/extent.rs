// Document extent: fold all feature vertices into one world-space bounding box

use rayon::prelude::*;

use crate::cityjson::{CityJsonDocument, CityJsonFeature, Metadata, Transform};
use crate::kernel_in::Point3D;

/// Axis-aligned world-space bounding box, seeded inside-out. An extent that
/// never included a point keeps the infinite seed and is not valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: Point3D,
    pub max: Point3D,
}

impl Default for Extent {
    fn default() -> Self {
        Self::new()
    }
}

impl Extent {
    pub fn new() -> Self {
        Extent {
            min: Point3D::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3D::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn include(&mut self, point: &Point3D) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Elementwise union. The infinite seed is the neutral element on either
    /// side, so the parallel reduce may pair extents in any order.
    pub fn merge(self, other: Self) -> Self {
        Extent {
            min: Point3D::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3D::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// The 6-element `geographicalExtent` metadata row: min x,y,z, max x,y,z
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }
}

/// World-space bounding box over the vertex lists of all features. The fold
/// is commutative and associative, so it runs as a parallel map-reduce per
/// feature. An empty feature list yields the infinite seed.
pub fn geographical_extent(features: &[CityJsonFeature], transform: &Transform) -> Extent {
    features
        .par_iter()
        .map(|feature| {
            let mut extent = Extent::new();
            for vertex in &feature.vertices {
                extent.include(&transform.to_world(vertex));
            }
            extent
        })
        .reduce(Extent::new, Extent::merge)
}

/// Recomputes the `geographicalExtent` metadata of the base document from
/// its features. Without any vertex the extent is cleared, an infinite seed
/// is no usable extent.
pub fn update_document_extent(document: &mut CityJsonDocument, features: &[CityJsonFeature]) {
    let extent = geographical_extent(features, &document.transform);
    let metadata = document.metadata.get_or_insert_with(Metadata::default);
    metadata.geographical_extent = extent.is_valid().then(|| extent.to_array());
}
