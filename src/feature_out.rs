// Output side: wrap a built solid into the CityJSONSeq feature of a host document

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::building_3d::build_solid;
use crate::cityjson::{CityJsonFeature, CityObject, Transform};
use crate::kernel_in::{BuildingSpec, Point3D, ValidationError};

/// Builds the solid and embeds it into a new feature record: the kernel's
/// world-space vertex list is remapped into the document-local frame of the
/// given transform and hoisted to the feature; the stored geometry carries
/// boundaries and semantics only. Inserting the feature into a document's
/// collection stays the caller's job.
pub fn assemble_feature(
    transform: &Transform,
    id: &str,
    uuid: &str,
    corners: &[Point3D],
    spec: &BuildingSpec,
) -> Result<CityJsonFeature, ValidationError> {
    let solid = build_solid(corners, spec)?;

    let vertices: Vec<[f64; 3]> = solid
        .vertices
        .iter()
        .map(|vertex| transform.to_local(vertex))
        .collect();

    let mut attributes = Map::new();
    attributes.insert(
        "roofType".to_string(),
        Value::from(spec.roof_shape.as_code()),
    );
    attributes.insert("measuredHeight".to_string(), Value::from(spec.height));

    let building = CityObject {
        object_type: "Building".to_string(),
        attributes,
        geometry: vec![solid.geometry],
    };

    let mut city_objects = BTreeMap::new();
    city_objects.insert(id.to_string(), building);

    Ok(CityJsonFeature {
        feature_type: "CityJSONFeature".to_string(),
        id: id.to_string(),
        uuid: Some(uuid.to_string()),
        city_objects,
        vertices,
    })
}
