//// Creates semantically labeled CityJSON building solids from a rectangular
//// footprint and a few roof parameters. This crate may get splitted in the
//// included modules.

// Input side: corner points and building parameters
mod footprint;
mod kernel_in;

// The solid kernel: roof topology tables and the builder
mod building_3d;
mod roof_tables;

// Output side: CityJSON wire types, feature assembly, document extent
mod cityjson;
mod extent;
mod feature_out;

pub use building_3d::{BuildingSolid, LOD, build_solid};
pub use cityjson::*;
pub use extent::{Extent, geographical_extent, update_document_extent};
pub use feature_out::assemble_feature;
pub use footprint::{centroid_2d, is_clockwise, order_by_bearing};
pub use kernel_in::*;
pub use roof_tables::{RoofTopology, topology};
