// CBC - CityJSON Building Creator
//
// Takes four footprint corners plus roof parameters and prints a CityJSONSeq
// pair to stdout: the base document line first, the building feature second.

use std::error::Error;

use clap::Parser;

use cj_tb::{
    BuildingSpec, CityJsonDocument, Point3D, Transform, assemble_feature, order_by_bearing,
    update_document_extent,
};

#[derive(Parser, Debug)]
#[command(name = "cbc", about = "Create a CityJSON building feature")]
struct Args {
    /// Footprint corner as "x,y,z", given four times, any order
    #[arg(long = "corner", value_name = "X,Y,Z")]
    corners: Vec<String>,

    /// Total building height in meters, ground to highest roof point
    #[arg(long, default_value_t = 10.0)]
    height: f64,

    /// Roof type code: 1000 flat, 1010 monopitch, 1020 dualpent,
    /// 1030 gabled, 1040 hipped, 1070 pavilion
    #[arg(long = "roof-type", default_value = "1000")]
    roof_type: String,

    /// Vertical extent of the roof in meters
    #[arg(long = "roof-height", default_value_t = 0.0)]
    roof_height: f64,

    /// Footprint edge the ridge/slope is anchored to, 0..=3
    #[arg(long, default_value_t = 0)]
    orientation: u8,

    /// Feature and city object id
    #[arg(long, default_value = "building_1")]
    id: String,

    #[arg(long, default_value = "00000000-0000-0000-0000-000000000001")]
    uuid: String,

    /// Document transform scale, x y z
    #[arg(long, num_args = 3, default_values_t = [0.001, 0.001, 0.001])]
    scale: Vec<f64>,

    /// Document transform translate, x y z
    #[arg(long, num_args = 3, default_values_t = [0.0, 0.0, 0.0])]
    translate: Vec<f64>,
}

fn parse_corner(text: &str) -> Result<Point3D, Box<dyn Error>> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("corner needs three coordinates: {text}").into());
    }
    Ok(Point3D::new(
        parts[0].trim().parse()?,
        parts[1].trim().parse()?,
        parts[2].trim().parse()?,
    ))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut corners = Vec::new();
    for text in &args.corners {
        corners.push(parse_corner(text)?);
    }
    let corners = order_by_bearing(&corners);

    let spec = BuildingSpec::from_code(
        &args.roof_type,
        args.height,
        args.roof_height,
        args.orientation,
    )?;

    let transform = Transform {
        scale: [args.scale[0], args.scale[1], args.scale[2]],
        translate: [args.translate[0], args.translate[1], args.translate[2]],
    };

    let feature = assemble_feature(&transform, &args.id, &args.uuid, &corners, &spec)?;

    let mut document = CityJsonDocument::new(transform);
    update_document_extent(&mut document, std::slice::from_ref(&feature));

    // CityJSONSeq: one JSON object per line, base document first
    println!("{}", serde_json::to_string(&document)?);
    println!("{}", serde_json::to_string(&feature)?);

    Ok(())
}
