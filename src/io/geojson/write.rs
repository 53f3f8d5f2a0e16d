use std::{fs, path::Path};

use anyhow::{Context, Result};
use geo::{LineString, Point};
use planar::{Circle, Region};
use serde_json::{json, Value};

use crate::{
    evaluate::{CleanedSidewalks, EvaluationResult, PreparedSidewalks},
    sidewalk::Pedestrian,
};

/// Write a GeoJSON value to `path`, creating parent directories as needed.
pub fn write_geojson(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("[io::geojson::write] Failed to create directory {}", parent.display()))?;
    }
    let bytes = serde_json::to_vec(value).context("[io::geojson::write] Failed to serialize GeoJSON")?;
    fs::write(path, bytes)
        .with_context(|| format!("[io::geojson::write] Failed to write GeoJSON to {}", path.display()))
}

/// One feature per populated sidewalk, followed by its building clusters.
///
/// Sidewalk features carry `row`, `population`, a `label` anchor (the outline
/// centroid) and `buildings`: the number of attributed clusters, or `null`
/// for an Interior sidewalk. Building features carry the `row` they belong to.
pub fn result_to_geojson(result: &EvaluationResult) -> Value {
    let mut features = Vec::new();

    for (row, (outline, buildings, population)) in result.rows().enumerate() {
        let count = if buildings.is_no_data() { Value::Null } else { json!(buildings.regions().len()) };
        let label = outline.centroid().map(|c| json!([c.x(), c.y()])).unwrap_or(Value::Null);
        features.push(feature(polygon_geometry(outline), json!({
            "kind": "sidewalk",
            "row": row,
            "population": population,
            "buildings": count,
            "label": label,
        })));

        for building in buildings.regions() {
            features.push(feature(polygon_geometry(building), json!({ "kind": "building", "row": row })));
        }
    }

    collection(features)
}

/// Plain regions tagged with their index.
pub fn regions_to_geojson(regions: &[Region]) -> Value {
    collection(regions.iter().enumerate()
        .map(|(index, region)| feature(polygon_geometry(region), json!({ "index": index })))
        .collect())
}

/// ROW sidewalks first, then Interior ones, each tagged `row: true/false`.
pub fn prepared_to_geojson(prepared: &PreparedSidewalks) -> Value {
    let tagged = |regions: &[Region], row: bool| regions.iter()
        .map(|region| feature(polygon_geometry(region), json!({ "row": row })))
        .collect::<Vec<_>>();

    let mut features = tagged(prepared.row.as_slice(), true);
    features.extend(tagged(prepared.interior.as_slice(), false));
    collection(features)
}

/// Cut sidewalk pieces tagged with their source sidewalk, then the clusters.
pub fn cleaned_to_geojson(cleaned: &CleanedSidewalks) -> Value {
    let sidewalks = cleaned.sidewalks.iter().enumerate()
        .flat_map(|(group, pieces)| pieces.iter()
            .map(move |piece| feature(polygon_geometry(piece), json!({ "kind": "sidewalk", "group": group }))));
    let buildings = cleaned.buildings.iter()
        .map(|building| feature(polygon_geometry(building), json!({ "kind": "building" })));

    collection(sidewalks.chain(buildings).collect())
}

/// Circles as Point features with a `radius` property.
pub fn circles_to_geojson(circles: &[Circle]) -> Value {
    collection(circles.iter()
        .map(|circle| feature(point_geometry(circle.center.into()), json!({ "radius": circle.radius })))
        .collect())
}

pub fn pedestrians_to_geojson(pedestrians: &[Pedestrian]) -> Value {
    collection(pedestrians.iter()
        .map(|p| feature(point_geometry(p.center), json!({ "radius": p.radius })))
        .collect())
}

#[inline]
fn collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

#[inline]
fn feature(geometry: Value, properties: Value) -> Value {
    json!({ "type": "Feature", "geometry": geometry, "properties": properties })
}

fn polygon_geometry(region: &Region) -> Value {
    let polygon = region.polygon();
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring_coords)
        .collect::<Vec<_>>();
    json!({ "type": "Polygon", "coordinates": rings })
}

#[inline]
fn point_geometry(point: Point<f64>) -> Value {
    json!({ "type": "Point", "coordinates": [point.x(), point.y()] })
}

fn ring_coords(ring: &LineString<f64>) -> Vec<[f64; 2]> {
    ring.coords().map(|c| [c.x, c.y]).collect()
}
