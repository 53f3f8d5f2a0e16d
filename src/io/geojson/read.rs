use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString};
use log::debug;
use planar::Curve;
use serde_json::Value;

/// Read every usable curve from a GeoJSON FeatureCollection file.
pub fn read_curves(path: &Path) -> Result<Vec<Curve>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::geojson::read] Failed to read GeoJSON file: {}", path.display()))?;
    read_curves_str(&text)
        .with_context(|| format!("[io::geojson::read] Invalid GeoJSON in {}", path.display()))
}

/// Read curves from GeoJSON text.
///
/// Polygon and MultiPolygon features contribute their exterior rings,
/// LineStrings contribute a polyline as written (open ones included), and
/// Points carrying a numeric `radius` or `diameter` property contribute a
/// circle. Anything else is skipped.
pub fn read_curves_str(text: &str) -> Result<Vec<Curve>> {
    let value: Value = serde_json::from_str(text).context("[io::geojson::read] Failed to parse GeoJSON")?;
    let Some(features) = value["features"].as_array() else {
        bail!("[io::geojson::read] Expected a FeatureCollection with a `features` array")
    };

    let mut curves = Vec::new();
    for (i, feature) in features.iter().enumerate() {
        let geometry = &feature["geometry"];
        let coords = &geometry["coordinates"];

        match geometry["type"].as_str() {
            Some("Polygon") => curves.push(Curve::Polyline(parse_exterior(coords)?)),
            Some("MultiPolygon") => {
                for polygon in as_array(coords)? {
                    curves.push(Curve::Polyline(parse_exterior(polygon)?));
                }
            }
            Some("LineString") => curves.push(Curve::Polyline(parse_line(coords)?)),
            Some("Point") => match point_radius(&feature["properties"]) {
                Some(radius) => curves.push(Curve::circle(parse_coord(coords)?, radius)),
                None => debug!("[io::geojson::read] point feature {i} has no radius, skipped"),
            },
            other => debug!("[io::geojson::read] feature {i} has unsupported geometry {other:?}, skipped"),
        }
    }

    Ok(curves)
}

/// `radius`, or half of `diameter`.
fn point_radius(properties: &Value) -> Option<f64> {
    properties["radius"].as_f64()
        .or_else(|| properties["diameter"].as_f64().map(|d| d / 2.0))
}

fn parse_exterior(polygon: &Value) -> Result<LineString<f64>> {
    let exterior = as_array(polygon)?.first()
        .ok_or_else(|| anyhow!("[io::geojson::read] Polygon without an exterior ring"))?;
    parse_line(exterior)
}

/// Coordinates are kept as written; closure is decided later.
fn parse_line(coords: &Value) -> Result<LineString<f64>> {
    as_array(coords)?.iter()
        .map(parse_coord)
        .collect::<Result<Vec<_>>>()
        .map(LineString)
}

fn parse_coord(value: &Value) -> Result<Coord<f64>> {
    let pair = as_array(value)?;
    match (pair.first().and_then(Value::as_f64), pair.get(1).and_then(Value::as_f64)) {
        (Some(x), Some(y)) => Ok(Coord { x, y }),
        _ => bail!("[io::geojson::read] Invalid coordinate: {value}"),
    }
}

fn as_array(value: &Value) -> Result<&Vec<Value>> {
    value.as_array().ok_or_else(|| anyhow!("[io::geojson::read] Expected an array, found {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_supported_geometries() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "Polygon", "coordinates": [[[0,0],[4,0],[4,4],[0,4],[0,0]], [[1,1],[2,1],[2,2],[1,1]]] } },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "MultiPolygon", "coordinates": [[[[0,0],[1,0],[1,1],[0,0]]], [[[5,5],[6,5],[6,6],[5,5]]]] } },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "LineString", "coordinates": [[0,0],[3,0]] } },
                { "type": "Feature", "properties": { "diameter": 8 },
                  "geometry": { "type": "Point", "coordinates": [10, 10] } },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "Point", "coordinates": [20, 20] } }
            ]
        }"#;

        let curves = read_curves_str(text).unwrap();
        assert_eq!(curves.len(), 5);
        assert!(matches!(&curves[0], Curve::Polyline(ring) if ring.0.len() == 5));
        assert!(matches!(&curves[3], Curve::Polyline(line) if line.0.len() == 2));
        assert!(matches!(&curves[4], Curve::Circle(circle) if circle.radius == 4.0));
    }

    #[test]
    fn open_rings_are_not_closed_on_read() {
        let text = r#"{ "type": "FeatureCollection", "features": [
            { "type": "Feature", "geometry": { "type": "LineString", "coordinates": [[0,0],[4,0],[4,4]] } }
        ] }"#;
        let curves = read_curves_str(text).unwrap();
        assert!(!curves[0].is_closed(0.1));
    }

    #[test]
    fn rejects_non_collections() {
        assert!(read_curves_str(r#"{ "type": "Point", "coordinates": [0, 0] }"#).is_err());
        assert!(read_curves_str("not json").is_err());
    }

    #[test]
    fn rejects_bad_coordinates() {
        let text = r#"{ "type": "FeatureCollection", "features": [
            { "type": "Feature", "geometry": { "type": "LineString", "coordinates": [[0,"a"],[4,0]] } }
        ] }"#;
        assert!(read_curves_str(text).is_err());
    }
}
