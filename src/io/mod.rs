//! File formats: GeoJSON for geometry, CSV for tree tables.

mod csv;
mod geojson;

pub use csv::{read_records, read_records_str};
pub use geojson::{
    circles_to_geojson, cleaned_to_geojson, pedestrians_to_geojson, prepared_to_geojson, read_curves,
    read_curves_str, regions_to_geojson, result_to_geojson, write_geojson,
};
