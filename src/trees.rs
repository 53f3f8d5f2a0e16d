//! Tree canopies loaded from a street-tree census table.

use std::{fmt, path::Path, str::FromStr};

use anyhow::{anyhow, Result};
use geo::Coord;
use log::{debug, info};
use planar::{inside_or_intersecting, Circle, Region};

use crate::io::read_records;

/// Segments used to discretize a canopy circle; within 0.2 % of the disc area.
pub const CANOPY_SEGMENTS: usize = 64;

/// The five New York City boroughs, spelled as in the tree census.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Borough {
    #[default]
    Manhattan,
    Queens,
    Brooklyn,
    Bronx,
    StatenIsland,
}

impl Borough {
    pub const ALL: [Borough; 5] = [
        Borough::Manhattan,
        Borough::Queens,
        Borough::Brooklyn,
        Borough::Bronx,
        Borough::StatenIsland,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Queens => "Queens",
            Borough::Brooklyn => "Brooklyn",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Borough {
    type Err = anyhow::Error;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Borough::ALL.into_iter()
            .find(|b| b.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| anyhow!("[trees] Unknown borough: {s}"))
    }
}

/// Column indices of the fields a tree is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeColumns {
    pub x: usize,
    pub y: usize,
    /// Trunk diameter at breast height; the canopy radius is half of it.
    pub diameter: usize,
    /// Grouping key, e.g. the borough name.
    pub key: usize,
}

/// Build a canopy circle from one raw record, if its fields parse.
pub fn tree_from_record(record: &[String], columns: &TreeColumns) -> Option<Circle> {
    let field = |i: usize| record.get(i)?.trim().parse::<f64>().ok();
    let circle = Circle::new(Coord { x: field(columns.x)?, y: field(columns.y)? }, field(columns.diameter)? / 2.0);
    circle.is_valid().then_some(circle)
}

/// Load the trees of group `key` from the CSV at `path`.
///
/// Rows that do not parse into a valid circle are skipped. With a region,
/// only trees inside or crossing it are kept.
pub fn load_trees(
    path: &Path,
    columns: &TreeColumns,
    key: &str,
    region: Option<&Region>,
    tolerance: f64,
) -> Result<Vec<Circle>> {
    let records = read_records(path, columns.key, key)?;

    let mut trees = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let Some(tree) = tree_from_record(record, columns) else {
            debug!("[trees] record {i} for {key} does not parse, skipped");
            continue;
        };
        if let Some(region) = region {
            if !canopy_region(&tree).is_some_and(|canopy| inside_or_intersecting(region, &canopy, tolerance)) {
                continue;
            }
        }
        trees.push(tree);
    }

    info!("[trees] loaded {} of {} {} records", trees.len(), records.len(), key);
    Ok(trees)
}

/// Canopy polygon at the fixed resolution.
#[inline]
pub fn canopy_region(circle: &Circle) -> Option<Region> {
    Region::from_circle(circle, CANOPY_SEGMENTS).ok()
}
