use planar::Region;

use crate::sidewalk::Sidewalk;

/// Buildings attributed to one result row.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildingGroup {
    /// The sidewalk is ROW; its contained building clusters.
    Buildings(Vec<Region>),
    /// The sidewalk is Interior.
    NoData,
}

impl BuildingGroup {
    #[inline]
    pub fn regions(&self) -> &[Region] {
        match self {
            BuildingGroup::Buildings(regions) => regions,
            BuildingGroup::NoData => &[],
        }
    }

    #[inline] pub fn is_no_data(&self) -> bool { matches!(self, BuildingGroup::NoData) }
}

/// Populated sidewalks as three index-aligned columns.
///
/// Row `i` of `sidewalks`, `buildings` and `populations` describes the same
/// sidewalk. Rows keep the input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationResult {
    sidewalks: Vec<Region>,
    buildings: Vec<BuildingGroup>,
    populations: Vec<u32>,
}

impl EvaluationResult {
    #[inline] pub fn len(&self) -> usize { self.populations.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.populations.is_empty() }

    #[inline] pub fn sidewalks(&self) -> &[Region] { &self.sidewalks }

    #[inline] pub fn buildings(&self) -> &[BuildingGroup] { &self.buildings }

    #[inline] pub fn populations(&self) -> &[u32] { &self.populations }

    /// Iterate rows as `(outline, buildings, population)`.
    pub fn rows(&self) -> impl Iterator<Item = (&Region, &BuildingGroup, u32)> + '_ {
        self.sidewalks.iter()
            .zip(&self.buildings)
            .zip(&self.populations)
            .map(|((outline, buildings), &population)| (outline, buildings, population))
    }

    fn push(&mut self, outline: Region, buildings: BuildingGroup, population: u32) {
        self.sidewalks.push(outline);
        self.buildings.push(buildings);
        self.populations.push(population);
    }
}

/// Package every sidewalk with a non-zero population.
pub fn correlate(sidewalks: &[Sidewalk]) -> EvaluationResult {
    let mut result = EvaluationResult::default();

    for sidewalk in sidewalks.iter().filter(|sidewalk| sidewalk.population() > 0) {
        let buildings = if sidewalk.is_row() {
            BuildingGroup::Buildings(sidewalk.buildings().to_vec())
        } else {
            BuildingGroup::NoData
        };
        result.push(sidewalk.outline().clone(), buildings, sidewalk.population());
    }

    result
}
