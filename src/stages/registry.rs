//! Stage catalog for layout lookup.

use log::debug;
use rustc_hash::FxHashMap;

use super::definition::{Stage, StageId, StageInfo};
use crate::core::error::CatalogError;
use crate::core::PlayerId;
use crate::rules::get_board_state;

const BUILTIN_STAGES: &str = include_str!("../../data/stages.json");

/// Immutable registry of stage layouts.
///
/// ## Example
///
/// ```
/// use tableturf::stages::{StageCatalog, StageId};
///
/// let stages = StageCatalog::builtin().unwrap();
/// let box_seats = stages.get_by_name("BoxSeats").unwrap();
/// assert_eq!(box_seats.area, 100);
/// assert!(stages.get(StageId::new(42)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StageCatalog {
    stages: FxHashMap<StageId, Stage>,
    by_name: FxHashMap<String, StageId>,
}

impl StageCatalog {
    /// Build a catalog from already-constructed stages.
    ///
    /// Every layout must open with one uncharged special square per player
    /// and no other ink, so a fresh game always starts from area 1 and an
    /// empty meter on both sides.
    pub fn from_stages(stages: impl IntoIterator<Item = Stage>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for stage in stages {
            if catalog.stages.contains_key(&stage.id) {
                return Err(CatalogError::DuplicateStage(stage.id));
            }
            if !is_start_layout(&stage) {
                return Err(CatalogError::StageStart { id: stage.id });
            }
            catalog.by_name.insert(stage.name.clone(), stage.id);
            catalog.stages.insert(stage.id, stage);
        }
        debug!("stage catalog built with {} stages", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from data records.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a StageInfo>,
    ) -> Result<Self, CatalogError> {
        let stages = records
            .into_iter()
            .map(Stage::from_info)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_stages(stages)
    }

    /// Build a catalog from a JSON array of [`StageInfo`] records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<StageInfo> = serde_json::from_str(json)?;
        Self::from_records(&records)
    }

    /// The eight standard layouts bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_STAGES)
    }

    #[must_use]
    pub fn get(&self, id: StageId) -> Option<&Stage> {
        self.stages.get(&id)
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Stage> {
        self.by_name.get(name).and_then(|id| self.stages.get(id))
    }

    #[must_use]
    pub fn contains(&self, id: StageId) -> bool {
        self.stages.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Iterate over all stages (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.values()
    }

    /// All stages sorted by id.
    #[must_use]
    pub fn stages(&self) -> Vec<&Stage> {
        let mut stages: Vec<_> = self.stages.values().collect();
        stages.sort_by_key(|s| s.id);
        stages
    }
}

fn is_start_layout(stage: &Stage) -> bool {
    let state = get_board_state(stage.board.clone());
    let count = state.count();
    PlayerId::all().all(|p| count.area[p] == 1 && count.special[p] == 0)
}
