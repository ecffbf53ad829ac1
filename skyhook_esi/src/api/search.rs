use std::fmt;

use serde::Deserialize;
use skyhook_core::{
    AllianceId, CharacterId, ConstellationId, CorporationId, RegionId, SolarSystemId, StationId,
    StructureId, TypeId,
};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchCategory {
    Agent,
    Alliance,
    Character,
    Constellation,
    Corporation,
    Faction,
    InventoryType,
    Region,
    SolarSystem,
    Station,
    Structure,
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Agent => "agent",
            Self::Alliance => "alliance",
            Self::Character => "character",
            Self::Constellation => "constellation",
            Self::Corporation => "corporation",
            Self::Faction => "faction",
            Self::InventoryType => "inventory_type",
            Self::Region => "region",
            Self::SolarSystem => "solar_system",
            Self::Station => "station",
            Self::Structure => "structure",
        })
    }
}

/// Matches grouped by category; categories without hits are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub agent: Vec<i32>,
    pub alliance: Vec<AllianceId>,
    pub character: Vec<CharacterId>,
    pub constellation: Vec<ConstellationId>,
    pub corporation: Vec<CorporationId>,
    pub faction: Vec<i32>,
    pub inventory_type: Vec<TypeId>,
    pub region: Vec<RegionId>,
    pub solar_system: Vec<SolarSystemId>,
    pub station: Vec<StationId>,
    pub structure: Vec<StructureId>,
}

impl EsiClient {
    /// `GET /characters/{character_id}/search/`
    ///
    /// Requires `esi-search.search_structures.v1`.
    pub async fn search(
        &self,
        character_id: CharacterId,
        categories: &[SearchCategory],
        search: &str,
        strict: Option<bool>,
    ) -> EsiResult<SearchResults> {
        self.search_raw(character_id, categories, search, strict)
            .await?
            .json()
    }

    pub async fn search_raw(
        &self,
        character_id: CharacterId,
        categories: &[SearchCategory],
        search: &str,
        strict: Option<bool>,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/search/"),
            &Query::new()
                .with_list("categories", categories)
                .with("search", search)
                .with_opt("strict", strict),
        )
        .await
    }
}
