use std::fmt;

use serde::Deserialize;
use skyhook_core::{
    AllianceId, CharacterId, ConstellationId, CorporationId, RegionId, SolarSystemId, StationId,
    StructureId, TypeId,
};

use super::Position;
use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ancestry {
    pub bloodline_id: i32,
    pub description: String,
    pub icon_id: Option<i32>,
    pub id: i32,
    pub name: String,
    pub short_description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AsteroidBelt {
    pub name: String,
    pub position: Position,
    pub system_id: SolarSystemId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Bloodline {
    pub bloodline_id: i32,
    pub charisma: i32,
    pub corporation_id: CorporationId,
    pub description: String,
    pub intelligence: i32,
    pub memory: i32,
    pub name: String,
    pub perception: i32,
    pub race_id: i32,
    pub ship_type_id: Option<TypeId>,
    pub willpower: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ItemCategory {
    pub category_id: i32,
    pub groups: Vec<i32>,
    pub name: String,
    pub published: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Constellation {
    pub constellation_id: ConstellationId,
    pub name: String,
    pub position: Position,
    pub region_id: RegionId,
    pub systems: Vec<SolarSystemId>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Faction {
    pub corporation_id: Option<CorporationId>,
    pub description: String,
    pub faction_id: i32,
    pub is_unique: bool,
    pub militia_corporation_id: Option<CorporationId>,
    pub name: String,
    pub size_factor: f64,
    pub solar_system_id: Option<SolarSystemId>,
    pub station_count: i32,
    pub station_system_count: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Graphic {
    pub collision_file: Option<String>,
    pub graphic_file: Option<String>,
    pub graphic_id: i32,
    pub icon_folder: Option<String>,
    pub sof_dna: Option<String>,
    /// Spelled this way by ESI.
    pub sof_fation_name: Option<String>,
    pub sof_hull_name: Option<String>,
    pub sof_race_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ItemGroup {
    pub category_id: i32,
    pub group_id: i32,
    pub name: String,
    pub published: bool,
    pub types: Vec<TypeId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Race {
    pub alliance_id: i32,
    pub description: String,
    pub name: String,
    pub race_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Region {
    pub constellations: Vec<ConstellationId>,
    pub description: Option<String>,
    pub name: String,
    pub region_id: RegionId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdName {
    pub id: i32,
    pub name: String,
}

/// Exact-match name resolution; unresolved names are simply absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolvedIds {
    pub agents: Vec<IdName>,
    pub alliances: Vec<IdName>,
    pub characters: Vec<IdName>,
    pub constellations: Vec<IdName>,
    pub corporations: Vec<IdName>,
    pub factions: Vec<IdName>,
    pub inventory_types: Vec<IdName>,
    pub regions: Vec<IdName>,
    pub stations: Vec<IdName>,
    pub systems: Vec<IdName>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCategory {
    Alliance,
    Character,
    Constellation,
    Corporation,
    InventoryType,
    Region,
    SolarSystem,
    Station,
    Faction,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UniverseName {
    pub category: NameCategory,
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Moon {
    pub moon_id: i32,
    pub name: String,
    pub position: Position,
    pub system_id: SolarSystemId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Planet {
    pub name: String,
    pub planet_id: i32,
    pub position: Position,
    pub system_id: SolarSystemId,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stargate {
    pub destination: StargateDestination,
    pub name: String,
    pub position: Position,
    pub stargate_id: i32,
    pub system_id: SolarSystemId,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StargateDestination {
    pub stargate_id: i32,
    pub system_id: SolarSystemId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Star {
    pub age: i64,
    pub luminosity: f64,
    pub name: String,
    pub radius: i64,
    pub solar_system_id: SolarSystemId,
    pub spectral_class: String,
    pub temperature: i32,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Station {
    pub max_dockable_ship_volume: f64,
    pub name: String,
    pub office_rental_cost: f64,
    pub owner: Option<CorporationId>,
    pub position: Position,
    pub race_id: Option<i32>,
    pub reprocessing_efficiency: f64,
    pub reprocessing_stations_take: f64,
    pub services: Vec<String>,
    pub station_id: StationId,
    pub system_id: SolarSystemId,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Structure {
    pub name: String,
    pub owner_id: CorporationId,
    pub position: Option<Position>,
    pub solar_system_id: SolarSystemId,
    pub type_id: Option<TypeId>,
}

/// Service filter for the public structure list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructureFilter {
    Market,
    ManufacturingBasic,
}

impl fmt::Display for StructureFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Market => "market",
            Self::ManufacturingBasic => "manufacturing_basic",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SystemJumps {
    pub ship_jumps: i32,
    pub system_id: SolarSystemId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SystemKills {
    pub npc_kills: i32,
    pub pod_kills: i32,
    pub ship_kills: i32,
    pub system_id: SolarSystemId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SolarSystem {
    pub constellation_id: ConstellationId,
    pub name: String,
    #[serde(default)]
    pub planets: Vec<SystemPlanet>,
    pub position: Position,
    pub security_class: Option<String>,
    pub security_status: f64,
    pub star_id: Option<i32>,
    #[serde(default)]
    pub stargates: Vec<i32>,
    #[serde(default)]
    pub stations: Vec<StationId>,
    pub system_id: SolarSystemId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SystemPlanet {
    #[serde(default)]
    pub asteroid_belts: Vec<i32>,
    #[serde(default)]
    pub moons: Vec<i32>,
    pub planet_id: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ItemType {
    pub capacity: Option<f64>,
    pub description: String,
    #[serde(default)]
    pub dogma_attributes: Vec<TypeAttribute>,
    #[serde(default)]
    pub dogma_effects: Vec<TypeEffect>,
    pub graphic_id: Option<i32>,
    pub group_id: i32,
    pub icon_id: Option<i32>,
    pub market_group_id: Option<i32>,
    pub mass: Option<f64>,
    pub name: String,
    pub packaged_volume: Option<f64>,
    pub portion_size: Option<i32>,
    pub published: bool,
    pub radius: Option<f64>,
    pub type_id: TypeId,
    pub volume: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TypeAttribute {
    pub attribute_id: i32,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TypeEffect {
    pub effect_id: i32,
    pub is_default: bool,
}

impl EsiClient {
    /// `GET /universe/ancestries/`
    pub async fn get_ancestries(&self) -> EsiResult<Vec<Ancestry>> {
        self.get_ancestries_raw().await?.json()
    }

    pub async fn get_ancestries_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/ancestries/", &Query::new()).await
    }

    /// `GET /universe/asteroid_belts/{asteroid_belt_id}/`
    pub async fn get_asteroid_belt(&self, asteroid_belt_id: i32) -> EsiResult<AsteroidBelt> {
        self.get_asteroid_belt_raw(asteroid_belt_id).await?.json()
    }

    pub async fn get_asteroid_belt_raw(&self, asteroid_belt_id: i32) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/universe/asteroid_belts/{asteroid_belt_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /universe/bloodlines/`
    pub async fn get_bloodlines(&self) -> EsiResult<Vec<Bloodline>> {
        self.get_bloodlines_raw().await?.json()
    }

    pub async fn get_bloodlines_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/bloodlines/", &Query::new()).await
    }

    /// `GET /universe/categories/`
    pub async fn get_categories(&self) -> EsiResult<Vec<i32>> {
        self.get_categories_raw().await?.json()
    }

    pub async fn get_categories_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/categories/", &Query::new()).await
    }

    /// `GET /universe/categories/{category_id}/`
    pub async fn get_category(&self, category_id: i32) -> EsiResult<ItemCategory> {
        self.get_category_raw(category_id).await?.json()
    }

    pub async fn get_category_raw(&self, category_id: i32) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/universe/categories/{category_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /universe/constellations/`
    pub async fn get_constellations(&self) -> EsiResult<Vec<ConstellationId>> {
        self.get_constellations_raw().await?.json()
    }

    pub async fn get_constellations_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/constellations/", &Query::new()).await
    }

    /// `GET /universe/constellations/{constellation_id}/`
    pub async fn get_constellation(
        &self,
        constellation_id: ConstellationId,
    ) -> EsiResult<Constellation> {
        self.get_constellation_raw(constellation_id).await?.json()
    }

    pub async fn get_constellation_raw(
        &self,
        constellation_id: ConstellationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/universe/constellations/{constellation_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /universe/factions/`
    pub async fn get_factions(&self) -> EsiResult<Vec<Faction>> {
        self.get_factions_raw().await?.json()
    }

    pub async fn get_factions_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/factions/", &Query::new()).await
    }

    /// `GET /universe/graphics/`
    pub async fn get_graphics(&self) -> EsiResult<Vec<i32>> {
        self.get_graphics_raw().await?.json()
    }

    pub async fn get_graphics_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/graphics/", &Query::new()).await
    }

    /// `GET /universe/graphics/{graphic_id}/`
    pub async fn get_graphic(&self, graphic_id: i32) -> EsiResult<Graphic> {
        self.get_graphic_raw(graphic_id).await?.json()
    }

    pub async fn get_graphic_raw(&self, graphic_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/graphics/{graphic_id}/"), &Query::new())
            .await
    }

    /// `GET /universe/groups/`, every page.
    pub async fn get_groups(&self) -> EsiResult<Vec<i32>> {
        let responses = self.get_groups_raw().await?;
        concat_responses(&responses)
    }

    pub async fn get_groups_raw(&self) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated("/universe/groups/", &Query::new()).await
    }

    /// `GET /universe/groups/{group_id}/`
    pub async fn get_group(&self, group_id: i32) -> EsiResult<ItemGroup> {
        self.get_group_raw(group_id).await?.json()
    }

    pub async fn get_group_raw(&self, group_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/groups/{group_id}/"), &Query::new())
            .await
    }

    /// `POST /universe/ids/`: resolves exact names to ids.
    pub async fn post_universe_ids(&self, names: &[String]) -> EsiResult<ResolvedIds> {
        self.post_universe_ids_raw(names).await?.json()
    }

    pub async fn post_universe_ids_raw(&self, names: &[String]) -> EsiResult<EsiResponse> {
        self.post("/universe/ids/", &Query::new(), names).await
    }

    /// `POST /universe/names/`: resolves ids of any kind to names and categories.
    pub async fn post_universe_names(&self, ids: &[i64]) -> EsiResult<Vec<UniverseName>> {
        self.post_universe_names_raw(ids).await?.json()
    }

    pub async fn post_universe_names_raw(&self, ids: &[i64]) -> EsiResult<EsiResponse> {
        self.post("/universe/names/", &Query::new(), ids).await
    }

    /// `GET /universe/moons/{moon_id}/`
    pub async fn get_moon(&self, moon_id: i32) -> EsiResult<Moon> {
        self.get_moon_raw(moon_id).await?.json()
    }

    pub async fn get_moon_raw(&self, moon_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/moons/{moon_id}/"), &Query::new())
            .await
    }

    /// `GET /universe/planets/{planet_id}/`
    pub async fn get_planet(&self, planet_id: i32) -> EsiResult<Planet> {
        self.get_planet_raw(planet_id).await?.json()
    }

    pub async fn get_planet_raw(&self, planet_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/planets/{planet_id}/"), &Query::new())
            .await
    }

    /// `GET /universe/races/`
    pub async fn get_races(&self) -> EsiResult<Vec<Race>> {
        self.get_races_raw().await?.json()
    }

    pub async fn get_races_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/races/", &Query::new()).await
    }

    /// `GET /universe/regions/`
    pub async fn get_regions(&self) -> EsiResult<Vec<RegionId>> {
        self.get_regions_raw().await?.json()
    }

    pub async fn get_regions_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/regions/", &Query::new()).await
    }

    /// `GET /universe/regions/{region_id}/`
    pub async fn get_region(&self, region_id: RegionId) -> EsiResult<Region> {
        self.get_region_raw(region_id).await?.json()
    }

    pub async fn get_region_raw(&self, region_id: RegionId) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/regions/{region_id}/"), &Query::new())
            .await
    }

    /// `GET /universe/stargates/{stargate_id}/`
    pub async fn get_stargate(&self, stargate_id: i32) -> EsiResult<Stargate> {
        self.get_stargate_raw(stargate_id).await?.json()
    }

    pub async fn get_stargate_raw(&self, stargate_id: i32) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/universe/stargates/{stargate_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /universe/stars/{star_id}/`
    pub async fn get_star(&self, star_id: i32) -> EsiResult<Star> {
        self.get_star_raw(star_id).await?.json()
    }

    pub async fn get_star_raw(&self, star_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/stars/{star_id}/"), &Query::new())
            .await
    }

    /// `GET /universe/stations/{station_id}/`
    pub async fn get_station(&self, station_id: StationId) -> EsiResult<Station> {
        self.get_station_raw(station_id).await?.json()
    }

    pub async fn get_station_raw(&self, station_id: StationId) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/stations/{station_id}/"), &Query::new())
            .await
    }

    /// `GET /universe/structures/`: public structure ids, optionally
    /// restricted to those offering a service.
    pub async fn get_structures(
        &self,
        filter: Option<StructureFilter>,
    ) -> EsiResult<Vec<StructureId>> {
        self.get_structures_raw(filter).await?.json()
    }

    pub async fn get_structures_raw(
        &self,
        filter: Option<StructureFilter>,
    ) -> EsiResult<EsiResponse> {
        self.get(
            "/universe/structures/",
            &Query::new().with_opt("filter", filter),
        )
        .await
    }

    /// `GET /universe/structures/{structure_id}/`
    ///
    /// Requires `esi-universe.read_structures.v1`.
    pub async fn get_structure(&self, structure_id: StructureId) -> EsiResult<Structure> {
        self.get_structure_raw(structure_id).await?.json()
    }

    pub async fn get_structure_raw(&self, structure_id: StructureId) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/universe/structures/{structure_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /universe/system_jumps/`: jumps in the last hour, systems with
    /// none omitted.
    pub async fn get_system_jumps(&self) -> EsiResult<Vec<SystemJumps>> {
        self.get_system_jumps_raw().await?.json()
    }

    pub async fn get_system_jumps_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/system_jumps/", &Query::new()).await
    }

    /// `GET /universe/system_kills/`: kills in the last hour.
    pub async fn get_system_kills(&self) -> EsiResult<Vec<SystemKills>> {
        self.get_system_kills_raw().await?.json()
    }

    pub async fn get_system_kills_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/system_kills/", &Query::new()).await
    }

    /// `GET /universe/systems/`
    pub async fn get_systems(&self) -> EsiResult<Vec<SolarSystemId>> {
        self.get_systems_raw().await?.json()
    }

    pub async fn get_systems_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/universe/systems/", &Query::new()).await
    }

    /// `GET /universe/systems/{system_id}/`
    pub async fn get_system(&self, system_id: SolarSystemId) -> EsiResult<SolarSystem> {
        self.get_system_raw(system_id).await?.json()
    }

    pub async fn get_system_raw(&self, system_id: SolarSystemId) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/systems/{system_id}/"), &Query::new())
            .await
    }

    /// `GET /universe/types/`: published type ids, every page.
    pub async fn get_types(&self) -> EsiResult<Vec<TypeId>> {
        let responses = self.get_types_raw().await?;
        concat_responses(&responses)
    }

    pub async fn get_types_raw(&self) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated("/universe/types/", &Query::new()).await
    }

    /// `GET /universe/types/{type_id}/`
    pub async fn get_type(&self, type_id: TypeId) -> EsiResult<ItemType> {
        self.get_type_raw(type_id).await?.json()
    }

    pub async fn get_type_raw(&self, type_id: TypeId) -> EsiResult<EsiResponse> {
        self.get(&format!("/universe/types/{type_id}/"), &Query::new())
            .await
    }
}

impl ResolvedIds {
    pub fn character(&self, name: &str) -> Option<CharacterId> {
        find_id(&self.characters, name).map(CharacterId)
    }

    pub fn corporation(&self, name: &str) -> Option<CorporationId> {
        find_id(&self.corporations, name).map(CorporationId)
    }

    pub fn alliance(&self, name: &str) -> Option<AllianceId> {
        find_id(&self.alliances, name).map(AllianceId)
    }

    pub fn system(&self, name: &str) -> Option<SolarSystemId> {
        find_id(&self.systems, name).map(SolarSystemId)
    }

    pub fn inventory_type(&self, name: &str) -> Option<TypeId> {
        find_id(&self.inventory_types, name).map(TypeId)
    }
}

fn find_id(entries: &[IdName], name: &str) -> Option<i32> {
    entries
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.id)
}

#[cfg(test)]
mod tests {
    use skyhook_core::SolarSystemId;

    use super::{NameCategory, ResolvedIds, UniverseName};

    #[test]
    fn resolved_ids_tolerate_missing_categories() {
        let resolved: ResolvedIds = serde_json::from_str(
            r#"{"systems":[{"id":30000142,"name":"Jita"}]}"#,
        )
        .expect("decode");

        assert!(resolved.characters.is_empty());
        assert_eq!(resolved.system("jita"), Some(SolarSystemId(30000142)));
        assert_eq!(resolved.character("Jita"), None);
    }

    #[test]
    fn universe_names_decode_categories() {
        let names: Vec<UniverseName> = serde_json::from_str(
            r#"[{"category":"inventory_type","id":34,"name":"Tritanium"}]"#,
        )
        .expect("decode");

        assert_eq!(names[0].category, NameCategory::InventoryType);
        assert_eq!(names[0].name, "Tritanium");
    }
}
