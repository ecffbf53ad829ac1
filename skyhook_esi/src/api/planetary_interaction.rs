use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, SolarSystemId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlanetSummary {
    pub last_update: Timestamp,
    pub num_pins: i32,
    pub owner_id: CharacterId,
    pub planet_id: i32,
    pub planet_type: String,
    pub solar_system_id: SolarSystemId,
    pub upgrade_level: i32,
}

/// The colony layout on one planet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlanetColony {
    pub links: Vec<PlanetLink>,
    pub pins: Vec<PlanetPin>,
    pub routes: Vec<PlanetRoute>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlanetLink {
    pub destination_pin_id: i64,
    pub link_level: i32,
    pub source_pin_id: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlanetPin {
    #[serde(default)]
    pub contents: Vec<PinContent>,
    pub expiry_time: Option<Timestamp>,
    pub extractor_details: Option<ExtractorDetails>,
    pub factory_details: Option<FactoryDetails>,
    pub install_time: Option<Timestamp>,
    pub last_cycle_start: Option<Timestamp>,
    pub latitude: f64,
    pub longitude: f64,
    pub pin_id: i64,
    pub schematic_id: Option<i32>,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PinContent {
    pub amount: i64,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExtractorDetails {
    /// Seconds.
    pub cycle_time: Option<i32>,
    pub head_radius: Option<f64>,
    pub heads: Vec<ExtractorHead>,
    pub product_type_id: Option<TypeId>,
    pub qty_per_cycle: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExtractorHead {
    pub head_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FactoryDetails {
    pub schematic_id: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlanetRoute {
    pub content_type_id: TypeId,
    pub destination_pin_id: i64,
    pub quantity: f64,
    pub route_id: i64,
    pub source_pin_id: i64,
    #[serde(default)]
    pub waypoints: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CustomsOffice {
    pub alliance_tax_rate: Option<f64>,
    pub allow_access_with_standings: bool,
    pub allow_alliance_access: bool,
    pub bad_standing_tax_rate: Option<f64>,
    pub corporation_tax_rate: Option<f64>,
    pub excellent_standing_tax_rate: Option<f64>,
    pub good_standing_tax_rate: Option<f64>,
    pub neutral_standing_tax_rate: Option<f64>,
    pub office_id: i64,
    pub reinforce_exit_end: i32,
    pub reinforce_exit_start: i32,
    pub standing_level: Option<String>,
    pub system_id: SolarSystemId,
    pub terrible_standing_tax_rate: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Schematic {
    /// Seconds.
    pub cycle_time: i32,
    pub schematic_name: String,
}

impl EsiClient {
    /// `GET /characters/{character_id}/planets/`
    ///
    /// Requires `esi-planets.manage_planets.v1`.
    pub async fn get_character_planets(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<PlanetSummary>> {
        self.get_character_planets_raw(character_id).await?.json()
    }

    pub async fn get_character_planets_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/planets/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/planets/{planet_id}/`
    ///
    /// Requires `esi-planets.manage_planets.v1`.
    pub async fn get_character_planet(
        &self,
        character_id: CharacterId,
        planet_id: i32,
    ) -> EsiResult<PlanetColony> {
        self.get_character_planet_raw(character_id, planet_id)
            .await?
            .json()
    }

    pub async fn get_character_planet_raw(
        &self,
        character_id: CharacterId,
        planet_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/planets/{planet_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/customs_offices/`, every page.
    ///
    /// Requires `esi-planets.read_customs_offices.v1`.
    pub async fn get_corporation_customs_offices(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CustomsOffice>> {
        let responses = self
            .get_corporation_customs_offices_raw(corporation_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_customs_offices_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/customs_offices/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /universe/schematics/{schematic_id}/`
    pub async fn get_schematic(&self, schematic_id: i32) -> EsiResult<Schematic> {
        self.get_schematic_raw(schematic_id).await?.json()
    }

    pub async fn get_schematic_raw(&self, schematic_id: i32) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/universe/schematics/{schematic_id}/"),
            &Query::new(),
        )
        .await
    }
}
