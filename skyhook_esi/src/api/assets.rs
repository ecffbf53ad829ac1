use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, api::Position, concat_responses};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub is_blueprint_copy: Option<bool>,
    pub is_singleton: bool,
    pub item_id: i64,
    pub location_flag: String,
    pub location_id: i64,
    pub location_type: AssetLocationType,
    pub quantity: i32,
    pub type_id: TypeId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetLocationType {
    Station,
    SolarSystem,
    Item,
    Other,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AssetLocation {
    pub item_id: i64,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AssetName {
    pub item_id: i64,
    pub name: String,
}

impl EsiClient {
    /// `GET /characters/{character_id}/assets/`, every page.
    ///
    /// Requires `esi-assets.read_assets.v1`.
    pub async fn get_character_assets(&self, character_id: CharacterId) -> EsiResult<Vec<Asset>> {
        let responses = self.get_character_assets_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_assets_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/assets/"),
            &Query::new(),
        )
        .await
    }

    /// `POST /characters/{character_id}/assets/locations/`: coordinates of
    /// items in space.
    ///
    /// Requires `esi-assets.read_assets.v1`.
    pub async fn post_character_assets_locations(
        &self,
        character_id: CharacterId,
        item_ids: &[i64],
    ) -> EsiResult<Vec<AssetLocation>> {
        self.post_character_assets_locations_raw(character_id, item_ids)
            .await?
            .json()
    }

    pub async fn post_character_assets_locations_raw(
        &self,
        character_id: CharacterId,
        item_ids: &[i64],
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/characters/{character_id}/assets/locations/"),
            &Query::new(),
            item_ids,
        )
        .await
    }

    /// `POST /characters/{character_id}/assets/names/`: names of singleton
    /// items such as ships and containers.
    ///
    /// Requires `esi-assets.read_assets.v1`.
    pub async fn post_character_assets_names(
        &self,
        character_id: CharacterId,
        item_ids: &[i64],
    ) -> EsiResult<Vec<AssetName>> {
        self.post_character_assets_names_raw(character_id, item_ids)
            .await?
            .json()
    }

    pub async fn post_character_assets_names_raw(
        &self,
        character_id: CharacterId,
        item_ids: &[i64],
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/characters/{character_id}/assets/names/"),
            &Query::new(),
            item_ids,
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/assets/`, every page.
    ///
    /// Requires `esi-assets.read_corporation_assets.v1` and the Director role.
    pub async fn get_corporation_assets(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<Asset>> {
        let responses = self.get_corporation_assets_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_assets_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/assets/"),
            &Query::new(),
        )
        .await
    }

    /// `POST /corporations/{corporation_id}/assets/locations/`
    ///
    /// Requires `esi-assets.read_corporation_assets.v1`.
    pub async fn post_corporation_assets_locations(
        &self,
        corporation_id: CorporationId,
        item_ids: &[i64],
    ) -> EsiResult<Vec<AssetLocation>> {
        self.post_corporation_assets_locations_raw(corporation_id, item_ids)
            .await?
            .json()
    }

    pub async fn post_corporation_assets_locations_raw(
        &self,
        corporation_id: CorporationId,
        item_ids: &[i64],
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/corporations/{corporation_id}/assets/locations/"),
            &Query::new(),
            item_ids,
        )
        .await
    }

    /// `POST /corporations/{corporation_id}/assets/names/`
    ///
    /// Requires `esi-assets.read_corporation_assets.v1`.
    pub async fn post_corporation_assets_names(
        &self,
        corporation_id: CorporationId,
        item_ids: &[i64],
    ) -> EsiResult<Vec<AssetName>> {
        self.post_corporation_assets_names_raw(corporation_id, item_ids)
            .await?
            .json()
    }

    pub async fn post_corporation_assets_names_raw(
        &self,
        corporation_id: CorporationId,
        item_ids: &[i64],
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/corporations/{corporation_id}/assets/names/"),
            &Query::new(),
            item_ids,
        )
        .await
    }
}
