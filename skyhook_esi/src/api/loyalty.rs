use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoyaltyPoints {
    pub corporation_id: CorporationId,
    pub loyalty_points: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoyaltyOffer {
    pub ak_cost: Option<i32>,
    pub isk_cost: i64,
    pub lp_cost: i32,
    pub offer_id: i32,
    pub quantity: i32,
    pub required_items: Vec<RequiredItem>,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RequiredItem {
    pub quantity: i32,
    pub type_id: TypeId,
}

impl EsiClient {
    /// `GET /characters/{character_id}/loyalty/points/`
    ///
    /// Requires `esi-characters.read_loyalty.v1`.
    pub async fn get_character_loyalty_points(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<LoyaltyPoints>> {
        self.get_character_loyalty_points_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_loyalty_points_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/loyalty/points/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /loyalty/stores/{corporation_id}/offers/`
    pub async fn get_loyalty_store_offers(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<LoyaltyOffer>> {
        self.get_loyalty_store_offers_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_loyalty_store_offers_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/loyalty/stores/{corporation_id}/offers/"),
            &Query::new(),
        )
        .await
    }
}
