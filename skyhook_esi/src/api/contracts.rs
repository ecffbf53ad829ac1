use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, RegionId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Unknown,
    ItemExchange,
    Auction,
    Courier,
    Loan,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contract {
    pub acceptor_id: i32,
    pub assignee_id: i32,
    pub availability: String,
    pub buyout: Option<f64>,
    pub collateral: Option<f64>,
    pub contract_id: i32,
    pub date_accepted: Option<Timestamp>,
    pub date_completed: Option<Timestamp>,
    pub date_expired: Timestamp,
    pub date_issued: Timestamp,
    pub days_to_complete: Option<i32>,
    pub end_location_id: Option<i64>,
    pub for_corporation: bool,
    pub issuer_corporation_id: CorporationId,
    pub issuer_id: CharacterId,
    pub price: Option<f64>,
    pub reward: Option<f64>,
    pub start_location_id: Option<i64>,
    pub status: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContractType,
    pub volume: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PublicContract {
    pub buyout: Option<f64>,
    pub collateral: Option<f64>,
    pub contract_id: i32,
    pub date_expired: Timestamp,
    pub date_issued: Timestamp,
    pub days_to_complete: Option<i32>,
    pub end_location_id: Option<i64>,
    pub for_corporation: Option<bool>,
    pub issuer_corporation_id: CorporationId,
    pub issuer_id: CharacterId,
    pub price: Option<f64>,
    pub reward: Option<f64>,
    pub start_location_id: Option<i64>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContractType,
    pub volume: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContractBid {
    pub amount: f64,
    pub bid_id: i32,
    pub bidder_id: i32,
    pub date_bid: Timestamp,
}

/// Public bids omit the bidder.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PublicContractBid {
    pub amount: f64,
    pub bid_id: i32,
    pub date_bid: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContractItem {
    pub is_included: bool,
    pub is_singleton: bool,
    pub quantity: i32,
    pub raw_quantity: Option<i32>,
    pub record_id: i64,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PublicContractItem {
    pub is_blueprint_copy: Option<bool>,
    pub is_included: bool,
    pub item_id: Option<i64>,
    pub material_efficiency: Option<i32>,
    pub quantity: i32,
    pub record_id: i64,
    pub runs: Option<i32>,
    pub time_efficiency: Option<i32>,
    pub type_id: TypeId,
}

impl EsiClient {
    /// `GET /characters/{character_id}/contracts/`, every page.
    ///
    /// Requires `esi-contracts.read_character_contracts.v1`.
    pub async fn get_character_contracts(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<Contract>> {
        let responses = self.get_character_contracts_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_contracts_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/contracts/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/contracts/{contract_id}/bids/`
    ///
    /// Requires `esi-contracts.read_character_contracts.v1`.
    pub async fn get_character_contract_bids(
        &self,
        character_id: CharacterId,
        contract_id: i32,
    ) -> EsiResult<Vec<ContractBid>> {
        self.get_character_contract_bids_raw(character_id, contract_id)
            .await?
            .json()
    }

    pub async fn get_character_contract_bids_raw(
        &self,
        character_id: CharacterId,
        contract_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/contracts/{contract_id}/bids/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/contracts/{contract_id}/items/`
    ///
    /// Requires `esi-contracts.read_character_contracts.v1`.
    pub async fn get_character_contract_items(
        &self,
        character_id: CharacterId,
        contract_id: i32,
    ) -> EsiResult<Vec<ContractItem>> {
        self.get_character_contract_items_raw(character_id, contract_id)
            .await?
            .json()
    }

    pub async fn get_character_contract_items_raw(
        &self,
        character_id: CharacterId,
        contract_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/contracts/{contract_id}/items/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /contracts/public/{region_id}/`: outstanding public contracts, every page.
    pub async fn get_public_contracts(
        &self,
        region_id: RegionId,
    ) -> EsiResult<Vec<PublicContract>> {
        let responses = self.get_public_contracts_raw(region_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_public_contracts_raw(
        &self,
        region_id: RegionId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(&format!("/contracts/public/{region_id}/"), &Query::new())
            .await
    }

    /// `GET /contracts/public/bids/{contract_id}/`, every page.
    pub async fn get_public_contract_bids(
        &self,
        contract_id: i32,
    ) -> EsiResult<Vec<PublicContractBid>> {
        let responses = self.get_public_contract_bids_raw(contract_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_public_contract_bids_raw(
        &self,
        contract_id: i32,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/contracts/public/bids/{contract_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /contracts/public/items/{contract_id}/`, every page.
    pub async fn get_public_contract_items(
        &self,
        contract_id: i32,
    ) -> EsiResult<Vec<PublicContractItem>> {
        let responses = self.get_public_contract_items_raw(contract_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_public_contract_items_raw(
        &self,
        contract_id: i32,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/contracts/public/items/{contract_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/contracts/`, every page.
    ///
    /// Requires `esi-contracts.read_corporation_contracts.v1`.
    pub async fn get_corporation_contracts(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<Contract>> {
        let responses = self.get_corporation_contracts_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_contracts_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/contracts/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/contracts/{contract_id}/bids/`, every page.
    ///
    /// Requires `esi-contracts.read_corporation_contracts.v1`.
    pub async fn get_corporation_contract_bids(
        &self,
        corporation_id: CorporationId,
        contract_id: i32,
    ) -> EsiResult<Vec<ContractBid>> {
        let responses = self
            .get_corporation_contract_bids_raw(corporation_id, contract_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_contract_bids_raw(
        &self,
        corporation_id: CorporationId,
        contract_id: i32,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/contracts/{contract_id}/bids/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/contracts/{contract_id}/items/`
    ///
    /// Requires `esi-contracts.read_corporation_contracts.v1`.
    pub async fn get_corporation_contract_items(
        &self,
        corporation_id: CorporationId,
        contract_id: i32,
    ) -> EsiResult<Vec<ContractItem>> {
        self.get_corporation_contract_items_raw(corporation_id, contract_id)
            .await?
            .json()
    }

    pub async fn get_corporation_contract_items_raw(
        &self,
        corporation_id: CorporationId,
        contract_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/contracts/{contract_id}/items/"),
            &Query::new(),
        )
        .await
    }
}
