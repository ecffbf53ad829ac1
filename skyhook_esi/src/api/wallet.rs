use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JournalEntry {
    pub amount: Option<f64>,
    pub balance: Option<f64>,
    pub context_id: Option<i64>,
    pub context_id_type: Option<String>,
    pub date: Timestamp,
    pub description: String,
    pub first_party_id: Option<i32>,
    pub id: i64,
    pub reason: Option<String>,
    pub ref_type: String,
    pub second_party_id: Option<i32>,
    pub tax: Option<f64>,
    pub tax_receiver_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WalletTransaction {
    pub client_id: i32,
    pub date: Timestamp,
    pub is_buy: bool,
    /// Character transactions only.
    pub is_personal: Option<bool>,
    pub journal_ref_id: i64,
    pub location_id: i64,
    pub quantity: i32,
    pub transaction_id: i64,
    pub type_id: TypeId,
    pub unit_price: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CorporationWallet {
    pub balance: f64,
    pub division: i32,
}

impl EsiClient {
    /// `GET /characters/{character_id}/wallet/`: ISK balance.
    ///
    /// Requires `esi-wallet.read_character_wallet.v1`.
    pub async fn get_character_wallet(&self, character_id: CharacterId) -> EsiResult<f64> {
        self.get_character_wallet_raw(character_id).await?.json()
    }

    pub async fn get_character_wallet_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/wallet/"), &Query::new())
            .await
    }

    /// `GET /characters/{character_id}/wallet/journal/`: the last 30 days, every page.
    ///
    /// Requires `esi-wallet.read_character_wallet.v1`.
    pub async fn get_character_wallet_journal(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<JournalEntry>> {
        let responses = self.get_character_wallet_journal_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_wallet_journal_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/wallet/journal/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/wallet/transactions/`: up to 2500
    /// transactions older than `from_id` when given.
    ///
    /// Requires `esi-wallet.read_character_wallet.v1`.
    pub async fn get_character_wallet_transactions(
        &self,
        character_id: CharacterId,
        from_id: Option<i64>,
    ) -> EsiResult<Vec<WalletTransaction>> {
        self.get_character_wallet_transactions_raw(character_id, from_id)
            .await?
            .json()
    }

    pub async fn get_character_wallet_transactions_raw(
        &self,
        character_id: CharacterId,
        from_id: Option<i64>,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/wallet/transactions/"),
            &Query::new().with_opt("from_id", from_id),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/wallets/`: balance per division.
    ///
    /// Requires `esi-wallet.read_corporation_wallets.v1`.
    pub async fn get_corporation_wallets(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CorporationWallet>> {
        self.get_corporation_wallets_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_wallets_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/wallets/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/wallets/{division}/journal/`, every page.
    ///
    /// Requires `esi-wallet.read_corporation_wallets.v1`.
    pub async fn get_corporation_wallet_journal(
        &self,
        corporation_id: CorporationId,
        division: i32,
    ) -> EsiResult<Vec<JournalEntry>> {
        let responses = self
            .get_corporation_wallet_journal_raw(corporation_id, division)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_wallet_journal_raw(
        &self,
        corporation_id: CorporationId,
        division: i32,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/wallets/{division}/journal/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/wallets/{division}/transactions/`
    ///
    /// Requires `esi-wallet.read_corporation_wallets.v1`.
    pub async fn get_corporation_wallet_transactions(
        &self,
        corporation_id: CorporationId,
        division: i32,
        from_id: Option<i64>,
    ) -> EsiResult<Vec<WalletTransaction>> {
        self.get_corporation_wallet_transactions_raw(corporation_id, division, from_id)
            .await?
            .json()
    }

    pub async fn get_corporation_wallet_transactions_raw(
        &self,
        corporation_id: CorporationId,
        division: i32,
        from_id: Option<i64>,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/wallets/{division}/transactions/"),
            &Query::new().with_opt("from_id", from_id),
        )
        .await
    }
}
