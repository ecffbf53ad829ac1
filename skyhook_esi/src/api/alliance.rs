use serde::Deserialize;
use skyhook_core::{AllianceId, CharacterId, CorporationId, Timestamp};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AllianceInfo {
    pub creator_corporation_id: CorporationId,
    pub creator_id: CharacterId,
    pub date_founded: Timestamp,
    pub executor_corporation_id: Option<CorporationId>,
    pub faction_id: Option<i32>,
    pub name: String,
    pub ticker: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AllianceIcons {
    pub px128x128: Option<String>,
    pub px64x64: Option<String>,
}

impl EsiClient {
    /// `GET /alliances/`: ids of every active player alliance.
    pub async fn get_alliances(&self) -> EsiResult<Vec<AllianceId>> {
        self.get_alliances_raw().await?.json()
    }

    pub async fn get_alliances_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/alliances/", &Query::new()).await
    }

    /// `GET /alliances/{alliance_id}/`: public alliance information.
    pub async fn get_alliance(&self, alliance_id: AllianceId) -> EsiResult<AllianceInfo> {
        self.get_alliance_raw(alliance_id).await?.json()
    }

    pub async fn get_alliance_raw(&self, alliance_id: AllianceId) -> EsiResult<EsiResponse> {
        self.get(&format!("/alliances/{alliance_id}/"), &Query::new())
            .await
    }

    /// `GET /alliances/{alliance_id}/corporations/`: current member corporations.
    pub async fn get_alliance_corporations(
        &self,
        alliance_id: AllianceId,
    ) -> EsiResult<Vec<CorporationId>> {
        self.get_alliance_corporations_raw(alliance_id)
            .await?
            .json()
    }

    pub async fn get_alliance_corporations_raw(
        &self,
        alliance_id: AllianceId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/alliances/{alliance_id}/corporations/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /alliances/{alliance_id}/icons/`
    pub async fn get_alliance_icons(&self, alliance_id: AllianceId) -> EsiResult<AllianceIcons> {
        self.get_alliance_icons_raw(alliance_id).await?.json()
    }

    pub async fn get_alliance_icons_raw(&self, alliance_id: AllianceId) -> EsiResult<EsiResponse> {
        self.get(&format!("/alliances/{alliance_id}/icons/"), &Query::new())
            .await
    }
}
