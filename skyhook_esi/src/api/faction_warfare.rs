use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, SolarSystemId, Timestamp};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

/// Kill or victory-point totals over the three standard windows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FwTotals {
    pub last_week: i32,
    pub total: i32,
    pub yesterday: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterFwStats {
    pub current_rank: Option<i32>,
    pub enlisted_on: Option<Timestamp>,
    pub faction_id: Option<i32>,
    pub highest_rank: Option<i32>,
    pub kills: FwTotals,
    pub victory_points: FwTotals,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationFwStats {
    pub enlisted_on: Option<Timestamp>,
    pub faction_id: Option<i32>,
    pub pilots: Option<i32>,
    pub kills: FwTotals,
    pub victory_points: FwTotals,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FactionFwStats {
    pub faction_id: i32,
    pub pilots: i32,
    pub systems_controlled: i32,
    pub kills: FwTotals,
    pub victory_points: FwTotals,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FwSystem {
    pub contested: String,
    pub occupier_faction_id: i32,
    pub owner_faction_id: i32,
    pub solar_system_id: SolarSystemId,
    pub victory_points: i32,
    pub victory_points_threshold: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FwWar {
    pub against_id: i32,
    pub faction_id: i32,
}

/// One ranked row of a leaderboard; `id` is a faction, corporation or
/// character depending on the board.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(
        alias = "faction_id",
        alias = "corporation_id",
        alias = "character_id"
    )]
    pub id: Option<i32>,
    pub amount: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LeaderboardWindows {
    #[serde(default)]
    pub active_total: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub last_week: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub yesterday: Vec<LeaderboardEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Leaderboard {
    pub kills: LeaderboardWindows,
    pub victory_points: LeaderboardWindows,
}

impl EsiClient {
    /// `GET /characters/{character_id}/fw/stats/`
    ///
    /// Requires `esi-characters.read_fw_stats.v1`.
    pub async fn get_character_fw_stats(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterFwStats> {
        self.get_character_fw_stats_raw(character_id).await?.json()
    }

    pub async fn get_character_fw_stats_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/fw/stats/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/fw/stats/`
    ///
    /// Requires `esi-corporations.read_fw_stats.v1`.
    pub async fn get_corporation_fw_stats(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<CorporationFwStats> {
        self.get_corporation_fw_stats_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_fw_stats_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/fw/stats/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /fw/leaderboards/`: top factions.
    pub async fn get_fw_leaderboards(&self) -> EsiResult<Leaderboard> {
        self.get_fw_leaderboards_raw().await?.json()
    }

    pub async fn get_fw_leaderboards_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/fw/leaderboards/", &Query::new()).await
    }

    /// `GET /fw/leaderboards/characters/`: top pilots.
    pub async fn get_fw_character_leaderboards(&self) -> EsiResult<Leaderboard> {
        self.get_fw_character_leaderboards_raw().await?.json()
    }

    pub async fn get_fw_character_leaderboards_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/fw/leaderboards/characters/", &Query::new()).await
    }

    /// `GET /fw/leaderboards/corporations/`: top corporations.
    pub async fn get_fw_corporation_leaderboards(&self) -> EsiResult<Leaderboard> {
        self.get_fw_corporation_leaderboards_raw().await?.json()
    }

    pub async fn get_fw_corporation_leaderboards_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/fw/leaderboards/corporations/", &Query::new())
            .await
    }

    /// `GET /fw/stats/`: per-faction totals.
    pub async fn get_fw_stats(&self) -> EsiResult<Vec<FactionFwStats>> {
        self.get_fw_stats_raw().await?.json()
    }

    pub async fn get_fw_stats_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/fw/stats/", &Query::new()).await
    }

    /// `GET /fw/systems/`: contested system ownership.
    pub async fn get_fw_systems(&self) -> EsiResult<Vec<FwSystem>> {
        self.get_fw_systems_raw().await?.json()
    }

    pub async fn get_fw_systems_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/fw/systems/", &Query::new()).await
    }

    /// `GET /fw/wars/`
    pub async fn get_fw_wars(&self) -> EsiResult<Vec<FwWar>> {
        self.get_fw_wars_raw().await?.json()
    }

    pub async fn get_fw_wars_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/fw/wars/", &Query::new()).await
    }
}
