use serde::Deserialize;
use skyhook_core::{AllianceId, CharacterId, CorporationId, SolarSystemId, Timestamp, TypeId};

use super::Position;
use crate::{EsiClient, EsiError, EsiResponse, EsiResult, Query, concat_responses};

/// A killmail id with the hash needed to fetch its details.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct KillmailRef {
    pub killmail_hash: String,
    pub killmail_id: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Killmail {
    pub attackers: Vec<Attacker>,
    pub killmail_id: i32,
    pub killmail_time: Timestamp,
    pub moon_id: Option<i32>,
    pub solar_system_id: SolarSystemId,
    pub victim: Victim,
    pub war_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Attacker {
    pub alliance_id: Option<AllianceId>,
    pub character_id: Option<CharacterId>,
    pub corporation_id: Option<CorporationId>,
    pub damage_done: i32,
    pub faction_id: Option<i32>,
    pub final_blow: bool,
    pub security_status: f64,
    pub ship_type_id: Option<TypeId>,
    pub weapon_type_id: Option<TypeId>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Victim {
    pub alliance_id: Option<AllianceId>,
    pub character_id: Option<CharacterId>,
    pub corporation_id: Option<CorporationId>,
    pub damage_taken: i32,
    pub faction_id: Option<i32>,
    #[serde(default)]
    pub items: Vec<KillmailItem>,
    pub position: Option<Position>,
    pub ship_type_id: TypeId,
}

/// Containers carry their contents as nested items.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KillmailItem {
    pub flag: i32,
    pub item_type_id: TypeId,
    #[serde(default)]
    pub items: Vec<KillmailItem>,
    pub quantity_destroyed: Option<i64>,
    pub quantity_dropped: Option<i64>,
    pub singleton: i32,
}

impl EsiClient {
    /// `GET /characters/{character_id}/killmails/recent/`, every page.
    ///
    /// Requires `esi-killmails.read_killmails.v1`.
    pub async fn get_character_recent_killmails(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<KillmailRef>> {
        let responses = self
            .get_character_recent_killmails_raw(character_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_character_recent_killmails_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/killmails/recent/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/killmails/recent/`, every page.
    ///
    /// Requires `esi-killmails.read_corporation_killmails.v1`.
    pub async fn get_corporation_recent_killmails(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<KillmailRef>> {
        let responses = self
            .get_corporation_recent_killmails_raw(corporation_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_recent_killmails_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/killmails/recent/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /killmails/{killmail_id}/{killmail_hash}/`
    pub async fn get_killmail(&self, killmail_id: i32, killmail_hash: &str) -> EsiResult<Killmail> {
        self.get_killmail_raw(killmail_id, killmail_hash)
            .await?
            .json()
    }

    pub async fn get_killmail_raw(
        &self,
        killmail_id: i32,
        killmail_hash: &str,
    ) -> EsiResult<EsiResponse> {
        let path = format!("/killmails/{killmail_id}/{killmail_hash}/");
        // Hashes are hex digests; anything else would reshape the path.
        if killmail_hash.is_empty() || !killmail_hash.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EsiError::InvalidPath(path));
        }
        self.get(&path, &Query::new()).await
    }
}
