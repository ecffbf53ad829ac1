use serde::Deserialize;
use skyhook_core::{AllianceId, CharacterId, CorporationId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CharacterInfo {
    pub alliance_id: Option<AllianceId>,
    pub birthday: Timestamp,
    pub bloodline_id: i32,
    pub corporation_id: CorporationId,
    pub description: Option<String>,
    pub faction_id: Option<i32>,
    pub gender: Gender,
    pub name: String,
    pub race_id: i32,
    pub security_status: Option<f64>,
    pub title: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterAffiliation {
    pub alliance_id: Option<AllianceId>,
    pub character_id: CharacterId,
    pub corporation_id: CorporationId,
    pub faction_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AgentResearch {
    pub agent_id: i32,
    pub points_per_day: f64,
    pub remainder_points: f64,
    pub skill_type_id: TypeId,
    pub started_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Blueprint {
    pub item_id: i64,
    pub location_flag: String,
    pub location_id: i64,
    pub material_efficiency: i32,
    /// `-1` for an original, `-2` for a copy, otherwise a stack size.
    pub quantity: i32,
    /// `-1` for an original.
    pub runs: i32,
    pub time_efficiency: i32,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationHistoryEntry {
    pub corporation_id: CorporationId,
    pub is_deleted: Option<bool>,
    pub record_id: i32,
    pub start_date: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JumpFatigue {
    pub jump_fatigue_expire_date: Option<Timestamp>,
    pub last_jump_date: Option<Timestamp>,
    pub last_update_date: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterMedal {
    pub corporation_id: CorporationId,
    pub date: Timestamp,
    pub description: String,
    pub graphics: Vec<MedalGraphic>,
    pub issuer_id: CharacterId,
    pub medal_id: i32,
    pub reason: String,
    pub status: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MedalGraphic {
    pub color: Option<i32>,
    pub graphic: String,
    pub layer: i32,
    pub part: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Notification {
    pub is_read: Option<bool>,
    pub notification_id: i64,
    pub sender_id: i32,
    pub sender_type: String,
    /// YAML payload, shape depends on `kind`.
    pub text: Option<String>,
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactNotification {
    pub message: String,
    pub notification_id: i32,
    pub send_date: Timestamp,
    pub sender_character_id: CharacterId,
    pub standing_level: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterPortrait {
    pub px128x128: Option<String>,
    pub px256x256: Option<String>,
    pub px512x512: Option<String>,
    pub px64x64: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CharacterRoles {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub roles_at_base: Vec<String>,
    #[serde(default)]
    pub roles_at_hq: Vec<String>,
    #[serde(default)]
    pub roles_at_other: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Standing {
    pub from_id: i32,
    pub from_type: String,
    pub standing: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterTitle {
    pub name: Option<String>,
    pub title_id: Option<i32>,
}

impl EsiClient {
    /// `GET /characters/{character_id}/`: public character information.
    pub async fn get_character(&self, character_id: CharacterId) -> EsiResult<CharacterInfo> {
        self.get_character_raw(character_id).await?.json()
    }

    pub async fn get_character_raw(&self, character_id: CharacterId) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/"), &Query::new())
            .await
    }

    /// `POST /characters/affiliation/`: bulk corporation/alliance/faction lookup.
    pub async fn post_characters_affiliation(
        &self,
        character_ids: &[CharacterId],
    ) -> EsiResult<Vec<CharacterAffiliation>> {
        self.post_characters_affiliation_raw(character_ids)
            .await?
            .json()
    }

    pub async fn post_characters_affiliation_raw(
        &self,
        character_ids: &[CharacterId],
    ) -> EsiResult<EsiResponse> {
        self.post("/characters/affiliation/", &Query::new(), character_ids)
            .await
    }

    /// `GET /characters/{character_id}/agents_research/`
    ///
    /// Requires `esi-characters.read_agents_research.v1`.
    pub async fn get_character_agents_research(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<AgentResearch>> {
        self.get_character_agents_research_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_agents_research_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/agents_research/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/blueprints/`, every page.
    ///
    /// Requires `esi-characters.read_blueprints.v1`.
    pub async fn get_character_blueprints(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<Blueprint>> {
        let responses = self.get_character_blueprints_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_blueprints_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/blueprints/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/corporationhistory/`
    pub async fn get_character_corporation_history(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<CorporationHistoryEntry>> {
        self.get_character_corporation_history_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_corporation_history_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/corporationhistory/"),
            &Query::new(),
        )
        .await
    }

    /// `POST /characters/{character_id}/cspa/`: CSPA charge in ISK for
    /// mailing the given characters.
    ///
    /// Requires `esi-characters.read_contacts.v1`.
    pub async fn post_character_cspa(
        &self,
        character_id: CharacterId,
        character_ids: &[CharacterId],
    ) -> EsiResult<f64> {
        self.post_character_cspa_raw(character_id, character_ids)
            .await?
            .json()
    }

    pub async fn post_character_cspa_raw(
        &self,
        character_id: CharacterId,
        character_ids: &[CharacterId],
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/characters/{character_id}/cspa/"),
            &Query::new(),
            character_ids,
        )
        .await
    }

    /// `GET /characters/{character_id}/fatigue/`
    ///
    /// Requires `esi-characters.read_fatigue.v1`.
    pub async fn get_character_fatigue(&self, character_id: CharacterId) -> EsiResult<JumpFatigue> {
        self.get_character_fatigue_raw(character_id).await?.json()
    }

    pub async fn get_character_fatigue_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/fatigue/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/medals/`
    ///
    /// Requires `esi-characters.read_medals.v1`.
    pub async fn get_character_medals(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<CharacterMedal>> {
        self.get_character_medals_raw(character_id).await?.json()
    }

    pub async fn get_character_medals_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/medals/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/notifications/`
    ///
    /// Requires `esi-characters.read_notifications.v1`.
    pub async fn get_character_notifications(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<Notification>> {
        self.get_character_notifications_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_notifications_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/notifications/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/notifications/contacts/`
    ///
    /// Requires `esi-characters.read_notifications.v1`.
    pub async fn get_character_contact_notifications(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<ContactNotification>> {
        self.get_character_contact_notifications_raw(character_id)
            .await?
            .json()
    }

    pub async fn get_character_contact_notifications_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/notifications/contacts/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/portrait/`
    pub async fn get_character_portrait(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterPortrait> {
        self.get_character_portrait_raw(character_id).await?.json()
    }

    pub async fn get_character_portrait_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/portrait/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/roles/`
    ///
    /// Requires `esi-characters.read_corporation_roles.v1`.
    pub async fn get_character_roles(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterRoles> {
        self.get_character_roles_raw(character_id).await?.json()
    }

    pub async fn get_character_roles_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/roles/"), &Query::new())
            .await
    }

    /// `GET /characters/{character_id}/standings/`
    ///
    /// Requires `esi-characters.read_standings.v1`.
    pub async fn get_character_standings(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<Standing>> {
        self.get_character_standings_raw(character_id).await?.json()
    }

    pub async fn get_character_standings_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/standings/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/titles/`
    ///
    /// Requires `esi-characters.read_titles.v1`.
    pub async fn get_character_titles(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<CharacterTitle>> {
        self.get_character_titles_raw(character_id).await?.json()
    }

    pub async fn get_character_titles_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/titles/"),
            &Query::new(),
        )
        .await
    }
}
