use serde::Deserialize;
use skyhook_core::{
    AllianceId, CharacterId, CorporationId, SolarSystemId, StationId, Timestamp, TypeId,
};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CorporationInfo {
    pub alliance_id: Option<AllianceId>,
    pub ceo_id: CharacterId,
    pub creator_id: CharacterId,
    pub date_founded: Option<Timestamp>,
    pub description: Option<String>,
    pub faction_id: Option<i32>,
    pub home_station_id: Option<StationId>,
    pub member_count: i32,
    pub name: String,
    pub shares: Option<i64>,
    pub tax_rate: f64,
    pub ticker: String,
    pub url: Option<String>,
    pub war_eligible: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AllianceHistoryEntry {
    pub alliance_id: Option<AllianceId>,
    pub is_deleted: Option<bool>,
    pub record_id: i32,
    pub start_date: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationBlueprint {
    pub item_id: i64,
    pub location_flag: String,
    pub location_id: i64,
    pub material_efficiency: i32,
    pub quantity: i32,
    pub runs: i32,
    pub time_efficiency: i32,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContainerLog {
    pub action: String,
    pub character_id: CharacterId,
    pub container_id: i64,
    pub container_type_id: TypeId,
    pub location_flag: String,
    pub location_id: i64,
    pub logged_at: Timestamp,
    pub new_config_bitmask: Option<i32>,
    pub old_config_bitmask: Option<i32>,
    pub password_type: Option<String>,
    pub quantity: Option<i32>,
    pub type_id: Option<TypeId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CorporationDivisions {
    #[serde(default)]
    pub hangar: Vec<Division>,
    #[serde(default)]
    pub wallet: Vec<Division>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Division {
    pub division: Option<i32>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationFacility {
    pub facility_id: i64,
    pub system_id: SolarSystemId,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationIcons {
    pub px64x64: Option<String>,
    pub px128x128: Option<String>,
    pub px256x256: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationMedal {
    pub created_at: Timestamp,
    pub creator_id: CharacterId,
    pub description: String,
    pub medal_id: i32,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IssuedMedal {
    pub character_id: CharacterId,
    pub issued_at: Timestamp,
    pub issuer_id: CharacterId,
    pub medal_id: i32,
    pub reason: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemberTitles {
    pub character_id: CharacterId,
    pub titles: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemberTracking {
    pub base_id: Option<i32>,
    pub character_id: CharacterId,
    pub location_id: Option<i64>,
    pub logoff_date: Option<Timestamp>,
    pub logon_date: Option<Timestamp>,
    pub ship_type_id: Option<TypeId>,
    pub start_date: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemberRoles {
    pub character_id: CharacterId,
    #[serde(default)]
    pub grantable_roles: Vec<String>,
    #[serde(default)]
    pub grantable_roles_at_base: Vec<String>,
    #[serde(default)]
    pub grantable_roles_at_hq: Vec<String>,
    #[serde(default)]
    pub grantable_roles_at_other: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub roles_at_base: Vec<String>,
    #[serde(default)]
    pub roles_at_hq: Vec<String>,
    #[serde(default)]
    pub roles_at_other: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RoleChange {
    pub changed_at: Timestamp,
    pub character_id: CharacterId,
    pub issuer_id: CharacterId,
    pub new_roles: Vec<String>,
    pub old_roles: Vec<String>,
    pub role_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Shareholder {
    pub share_count: i64,
    pub shareholder_id: i32,
    pub shareholder_type: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CorporationStanding {
    pub from_id: i32,
    pub from_type: String,
    pub standing: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Starbase {
    pub moon_id: Option<i32>,
    pub onlined_since: Option<Timestamp>,
    pub reinforced_until: Option<Timestamp>,
    pub starbase_id: i64,
    pub state: Option<String>,
    pub system_id: SolarSystemId,
    pub type_id: TypeId,
    pub unanchor_at: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StarbaseDetail {
    pub allow_alliance_members: bool,
    pub allow_corporation_members: bool,
    pub anchor: String,
    pub attack_if_at_war: bool,
    pub attack_if_other_security_status_dropping: bool,
    pub attack_security_status_threshold: Option<f64>,
    pub attack_standing_threshold: Option<f64>,
    pub fuel_bay_take: String,
    pub fuel_bay_view: String,
    #[serde(default)]
    pub fuels: Vec<StarbaseFuel>,
    pub offline: String,
    pub online: String,
    pub unanchor: String,
    pub use_alliance_standings: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StarbaseFuel {
    pub quantity: i32,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationStructure {
    pub corporation_id: CorporationId,
    pub fuel_expires: Option<Timestamp>,
    pub name: Option<String>,
    pub next_reinforce_apply: Option<Timestamp>,
    pub next_reinforce_hour: Option<i32>,
    pub profile_id: i32,
    pub reinforce_hour: Option<i32>,
    #[serde(default)]
    pub services: Vec<StructureService>,
    pub state: String,
    pub state_timer_end: Option<Timestamp>,
    pub state_timer_start: Option<Timestamp>,
    pub structure_id: i64,
    pub system_id: SolarSystemId,
    pub type_id: TypeId,
    pub unanchors_at: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StructureService {
    pub name: String,
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CorporationTitle {
    #[serde(default)]
    pub grantable_roles: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub name: Option<String>,
    pub title_id: Option<i32>,
}

impl EsiClient {
    /// `GET /corporations/{corporation_id}/`: public corporation information.
    pub async fn get_corporation(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<CorporationInfo> {
        self.get_corporation_raw(corporation_id).await?.json()
    }

    pub async fn get_corporation_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/corporations/{corporation_id}/"), &Query::new())
            .await
    }

    /// `GET /corporations/{corporation_id}/alliancehistory/`
    pub async fn get_corporation_alliance_history(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<AllianceHistoryEntry>> {
        self.get_corporation_alliance_history_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_alliance_history_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/alliancehistory/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/blueprints/`, every page.
    ///
    /// Requires `esi-corporations.read_blueprints.v1`.
    pub async fn get_corporation_blueprints(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CorporationBlueprint>> {
        let responses = self.get_corporation_blueprints_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_blueprints_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/blueprints/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/containers/logs/`, every page.
    ///
    /// Requires `esi-corporations.read_container_logs.v1`.
    pub async fn get_corporation_container_logs(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<ContainerLog>> {
        let responses = self.get_corporation_container_logs_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_container_logs_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/containers/logs/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/divisions/`
    ///
    /// Requires `esi-corporations.read_divisions.v1`.
    pub async fn get_corporation_divisions(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<CorporationDivisions> {
        self.get_corporation_divisions_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_divisions_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/divisions/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/facilities/`
    ///
    /// Requires `esi-corporations.read_facilities.v1`.
    pub async fn get_corporation_facilities(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CorporationFacility>> {
        self.get_corporation_facilities_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_facilities_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/facilities/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/icons/`
    pub async fn get_corporation_icons(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<CorporationIcons> {
        self.get_corporation_icons_raw(corporation_id).await?.json()
    }

    pub async fn get_corporation_icons_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/icons/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/medals/`, every page.
    ///
    /// Requires `esi-corporations.read_medals.v1`.
    pub async fn get_corporation_medals(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CorporationMedal>> {
        let responses = self.get_corporation_medals_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_medals_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/medals/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/medals/issued/`, every page.
    ///
    /// Requires `esi-corporations.read_medals.v1`.
    pub async fn get_corporation_issued_medals(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<IssuedMedal>> {
        let responses = self.get_corporation_issued_medals_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_issued_medals_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/medals/issued/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/members/`
    ///
    /// Requires `esi-corporations.read_corporation_membership.v1`.
    pub async fn get_corporation_members(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CharacterId>> {
        self.get_corporation_members_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_members_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/members/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/members/limit/`
    ///
    /// Requires `esi-corporations.track_members.v1`.
    pub async fn get_corporation_member_limit(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<i32> {
        self.get_corporation_member_limit_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_member_limit_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/members/limit/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/members/titles/`
    ///
    /// Requires `esi-corporations.read_titles.v1`.
    pub async fn get_corporation_member_titles(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<MemberTitles>> {
        self.get_corporation_member_titles_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_member_titles_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/members/titles/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/membertracking/`
    ///
    /// Requires `esi-corporations.track_members.v1`.
    pub async fn get_corporation_member_tracking(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<MemberTracking>> {
        self.get_corporation_member_tracking_raw(corporation_id)
            .await?
            .json()
    }

    pub async fn get_corporation_member_tracking_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/membertracking/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/roles/`
    ///
    /// Requires `esi-corporations.read_corporation_membership.v1`.
    pub async fn get_corporation_roles(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<MemberRoles>> {
        self.get_corporation_roles_raw(corporation_id).await?.json()
    }

    pub async fn get_corporation_roles_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/roles/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/roles/history/`, every page.
    ///
    /// Requires `esi-corporations.read_corporation_membership.v1`.
    pub async fn get_corporation_roles_history(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<RoleChange>> {
        let responses = self.get_corporation_roles_history_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_roles_history_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/roles/history/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/shareholders/`, every page.
    ///
    /// Requires `esi-wallet.read_corporation_wallets.v1`.
    pub async fn get_corporation_shareholders(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<Shareholder>> {
        let responses = self.get_corporation_shareholders_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_shareholders_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/shareholders/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/standings/`, every page.
    ///
    /// Requires `esi-corporations.read_standings.v1`.
    pub async fn get_corporation_standings(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CorporationStanding>> {
        let responses = self.get_corporation_standings_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_standings_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/standings/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/starbases/`, every page.
    ///
    /// Requires `esi-corporations.read_starbases.v1`.
    pub async fn get_corporation_starbases(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<Starbase>> {
        let responses = self.get_corporation_starbases_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_starbases_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/starbases/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/starbases/{starbase_id}/`
    ///
    /// Requires `esi-corporations.read_starbases.v1`.
    pub async fn get_corporation_starbase(
        &self,
        corporation_id: CorporationId,
        starbase_id: i64,
        system_id: SolarSystemId,
    ) -> EsiResult<StarbaseDetail> {
        self.get_corporation_starbase_raw(corporation_id, starbase_id, system_id)
            .await?
            .json()
    }

    pub async fn get_corporation_starbase_raw(
        &self,
        corporation_id: CorporationId,
        starbase_id: i64,
        system_id: SolarSystemId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/starbases/{starbase_id}/"),
            &Query::new().with("system_id", system_id),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/structures/`, every page.
    ///
    /// Requires `esi-corporations.read_structures.v1`.
    pub async fn get_corporation_structures(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CorporationStructure>> {
        let responses = self.get_corporation_structures_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_structures_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/structures/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/titles/`
    ///
    /// Requires `esi-corporations.read_titles.v1`.
    pub async fn get_corporation_titles(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<CorporationTitle>> {
        self.get_corporation_titles_raw(corporation_id).await?.json()
    }

    pub async fn get_corporation_titles_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/corporations/{corporation_id}/titles/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/npccorps/`
    pub async fn get_npc_corporations(&self) -> EsiResult<Vec<CorporationId>> {
        self.get_npc_corporations_raw().await?.json()
    }

    pub async fn get_npc_corporations_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/corporations/npccorps/", &Query::new()).await
    }
}
