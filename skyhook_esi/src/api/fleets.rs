use serde::{Deserialize, Serialize};
use skyhook_core::{CharacterId, SolarSystemId, StationId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FleetRole {
    FleetCommander,
    WingCommander,
    SquadCommander,
    SquadMember,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterFleet {
    pub fleet_boss_id: Option<CharacterId>,
    pub fleet_id: i64,
    pub role: FleetRole,
    pub squad_id: i64,
    pub wing_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FleetInfo {
    pub is_free_move: bool,
    pub is_registered: bool,
    pub is_voice_enabled: bool,
    pub motd: String,
}

/// Fields left as `None` are not changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FleetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_move: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motd: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FleetMember {
    pub character_id: CharacterId,
    pub join_time: Timestamp,
    pub role: FleetRole,
    pub role_name: String,
    pub ship_type_id: TypeId,
    pub solar_system_id: SolarSystemId,
    pub squad_id: i64,
    pub station_id: Option<StationId>,
    pub takes_fleet_warp: bool,
    pub wing_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FleetInvitation {
    pub character_id: CharacterId,
    pub role: FleetRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squad_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wing_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FleetMovement {
    pub role: FleetRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squad_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wing_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FleetWing {
    pub id: i64,
    pub name: String,
    pub squads: Vec<FleetSquad>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FleetSquad {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedWing {
    pub wing_id: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedSquad {
    pub squad_id: i64,
}

#[derive(Serialize)]
struct NamingBody<'a> {
    name: &'a str,
}

impl EsiClient {
    /// `GET /characters/{character_id}/fleet/`: the fleet the character is in.
    ///
    /// Requires `esi-fleets.read_fleet.v1`.
    pub async fn get_character_fleet(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterFleet> {
        self.get_character_fleet_raw(character_id).await?.json()
    }

    pub async fn get_character_fleet_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/fleet/"), &Query::new())
            .await
    }

    /// `GET /fleets/{fleet_id}/`
    ///
    /// Requires `esi-fleets.read_fleet.v1`.
    pub async fn get_fleet(&self, fleet_id: i64) -> EsiResult<FleetInfo> {
        self.get_fleet_raw(fleet_id).await?.json()
    }

    pub async fn get_fleet_raw(&self, fleet_id: i64) -> EsiResult<EsiResponse> {
        self.get(&format!("/fleets/{fleet_id}/"), &Query::new()).await
    }

    /// `PUT /fleets/{fleet_id}/`
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn put_fleet(&self, fleet_id: i64, update: &FleetUpdate) -> EsiResult<()> {
        self.put_fleet_raw(fleet_id, update).await?;
        Ok(())
    }

    pub async fn put_fleet_raw(
        &self,
        fleet_id: i64,
        update: &FleetUpdate,
    ) -> EsiResult<EsiResponse> {
        self.put(&format!("/fleets/{fleet_id}/"), &Query::new(), update)
            .await
    }

    /// `GET /fleets/{fleet_id}/members/`
    ///
    /// Requires `esi-fleets.read_fleet.v1`.
    pub async fn get_fleet_members(&self, fleet_id: i64) -> EsiResult<Vec<FleetMember>> {
        self.get_fleet_members_raw(fleet_id).await?.json()
    }

    pub async fn get_fleet_members_raw(&self, fleet_id: i64) -> EsiResult<EsiResponse> {
        self.get(&format!("/fleets/{fleet_id}/members/"), &Query::new())
            .await
    }

    /// `POST /fleets/{fleet_id}/members/`: sends a fleet invitation.
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn post_fleet_member(
        &self,
        fleet_id: i64,
        invitation: &FleetInvitation,
    ) -> EsiResult<()> {
        self.post_fleet_member_raw(fleet_id, invitation).await?;
        Ok(())
    }

    pub async fn post_fleet_member_raw(
        &self,
        fleet_id: i64,
        invitation: &FleetInvitation,
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/fleets/{fleet_id}/members/"),
            &Query::new(),
            invitation,
        )
        .await
    }

    /// `DELETE /fleets/{fleet_id}/members/{member_id}/`: kicks a member.
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn delete_fleet_member(
        &self,
        fleet_id: i64,
        member_id: CharacterId,
    ) -> EsiResult<()> {
        self.delete_fleet_member_raw(fleet_id, member_id).await?;
        Ok(())
    }

    pub async fn delete_fleet_member_raw(
        &self,
        fleet_id: i64,
        member_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.delete(
            &format!("/fleets/{fleet_id}/members/{member_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `PUT /fleets/{fleet_id}/members/{member_id}/`: moves a member.
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn put_fleet_member(
        &self,
        fleet_id: i64,
        member_id: CharacterId,
        movement: &FleetMovement,
    ) -> EsiResult<()> {
        self.put_fleet_member_raw(fleet_id, member_id, movement)
            .await?;
        Ok(())
    }

    pub async fn put_fleet_member_raw(
        &self,
        fleet_id: i64,
        member_id: CharacterId,
        movement: &FleetMovement,
    ) -> EsiResult<EsiResponse> {
        self.put(
            &format!("/fleets/{fleet_id}/members/{member_id}/"),
            &Query::new(),
            movement,
        )
        .await
    }

    /// `GET /fleets/{fleet_id}/wings/`
    ///
    /// Requires `esi-fleets.read_fleet.v1`.
    pub async fn get_fleet_wings(&self, fleet_id: i64) -> EsiResult<Vec<FleetWing>> {
        self.get_fleet_wings_raw(fleet_id).await?.json()
    }

    pub async fn get_fleet_wings_raw(&self, fleet_id: i64) -> EsiResult<EsiResponse> {
        self.get(&format!("/fleets/{fleet_id}/wings/"), &Query::new())
            .await
    }

    /// `POST /fleets/{fleet_id}/wings/`
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn post_fleet_wing(&self, fleet_id: i64) -> EsiResult<CreatedWing> {
        self.post_fleet_wing_raw(fleet_id).await?.json()
    }

    pub async fn post_fleet_wing_raw(&self, fleet_id: i64) -> EsiResult<EsiResponse> {
        self.post_empty(&format!("/fleets/{fleet_id}/wings/"), &Query::new())
            .await
    }

    /// `DELETE /fleets/{fleet_id}/wings/{wing_id}/`
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn delete_fleet_wing(&self, fleet_id: i64, wing_id: i64) -> EsiResult<()> {
        self.delete_fleet_wing_raw(fleet_id, wing_id).await?;
        Ok(())
    }

    pub async fn delete_fleet_wing_raw(
        &self,
        fleet_id: i64,
        wing_id: i64,
    ) -> EsiResult<EsiResponse> {
        self.delete(
            &format!("/fleets/{fleet_id}/wings/{wing_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `PUT /fleets/{fleet_id}/wings/{wing_id}/`: renames a wing.
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn put_fleet_wing(&self, fleet_id: i64, wing_id: i64, name: &str) -> EsiResult<()> {
        self.put_fleet_wing_raw(fleet_id, wing_id, name).await?;
        Ok(())
    }

    pub async fn put_fleet_wing_raw(
        &self,
        fleet_id: i64,
        wing_id: i64,
        name: &str,
    ) -> EsiResult<EsiResponse> {
        self.put(
            &format!("/fleets/{fleet_id}/wings/{wing_id}/"),
            &Query::new(),
            &NamingBody { name },
        )
        .await
    }

    /// `POST /fleets/{fleet_id}/wings/{wing_id}/squads/`
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn post_fleet_squad(&self, fleet_id: i64, wing_id: i64) -> EsiResult<CreatedSquad> {
        self.post_fleet_squad_raw(fleet_id, wing_id).await?.json()
    }

    pub async fn post_fleet_squad_raw(
        &self,
        fleet_id: i64,
        wing_id: i64,
    ) -> EsiResult<EsiResponse> {
        self.post_empty(
            &format!("/fleets/{fleet_id}/wings/{wing_id}/squads/"),
            &Query::new(),
        )
        .await
    }

    /// `DELETE /fleets/{fleet_id}/squads/{squad_id}/`
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn delete_fleet_squad(&self, fleet_id: i64, squad_id: i64) -> EsiResult<()> {
        self.delete_fleet_squad_raw(fleet_id, squad_id).await?;
        Ok(())
    }

    pub async fn delete_fleet_squad_raw(
        &self,
        fleet_id: i64,
        squad_id: i64,
    ) -> EsiResult<EsiResponse> {
        self.delete(
            &format!("/fleets/{fleet_id}/squads/{squad_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `PUT /fleets/{fleet_id}/squads/{squad_id}/`: renames a squad.
    ///
    /// Requires `esi-fleets.write_fleet.v1`.
    pub async fn put_fleet_squad(&self, fleet_id: i64, squad_id: i64, name: &str) -> EsiResult<()> {
        self.put_fleet_squad_raw(fleet_id, squad_id, name).await?;
        Ok(())
    }

    pub async fn put_fleet_squad_raw(
        &self,
        fleet_id: i64,
        squad_id: i64,
        name: &str,
    ) -> EsiResult<EsiResponse> {
        self.put(
            &format!("/fleets/{fleet_id}/squads/{squad_id}/"),
            &Query::new(),
            &NamingBody { name },
        )
        .await
    }
}
