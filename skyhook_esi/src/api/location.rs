use serde::Deserialize;
use skyhook_core::{CharacterId, SolarSystemId, StationId, StructureId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

/// Where a character is. Docked characters also carry a station or structure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterLocation {
    pub solar_system_id: SolarSystemId,
    pub station_id: Option<StationId>,
    pub structure_id: Option<StructureId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterOnline {
    pub last_login: Option<Timestamp>,
    pub last_logout: Option<Timestamp>,
    pub logins: Option<i32>,
    pub online: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterShip {
    pub ship_item_id: i64,
    pub ship_name: String,
    pub ship_type_id: TypeId,
}

impl EsiClient {
    /// `GET /characters/{character_id}/location/`
    ///
    /// Requires `esi-location.read_location.v1`.
    pub async fn get_character_location(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterLocation> {
        self.get_character_location_raw(character_id).await?.json()
    }

    pub async fn get_character_location_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/location/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /characters/{character_id}/online/`
    ///
    /// Requires `esi-location.read_online.v1`.
    pub async fn get_character_online(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<CharacterOnline> {
        self.get_character_online_raw(character_id).await?.json()
    }

    pub async fn get_character_online_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/online/"), &Query::new())
            .await
    }

    /// `GET /characters/{character_id}/ship/`
    ///
    /// Requires `esi-location.read_ship_type.v1`.
    pub async fn get_character_ship(&self, character_id: CharacterId) -> EsiResult<CharacterShip> {
        self.get_character_ship_raw(character_id).await?.json()
    }

    pub async fn get_character_ship_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/ship/"), &Query::new())
            .await
    }
}
