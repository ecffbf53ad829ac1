use serde::Deserialize;
use skyhook_core::{CharacterId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Clones {
    pub home_location: Option<HomeLocation>,
    pub jump_clones: Vec<JumpClone>,
    pub last_clone_jump_date: Option<Timestamp>,
    pub last_station_change_date: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HomeLocation {
    pub location_id: Option<i64>,
    pub location_type: Option<CloneLocationType>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JumpClone {
    pub implants: Vec<TypeId>,
    pub jump_clone_id: i32,
    pub location_id: i64,
    pub location_type: CloneLocationType,
    pub name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloneLocationType {
    Station,
    Structure,
}

impl EsiClient {
    /// `GET /characters/{character_id}/clones/`: home station and jump clones.
    ///
    /// Requires `esi-clones.read_clones.v1`.
    pub async fn get_character_clones(&self, character_id: CharacterId) -> EsiResult<Clones> {
        self.get_character_clones_raw(character_id).await?.json()
    }

    pub async fn get_character_clones_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/clones/"), &Query::new())
            .await
    }

    /// `GET /characters/{character_id}/implants/`: implants in the active clone.
    ///
    /// Requires `esi-clones.read_implants.v1`.
    pub async fn get_character_implants(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<TypeId>> {
        self.get_character_implants_raw(character_id).await?.json()
    }

    pub async fn get_character_implants_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/implants/"),
            &Query::new(),
        )
        .await
    }
}
