use serde::{Deserialize, Serialize};
use skyhook_core::{CharacterId, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FittingItem {
    pub flag: String,
    pub quantity: i32,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Fitting {
    pub description: String,
    pub fitting_id: i32,
    pub items: Vec<FittingItem>,
    pub name: String,
    pub ship_type_id: TypeId,
}

/// Body for saving a new fitting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFitting {
    pub description: String,
    pub items: Vec<FittingItem>,
    pub name: String,
    pub ship_type_id: TypeId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedFitting {
    pub fitting_id: i32,
}

impl EsiClient {
    /// `GET /characters/{character_id}/fittings/`
    ///
    /// Requires `esi-fittings.read_fittings.v1`.
    pub async fn get_character_fittings(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<Fitting>> {
        self.get_character_fittings_raw(character_id).await?.json()
    }

    pub async fn get_character_fittings_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/fittings/"),
            &Query::new(),
        )
        .await
    }

    /// `POST /characters/{character_id}/fittings/`
    ///
    /// Requires `esi-fittings.write_fittings.v1`.
    pub async fn post_character_fitting(
        &self,
        character_id: CharacterId,
        fitting: &NewFitting,
    ) -> EsiResult<CreatedFitting> {
        self.post_character_fitting_raw(character_id, fitting)
            .await?
            .json()
    }

    pub async fn post_character_fitting_raw(
        &self,
        character_id: CharacterId,
        fitting: &NewFitting,
    ) -> EsiResult<EsiResponse> {
        self.post(
            &format!("/characters/{character_id}/fittings/"),
            &Query::new(),
            fitting,
        )
        .await
    }

    /// `DELETE /characters/{character_id}/fittings/{fitting_id}/`
    ///
    /// Requires `esi-fittings.write_fittings.v1`.
    pub async fn delete_character_fitting(
        &self,
        character_id: CharacterId,
        fitting_id: i32,
    ) -> EsiResult<()> {
        self.delete_character_fitting_raw(character_id, fitting_id)
            .await?;
        Ok(())
    }

    pub async fn delete_character_fitting_raw(
        &self,
        character_id: CharacterId,
        fitting_id: i32,
    ) -> EsiResult<EsiResponse> {
        self.delete(
            &format!("/characters/{character_id}/fittings/{fitting_id}/"),
            &Query::new(),
        )
        .await
    }
}
