use serde::Deserialize;
use skyhook_core::{ConstellationId, SolarSystemId};

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Incursion {
    pub constellation_id: ConstellationId,
    pub faction_id: i32,
    pub has_boss: bool,
    pub infested_solar_systems: Vec<SolarSystemId>,
    /// Between 0 and 1.
    pub influence: f64,
    pub staging_solar_system_id: SolarSystemId,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl EsiClient {
    /// `GET /incursions/`: every active incursion.
    pub async fn get_incursions(&self) -> EsiResult<Vec<Incursion>> {
        self.get_incursions_raw().await?.json()
    }

    pub async fn get_incursions_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/incursions/", &Query::new()).await
    }
}
