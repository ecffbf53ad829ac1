use chrono::NaiveDate;
use serde::Deserialize;
use skyhook_core::{CharacterId, CorporationId, SolarSystemId, Timestamp, TypeId};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IndustryJob {
    pub activity_id: i32,
    pub blueprint_id: i64,
    pub blueprint_location_id: i64,
    pub blueprint_type_id: TypeId,
    pub completed_character_id: Option<CharacterId>,
    pub completed_date: Option<Timestamp>,
    pub cost: Option<f64>,
    /// Seconds.
    pub duration: i32,
    pub end_date: Timestamp,
    pub facility_id: i64,
    pub installer_id: CharacterId,
    pub job_id: i32,
    pub licensed_runs: Option<i32>,
    pub output_location_id: i64,
    pub pause_date: Option<Timestamp>,
    pub probability: Option<f64>,
    pub product_type_id: Option<TypeId>,
    pub runs: i32,
    pub start_date: Timestamp,
    /// Character jobs report `station_id`, corporation jobs `location_id`.
    #[serde(alias = "location_id")]
    pub station_id: i64,
    pub status: String,
    pub successful_runs: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MiningLedgerEntry {
    pub date: NaiveDate,
    pub quantity: i64,
    pub solar_system_id: SolarSystemId,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MoonExtraction {
    pub chunk_arrival_time: Timestamp,
    pub extraction_start_time: Timestamp,
    pub moon_id: i32,
    pub natural_decay_time: Timestamp,
    pub structure_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MiningObserver {
    pub last_updated: NaiveDate,
    pub observer_id: i64,
    pub observer_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ObservedMining {
    pub character_id: CharacterId,
    pub last_updated: NaiveDate,
    pub quantity: i64,
    pub recorded_corporation_id: CorporationId,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IndustryFacility {
    pub facility_id: i64,
    pub owner_id: i32,
    pub region_id: i32,
    pub solar_system_id: SolarSystemId,
    pub tax: Option<f64>,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IndustrySystem {
    pub cost_indices: Vec<CostIndex>,
    pub solar_system_id: SolarSystemId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CostIndex {
    pub activity: String,
    pub cost_index: f64,
}

impl EsiClient {
    /// `GET /characters/{character_id}/industry/jobs/`
    ///
    /// Requires `esi-industry.read_character_jobs.v1`.
    pub async fn get_character_industry_jobs(
        &self,
        character_id: CharacterId,
        include_completed: Option<bool>,
    ) -> EsiResult<Vec<IndustryJob>> {
        self.get_character_industry_jobs_raw(character_id, include_completed)
            .await?
            .json()
    }

    pub async fn get_character_industry_jobs_raw(
        &self,
        character_id: CharacterId,
        include_completed: Option<bool>,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/characters/{character_id}/industry/jobs/"),
            &Query::new().with_opt("include_completed", include_completed),
        )
        .await
    }

    /// `GET /characters/{character_id}/mining/`: the last 30 days, every page.
    ///
    /// Requires `esi-industry.read_character_mining.v1`.
    pub async fn get_character_mining(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<MiningLedgerEntry>> {
        let responses = self.get_character_mining_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_mining_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/mining/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporation/{corporation_id}/mining/extractions/`, every page.
    ///
    /// Requires `esi-industry.read_corporation_mining.v1`.
    pub async fn get_corporation_mining_extractions(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<MoonExtraction>> {
        let responses = self
            .get_corporation_mining_extractions_raw(corporation_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_mining_extractions_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporation/{corporation_id}/mining/extractions/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporation/{corporation_id}/mining/observers/`, every page.
    ///
    /// Requires `esi-industry.read_corporation_mining.v1`.
    pub async fn get_corporation_mining_observers(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<MiningObserver>> {
        let responses = self
            .get_corporation_mining_observers_raw(corporation_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_mining_observers_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporation/{corporation_id}/mining/observers/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporation/{corporation_id}/mining/observers/{observer_id}/`, every page.
    ///
    /// Requires `esi-industry.read_corporation_mining.v1`.
    pub async fn get_corporation_mining_observer(
        &self,
        corporation_id: CorporationId,
        observer_id: i64,
    ) -> EsiResult<Vec<ObservedMining>> {
        let responses = self
            .get_corporation_mining_observer_raw(corporation_id, observer_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_mining_observer_raw(
        &self,
        corporation_id: CorporationId,
        observer_id: i64,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporation/{corporation_id}/mining/observers/{observer_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/industry/jobs/`, every page.
    ///
    /// Requires `esi-industry.read_corporation_jobs.v1`.
    pub async fn get_corporation_industry_jobs(
        &self,
        corporation_id: CorporationId,
        include_completed: Option<bool>,
    ) -> EsiResult<Vec<IndustryJob>> {
        let responses = self
            .get_corporation_industry_jobs_raw(corporation_id, include_completed)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_industry_jobs_raw(
        &self,
        corporation_id: CorporationId,
        include_completed: Option<bool>,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/industry/jobs/"),
            &Query::new().with_opt("include_completed", include_completed),
        )
        .await
    }

    /// `GET /industry/facilities/`
    pub async fn get_industry_facilities(&self) -> EsiResult<Vec<IndustryFacility>> {
        self.get_industry_facilities_raw().await?.json()
    }

    pub async fn get_industry_facilities_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/industry/facilities/", &Query::new()).await
    }

    /// `GET /industry/systems/`: cost indices per solar system.
    pub async fn get_industry_systems(&self) -> EsiResult<Vec<IndustrySystem>> {
        self.get_industry_systems_raw().await?.json()
    }

    pub async fn get_industry_systems_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/industry/systems/", &Query::new()).await
    }
}
