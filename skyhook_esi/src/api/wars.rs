use serde::Deserialize;
use skyhook_core::{AllianceId, CorporationId, Timestamp};

use super::killmails::KillmailRef;
use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct War {
    pub aggressor: WarParty,
    #[serde(default)]
    pub allies: Vec<WarAlly>,
    pub declared: Timestamp,
    pub defender: WarParty,
    pub finished: Option<Timestamp>,
    pub id: i32,
    pub mutual: bool,
    pub open_for_allies: bool,
    pub retracted: Option<Timestamp>,
    pub started: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WarParty {
    pub alliance_id: Option<AllianceId>,
    pub corporation_id: Option<CorporationId>,
    pub isk_destroyed: f64,
    pub ships_killed: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WarAlly {
    pub alliance_id: Option<AllianceId>,
    pub corporation_id: Option<CorporationId>,
}

impl EsiClient {
    /// `GET /wars/`: up to 2000 war ids, below `max_war_id` when given.
    pub async fn get_wars(&self, max_war_id: Option<i32>) -> EsiResult<Vec<i32>> {
        self.get_wars_raw(max_war_id).await?.json()
    }

    pub async fn get_wars_raw(&self, max_war_id: Option<i32>) -> EsiResult<EsiResponse> {
        self.get("/wars/", &Query::new().with_opt("max_war_id", max_war_id))
            .await
    }

    /// `GET /wars/{war_id}/`
    pub async fn get_war(&self, war_id: i32) -> EsiResult<War> {
        self.get_war_raw(war_id).await?.json()
    }

    pub async fn get_war_raw(&self, war_id: i32) -> EsiResult<EsiResponse> {
        self.get(&format!("/wars/{war_id}/"), &Query::new()).await
    }

    /// `GET /wars/{war_id}/killmails/`, every page.
    pub async fn get_war_killmails(&self, war_id: i32) -> EsiResult<Vec<KillmailRef>> {
        let responses = self.get_war_killmails_raw(war_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_war_killmails_raw(&self, war_id: i32) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(&format!("/wars/{war_id}/killmails/"), &Query::new())
            .await
    }
}
