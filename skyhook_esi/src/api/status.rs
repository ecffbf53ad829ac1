use serde::Deserialize;
use skyhook_core::Timestamp;

use crate::{EsiClient, EsiResponse, EsiResult, Query};

/// Tranquility (or Singularity) server state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServerStatus {
    pub players: i32,
    pub server_version: String,
    pub start_time: Timestamp,
    /// Set while the cluster is starting up or in VIP mode.
    pub vip: Option<bool>,
}

impl EsiClient {
    /// `GET /status/`
    pub async fn get_status(&self) -> EsiResult<ServerStatus> {
        self.get_status_raw().await?.json()
    }

    pub async fn get_status_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/status/", &Query::new()).await
    }
}
