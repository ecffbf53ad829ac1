use serde::Deserialize;
use skyhook_core::TypeId;

use crate::{EsiClient, EsiResponse, EsiResult, Query};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InsurancePrice {
    pub levels: Vec<InsuranceLevel>,
    pub type_id: TypeId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InsuranceLevel {
    pub cost: f64,
    pub name: String,
    pub payout: f64,
}

impl EsiClient {
    /// `GET /insurance/prices/`: insurance levels for every ship type.
    ///
    /// Level names are localized through the client's language.
    pub async fn get_insurance_prices(&self) -> EsiResult<Vec<InsurancePrice>> {
        self.get_insurance_prices_raw().await?.json()
    }

    pub async fn get_insurance_prices_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/insurance/prices/", &Query::new()).await
    }
}
