use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use skyhook_core::{
    CharacterId, CorporationId, RegionId, SolarSystemId, StructureId, Timestamp, TypeId,
};

use crate::{EsiClient, EsiResponse, EsiResult, Query, concat_responses};

/// Which side of the book to list for a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderType {
    Buy,
    Sell,
    #[default]
    All,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::All => "all",
        })
    }
}

/// An order owned by the authenticated character or corporation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OwnedOrder {
    pub duration: i32,
    pub escrow: Option<f64>,
    #[serde(default)]
    pub is_buy_order: bool,
    pub is_corporation: Option<bool>,
    pub issued: Timestamp,
    pub issued_by: Option<CharacterId>,
    pub location_id: i64,
    pub min_volume: Option<i32>,
    pub order_id: i64,
    pub price: f64,
    pub range: String,
    pub region_id: RegionId,
    /// Only present in order history.
    pub state: Option<String>,
    pub type_id: TypeId,
    pub volume_remain: i32,
    pub volume_total: i32,
    pub wallet_division: Option<i32>,
}

/// An order on a public region or structure market.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketOrder {
    pub duration: i32,
    pub is_buy_order: bool,
    pub issued: Timestamp,
    pub location_id: i64,
    pub min_volume: i32,
    pub order_id: i64,
    pub price: f64,
    pub range: String,
    pub system_id: Option<SolarSystemId>,
    pub type_id: TypeId,
    pub volume_remain: i32,
    pub volume_total: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketHistoryDay {
    pub average: f64,
    pub date: NaiveDate,
    pub highest: f64,
    pub lowest: f64,
    pub order_count: i64,
    pub volume: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MarketGroup {
    pub description: String,
    pub market_group_id: i32,
    pub name: String,
    pub parent_group_id: Option<i32>,
    pub types: Vec<TypeId>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketPrice {
    pub adjusted_price: Option<f64>,
    pub average_price: Option<f64>,
    pub type_id: TypeId,
}

impl EsiClient {
    /// `GET /characters/{character_id}/orders/`: open orders.
    ///
    /// Requires `esi-markets.read_character_orders.v1`.
    pub async fn get_character_orders(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<OwnedOrder>> {
        self.get_character_orders_raw(character_id).await?.json()
    }

    pub async fn get_character_orders_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<EsiResponse> {
        self.get(&format!("/characters/{character_id}/orders/"), &Query::new())
            .await
    }

    /// `GET /characters/{character_id}/orders/history/`: closed orders from
    /// the last 90 days, every page.
    ///
    /// Requires `esi-markets.read_character_orders.v1`.
    pub async fn get_character_order_history(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<OwnedOrder>> {
        let responses = self.get_character_order_history_raw(character_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_character_order_history_raw(
        &self,
        character_id: CharacterId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/characters/{character_id}/orders/history/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/orders/`, every page.
    ///
    /// Requires `esi-markets.read_corporation_orders.v1`.
    pub async fn get_corporation_orders(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<OwnedOrder>> {
        let responses = self.get_corporation_orders_raw(corporation_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_orders_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/orders/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /corporations/{corporation_id}/orders/history/`, every page.
    ///
    /// Requires `esi-markets.read_corporation_orders.v1`.
    pub async fn get_corporation_order_history(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<OwnedOrder>> {
        let responses = self
            .get_corporation_order_history_raw(corporation_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_corporation_order_history_raw(
        &self,
        corporation_id: CorporationId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/corporations/{corporation_id}/orders/history/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /markets/groups/`: every market group id.
    pub async fn get_market_groups(&self) -> EsiResult<Vec<i32>> {
        self.get_market_groups_raw().await?.json()
    }

    pub async fn get_market_groups_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/markets/groups/", &Query::new()).await
    }

    /// `GET /markets/groups/{market_group_id}/`
    pub async fn get_market_group(&self, market_group_id: i32) -> EsiResult<MarketGroup> {
        self.get_market_group_raw(market_group_id).await?.json()
    }

    pub async fn get_market_group_raw(&self, market_group_id: i32) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/markets/groups/{market_group_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /markets/prices/`: adjusted and average prices for every type.
    pub async fn get_market_prices(&self) -> EsiResult<Vec<MarketPrice>> {
        self.get_market_prices_raw().await?.json()
    }

    pub async fn get_market_prices_raw(&self) -> EsiResult<EsiResponse> {
        self.get("/markets/prices/", &Query::new()).await
    }

    /// `GET /markets/structures/{structure_id}/`, every page.
    ///
    /// Requires `esi-markets.structure_markets.v1`.
    pub async fn get_structure_orders(
        &self,
        structure_id: StructureId,
    ) -> EsiResult<Vec<MarketOrder>> {
        let responses = self.get_structure_orders_raw(structure_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_structure_orders_raw(
        &self,
        structure_id: StructureId,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/markets/structures/{structure_id}/"),
            &Query::new(),
        )
        .await
    }

    /// `GET /markets/{region_id}/history/`: daily aggregates for one type.
    pub async fn get_market_history(
        &self,
        region_id: RegionId,
        type_id: TypeId,
    ) -> EsiResult<Vec<MarketHistoryDay>> {
        self.get_market_history_raw(region_id, type_id)
            .await?
            .json()
    }

    pub async fn get_market_history_raw(
        &self,
        region_id: RegionId,
        type_id: TypeId,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/markets/{region_id}/history/"),
            &Query::new().with("type_id", type_id),
        )
        .await
    }

    /// `GET /markets/{region_id}/orders/`, every page.
    pub async fn get_market_orders(
        &self,
        region_id: RegionId,
        order_type: OrderType,
        type_id: Option<TypeId>,
    ) -> EsiResult<Vec<MarketOrder>> {
        let responses = self
            .get_market_orders_raw(region_id, order_type, type_id)
            .await?;
        concat_responses(&responses)
    }

    pub async fn get_market_orders_raw(
        &self,
        region_id: RegionId,
        order_type: OrderType,
        type_id: Option<TypeId>,
    ) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(
            &format!("/markets/{region_id}/orders/"),
            &Query::new()
                .with("order_type", order_type)
                .with_opt("type_id", type_id),
        )
        .await
    }

    /// `GET /markets/{region_id}/types/`: types with active orders, every page.
    pub async fn get_market_types(&self, region_id: RegionId) -> EsiResult<Vec<TypeId>> {
        let responses = self.get_market_types_raw(region_id).await?;
        concat_responses(&responses)
    }

    pub async fn get_market_types_raw(&self, region_id: RegionId) -> EsiResult<Vec<EsiResponse>> {
        self.get_paginated(&format!("/markets/{region_id}/types/"), &Query::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::OrderType;

    #[test]
    fn order_type_renders_query_values() {
        assert_eq!(OrderType::Buy.to_string(), "buy");
        assert_eq!(OrderType::Sell.to_string(), "sell");
        assert_eq!(OrderType::default().to_string(), "all");
    }
}
