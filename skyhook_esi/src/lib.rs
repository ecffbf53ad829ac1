pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod pagination;
pub mod query;
pub mod response;
pub mod token_store;

pub use auth::{
    AccessTokenSource, Clock, StaticAccessToken, StoredAccessToken, StoredToken, SystemClock,
};
pub use client::{EsiClient, EsiClientBuilder};
pub use config::ClientConfig;
pub use errors::{EsiError, EsiResult, StatusError, StatusKind};
pub use query::Query;
pub use response::{EsiResponse, concat_responses, parse_response};
pub use skyhook_core::{
    AllianceId, CharacterId, ConstellationId, CorporationId, RegionId, SolarSystemId, StationId,
    StructureId, Timestamp, TypeId,
};
pub use token_store::{KeyringTokenStore, MemoryTokenStore, TokenStore};
