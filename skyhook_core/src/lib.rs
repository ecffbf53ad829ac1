pub mod ids;
pub mod time;

pub use ids::{
    AllianceId, CharacterId, ConstellationId, CorporationId, RegionId, SolarSystemId, StationId,
    StructureId, TypeId,
};
pub use time::Timestamp;
