use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! esi_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}

esi_id!(CharacterId(i32));
esi_id!(CorporationId(i32));
esi_id!(AllianceId(i32));
esi_id!(SolarSystemId(i32));
esi_id!(ConstellationId(i32));
esi_id!(RegionId(i32));
esi_id!(TypeId(i32));
esi_id!(StationId(i32));
esi_id!(
    /// Upwell structure id. These exceed the 32-bit range used by NPC stations.
    StructureId(i64)
);

#[cfg(test)]
mod tests {
    use super::{CharacterId, StructureId};

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let raw = serde_json::to_string(&CharacterId(2_112_625_428)).expect("serialize");
        assert_eq!(raw, "2112625428");

        let parsed: StructureId = serde_json::from_str("1035466617946").expect("deserialize");
        assert_eq!(parsed, StructureId(1_035_466_617_946));
    }

    #[test]
    fn ids_display_their_inner_value() {
        assert_eq!(CharacterId(90_000_001).to_string(), "90000001");
    }
}
