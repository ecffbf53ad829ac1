use std::fmt;

use skyhook_core::SolarSystemId;

use crate::{EsiClient, EsiResponse, EsiResult, Query};

/// Route preference passed as `flag`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteFlag {
    #[default]
    Shortest,
    Secure,
    Insecure,
}

impl fmt::Display for RouteFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shortest => "shortest",
            Self::Secure => "secure",
            Self::Insecure => "insecure",
        })
    }
}

/// Optional constraints on a route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteOptions {
    pub avoid: Vec<SolarSystemId>,
    /// Extra connections as `[from, to]` pairs, such as wormholes.
    pub connections: Vec<[SolarSystemId; 2]>,
    pub flag: Option<RouteFlag>,
}

impl RouteOptions {
    fn query(&self) -> Query {
        let connections = self
            .connections
            .iter()
            .map(|[from, to]| format!("{from}|{to}"))
            .collect::<Vec<_>>();
        Query::new()
            .with_list("avoid", &self.avoid)
            .with_list("connections", &connections)
            .with_opt("flag", self.flag)
    }
}

impl EsiClient {
    /// `GET /route/{origin}/{destination}/`: solar systems along the route,
    /// both ends included.
    pub async fn get_route(
        &self,
        origin: SolarSystemId,
        destination: SolarSystemId,
        options: &RouteOptions,
    ) -> EsiResult<Vec<SolarSystemId>> {
        self.get_route_raw(origin, destination, options)
            .await?
            .json()
    }

    pub async fn get_route_raw(
        &self,
        origin: SolarSystemId,
        destination: SolarSystemId,
        options: &RouteOptions,
    ) -> EsiResult<EsiResponse> {
        self.get(
            &format!("/route/{origin}/{destination}/"),
            &options.query(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use skyhook_core::SolarSystemId;

    use super::{RouteFlag, RouteOptions};

    #[test]
    fn route_options_join_lists_and_pairs() {
        let options = RouteOptions {
            avoid: vec![SolarSystemId(30000142), SolarSystemId(30002187)],
            connections: vec![[SolarSystemId(30000001), SolarSystemId(30000002)]],
            flag: Some(RouteFlag::Secure),
        };

        let query = options.query();
        assert_eq!(query.get("avoid"), Some("30000142,30002187"));
        assert_eq!(query.get("connections"), Some("30000001|30000002"));
        assert_eq!(query.get("flag"), Some("secure"));
    }

    #[test]
    fn default_options_add_nothing() {
        assert!(RouteOptions::default().query().pairs().is_empty());
    }
}
