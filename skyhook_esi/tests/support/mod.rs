use skyhook_esi::{EsiClient, EsiClientBuilder, StaticAccessToken};
use url::Url;
use wiremock::MockServer;

pub const USER_AGENT: &str = "skyhook-tests/0.1 (ops@example.invalid)";

pub struct TestHarness {
    pub server: MockServer,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn builder(&self) -> EsiClientBuilder {
        let base_url = Url::parse(&self.server.uri()).expect("mock server url");
        EsiClient::builder(USER_AGENT).base_url(base_url)
    }

    pub fn client(&self) -> EsiClient {
        self.builder().build().expect("build client")
    }

    pub fn authed_client(&self, token: &str) -> EsiClient {
        self.builder()
            .token_source(StaticAccessToken::new(token))
            .build()
            .expect("build client")
    }
}
