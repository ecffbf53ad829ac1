use serde_json::json;
use skyhook_esi::{
    CharacterId, Clock, EsiError, MemoryTokenStore, Query, SolarSystemId, StatusKind,
    StoredAccessToken, StoredToken, Timestamp, TypeId,
    api::{
        contacts::ContactEdit,
        routes::{RouteFlag, RouteOptions},
    },
};
use wiremock::{
    Match, Mock, Request, ResponseTemplate,
    matchers::{
        body_json, header, method, path, path_regex, query_param, query_param_is_missing,
    },
};

mod support;

use support::{TestHarness, USER_AGENT};

#[tokio::test]
async fn every_request_carries_datasource_and_user_agent() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/status/"))
        .and(query_param("datasource", "tranquility"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "players": 23_104,
            "server_version": "2_745_122",
            "start_time": "2026-10-18T11:05:41Z"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let status = h.client().get_status().await.expect("status");
    assert_eq!(status.players, 23_104);
    assert_eq!(status.server_version, "2_745_122");
    assert_eq!(status.vip, None);
}

#[tokio::test]
async fn configured_datasource_and_language_are_forwarded() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/insurance/prices/"))
        .and(query_param("datasource", "singularity"))
        .and(query_param("language", "de"))
        .and(header("accept-language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&h.server)
        .await;

    let client = h
        .builder()
        .datasource("singularity")
        .language("de")
        .build()
        .expect("build client");

    let prices = client.get_insurance_prices().await.expect("prices");
    assert!(prices.is_empty());
}

#[tokio::test]
async fn token_source_adds_bearer_header() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/90000001/wallet/"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1250000.55"))
        .expect(1)
        .mount(&h.server)
        .await;

    let balance = h
        .authed_client("test-token")
        .get_character_wallet(CharacterId(90000001))
        .await
        .expect("wallet");
    assert_eq!(balance, 1_250_000.55);
}

#[tokio::test]
async fn unset_optionals_are_left_out_of_the_query() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/wars/"))
        .and(query_param_is_missing("max_war_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([745_111, 745_110])))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wars/"))
        .and(query_param("max_war_id", "700000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([699_999])))
        .expect(1)
        .mount(&h.server)
        .await;

    let client = h.client();
    assert_eq!(
        client.get_wars(None).await.expect("wars"),
        vec![745_111, 745_110]
    );
    assert_eq!(
        client.get_wars(Some(700_000)).await.expect("wars"),
        vec![699_999]
    );
}

#[tokio::test]
async fn list_parameters_are_comma_joined() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/route/30000142/30002187/"))
        .and(query_param("avoid", "30002053,30002058"))
        .and(query_param("flag", "secure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            30000142, 30000144, 30002187
        ])))
        .expect(1)
        .mount(&h.server)
        .await;

    let options = RouteOptions {
        avoid: vec![SolarSystemId(30002053), SolarSystemId(30002058)],
        connections: Vec::new(),
        flag: Some(RouteFlag::Secure),
    };
    let route = h
        .client()
        .get_route(SolarSystemId(30000142), SolarSystemId(30002187), &options)
        .await
        .expect("route");

    assert_eq!(route.first(), Some(&SolarSystemId(30000142)));
    assert_eq!(route.last(), Some(&SolarSystemId(30002187)));
}

#[tokio::test]
async fn post_sends_json_payload_and_query() {
    let h = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/characters/90000001/contacts/"))
        .and(query_param("standing", "5"))
        .and(query_param("watched", "true"))
        .and(body_json(json!([2112625428, 95465499])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([2112625428, 95465499])))
        .expect(1)
        .mount(&h.server)
        .await;

    let edit = ContactEdit {
        label_ids: Vec::new(),
        watched: Some(true),
    };
    let created = h
        .authed_client("test-token")
        .post_character_contacts(CharacterId(90000001), &[2112625428, 95465499], 5.0, &edit)
        .await
        .expect("add contacts");
    assert_eq!(created, vec![2112625428, 95465499]);
}

#[tokio::test]
async fn no_content_responses_decode_to_unit() {
    let h = TestHarness::new().await;
    Mock::given(method("DELETE"))
        .and(path("/characters/90000001/contacts/"))
        .and(query_param("contact_ids", "2112625428"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ui/openwindow/marketdetails/"))
        .and(query_param("type_id", "34"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;

    let client = h.authed_client("test-token");
    client
        .delete_character_contacts(CharacterId(90000001), &[2112625428])
        .await
        .expect("delete contacts");
    client
        .post_open_market_details_window(TypeId(34))
        .await
        .expect("open market window");
}

#[tokio::test]
async fn raw_variant_exposes_status_headers_and_body() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/universe/types/34/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("expires", "Sun, 18 Oct 2026 12:00:00 GMT")
                .insert_header("etag", "\"abc123\"")
                .set_body_json(json!({
                    "description": "The main building block in space structures.",
                    "group_id": 18,
                    "name": "Tritanium",
                    "published": true,
                    "type_id": 34,
                    "volume": 0.01
                })),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let response = h.client().get_type_raw(TypeId(34)).await.expect("raw type");
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.etag(), Some("\"abc123\""));
    assert!(response.expires().is_some());

    let body: serde_json::Value = response.json().expect("json body");
    assert_eq!(body["name"], "Tritanium");
}

#[tokio::test]
async fn error_bodies_map_to_status_errors() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/1/"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-esi-error-limit-remain", "99")
                .insert_header("x-esi-error-limit-reset", "41")
                .set_body_json(json!({"error": "Character not found"})),
        )
        .mount(&h.server)
        .await;

    let err = h
        .client()
        .get_character(CharacterId(1))
        .await
        .expect_err("missing character");
    let status = err.status().expect("status error");
    assert_eq!(status.kind, StatusKind::NotFound);
    assert_eq!(status.status, 404);
    assert_eq!(status.message, "Character not found");
    assert_eq!(status.error_limit_remain, Some(99));
    assert_eq!(status.error_limit_reset, Some(41));
    assert_eq!(err.to_string(), "not found (404): Character not found");
}

#[tokio::test]
async fn error_limited_and_server_errors_keep_their_kind() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/alliances/"))
        .respond_with(ResponseTemplate::new(420).set_body_json(json!({
            "error": "This software has exceeded the error limit for ESI."
        })))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/incursions/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&h.server)
        .await;

    let client = h.client();

    let limited = client.get_alliances().await.expect_err("error limited");
    assert_eq!(
        limited.status().map(|status| status.kind),
        Some(StatusKind::ErrorLimited)
    );

    let unavailable = client.get_incursions().await.expect_err("unavailable");
    let status = unavailable.status().expect("status error");
    assert_eq!(status.kind, StatusKind::ServiceUnavailable);
    assert!(status.kind.is_server_error());
    assert_eq!(status.message, "Service Unavailable");
}

#[tokio::test]
async fn mismatched_body_is_a_decode_error() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"players": "lots"})))
        .mount(&h.server)
        .await;

    let err = h.client().get_status().await.expect_err("bad body");
    assert!(matches!(err, EsiError::Decode(_)));
}

/// Matches when `name` appears exactly once in the query string.
struct SingleParam(&'static str);

impl Match for SingleParam {
    fn matches(&self, request: &Request) -> bool {
        request
            .url
            .query_pairs()
            .filter(|(name, _)| name == self.0)
            .count()
            == 1
    }
}

#[tokio::test]
async fn caller_datasource_replaces_the_configured_one() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/status/"))
        .and(query_param("datasource", "singularity"))
        .and(SingleParam("datasource"))
        .and(query_param("language", "fr"))
        .and(SingleParam("language"))
        .and(header("accept-language", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "players": 12,
            "server_version": "2_745_122",
            "start_time": "2026-10-18T11:05:41Z"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let client = h.builder().language("de").build().expect("build client");
    let query = Query::new()
        .with("datasource", "singularity")
        .with("language", "fr");
    let response = client.get("/status/", &query).await.expect("status");
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn killmail_hash_cannot_redirect_the_request() {
    let h = TestHarness::new().await;
    Mock::given(path_regex(".*"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1000.0"))
        .expect(0)
        .mount(&h.server)
        .await;

    let client = h.authed_client("secret");
    for hash in ["../../characters/1/wallet", "%2e%2e", "abc?x=1", ""] {
        let err = client
            .get_killmail_raw(1, hash)
            .await
            .expect_err("hash must be rejected");
        assert!(matches!(err, EsiError::InvalidPath(_)), "{hash}: {err:?}");
    }

    let err = client
        .get("/killmails/1/../../characters/1/wallet/", &Query::new())
        .await
        .expect_err("dot segments must be rejected");
    assert!(matches!(err, EsiError::InvalidPath(_)));
}

#[derive(Clone, Copy)]
struct FixedClock(i64);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_epoch_secs(self.0).expect("valid epoch seconds")
    }
}

async fn mount_untouchable_wallet(h: &TestHarness) {
    Mock::given(method("GET"))
        .and(path("/characters/90000001/wallet/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1.0"))
        .expect(0)
        .mount(&h.server)
        .await;
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let h = TestHarness::new().await;
    mount_untouchable_wallet(&h).await;

    let source = StoredAccessToken::with_clock(
        MemoryTokenStore::new(),
        CharacterId(90000001),
        FixedClock(1_900_000_000),
    );
    let client = h.builder().token_source(source).build().expect("client");

    let err = client
        .get_character_wallet(CharacterId(90000001))
        .await
        .expect_err("no token");
    assert!(matches!(
        err,
        EsiError::MissingToken {
            character_id: CharacterId(90000001)
        }
    ));
}

#[tokio::test]
async fn expired_token_fails_before_any_request() {
    let h = TestHarness::new().await;
    mount_untouchable_wallet(&h).await;

    let stamp = |secs| Timestamp::from_epoch_secs(secs).expect("valid epoch seconds");
    let store = MemoryTokenStore::with_token(StoredToken {
        character_id: CharacterId(90000001),
        character_name: None,
        scopes: vec!["esi-wallet.read_character_wallet.v1".to_string()],
        access_token: "stale".to_string(),
        access_expires_at: stamp(1_900_000_010),
        updated_at: stamp(1_899_998_800),
    });
    let source =
        StoredAccessToken::with_clock(store, CharacterId(90000001), FixedClock(1_900_000_000));
    let client = h.builder().token_source(source).build().expect("client");

    let err = client
        .get_character_wallet(CharacterId(90000001))
        .await
        .expect_err("token inside expiry skew");
    assert!(matches!(err, EsiError::TokenExpired { .. }));
}
