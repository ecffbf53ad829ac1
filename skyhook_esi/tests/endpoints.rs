use serde_json::json;
use skyhook_esi::{
    CharacterId, CorporationId, RegionId, SolarSystemId, StationId, StructureId, TypeId,
    api::{
        assets::AssetLocationType,
        calendar::EventResponse,
        character::Gender,
        clones::CloneLocationType,
        contracts::ContractType,
        fittings::{FittingItem, NewFitting},
        fleets::{FleetRole, FleetUpdate},
        mail::{MailRecipient, NewMail, RecipientType},
        search::SearchCategory,
    },
};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

mod support;

use support::TestHarness;

const PILOT: CharacterId = CharacterId(2112625428);

#[tokio::test]
async fn character_sheet_decodes() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "birthday": "2015-03-24T11:37:00Z",
            "bloodline_id": 3,
            "corporation_id": 109299958,
            "description": "",
            "gender": "male",
            "name": "Test Pilot",
            "race_id": 2,
            "security_status": -1.25
        })))
        .mount(&h.server)
        .await;

    let sheet = h.client().get_character(PILOT).await.expect("character");
    assert_eq!(sheet.name, "Test Pilot");
    assert_eq!(sheet.gender, Gender::Male);
    assert_eq!(sheet.corporation_id, CorporationId(109299958));
    assert_eq!(sheet.alliance_id, None);
    assert_eq!(sheet.birthday.as_epoch_secs(), 1_427_197_020);
}

#[tokio::test]
async fn character_assets_span_pages() {
    let h = TestHarness::new().await;
    let asset = |item_id: i64, type_id: i32| {
        json!({
            "is_singleton": false,
            "item_id": item_id,
            "location_flag": "Hangar",
            "location_id": 60003760,
            "location_type": "station",
            "quantity": 10,
            "type_id": type_id
        })
    };
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/assets/"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-pages", "2")
                .set_body_json(json!([asset(3, 36)])),
        )
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/assets/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-pages", "2")
                .set_body_json(json!([asset(1, 34), asset(2, 35)])),
        )
        .mount(&h.server)
        .await;

    let assets = h
        .authed_client("test-token")
        .get_character_assets(PILOT)
        .await
        .expect("assets");
    let type_ids: Vec<TypeId> = assets.iter().map(|asset| asset.type_id).collect();
    assert_eq!(type_ids, vec![TypeId(34), TypeId(35), TypeId(36)]);
    assert!(
        assets
            .iter()
            .all(|asset| asset.location_type == AssetLocationType::Station)
    );
}

#[tokio::test]
async fn killmail_items_nest() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/killmails/81234567/0f1e2d3c/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attackers": [{
                "character_id": 95465499,
                "corporation_id": 98000001,
                "damage_done": 4120,
                "final_blow": true,
                "security_status": 5.0,
                "ship_type_id": 17738,
                "weapon_type_id": 2929
            }],
            "killmail_id": 81234567,
            "killmail_time": "2026-10-17T21:14:02Z",
            "solar_system_id": 30002187,
            "victim": {
                "character_id": 2112625428,
                "corporation_id": 109299958,
                "damage_taken": 4120,
                "items": [{
                    "flag": 5,
                    "item_type_id": 3467,
                    "items": [{
                        "flag": 5,
                        "item_type_id": 34,
                        "quantity_dropped": 1000,
                        "singleton": 0
                    }],
                    "quantity_destroyed": 1,
                    "singleton": 0
                }],
                "position": {"x": 1.0, "y": -2.5, "z": 3.25},
                "ship_type_id": 670
            }
        })))
        .mount(&h.server)
        .await;

    let killmail = h
        .client()
        .get_killmail(81234567, "0f1e2d3c")
        .await
        .expect("killmail");
    assert_eq!(killmail.solar_system_id, SolarSystemId(30002187));
    assert_eq!(killmail.victim.items[0].items[0].quantity_dropped, Some(1000));
    assert!(killmail.attackers[0].final_blow);
    assert_eq!(killmail.victim.position.map(|position| position.z), Some(3.25));
}

#[tokio::test]
async fn universe_ids_posts_names() {
    let h = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/universe/ids/"))
        .and(body_json(json!(["Jita", "Tritanium"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_types": [{"id": 34, "name": "Tritanium"}],
            "systems": [{"id": 30000142, "name": "Jita"}]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let resolved = h
        .client()
        .post_universe_ids(&["Jita".to_string(), "Tritanium".to_string()])
        .await
        .expect("ids");
    assert_eq!(resolved.system("Jita"), Some(SolarSystemId(30000142)));
    assert_eq!(resolved.inventory_type("Tritanium"), Some(TypeId(34)));
    assert!(resolved.characters.is_empty());
}

#[tokio::test]
async fn search_joins_categories() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/search/"))
        .and(query_param("categories", "solar_system,structure"))
        .and(query_param("search", "Jita"))
        .and(query_param("strict", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solar_system": [30000142],
            "structure": [1035466617946_i64]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let results = h
        .authed_client("test-token")
        .search(
            PILOT,
            &[SearchCategory::SolarSystem, SearchCategory::Structure],
            "Jita",
            Some(false),
        )
        .await
        .expect("search");
    assert_eq!(results.solar_system, vec![SolarSystemId(30000142)]);
    assert_eq!(results.structure, vec![StructureId(1035466617946)]);
    assert!(results.character.is_empty());
}

#[tokio::test]
async fn corporation_starbase_requires_system() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/corporations/98000001/starbases/1000000012345/"))
        .and(query_param("system_id", "30000142"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "allow_alliance_members": true,
            "allow_corporation_members": true,
            "anchor": "config_starbase_equipment_role",
            "attack_if_at_war": true,
            "attack_if_other_security_status_dropping": false,
            "fuel_bay_take": "config_starbase_equipment_role",
            "fuel_bay_view": "starbase_fuel_technician_role",
            "offline": "config_starbase_equipment_role",
            "online": "config_starbase_equipment_role",
            "unanchor": "config_starbase_equipment_role",
            "use_alliance_standings": true
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let starbase = h
        .authed_client("test-token")
        .get_corporation_starbase(
            CorporationId(98000001),
            1_000_000_012_345,
            SolarSystemId(30000142),
        )
        .await
        .expect("starbase");
    assert!(starbase.fuels.is_empty());
    assert_eq!(starbase.attack_standing_threshold, None);
}

#[tokio::test]
async fn corporation_jobs_read_location_as_station() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/corporations/98000001/industry/jobs/"))
        .and(query_param("include_completed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "activity_id": 1,
            "blueprint_id": 1_015_116_533_326_i64,
            "blueprint_location_id": 60006382,
            "blueprint_type_id": 2047,
            "duration": 548,
            "end_date": "2026-10-18T15:00:00Z",
            "facility_id": 60006382,
            "installer_id": 2112625428,
            "job_id": 229136101,
            "location_id": 60006382,
            "output_location_id": 60006382,
            "runs": 1,
            "start_date": "2026-10-18T14:50:52Z",
            "status": "active"
        }])))
        .mount(&h.server)
        .await;

    let jobs = h
        .authed_client("test-token")
        .get_corporation_industry_jobs(CorporationId(98000001), Some(true))
        .await
        .expect("jobs");
    assert_eq!(jobs[0].station_id, 60006382);
    assert_eq!(jobs[0].installer_id, PILOT);
}

#[tokio::test]
async fn calendar_response_is_sent_as_body() {
    let h = TestHarness::new().await;
    Mock::given(method("PUT"))
        .and(path("/characters/2112625428/calendar/1234/"))
        .and(body_json(json!({"response": "tentative"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;

    h.authed_client("test-token")
        .put_character_calendar_event(PILOT, 1234, EventResponse::Tentative)
        .await
        .expect("respond");
}

#[tokio::test]
async fn fleet_update_skips_unset_fields() {
    let h = TestHarness::new().await;
    Mock::given(method("PUT"))
        .and(path("/fleets/1234567890/"))
        .and(body_json(json!({"motd": "Form up in Jita"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/fleet/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fleet_id": 1234567890,
            "role": "fleet_commander",
            "squad_id": -1,
            "wing_id": -1
        })))
        .mount(&h.server)
        .await;

    let client = h.authed_client("test-token");
    let fleet = client.get_character_fleet(PILOT).await.expect("fleet");
    assert_eq!(fleet.role, FleetRole::FleetCommander);

    let update = FleetUpdate {
        motd: Some("Form up in Jita".to_string()),
        ..FleetUpdate::default()
    };
    client
        .put_fleet(fleet.fleet_id, &update)
        .await
        .expect("update fleet");
}

#[tokio::test]
async fn sending_mail_returns_the_new_id() {
    let h = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/characters/2112625428/mail/"))
        .and(body_json(json!({
            "body": "o7",
            "recipients": [{"recipient_id": 95465499, "recipient_type": "character"}],
            "subject": "Hello"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("371234567"))
        .expect(1)
        .mount(&h.server)
        .await;

    let mail = NewMail {
        approved_cost: None,
        body: "o7".to_string(),
        recipients: vec![MailRecipient {
            recipient_id: 95465499,
            recipient_type: RecipientType::Character,
        }],
        subject: "Hello".to_string(),
    };
    let mail_id = h
        .authed_client("test-token")
        .post_character_mail(PILOT, &mail)
        .await
        .expect("send mail");
    assert_eq!(mail_id, 371_234_567);
}

#[tokio::test]
async fn fw_leaderboards_normalize_entity_ids() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/fw/leaderboards/characters/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kills": {
                "active_total": [{"amount": 10, "character_id": 2112625428}],
                "last_week": [],
                "yesterday": []
            },
            "victory_points": {
                "active_total": [],
                "last_week": [{"amount": 500, "character_id": 95465499}],
                "yesterday": []
            }
        })))
        .mount(&h.server)
        .await;

    let board = h
        .client()
        .get_fw_character_leaderboards()
        .await
        .expect("leaderboard");
    assert_eq!(board.kills.active_total[0].id, Some(2112625428));
    assert_eq!(board.victory_points.last_week[0].amount, Some(500));
}

#[tokio::test]
async fn bookmarks_keep_coordinates_and_items() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/bookmarks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "bookmark_id": 41_882_110,
                "coordinates": {"x": -1.2e12, "y": 4.5e10, "z": 7.75e11},
                "created": "2026-09-30T19:02:11Z",
                "creator_id": 2112625428,
                "folder_id": 5,
                "label": "Safe spot",
                "location_id": 30000142,
                "notes": ""
            },
            {
                "bookmark_id": 41_882_111,
                "created": "2026-10-01T07:45:00Z",
                "creator_id": 2112625428,
                "item": {"item_id": 1_035_466_617_946_i64, "type_id": 35832},
                "label": "Home citadel",
                "location_id": 30000142,
                "notes": "dock here"
            }
        ])))
        .mount(&h.server)
        .await;

    let bookmarks = h
        .authed_client("test-token")
        .get_character_bookmarks(PILOT)
        .await
        .expect("bookmarks");
    assert_eq!(bookmarks.len(), 2);
    assert_eq!(bookmarks[0].coordinates.map(|at| at.x), Some(-1.2e12));
    assert_eq!(bookmarks[0].item, None);
    let item = bookmarks[1].item.expect("item bookmark");
    assert_eq!(item.item_id, 1_035_466_617_946);
    assert_eq!(item.type_id, TypeId(35832));
    assert_eq!(bookmarks[1].folder_id, None);
}

#[tokio::test]
async fn clones_decode_home_and_jump_clones() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/clones/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "home_location": {
                "location_id": 1_035_466_617_946_i64,
                "location_type": "structure"
            },
            "jump_clones": [{
                "implants": [22107, 22108],
                "jump_clone_id": 12_345_678,
                "location_id": 60003760,
                "location_type": "station",
                "name": "Jita clone"
            }],
            "last_clone_jump_date": "2026-10-10T12:00:00Z"
        })))
        .mount(&h.server)
        .await;

    let clones = h
        .authed_client("test-token")
        .get_character_clones(PILOT)
        .await
        .expect("clones");
    let home = clones.home_location.expect("home location");
    assert_eq!(home.location_id, Some(1_035_466_617_946));
    assert_eq!(home.location_type, Some(CloneLocationType::Structure));
    assert_eq!(clones.jump_clones[0].implants, vec![TypeId(22107), TypeId(22108)]);
    assert_eq!(
        clones.jump_clones[0].location_type,
        CloneLocationType::Station
    );
    assert_eq!(clones.last_station_change_date, None);
}

#[tokio::test]
async fn public_contracts_and_items_decode() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/contracts/public/10000002/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "collateral": 0.0,
            "contract_id": 221_908_431,
            "date_expired": "2026-11-01T10:00:00Z",
            "date_issued": "2026-10-04T10:00:00Z",
            "days_to_complete": 0,
            "end_location_id": 60003760,
            "for_corporation": false,
            "issuer_corporation_id": 98000001,
            "issuer_id": 95465499,
            "price": 1_250_000_000.0,
            "reward": 0.0,
            "start_location_id": 60003760,
            "title": "Fitted Gila",
            "type": "item_exchange",
            "volume": 10000.0
        }])))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contracts/public/items/221908431/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "is_included": true,
                "item_id": 1_046_551_009_002_i64,
                "quantity": 1,
                "record_id": 5_512_903_001_i64,
                "type_id": 17715
            },
            {
                "is_blueprint_copy": true,
                "is_included": true,
                "material_efficiency": 10,
                "quantity": 1,
                "record_id": 5_512_903_002_i64,
                "runs": 3,
                "time_efficiency": 20,
                "type_id": 17716
            }
        ])))
        .mount(&h.server)
        .await;

    let client = h.client();
    let contracts = client
        .get_public_contracts(RegionId(10000002))
        .await
        .expect("contracts");
    assert_eq!(contracts[0].kind, ContractType::ItemExchange);
    assert_eq!(contracts[0].buyout, None);
    assert_eq!(contracts[0].price, Some(1_250_000_000.0));

    let items = client
        .get_public_contract_items(contracts[0].contract_id)
        .await
        .expect("items");
    assert_eq!(items[0].item_id, Some(1_046_551_009_002));
    assert_eq!(items[1].is_blueprint_copy, Some(true));
    assert_eq!(items[1].runs, Some(3));
}

#[tokio::test]
async fn dogma_dynamic_item_decodes_mutations() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/dogma/dynamic/items/47781/1046551009002/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created_by": 2112625428,
            "dogma_attributes": [
                {"attribute_id": 6, "value": 38.5},
                {"attribute_id": 50, "value": 24.1}
            ],
            "dogma_effects": [{"effect_id": 16, "is_default": false}],
            "mutator_type_id": 47845,
            "source_type_id": 2048
        })))
        .mount(&h.server)
        .await;

    let item = h
        .client()
        .get_dogma_dynamic_item(TypeId(47781), 1_046_551_009_002)
        .await
        .expect("dynamic item");
    assert_eq!(item.created_by, PILOT);
    assert_eq!(item.dogma_attributes[1].value, 24.1);
    assert!(!item.dogma_effects[0].is_default);
    assert_eq!(item.source_type_id, TypeId(2048));
}

#[tokio::test]
async fn fittings_round_trip_through_post() {
    let h = TestHarness::new().await;
    let items = json!([
        {"flag": "HiSlot0", "quantity": 1, "type_id": 3082},
        {"flag": "Cargo", "quantity": 2000, "type_id": 21894}
    ]);
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/fittings/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "description": "Armor brawler",
            "fitting_id": 88,
            "items": items.clone(),
            "name": "Brutix",
            "ship_type_id": 16229
        }])))
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/characters/2112625428/fittings/"))
        .and(body_json(json!({
            "description": "Armor brawler",
            "items": items,
            "name": "Brutix copy",
            "ship_type_id": 16229
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"fitting_id": 89})))
        .expect(1)
        .mount(&h.server)
        .await;

    let client = h.authed_client("test-token");
    let fittings = client.get_character_fittings(PILOT).await.expect("fittings");
    assert_eq!(fittings[0].items[1].quantity, 2000);

    let copy = NewFitting {
        description: fittings[0].description.clone(),
        items: fittings[0].items.clone(),
        name: "Brutix copy".to_string(),
        ship_type_id: fittings[0].ship_type_id,
    };
    assert_eq!(
        copy.items[0],
        FittingItem {
            flag: "HiSlot0".to_string(),
            quantity: 1,
            type_id: TypeId(3082),
        }
    );
    let created = client
        .post_character_fitting(PILOT, &copy)
        .await
        .expect("save fitting");
    assert_eq!(created.fitting_id, 89);
}

#[tokio::test]
async fn location_reports_station_or_structure() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/location/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solar_system_id": 30000142,
            "station_id": 60003760
        })))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/characters/95465499/location/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solar_system_id": 30000142,
            "structure_id": 1_035_466_617_946_i64
        })))
        .mount(&h.server)
        .await;

    let client = h.authed_client("test-token");
    let docked = client.get_character_location(PILOT).await.expect("location");
    assert_eq!(docked.station_id, Some(StationId(60003760)));
    assert_eq!(docked.structure_id, None);

    let citadel = client
        .get_character_location(CharacterId(95465499))
        .await
        .expect("location");
    assert_eq!(citadel.structure_id, Some(StructureId(1_035_466_617_946)));
}

#[tokio::test]
async fn loyalty_offers_carry_required_items() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/loyalty/stores/1000180/offers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "ak_cost": 0,
            "isk_cost": 12_500_000_000_i64,
            "lp_cost": 2_500_000,
            "offer_id": 4021,
            "quantity": 1,
            "required_items": [{"quantity": 1, "type_id": 24690}],
            "type_id": 17738
        }])))
        .mount(&h.server)
        .await;

    let offers = h
        .client()
        .get_loyalty_store_offers(CorporationId(1000180))
        .await
        .expect("offers");
    assert_eq!(offers[0].isk_cost, 12_500_000_000);
    assert_eq!(offers[0].required_items[0].type_id, TypeId(24690));
}

#[tokio::test]
async fn opportunity_tasks_decode() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/opportunities/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"completed_at": "2015-03-24T12:01:00Z", "task_id": 17},
            {"completed_at": "2015-03-24T12:09:30Z", "task_id": 18}
        ])))
        .mount(&h.server)
        .await;

    let tasks = h
        .authed_client("test-token")
        .get_character_opportunities(PILOT)
        .await
        .expect("opportunities");
    let ids: Vec<i32> = tasks.iter().map(|task| task.task_id).collect();
    assert_eq!(ids, vec![17, 18]);
    assert!(tasks[0].completed_at < tasks[1].completed_at);
}

#[tokio::test]
async fn planet_colony_decodes_pins_links_and_routes() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/planets/40009082/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [{
                "destination_pin_id": 1_030_411_292_002_i64,
                "link_level": 0,
                "source_pin_id": 1_030_411_292_001_i64
            }],
            "pins": [
                {
                    "expiry_time": "2026-10-20T08:00:00Z",
                    "extractor_details": {
                        "cycle_time": 1800,
                        "head_radius": 0.0127,
                        "heads": [{"head_id": 0, "latitude": 1.55, "longitude": 0.42}],
                        "product_type_id": 2268,
                        "qty_per_cycle": 6012
                    },
                    "install_time": "2026-10-17T08:00:00Z",
                    "last_cycle_start": "2026-10-18T07:30:00Z",
                    "latitude": 1.5501,
                    "longitude": 0.4207,
                    "pin_id": 1_030_411_292_001_i64,
                    "type_id": 3060
                },
                {
                    "contents": [{"amount": 48_000, "type_id": 2268}],
                    "factory_details": {"schematic_id": 121},
                    "latitude": 1.56,
                    "longitude": 0.43,
                    "pin_id": 1_030_411_292_002_i64,
                    "schematic_id": 121,
                    "type_id": 2473
                }
            ],
            "routes": [{
                "content_type_id": 2268,
                "destination_pin_id": 1_030_411_292_002_i64,
                "quantity": 6012.0,
                "route_id": 4_120_551,
                "source_pin_id": 1_030_411_292_001_i64
            }]
        })))
        .mount(&h.server)
        .await;

    let colony = h
        .authed_client("test-token")
        .get_character_planet(PILOT, 40009082)
        .await
        .expect("colony");
    let extractor = colony.pins[0]
        .extractor_details
        .as_ref()
        .expect("extractor pin");
    assert_eq!(extractor.product_type_id, Some(TypeId(2268)));
    assert_eq!(extractor.heads.len(), 1);
    assert!(colony.pins[0].contents.is_empty());
    assert_eq!(
        colony.pins[1].factory_details.as_ref().map(|f| f.schematic_id),
        Some(121)
    );
    assert_eq!(colony.pins[1].contents[0].amount, 48_000);
    assert_eq!(colony.links[0].source_pin_id, colony.pins[0].pin_id);
    assert!(colony.routes[0].waypoints.is_empty());
    assert_eq!(colony.routes[0].quantity, 6012.0);
}

#[tokio::test]
async fn skill_queue_allows_paused_entries() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/skillqueue/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "finish_date": "2026-10-19T03:12:00Z",
                "finished_level": 5,
                "level_end_sp": 256_000,
                "level_start_sp": 45_255,
                "queue_position": 0,
                "skill_id": 3436,
                "start_date": "2026-10-12T09:00:00Z",
                "training_start_sp": 120_000
            },
            {
                "finished_level": 4,
                "queue_position": 1,
                "skill_id": 3437
            }
        ])))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/characters/2112625428/skills/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "skills": [{
                "active_skill_level": 5,
                "skill_id": 3436,
                "skillpoints_in_skill": 256_000,
                "trained_skill_level": 5
            }],
            "total_sp": 3_150_000_000_i64,
            "unallocated_sp": 500_000
        })))
        .mount(&h.server)
        .await;

    let client = h.authed_client("test-token");
    let queue = client
        .get_character_skill_queue(PILOT)
        .await
        .expect("queue");
    assert_eq!(queue[0].skill_id, TypeId(3436));
    assert!(queue[0].finish_date.is_some());
    assert_eq!(queue[1].finish_date, None);
    assert_eq!(queue[1].level_end_sp, None);

    let skills = client.get_character_skills(PILOT).await.expect("skills");
    assert_eq!(skills.total_sp, 3_150_000_000);
    assert_eq!(skills.unallocated_sp, Some(500_000));
}
