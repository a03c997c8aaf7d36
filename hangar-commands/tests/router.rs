use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{Value, json};

use hangar_commands::{event::InteractionEvent, handle_interaction};
use hangar_core::{BotError, Context};
use hangar_utils::pagination::SessionStore;
use hangar_vehicles::{BattleRatings, LookupError, VehicleRecord, VehicleSource};

const OWNER: &str = "42";
const CHANNEL: &str = "77";

#[derive(Default)]
struct FakeVehicles {
    searches: HashMap<String, Vec<String>>,
    records: HashMap<String, VehicleRecord>,
    failing: bool,
    calls: AtomicUsize,
}

impl FakeVehicles {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VehicleSource for FakeVehicles {
    async fn lookup_ids_by_name(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(LookupError::Status(unavailable()));
        }
        match self.searches.get(name) {
            Some(ids) if !ids.is_empty() => Ok(ids.clone()),
            _ => Err(LookupError::NotFound),
        }
    }

    async fn lookup_vehicle_by_id(&self, id: &str) -> Result<VehicleRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(LookupError::Status(unavailable()));
        }
        self.records.get(id).cloned().ok_or(LookupError::NotFound)
    }
}

fn unavailable() -> hangar_vehicles::StatusCode {
    hangar_vehicles::StatusCode::SERVICE_UNAVAILABLE
}

fn abrams() -> VehicleRecord {
    VehicleRecord {
        identifier: "us_m1_abrams".to_owned(),
        country: "USA".to_owned(),
        vehicle_type: "Medium Tank".to_owned(),
        battle_ratings: BattleRatings {
            arcade: Some(10.7),
            ..BattleRatings::default()
        },
        is_premium: false,
        weapons: vec![
            "105 mm M68A1 cannon".to_owned(),
            "12.7 mm M2HB machine gun".to_owned(),
            "7.62 mm M240 machine gun".to_owned(),
        ],
        image_url: Some("https://example.test/abrams.png".to_owned()),
    }
}

fn fake() -> FakeVehicles {
    let many: Vec<String> = (0..45).map(|index| format!("tank_{index}")).collect();
    FakeVehicles {
        searches: HashMap::from([
            ("tank".to_owned(), many),
            ("abrams".to_owned(), vec!["us_m1_abrams".to_owned()]),
        ]),
        records: HashMap::from([("us_m1_abrams".to_owned(), abrams())]),
        ..FakeVehicles::default()
    }
}

fn context(vehicles: Arc<FakeVehicles>) -> Context {
    Context::new(vehicles, SessionStore::new(64, Duration::from_secs(60)))
}

fn command(id: &str, name: &str, option: &str, value: &str) -> InteractionEvent {
    serde_json::from_value(json!({
        "id": id,
        "type": 2,
        "channel_id": CHANNEL,
        "member": { "user": { "id": OWNER, "username": "gunner" } },
        "data": { "name": name, "options": [{ "name": option, "type": 3, "value": value }] }
    }))
    .expect("valid command event")
}

fn click(custom_id: &str, user: &str) -> InteractionEvent {
    serde_json::from_value(json!({
        "id": "9000",
        "type": 3,
        "channel_id": CHANNEL,
        "member": { "user": { "id": user, "username": "clicker" } },
        "message": { "id": "555" },
        "data": { "custom_id": custom_id, "component_type": 2 }
    }))
    .expect("valid component event")
}

async fn reply(ctx: &Context, event: &InteractionEvent) -> Value {
    let response = handle_interaction(ctx, event).await.expect("routed");
    serde_json::to_value(response).expect("serializes")
}

fn rows(reply: &Value) -> &Vec<Value> {
    reply["data"]["components"].as_array().expect("component rows")
}

fn nav_disabled(reply: &Value) -> (bool, bool) {
    let nav = rows(reply).last().expect("nav row")["components"]
        .as_array()
        .expect("nav buttons");
    assert_eq!(nav[0]["label"], "Previous");
    assert_eq!(nav[1]["label"], "Next");
    (
        nav[0]["disabled"].as_bool().unwrap_or(false),
        nav[1]["disabled"].as_bool().unwrap_or(false),
    )
}

#[tokio::test]
async fn ping_is_acknowledged_without_lookups() {
    let vehicles = Arc::new(fake());
    let ctx = context(Arc::clone(&vehicles));
    let ping: InteractionEvent =
        serde_json::from_value(json!({ "id": "1", "type": 1 })).expect("valid ping");

    assert_eq!(reply(&ctx, &ping).await, json!({ "type": 1 }));
    assert_eq!(vehicles.calls(), 0);
}

#[tokio::test]
async fn search_posts_first_page_with_navigation() {
    let vehicles = Arc::new(fake());
    let ctx = context(Arc::clone(&vehicles));

    let reply = reply(&ctx, &command("1001", "search", "vehicle", "tank")).await;

    assert_eq!(reply["type"], 4);
    assert_eq!(
        reply["data"]["embeds"][0]["title"],
        "Here are the vehicle IDs for tank"
    );
    assert_eq!(rows(&reply).len(), 5);
    assert_eq!(rows(&reply)[0]["components"][0]["custom_id"], "tank_0");
    assert_eq!(nav_disabled(&reply), (true, false));
    assert_eq!(vehicles.calls(), 1);
}

#[tokio::test]
async fn navigation_rerenders_without_refetching() {
    let vehicles = Arc::new(fake());
    let ctx = context(Arc::clone(&vehicles));
    reply(&ctx, &command("1001", "search", "vehicle", "tank")).await;

    let second = reply(&ctx, &click("next:1001", OWNER)).await;
    assert_eq!(second["type"], 7);
    assert_eq!(rows(&second)[0]["components"][0]["custom_id"], "tank_20");
    assert_eq!(nav_disabled(&second), (false, false));

    let last = reply(&ctx, &click("next:1001", OWNER)).await;
    assert_eq!(rows(&last).len(), 2);
    assert_eq!(rows(&last)[0]["components"][0]["custom_id"], "tank_40");
    assert_eq!(nav_disabled(&last), (false, true));

    // A replayed click on the disabled Next button stays on the last page.
    let replayed = reply(&ctx, &click("next:1001", OWNER)).await;
    assert_eq!(rows(&replayed)[0]["components"][0]["custom_id"], "tank_40");

    assert_eq!(vehicles.calls(), 1);
}

#[tokio::test]
async fn previous_on_first_page_is_clamped() {
    let ctx = context(Arc::new(fake()));
    reply(&ctx, &command("1001", "search", "vehicle", "tank")).await;

    let reply = reply(&ctx, &click("previous:1001", OWNER)).await;

    assert_eq!(rows(&reply)[0]["components"][0]["custom_id"], "tank_0");
    assert_eq!(nav_disabled(&reply), (true, false));
}

#[tokio::test]
async fn concurrent_searches_keep_separate_pages() {
    let ctx = context(Arc::new(fake()));
    reply(&ctx, &command("1001", "search", "vehicle", "tank")).await;
    reply(&ctx, &command("1002", "search", "vehicle", "tank")).await;

    reply(&ctx, &click("next:1001", OWNER)).await;
    let other = reply(&ctx, &click("previous:1002", OWNER)).await;

    assert_eq!(rows(&other)[0]["components"][0]["custom_id"], "tank_0");
}

#[tokio::test]
async fn other_users_cannot_page_someone_elses_search() {
    let ctx = context(Arc::new(fake()));
    reply(&ctx, &command("1001", "search", "vehicle", "tank")).await;

    let reply = reply(&ctx, &click("next:1001", "43")).await;

    assert_eq!(reply["type"], 4);
    assert_eq!(reply["data"]["flags"], 64);
    assert_eq!(
        reply["data"]["content"],
        "This search belongs to another user."
    );
}

#[tokio::test]
async fn stale_navigation_reports_expiry() {
    let ctx = context(Arc::new(fake()));

    let bare = reply(&ctx, &click("next", OWNER)).await;
    let unknown = reply(&ctx, &click("next:31337", OWNER)).await;

    for reply in [bare, unknown] {
        assert_eq!(reply["data"]["flags"], 64);
        assert_eq!(
            reply["data"]["content"],
            "This search expired. Run /search again."
        );
    }
}

#[tokio::test]
async fn single_page_search_has_no_navigation() {
    let ctx = context(Arc::new(fake()));

    let reply = reply(&ctx, &command("1001", "search", "vehicle", "abrams")).await;

    assert_eq!(rows(&reply).len(), 1);
    assert_eq!(rows(&reply)[0]["components"][0]["label"], "M1 Abrams");
}

#[tokio::test]
async fn long_query_still_renders_results_and_pages() {
    let query = "t".repeat(300);
    let mut vehicles = fake();
    let many: Vec<String> = (0..25).map(|index| format!("tank_{index}")).collect();
    vehicles.searches.insert(query.clone(), many);
    let ctx = context(Arc::new(vehicles));

    let first = reply(&ctx, &command("1001", "search", "vehicle", &query)).await;

    assert_eq!(first["type"], 4);
    let title = first["data"]["embeds"][0]["title"].as_str().expect("title");
    assert_eq!(title.chars().count(), 256);
    assert!(title.starts_with("Here are the vehicle IDs for ttt"));

    let next = reply(&ctx, &click("next:1001", OWNER)).await;
    assert_eq!(next["type"], 7);
    assert_eq!(next["data"]["embeds"][0]["footer"]["text"], "Page 2/2");
}

#[tokio::test]
async fn search_without_user_starts_no_session() {
    let vehicles = Arc::new(fake());
    let ctx = context(Arc::clone(&vehicles));
    let event: InteractionEvent = serde_json::from_value(json!({
        "id": "1001",
        "type": 2,
        "channel_id": CHANNEL,
        "data": { "name": "search", "options": [{ "name": "vehicle", "type": 3, "value": "tank" }] }
    }))
    .expect("valid command event");

    let reply = reply(&ctx, &event).await;

    assert_eq!(reply["data"]["flags"], 64);
    assert_eq!(vehicles.calls(), 0);
    let stale = handle_interaction(&ctx, &click("next:1001", OWNER))
        .await
        .expect("routed");
    let stale = serde_json::to_value(stale).expect("serializes");
    assert_eq!(
        stale["data"]["content"],
        "This search expired. Run /search again."
    );
}

#[tokio::test]
async fn empty_search_reports_no_results() {
    let ctx = context(Arc::new(fake()));

    let reply = reply(&ctx, &command("1001", "search", "vehicle", "hovercraft")).await;

    assert_eq!(reply["type"], 4);
    assert_eq!(reply["data"]["content"], "No vehicle IDs found for hovercraft");
    assert!(reply["data"].get("components").is_none());
}

#[tokio::test]
async fn info_command_posts_vehicle_card() {
    let ctx = context(Arc::new(fake()));

    let reply = reply(&ctx, &command("1001", "info", "id", "us_m1_abrams")).await;

    assert_eq!(reply["type"], 4);
    let names: Vec<_> = reply["data"]["embeds"][0]["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|field| field["name"].as_str().expect("field name").to_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "Country",
            "Vehicle Type",
            "Arcade BR",
            "Weapon 1",
            "Weapon 2",
            "Weapon 3"
        ]
    );
}

#[tokio::test]
async fn clicking_a_result_replaces_grid_with_card() {
    let ctx = context(Arc::new(fake()));

    let reply = reply(&ctx, &click("us_m1_abrams", OWNER)).await;

    assert_eq!(reply["type"], 7);
    assert_eq!(
        reply["data"]["embeds"][0]["title"],
        "Vehicle info for us_m1_abrams"
    );
    assert_eq!(reply["data"]["components"], json!([]));
}

#[tokio::test]
async fn unknown_vehicle_id_reports_not_found() {
    let ctx = context(Arc::new(fake()));

    let reply = reply(&ctx, &command("1001", "info", "id", "ghost_tank")).await;

    assert_eq!(reply["data"]["content"], "No vehicle found for ID ghost_tank");
}

#[tokio::test]
async fn upstream_failures_become_generic_text() {
    let ctx = context(Arc::new(FakeVehicles {
        failing: true,
        ..fake()
    }));

    let search = reply(&ctx, &command("1001", "search", "vehicle", "tank")).await;
    let info = reply(&ctx, &command("1002", "info", "id", "us_m1_abrams")).await;

    assert_eq!(
        search["data"]["content"],
        "An error occurred while trying to fetch vehicle IDs"
    );
    assert_eq!(
        info["data"]["content"],
        "An error occurred while trying to fetch vehicle info"
    );
}

#[tokio::test]
async fn unknown_commands_are_rejected() {
    let vehicles = Arc::new(fake());
    let ctx = context(Arc::clone(&vehicles));

    let err = handle_interaction(&ctx, &command("1001", "launch", "target", "moon"))
        .await
        .expect_err("unknown command");
    assert!(matches!(err, BotError::UnrecognizedCommand(name) if name == "launch"));

    let missing_option: InteractionEvent = serde_json::from_value(json!({
        "id": "1002",
        "type": 2,
        "user": { "id": OWNER, "username": "gunner" },
        "data": { "name": "search" }
    }))
    .expect("valid event");
    let err = handle_interaction(&ctx, &missing_option)
        .await
        .expect_err("missing option");
    assert!(matches!(err, BotError::UnrecognizedCommand(_)));

    assert_eq!(vehicles.calls(), 0);
}
