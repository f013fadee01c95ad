//! End-to-end storefront scenarios against a wiremock catalog.

use greenearth_cart::{CartStore, KeyValueStore, MemoryStore, CART_KEY};
use greenearth_catalog::CatalogClient;
use greenearth_core::MoneyLocale;
use greenearth_storefront::{Grid, RecordingSurface, Storefront};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestStorefront = Storefront<MemoryStore, RecordingSurface>;

fn storefront(base_url: &str, memory: MemoryStore) -> TestStorefront {
    let catalog = CatalogClient::new(base_url, 5, "greenearth-test/0.1", 0, 0)
        .expect("failed to build test CatalogClient");
    Storefront::new(
        catalog,
        CartStore::new(memory),
        RecordingSurface::new(),
        MoneyLocale::EnUs,
    )
}

fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn card_titles(grid: &Grid) -> Vec<&str> {
    grid.cards().iter().map(|c| c.title.as_str()).collect()
}

async fn mount_categories(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [
                {"id": 1, "category_name": "Fruit Trees"},
                {"id": 2, "category_name": "Flowering Trees"}
            ]
        })))
        .mount(server)
        .await;
}

async fn mount_all_plants(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/plants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plants": [
                {"id": 7, "name": "Mango Tree", "category": "Fruit Tree", "price": 500,
                 "image": "mango.jpg", "description": "Sweet."},
                {"id": 8, "name": "Jacaranda", "category": "Flowering Tree", "price": 800}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn selecting_a_category_requests_it_and_renders_its_plants() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    mount_all_plants(&server).await;
    Mock::given(method("GET"))
        .and(path("/category/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 8, "name": "Jacaranda", "category": "Flowering Tree", "price": 800}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = storefront(&server.uri(), MemoryStore::new());
    store.start().await;
    assert_eq!(
        store.categories().iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["all", "1", "2"]
    );
    assert_eq!(card_titles(store.grid()), vec!["Mango Tree", "Jacaranda"]);

    store.select_category("2").await.expect("known category");

    assert_eq!(store.active_category(), "2");
    let bar = store.surface().categories.last().expect("bar");
    assert_eq!(bar.buttons.iter().filter(|b| b.active).count(), 1);
    assert_eq!(bar.active().map(|b| b.id.as_str()), Some("2"));
    assert_eq!(card_titles(store.grid()), vec!["Jacaranda"]);
}

#[tokio::test]
async fn offline_category_falls_back_to_matching_mock_plants() {
    let mut store = storefront(&unreachable_base_url(), MemoryStore::new());
    store.start().await;
    assert_eq!(store.grid().cards().len(), 4);

    store.select_category("2").await.expect("mock category");

    assert_eq!(card_titles(store.grid()), vec!["Bougainvillea"]);
    assert_eq!(store.surface().last_grid(), Some(store.grid()));
}

#[tokio::test]
async fn empty_category_renders_placeholder() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    mount_all_plants(&server).await;
    Mock::given(method("GET"))
        .and(path("/category/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let mut store = storefront(&server.uri(), MemoryStore::new());
    store.start().await;
    store.select_category("1").await.expect("known category");

    assert_eq!(store.grid(), &Grid::Empty);
}

#[tokio::test]
async fn details_show_card_first_then_merge_confirmed_fields() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    mount_all_plants(&server).await;
    Mock::given(method("GET"))
        .and(path("/plant/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plant": {"id": 7, "description": "A richer description from the server."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = storefront(&server.uri(), MemoryStore::new());
    store.start().await;
    store.open_details(1).await.expect("card 1");

    let details = &store.surface().details;
    assert_eq!(details.len(), 2);

    assert!(details[0].open);
    assert_eq!(details[0].title, "Mango Tree");
    assert_eq!(details[0].description, "Sweet.");
    assert_eq!(details[0].price_label, "৳500");

    assert_eq!(details[1].title, "Mango Tree");
    assert_eq!(details[1].image, "mango.jpg");
    assert_eq!(details[1].description, "A richer description from the server.");
    assert_eq!(details[1].price_label, "৳500");
}

#[tokio::test]
async fn failed_detail_fetch_keeps_provisional_overlay() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    mount_all_plants(&server).await;
    Mock::given(method("GET"))
        .and(path("/plant/8"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = storefront(&server.uri(), MemoryStore::new());
    store.start().await;
    store.open_details(2).await.expect("card 2");

    let details = &store.surface().details;
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].title, "Jacaranda");
    assert_eq!(details[0].price_label, "৳800");
    assert!(store.detail().expect("open").confirmed.is_none());
}

#[tokio::test]
async fn cart_totals_follow_adds_and_removals_and_persist() {
    let memory = MemoryStore::new();
    let mut store = storefront(&unreachable_base_url(), memory.clone());
    store.start().await;

    store.add_to_cart(1).expect("mango");
    store.add_to_cart(1).expect("mango");
    store.add_to_cart(3).expect("bougainvillea");
    let panel = store.surface().last_cart().expect("cart");
    assert_eq!(panel.total_label, "৳1,350");
    assert_eq!(panel.lines[0].unit_label, "৳500 × 2");

    store.remove_from_cart("101");
    assert_eq!(store.surface().last_cart().expect("cart").total_label, "৳350");

    let persisted = CartStore::new(memory.clone()).load();
    assert_eq!(&persisted, store.cart());
    assert!(memory.get(CART_KEY).expect("readable").is_some());
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let memory = MemoryStore::new();
    {
        let mut store = storefront(&unreachable_base_url(), memory.clone());
        store.start().await;
        store.add_to_cart(4).expect("neem");
        store.increase_qty("104");
    }

    let store = storefront(&unreachable_base_url(), memory);
    assert_eq!(store.cart().get("104").map(|e| e.qty), Some(2));
    assert_eq!(
        store.surface().last_cart().expect("cart").total_label,
        "৳900"
    );
}

#[tokio::test]
async fn blocked_storage_does_not_stop_the_cart() {
    let mut store = storefront(&unreachable_base_url(), MemoryStore::disabled());
    store.start().await;
    store.add_to_cart(2).expect("guava");
    assert_eq!(store.surface().last_cart().expect("cart").total_label, "৳500");
}

#[tokio::test]
async fn remote_all_category_yields_a_single_active_button() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [
                {"id": "all", "category_name": "Everything"},
                {"id": 1, "category_name": "Fruit Trees"}
            ]
        })))
        .mount(&server)
        .await;
    mount_all_plants(&server).await;

    let mut store = storefront(&server.uri(), MemoryStore::new());
    store.start().await;

    assert_eq!(
        store.categories().iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["all", "1"]
    );
    let bar = store.surface().categories.last().expect("bar");
    assert_eq!(bar.buttons.iter().filter(|b| b.active).count(), 1);
    assert_eq!(bar.active().map(|b| b.name.as_str()), Some("All Trees"));
}

#[tokio::test]
async fn detail_without_a_record_keeps_card_values() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    mount_all_plants(&server).await;
    Mock::given(method("GET"))
        .and(path("/plant/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": false, "message": "not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut store = storefront(&server.uri(), MemoryStore::new());
    store.start().await;
    store.open_details(1).await.expect("card 1");

    let details = &store.surface().details;
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].title, "Mango Tree");
    assert_eq!(details[0].price_label, "৳500");
    assert!(store.detail().expect("open").confirmed.is_none());
}

#[tokio::test]
async fn detail_fetch_is_bracketed_by_busy() {
    let server = MockServer::start().await;
    mount_categories(&server).await;
    mount_all_plants(&server).await;
    Mock::given(method("GET"))
        .and(path("/plant/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"plant": {"id": 7}})))
        .mount(&server)
        .await;

    let mut store = storefront(&server.uri(), MemoryStore::new());
    store.start().await;
    let before = store.surface().busy.len();
    store.open_details(1).await.expect("card 1");

    assert_eq!(&store.surface().busy[before..], &[true, false]);
}
