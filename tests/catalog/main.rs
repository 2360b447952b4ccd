//! Typed records, the Record derive and soft references between collections.

use serde::{Deserialize, Serialize};
use serde_json::json;
use storefront_db::domain::{
    CartItem, Category, Customer, Order, OrderStatus, Product, ProductStatus, Rating, Review,
    ReviewId, User, UserId, LAST_ORDER_KEY,
};
use storefront_db::{InMemoryMedium, NewUser, Record, RecordRef, Store};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
struct Coupon {
    #[serde(default)]
    id: String,
    code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "wishlist")]
struct WishlistEntry {
    #[record(id)]
    #[serde(rename = "id", default)]
    key: String,
    product: String,
}

fn open() -> Store<InMemoryMedium> {
    Store::open(InMemoryMedium::new()).unwrap()
}

#[test]
fn derive_uses_default_and_explicit_collection_names() {
    assert_eq!(Coupon::COLLECTION, "coupons");
    assert_eq!(WishlistEntry::COLLECTION, "wishlist");
    assert_eq!(Product::COLLECTION, "products");
    assert_eq!(CartItem::COLLECTION, "cart");

    let mut entry = WishlistEntry {
        key: String::new(),
        product: "p1".into(),
    };
    entry.set_id("w1".into());
    assert_eq!(entry.id(), "w1");
    assert_eq!(entry.key, "w1");
}

#[test]
fn custom_id_field_gets_assigned_on_add() {
    let store = open();
    let saved = store
        .collection::<WishlistEntry>()
        .add(&WishlistEntry {
            key: String::new(),
            product: "p1".into(),
        })
        .unwrap();
    assert!(!saved.key.is_empty());
    assert_eq!(saved.id(), saved.key);

    let raw = store.get_all("wishlist");
    assert_eq!(raw[0]["id"], saved.key.as_str());
}

#[test]
fn product_lifecycle() {
    let store = open();
    let products = store.collection::<Product>();

    let lamp = products
        .add(&Product::new("Lamp", 20.0).with_stock(5))
        .unwrap();
    assert!(!lamp.id.is_empty());

    let updated = products
        .update(lamp.id.as_str(), json!({"stock": 0, "status": "out_of_stock"}))
        .unwrap()
        .unwrap();
    assert_eq!(updated.stock, 0);
    assert_eq!(updated.status, ProductStatus::OutOfStock);
    assert_eq!(updated.name, "Lamp");
    assert!(!updated.is_available());

    assert!(products.remove(lamp.id.as_str()).unwrap());
    assert!(products.get(lamp.id.as_str()).is_none());
    assert!(!products.remove(lamp.id.as_str()).unwrap());
}

#[test]
fn seeding_the_catalogue_happens_once() {
    let store = open();
    let categories = store.collection::<Category>();

    let seeded = categories
        .seed(&[Category::new("Lighting"), Category::new("Seating")])
        .unwrap();
    assert_eq!(seeded, 2);
    assert_eq!(categories.seed(&[Category::new("Other")]).unwrap(), 0);
    assert_eq!(categories.count(), 2);
    assert!(categories.get_all().iter().all(|c| !c.id.is_empty()));
}

#[test]
fn order_references_resolve_until_targets_are_deleted() {
    let store = open();
    let user = store
        .sessions()
        .register(NewUser::customer("ann", "pw"))
        .unwrap();
    let lamp = store
        .collection::<Product>()
        .add(&Product::new("Lamp", 20.0).with_stock(3))
        .unwrap();

    let cart = store.collection::<CartItem>();
    cart.add(&CartItem::for_product(&lamp, 2)).unwrap();

    let customer = Customer {
        user_id: Some(user.id.clone()),
        name: "Ann".into(),
        ..Customer::default()
    };
    let order = store
        .collection::<Order>()
        .add(&Order::from_cart(&cart.get_all(), customer))
        .unwrap();
    store.set_entry(LAST_ORDER_KEY, &order).unwrap();
    cart.clear().unwrap();

    assert_eq!(order.total, 40.0);
    assert_eq!(order.customer_user(&store).unwrap().username, "ann");
    assert_eq!(order.items[0].product(&store).unwrap().name, "Lamp");
    assert_eq!(store.get_entry::<Order>(LAST_ORDER_KEY), Some(order.clone()));
    assert!(cart.get_all().is_empty());

    store.collection::<User>().remove(user.id.as_str()).unwrap();
    store.collection::<Product>().remove(lamp.id.as_str()).unwrap();
    assert!(order.customer_user(&store).is_none());
    assert!(order.items[0].product(&store).is_none());
    assert!(UserId::new("nobody").resolve(&store).is_none());
}

#[test]
fn order_status_moves_through_update() {
    let store = open();
    let orders = store.collection::<Order>();
    let order = orders
        .add(&Order::from_cart(&[], Customer::default()))
        .unwrap();

    let shipped = orders
        .update(order.id.as_str(), json!({"status": "shipped"}))
        .unwrap()
        .unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert_eq!(shipped.created_at, order.created_at);

    let pending = orders.filter(|o| o.status == OrderStatus::Pending);
    assert!(pending.is_empty());
}

#[test]
fn reviews_average_per_product() {
    let store = open();
    let lamp = store
        .collection::<Product>()
        .add(&Product::new("Lamp", 20.0))
        .unwrap();
    let reviews = store.collection::<Review>();
    for stars in [3, 4, 5] {
        reviews
            .add(&Review {
                id: ReviewId::default(),
                product_id: lamp.id.clone(),
                user_id: None,
                rating: Rating::new(stars).unwrap(),
                comment: "ok".into(),
                created_at: chrono::Utc::now(),
            })
            .unwrap();
    }

    let for_lamp = reviews.filter(|r| r.product_id == lamp.id);
    assert_eq!(Review::average(&for_lamp), Some(4.0));
    assert_eq!(for_lamp[0].product(&store).unwrap().id, lamp.id);
    assert!(for_lamp[0].author(&store).is_none());
}

#[test]
fn typed_search_matches_string_fields() {
    let store = open();
    let products = store.collection::<Product>();
    let mut desk = Product::new("Oak Desk", 120.0);
    desk.description = "Solid wood".into();
    products.add(&desk).unwrap();
    products.add(&Product::new("Steel Chair", 60.0)).unwrap();

    assert_eq!(products.search("WOOD").len(), 1);
    assert_eq!(products.search("").len(), 2);
}
