//! Golden test vectors for the snapshot codec.
//!
//! These vectors pin the exact wire shape of persisted carts, so a snapshot
//! written by one version stays readable by the next.

use trolley_core::snapshot::{decode, encode};
use trolley_core::{Cart, CartItem, ProductId, ProductInfo};

/// A golden snapshot vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The exact snapshot text.
    pub json: &'static str,
    /// Builds the cart the snapshot encodes.
    pub build: fn() -> Cart,
}

/// A snapshot that decode must reject.
#[derive(Debug, Clone)]
pub struct RejectionVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The offending snapshot text.
    pub json: &'static str,
    /// Whether the text parses as JSON at all. When true, the rejection is
    /// about shape or cart invariants, not syntax.
    pub well_formed: bool,
}

fn item(id: u64, title: &'static str, price: f64, amount: u32) -> CartItem {
    CartItem::new(
        ProductInfo {
            id: ProductId::new(id),
            title: title.to_string(),
            price,
            image: format!("https://cdn.example/products/{}.jpg", id),
        },
        amount,
    )
}

fn empty_cart() -> Cart {
    Cart::new()
}

fn single_item_cart() -> Cart {
    Cart::from_items(vec![item(1, "Ankle Boot", 99.9, 2)]).expect("vector items are valid")
}

fn multi_item_cart() -> Cart {
    Cart::from_items(vec![
        item(3, "Trail Runner", 219.0, 1),
        item(7, "Canvas Slip On", 49.9, 3),
    ])
    .expect("vector items are valid")
}

/// Get all golden snapshot vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty cart",
            json: "[]",
            build: empty_cart,
        },
        GoldenVector {
            name: "single item",
            json: r#"[{"id":1,"title":"Ankle Boot","price":99.9,"image":"https://cdn.example/products/1.jpg","amount":2}]"#,
            build: single_item_cart,
        },
        GoldenVector {
            name: "two items with a whole price",
            json: r#"[{"id":3,"title":"Trail Runner","price":219.0,"image":"https://cdn.example/products/3.jpg","amount":1},{"id":7,"title":"Canvas Slip On","price":49.9,"image":"https://cdn.example/products/7.jpg","amount":3}]"#,
            build: multi_item_cart,
        },
    ]
}

/// Get all rejection vectors.
pub fn rejection_vectors() -> Vec<RejectionVector> {
    vec![
        RejectionVector {
            name: "duplicate product id",
            json: r#"[{"id":1,"title":"A","price":1.0,"image":"a.jpg","amount":1},{"id":1,"title":"A","price":1.0,"image":"a.jpg","amount":2}]"#,
            well_formed: true,
        },
        RejectionVector {
            name: "zero amount",
            json: r#"[{"id":1,"title":"A","price":1.0,"image":"a.jpg","amount":0}]"#,
            well_formed: true,
        },
        RejectionVector {
            name: "object instead of array",
            json: r#"{"id":1,"title":"A","price":1.0,"image":"a.jpg","amount":1}"#,
            well_formed: true,
        },
        RejectionVector {
            name: "missing amount field",
            json: r#"[{"id":1,"title":"A","price":1.0,"image":"a.jpg"}]"#,
            well_formed: true,
        },
        RejectionVector {
            name: "truncated text",
            json: r#"[{"id":1,"title":"A","#,
            well_formed: false,
        },
    ]
}

/// Verify all golden vectors against the codec.
///
/// Returns `(name, matches, encoded)` per vector, where `matches` requires
/// both that encoding reproduces the snapshot text and that decoding it
/// rebuilds the same cart.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let cart = (v.build)();
            let encoded = match encode(&cart) {
                Ok(text) => text,
                Err(e) => return (v.name.to_string(), false, e.to_string()),
            };

            let decoded_back = decode(v.json).map(|c| c == cart).unwrap_or(false);
            let matches = encoded == v.json && decoded_back;

            (v.name.to_string(), matches, encoded)
        })
        .collect()
}

/// Verify all rejection vectors against the codec.
///
/// Returns `(name, matches)` per vector, where `matches` requires decode to
/// reject the text and the `well_formed` flag to agree with the JSON parser.
pub fn verify_rejection_vectors() -> Vec<(String, bool)> {
    rejection_vectors()
        .iter()
        .map(|v| {
            let rejected = decode(v.json).is_err();
            let parses = serde_json::from_str::<serde_json::Value>(v.json).is_ok();

            (v.name.to_string(), rejected && parses == v.well_formed)
        })
        .collect()
}
