//! Snapshot codec: the cart's persisted wire form.
//!
//! A snapshot is a JSON array of flat cart entries, e.g.
//! `[{"id":1,"title":"Boots","price":99.9,"image":"...","amount":2}]`.
//! Encoding is infallible for any cart built through [`Cart`]'s API;
//! decoding validates the cart invariants so a tampered or corrupted
//! snapshot never becomes live state.

use crate::cart::{Cart, CartItem};
use crate::error::SnapshotError;

/// Encode a cart into its JSON snapshot form.
pub fn encode(cart: &Cart) -> Result<String, SnapshotError> {
    serde_json::to_string(cart).map_err(|e| SnapshotError::Encode(e.to_string()))
}

/// Decode a JSON snapshot back into a cart.
///
/// Fails with [`SnapshotError::Decode`] on malformed JSON and with
/// [`SnapshotError::Invalid`] when the payload parses but violates a
/// cart invariant (duplicate product id, zero amount).
pub fn decode(input: &str) -> Result<Cart, SnapshotError> {
    let items: Vec<CartItem> =
        serde_json::from_str(input).map_err(|e| SnapshotError::Decode(e.to_string()))?;
    Ok(Cart::from_items(items)?)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::product::ProductInfo;
    use crate::types::ProductId;

    fn item(id: u64, title: &str, price: f64, amount: u32) -> CartItem {
        CartItem::new(
            ProductInfo {
                id: ProductId::new(id),
                title: title.to_string(),
                price,
                image: format!("https://cdn.example/{}.jpg", id),
            },
            amount,
        )
    }

    #[test]
    fn test_empty_cart_encodes_as_empty_array() {
        let encoded = encode(&Cart::new()).unwrap();
        assert_eq!(encoded, "[]");
        assert!(decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_entries_serialize_flat() {
        let cart = Cart::from_items(vec![item(1, "Boots", 99.9, 2)]).unwrap();
        let encoded = encode(&cart).unwrap();
        assert_eq!(
            encoded,
            r#"[{"id":1,"title":"Boots","price":99.9,"image":"https://cdn.example/1.jpg","amount":2}]"#
        );
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(matches!(decode("not json"), Err(SnapshotError::Decode(_))));
        assert!(matches!(
            decode(r#"{"id":1}"#),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let input = r#"[
            {"id":1,"title":"Boots","price":99.9,"image":"a.jpg","amount":2},
            {"id":1,"title":"Boots","price":99.9,"image":"a.jpg","amount":1}
        ]"#;
        assert!(matches!(decode(input), Err(SnapshotError::Invalid(_))));
    }

    #[test]
    fn test_decode_rejects_zero_amount() {
        let input = r#"[{"id":1,"title":"Boots","price":99.9,"image":"a.jpg","amount":0}]"#;
        assert!(matches!(decode(input), Err(SnapshotError::Invalid(_))));
    }

    fn arb_cart() -> impl Strategy<Value = Cart> {
        // Keys of a btree_map are unique, which gives unique product ids.
        prop::collection::btree_map(
            0u64..1_000,
            ("[a-z]{1,12}", 0.0f64..10_000.0, 1u32..100),
            0..8,
        )
        .prop_map(|entries| {
            let items = entries
                .into_iter()
                .map(|(id, (title, price, amount))| {
                    CartItem::new(
                        ProductInfo {
                            id: ProductId::new(id),
                            title,
                            price,
                            image: format!("https://cdn.example/{}.jpg", id),
                        },
                        amount,
                    )
                })
                .collect();
            Cart::from_items(items).unwrap()
        })
    }

    proptest! {
        #[test]
        fn test_round_trip_preserves_cart(cart in arb_cart()) {
            let encoded = encode(&cart).unwrap();
            let decoded = decode(&encoded).unwrap();
            prop_assert_eq!(decoded, cart);
        }
    }
}
