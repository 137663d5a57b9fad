//! Proptest generators for property-based testing.

use proptest::prelude::*;

use trolley_core::{Cart, CartItem, ProductId, ProductInfo};

/// Generate a random ProductId.
pub fn product_id() -> impl Strategy<Value = ProductId> {
    (1u64..10_000).prop_map(ProductId::new)
}

/// Generate a product title.
pub fn title() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,11}( [A-Z][a-z]{2,11}){0,2}".prop_map(String::from)
}

/// Generate a price on a cent grid.
pub fn price() -> impl Strategy<Value = f64> {
    (100u32..1_000_000).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Generate a held amount.
pub fn amount() -> impl Strategy<Value = u32> {
    1u32..100
}

/// Generate a random ProductInfo.
pub fn product_info() -> impl Strategy<Value = ProductInfo> {
    (product_id(), title(), price()).prop_map(|(id, title, price)| ProductInfo {
        id,
        title,
        price,
        image: format!("https://cdn.example/products/{}.jpg", id),
    })
}

/// Parameters for generating a cart.
#[derive(Debug, Clone)]
pub struct CartParams {
    pub entries: Vec<(ProductInfo, u32)>,
}

impl Arbitrary for CartParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        // Keys of a btree_map are unique, which gives unique product ids.
        prop::collection::btree_map(1u64..10_000, (title(), price(), 1u32..100), 0..8)
            .prop_map(|entries| CartParams {
                entries: entries
                    .into_iter()
                    .map(|(id, (title, price, amount))| {
                        (
                            ProductInfo {
                                id: ProductId::new(id),
                                title,
                                price,
                                image: format!("https://cdn.example/products/{}.jpg", id),
                            },
                            amount,
                        )
                    })
                    .collect(),
            })
            .boxed()
    }
}

/// Build a cart from parameters.
pub fn cart_from_params(params: &CartParams) -> Cart {
    let items = params
        .entries
        .iter()
        .map(|(product, amount)| CartItem::new(product.clone(), *amount))
        .collect();
    Cart::from_items(items).expect("generated entries have unique ids and positive amounts")
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_total_price_matches_item_subtotals(params: CartParams) {
            let cart = cart_from_params(&params);

            let expected: f64 = params
                .entries
                .iter()
                .map(|(product, amount)| product.price * f64::from(*amount))
                .sum();

            prop_assert_eq!(cart.total_price(), expected);
        }

        #[test]
        fn test_increment_raises_totals_by_exactly_one(params: CartParams) {
            prop_assume!(!params.entries.is_empty());

            let mut cart = cart_from_params(&params);
            let id = params.entries[0].0.id;
            let before = cart.total_items();

            cart.increment(id).unwrap();

            prop_assert_eq!(cart.total_items(), before + 1);
            prop_assert_eq!(cart.len(), params.entries.len());
        }

        #[test]
        fn test_remove_keeps_the_rest_in_order(params: CartParams) {
            prop_assume!(params.entries.len() >= 2);

            let mut cart = cart_from_params(&params);
            let victim = params.entries[params.entries.len() / 2].0.id;

            let removed = cart.remove(victim);
            prop_assert!(removed.is_some());
            prop_assert!(!cart.contains(victim));

            let expected: Vec<ProductId> = params
                .entries
                .iter()
                .map(|(product, _)| product.id)
                .filter(|id| *id != victim)
                .collect();
            let actual: Vec<ProductId> = cart.iter().map(CartItem::id).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
