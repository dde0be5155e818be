//! Proptest generators for property-based testing.

use proptest::prelude::*;

use satchel_core::{Category, Item, ItemName};

/// Generate a valid item name (1 to 29 characters).
pub fn item_name() -> impl Strategy<Value = ItemName> {
    "[A-Za-z][A-Za-z0-9 _-]{0,28}".prop_map(|s| ItemName::new(s).expect("generated name in bounds"))
}

/// Generate a valid category (0 to 19 characters).
pub fn category() -> impl Strategy<Value = Category> {
    "[a-z]{0,19}".prop_map(|s| Category::new(s).expect("generated category in bounds"))
}

/// Generate a quantity.
pub fn quantity() -> impl Strategy<Value = i32> {
    prop_oneof![0i32..=100, any::<i32>()]
}

/// Generate a single item.
pub fn item() -> impl Strategy<Value = Item> {
    (item_name(), category(), quantity())
        .prop_map(|(name, category, quantity)| Item::from_parts(name, category, quantity))
}

/// Generate up to `max_len` items with pairwise distinct names, in random
/// order.
pub fn distinct_items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::btree_map(item_name(), (category(), quantity()), 0..=max_len)
        .prop_map(|map| {
            map.into_iter()
                .map(|(name, (category, quantity))| Item::from_parts(name, category, quantity))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Parameters for generating an item from raw strings.
///
/// Unlike [`item`], the strings may be out of bounds; use it to exercise
/// field validation.
#[derive(Debug, Clone)]
pub struct ItemParams {
    pub name: String,
    pub category: String,
    pub quantity: i32,
}

impl Arbitrary for ItemParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (".{0,40}", ".{0,30}", any::<i32>())
            .prop_map(|(name, category, quantity)| ItemParams {
                name,
                category,
                quantity,
            })
            .boxed()
    }
}

impl ItemParams {
    pub fn build(&self) -> Result<Item, satchel_core::FieldError> {
        Item::new(self.name.clone(), self.category.clone(), self.quantity)
    }
}
