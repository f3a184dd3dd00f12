/*!
 * Product filter properties
 */

use proptest::prelude::*;
use std::borrow::Cow;
use sync_race::filter::{
    filter_parallel, filter_products, partition_ranges, FilterThresholds, Product,
};

fn product() -> impl Strategy<Value = Product> {
    (
        0u16..1000,
        1.0f64..500.0,
        0.0f64..400.0,
        0.0f64..20.0,
        0.0f64..20.0,
        0.0f64..80.0,
    )
        .prop_map(|(id, weight, kcal_per_100g, proteins, fats, carbs)| Product {
            name: Cow::Owned(format!("product-{id}")),
            weight,
            kcal_per_100g,
            proteins,
            fats,
            carbs,
        })
}

proptest! {
    #[test]
    fn parallel_filter_matches_sequential(
        products in prop::collection::vec(product(), 0..64),
        max_calories in 0.0f64..600.0,
        max_carbs in 0.0f64..80.0,
        partitions in 0usize..12,
    ) {
        let thresholds = FilterThresholds { max_calories, max_carbs };
        let sequential = filter_products(&products, &thresholds);
        let parallel = filter_parallel(&products, &thresholds, partitions);
        prop_assert_eq!(parallel, sequential);
    }

    #[test]
    fn accepted_products_satisfy_both_thresholds(
        products in prop::collection::vec(product(), 0..64),
        max_calories in 0.0f64..600.0,
        max_carbs in 0.0f64..80.0,
    ) {
        let thresholds = FilterThresholds { max_calories, max_carbs };
        for p in filter_products(&products, &thresholds) {
            prop_assert!(p.calories() <= max_calories);
            prop_assert!(p.carbs < max_carbs);
        }
    }

    #[test]
    fn partitions_tile_the_input(len in 0usize..200, partitions in 0usize..12) {
        let ranges = partition_ranges(len, partitions);
        prop_assert_eq!(ranges.len(), partitions.max(1).min(len));

        let mut next = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, next);
            prop_assert!(!range.is_empty());
            next = range.end;
        }
        prop_assert_eq!(next, len);
    }
}
