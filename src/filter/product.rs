/*!
 * Product Catalogue
 * Nutrition records and the built-in sample set
 */

use std::borrow::Cow;

/// A food portion with nutrition values per 100g
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: Cow<'static, str>,
    /// Portion weight in grams
    pub weight: f64,
    pub kcal_per_100g: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl Product {
    pub const fn new(
        name: &'static str,
        weight: f64,
        kcal_per_100g: f64,
        proteins: f64,
        fats: f64,
        carbs: f64,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            weight,
            kcal_per_100g,
            proteins,
            fats,
            carbs,
        }
    }

    /// Energy of the whole portion in kcal
    #[inline]
    pub fn calories(&self) -> f64 {
        self.weight * self.kcal_per_100g / 100.0
    }
}

/// The sample catalogue used by the `product-filter` binary
pub fn sample_catalogue() -> Vec<Product> {
    vec![
        Product::new("Apple", 150.0, 52.0, 0.3, 0.2, 14.0),
        Product::new("Banana", 120.0, 89.0, 1.1, 0.3, 23.0),
        Product::new("Orange", 130.0, 47.0, 0.9, 0.1, 12.0),
        Product::new("Strawberry", 100.0, 32.0, 0.7, 0.3, 7.0),
        Product::new("Kiwi", 75.0, 61.0, 1.1, 0.5, 15.0),
        Product::new("Pear", 180.0, 57.0, 0.4, 0.1, 15.0),
        Product::new("Peach", 150.0, 39.0, 0.9, 0.3, 10.0),
        Product::new("Grapes", 100.0, 69.0, 0.6, 0.2, 18.0),
        Product::new("Watermelon", 300.0, 30.0, 0.6, 0.2, 8.0),
        Product::new("Raspberry", 100.0, 52.0, 1.2, 0.7, 12.0),
        Product::new("Blueberry", 100.0, 57.0, 0.7, 0.3, 14.0),
        Product::new("Buckwheat", 100.0, 343.0, 13.3, 3.4, 72.0),
        Product::new("Rice", 100.0, 130.0, 2.7, 0.3, 28.0),
        Product::new("Pasta", 100.0, 157.0, 5.8, 0.9, 31.0),
        Product::new("Potato", 100.0, 77.0, 2.0, 0.1, 17.0),
        Product::new("Carrot", 100.0, 41.0, 0.9, 0.2, 10.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_scale_with_weight() {
        let apple = Product::new("Apple", 150.0, 52.0, 0.3, 0.2, 14.0);
        assert!((apple.calories() - 78.0).abs() < 1e-9);

        let watermelon = Product::new("Watermelon", 300.0, 30.0, 0.6, 0.2, 8.0);
        assert!((watermelon.calories() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_catalogue_size() {
        assert_eq!(sample_catalogue().len(), 16);
    }
}
