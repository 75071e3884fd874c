//! Hard-coded fallback catalog data.
//!
//! Served by the fetch layer whenever the backend is unreachable or
//! returns an unusable payload, so listing pages always have something
//! renderable. Counts here are fixed (unlike synthesized counts for live
//! data) so a degraded page is stable across re-renders.

use crate::catalog::{derived_image_path, Category, Industry, Product};

/// Industry name whose mock category list is the full Ayurveda catalog.
pub const AYURVEDA: &str = "Ayurveda";

fn category(id: u32, name: &str, count: u32) -> Category {
    Category {
        id,
        name: name.to_string(),
        image: derived_image_path(name),
        count,
    }
}

fn industry(id: u32, name: &str, count: u32) -> Industry {
    Industry {
        id,
        name: name.to_string(),
        image: derived_image_path(name),
        count,
    }
}

/// The Ayurveda category list: nine product-type categories.
pub fn ayurveda_categories() -> Vec<Category> {
    vec![
        category(1, "Shampoo", 24),
        category(2, "Hair Treatment", 18),
        category(3, "Hair Oil", 32),
        category(4, "Conditioner", 15),
        category(5, "Skin Care", 41),
        category(6, "Massage Oil", 22),
        category(7, "Toothpaste", 12),
        category(8, "Herbal Powder", 27),
        category(9, "Soap", 36),
    ]
}

/// Small generic category list for industries with no specific mock.
pub fn generic_categories() -> Vec<Category> {
    vec![
        category(1, "Fashion", 45),
        category(2, "Electronics", 38),
        category(3, "Food & Beverage", 29),
        category(4, "Furniture", 17),
    ]
}

/// Mock category list for an industry, by case-insensitive name.
///
/// Falls back to [`generic_categories`] when no specific mock exists.
pub fn categories_for(industry: &str) -> Vec<Category> {
    if industry.eq_ignore_ascii_case(AYURVEDA) {
        ayurveda_categories()
    } else {
        generic_categories()
    }
}

/// Mock industry list for the landing page.
pub fn industries() -> Vec<Industry> {
    vec![
        industry(1, "Ayurveda", 227),
        industry(2, "Fashion", 145),
        industry(3, "Electronics", 98),
        industry(4, "Food & Beverage", 76),
        industry(5, "Furniture", 54),
        industry(6, "Sports & Fitness", 63),
    ]
}

/// Mock product list for listing cards.
pub fn products() -> Vec<Product> {
    fn product(
        id: u32,
        name: &str,
        price: f64,
        discount: u8,
        rating: f32,
        reviews: u32,
        category: &str,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            discount,
            rating,
            reviews,
            category: category.to_string(),
            image: derived_image_path(name),
        }
    }

    vec![
        product(1, "Neem Soap", 120.0, 10, 4.4, 86, "Soap"),
        product(2, "Amla Hair Oil", 240.0, 15, 4.6, 132, "Hair Oil"),
        product(3, "Herbal Shampoo", 310.0, 0, 4.2, 57, "Shampoo"),
        product(4, "Aloe Vera Skin Cream", 450.0, 20, 4.7, 203, "Skin Care"),
        product(5, "Triphala Powder", 180.0, 0, 4.3, 41, "Herbal Powder"),
        product(6, "Clove Toothpaste", 95.0, 5, 4.1, 68, "Toothpaste"),
    ]
}

/// Aggregate product count for a degraded categories page.
///
/// Sums the mock category counts for the industry so the headline number
/// is consistent with the mock list rendered beneath it.
pub fn product_count_for(industry: &str) -> u64 {
    categories_for(industry)
        .iter()
        .map(|c| u64::from(c.count))
        .sum()
}
