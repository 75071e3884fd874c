//! Wire-to-domain normalization.
//!
//! Maps the backend's partial records into the uniform display shapes:
//! ids become 1-based sequence positions when absent, images fall back
//! to a path derived from the name, and missing counts are synthesized.

use ayumart_core::catalog::{derived_image_path, synthesize_count, Category, Industry, Product};

use crate::api::{RawListing, RawProduct};

/// Category shown when a product record carries no category name.
const UNCATEGORIZED: &str = "General";

/// Normalize one listing record into a [`Category`].
///
/// `position` is the record's 0-based index in the response; it becomes
/// the 1-based id when the backend supplied none.
pub fn category(raw: RawListing, position: usize) -> Category {
    Category {
        id: raw.id.unwrap_or(position as u32 + 1),
        image: listing_image(raw.image.as_deref(), &raw.name),
        count: raw.count.unwrap_or_else(synthesize_count),
        name: raw.name,
    }
}

/// Normalize one listing record into an [`Industry`].
pub fn industry(raw: RawListing, position: usize) -> Industry {
    Industry {
        id: raw.id.unwrap_or(position as u32 + 1),
        image: listing_image(raw.image.as_deref(), &raw.name),
        count: raw.count.unwrap_or_else(synthesize_count),
        name: raw.name,
    }
}

/// Normalize one raw product record into a [`Product`].
///
/// - price is clamped to `>= 0`
/// - discount is clamped into `0..=100`
/// - rating is the mean of nested review ratings, clamped into
///   `0.0..=5.0`, `0.0` when unreviewed
/// - image is the first `product_images[]` URL, else derived from the
///   name
pub fn product(raw: RawProduct, position: usize) -> Product {
    let reviews = raw.reviews.len() as u32;
    let rating = if raw.reviews.is_empty() {
        0.0
    } else {
        let sum: f32 = raw.reviews.iter().map(|r| r.rating).sum();
        (sum / raw.reviews.len() as f32).clamp(0.0, 5.0)
    };

    let image = raw
        .product_images
        .iter()
        .map(|i| i.url.trim())
        .find(|url| !url.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| derived_image_path(&raw.name));

    Product {
        id: raw.id.unwrap_or(position as u32 + 1),
        price: raw.price.max(0.0),
        discount: raw.discount.unwrap_or(0).clamp(0, 100) as u8,
        rating,
        reviews,
        category: raw.category.unwrap_or_else(|| UNCATEGORIZED.to_string()),
        image,
        name: raw.name,
    }
}

/// Normalize a whole listing response into categories.
pub fn categories(raws: Vec<RawListing>) -> Vec<Category> {
    raws.into_iter().enumerate().map(|(i, r)| category(r, i)).collect()
}

/// Normalize a whole listing response into industries.
pub fn industries(raws: Vec<RawListing>) -> Vec<Industry> {
    raws.into_iter().enumerate().map(|(i, r)| industry(r, i)).collect()
}

/// Normalize a whole product response.
pub fn products(raws: Vec<RawProduct>) -> Vec<Product> {
    raws.into_iter().enumerate().map(|(i, r)| product(r, i)).collect()
}

fn listing_image(explicit: Option<&str>, name: &str) -> String {
    match explicit {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => derived_image_path(name),
    }
}

#[cfg(test)]
mod tests {
    use ayumart_core::catalog::{SYNTH_COUNT_MAX, SYNTH_COUNT_MIN};

    use super::*;
    use crate::api::{RawProductImage, RawReview};

    fn raw_listing(name: &str) -> RawListing {
        RawListing {
            id: None,
            name: name.to_string(),
            image: None,
            count: None,
        }
    }

    #[test]
    fn missing_ids_become_one_based_sequence() {
        let list = categories(vec![raw_listing("Soap"), raw_listing("Shampoo")]);
        assert_eq!(list[0].id, 1);
        assert_eq!(list[1].id, 2);
    }

    #[test]
    fn backend_id_is_kept_when_present() {
        let mut raw = raw_listing("Soap");
        raw.id = Some(77);
        assert_eq!(category(raw, 0).id, 77);
    }

    #[test]
    fn missing_image_is_derived_from_name() {
        let cat = category(raw_listing("Hair Oil"), 0);
        assert_eq!(cat.image, "/assets/categories/hair-oil.jpg");
    }

    #[test]
    fn blank_image_url_counts_as_missing() {
        let mut raw = raw_listing("Soap");
        raw.image = Some("   ".to_string());
        assert_eq!(category(raw, 0).image, "/assets/categories/soap.jpg");
    }

    #[test]
    fn explicit_image_url_is_kept() {
        let mut raw = raw_listing("Soap");
        raw.image = Some("https://cdn.example.com/soap.png".to_string());
        assert_eq!(category(raw, 0).image, "https://cdn.example.com/soap.png");
    }

    #[test]
    fn missing_count_is_synthesized_in_range() {
        for _ in 0..50 {
            let cat = category(raw_listing("Soap"), 0);
            assert!((SYNTH_COUNT_MIN..=SYNTH_COUNT_MAX).contains(&cat.count));
        }
    }

    #[test]
    fn backend_count_is_kept_verbatim() {
        let mut raw = raw_listing("Soap");
        raw.count = Some(3);
        assert_eq!(category(raw, 0).count, 3);
    }

    fn raw_product(name: &str) -> RawProduct {
        RawProduct {
            id: None,
            name: name.to_string(),
            price: 100.0,
            discount: None,
            category: None,
            product_images: Vec::new(),
            reviews: Vec::new(),
        }
    }

    #[test]
    fn product_rating_is_mean_of_reviews() {
        let mut raw = raw_product("Neem Soap");
        raw.reviews = vec![
            RawReview { rating: 4.0 },
            RawReview { rating: 5.0 },
            RawReview { rating: 3.0 },
        ];
        let p = product(raw, 0);
        assert!((p.rating - 4.0).abs() < f32::EPSILON);
        assert_eq!(p.reviews, 3);
    }

    #[test]
    fn unreviewed_product_rates_zero() {
        let p = product(raw_product("Neem Soap"), 0);
        assert_eq!(p.rating, 0.0);
        assert_eq!(p.reviews, 0);
    }

    #[test]
    fn out_of_range_review_mean_is_clamped() {
        let mut raw = raw_product("Neem Soap");
        raw.reviews = vec![RawReview { rating: 9.0 }];
        assert_eq!(product(raw, 0).rating, 5.0);
    }

    #[test]
    fn discount_is_clamped_into_percentage_range() {
        let mut raw = raw_product("Neem Soap");
        raw.discount = Some(250);
        assert_eq!(product(raw, 0).discount, 100);

        let mut raw = raw_product("Neem Soap");
        raw.discount = Some(-5);
        assert_eq!(product(raw, 0).discount, 0);
    }

    #[test]
    fn negative_price_is_floored_at_zero() {
        let mut raw = raw_product("Neem Soap");
        raw.price = -12.5;
        assert_eq!(product(raw, 0).price, 0.0);
    }

    #[test]
    fn first_product_image_wins() {
        let mut raw = raw_product("Neem Soap");
        raw.product_images = vec![
            RawProductImage { url: "".to_string() },
            RawProductImage {
                url: "https://cdn.example.com/a.jpg".to_string(),
            },
            RawProductImage {
                url: "https://cdn.example.com/b.jpg".to_string(),
            },
        ];
        assert_eq!(product(raw, 0).image, "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn imageless_product_derives_from_name() {
        assert_eq!(
            product(raw_product("Neem Soap"), 0).image,
            "/assets/categories/neem-soap.jpg"
        );
    }

    #[test]
    fn uncategorized_product_gets_placeholder_category() {
        assert_eq!(product(raw_product("Neem Soap"), 0).category, "General");
    }
}
