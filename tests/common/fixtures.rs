//! Static query corpora and a small reference catalog used across harnesses.

use super::builders::ProductBuilder;
use fitroom_core::Document;

/// Queries that resolve to a color and a category.
pub const QUERIES_BOTH: &[&str] = &[
    "blue shirts",
    "red t-shirts",
    "black jeans",
    "white polo",
    "green hoodie",
    "multi shirts",
];

/// Queries that contain no lexicon term and take the fallback path.
pub const QUERIES_NEITHER: &[&str] = &["xyz", "flannel", "overcoat", "linen summer", "size (m)"];

/// Filler words known to contain no color variant or category keyword.
pub const NEUTRAL_WORDS: &[&str] = &["casual", "for work", "xl", "summer", "cotton", "linen", "slim"];

/// Eleven products in the catalog's own schema. Ids are `p-01` … `p-11`.
pub fn reference_catalog() -> Vec<Document> {
    vec![
        ProductBuilder::new("Classic Oxford Shirt")
            .id("p-01")
            .primary_color("blue")
            .secondary_color("white")
            .subcategory("Shirts")
            .price(45)
            .build(),
        ProductBuilder::new("Slim Fit Poplin Shirt")
            .id("p-02")
            .primary_color("white")
            .subcategory("Shirts")
            .price(39)
            .build(),
        ProductBuilder::new("Crew Neck Tee")
            .id("p-03")
            .primary_color("red")
            .subcategory("T-shirts & Polos")
            .price(15)
            .build(),
        ProductBuilder::new("Pique Polo")
            .id("p-04")
            .primary_color("navy")
            .secondary_color("blue")
            .subcategory("T-shirts & Polos")
            .price(29)
            .build(),
        ProductBuilder::new("Straight Leg Jeans")
            .id("p-05")
            .primary_color("blue")
            .subcategory("Jeans")
            .price(59)
            .build(),
        ProductBuilder::new("Black Skinny Jeans")
            .id("p-06")
            .primary_color("black")
            .subcategory("Jeans")
            .price(55)
            .build(),
        ProductBuilder::new("Cotton Chinos")
            .id("p-07")
            .primary_color("beige")
            .subcategory("Trousers & Chinos")
            .price(49)
            .build(),
        ProductBuilder::new("Zip Hoodie")
            .id("p-08")
            .primary_color("green")
            .subcategory("Hoodies & Sweatshirts")
            .price(65)
            .build(),
        ProductBuilder::new("Printed Camp Shirt")
            .id("p-09")
            .primary_color("multi")
            .secondary_color("white")
            .subcategory("Shirts")
            .price(42)
            .build(),
        ProductBuilder::new("Wool Overcoat")
            .id("p-10")
            .primary_color("grey")
            .subcategory("Jackets & Coats")
            .price(180)
            .build(),
        ProductBuilder::new("Red Check Flannel Shirt")
            .id("p-11")
            .primary_color("red")
            .secondary_color("black")
            .subcategory("Shirts")
            .price(48)
            .build(),
    ]
}
