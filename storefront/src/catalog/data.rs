//! Built-in product table
//!
//! Ids are stable across releases because saved request lists snapshot them.

use shared::models::{Product, ProductType};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn labels(values: &[&str]) -> Option<Vec<String>> {
    Some(tags(values))
}

pub(super) fn builtin_products() -> Vec<Product> {
    vec![
        // Wreaths
        Product {
            id: 1,
            name: "Metal Wreath".to_string(),
            price: 30.0,
            category: tags(&["Ramadan", "Eid"]),
            product_type: ProductType::Decor,
            variants: labels(&["Gold", "Silver", "Black"]),
            text_options: None,
            description: Some(
                "Elegant metal wreath perfect for Ramadan and Eid celebrations. \
                 Available in multiple finishes."
                    .to_string(),
            ),
        },
        Product {
            id: 2,
            name: "Wooden Wreath - Large".to_string(),
            price: 25.0,
            category: tags(&["Ramadan", "Eid"]),
            product_type: ProductType::Decor,
            variants: None,
            text_options: labels(&["Ramadan", "Eid", "Salam"]),
            description: Some(
                "Large wooden wreath with customizable text options. \
                 Adds a warm, natural touch to your decor."
                    .to_string(),
            ),
        },
        Product {
            id: 3,
            name: "Wooden Wreath - Medium".to_string(),
            price: 20.0,
            category: tags(&["Ramadan", "Eid"]),
            product_type: ProductType::Decor,
            variants: None,
            text_options: labels(&["Ramadan", "Eid", "Salam"]),
            description: Some(
                "Medium-sized wooden wreath, perfect for doors or wall accents.".to_string(),
            ),
        },
        Product {
            id: 4,
            name: "Wooden Wreath - Small".to_string(),
            price: 15.0,
            category: tags(&["Ramadan", "Eid"]),
            product_type: ProductType::Decor,
            variants: None,
            text_options: labels(&["Ramadan", "Eid", "Salam"]),
            description: Some(
                "Small wooden wreath, ideal for smaller spaces or as part of a gallery wall."
                    .to_string(),
            ),
        },
        Product {
            id: 5,
            name: "Wooden Wreath - XSmall".to_string(),
            price: 10.0,
            category: tags(&["Ramadan", "Eid"]),
            product_type: ProductType::Decor,
            variants: None,
            text_options: labels(&["Ramadan", "Eid", "Salam"]),
            description: Some(
                "Extra small wooden wreath, great for distinct accents.".to_string(),
            ),
        },
        // Stands & Centerpieces
        Product {
            id: 6,
            name: "Acrylic Stand".to_string(),
            price: 15.0,
            category: tags(&["Ramadan", "Eid"]),
            product_type: ProductType::Tabletop,
            variants: None,
            text_options: None,
            description: Some(
                "Modern acrylic stand for a sleek, contemporary look.".to_string(),
            ),
        },
        Product {
            id: 7,
            name: "Floral Centerpiece".to_string(),
            price: 20.0,
            category: tags(&["General", "Gifts"]),
            product_type: ProductType::Tabletop,
            variants: None,
            text_options: None,
            description: Some(
                "Beautiful floral centerpiece to brighten up any table setting.".to_string(),
            ),
        },
        Product {
            id: 8,
            name: "Watercolor Wooden Stand".to_string(),
            price: 5.0,
            category: tags(&["Islamic"]),
            product_type: ProductType::Tabletop,
            variants: None,
            text_options: labels(&["Bismillah", "Alhamdulillah", "Allahu Akbar"]),
            description: Some(
                "Artistic watercolor wooden stand with Islamic phrases.".to_string(),
            ),
        },
        // Hangings & Misc
        Product {
            id: 9,
            name: "Two-tier Hanging".to_string(),
            price: 10.0,
            category: tags(&["Islamic"]),
            product_type: ProductType::Wall,
            variants: None,
            text_options: labels(&["Bismillah", "Alhamdulillah"]),
            description: Some(
                "Two-tier wall hanging featuring Islamic calligraphy.".to_string(),
            ),
        },
        Product {
            id: 10,
            name: "Rectangle Dua Hanging".to_string(),
            price: 15.0,
            category: tags(&["Islamic"]),
            product_type: ProductType::Wall,
            variants: None,
            text_options: None,
            description: Some(
                "Rectangular hanging with a powerful Dua, perfect for daily reminders."
                    .to_string(),
            ),
        },
        Product {
            id: 11,
            name: "Keychains".to_string(),
            price: 3.0,
            category: tags(&["Gifts"]),
            product_type: ProductType::Accessory,
            variants: None,
            text_options: None,
            description: Some(
                "Stylish keychains, great for personal use or as small gifts.".to_string(),
            ),
        },
        Product {
            id: 12,
            name: "Bookmarks".to_string(),
            price: 2.0,
            category: tags(&["Gifts"]),
            product_type: ProductType::Accessory,
            variants: None,
            text_options: None,
            description: Some("Elegant bookmarks for your daily reading.".to_string()),
        },
        Product {
            id: 13,
            name: "Ramadan/Eid Cards".to_string(),
            price: 5.0,
            category: tags(&["Ramadan", "Eid", "Gifts"]),
            product_type: ProductType::Paper,
            variants: None,
            text_options: None,
            description: Some(
                "Beautifully designed cards to share the joy of Ramadan and Eid.".to_string(),
            ),
        },
        Product {
            id: 14,
            name: "Tote Bags".to_string(),
            price: 10.0,
            category: tags(&["General", "Gifts"]),
            product_type: ProductType::Accessory,
            variants: None,
            text_options: None,
            description: Some("Eco-friendly tote bags, practical and stylish.".to_string()),
        },
        Product {
            id: 15,
            name: "Pouches".to_string(),
            price: 5.0,
            category: tags(&["General", "Gifts"]),
            product_type: ProductType::Accessory,
            variants: None,
            text_options: None,
            description: Some("Versatile pouches for organizing small items.".to_string()),
        },
    ]
}
