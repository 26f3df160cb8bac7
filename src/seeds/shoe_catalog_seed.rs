use mongodb::bson::doc;
use std::collections::HashMap;

use crate::database::Store;
use crate::models::{Color, ShoeProduct, SHOE_COLLECTION};

/// Seed the three sample shoes into MongoDB.
/// Only inserts when the collection is empty; any fault is logged and
/// swallowed so startup is never blocked.
pub async fn seed_sample_shoes(store: &Store) {
    if !store.is_available() {
        log::info!("👟 Shoe catalog: store unavailable — skipping seed");
        return;
    }

    let count = match store.count_documents(SHOE_COLLECTION, doc! {}).await {
        Ok(count) => count,
        Err(e) => {
            log::warn!("👟 Shoe catalog: count failed ({}) — skipping seed", e);
            return;
        }
    };

    if count > 0 {
        log::info!(
            "👟 Shoe catalog: {} products already in DB — skipping seed",
            count
        );
        return;
    }

    log::info!("👟 Shoe catalog: seeding sample products into MongoDB...");

    for shoe in sample_shoes() {
        let document = match mongodb::bson::to_document(&shoe) {
            Ok(document) => document,
            Err(e) => {
                log::error!("   ❌ Failed to serialize sample {}: {}", shoe.slug, e);
                continue;
            }
        };

        match store.insert_document(SHOE_COLLECTION, document).await {
            Ok(id) => log::info!("   ✅ Seeded {} ({})", shoe.slug, id),
            Err(e) => log::error!("   ❌ Failed to seed {}: {}", shoe.slug, e),
        }
    }
}

/// The fixed sample catalog
pub fn sample_shoes() -> Vec<ShoeProduct> {
    vec![
        ShoeProduct {
            title: "AirFlex Pro Triple White".into(),
            slug: "airflex-pro-triple-white".into(),
            brand: "SneakPeek".into(),
            description: "A lightweight performance sneaker with breathable mesh and responsive cushioning for all-day comfort.".into(),
            price: 149.0,
            rating: 4.7,
            images: vec![
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1400&auto=format&fit=crop".into(),
                "https://images.unsplash.com/photo-1542291025-59c29d6d7c43?q=80&w=1400&auto=format&fit=crop".into(),
                "https://images.unsplash.com/photo-1542291022-7d5c4f47b1f4?q=80&w=1400&auto=format&fit=crop".into(),
            ],
            colors: vec![
                Color { name: "Triple White".into(), hex: "#ffffff".into() },
                Color { name: "Ice".into(), hex: "#e6f0ff".into() },
            ],
            sizes: vec![7.0, 7.5, 8.0, 8.5, 9.0, 9.5, 10.0, 10.5, 11.0, 12.0],
            stock: HashMap::from([
                ("9".to_string(), 12),
                ("10".to_string(), 8),
                ("11".to_string(), 4),
            ]),
            tags: vec!["running".into(), "lightweight".into(), "white".into()],
        },
        ShoeProduct {
            title: "Runner X Shadow".into(),
            slug: "runner-x-shadow".into(),
            brand: "AeroLab".into(),
            description: "Engineered knit upper with carbon plate midsole for explosive energy return.".into(),
            price: 189.0,
            rating: 4.8,
            images: vec![
                "https://images.unsplash.com/photo-1543508282-6319a3e2621f?q=80&w=1400&auto=format&fit=crop".into(),
                "https://images.unsplash.com/photo-1542291024-54f8c2b590bd?q=80&w=1400&auto=format&fit=crop".into(),
                "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1400&auto=format&fit=crop".into(),
            ],
            colors: vec![
                Color { name: "Shadow".into(), hex: "#111827".into() },
                Color { name: "Volt".into(), hex: "#a7f3d0".into() },
            ],
            sizes: vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0],
            stock: HashMap::from([("9".to_string(), 6), ("10".to_string(), 3)]),
            tags: vec!["race".into(), "carbon".into(), "black".into()],
        },
        ShoeProduct {
            title: "Court Classic 2.0".into(),
            slug: "court-classic-2".into(),
            brand: "RetroWorks".into(),
            description: "Premium leather upper with vintage tooling for an everyday court-inspired look.".into(),
            price: 129.0,
            rating: 4.6,
            images: vec![
                "https://images.unsplash.com/photo-1542291024-94bcdc71f39d?q=80&w=1400&auto=format&fit=crop".into(),
                "https://images.unsplash.com/photo-1520256862855-398228c41684?q=80&w=1400&auto=format&fit=crop".into(),
                "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1400&auto=format&fit=crop".into(),
            ],
            colors: vec![
                Color { name: "Sail".into(), hex: "#f5f5f4".into() },
                Color { name: "Gum".into(), hex: "#d97706".into() },
            ],
            sizes: vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
            stock: HashMap::from([("8".to_string(), 10), ("9".to_string(), 2)]),
            tags: vec!["leather".into(), "casual".into(), "retro".into()],
        },
    ]
}
