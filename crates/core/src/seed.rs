//! Fixed initial post set loaded whenever a store is created with seed data.

use crate::wire::Post;
use chrono::{DateTime, TimeZone, Utc};

fn seeded_at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// Returns the four seed posts, ids 1 to 4, in creation order.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            owner: "admin".into(),
            created_at: seeded_at(2025, 10, 24, 0, 0),
            title: "Atardecer en la ciudad".into(),
            image_ref: "img-seed/city-sunset.jpg".into(),
            description: Some("Un atardecer naranja en la ciudad con rascacielos.".into()),
            external_url: None,
            tags: tags(&["ciudad", "atardecer", "paisaje"]),
            alt_text: Some("Foto de un atardecer en la ciudad".into()),
        },
        Post {
            id: 2,
            owner: "admin".into(),
            created_at: seeded_at(2025, 10, 24, 0, 1),
            title: "Café y estudio".into(),
            image_ref: "img-seed/coffee-study.jpg".into(),
            description: Some("Escritorio con una laptop, café y apuntes.".into()),
            external_url: None,
            tags: tags(&["estudio", "café", "productividad"]),
            alt_text: Some("Taza de café junto a una laptop".into()),
        },
        Post {
            id: 3,
            owner: "tania".into(),
            created_at: seeded_at(2025, 10, 23, 0, 0),
            title: "Paisaje de montaña".into(),
            image_ref: "img-seed/mountain-landscape.jpg".into(),
            description: Some("Montañas nevadas y un lago tranquilo.".into()),
            external_url: None,
            tags: tags(&["montaña", "naturaleza", "viaje"]),
            alt_text: Some("Montañas nevadas frente a un lago".into()),
        },
        Post {
            id: 4,
            owner: "tania".into(),
            created_at: seeded_at(2025, 10, 22, 0, 0),
            title: "Setup minimalista".into(),
            image_ref: "img-seed/minimal-setup.jpg".into(),
            description: Some("Escritorio minimalista con monitor y accesorios.".into()),
            external_url: None,
            tags: tags(&["setup", "minimalismo", "tecnología"]),
            alt_text: Some("Escritorio minimalista con monitor".into()),
        },
    ]
}
