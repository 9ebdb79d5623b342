//! Built-in content shown on the showcase page.

use crate::{AssetVisual, Catalog, Item, Result, VisualRegistry};

pub const CORPORATE_EVENTS: &str = "Corporate Events";
pub const GENERAL_EVENTS: &str = "General Events";
pub const EXHIBITIONS: &str = "Exhibitions";

const ASSETS: [(&str, &str, &str, &str, [f32; 3]); 5] = [
    (
        "hangar",
        "Hangar",
        "Spacious and versatile structures for large events",
        "#e74c3c",
        [2.5, 2.0, 2.0],
    ),
    (
        "octonorm",
        "Octonorm",
        "Modular exhibition systems for professional displays",
        "#3498db",
        [2.0, 2.5, 2.0],
    ),
    (
        "stalls",
        "Stalls",
        "Customizable booth solutions for exhibitions and trade shows",
        "#2ecc71",
        [2.0, 2.0, 2.5],
    ),
    (
        "furniture",
        "Furniture",
        "High-quality event furniture for comfort and style",
        "#f39c12",
        [2.2, 2.2, 2.2],
    ),
    (
        "flex-printing",
        "Flex Printing",
        "Premium quality printing services for event branding",
        "#9b59b6",
        [2.3, 1.8, 1.8],
    ),
];

/// The event assets cycled through by the 3D carousel. Each item's visual key
/// is its id.
pub fn event_assets() -> Result<Catalog> {
    Catalog::new(
        ASSETS
            .iter()
            .map(|(id, title, description, _, _)| Item::new(*id, *title, *description, *id))
            .collect(),
    )
}

/// Visuals for every entry of [`event_assets`].
pub fn asset_visuals() -> Result<VisualRegistry> {
    let mut registry = VisualRegistry::new();
    for (id, title, _, color, scale) in ASSETS {
        registry.register(id, AssetVisual::new(title, color, scale))?;
    }
    Ok(registry)
}

pub fn services() -> Result<Catalog> {
    Catalog::new(vec![
        Item::new(
            "general-events",
            GENERAL_EVENTS,
            "From weddings to birthday celebrations, we create memorable experiences for all your special occasions.",
            "celebration",
        ),
        Item::new(
            "corporate-events",
            CORPORATE_EVENTS,
            "Professional event management for conferences, product launches, team building, and corporate gatherings.",
            "briefcase",
        ),
        Item::new(
            "exhibitions",
            EXHIBITIONS,
            "Comprehensive exhibition solutions including booth design, setup, and management for trade shows and expos.",
            "venue",
        ),
    ])
}

/// Portfolio entries. The visual key is the entry's service category, so the
/// gallery can be grouped with [`Catalog::by_visual_key`].
pub fn gallery() -> Result<Catalog> {
    let entries = [
        ("corporate-conference", "Corporate Conference", CORPORATE_EVENTS),
        ("wedding-celebration", "Wedding Celebration", GENERAL_EVENTS),
        ("trade-show-booth", "Trade Show Booth", EXHIBITIONS),
        ("product-launch", "Product Launch", CORPORATE_EVENTS),
        ("birthday-party", "Birthday Party", GENERAL_EVENTS),
        ("art-exhibition", "Art Exhibition", EXHIBITIONS),
    ];

    Catalog::new(
        entries
            .into_iter()
            .map(|(id, title, category)| Item::new(id, title, category, category))
            .collect(),
    )
}
