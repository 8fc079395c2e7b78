use crate::{CatalogId, CatalogItem};

/// (name, category, spacing ft, height ft, cost)
const TABLE: &[(&str, &str, f64, f64, f64)] = &[
    // Trees - Deciduous
    ("Oak Tree (White)", "Trees - Deciduous", 30.0, 60.0, 150.0),
    ("Oak Tree (Red)", "Trees - Deciduous", 30.0, 55.0, 145.0),
    ("Maple Tree (Sugar)", "Trees - Deciduous", 25.0, 50.0, 120.0),
    ("Maple Tree (Red)", "Trees - Deciduous", 25.0, 45.0, 115.0),
    ("Birch Tree (White)", "Trees - Deciduous", 20.0, 40.0, 90.0),
    ("Birch Tree (River)", "Trees - Deciduous", 20.0, 45.0, 95.0),
    ("Willow Tree (Weeping)", "Trees - Deciduous", 35.0, 50.0, 110.0),
    ("Ash Tree", "Trees - Deciduous", 25.0, 55.0, 125.0),
    ("Elm Tree", "Trees - Deciduous", 30.0, 60.0, 140.0),
    ("Beech Tree", "Trees - Deciduous", 28.0, 50.0, 130.0),
    ("Poplar Tree", "Trees - Deciduous", 20.0, 70.0, 100.0),
    ("Linden Tree", "Trees - Deciduous", 25.0, 50.0, 120.0),
    // Trees - Evergreen
    ("Pine Tree (White)", "Trees - Evergreen", 20.0, 80.0, 100.0),
    ("Pine Tree (Scotch)", "Trees - Evergreen", 20.0, 60.0, 95.0),
    ("Pine Tree (Loblolly)", "Trees - Evergreen", 20.0, 90.0, 105.0),
    ("Spruce Tree (Colorado)", "Trees - Evergreen", 20.0, 70.0, 110.0),
    ("Spruce Tree (Norway)", "Trees - Evergreen", 20.0, 80.0, 115.0),
    ("Fir Tree (Douglas)", "Trees - Evergreen", 20.0, 85.0, 120.0),
    ("Hemlock Tree", "Trees - Evergreen", 18.0, 70.0, 105.0),
    ("Arborvitae (Green)", "Trees - Evergreen", 10.0, 40.0, 45.0),
    ("Cypress Tree (Leyland)", "Trees - Evergreen", 15.0, 60.0, 75.0),
    // Shrubs - Deciduous
    ("Boxwood (American)", "Shrubs - Deciduous", 3.0, 4.0, 25.0),
    ("Hydrangea (Panicle)", "Shrubs - Deciduous", 4.0, 6.0, 35.0),
    ("Hydrangea (Bigleaf)", "Shrubs - Deciduous", 4.0, 5.0, 30.0),
    ("Lilac (Common)", "Shrubs - Deciduous", 5.0, 8.0, 40.0),
    ("Lilac (Japanese)", "Shrubs - Deciduous", 5.0, 10.0, 45.0),
    ("Azalea (Pink)", "Shrubs - Deciduous", 3.0, 4.0, 30.0),
    ("Azalea (Red)", "Shrubs - Deciduous", 3.0, 4.0, 30.0),
    ("Rhododendron (Purple)", "Shrubs - Deciduous", 4.0, 5.0, 40.0),
    ("Viburnum (American)", "Shrubs - Deciduous", 4.0, 6.0, 35.0),
    ("Weigela (Red)", "Shrubs - Deciduous", 4.0, 5.0, 28.0),
    ("Forsythia (Golden)", "Shrubs - Deciduous", 5.0, 6.0, 32.0),
    ("Butterfly Bush", "Shrubs - Deciduous", 5.0, 8.0, 38.0),
    // Shrubs - Evergreen
    ("Juniper (Blue Star)", "Shrubs - Evergreen", 4.0, 5.0, 28.0),
    ("Juniper (Skyrocket)", "Shrubs - Evergreen", 2.0, 15.0, 35.0),
    ("Holly (American)", "Shrubs - Evergreen", 4.0, 6.0, 40.0),
    ("Yew (Japanese)", "Shrubs - Evergreen", 3.0, 4.0, 30.0),
    ("Privet (Green)", "Shrubs - Evergreen", 2.0, 6.0, 20.0),
    ("Euonymus (Green)", "Shrubs - Evergreen", 3.0, 4.0, 25.0),
    // Perennials & Flowers
    ("Rose (Hybrid Tea)", "Perennials & Flowers", 2.0, 3.0, 15.0),
    ("Rose (Floribunda)", "Perennials & Flowers", 2.0, 3.0, 12.0),
    ("Tulip (Red)", "Perennials & Flowers", 1.0, 2.0, 5.0),
    ("Tulip (Yellow)", "Perennials & Flowers", 1.0, 2.0, 5.0),
    ("Daisy (Shasta)", "Perennials & Flowers", 1.5, 2.5, 8.0),
    ("Sunflower (Tall)", "Perennials & Flowers", 2.0, 6.0, 10.0),
    ("Lavender (Purple)", "Perennials & Flowers", 2.0, 3.0, 12.0),
    ("Peony (Pink)", "Perennials & Flowers", 3.0, 3.0, 20.0),
    ("Hibiscus (Red)", "Perennials & Flowers", 4.0, 8.0, 45.0),
    ("Daylily (Orange)", "Perennials & Flowers", 2.0, 2.5, 10.0),
    ("Coneflower (Purple)", "Perennials & Flowers", 1.5, 3.0, 10.0),
    ("Black-eyed Susan", "Perennials & Flowers", 1.5, 2.0, 8.0),
    ("Aster (Fall)", "Perennials & Flowers", 2.0, 3.0, 9.0),
    ("Hosta (Blue)", "Perennials & Flowers", 2.0, 2.0, 12.0),
    ("Sedum (Autumn Joy)", "Perennials & Flowers", 1.5, 2.0, 10.0),
    // Ground Cover
    ("Ivy (English)", "Ground Cover", 1.0, 0.5, 6.0),
    ("Ivy (Boston)", "Ground Cover", 1.0, 0.5, 7.0),
    ("Moss Phlox", "Ground Cover", 1.0, 0.3, 8.0),
    ("Creeping Thyme", "Ground Cover", 1.0, 0.25, 8.0),
    ("Sedum (Dragon Blood)", "Ground Cover", 1.0, 0.5, 7.0),
    ("Groundcover (Ajuga)", "Ground Cover", 1.0, 0.4, 6.0),
    // Hardscape Materials
    ("Mulch (Black)", "Hardscape Materials", 100.0, 0.25, 50.0),
    ("Mulch (Brown)", "Hardscape Materials", 100.0, 0.25, 50.0),
    ("River Rock (Small)", "Hardscape Materials", 100.0, 0.1, 75.0),
    ("River Rock (Large)", "Hardscape Materials", 100.0, 0.15, 100.0),
    ("Wood Chips (Pine)", "Hardscape Materials", 100.0, 0.25, 60.0),
    ("Wood Chips (Cedar)", "Hardscape Materials", 100.0, 0.25, 80.0),
    ("Gravel (Pea)", "Hardscape Materials", 100.0, 0.2, 40.0),
    ("Gravel (Crushed)", "Hardscape Materials", 100.0, 0.2, 45.0),
    ("Bark Chips (Shredded)", "Hardscape Materials", 100.0, 0.25, 65.0),
    ("Sand (Play)", "Hardscape Materials", 100.0, 0.2, 35.0),
    ("Topsoil", "Hardscape Materials", 100.0, 0.25, 40.0),
    ("Compost (Organic)", "Hardscape Materials", 100.0, 0.25, 55.0),
    // Ornamental Grasses
    ("Fountain Grass", "Ornamental Grasses", 3.0, 4.0, 15.0),
    ("Ornamental Grass (Miscanthus)", "Ornamental Grasses", 3.0, 5.0, 18.0),
    ("Pampas Grass", "Ornamental Grasses", 4.0, 8.0, 22.0),
    ("Feather Reed Grass", "Ornamental Grasses", 3.0, 4.0, 16.0),
    // Vines & Climbers
    ("Clematis (Purple)", "Vines & Climbers", 2.0, 8.0, 25.0),
    ("Honeysuckle (Gold)", "Vines & Climbers", 3.0, 10.0, 20.0),
    ("Grape Vine", "Vines & Climbers", 4.0, 12.0, 30.0),
    ("Climbing Hydrangea", "Vines & Climbers", 3.0, 8.0, 35.0),
];

pub(crate) fn entries() -> impl Iterator<Item = CatalogItem> {
    TABLE
        .iter()
        .enumerate()
        .map(|(index, &(name, category, spacing, height, cost))| {
            CatalogItem::new(CatalogId(index as u32 + 1), name, category, spacing, height, cost)
        })
}
