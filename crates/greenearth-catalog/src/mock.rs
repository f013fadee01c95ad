//! Static catalog used whenever a remote read fails.

use greenearth_core::{Category, Plant};

use crate::normalize::{with_all_category, PlantFields};

struct MockPlant {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    category: &'static str,
    price: f64,
    description: &'static str,
}

const MOCK_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Trees"),
    ("1", "Fruit Trees"),
    ("2", "Flowering Trees"),
    ("3", "Shade Trees"),
];

const MOCK_PLANTS: &[MockPlant] = &[
    MockPlant {
        id: "101",
        name: "Mango Tree",
        image: "https://images.unsplash.com/photo-1524592714635-61b8f8b62f1e?q=80&w=1200&auto=format&fit=crop",
        category: "Fruit Tree",
        price: 500.0,
        description: "A fast-growing tropical tree that produces delicious, juicy mangoes during summer.",
    },
    MockPlant {
        id: "102",
        name: "Guava Tree",
        image: "https://images.unsplash.com/photo-1582971280450-31c0dcfc05f4?q=80&w=1200&auto=format&fit=crop",
        category: "Fruit Tree",
        price: 500.0,
        description: "Hardy and fragrant, bears sweet guavas rich in vitamin C.",
    },
    MockPlant {
        id: "103",
        name: "Bougainvillea",
        image: "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?q=80&w=1200&auto=format&fit=crop",
        category: "Flowering Tree",
        price: 350.0,
        description: "Vibrant flowering climber that brightens fences and pergolas.",
    },
    MockPlant {
        id: "104",
        name: "Neem",
        image: "https://images.unsplash.com/photo-1594633312681-425c1b469f9f?q=80&w=1200&auto=format&fit=crop",
        category: "Shade Tree",
        price: 450.0,
        description: "Evergreen shade tree known for air-purifying medicinal leaves.",
    },
];

/// Category id → keyword matched against a mock plant's category.
const CATEGORY_KEYWORDS: &[(&str, &str)] = &[("1", "Fruit"), ("2", "Flower"), ("3", "Shade")];

impl MockPlant {
    fn to_plant(&self) -> Plant {
        Plant {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            image: self.image.to_owned(),
            category: self.category.to_owned(),
            price: self.price,
            description: self.description.to_owned(),
        }
    }
}

/// Every mock plant.
#[must_use]
pub fn plants() -> Vec<Plant> {
    MOCK_PLANTS.iter().map(MockPlant::to_plant).collect()
}

/// Mock plants for `category_id`.
///
/// Known ids map to a keyword that must appear (case-insensitively) in the
/// plant's category. Unknown ids return every mock plant.
#[must_use]
pub fn plants_for_category(category_id: &str) -> Vec<Plant> {
    let keyword = CATEGORY_KEYWORDS
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, keyword)| keyword.to_lowercase());

    MOCK_PLANTS
        .iter()
        .filter(|plant| {
            keyword
                .as_deref()
                .map_or(true, |kw| plant.category.to_lowercase().contains(kw))
        })
        .map(MockPlant::to_plant)
        .collect()
}

/// The mock plant with `id`, as detail fields.
#[must_use]
pub fn plant(id: &str) -> Option<PlantFields> {
    MOCK_PLANTS
        .iter()
        .find(|plant| plant.id == id)
        .map(|plant| PlantFields::from(&plant.to_plant()))
}

/// Mock categories with the synthetic "all" entry first. The mock's own
/// "all" row is replaced by the synthetic one.
#[must_use]
pub fn categories() -> Vec<Category> {
    with_all_category(
        MOCK_CATEGORIES
            .iter()
            .map(|(id, name)| Category {
                id: (*id).to_owned(),
                name: (*name).to_owned(),
            })
            .collect(),
    )
}
