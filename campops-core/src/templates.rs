//! Built-in packing templates. Catalog entries are compiled into the binary:
//! no persistence, no user edits, no versioning.

use serde::{Deserialize, Serialize};

use crate::trip::TripType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateItem {
    pub name: String,
    pub category: String,
    pub quantity: Option<i64>,
    pub note: Option<String>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackingTemplate {
    pub id: String,
    pub name: String,
    pub trip_type: TripType,
    pub items: Vec<TemplateItem>,
}

fn item(category: &str, name: &str, sort_order: i64) -> TemplateItem {
    TemplateItem {
        name: name.to_string(),
        category: category.to_string(),
        quantity: None,
        note: None,
        sort_order: Some(sort_order),
    }
}

fn car_camping_basic() -> PackingTemplate {
    PackingTemplate {
        id: "car_camping_basic".to_string(),
        name: "Car Camping (Basic)".to_string(),
        trip_type: TripType::CarCamping,
        items: vec![
            item("Shelter", "Tent", 10),
            item("Shelter", "Footprint / Ground tarp", 20),
            item("Shelter", "Stakes", 30),
            item("Shelter", "Mallet", 40),
            item("Sleep", "Sleeping bag", 10),
            item("Sleep", "Sleeping pad", 20),
            item("Sleep", "Pillow", 30),
            item("Kitchen", "Stove", 10),
            item("Kitchen", "Fuel", 20),
            item("Kitchen", "Lighter / matches", 30),
            item("Kitchen", "Pot / pan", 40),
            item("Kitchen", "Mug / bottle", 50),
            item("Kitchen", "Utensils", 60),
            item("Water", "Water (jugs/bottles)", 10),
            item("Safety", "First aid kit", 10),
            item("Safety", "Headlamp", 20),
            item("Safety", "Extra batteries", 30),
            item("Hygiene", "Sunscreen", 10),
            item("Hygiene", "Bug spray", 20),
            item("Hygiene", "Toothbrush/toothpaste", 30),
            item("Tools", "Trash bags", 10),
            item("Tools", "Multi-tool", 20),
        ],
    }
}

fn backpacking_basic() -> PackingTemplate {
    PackingTemplate {
        id: "backpacking_basic".to_string(),
        name: "Backpacking (Overnight Basic)".to_string(),
        trip_type: TripType::Backpacking,
        items: vec![
            item("Shelter", "Tent / tarp", 10),
            item("Shelter", "Stakes", 20),
            item("Sleep", "Quilt / sleeping bag", 10),
            item("Sleep", "Sleeping pad", 20),
            item("Kitchen", "Stove", 10),
            item("Kitchen", "Fuel", 20),
            item("Kitchen", "Pot", 30),
            item("Kitchen", "Spoon", 40),
            item("Water", "Water bottles (2L capacity)", 10),
            item("Water", "Water filter", 20),
            item("Safety", "Headlamp", 10),
            item("Safety", "First aid kit", 20),
            item("Safety", "Navigation (offline maps)", 30),
            item("Clothing", "Rain shell", 10),
            item("Clothing", "Warm layer", 20),
            item("Food", "Meals / snacks", 10),
        ],
    }
}

pub fn builtin_templates() -> Vec<PackingTemplate> {
    vec![car_camping_basic(), backpacking_basic()]
}

/// The single template associated with a trip type, or `None` when the type
/// has no catalog entry.
pub fn template_for_trip_type(trip_type: TripType) -> Option<PackingTemplate> {
    builtin_templates()
        .into_iter()
        .find(|template| template.trip_type == trip_type)
}
