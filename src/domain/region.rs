// src/domain/region.rs

use crate::domain::text::fold_case;

/// Parishes of the municipality, as (query value, display name).
///
/// Region filtering itself is a substring match on the address, so any
/// address not literally naming one of these never gets a region label.
pub const FREGUESIAS: [(&str, &str); 5] = [
    ("alfena", "Alfena"),
    ("valongo", "Valongo"),
    ("ermesinde", "Ermesinde"),
    ("campo", "Campo"),
    ("sobrado", "Sobrado"),
];

/// First parish named in `address`, in list order.
pub fn infer_region(address: &str) -> Option<&'static str> {
    let folded = fold_case(address);
    FREGUESIAS
        .iter()
        .find(|(slug, _)| folded.contains(slug))
        .map(|(slug, _)| *slug)
}

pub fn region_label(slug: &str) -> Option<&'static str> {
    FREGUESIAS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, label)| *label)
}
