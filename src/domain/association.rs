// src/domain/association.rs

use crate::domain::listing::Listing;
use crate::domain::region::infer_region;
use crate::domain::text::{contains_folded, fold_case};
use crate::source::models::ApiAssociation;
use serde_json::Value;

/// Known `activity_type` values, as (slug, label).
pub const ASSOCIATION_TYPES: [(&str, &str); 6] = [
    ("cultura", "Cultura"),
    ("desporto", "Desporto"),
    ("educacao", "Educação"),
    ("social", "Social"),
    ("recreativo", "Recreativo"),
    ("religioso", "Religioso"),
];

/// A registered association, validated from the wire model.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub social_media: Option<String>,
    pub activity_type: Option<String>,
    /// Raw `"emoji - label"` strings.
    pub categories: Vec<String>,
}

impl Association {
    pub fn from_api(raw: ApiAssociation) -> Result<Self, String> {
        let id = raw.id.ok_or("Missing association id")?;
        let name = raw
            .name
            .filter(|s| !s.trim().is_empty())
            .ok_or("Missing or empty association name")?;

        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        Ok(Association {
            id,
            name,
            description: raw.description.unwrap_or_default(),
            address: raw.address.unwrap_or_default(),
            phone: non_empty(raw.phone),
            email: non_empty(raw.email),
            social_media: raw.social_media.as_ref().and_then(flatten_social_media),
            activity_type: non_empty(raw.activity_type),
            categories: raw.activity_categories.unwrap_or_default(),
        })
    }

    pub fn from_api_list(raw: Vec<ApiAssociation>) -> Vec<Self> {
        raw.into_iter()
            .filter_map(|a| match Association::from_api(a) {
                Ok(assoc) => Some(assoc),
                Err(reason) => {
                    tracing::warn!(%reason, "dropping association");
                    None
                }
            })
            .collect()
    }

    /// Category names without their emoji prefix.
    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| category_label(c)).collect()
    }

    /// At most three labels, with an ellipsis when more exist.
    pub fn categories_summary(&self) -> Option<String> {
        let labels = self.category_labels();
        if labels.is_empty() {
            return None;
        }
        let mut text = labels.iter().take(3).copied().collect::<Vec<_>>().join(", ");
        if labels.len() > 3 {
            text.push_str("...");
        }
        Some(text)
    }

    pub fn type_label(&self) -> &'static str {
        self.activity_type
            .as_deref()
            .and_then(|t| ASSOCIATION_TYPES.iter().find(|(slug, _)| *slug == t.trim()))
            .map(|(_, label)| *label)
            .unwrap_or("Geral")
    }

    pub fn region(&self) -> Option<&'static str> {
        infer_region(&self.address)
    }

    pub fn description_display(&self) -> &str {
        if self.description.trim().is_empty() {
            "Descrição não disponível"
        } else {
            &self.description
        }
    }
}

/// `"🎭 - Teatro"` -> `"Teatro"`; strings without the separator pass through.
pub fn category_label(raw: &str) -> &str {
    match raw.split_once(" - ") {
        Some((_, label)) if !label.trim().is_empty() => label.trim(),
        _ => raw.trim(),
    }
}

fn flatten_social_media(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(map) if !map.is_empty() => {
            let parts: Vec<String> = map
                .iter()
                .filter_map(|(network, handle)| match handle {
                    Value::String(h) if !h.trim().is_empty() => Some(format!("{network}: {h}")),
                    _ => None,
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

impl Listing for Association {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn location(&self) -> &str {
        &self.address
    }

    fn association_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn association_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn category_label(&self) -> String {
        self.category_labels().join(" ")
    }

    /// Exact match on the structured type, else substring of any category.
    fn matches_category(&self, value: &str) -> bool {
        let typed = self
            .activity_type
            .as_deref()
            .map(|t| fold_case(t.trim()) == value)
            .unwrap_or(false);
        typed || self.categories.iter().any(|c| contains_folded(c, value))
    }
}
