use serde::Deserialize;
use serde_json::Value;

// GET /api/activities
//  └── activities[]
//       ├── id, name, description
//       ├── date            (YYYY-MM-DD, sometimes with a time part)
//       ├── location
//       ├── association_id, association_name
//       └── activity_type
//
// GET /api/associations
//  └── associations[]
//       ├── id, name, description
//       ├── address, phone, email, social_media
//       ├── activity_type
//       └── activity_categories[]   ("🎭 - Teatro")

#[derive(Debug, Deserialize)]
pub struct ActivitiesEnvelope {
    #[serde(default)]
    pub activities: Vec<ApiActivity>,
}

#[derive(Debug, Deserialize)]
pub struct AssociationsEnvelope {
    #[serde(default)]
    pub associations: Vec<ApiAssociation>,
}

/// `/api/associations/{id}/activities` has been seen both bare and wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActivitiesPayload {
    Wrapped(ActivitiesEnvelope),
    Bare(Vec<ApiActivity>),
}

impl ActivitiesPayload {
    pub fn into_activities(self) -> Vec<ApiActivity> {
        match self {
            ActivitiesPayload::Wrapped(env) => env.activities,
            ActivitiesPayload::Bare(list) => list,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AssociationEnvelope {
    pub association: ApiAssociation,
}

/// `/api/associations/{id}` likewise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AssociationPayload {
    Wrapped(AssociationEnvelope),
    Bare(ApiAssociation),
}

impl AssociationPayload {
    pub fn into_association(self) -> ApiAssociation {
        match self {
            AssociationPayload::Wrapped(env) => env.association,
            AssociationPayload::Bare(assoc) => assoc,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiActivity {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub association_id: Option<i64>,
    pub association_name: Option<String>,
    pub activity_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiAssociation {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    // Free-form on the backend: a string, or an object of network -> handle.
    pub social_media: Option<Value>,
    pub activity_type: Option<String>,
    pub activity_categories: Option<Vec<String>>,
}
