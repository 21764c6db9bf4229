use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed id for a client record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Business model of a client account. Selects which derived metrics,
/// funnel shape and table columns the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessType {
    #[serde(rename = "LEAD_GEN")]
    LeadGen,
    #[serde(rename = "ECOMMERCE")]
    Ecommerce,
}

impl BusinessType {
    /// Wire tag as stored in the `clients.business_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::LeadGen => "LEAD_GEN",
            BusinessType::Ecommerce => "ECOMMERCE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LEAD_GEN" => Some(BusinessType::LeadGen),
            "ECOMMERCE" => Some(BusinessType::Ecommerce),
            _ => None,
        }
    }
}

/// Client record from the `clients` table. Links an auth identity
/// (`user_id`) to a named account with a business type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub business_type: BusinessType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for the `clients` table. The id and created_at columns
/// are assigned by the backend.
#[derive(Debug, Clone, Serialize)]
pub struct ClientInsert {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub business_type: BusinessType,
}

/// Admin form input for creating a client account: an auth identity plus
/// a linked client record, in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub business_type: BusinessType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_type_wire_tags() {
        assert_eq!(
            serde_json::to_string(&BusinessType::LeadGen).unwrap(),
            "\"LEAD_GEN\""
        );
        assert_eq!(
            serde_json::to_string(&BusinessType::Ecommerce).unwrap(),
            "\"ECOMMERCE\""
        );
        let parsed: BusinessType = serde_json::from_str("\"ECOMMERCE\"").unwrap();
        assert_eq!(parsed, BusinessType::Ecommerce);
    }

    #[test]
    fn business_type_round_trip_str() {
        for bt in [BusinessType::LeadGen, BusinessType::Ecommerce] {
            assert_eq!(BusinessType::parse(bt.as_str()), Some(bt));
        }
        assert_eq!(BusinessType::parse("SAAS"), None);
    }

    #[test]
    fn client_deserializes_from_rest_row() {
        let json = r#"{
            "id": "7b1c9a7e-52cf-4b38-9c9e-3f4f6f1b2a10",
            "user_id": "b3f9d1a0-1111-4222-8333-444455556666",
            "name": "Loja Aurora",
            "email": "aurora@example.com",
            "business_type": "ECOMMERCE",
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.name, "Loja Aurora");
        assert_eq!(client.business_type, BusinessType::Ecommerce);
    }
}
