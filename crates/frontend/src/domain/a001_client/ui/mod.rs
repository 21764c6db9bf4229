pub mod admin;

pub use admin::AdminClientsPage;

use contracts::domain::a001_client::BusinessType;

/// Display label for a business type
pub fn business_type_label(business_type: BusinessType) -> &'static str {
    match business_type {
        BusinessType::LeadGen => "Geração de Leads",
        BusinessType::Ecommerce => "E-commerce",
    }
}

/// Options for a business-type select, as (wire value, label) pairs
pub fn business_type_options() -> Vec<(String, String)> {
    [BusinessType::LeadGen, BusinessType::Ecommerce]
        .into_iter()
        .map(|bt| (bt.as_str().to_string(), business_type_label(bt).to_string()))
        .collect()
}
