use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One advertising-performance observation: a single day for a single
/// campaign / ad set / ad combination, as stored in the `campaign_data`
/// table. Column names on the wire are the upstream Portuguese ones.
///
/// Rows are immutable once fetched; the dashboard replaces the whole
/// collection on refetch. The counters past `page_views` only apply to one
/// of the two business types and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRow {
    pub date: NaiveDate,
    #[serde(rename = "nome_campanha")]
    pub campaign_name: String,
    #[serde(rename = "nome_conjunto_anuncios")]
    pub ad_set_name: String,
    #[serde(rename = "nome_anuncio")]
    pub ad_name: String,
    #[serde(rename = "investimento")]
    pub spend: f64,
    #[serde(rename = "impressoes")]
    pub impressions: i64,
    #[serde(rename = "cliques")]
    pub clicks: i64,
    #[serde(rename = "visualizacoes_pagina")]
    pub page_views: i64,
    #[serde(default)]
    pub leads: Option<i64>,
    #[serde(rename = "adicoes_carrinho", default)]
    pub cart_adds: Option<i64>,
    #[serde(rename = "inicios_checkout", default)]
    pub checkouts_started: Option<i64>,
    #[serde(rename = "compras", default)]
    pub purchases: Option<i64>,
    #[serde(rename = "faturamento", default)]
    pub revenue: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_lead_gen_row() {
        let json = r#"{
            "date": "2024-01-01",
            "nome_campanha": "Campanha A",
            "nome_conjunto_anuncios": "Conjunto 1",
            "nome_anuncio": "Anuncio X",
            "investimento": 100.0,
            "impressoes": 3000,
            "cliques": 50,
            "visualizacoes_pagina": 40,
            "leads": 10
        }"#;
        let row: CampaignRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.campaign_name, "Campanha A");
        assert_eq!(row.spend, 100.0);
        assert_eq!(row.leads, Some(10));
        // e-commerce counters are simply absent on a lead-gen row
        assert_eq!(row.purchases, None);
        assert_eq!(row.revenue, None);
    }

    #[test]
    fn deserializes_ecommerce_row_with_nulls() {
        let json = r#"{
            "date": "2024-02-10",
            "nome_campanha": "Campanha B",
            "nome_conjunto_anuncios": "Conjunto 2",
            "nome_anuncio": "Anuncio Y",
            "investimento": 80.5,
            "impressoes": 2000,
            "cliques": 30,
            "visualizacoes_pagina": 25,
            "leads": null,
            "adicoes_carrinho": 12,
            "inicios_checkout": 6,
            "compras": 3,
            "faturamento": 450.0
        }"#;
        let row: CampaignRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.leads, None);
        assert_eq!(row.cart_adds, Some(12));
        assert_eq!(row.revenue, Some(450.0));
    }

    #[test]
    fn serializes_with_upstream_column_names() {
        let row = CampaignRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            campaign_name: "Campanha A".into(),
            ad_set_name: "Conjunto 1".into(),
            ad_name: "Anuncio X".into(),
            spend: 10.0,
            impressions: 100,
            clicks: 5,
            page_views: 4,
            leads: Some(1),
            cart_adds: None,
            checkouts_started: None,
            purchases: None,
            revenue: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("nome_campanha").is_some());
        assert!(json.get("investimento").is_some());
        assert!(json.get("campaign_name").is_none());
    }
}
