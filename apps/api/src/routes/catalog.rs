//! Static listings: business types and demo payloads.

use axum::Json;
use serde::Serialize;
use serde_json::Map;

use crate::models::business::{keys, BUSINESS_TYPES};
use crate::models::review::DemoExample;

#[derive(Debug, Serialize)]
pub struct BusinessTypesResponse {
    pub business_types: Vec<&'static str>,
    pub display_names: Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct DemoResponse {
    pub demo_examples: Vec<DemoExample>,
}

/// GET /api/business-types
pub async fn handle_business_types() -> Json<BusinessTypesResponse> {
    let display_names = BUSINESS_TYPES
        .iter()
        .map(|(key, label)| (key.to_string(), (*label).into()))
        .collect();

    Json(BusinessTypesResponse {
        business_types: keys().collect(),
        display_names,
    })
}

/// GET /api/demo
/// Fixed example payloads for exercising the UI.
pub async fn handle_demo() -> Json<DemoResponse> {
    Json(DemoResponse {
        demo_examples: demo_examples(),
    })
}

fn demo_examples() -> Vec<DemoExample> {
    vec![
        DemoExample {
            business_name: "Joe's Restaurant".to_string(),
            business_type: "restaurant".to_string(),
            review_text: "Great food and excellent service! The staff was very friendly and the atmosphere was perfect for our date night. Will definitely be back!".to_string(),
            rating: 5,
        },
        DemoExample {
            business_name: "Tipton Auto Repair".to_string(),
            business_type: "auto-repair".to_string(),
            review_text: "Fixed my car quickly and at a fair price. The mechanic explained everything clearly.".to_string(),
            rating: 4,
        },
        DemoExample {
            business_name: "Covington Dental Care".to_string(),
            business_type: "dental".to_string(),
            review_text: "Clean office and professional staff. The dentist was gentle and thorough.".to_string(),
            rating: 5,
        },
    ]
}
