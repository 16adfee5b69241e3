use serde::{Deserialize, Serialize};

/// Image payload of `POST /convert_image`, accepted as query or JSON body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertImagePayload {
    #[serde(rename = "Hax_Value")]
    pub hax_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertImageResponse {
    pub converted_image_url: String,
}
