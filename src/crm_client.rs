use crate::errors::AppError;
use serde_json::json;
use std::time::Duration;

/// Client for the HubSpot CRM API.
///
/// Pets are stored as a custom CRM object; contacts are the standard
/// HubSpot contact object.
#[derive(Clone)]
pub struct HubSpotClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Contact fields fetched from the CRM.
#[derive(Debug, Clone, PartialEq)]
pub struct CrmContact {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl HubSpotClient {
    /// Creates a new `HubSpotClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the HubSpot API.
    /// * `token` - The private-app token for authentication.
    pub fn new(base_url: String, token: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create HubSpot client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Creates a pet record in the CRM and returns its external id.
    ///
    /// The CRM stores every property as text, so `age` is stringified on the
    /// wire even though it is numeric locally.
    pub async fn create_pet(
        &self,
        name: &str,
        age: i32,
        breed: &str,
        contact_id: &str,
    ) -> Result<String, AppError> {
        let url = format!("{}/crm/v3/objects/pets", self.base_url);
        tracing::info!("Creating pet '{}' in HubSpot", name);

        let body = json!({
            "properties": {
                "name": name,
                "age": age.to_string(),
                "breed": breed,
                "contactId": contact_id,
            }
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Failed to create pet: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "HubSpot pet creation failed {}: {}",
                status, error_text
            )));
        }

        let response_data: serde_json::Value = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse pet creation response: {}", e))
        })?;

        let pet_id = extract_id(&response_data).ok_or_else(|| {
            tracing::warn!("Unexpected HubSpot response format: {:?}", response_data);
            AppError::ExternalApiError("Pet creation response missing 'id' field".to_string())
        })?;

        tracing::info!("Pet created in HubSpot: {}", pet_id);
        Ok(pet_id)
    }

    /// Fetches a contact from the CRM by its external id.
    pub async fn get_contact(&self, contact_id: &str) -> Result<CrmContact, AppError> {
        let url = format!(
            "{}/crm/v3/objects/contacts/{}?properties=firstname,lastname,email",
            self.base_url, contact_id
        );
        tracing::info!("Fetching contact {} from HubSpot", contact_id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("HubSpot request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "HubSpot returned {}: {}",
                status, error_text
            )));
        }

        let data: serde_json::Value = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse contact response: {}", e))
        })?;

        let id = extract_id(&data).ok_or_else(|| {
            AppError::ExternalApiError("Contact response missing 'id' field".to_string())
        })?;

        let field = |name: &str| {
            data.get("properties")
                .and_then(|p| p.get(name))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(CrmContact {
            id,
            firstname: field("firstname"),
            lastname: field("lastname"),
            email: field("email"),
        })
    }
}

/// Pulls the record id out of a CRM response body.
///
/// HubSpot normally returns `id` as a string, but numeric ids have been seen
/// on older portals, so both are accepted.
fn extract_id(data: &serde_json::Value) -> Option<String> {
    if let Some(id) = data.get("id").and_then(|i| i.as_str()) {
        return Some(id.to_string());
    }
    if let Some(id) = data.get("id").and_then(|i| i.as_i64()) {
        return Some(id.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HubSpotClient::new("https://example.com".to_string(), "token".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn extract_id_accepts_string_and_number() {
        assert_eq!(
            extract_id(&json!({"id": "abc123"})),
            Some("abc123".to_string())
        );
        assert_eq!(extract_id(&json!({"id": 456})), Some("456".to_string()));
        assert_eq!(extract_id(&json!({"name": "no id"})), None);
    }
}
