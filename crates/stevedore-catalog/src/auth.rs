//! Access-token acquisition against the catalog's auth endpoint.

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::error::CatalogError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

/// Mints an access token for the configured client credentials.
///
/// The token is acquired once per run and reused for every upsert call.
pub(crate) async fn access_token(
    http: &reqwest::Client,
    config: &CatalogConfig,
) -> Result<String, CatalogError> {
    let url = format!("{}/auth/access_token", config.base_url);

    let response = http
        .post(&url)
        .json(&TokenRequest {
            client_id: &config.client_id,
            client_secret: &config.client_secret,
        })
        .send()
        .await
        .map_err(|e| CatalogError::ConnectionFailed {
            url: url.clone(),
            source: e,
        })?;

    if !response.status().is_success() {
        return Err(CatalogError::AuthenticationFailed {
            message: format!(
                "{}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            ),
        });
    }

    let token: TokenResponse =
        response
            .json()
            .await
            .map_err(|e| CatalogError::AuthenticationFailed {
                message: format!("invalid token response: {e}"),
            })?;

    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_wire_shape() {
        let request = TokenRequest {
            client_id: "id",
            client_secret: "secret",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"clientId":"id","clientSecret":"secret"}"#);
    }

    #[test]
    fn test_token_response_decodes() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"accessToken": "tok", "expiresIn": 3600}"#).unwrap();
        assert_eq!(response.access_token, "tok");
    }
}
