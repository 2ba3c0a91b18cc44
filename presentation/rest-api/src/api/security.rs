use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use crate::config::auth_config::AuthConfig;

static AUTH_CONFIG: Lazy<AuthConfig> = Lazy::new(AuthConfig::from_env);

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Claims {
    sub: String,
    email: String,
    exp: u64,
    iat: u64,
}

fn extract_email_from_token(token: &str, secret: &str) -> Result<String, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims.email)
}

/// Bearer token authentication
///
/// The checker yields the `email` claim; the review flow resolves it to a
/// user id through the user lookup port.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub String);

async fn jwt_bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    match extract_email_from_token(&bearer.token, &AUTH_CONFIG.jwt_secret) {
        Ok(email) => Some(email),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
