//! Presentation-only reading of the credential's `role` claim.
//!
//! The credential is decoded without verifying its signature. The role read
//! here decides which dashboard the UI lands on and nothing more; every data
//! request is authorized by the backend against the bearer credential itself.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use shared_types::Role;

use crate::guard::{
    ADMIN_DASHBOARD_PATH, DASHBOARD_PATH, DOCTOR_DASHBOARD_PATH, PATIENT_DASHBOARD_PATH,
};

#[derive(Deserialize)]
struct Claims {
    role: Option<serde_json::Value>,
}

fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let trimmed = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .ok()
}

/// Read the `role` claim from the credential's payload segment.
///
/// Returns `None` for anything that is not a three-part token with a
/// base64-encoded JSON object carrying a known role string. Never panics.
pub fn decode_presentation_role(token: &str) -> Option<Role> {
    let mut parts = token.split('.');
    let (_header, payload) = (parts.next()?, parts.next()?);
    let bytes = decode_segment(payload)?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    claims.role?.as_str().and_then(Role::from_claim)
}

/// Dashboard a user lands on after login or when visiting `/dashboard`.
pub fn landing_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => ADMIN_DASHBOARD_PATH,
        Some(Role::Staff) => DOCTOR_DASHBOARD_PATH,
        Some(Role::Patient) => PATIENT_DASHBOARD_PATH,
        None => DASHBOARD_PATH,
    }
}

/// `landing_route(decode_presentation_role(token))`
pub fn landing_route_for(token: &str) -> &'static str {
    let route = landing_route(decode_presentation_role(token));
    if route == DASHBOARD_PATH {
        tracing::debug!("Credential carries no recognised role, using generic dashboard");
    }
    route
}

#[cfg(test)]
pub(crate) fn token_with_payload(payload: &str) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.c2ln",
        URL_SAFE_NO_PAD.encode(payload.as_bytes())
    )
}
