//! Shared User-Agent string for catalog HTTP clients.
//!
//! Single source for project URL and UA format so address, layer, and order
//! traffic stay consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce/kartklient";

/// Default User-Agent for all catalog service requests (identifies the tool).
#[must_use]
pub(crate) fn default_client_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("kartklient/{version} (geodata-catalog-client; +{PROJECT_UA_URL})")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The UA must carry the project URL and the crate version. The test uses
    /// this module's private PROJECT_UA_URL intentionally so the assertion
    /// stays in sync with the single source of truth.
    #[test]
    fn test_ua_contains_project_url_and_version() {
        let ua = default_client_user_agent();
        assert!(ua.contains(PROJECT_UA_URL), "UA must contain project URL");
        assert_eq!(
            env!("CARGO_PKG_VERSION"),
            ua.strip_prefix("kartklient/")
                .and_then(|s| s.split(' ').next())
                .expect("UA has version"),
            "UA must contain crate version"
        );
    }

    #[test]
    fn test_ua_identifies_tool() {
        let ua = default_client_user_agent();
        assert!(
            ua.contains("geodata-catalog-client"),
            "UA must identify as geodata-catalog-client: {ua}"
        );
    }
}
