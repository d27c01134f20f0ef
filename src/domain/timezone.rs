//! Timezone resolution

use crate::error::{Result, TagError};
use chrono_tz::Tz;
use tracing::{debug, warn};

/// Zone name that explicitly selects the local system timezone
pub const LOCAL_ZONE_NAME: &str = "Local";

/// Resolve a configured zone name.
///
/// An empty name (or `Local`) selects the local system timezone. Any other
/// name must be a known IANA zone; unknown names are an error rather than a
/// silent fallback.
pub fn resolve_timezone(name: &str) -> Result<Tz> {
    if name.is_empty() || name == LOCAL_ZONE_NAME {
        return Ok(local_timezone());
    }

    name.parse::<Tz>()
        .map_err(|_| TagError::TimezoneResolution(name.to_string()))
}

/// Detect the local system timezone.
///
/// Checks `TZ` first, then the operating system configuration, and falls
/// back to UTC when neither names a known zone.
pub fn local_timezone() -> Tz {
    if let Some(tz) = std::env::var("TZ").ok().and_then(|v| zone_from_tz_env(&v)) {
        debug!(zone = tz.name(), "using timezone from TZ");
        return tz;
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => match name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!(zone = %name, "unknown system timezone, falling back to UTC");
                Tz::UTC
            }
        },
        Err(e) => {
            warn!(error = %e, "could not detect system timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Interpret a `TZ` value: a set but empty value means UTC
fn zone_from_tz_env(value: &str) -> Option<Tz> {
    let name = value.strip_prefix(':').unwrap_or(value);
    if name.is_empty() {
        return Some(Tz::UTC);
    }
    name.parse::<Tz>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_zone() {
        assert_eq!(resolve_timezone("UTC").unwrap(), Tz::UTC);
        assert_eq!(
            resolve_timezone("America/Los_Angeles").unwrap(),
            Tz::America__Los_Angeles
        );
    }

    #[test]
    fn test_resolve_empty_is_local() {
        assert_eq!(resolve_timezone("").unwrap(), local_timezone());
        assert_eq!(resolve_timezone("Local").unwrap(), local_timezone());
    }

    #[test]
    fn test_resolve_unknown_zone_fails() {
        match resolve_timezone("Mars/Olympus_Mons") {
            Err(TagError::TimezoneResolution(name)) => assert_eq!(name, "Mars/Olympus_Mons"),
            other => panic!("Expected TimezoneResolution error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve_timezone("utc/invalid").is_err());
        assert!(resolve_timezone("local").is_err());
    }

    #[test]
    fn test_tz_env_parsing() {
        assert_eq!(zone_from_tz_env("Europe/Berlin"), Some(Tz::Europe__Berlin));
        assert_eq!(zone_from_tz_env(":Asia/Tokyo"), Some(Tz::Asia__Tokyo));
        assert_eq!(zone_from_tz_env(""), Some(Tz::UTC));
        assert_eq!(zone_from_tz_env("Not/AZone"), None);
    }
}
