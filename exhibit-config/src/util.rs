//! Serde helpers shared by the settings models.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Accepts either integer milliseconds (`800`) or a humantime string
/// (`"800ms"`, `"5s"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Millis(u64),
    Text(String),
}

pub fn parse_duration_str(raw: &str) -> Result<Duration, humantime::DurationError> {
    let trimmed = raw.trim();
    if let Ok(ms) = trimmed.parse::<u64>() {
        return Ok(Duration::from_millis(ms));
    }
    humantime::parse_duration(trimmed)
}

pub mod duration {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawDuration::deserialize(deserializer)? {
            RawDuration::Millis(ms) => Ok(Duration::from_millis(ms)),
            RawDuration::Text(text) => parse_duration_str(&text).map_err(|err| {
                de::Error::custom(format!("invalid duration {text:?}: {err}"))
            }),
        }
    }

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*value).to_string())
    }
}

pub mod duration_opt {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawDuration>::deserialize(deserializer)?
            .map(|raw| match raw {
                RawDuration::Millis(ms) => Ok(Duration::from_millis(ms)),
                RawDuration::Text(text) => parse_duration_str(&text).map_err(|err| {
                    de::Error::custom(format!("invalid duration {text:?}: {err}"))
                }),
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers_are_milliseconds() {
        assert_eq!(parse_duration_str("800").unwrap(), Duration::from_millis(800));
    }

    #[test]
    fn humantime_units_are_accepted() {
        assert_eq!(parse_duration_str("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(
            parse_duration_str(" 250ms ").unwrap(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_duration_str("soon").is_err());
    }
}
