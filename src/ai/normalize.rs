//! Turn a model reply into palette colors.
//!
//! Accepted shapes, and nothing else:
//! - a bare array: `["#112233", ...]`
//! - an object with a `colors` array: `{"colors": [...]}`
//! - an object with exactly one key holding an array: `{"palette": [...]}`

use crate::color::Hex;
use crate::error::GenerationError;
use crate::swatches::{MAX_SLOTS, MIN_SLOTS};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ColorPayload {
    Bare(Vec<Value>),
    Keyed(Vec<Value>),
    SingleKey { key: String, values: Vec<Value> },
}

impl ColorPayload {
    pub fn classify(value: Value) -> Result<Self, GenerationError> {
        match value {
            Value::Array(values) => Ok(Self::Bare(values)),
            Value::Object(mut map) => {
                if let Some(colors) = map.remove("colors") {
                    return match colors {
                        Value::Array(values) => Ok(Self::Keyed(values)),
                        other => Err(GenerationError::Unusable(format!(
                            "`colors` is not an array: {other}"
                        ))),
                    };
                }
                if map.len() != 1 {
                    return Err(GenerationError::Unusable(format!(
                        "object with {} keys and no `colors`",
                        map.len()
                    )));
                }
                match map.into_iter().next() {
                    Some((key, Value::Array(values))) => Ok(Self::SingleKey { key, values }),
                    Some((key, _)) => {
                        Err(GenerationError::Unusable(format!("`{key}` is not an array")))
                    }
                    None => Err(GenerationError::Unusable("empty object".into())),
                }
            }
            other => Err(GenerationError::Unusable(format!("unexpected JSON value: {other}"))),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::Bare(values) | Self::Keyed(values) => values,
            Self::SingleKey { values, .. } => values,
        }
    }
}

/// Hex strings from the reply, each given a leading `#` when missing.
pub fn normalize(raw: &str) -> Result<Vec<String>, GenerationError> {
    let json = strip_fences(raw);
    let value: Value =
        serde_json::from_str(json).map_err(|e| GenerationError::Malformed(e.to_string()))?;

    ColorPayload::classify(value)?
        .into_values()
        .into_iter()
        .map(|v| match v {
            Value::String(s) => {
                let s = s.trim();
                Ok(if s.starts_with('#') {
                    s.to_string()
                } else {
                    format!("#{s}")
                })
            }
            other => Err(GenerationError::Unusable(format!("not a hex string: {other}"))),
        })
        .collect()
}

/// Validated colors sized for a palette: fewer than the minimum is an
/// error, extras past the maximum are dropped.
pub fn parse_colors(raw: &str) -> Result<Vec<Hex>, GenerationError> {
    let mut colors = normalize(raw)?
        .iter()
        .map(|s| Hex::parse(s).map_err(|e| GenerationError::Unusable(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    if colors.len() < MIN_SLOTS {
        return Err(GenerationError::Unusable(format!(
            "need at least {MIN_SLOTS} colors, got {}",
            colors.len()
        )));
    }
    colors.truncate(MAX_SLOTS);
    Ok(colors)
}

/// Tolerate replies wrapped in a markdown code fence.
fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_key_gets_hash_prefix() {
        let out = normalize(r#"{"colors": ["FF0000","00FF00"]}"#).unwrap();
        assert_eq!(out, vec!["#FF0000", "#00FF00"]);
    }

    #[test]
    fn bare_array_is_accepted() {
        let out = normalize(r##"["#112233", "445566"]"##).unwrap();
        assert_eq!(out, vec!["#112233", "#445566"]);
    }

    #[test]
    fn single_key_object_is_accepted() {
        let value = serde_json::json!({"palette": ["abcdef", "#123456"]});
        assert!(matches!(
            ColorPayload::classify(value.clone()).unwrap(),
            ColorPayload::SingleKey { ref key, .. } if key == "palette"
        ));
        let out = normalize(&value.to_string()).unwrap();
        assert_eq!(out, vec!["#abcdef", "#123456"]);
    }

    #[test]
    fn colors_key_wins_over_other_keys() {
        let out = normalize(r#"{"name": "dusk", "colors": ["010203", "040506"]}"#).unwrap();
        assert_eq!(out, vec!["#010203", "#040506"]);
    }

    #[test]
    fn other_shapes_are_rejected() {
        for raw in [
            r##"{"a": ["#111111"], "b": ["#222222"]}"##,
            r##"{"colors": "#111111"}"##,
            r##"{"palette": "#111111"}"##,
            r#"{}"#,
            r##""#111111""##,
            r#"42"#,
            r#"[1, 2]"#,
        ] {
            assert!(
                matches!(normalize(raw), Err(GenerationError::Unusable(_))),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            normalize("here are your colors!"),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[test]
    fn code_fences_are_stripped() {
        let raw = "```json\n[\"#000000\", \"#FFFFFF\"]\n```";
        assert_eq!(normalize(raw).unwrap(), vec!["#000000", "#FFFFFF"]);
    }

    #[test]
    fn parse_colors_validates_and_bounds() {
        let hexes = parse_colors(r#"{"colors": ["ff0000", "00FF00"]}"#).unwrap();
        assert_eq!(hexes, vec![Hex::new(255, 0, 0), Hex::new(0, 255, 0)]);

        assert!(matches!(
            parse_colors(r#"["ff0000"]"#),
            Err(GenerationError::Unusable(_))
        ));
        assert!(matches!(
            parse_colors(r#"["ff0000", "not-a-color"]"#),
            Err(GenerationError::Unusable(_))
        ));

        let many: Vec<String> = (0..14).map(|i| format!("{i:06X}")).collect();
        let raw = serde_json::to_string(&many).unwrap();
        assert_eq!(parse_colors(&raw).unwrap().len(), MAX_SLOTS);
    }
}
