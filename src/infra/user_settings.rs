//! Placeholder user-settings endpoint, ported from the hosted site.
//!
//! There is no account system yet, so nothing is persisted server-side: the
//! handler normalizes whatever the caller sent, merges it over the fixed
//! defaults and echoes the result so clients can confirm the payload shape.
//! Malformed bodies get a 400 status but still a complete default payload,
//! so callers never need a second parser for the failure path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::EnchantType;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MuspePrices {
    #[serde(rename = "1")]
    pub tier1: Option<f64>,
    #[serde(rename = "2")]
    pub tier2: Option<f64>,
    #[serde(rename = "3")]
    pub tier3: Option<f64>,
    #[serde(rename = "4")]
    pub tier4: Option<f64>,
}

impl MuspePrices {
    pub fn as_array(&self) -> [Option<f64>; 4] {
        [self.tier1, self.tier2, self.tier3, self.tier4]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantPrices {
    pub izlude: Option<f64>,
    pub morroc: Option<f64>,
    pub alberta: Option<f64>,
    pub payon: Option<f64>,
    pub geffen: Option<f64>,
}

impl PlantPrices {
    pub fn as_array(&self) -> [Option<f64>; 5] {
        [
            self.izlude,
            self.morroc,
            self.alberta,
            self.payon,
            self.geffen,
        ]
    }
}

/// All-optional mirror of the calculator inputs, camelCase on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub enchant_type: Option<EnchantType>,
    pub current_level: Option<f64>,
    pub current_exp: Option<f64>,
    pub smithing_level: Option<f64>,
    pub muspe_prices: Option<MuspePrices>,
    pub plant_prices: Option<PlantPrices>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub settings: UserSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EchoStatus {
    Ok,
    BadRequest,
}

impl EchoStatus {
    pub fn code(&self) -> u16 {
        match self {
            EchoStatus::Ok => 200,
            EchoStatus::BadRequest => 400,
        }
    }
}

pub fn default_settings() -> UserSettings {
    UserSettings {
        enchant_type: Some(EnchantType::Weapon),
        current_level: Some(1.0),
        current_exp: Some(0.0),
        smithing_level: Some(0.0),
        muspe_prices: Some(MuspePrices {
            tier1: Some(0.0),
            tier2: Some(0.0),
            tier3: Some(0.0),
            tier4: Some(0.0),
        }),
        plant_prices: Some(PlantPrices {
            izlude: Some(0.0),
            morroc: Some(0.0),
            alberta: Some(0.0),
            payon: Some(0.0),
            geffen: Some(0.0),
        }),
    }
}

fn default_response() -> SettingsResponse {
    SettingsResponse {
        authenticated: false,
        user_id: None,
        settings: default_settings(),
    }
}

pub fn get() -> SettingsResponse {
    default_response()
}

/// The POST handler: parse, normalize, merge, echo.
pub fn post(body: &str) -> (EchoStatus, SettingsResponse) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (EchoStatus::BadRequest, default_response());
    };
    let Some(incoming) = normalize_settings(&value) else {
        return (EchoStatus::BadRequest, default_response());
    };

    let merged = merge_with_defaults(&incoming);
    (
        EchoStatus::Ok,
        SettingsResponse {
            authenticated: false,
            user_id: None,
            settings: merged,
        },
    )
}

/// Accepts finite numbers and numeric strings; everything else is dropped.
fn normalize_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(num) => num.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Non-object bodies are rejected outright; unknown or invalid fields inside
/// an object degrade to `None`.
pub fn normalize_settings(body: &Value) -> Option<UserSettings> {
    let obj = body.as_object()?;

    let enchant_type = obj
        .get("enchantType")
        .and_then(Value::as_str)
        .and_then(EnchantType::from_wire);

    let muspe_prices = obj
        .get("muspePrices")
        .and_then(Value::as_object)
        .map(|prices| MuspePrices {
            tier1: normalize_number(prices.get("1")),
            tier2: normalize_number(prices.get("2")),
            tier3: normalize_number(prices.get("3")),
            tier4: normalize_number(prices.get("4")),
        });

    let plant_prices = obj
        .get("plantPrices")
        .and_then(Value::as_object)
        .map(|prices| PlantPrices {
            izlude: normalize_number(prices.get("izlude")),
            morroc: normalize_number(prices.get("morroc")),
            alberta: normalize_number(prices.get("alberta")),
            payon: normalize_number(prices.get("payon")),
            geffen: normalize_number(prices.get("geffen")),
        });

    Some(UserSettings {
        enchant_type,
        current_level: normalize_number(obj.get("currentLevel")),
        current_exp: normalize_number(obj.get("currentExp")),
        smithing_level: normalize_number(obj.get("smithingLevel")),
        muspe_prices,
        plant_prices,
    })
}

/// Field-level merge: incoming values win, defaults fill every gap, nested
/// price maps merge entry by entry.
pub fn merge_with_defaults(incoming: &UserSettings) -> UserSettings {
    let defaults = default_settings();
    let default_muspe = defaults.muspe_prices.unwrap_or_default();
    let default_plants = defaults.plant_prices.unwrap_or_default();
    let muspe = incoming.muspe_prices.unwrap_or_default();
    let plants = incoming.plant_prices.unwrap_or_default();

    UserSettings {
        enchant_type: incoming.enchant_type.or(defaults.enchant_type),
        current_level: incoming.current_level.or(defaults.current_level),
        current_exp: incoming.current_exp.or(defaults.current_exp),
        smithing_level: incoming.smithing_level.or(defaults.smithing_level),
        muspe_prices: Some(MuspePrices {
            tier1: muspe.tier1.or(default_muspe.tier1),
            tier2: muspe.tier2.or(default_muspe.tier2),
            tier3: muspe.tier3.or(default_muspe.tier3),
            tier4: muspe.tier4.or(default_muspe.tier4),
        }),
        plant_prices: Some(PlantPrices {
            izlude: plants.izlude.or(default_plants.izlude),
            morroc: plants.morroc.or(default_plants.morroc),
            alberta: plants.alberta.or(default_plants.alberta),
            payon: plants.payon.or(default_plants.payon),
            geffen: plants.geffen.or(default_plants.geffen),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_returns_default_payload() {
        let response = get();
        assert!(!response.authenticated);
        assert!(response.user_id.is_none());
        assert_eq!(response.settings, default_settings());
    }

    #[test]
    fn malformed_json_is_a_400_with_defaults() {
        let (status, response) = post("{not json");
        assert_eq!(status, EchoStatus::BadRequest);
        assert_eq!(status.code(), 400);
        assert_eq!(response.settings, default_settings());
    }

    #[test]
    fn non_object_body_is_a_400_with_defaults() {
        for body in ["[1, 2]", "\"hello\"", "42", "null"] {
            let (status, response) = post(body);
            assert_eq!(status, EchoStatus::BadRequest, "body: {body}");
            assert_eq!(response.settings, default_settings());
        }
    }

    #[test]
    fn empty_object_echoes_the_defaults() {
        let (status, response) = post("{}");
        assert_eq!(status, EchoStatus::Ok);
        assert_eq!(response.settings, default_settings());
    }

    #[test]
    fn partial_payload_merges_over_defaults() {
        let body = json!({
            "enchantType": "armor",
            "currentLevel": 5,
            "muspePrices": { "2": 150 }
        })
        .to_string();

        let (status, response) = post(&body);
        assert_eq!(status, EchoStatus::Ok);
        let settings = response.settings;
        assert_eq!(settings.enchant_type, Some(EnchantType::Armor));
        assert_eq!(settings.current_level, Some(5.0));
        // Untouched scalars fall back to defaults.
        assert_eq!(settings.current_exp, Some(0.0));
        // Nested maps merge per entry.
        let muspe = settings.muspe_prices.unwrap();
        assert_eq!(muspe.tier1, Some(0.0));
        assert_eq!(muspe.tier2, Some(150.0));
    }

    #[test]
    fn invalid_fields_degrade_to_defaults_not_errors() {
        let body = json!({
            "enchantType": "shield",
            "currentLevel": "not a number",
            "currentExp": " 42 ",
            "plantPrices": { "payon": true, "geffen": "12.5" }
        })
        .to_string();

        let (status, response) = post(&body);
        assert_eq!(status, EchoStatus::Ok);
        let settings = response.settings;
        assert_eq!(settings.enchant_type, Some(EnchantType::Weapon));
        assert_eq!(settings.current_level, Some(1.0));
        assert_eq!(settings.current_exp, Some(42.0));
        let plants = settings.plant_prices.unwrap();
        assert_eq!(plants.payon, Some(0.0));
        assert_eq!(plants.geffen, Some(12.5));
    }

    #[test]
    fn response_wire_shape_is_camel_case() {
        let value = serde_json::to_value(get()).unwrap();
        assert!(value.get("authenticated").is_some());
        assert!(value.get("userId").is_some());
        let settings = value.get("settings").unwrap();
        assert_eq!(settings["enchantType"], "wep");
        assert_eq!(settings["muspePrices"]["1"], 0.0);
        assert_eq!(settings["plantPrices"]["izlude"], 0.0);
    }
}
