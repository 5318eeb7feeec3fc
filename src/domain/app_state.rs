use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::entities::{EnchantForm, EnchantType, Town};
use crate::infra::user_settings::UserSettings;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub form: EnchantForm,
}

impl AppState {
    /// Switching the gear slot invalidates the inputs that depended on the
    /// previous selection: the late-town plant prices, the EXP estimate and
    /// the gather toggle. Muspellium prices and the Izlude/Morroc plants
    /// carry over.
    pub fn set_enchant_type(&mut self, next: EnchantType) {
        self.form.enchant_type = next;
        self.form.set_plant_price(Town::Alberta, "0");
        self.form.set_plant_price(Town::Payon, "0");
        self.form.set_plant_price(Town::Geffen, "0");
        self.form.current_exp.clear();
        self.form.gather_plants = false;
    }

    /// Overwrite the form from an echoed settings payload. Absent fields are
    /// left untouched.
    pub fn apply_settings(&mut self, settings: &UserSettings) {
        if let Some(ty) = settings.enchant_type {
            self.form.enchant_type = ty;
        }
        if let Some(level) = settings.current_level {
            self.form.current_level = fmt_setting_number(level);
        }
        if let Some(exp) = settings.current_exp {
            self.form.current_exp = fmt_setting_number(exp);
        }
        if let Some(smithing) = settings.smithing_level {
            self.form.smithing_level = fmt_setting_number(smithing);
        }
        if let Some(muspe) = &settings.muspe_prices {
            for (idx, price) in muspe.as_array().into_iter().enumerate() {
                if let Some(price) = price {
                    self.form.muspe_prices[idx] = fmt_setting_number(price);
                }
            }
        }
        if let Some(plants) = &settings.plant_prices {
            for (town, price) in Town::PRICED.into_iter().zip(plants.as_array()) {
                if let Some(price) = price {
                    self.form.set_plant_price(town, fmt_setting_number(price));
                }
            }
        }
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.form = persisted.form;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            form: self.form.clone(),
            saved_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        }
    }
}

fn fmt_setting_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub form: EnchantForm,
    /// RFC 3339 stamp of the last save, shown on the settings page.
    #[serde(default)]
    pub saved_at: Option<String>,
}

impl PersistedState {
    pub fn saved_at_time(&self) -> Option<OffsetDateTime> {
        self.saved_at
            .as_deref()
            .and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_switch_resets_dependent_inputs_only() {
        let mut state = AppState::default();
        state.form.muspe_prices[0] = "10".into();
        state.form.set_plant_price(Town::Izlude, "7");
        state.form.set_plant_price(Town::Payon, "50");
        state.form.current_exp = "120".into();
        state.form.gather_plants = true;

        state.set_enchant_type(EnchantType::Armor);

        assert_eq!(state.form.enchant_type, EnchantType::Armor);
        assert_eq!(state.form.plant_price_text(Town::Payon), "0");
        assert_eq!(state.form.plant_price_text(Town::Alberta), "0");
        assert_eq!(state.form.plant_price_text(Town::Geffen), "0");
        assert_eq!(state.form.plant_price_text(Town::Izlude), "7");
        assert_eq!(state.form.muspe_prices[0], "10");
        assert!(state.form.current_exp.is_empty());
        assert!(!state.form.gather_plants);
    }

    #[test]
    fn persisted_round_trip_keeps_the_form() {
        let mut state = AppState::default();
        state.form.smithing_level = "6".into();
        state.form.set_plant_price(Town::Morroc, "12.5");

        let persisted = state.to_persisted();
        assert!(persisted.saved_at.is_some());
        assert!(persisted.saved_at_time().is_some());

        let json = serde_json::to_string(&persisted).unwrap();
        let back: PersistedState = serde_json::from_str(&json).unwrap();

        let mut restored = AppState::default();
        restored.apply_persisted(back);
        assert_eq!(restored.form, state.form);
    }

    #[test]
    fn settings_apply_formats_numbers_plainly() {
        let mut state = AppState::default();
        let mut settings = UserSettings::default();
        settings.current_level = Some(4.0);
        settings.current_exp = Some(12.5);
        state.apply_settings(&settings);
        assert_eq!(state.form.current_level, "4");
        assert_eq!(state.form.current_exp, "12.5");
        // Untouched fields keep their defaults.
        assert_eq!(state.form.smithing_level, "");
    }
}
