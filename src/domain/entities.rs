use serde::{Deserialize, Serialize};

/// The six towns with an enchantment anvil, in game-table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Town {
    Prontera,
    Izlude,
    Morroc,
    Alberta,
    Payon,
    Geffen,
}

impl Town {
    pub const ALL: [Town; 6] = [
        Town::Prontera,
        Town::Izlude,
        Town::Morroc,
        Town::Alberta,
        Town::Payon,
        Town::Geffen,
    ];

    /// Towns that consume a plant ingredient, i.e. everyone but Prontera.
    pub const PRICED: [Town; 5] = [
        Town::Izlude,
        Town::Morroc,
        Town::Alberta,
        Town::Payon,
        Town::Geffen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Town::Prontera => "Prontera",
            Town::Izlude => "Izlude",
            Town::Morroc => "Morroc",
            Town::Alberta => "Alberta",
            Town::Payon => "Payon",
            Town::Geffen => "Geffen",
        }
    }

    pub fn has_plant(&self) -> bool {
        !matches!(self, Town::Prontera)
    }

    /// Index into plant-price arrays; `None` for Prontera.
    pub fn priced_index(&self) -> Option<usize> {
        Town::PRICED.iter().position(|town| town == self)
    }
}

/// Which gear slot is being enchanted. Picks the plant labels per town and
/// the accent theme; it never changes the arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnchantType {
    #[default]
    #[serde(rename = "wep")]
    Weapon,
    #[serde(rename = "armor")]
    Armor,
    #[serde(rename = "acc")]
    Accessory,
}

impl EnchantType {
    pub const ALL: [EnchantType; 3] = [
        EnchantType::Weapon,
        EnchantType::Armor,
        EnchantType::Accessory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnchantType::Weapon => "Weapon",
            EnchantType::Armor => "Armor",
            EnchantType::Accessory => "Accessory",
        }
    }

    /// Short code used by the hosted settings API and the select element.
    pub fn wire_code(&self) -> &'static str {
        match self {
            EnchantType::Weapon => "wep",
            EnchantType::Armor => "armor",
            EnchantType::Accessory => "acc",
        }
    }

    pub fn from_wire(code: &str) -> Option<EnchantType> {
        EnchantType::ALL
            .into_iter()
            .find(|ty| ty.wire_code() == code)
    }
}

/// Per-town crafting constants: which Muspellium tier the anvil takes, how
/// many units of each ingredient one stone consumes, and how many taps a
/// single unit of enchant EXP costs there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub town: Town,
    pub muspe_tier: u8,
    pub muspe_units_per_tap: u32,
    pub plant_units_per_tap: u32,
    pub taps_per_exp_unit: f64,
}

pub const LOCATIONS: [Location; 6] = [
    Location {
        town: Town::Prontera,
        muspe_tier: 1,
        muspe_units_per_tap: 30,
        plant_units_per_tap: 0,
        taps_per_exp_unit: 1.0,
    },
    Location {
        town: Town::Izlude,
        muspe_tier: 1,
        muspe_units_per_tap: 5,
        plant_units_per_tap: 1,
        taps_per_exp_unit: 1.0,
    },
    Location {
        town: Town::Morroc,
        muspe_tier: 2,
        muspe_units_per_tap: 8,
        plant_units_per_tap: 1,
        taps_per_exp_unit: 0.5,
    },
    Location {
        town: Town::Alberta,
        muspe_tier: 3,
        muspe_units_per_tap: 6,
        plant_units_per_tap: 3,
        taps_per_exp_unit: 0.25,
    },
    Location {
        town: Town::Payon,
        muspe_tier: 4,
        muspe_units_per_tap: 8,
        plant_units_per_tap: 4,
        taps_per_exp_unit: 0.125,
    },
    Location {
        town: Town::Geffen,
        muspe_tier: 4,
        muspe_units_per_tap: 18,
        plant_units_per_tap: 7,
        taps_per_exp_unit: 0.0625,
    },
];

pub const MUSPE_TIERS: usize = 4;

/// Cumulative EXP needed to finish each enchant level. Index is the level;
/// 19 is the highest selectable level, 20 the last reachable target.
pub const REQUIRED_EXP: [u32; 20] = [
    0, 10, 30, 60, 100, 150, 250, 400, 600, 850, 1150, 1550, 2050, 2800, 3800, 5050, 6650, 8300,
    10300, 12550,
];

pub const MAX_SELECTABLE_LEVEL: u8 = 19;
pub const MAX_LEVEL: u8 = 20;

/// Market label of the plant each town's anvil consumes for the given gear
/// slot. Prontera has no plant ingredient.
pub fn plant_name(enchant_type: EnchantType, town: Town) -> Option<&'static str> {
    let name = match (enchant_type, town) {
        (_, Town::Prontera) => return None,
        (EnchantType::Weapon, Town::Izlude) => "Shattering Shroom",
        (EnchantType::Weapon, Town::Morroc) => "Gold Flower",
        (EnchantType::Weapon, Town::Alberta) => "Water Seeking Flower",
        (EnchantType::Weapon, Town::Payon) => "Grim Grass",
        (EnchantType::Weapon, Town::Geffen) => "Moonflower",
        (EnchantType::Armor, Town::Izlude) => "Tough Vine",
        (EnchantType::Armor, Town::Morroc) => "Scorched Mushroom",
        (EnchantType::Armor, Town::Alberta) => "Sea Gem Grass",
        (EnchantType::Armor, Town::Payon) => "Ochre Seedling",
        (EnchantType::Armor, Town::Geffen) => "Praying Flower",
        (EnchantType::Accessory, Town::Izlude) => "Arcane Flower",
        (EnchantType::Accessory, Town::Morroc) => "Withered Chastetree",
        (EnchantType::Accessory, Town::Alberta) => "Firefly Grass",
        (EnchantType::Accessory, Town::Payon) => "Quiet Flower",
        (EnchantType::Accessory, Town::Geffen) => "Crystal Rose",
    };
    Some(name)
}

pub fn muspe_tier_label(tier: u8) -> &'static str {
    match tier {
        1 => "Muspellium Lvl 1 (Izlude/Prontera)",
        2 => "Muspellium Lvl 2 (Morroc)",
        3 => "Muspellium Lvl 3 (Alberta)",
        _ => "Muspellium Lvl 4 (Payon/Geffen)",
    }
}

/// Snapshot of everything the calculator form holds. Numeric fields stay as
/// the raw text the user typed; the engine parses them defensively on every
/// pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnchantForm {
    pub enchant_type: EnchantType,
    pub current_level: String,
    pub current_exp: String,
    pub smithing_level: String,
    /// Unit prices per Muspellium tier, index = tier - 1.
    pub muspe_prices: [String; 4],
    /// Unit prices per priced town, `Town::PRICED` order.
    pub plant_prices: [String; 5],
    pub gather_plants: bool,
}

impl Default for EnchantForm {
    fn default() -> Self {
        Self {
            enchant_type: EnchantType::Weapon,
            current_level: "1".to_string(),
            current_exp: String::new(),
            smithing_level: String::new(),
            muspe_prices: std::array::from_fn(|_| "0".to_string()),
            plant_prices: std::array::from_fn(|_| "0".to_string()),
            gather_plants: false,
        }
    }
}

impl EnchantForm {
    pub fn muspe_price_text(&self, tier: u8) -> &str {
        &self.muspe_prices[usize::from(tier.saturating_sub(1)).min(3)]
    }

    pub fn plant_price_text(&self, town: Town) -> &str {
        town.priced_index()
            .map(|idx| self.plant_prices[idx].as_str())
            .unwrap_or("0")
    }

    pub fn set_plant_price(&mut self, town: Town, value: impl Into<String>) {
        if let Some(idx) = town.priced_index() {
            self.plant_prices[idx] = value.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priced_towns_skip_prontera() {
        assert_eq!(Town::Prontera.priced_index(), None);
        assert_eq!(Town::Izlude.priced_index(), Some(0));
        assert_eq!(Town::Geffen.priced_index(), Some(4));
        assert!(!Town::Prontera.has_plant());
    }

    #[test]
    fn locations_cover_all_towns_in_order() {
        let towns: Vec<Town> = LOCATIONS.iter().map(|loc| loc.town).collect();
        assert_eq!(towns, Town::ALL.to_vec());
    }

    #[test]
    fn enchant_type_wire_round_trip() {
        for ty in EnchantType::ALL {
            assert_eq!(EnchantType::from_wire(ty.wire_code()), Some(ty));
        }
        assert_eq!(EnchantType::from_wire("shield"), None);
    }

    #[test]
    fn plant_names_exist_for_every_priced_town() {
        for ty in EnchantType::ALL {
            assert_eq!(plant_name(ty, Town::Prontera), None);
            for town in Town::PRICED {
                assert!(plant_name(ty, town).is_some());
            }
        }
    }

    #[test]
    fn default_form_is_level_one_with_empty_optionals() {
        let form = EnchantForm::default();
        assert_eq!(form.current_level, "1");
        assert!(form.current_exp.is_empty());
        assert!(form.smithing_level.is_empty());
        assert!(!form.gather_plants);
    }
}
