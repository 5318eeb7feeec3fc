//! Domain logic for the enchantment calculator lives here.

pub mod app_state;
pub mod entities;
pub mod estimate;

pub use app_state::{AppState, PersistedState};
pub use entities::{
    muspe_tier_label, plant_name, EnchantForm, EnchantType, Location, Town, LOCATIONS,
    MUSPE_TIERS, REQUIRED_EXP,
};
pub use estimate::{
    estimate, fmt_whole_if_no_decimals, is_provided, number_or_zero, EnchantEstimate, TownRow,
};
