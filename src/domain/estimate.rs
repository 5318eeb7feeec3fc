//! Cost, taps and stamina derivation for the enchantment calculator.
//!
//! Pure and total: every input arrives as free text, malformed numbers fall
//! back to zero and the function never fails. The UI re-runs it on each
//! keystroke with a fresh snapshot of the form.

use super::entities::{
    EnchantForm, Location, Town, LOCATIONS, MAX_LEVEL, MAX_SELECTABLE_LEVEL, MUSPE_TIERS,
    REQUIRED_EXP,
};

/// One results-table row. Estimate fields are present only while an estimate
/// is active; craftable only while a smithing level gates the row. Prontera's
/// stamina fields always read "-".
#[derive(Clone, Debug, PartialEq)]
pub struct TownRow {
    pub town: Town,
    pub cost_per_tap: f64,
    /// Two-decimal string, cost of the taps still needed (zero taps when no
    /// estimate is active).
    pub cost_till_next_level: String,
    pub craftable: Option<bool>,
    pub taps_needed: Option<String>,
    /// Plant spend the gather option would avoid, two-decimal string.
    pub savings: Option<String>,
    pub stamina_per_tap: String,
    pub total_stamina_usage: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnchantEstimate {
    pub rows: Vec<TownRow>,
    pub show_estimate: bool,
    pub next_level: u8,
}

pub fn number_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn is_provided(text: &str) -> bool {
    !text.trim().is_empty()
}

/// "12.00" renders as "12"; any other two-decimal value stays as typed.
pub fn fmt_whole_if_no_decimals(text: &str) -> String {
    if let Some(stripped) = text.strip_suffix(".00") {
        let digits = stripped.strip_prefix('-').unwrap_or(stripped);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return stripped.to_string();
        }
    }
    text.to_string()
}

/// Izlude and onward burns two stones per craft.
pub fn stones_per_tap(town: Town) -> u32 {
    if town == Town::Prontera {
        1
    } else {
        2
    }
}

/// Smithing level needed to craft at a location. Follows the Muspellium tier
/// except in Geffen, which demands 8 regardless of tier.
pub fn smithing_requirement(location: &Location) -> u32 {
    if location.town == Town::Geffen {
        return 8;
    }
    match location.muspe_tier {
        1 => 1,
        2 => 3,
        3 => 5,
        _ => 7,
    }
}

pub fn estimate(form: &EnchantForm) -> EnchantEstimate {
    let muspe_prices: [f64; MUSPE_TIERS] =
        std::array::from_fn(|idx| number_or_zero(&form.muspe_prices[idx]));
    let plant_prices: [f64; 5] =
        std::array::from_fn(|idx| number_or_zero(&form.plant_prices[idx]));

    let has_any_material_price = muspe_prices.iter().any(|price| *price > 0.0)
        || plant_prices.iter().any(|price| *price > 0.0);

    let level = (number_or_zero(&form.current_level) as i64)
        .clamp(1, i64::from(MAX_SELECTABLE_LEVEL)) as usize;
    let next_level = ((level + 1) as u8).min(MAX_LEVEL);

    let exp_provided = is_provided(&form.current_exp);
    let exp = if exp_provided {
        number_or_zero(&form.current_exp).max(0.0)
    } else {
        0.0
    };
    let required = f64::from(REQUIRED_EXP[level]);
    let remaining = (required - exp).max(0.0);
    let show_estimate = exp_provided && remaining > 0.0;

    let gate_on_smithing = is_provided(&form.smithing_level);
    let smithing = number_or_zero(&form.smithing_level);

    let rows = LOCATIONS
        .iter()
        .map(|loc| {
            let muspe_price = muspe_prices[usize::from(loc.muspe_tier - 1)];
            let plant_price = loc
                .town
                .priced_index()
                .map(|idx| plant_prices[idx])
                .unwrap_or(0.0);
            let stones = stones_per_tap(loc.town);
            let muspe_per_tap = loc.muspe_units_per_tap * stones;
            // Prontera takes no plant, whatever the table says.
            let plants_per_tap = if loc.town.has_plant() {
                loc.plant_units_per_tap * stones
            } else {
                0
            };

            let cost_per_tap =
                f64::from(muspe_per_tap) * muspe_price + f64::from(plants_per_tap) * plant_price;
            // Gathering zeroes the plant component only.
            let effective_cost_per_tap = if form.gather_plants {
                f64::from(muspe_per_tap) * muspe_price
            } else {
                cost_per_tap
            };

            let taps_needed = (remaining * loc.taps_per_exp_unit).ceil() as u64;
            // Without an active estimate the row prices zero taps.
            let effective_taps = if show_estimate { taps_needed } else { 0 };
            let cost_till_next_level =
                format!("{:.2}", effective_taps as f64 * effective_cost_per_tap);

            let crafting_stamina = stones * 10;
            let gathering_stamina = if form.gather_plants {
                plants_per_tap * 10
            } else {
                0
            };
            let stamina = crafting_stamina + gathering_stamina;
            let meaningful = has_any_material_price || form.gather_plants;
            let (stamina_per_tap, total_stamina_usage) = if !loc.town.has_plant() {
                ("-".to_string(), "-".to_string())
            } else if meaningful {
                (
                    stamina.to_string(),
                    (effective_taps * u64::from(stamina)).to_string(),
                )
            } else {
                ("0".to_string(), "0".to_string())
            };

            let craftable = gate_on_smithing
                .then(|| smithing >= f64::from(smithing_requirement(loc)));

            let (taps_field, savings) = if show_estimate {
                (
                    Some(taps_needed.to_string()),
                    Some(format!(
                        "{:.2}",
                        taps_needed as f64 * f64::from(plants_per_tap) * plant_price
                    )),
                )
            } else {
                (None, None)
            };

            TownRow {
                town: loc.town,
                cost_per_tap,
                cost_till_next_level,
                craftable,
                taps_needed: taps_field,
                savings,
                stamina_per_tap,
                total_stamina_usage,
            }
        })
        .collect();

    EnchantEstimate {
        rows,
        show_estimate,
        next_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EnchantType;

    fn form() -> EnchantForm {
        EnchantForm::default()
    }

    fn row<'a>(est: &'a EnchantEstimate, town: Town) -> &'a TownRow {
        est.rows.iter().find(|r| r.town == town).unwrap()
    }

    #[test]
    fn always_six_rows_in_table_order() {
        let est = estimate(&form());
        let towns: Vec<Town> = est.rows.iter().map(|r| r.town).collect();
        assert_eq!(towns, Town::ALL.to_vec());
    }

    #[test]
    fn stones_rule() {
        assert_eq!(stones_per_tap(Town::Prontera), 1);
        for town in Town::PRICED {
            assert_eq!(stones_per_tap(town), 2);
        }
    }

    #[test]
    fn number_or_zero_is_defensive() {
        assert_eq!(number_or_zero(""), 0.0);
        assert_eq!(number_or_zero("  "), 0.0);
        assert_eq!(number_or_zero("abc"), 0.0);
        assert_eq!(number_or_zero("inf"), 0.0);
        assert_eq!(number_or_zero("NaN"), 0.0);
        assert_eq!(number_or_zero(" 12.5 "), 12.5);
    }

    #[test]
    fn formatting_trims_zero_cents_only() {
        assert_eq!(fmt_whole_if_no_decimals("12.00"), "12");
        assert_eq!(fmt_whole_if_no_decimals("12.50"), "12.50");
        assert_eq!(fmt_whole_if_no_decimals("-7.00"), "-7");
        assert_eq!(fmt_whole_if_no_decimals("0.00"), "0");
        assert_eq!(fmt_whole_if_no_decimals("12.5"), "12.5");
        assert_eq!(fmt_whole_if_no_decimals("abc.00"), "abc.00");
    }

    #[test]
    fn wep_level_one_zero_exp_scenario() {
        let mut f = form();
        f.enchant_type = EnchantType::Weapon;
        f.current_level = "1".into();
        f.current_exp = "0".into();
        f.muspe_prices[0] = "10".into();

        let est = estimate(&f);
        assert!(est.show_estimate, "remaining = 10 - 0 > 0");
        assert_eq!(est.next_level, 2);

        let prontera = row(&est, Town::Prontera);
        assert_eq!(prontera.cost_per_tap, 300.0);
        assert_eq!(prontera.taps_needed.as_deref(), Some("10"));
        assert_eq!(prontera.cost_till_next_level, "3000.00");
        assert_eq!(
            fmt_whole_if_no_decimals(&prontera.cost_till_next_level),
            "3000"
        );
        assert_eq!(prontera.stamina_per_tap, "-");
        assert_eq!(prontera.total_stamina_usage, "-");
    }

    #[test]
    fn estimate_suppressed_without_exp() {
        let mut f = form();
        f.muspe_prices[0] = "10".into();

        let est = estimate(&f);
        assert!(!est.show_estimate);
        for r in &est.rows {
            assert!(r.taps_needed.is_none());
            assert!(r.savings.is_none());
            // No estimate active: the column prices zero taps.
            assert_eq!(r.cost_till_next_level, "0.00");
        }
    }

    #[test]
    fn exp_past_requirement_suppresses_estimate_and_prices_zero_taps() {
        let mut f = form();
        f.current_level = "1".into();
        f.current_exp = "10".into(); // requirement for level 1 is exactly 10
        f.muspe_prices[0] = "25".into();
        f.plant_prices[0] = "5".into();

        let est = estimate(&f);
        assert!(!est.show_estimate);
        let izlude = row(&est, Town::Izlude);
        assert!(izlude.taps_needed.is_none());
        assert!(izlude.savings.is_none());
        assert_eq!(izlude.cost_till_next_level, "0.00");
        assert_eq!(izlude.total_stamina_usage, "0");
        // Per-tap figures are untouched by the suppression.
        assert_eq!(izlude.cost_per_tap, 5.0 * 2.0 * 25.0 + 1.0 * 2.0 * 5.0);
        assert_eq!(izlude.stamina_per_tap, "20");
    }

    #[test]
    fn level_clamps_high_and_low() {
        let mut high = form();
        high.current_level = "25".into();
        high.current_exp = "0".into();
        let mut top = form();
        top.current_level = "19".into();
        top.current_exp = "0".into();
        assert_eq!(estimate(&high), estimate(&top));
        assert_eq!(estimate(&high).next_level, 20);

        let mut low = form();
        low.current_level = "0".into();
        low.current_exp = "0".into();
        let mut one = form();
        one.current_level = "1".into();
        one.current_exp = "0".into();
        assert_eq!(estimate(&low), estimate(&one));
        assert_eq!(estimate(&low).next_level, 2);
    }

    #[test]
    fn cost_per_tap_monotone_in_prices() {
        let mut base = form();
        base.current_exp = "0".into();
        let before = estimate(&base);

        for tier in 0..4 {
            let mut bumped = base.clone();
            bumped.muspe_prices[tier] = "100".into();
            let after = estimate(&bumped);
            for (a, b) in after.rows.iter().zip(before.rows.iter()) {
                assert!(a.cost_per_tap >= b.cost_per_tap);
            }
        }
        for idx in 0..5 {
            let mut bumped = base.clone();
            bumped.plant_prices[idx] = "100".into();
            let after = estimate(&bumped);
            for (a, b) in after.rows.iter().zip(before.rows.iter()) {
                assert!(a.cost_per_tap >= b.cost_per_tap);
            }
        }
    }

    #[test]
    fn gathering_shifts_cost_to_stamina() {
        let mut f = form();
        f.current_level = "3".into();
        f.current_exp = "10".into();
        f.muspe_prices = std::array::from_fn(|i| (10 * (i + 1)).to_string());
        f.plant_prices = std::array::from_fn(|i| (5 * (i + 1)).to_string());

        let bought = estimate(&f);
        f.gather_plants = true;
        let gathered = estimate(&f);

        for (g, b) in gathered.rows.iter().zip(bought.rows.iter()) {
            let g_cost = number_or_zero(&g.cost_till_next_level);
            let b_cost = number_or_zero(&b.cost_till_next_level);
            assert!(g_cost <= b_cost);
            if g.town.has_plant() {
                let g_stam = number_or_zero(&g.stamina_per_tap);
                let b_stam = number_or_zero(&b.stamina_per_tap);
                assert!(g_stam >= b_stam);
            }
        }
    }

    #[test]
    fn gathering_keeps_muspe_component() {
        let mut f = form();
        f.current_level = "1".into();
        f.current_exp = "0".into();
        f.muspe_prices[0] = "10".into();
        f.plant_prices[0] = "50".into();
        f.gather_plants = true;

        let est = estimate(&f);
        let izlude = row(&est, Town::Izlude);
        // 10 taps at 5 * 2 muspe units, plant spend dropped.
        assert_eq!(izlude.cost_till_next_level, "1000.00");
        // Savings report what gathering avoided: 10 taps * 2 plants * 50.
        assert_eq!(izlude.savings.as_deref(), Some("1000.00"));
        // Crafting 20 + gathering 2 * 10.
        assert_eq!(izlude.stamina_per_tap, "40");
    }

    #[test]
    fn craftable_is_tri_state_with_geffen_override() {
        let mut f = form();
        let ungated = estimate(&f);
        assert!(ungated.rows.iter().all(|r| r.craftable.is_none()));

        f.smithing_level = "7".into();
        let gated = estimate(&f);
        assert_eq!(row(&gated, Town::Prontera).craftable, Some(true));
        assert_eq!(row(&gated, Town::Payon).craftable, Some(true)); // tier 4 -> 7
        assert_eq!(row(&gated, Town::Geffen).craftable, Some(false)); // override: 8

        f.smithing_level = "8".into();
        let master = estimate(&f);
        assert_eq!(row(&master, Town::Geffen).craftable, Some(true));

        f.smithing_level = "0".into();
        let novice = estimate(&f);
        assert!(novice.rows.iter().all(|r| r.craftable == Some(false)));
    }

    #[test]
    fn all_defaults_display_zeroes() {
        let est = estimate(&form());
        assert!(!est.show_estimate);
        for r in &est.rows {
            assert_eq!(r.cost_per_tap, 0.0);
            assert!(r.craftable.is_none());
            if r.town.has_plant() {
                assert_eq!(r.stamina_per_tap, "0");
                assert_eq!(r.total_stamina_usage, "0");
            } else {
                assert_eq!(r.stamina_per_tap, "-");
                assert_eq!(r.total_stamina_usage, "-");
            }
        }
    }

    #[test]
    fn any_positive_price_reveals_stamina() {
        let mut f = form();
        f.plant_prices[3] = "1".into(); // Payon
        let est = estimate(&f);
        let morroc = row(&est, Town::Morroc);
        assert_eq!(morroc.stamina_per_tap, "20");
        let prontera = row(&est, Town::Prontera);
        assert_eq!(prontera.stamina_per_tap, "-");
    }

    #[test]
    fn gather_alone_reveals_stamina() {
        let mut f = form();
        f.gather_plants = true;
        let est = estimate(&f);
        let geffen = row(&est, Town::Geffen);
        // Crafting 20 + gathering 14 * 10.
        assert_eq!(geffen.stamina_per_tap, "160");
    }

    #[test]
    fn taps_round_up_per_location() {
        let mut f = form();
        f.current_level = "1".into();
        f.current_exp = "3".into(); // remaining 7
        let est = estimate(&f);
        assert_eq!(row(&est, Town::Prontera).taps_needed.as_deref(), Some("7"));
        assert_eq!(row(&est, Town::Morroc).taps_needed.as_deref(), Some("4")); // ceil(3.5)
        assert_eq!(row(&est, Town::Alberta).taps_needed.as_deref(), Some("2")); // ceil(1.75)
        assert_eq!(row(&est, Town::Geffen).taps_needed.as_deref(), Some("1")); // ceil(0.4375)
    }

    #[test]
    fn exp_overshoot_is_clamped_to_zero_remaining() {
        let mut f = form();
        f.current_level = "1".into();
        f.current_exp = "9999".into();
        let est = estimate(&f);
        assert!(!est.show_estimate);

        f.current_exp = "-5".into(); // negative exp reads as zero
        let est = estimate(&f);
        assert!(est.show_estimate);
        assert_eq!(row(&est, Town::Prontera).taps_needed.as_deref(), Some("10"));
    }
}
