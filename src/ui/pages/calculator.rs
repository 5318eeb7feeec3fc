use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        estimate, fmt_whole_if_no_decimals, muspe_tier_label, number_or_zero, plant_name,
        AppState, EnchantType, Town, TownRow,
    },
    infra::seen::SeenStore,
    ui::{
        components::{
            kpi_card::KpiCard,
            results_table::ResultsTable,
            toast::{push_toast, ToastKind, ToastMessage},
            tour::{GuidedTour, TourStep},
        },
        theme,
    },
};

const TOUR_KEY: &str = "rox-toolbox.enchant-calc.tour.v1.seen";

fn tour_steps() -> Vec<TourStep> {
    vec![
        TourStep {
            id: "basics",
            target: "basics",
            title: "Basics",
            description: "Choose your enchant type first. If you have Smithing, enter your Smithing level to highlight which locations you can craft at. Optionally enter your current Enchant Level + EXP so the calculator can estimate taps and total cost to the next level.",
        },
        TourStep {
            id: "muspe",
            target: "muspe",
            title: "Muspellium Prices",
            description: "Enter the current market price for each Muspellium tier (I-IV). These prices drive the cost-per-tap and the total cost estimates.",
        },
        TourStep {
            id: "plants",
            target: "plants",
            title: "Plant Prices",
            description: "Enter plant prices for each town (Izlude to Geffen). If you farm your own plants, turn on Gather plants to remove plant cost from the totals (stamina usage is still shown).",
        },
        TourStep {
            id: "results",
            target: "results",
            title: "Results",
            description: "Compare locations by Cost/Tap and Cost to Next Level. If you entered EXP, you'll also see Taps Needed and estimated plant savings. Prontera shows '-' for stamina since it doesn't follow the same stamina rules.",
        },
    ]
}

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut tour_open = use_signal(|| !SeenStore::default().is_seen(TOUR_KEY));
    let tour_target = use_signal(|| None::<&'static str>);

    let form = state.with(|st| st.form.clone());
    let accent = form.enchant_type;
    let result = estimate(&form);

    let cheapest_tap = cheapest_per_tap(&result.rows);
    let cheapest_level = result
        .show_estimate
        .then(|| cheapest_till_next_level(&result.rows))
        .flatten();
    let next_level_value = format!("Lv {}", result.next_level);
    let cheapest_level_title = format!("Cheapest to Lv {}", result.next_level);

    let active = tour_target();
    let spotlight = |name: &'static str| -> &'static str {
        if active == Some(name) {
            " tour-spotlight"
        } else {
            ""
        }
    };
    let basics_class = format!(
        "{} space-y-4 p-4{}",
        theme::panel_border(accent),
        spotlight("basics")
    );
    let muspe_class = format!("{} p-4{}", theme::panel_border(accent), spotlight("muspe"));
    let plants_class = format!("{} p-4{}", theme::panel_border(accent), spotlight("plants"));
    let results_class = format!("space-y-3{}", spotlight("results"));

    let on_replay_tour = {
        let toasts = toasts.clone();
        move |_| {
            SeenStore::default().clear_seen(TOUR_KEY);
            tour_open.set(true);
            push_toast(toasts.clone(), ToastKind::Info, "Tutorial restarted.");
        }
    };

    let on_type_change = {
        let state = state.clone();
        move |evt: FormEvent| {
            let Some(next) = EnchantType::from_wire(&evt.value()) else {
                return;
            };
            let mut state = state.clone();
            state.with_mut(|st| st.set_enchant_type(next));
            persist_user_state(&state);
        }
    };

    let on_smithing_input = {
        let state = state.clone();
        move |evt: FormEvent| {
            let mut state = state.clone();
            state.with_mut(|st| st.form.smithing_level = evt.value());
        }
    };

    let on_level_change = {
        let state = state.clone();
        move |evt: FormEvent| {
            let mut state = state.clone();
            state.with_mut(|st| st.form.current_level = evt.value());
            persist_user_state(&state);
        }
    };

    let on_exp_input = {
        let state = state.clone();
        move |evt: FormEvent| {
            let mut state = state.clone();
            state.with_mut(|st| st.form.current_exp = evt.value());
        }
    };

    let on_gather_toggle = {
        let state = state.clone();
        move |_| {
            let mut state = state.clone();
            state.with_mut(|st| st.form.gather_plants = !st.form.gather_plants);
            persist_user_state(&state);
        }
    };

    let persist_on_commit = {
        let state = state.clone();
        move |_: FormEvent| persist_user_state(&state)
    };

    rsx! {
        GuidedTour {
            storage_key: TOUR_KEY,
            steps: tour_steps(),
            open: tour_open,
            active_target: tour_target,
        }

        div { class: "space-y-8",
            div { class: "flex items-start justify-between gap-3",
                h1 { class: "text-2xl font-semibold tracking-tight",
                    "ROX Global Enchantment Cost Calculator"
                }
                button {
                    class: "shrink-0 rounded-lg border border-slate-600 px-3 py-2 text-sm font-medium text-slate-200 hover:bg-slate-800",
                    onclick: on_replay_tour,
                    "Play tutorial"
                }
            }

            section {
                class: "grid gap-4 md:grid-cols-3",

                div {
                    class: "{basics_class}",
                    div { class: "space-y-2",
                        div { class: "text-sm font-semibold tracking-tight", "Basics" }
                        label { class: theme::label_class(accent), r#for: "enchant-type", "Enchantment Type" }
                        select {
                            id: "enchant-type",
                            class: theme::input_class(accent),
                            value: form.enchant_type.wire_code(),
                            onchange: on_type_change,
                            for ty in EnchantType::ALL {
                                option { value: ty.wire_code(), {ty.label()} }
                            }
                        }
                    }

                    div { class: "space-y-2",
                        label { class: theme::label_class(accent), r#for: "smithing", "Smithing (Optional)" }
                        input {
                            id: "smithing",
                            class: theme::input_class(accent),
                            inputmode: "numeric",
                            value: form.smithing_level.clone(),
                            oninput: on_smithing_input,
                            onchange: persist_on_commit.clone(),
                        }
                    }

                    div { class: "space-y-2",
                        label { class: theme::label_class(accent), r#for: "current-level", "Current Enchant Level (Optional)" }
                        div { class: "grid grid-cols-2 gap-3",
                            select {
                                id: "current-level",
                                class: theme::input_class(accent),
                                value: form.current_level.clone(),
                                onchange: on_level_change,
                                for level in 1..=19u8 {
                                    option { value: level.to_string(), "{level}" }
                                }
                            }
                            input {
                                class: theme::input_class(accent),
                                inputmode: "decimal",
                                placeholder: "Current EXP",
                                value: form.current_exp.clone(),
                                oninput: on_exp_input,
                                onchange: persist_on_commit.clone(),
                            }
                        }
                    }
                }

                div {
                    class: "{muspe_class}",
                    h2 { class: "text-sm font-semibold tracking-tight", "Muspellium Prices" }
                    div { class: "mt-3 grid gap-2",
                        for tier in 1..=4u8 {
                            MuspePriceInput { tier, accent }
                        }
                    }
                }

                div {
                    class: "{plants_class}",
                    div { class: "flex items-center justify-between gap-3",
                        h2 { class: "text-sm font-semibold tracking-tight", "Plant Prices" }
                        label { class: "flex items-center gap-2 text-xs text-slate-400",
                            input {
                                r#type: "checkbox",
                                class: "h-4 w-4 cursor-pointer",
                                checked: form.gather_plants,
                                onclick: on_gather_toggle,
                            }
                            "Gather plants"
                        }
                    }
                    div { class: "mt-3 grid gap-2",
                        for town in Town::PRICED {
                            PlantPriceInput { town, accent }
                        }
                    }
                }
            }

            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Next Level".to_string(),
                    value: next_level_value,
                    description: Some("Estimate target".to_string()),
                    accent,
                }
                if let Some((town, cost)) = cheapest_tap {
                    KpiCard {
                        title: "Cheapest per Tap".to_string(),
                        value: town.to_string(),
                        description: Some(format!("{} per tap", fmt_whole_if_no_decimals(&format!("{cost:.2}")))),
                        accent,
                    }
                }
                if let Some((town, cost)) = cheapest_level {
                    KpiCard {
                        title: cheapest_level_title.clone(),
                        value: town.to_string(),
                        description: Some(format!("{} total", fmt_whole_if_no_decimals(&format!("{cost:.2}")))),
                        accent,
                    }
                }
            }

            section {
                class: "{results_class}",
                h2 { class: "text-base font-semibold tracking-tight", "Results" }
                ResultsTable {
                    rows: result.rows,
                    show_estimate: result.show_estimate,
                    next_level: result.next_level,
                    accent,
                }
            }
        }
    }
}

#[component]
fn MuspePriceInput(tier: u8, accent: EnchantType) -> Element {
    let state = use_context::<Signal<AppState>>();
    let value = state.with(|st| st.form.muspe_price_text(tier).to_string());
    let label = muspe_tier_label(tier);

    let on_input = {
        let state = state.clone();
        move |evt: FormEvent| {
            let mut state = state.clone();
            state.with_mut(|st| st.form.muspe_prices[usize::from(tier - 1)] = evt.value());
        }
    };
    let on_commit = {
        let state = state.clone();
        move |_: FormEvent| persist_user_state(&state)
    };

    rsx! {
        label { class: "grid gap-1 text-sm",
            span { class: "text-slate-400", "{label}" }
            input {
                class: theme::input_class(accent),
                inputmode: "decimal",
                value: value,
                oninput: on_input,
                onchange: on_commit,
            }
        }
    }
}

#[component]
fn PlantPriceInput(town: Town, accent: EnchantType) -> Element {
    let state = use_context::<Signal<AppState>>();
    let (value, label) = state.with(|st| {
        (
            st.form.plant_price_text(town).to_string(),
            plant_name(st.form.enchant_type, town).unwrap_or(town.name()),
        )
    });

    let on_input = {
        let state = state.clone();
        move |evt: FormEvent| {
            let mut state = state.clone();
            state.with_mut(|st| st.form.set_plant_price(town, evt.value()));
        }
    };
    let on_commit = {
        let state = state.clone();
        move |_: FormEvent| persist_user_state(&state)
    };

    rsx! {
        label { class: "grid gap-1 text-sm",
            span { class: "text-slate-400", "{label}" }
            input {
                class: theme::input_class(accent),
                inputmode: "decimal",
                value: value,
                oninput: on_input,
                onchange: on_commit,
            }
        }
    }
}

fn cheapest_per_tap(rows: &[TownRow]) -> Option<(&'static str, f64)> {
    rows.iter()
        .min_by(|a, b| a.cost_per_tap.total_cmp(&b.cost_per_tap))
        .map(|row| (row.town.name(), row.cost_per_tap))
}

fn cheapest_till_next_level(rows: &[TownRow]) -> Option<(&'static str, f64)> {
    rows.iter()
        .map(|row| (row.town.name(), number_or_zero(&row.cost_till_next_level)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
