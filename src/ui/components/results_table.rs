use dioxus::prelude::*;

use crate::domain::{fmt_whole_if_no_decimals, EnchantType, TownRow};
use crate::ui::theme;

/// The six-town comparison table. Estimate columns only exist while an
/// estimate is active; rows the smithing gate approves get a green tint.
#[component]
pub fn ResultsTable(
    rows: Vec<TownRow>,
    show_estimate: bool,
    next_level: u8,
    accent: EnchantType,
) -> Element {
    rsx! {
        div {
            class: "{theme::table_container(accent)}",
            table {
                class: "min-w-full {theme::table_divider(accent)} text-sm",
                thead {
                    class: "{theme::table_header(accent)} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Location" }
                        th { class: "px-4 py-3 font-medium", "Cost per Tap" }
                        th { class: "px-4 py-3 font-medium", "Cost till Level {next_level}" }
                        th { class: "px-4 py-3 font-medium", "Stamina / Tap" }
                        th { class: "px-4 py-3 font-medium", "Total Stamina" }
                        if show_estimate {
                            th { class: "px-4 py-3 font-medium", "Taps Needed" }
                            th { class: "px-4 py-3 font-medium", "Savings (gather plants)" }
                        }
                    }
                }
                tbody {
                    class: "{theme::table_divider(accent)}",
                    for row in rows {
                        TownRowView { row, show_estimate, accent }
                    }
                }
            }
        }
    }
}

#[component]
fn TownRowView(row: TownRow, show_estimate: bool, accent: EnchantType) -> Element {
    let row_class = if row.craftable == Some(true) {
        "bg-emerald-500/10"
    } else {
        ""
    };
    let cost_per_tap = fmt_whole_if_no_decimals(&format!("{:.2}", row.cost_per_tap));
    let cost_till = fmt_whole_if_no_decimals(&row.cost_till_next_level);
    let taps = row.taps_needed.clone().unwrap_or_default();
    let savings = row
        .savings
        .as_deref()
        .map(fmt_whole_if_no_decimals)
        .unwrap_or_default();
    let town = row.town.name();

    rsx! {
        tr {
            class: "{row_class}",
            td { class: "px-4 py-3 font-medium {theme::text_secondary(accent)}", "{town}" }
            td { class: "px-4 py-3 {theme::text_secondary(accent)} tabular-nums", "{cost_per_tap}" }
            td { class: "px-4 py-3 {theme::text_secondary(accent)} tabular-nums", "{cost_till}" }
            td { class: "px-4 py-3 {theme::text_muted(accent)} tabular-nums", "{row.stamina_per_tap}" }
            td { class: "px-4 py-3 {theme::text_muted(accent)} tabular-nums", "{row.total_stamina_usage}" }
            if show_estimate {
                td { class: "px-4 py-3 {theme::text_secondary(accent)} tabular-nums", "{taps}" }
                td { class: "px-4 py-3 {theme::text_secondary(accent)} tabular-nums", "{savings}" }
            }
        }
    }
}
