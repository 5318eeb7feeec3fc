use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let accent = state.with(|st| st.form.enchant_type);
    let nav = use_navigator();

    rsx! {
        div { class: "space-y-6",
            section {
                class: "{theme::panel_border(accent)} p-6",
                h1 { class: "text-3xl font-semibold tracking-tight", "ROX Toolbox" }
                p { class: "mt-2 max-w-2xl text-sm text-slate-400",
                    "A small companion for ROX Global EU, built to help players with useful game resources and calculators."
                }
            }

            section {
                button {
                    class: "{theme::panel_border(accent)} block w-full p-5 text-left text-lg font-medium transition-colors hover:bg-slate-900/70",
                    onclick: move |_| { nav.push(Route::Calculator {}); },
                    "Enchant Calculator"
                    p { class: "mt-1 text-sm font-normal text-slate-400",
                        "Compare cost per tap, taps to the next level and stamina usage across all six towns."
                    }
                }
            }
        }
    }
}
