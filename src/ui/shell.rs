use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let accent = state.with(|st| st.form.enchant_type);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight {theme::accent_text(accent)}",
                            "ROX Toolbox"
                        }
                        p { class: "text-xs text-slate-500 italic", "companion tools for ROX Global EU" }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Home {}),
                            onclick: move |_| { nav.push(Route::Home {}); },
                            label: "Home",
                            accent,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "Enchant Calc",
                            accent,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                            accent,
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-6 text-right text-xs text-slate-600",
                "{version::APP_NAME} {version::version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: &'static str,
    accent: crate::domain::EnchantType,
) -> Element {
    let class = if active {
        theme::nav_active(accent)
    } else {
        theme::nav_inactive(accent)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
