use dioxus::prelude::*;

use crate::infra::seen::SeenStore;

/// One slide of a guided tour. `target` names the page region the step talks
/// about; the hosting page matches it against `data-tour`-style section names
/// to draw the spotlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourStep {
    pub id: &'static str,
    pub target: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Step-by-step overlay. Opens when the hosting page flips `open` (it checks
/// the seen-marker first), walks the steps one at a time and records the
/// storage key as seen on Skip or Done so it never replays on its own. While
/// open it publishes the current step's target through `active_target` so the
/// page can ring the matching section.
#[component]
pub fn GuidedTour(
    storage_key: &'static str,
    steps: Vec<TourStep>,
    open: Signal<bool>,
    active_target: Signal<Option<&'static str>>,
) -> Element {
    let mut step_index = use_signal(|| 0usize);

    {
        let steps = steps.clone();
        let mut active_target = active_target.clone();
        let open = open.clone();
        let step_index = step_index.clone();
        use_effect(move || {
            let target = if open() && !steps.is_empty() {
                let idx = step_index().min(steps.len() - 1);
                Some(steps[idx].target)
            } else {
                None
            };
            active_target.set(target);
        });
    }

    if !open() || steps.is_empty() {
        return rsx! { Fragment {} };
    }

    let total = steps.len();
    let safe_index = step_index().min(total - 1);
    let step = steps[safe_index];
    let is_last = safe_index + 1 == total;
    let can_go_back = safe_index > 0;

    let mut open_for_skip = open.clone();
    let mut index_for_skip = step_index.clone();
    let on_skip = move |_| {
        SeenStore::default().mark_seen(storage_key);
        index_for_skip.set(0);
        open_for_skip.set(false);
    };

    let mut open_for_next = open.clone();
    let mut index_for_next = step_index.clone();
    let on_next = move |_| {
        if is_last {
            SeenStore::default().mark_seen(storage_key);
            index_for_next.set(0);
            open_for_next.set(false);
        } else {
            index_for_next.set(safe_index + 1);
        }
    };

    let on_back = move |_| {
        step_index.set(safe_index.saturating_sub(1));
    };

    let step_count = safe_index + 1;
    let next_label = if is_last { "Done" } else { "Next" };

    rsx! {
        div { class: "fixed inset-0 z-50",
            div { class: "absolute inset-0 bg-black/40" }
            div { class: "absolute inset-0 flex items-start justify-center p-8 pt-24 pointer-events-none",
                div {
                    class: "pointer-events-auto w-full max-w-md rounded-xl border border-slate-700 bg-slate-900 p-4 text-sm shadow-xl",
                    div { class: "text-xs text-slate-400", "Step {step_count} / {total}" }
                    div { class: "mt-1 text-base font-semibold tracking-tight text-slate-100", "{step.title}" }
                    div { class: "mt-1 text-slate-300", "{step.description}" }
                    div { class: "mt-4 flex items-center justify-between gap-2",
                        button {
                            class: "rounded-lg border border-slate-600 px-3 py-2 text-sm font-medium text-slate-200 hover:bg-slate-800",
                            onclick: on_skip,
                            "Skip"
                        }
                        div { class: "flex items-center gap-2",
                            if can_go_back {
                                button {
                                    class: "rounded-lg border border-slate-600 px-3 py-2 text-sm font-medium text-slate-200 hover:bg-slate-800",
                                    onclick: on_back,
                                    "Back"
                                }
                            }
                            button {
                                class: "rounded-lg bg-slate-100 px-3 py-2 text-sm font-medium text-slate-900 hover:bg-white",
                                onclick: on_next,
                                "{next_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
