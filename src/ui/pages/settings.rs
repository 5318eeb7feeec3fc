use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::persist_user_state,
    domain::{AppState, EnchantForm},
    infra::user_settings::{self, EchoStatus},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{
        persistence::{delete_persisted_state, load_persisted_state, state_file},
        version::{check_for_update, version_label, APP_REPO_URL},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let accent = state.with(|st| st.form.enchant_type);

    let mut settings_body = use_signal(String::new);
    let mut update_status = use_signal(|| None::<String>);

    let saved_age = load_persisted_state()
        .and_then(|persisted| persisted.saved_at_time())
        .map(humanize_age);
    let state_path = state_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let on_save_now = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            persist_user_state(&state);
            push_toast(toasts.clone(), ToastKind::Success, "Calculator inputs saved.");
        }
    };

    let on_reset_inputs = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let mut state = state.clone();
            state.with_mut(|st| st.form = EnchantForm::default());
            if let Err(err) = delete_persisted_state() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to remove saved state: {err}"),
                );
                return;
            }
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Inputs reset to defaults; saved state removed.",
            );
        }
    };

    let on_load_defaults = {
        let toasts = toasts.clone();
        move |_| {
            let response = user_settings::get();
            match serde_json::to_string_pretty(&response.settings) {
                Ok(json) => settings_body.set(json),
                Err(err) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to render defaults: {err}"),
                ),
            }
        }
    };

    let on_send_settings = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let body = settings_body();
            let (status, response) = user_settings::post(&body);
            match status {
                EchoStatus::Ok => {
                    let mut state = state.clone();
                    state.with_mut(|st| st.apply_settings(&response.settings));
                    persist_user_state(&state);
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        "Settings accepted (200) and applied to the calculator.",
                    );
                }
                EchoStatus::BadRequest => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!(
                            "Settings rejected ({}); the endpoint echoed the defaults instead.",
                            status.code()
                        ),
                    );
                }
            }
        }
    };

    let on_check_updates = move |_| {
        update_status.set(Some("Checking...".to_string()));
        let mut update_status = update_status.clone();
        spawn(async move {
            match check_for_update().await {
                Ok(info) => update_status.set(Some(info.to_string())),
                Err(err) => update_status.set(Some(format!("Update check failed: {err}"))),
            }
        });
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border(accent)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Saved Inputs" }
                p { class: "mt-2 text-sm text-slate-400",
                    if let Some(age) = saved_age {
                        "Last saved {age}."
                    } else {
                        "Nothing saved yet. Calculator inputs persist here between launches."
                    }
                }
                p { class: "mt-1 text-xs text-slate-600", "{state_path}" }
                div { class: "mt-4 flex gap-3",
                    button { class: theme::btn_primary(accent), onclick: on_save_now, "Save Now" }
                    button {
                        class: "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800",
                        onclick: on_reset_inputs,
                        "Reset Inputs"
                    }
                }
            }

            section {
                class: "{theme::panel_border(accent)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Settings Echo" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Paste a settings payload to preview what the account sync will accept one day. Nothing is uploaded; invalid bodies get a 400 with the defaults."
                }
                textarea {
                    class: "mt-3 h-40 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 font-mono text-xs text-slate-100 focus:border-slate-500 focus:outline-none",
                    placeholder: "{{ \"enchantType\": \"armor\", \"muspePrices\": {{ \"2\": 150 }} }}",
                    value: settings_body(),
                    oninput: move |evt| settings_body.set(evt.value()),
                }
                div { class: "mt-3 flex gap-3",
                    button { class: theme::btn_primary(accent), onclick: on_send_settings, "Send" }
                    button {
                        class: "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800",
                        onclick: on_load_defaults,
                        "Load Defaults"
                    }
                }
            }

            section {
                class: "{theme::panel_border(accent)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Updates" }
                p { class: "mt-2 text-sm text-slate-400", "Running {version_label()}." }
                if let Some(status) = update_status() {
                    p { class: "mt-1 text-sm text-slate-300", "{status}" }
                }
                div { class: "mt-3 flex items-center gap-3",
                    button { class: theme::btn_primary(accent), onclick: on_check_updates, "Check for Updates" }
                    a {
                        class: "text-xs font-semibold uppercase tracking-wide text-slate-400 hover:text-slate-200",
                        href: APP_REPO_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        "Project page"
                    }
                }
            }
        }
    }
}

fn humanize_age(saved: OffsetDateTime) -> String {
    let age = (OffsetDateTime::now_utc() - saved).whole_seconds().max(0);
    if age < 60 {
        format!("{age}s ago")
    } else if age < 3_600 {
        format!("{}m ago", age / 60)
    } else if age < 86_400 {
        format!("{}h ago", age / 3_600)
    } else {
        format!("{}d ago", age / 86_400)
    }
}
