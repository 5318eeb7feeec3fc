//! Accent helpers keyed on the selected gear slot so the chrome follows the
//! calculator: weapons run rose, armor sky, accessories amber.

use crate::domain::EnchantType;

pub fn accent_text(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => "text-rose-300",
        EnchantType::Armor => "text-sky-300",
        EnchantType::Accessory => "text-amber-300",
    }
}

pub fn btn_primary(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => {
            "rounded-lg bg-rose-500 px-4 py-2 text-sm font-semibold text-white hover:bg-rose-400"
        }
        EnchantType::Armor => {
            "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400"
        }
        EnchantType::Accessory => {
            "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-white hover:bg-amber-400"
        }
    }
}

pub fn nav_active(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => {
            "min-w-[5.5rem] rounded-lg border border-rose-500/60 bg-rose-500/15 px-4 py-2 font-semibold text-rose-300"
        }
        EnchantType::Armor => {
            "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300"
        }
        EnchantType::Accessory => {
            "min-w-[5.5rem] rounded-lg border border-amber-500/60 bg-amber-500/15 px-4 py-2 font-semibold text-amber-300"
        }
    }
}

pub fn nav_inactive(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => {
            "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-rose-800 hover:bg-rose-900/20 hover:text-rose-300"
        }
        EnchantType::Armor => {
            "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-sky-800 hover:bg-sky-900/20 hover:text-sky-300"
        }
        EnchantType::Accessory => {
            "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-amber-800 hover:bg-amber-900/20 hover:text-amber-300"
        }
    }
}

pub fn input_class(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => {
            "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-rose-500 focus:outline-none"
        }
        EnchantType::Armor => {
            "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none"
        }
        EnchantType::Accessory => {
            "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-amber-500 focus:outline-none"
        }
    }
}

pub fn panel_border(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => "rounded-xl border border-rose-900/40 bg-slate-900/40",
        EnchantType::Armor => "rounded-xl border border-sky-900/40 bg-slate-900/40",
        EnchantType::Accessory => "rounded-xl border border-amber-900/40 bg-slate-900/40",
    }
}

pub fn table_container(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => {
            "rounded-xl border border-rose-900/40 bg-slate-900/40 overflow-hidden"
        }
        EnchantType::Armor => "rounded-xl border border-sky-900/40 bg-slate-900/40 overflow-hidden",
        EnchantType::Accessory => {
            "rounded-xl border border-amber-900/40 bg-slate-900/40 overflow-hidden"
        }
    }
}

pub fn table_header(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => {
            "border-b border-rose-900/40 bg-rose-950/30 text-xs uppercase text-rose-400/70"
        }
        EnchantType::Armor => {
            "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70"
        }
        EnchantType::Accessory => {
            "border-b border-amber-900/40 bg-amber-950/30 text-xs uppercase text-amber-400/70"
        }
    }
}

pub fn table_divider(ty: EnchantType) -> &'static str {
    match ty {
        EnchantType::Weapon => "divide-y divide-rose-900/30",
        EnchantType::Armor => "divide-y divide-sky-900/30",
        EnchantType::Accessory => "divide-y divide-amber-900/30",
    }
}

pub fn label_class(_ty: EnchantType) -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn text_secondary(_ty: EnchantType) -> &'static str {
    "text-slate-300"
}

pub fn text_muted(_ty: EnchantType) -> &'static str {
    "text-slate-500"
}
