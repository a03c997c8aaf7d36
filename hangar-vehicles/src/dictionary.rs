//! Display names for API keys. Keys missing from a table pass through unchanged.

use std::{collections::HashMap, sync::LazyLock};

const VEHICLE_NAMES: &[(&str, &str)] = &[
    ("us_m1_abrams", "M1 Abrams"),
    ("us_m1a1_abrams", "M1A1"),
    ("us_m1a2_abrams", "M1A2 Abrams"),
    ("us_m4a1_1942_sherman", "M4A1 Sherman"),
    ("us_m4a3_105_sherman", "M4A3 (105)"),
    ("us_m26_pershing", "M26 Pershing"),
    ("us_m60a1_rise_passive", "M60A1 RISE (P)"),
    ("us_p-51d-5", "P-51D-5 Mustang"),
    ("us_f-16a_block_10", "F-16A"),
    ("germ_pzkpfw_vi_ausf_h1_tiger", "Tiger H1"),
    ("germ_pzkpfw_v_ausf_a_panther", "Panther A"),
    ("germ_leopard_1", "Leopard I"),
    ("germ_leopard_2a4", "Leopard 2A4"),
    ("germ_leopard_2a6", "Leopard 2A6"),
    ("germ_bf-109f-4", "Bf 109 F-4"),
    ("ussr_t_34_1941", "T-34 (1941)"),
    ("ussr_t_34_85_d_5t", "T-34-85 (D-5T)"),
    ("ussr_is_2_1944", "IS-2 (1944)"),
    ("ussr_t_72a", "T-72A"),
    ("ussr_t_80u", "T-80U"),
    ("ussr_t_90a", "T-90A"),
    ("ussr_mig_21_smt", "MiG-21SMT"),
    ("uk_a22f_mk_7_churchill_1944", "Churchill VII"),
    ("uk_centurion_mk_3", "Centurion Mk 3"),
    ("uk_challenger_2", "Challenger 2"),
    ("uk_spitfire_mk9c", "Spitfire LF Mk IX"),
    ("jp_type_74", "Type 74"),
    ("jp_type_90", "Type 90"),
    ("fr_amx_30b2", "AMX-30B2"),
    ("fr_leclerc", "Leclerc"),
    ("it_ariete", "Ariete"),
    ("sw_strv_122a", "Strv 122A"),
];

const WEAPON_NAMES: &[(&str, &str)] = &[
    ("m68a1", "105 mm M68A1 cannon"),
    ("m256", "120 mm M256 cannon"),
    ("m2hb", "12.7 mm M2HB machine gun"),
    ("m240", "7.62 mm M240 machine gun"),
    ("kwk36", "88 mm KwK 36 cannon"),
    ("kwk42", "75 mm KwK 42 cannon"),
    ("rh120_l44", "120 mm Rh120 L/44 cannon"),
    ("rh120_l55", "120 mm Rh120 L/55 cannon"),
    ("mg3", "7.62 mm MG3 machine gun"),
    ("2a46m", "125 mm 2A46M cannon"),
    ("2a46m1", "125 mm 2A46M-1 cannon"),
    ("d_25t", "122 mm D-25T cannon"),
    ("f_34", "76 mm F-34 cannon"),
    ("pkt", "7.62 mm PKT machine gun"),
    ("nsvt", "12.7 mm NSVT machine gun"),
    ("l30a1", "120 mm L30A1 cannon"),
    ("l7a1", "105 mm L7A1 cannon"),
    ("cn120_26", "120 mm CN120-26 cannon"),
    ("m61_vulcan", "20 mm M61A1 Vulcan cannon"),
    ("mg151_20", "20 mm MG 151/20 cannon"),
];

static VEHICLE_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| VEHICLE_NAMES.iter().copied().collect());

static WEAPON_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| WEAPON_NAMES.iter().copied().collect());

/// Display name for a vehicle identifier, falling back to the identifier itself.
pub fn vehicle_display_name(id: &str) -> String {
    lookup(&VEHICLE_TABLE, &id.to_lowercase(), id)
}

/// Display name for a lower-cased weapon key, falling back to the key itself.
pub fn weapon_display_name(key: &str) -> String {
    lookup(&WEAPON_TABLE, key, key)
}

fn lookup(table: &HashMap<&'static str, &'static str>, key: &str, fallback: &str) -> String {
    table
        .get(key)
        .map_or_else(|| fallback.to_owned(), |name| (*name).to_owned())
}
