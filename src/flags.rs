//! Flag mnemonics for things, weapons and states.

use std::collections::HashMap;

/// Standard thing flags, in bit order.
pub static THING_FLAGS: &[&str] = &[
    "SPECIAL", "SOLID", "SHOOTABLE", "NOSECTOR", "NOBLOCKMAP", "AMBUSH", "JUSTHIT", "JUSTATTACKED",
    "SPAWNCEILING", "NOGRAVITY", "DROPOFF", "PICKUP", "NOCLIP", "SLIDE", "FLOAT", "TELEPORT",
    "MISSILE", "DROPPED", "SHADOW", "NOBLOOD", "CORPSE", "INFLOAT", "COUNTKILL", "COUNTITEM",
    "SKULLFLY", "NOTDEATHMATCH", "TRANSLATION", "TRANSLATION2", "TOUCHY", "BOUNCES", "FRIEND", "TRANSLUCENT",
];

/// MBF21 thing flags, in bit order.
pub static THING_FLAGS_MBF21: &[&str] = &[
    "LOGRAV", "SHORTMRANGE", "DMGIGNORED", "NORADIUSDMG", "FORCERADIUSDMG", "HIGHERMPROB", "RANGEHALF",
    "NOTHRESHOLD", "LONGMELEE", "BOSS", "MAP07BOSS1", "MAP07BOSS2", "E1M8BOSS", "E2M8BOSS", "E3M8BOSS",
    "E4M6BOSS", "E4M8BOSS", "RIP", "FULLVOLSOUNDS",
];

/// MBF21 weapon flags, in bit order.
pub static WEAPON_FLAGS_MBF21: &[&str] = &[
    "NOTHRUST", "SILENT", "NOAUTOFIRE", "FLEEMELEE", "AUTOSWITCHFROM", "NOAUTOSWITCHTO",
];

/// MBF21 state flags, in bit order.
pub static STATE_FLAGS_MBF21: &[&str] = &["SKILL5FAST"];

pub const THING_MISSILE: u32 = 1 << 16;

pub mod weapon_mbf21 {
    pub const NOTHRUST: u32 = 0x01;
    pub const SILENT: u32 = 0x02;
    pub const NOAUTOFIRE: u32 = 0x04;
    pub const FLEEMELEE: u32 = 0x08;
    pub const AUTOSWITCHFROM: u32 = 0x10;
    pub const NOAUTOSWITCHTO: u32 = 0x20;
}

pub mod state_mbf21 {
    pub const SKILL5FAST: u32 = 0x01;
}

/// Which table a thing flag mnemonic belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThingFlag {
    Standard(u32),
    Mbf21(u32),
}

lazy_static::lazy_static! {
    static ref THING_FLAG_MAP: HashMap<&'static str, ThingFlag> = {
        let standard = bit_map(THING_FLAGS).into_iter().map(|(k, v)| (k, ThingFlag::Standard(v)));
        let mbf21 = bit_map(THING_FLAGS_MBF21).into_iter().map(|(k, v)| (k, ThingFlag::Mbf21(v)));
        standard.chain(mbf21).collect()
    };
    static ref WEAPON_FLAG_MAP: HashMap<&'static str, u32> = bit_map(WEAPON_FLAGS_MBF21);
    static ref STATE_FLAG_MAP: HashMap<&'static str, u32> = bit_map(STATE_FLAGS_MBF21);
}

fn bit_map(names: &'static [&'static str]) -> HashMap<&'static str, u32> {
    names.iter().enumerate().map(|(bit, &name)| (name, 1 << bit)).collect()
}

/// Case-insensitive lookup of a thing flag in both the standard and MBF21 tables.
pub fn thing_flag(name: &str) -> Option<ThingFlag> {
    THING_FLAG_MAP.get(&name.to_ascii_uppercase()[..]).copied()
}

pub fn weapon_flag(name: &str) -> Option<u32> {
    WEAPON_FLAG_MAP.get(&name.to_ascii_uppercase()[..]).copied()
}

pub fn state_flag(name: &str) -> Option<u32> {
    STATE_FLAG_MAP.get(&name.to_ascii_uppercase()[..]).copied()
}

/// Find the most similar name in a list, for "did you mean" notes.
pub fn suggest<'a>(name: &str, candidates: impl IntoIterator<Item=&'a str>) -> Option<&'a str> {
    let name = name.to_ascii_uppercase();
    candidates.into_iter()
        .map(|candidate| (strsim::jaro_winkler(&name, &candidate.to_ascii_uppercase()), candidate))
        .filter(|&(score, _)| score > 0.85)
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits() {
        assert_eq!(thing_flag("SOLID"), Some(ThingFlag::Standard(0x2)));
        assert_eq!(thing_flag("missile"), Some(ThingFlag::Standard(THING_MISSILE)));
        assert_eq!(thing_flag("Translucent"), Some(ThingFlag::Standard(0x8000_0000)));
        assert_eq!(thing_flag("BOSS"), Some(ThingFlag::Mbf21(0x200)));
        assert_eq!(thing_flag("FULLVOLSOUNDS"), Some(ThingFlag::Mbf21(0x40000)));
        assert_eq!(thing_flag("NOTAFLAG"), None);

        assert_eq!(weapon_flag("noautofire"), Some(weapon_mbf21::NOAUTOFIRE));
        assert_eq!(weapon_flag("NOAUTOSWITCHTO"), Some(weapon_mbf21::NOAUTOSWITCHTO));
        assert_eq!(state_flag("skill5fast"), Some(state_mbf21::SKILL5FAST));
    }

    #[test]
    fn suggestions() {
        assert_eq!(suggest("SHOOTABEL", THING_FLAGS.iter().copied()), Some("SHOOTABLE"));
        assert_eq!(suggest("zzzzzz", THING_FLAGS.iter().copied()), None);
    }
}
