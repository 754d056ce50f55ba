use std::fmt;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::IndexError;

/// Replaceable strings of a patch.
///
/// Doom 1.9 patches address strings by position and can only replace them with text that is no
/// longer than the original.  Later formats address strings by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringTable {
    Positional(Vec<String>),
    Keyed(IndexMap<String, String>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StringError {
    #[error("String index out of range. Must be from 0 to {}.", .0.count.saturating_sub(1))]
    BadIndex(IndexError),
    #[error("Incoming string value for index {index} is longer than the original string length: {max_len}.")]
    TooLong { index: usize, max_len: usize },
    #[error("Strings in this patch are replaced by index, not by name.")]
    NeedsIndex,
    #[error("Strings in this patch are replaced by name, not by index.")]
    NeedsKey,
}

/// Address of a string in a [`StringTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl StringTable {
    pub fn new_keyed<'a>(keys: impl IntoIterator<Item=&'a str>) -> Self {
        StringTable::Keyed(keys.into_iter().map(|key| (key.to_string(), String::new())).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            StringTable::Positional(strings) => strings.len(),
            StringTable::Keyed(strings) => strings.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Whether a key is part of the table.  Keys outside of the table can still be set.
    pub fn has_key(&self, name: &str) -> bool {
        match self {
            StringTable::Positional(_) => false,
            StringTable::Keyed(strings) => strings.contains_key(&name.to_ascii_uppercase()),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        match self {
            StringTable::Positional(_) => vec![],
            StringTable::Keyed(strings) => strings.keys().map(|k| &k[..]).collect(),
        }
    }

    pub fn get(&self, key: &StringKey<'_>) -> Option<&str> {
        match (self, key) {
            (StringTable::Positional(strings), &StringKey::Index(index)) => strings.get(index).map(|s| &s[..]),
            (StringTable::Keyed(strings), StringKey::Name(name)) => {
                strings.get(&name.to_ascii_uppercase()).map(|s| &s[..])
            },
            _ => None,
        }
    }

    /// Replace a string.  `original` is the baseline table, used for the length limit of positional strings.
    pub fn set(&mut self, original: &StringTable, key: StringKey<'_>, value: &str) -> Result<(), StringError> {
        match (self, key) {
            (StringTable::Positional(strings), StringKey::Index(index)) => {
                let max_len = match original.get(&StringKey::Index(index)) {
                    Some(s) => s.len(),
                    None => return Err(StringError::BadIndex(IndexError {
                        kind: "string", index: index as i64, count: strings.len(),
                    })),
                };
                if value.len() > max_len {
                    return Err(StringError::TooLong { index, max_len });
                }
                strings[index] = value.to_string();
                Ok(())
            },
            (StringTable::Keyed(strings), StringKey::Name(name)) => {
                strings.insert(name.to_ascii_uppercase(), value.to_string());
                Ok(())
            },
            (StringTable::Positional(_), StringKey::Name(_)) => Err(StringError::NeedsIndex),
            (StringTable::Keyed(_), StringKey::Index(_)) => Err(StringError::NeedsKey),
        }
    }

    /// Every string that differs from the baseline, in table order.
    pub fn changes<'a>(&'a self, original: &'a StringTable) -> Vec<(StringKey<'a>, &'a str, &'a str)> {
        match (self, original) {
            (StringTable::Positional(strings), StringTable::Positional(originals)) => {
                strings.iter().zip(originals).enumerate()
                    .filter(|(_, (new, old))| new != old)
                    .map(|(index, (new, old))| (StringKey::Index(index), &old[..], &new[..]))
                    .collect()
            },
            (StringTable::Keyed(strings), StringTable::Keyed(originals)) => {
                strings.iter()
                    .filter_map(|(key, new)| {
                        let old = originals.get(key).map_or("", |s| &s[..]);
                        (new != old).then(|| (StringKey::Name(&key[..]), old, &new[..]))
                    })
                    .collect()
            },
            _ => vec![],
        }
    }
}

// =============================================================================

/// An episode and map pair, as used by par times.  Episode 0 means the map is named `MAPxx`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeMap {
    pub episode: i32,
    pub map: i32,
}

lazy_static::lazy_static! {
    static ref EXMY_RE: Regex = Regex::new(r"(?i)^E(\d+)M(\d+)$").expect("valid regex");
    static ref MAPXX_RE: Regex = Regex::new(r"(?i)^MAP(\d+)$").expect("valid regex");
}

impl EpisodeMap {
    pub fn new(episode: i32, map: i32) -> Self { EpisodeMap { episode, map } }

    /// Parse a map lump name like `E1M1` or `MAP07`.
    pub fn parse_lump(name: &str) -> Option<EpisodeMap> {
        if let Some(caps) = EXMY_RE.captures(name) {
            let episode = caps[1].parse().ok()?;
            let map = caps[2].parse().ok()?;
            return Some(EpisodeMap::new(episode, map));
        }
        if let Some(caps) = MAPXX_RE.captures(name) {
            return Some(EpisodeMap::new(0, caps[1].parse().ok()?));
        }
        None
    }
}

impl fmt::Display for EpisodeMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.episode {
            0 => write!(f, "MAP{:02}", self.map),
            episode => write!(f, "E{}M{}", episode, self.map),
        }
    }
}

/// Escape a string for a `[STRINGS]` section.
///
/// A double quote is only escaped when it is neither the first nor the last character.
pub fn escape(s: &str) -> String {
    let char_count = s.chars().count();
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        match c {
            '\0' => out.push_str("\\0"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '"' if i != 0 && i + 1 != char_count => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed() {
        let original = StringTable::new_keyed(vec!["GOTARMOR", "HUSTR_E1M1"]);
        let mut table = original.clone();
        table.set(&original, StringKey::Name("gotarmor"), "Armor!").unwrap();
        assert_eq!(table.get(&StringKey::Name("GOTARMOR")), Some("Armor!"));
        assert_eq!(table.set(&original, StringKey::Index(0), "x"), Err(StringError::NeedsKey));

        // keys outside the table are added at the end
        assert!(!original.has_key("MSG001"));
        table.set(&original, StringKey::Name("MSG001"), "Hello").unwrap();
        assert!(table.has_key("msg001"));

        let changes = table.changes(&original);
        assert_eq!(changes, vec![
            (StringKey::Name("GOTARMOR"), "", "Armor!"),
            (StringKey::Name("MSG001"), "", "Hello"),
        ]);
    }

    #[test]
    fn positional() {
        let original = StringTable::Positional(vec!["TROO".to_string(), "pistol".to_string()]);
        let mut table = original.clone();
        table.set(&original, StringKey::Index(1), "bang").unwrap();
        assert_eq!(
            table.set(&original, StringKey::Index(0), "TOOLONG"),
            Err(StringError::TooLong { index: 0, max_len: 4 }),
        );
        let err = table.set(&original, StringKey::Index(2), "x").unwrap_err();
        assert_eq!(err.to_string(), "String index out of range. Must be from 0 to 1.");
        assert_eq!(table.changes(&original), vec![(StringKey::Index(1), "pistol", "bang")]);
    }

    #[test]
    fn escaping() {
        assert_eq!(escape("Hello"), "Hello");
        assert_eq!(escape("a\nb\tc\\"), "a\\nb\\tc\\\\");
        assert_eq!(escape("\"quoted\""), "\"quoted\"");
        assert_eq!(escape("say \"hi\" now"), "say \\\"hi\\\" now");
    }

    #[test]
    fn episode_map() {
        assert_eq!(EpisodeMap::parse_lump("e1m8"), Some(EpisodeMap::new(1, 8)));
        assert_eq!(EpisodeMap::parse_lump("MAP07"), Some(EpisodeMap::new(0, 7)));
        assert_eq!(EpisodeMap::parse_lump("E1"), None);
        assert_eq!(EpisodeMap::new(0, 7).to_string(), "MAP07");
        assert_eq!(EpisodeMap::new(2, 3).to_string(), "E2M3");
    }
}
