//! The catalog of action pointers.
//!
//! Pointers are grouped by the [`PointerKind`] that introduced them.  The catalog available to
//! a patch is every pointer whose kind is at most the patch's pointer kind, so catalogs of higher
//! kinds are supersets of lower ones by construction.

use std::collections::HashMap;

use crate::format::PointerKind;
use crate::value::ValueType;

mod table;

/// An action pointer definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPointer {
    /// Canonical spelling, without the `A_` prefix.
    pub mnemonic: &'static str,
    pub kind: PointerKind,
    /// The first vanilla state that runs this pointer, written as `Codep Frame` in Doom 1.9 patches.
    pub frame: Option<i32>,
    pub is_weapon: bool,
    pub params: &'static [ValueType],
}

impl ActionPointer {
    pub fn is_null(&self) -> bool { self.mnemonic == "NULL" }

    /// MBF pointers take their parameters through the `misc1` and `misc2` fields of the state.
    pub fn uses_misc_fields(&self) -> bool { self.kind == PointerKind::Mbf }

    /// How this pointer is written in scripts.
    pub fn display_name(&self) -> String {
        match self.is_null() {
            true => "NULL".to_string(),
            false => format!("A_{}", self.mnemonic),
        }
    }
}

lazy_static::lazy_static! {
    static ref POINTERS: Vec<ActionPointer> = {
        table::POINTERS.iter().map(|&(mnemonic, kind, frame, is_weapon, params)| {
            ActionPointer { mnemonic, kind, frame, is_weapon, params }
        }).collect()
    };

    static ref BY_NAME: HashMap<String, &'static ActionPointer> = {
        POINTERS.iter().map(|ptr| (ptr.mnemonic.to_ascii_uppercase(), ptr)).collect()
    };

}

/// Case-insensitive lookup.  A leading `A_` is optional.
pub fn lookup(name: &str) -> Option<&'static ActionPointer> {
    let upper = name.to_ascii_uppercase();
    let key = upper.strip_prefix("A_").unwrap_or(&upper);
    BY_NAME.get(key).copied()
}

pub fn null() -> &'static ActionPointer {
    &POINTERS[0]
}

pub fn supports(kind: PointerKind, ptr: &ActionPointer) -> bool {
    kind.supports(ptr.kind)
}

/// Every pointer available to patches of the given pointer kind.
pub fn catalog(kind: PointerKind) -> impl Iterator<Item=&'static ActionPointer> {
    POINTERS.iter().filter(move |ptr| supports(kind, ptr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn case_insensitive() {
        let look = lookup("A_Look").unwrap();
        assert_eq!(lookup("A_LOOK"), Some(look));
        assert_eq!(lookup("a_look"), Some(look));
        assert_eq!(lookup("Look"), Some(look));
        assert_eq!(look.display_name(), "A_Look");
        assert_eq!(lookup("A_NotAPointer"), None);
    }

    #[test]
    fn null_pointer() {
        assert!(null().is_null());
        assert_eq!(lookup("null"), Some(null()));
        assert_eq!(null().display_name(), "NULL");
    }

    #[test]
    fn monotonic() {
        let kinds = PointerKind::iter().collect::<Vec<_>>();
        for pair in kinds.windows(2) {
            let lower = catalog(pair[0]).collect::<Vec<_>>();
            let higher = catalog(pair[1]).collect::<Vec<_>>();
            assert!(lower.len() < higher.len());
            for ptr in lower {
                let found = higher.iter().find(|p| p.mnemonic == ptr.mnemonic).unwrap();
                assert_eq!(found.params, ptr.params);
            }
        }
    }

    #[test]
    fn kinds() {
        assert!(!supports(PointerKind::Doom19, lookup("A_Mushroom").unwrap()));
        assert!(supports(PointerKind::Mbf, lookup("A_Mushroom").unwrap()));
        assert!(!supports(PointerKind::Mbf, lookup("A_SpawnObject").unwrap()));
        assert!(lookup("A_Mushroom").unwrap().uses_misc_fields());
        assert!(lookup("A_WeaponSound").unwrap().is_weapon);
        assert_eq!(lookup("A_SpawnObject").unwrap().params.len(), 8);
    }
}
