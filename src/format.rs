use std::fmt;

use crate::error::CompileError;

/// Capability tier of a patch.  Each level is a strict superset of the ones before it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::EnumIter)]
pub enum FeatureLevel {
    Doom19,
    Boom,
    Mbf,
    Extended,
    Mbf21,
    DsdHacked,
}

impl FeatureLevel {
    /// Whether a feature introduced at `required` is available at this level.
    pub fn supports(self, required: FeatureLevel) -> bool { required <= self }
}

/// The family of action pointers a patch may use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::EnumIter)]
pub enum PointerKind {
    Doom19,
    Mbf,
    Mbf21,
}

impl PointerKind {
    pub fn supports(self, required: PointerKind) -> bool { required <= self }

    pub fn descr(self) -> &'static str {
        match self {
            PointerKind::Doom19 => "Doom 1.9",
            PointerKind::Mbf => "MBF",
            PointerKind::Mbf21 => "MBF21",
        }
    }
}

/// A patch format, as named by the `using` clause at the top of a script.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
pub enum PatchFormat {
    Doom19,
    UDoom19,
    Boom,
    Mbf,
    Extended,
    Mbf21,
    DsdHacked,
}

macro_rules! format_keyword_list { () => { "doom19, udoom19, boom, mbf, extended, mbf21, dsdhacked" }; }

impl std::str::FromStr for PatchFormat {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_ascii_lowercase()[..] {
            "doom19" => Ok(PatchFormat::Doom19),
            "udoom19" => Ok(PatchFormat::UDoom19),
            "boom" => Ok(PatchFormat::Boom),
            "mbf" => Ok(PatchFormat::Mbf),
            "extended" => Ok(PatchFormat::Extended),
            "mbf21" => Ok(PatchFormat::Mbf21),
            "dsdhacked" => Ok(PatchFormat::DsdHacked),
            _ => Err(PatchFormat::unknown_format_error()),
        }
    }
}

impl PatchFormat {
    /// The error for a `using` clause that does not name a format.
    pub fn unknown_format_error() -> CompileError {
        error!(message(concat!("Expected valid patch format type (", format_keyword_list!(), ").")))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatchFormat::Doom19 => "doom19",
            PatchFormat::UDoom19 => "udoom19",
            PatchFormat::Boom => "boom",
            PatchFormat::Mbf => "mbf",
            PatchFormat::Extended => "extended",
            PatchFormat::Mbf21 => "mbf21",
            PatchFormat::DsdHacked => "dsdhacked",
        }
    }

    pub fn feature_level(self) -> FeatureLevel {
        match self {
            PatchFormat::Doom19 | PatchFormat::UDoom19 => FeatureLevel::Doom19,
            PatchFormat::Boom => FeatureLevel::Boom,
            PatchFormat::Mbf => FeatureLevel::Mbf,
            PatchFormat::Extended => FeatureLevel::Extended,
            PatchFormat::Mbf21 => FeatureLevel::Mbf21,
            PatchFormat::DsdHacked => FeatureLevel::DsdHacked,
        }
    }

    pub fn pointer_kind(self) -> PointerKind {
        match self.feature_level() {
            FeatureLevel::Doom19 | FeatureLevel::Boom => PointerKind::Doom19,
            FeatureLevel::Mbf | FeatureLevel::Extended => PointerKind::Mbf,
            FeatureLevel::Mbf21 | FeatureLevel::DsdHacked => PointerKind::Mbf21,
        }
    }

    /// Value written to the `Doom version` line of the patch header.
    pub fn doom_version(self) -> i32 {
        match self.feature_level() {
            FeatureLevel::Doom19 => 19,
            _ => 21,
        }
    }

    /// Value written to the `Patch format` line of the patch header.
    pub fn patch_format(self) -> i32 { 6 }

    pub fn supports(self, level: FeatureLevel) -> bool { self.feature_level().supports(level) }
}

impl fmt::Display for PatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn keywords_round_trip() {
        for format in PatchFormat::iter() {
            assert_eq!(format.as_str().parse::<PatchFormat>().unwrap(), format);
            assert_eq!(format.as_str().to_uppercase().parse::<PatchFormat>().unwrap(), format);
        }
    }

    #[test]
    fn unknown_keyword() {
        let err = "zdoom".parse::<PatchFormat>().unwrap_err();
        assert_eq!(err.messages(), vec![
            "Expected valid patch format type (doom19, udoom19, boom, mbf, extended, mbf21, dsdhacked).",
        ]);
    }

    #[test]
    fn levels_and_pointer_kinds() {
        use PatchFormat as F;
        let table = [
            (F::Doom19, FeatureLevel::Doom19, PointerKind::Doom19, 19),
            (F::UDoom19, FeatureLevel::Doom19, PointerKind::Doom19, 19),
            (F::Boom, FeatureLevel::Boom, PointerKind::Doom19, 21),
            (F::Mbf, FeatureLevel::Mbf, PointerKind::Mbf, 21),
            (F::Extended, FeatureLevel::Extended, PointerKind::Mbf, 21),
            (F::Mbf21, FeatureLevel::Mbf21, PointerKind::Mbf21, 21),
            (F::DsdHacked, FeatureLevel::DsdHacked, PointerKind::Mbf21, 21),
        ];
        for (format, level, kind, version) in table {
            assert_eq!(format.feature_level(), level);
            assert_eq!(format.pointer_kind(), kind);
            assert_eq!(format.doom_version(), version);
        }
    }

    #[test]
    fn levels_are_ordered() {
        let levels = FeatureLevel::iter().collect::<Vec<_>>();
        for (i, &a) in levels.iter().enumerate() {
            for (j, &b) in levels.iter().enumerate() {
                assert_eq!(a.supports(b), j <= i);
            }
        }
    }
}
