//! Kinds of values that fields and action pointer parameters accept.

use std::fmt;

/// The kind of a value, with an inclusive range of accepted raw values.
///
/// The reference kinds ([`ValueType::State`], [`ValueType::Thing`], etc.) additionally tell the
/// parser what sort of symbolic name may appear where a number is expected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    UByte,
    Byte,
    Short,
    UShort,
    Int,
    UInt,
    AngleInt,
    AngleUInt,
    AngleFixed,
    Fixed,
    State,
    Thing,
    ThingMissile,
    Weapon,
    Sound,
    Flags,
}

impl ValueType {
    pub const FIXED_ONE: i32 = 1 << 16;

    pub fn min(self) -> i32 {
        use ValueType::*;
        match self {
            Bool | UByte | UShort | UInt | AngleUInt => 0,
            State | Thing | ThingMissile | Weapon | Sound => 0,
            Byte => i8::MIN as i32,
            Short => i16::MIN as i32,
            AngleInt => -359,
            AngleFixed => (-360 << 16) + 1,
            Int | Fixed | Flags => i32::MIN,
        }
    }

    pub fn max(self) -> i32 {
        use ValueType::*;
        match self {
            Bool => 1,
            UByte => u8::MAX as i32,
            Byte => i8::MAX as i32,
            Short => i16::MAX as i32,
            UShort => u16::MAX as i32,
            AngleInt | AngleUInt => 359,
            AngleFixed => (360 << 16) - 1,
            Int | UInt | Fixed | Flags => i32::MAX,
            State | Thing | ThingMissile | Weapon | Sound => i32::MAX,
        }
    }

    pub fn validate(self, value: i32) -> bool {
        self.min() <= value && value <= self.max()
    }

    /// Whether a decimal literal like `1.5` is meaningful here.  (it becomes 16.16 fixed point)
    pub fn accepts_fixed_literal(self) -> bool {
        matches!(self, ValueType::Fixed | ValueType::AngleFixed)
    }

    pub fn descr(self) -> &'static str {
        use ValueType::*;
        match self {
            Bool => "boolean",
            UByte => "unsigned byte",
            Byte => "byte",
            Short => "short",
            UShort => "unsigned short",
            Int => "integer",
            UInt => "unsigned integer",
            AngleInt => "angle",
            AngleUInt => "unsigned angle",
            AngleFixed => "fixed-point angle",
            Fixed => "fixed-point number",
            State => "state index",
            Thing => "thing index",
            ThingMissile => "missile thing index",
            Weapon => "weapon index",
            Sound => "sound index",
            Flags => "flags",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.descr(), f)
    }
}

/// Convert a decimal number to 16.16 fixed point, truncating toward zero.
pub fn to_fixed(value: f64) -> i32 {
    (value * ValueType::FIXED_ONE as f64) as i32
}

/// Convert an angle in degrees to 16.16 fixed point, clamped to the range of [`ValueType::AngleFixed`].
pub fn angle_to_fixed(degrees: f64) -> i32 {
    let ty = ValueType::AngleFixed;
    to_fixed(degrees).clamp(ty.min(), ty.max())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ValueType::*;

    const ALL: &[ValueType] = &[
        Bool, UByte, Byte, Short, UShort, Int, UInt, AngleInt, AngleUInt,
        AngleFixed, Fixed, State, Thing, ThingMissile, Weapon, Sound, Flags,
    ];

    #[test]
    fn boundaries() {
        for &ty in ALL {
            assert!(ty.min() <= ty.max(), "{:?}", ty);
            assert!(ty.validate(ty.min()), "{:?}", ty);
            assert!(ty.validate(ty.max()), "{:?}", ty);
            if ty.min() > i32::MIN {
                assert!(!ty.validate(ty.min() - 1), "{:?}", ty);
            }
            if ty.max() < i32::MAX {
                assert!(!ty.validate(ty.max() + 1), "{:?}", ty);
            }
        }
    }

    #[test]
    fn specific_ranges() {
        assert_eq!((UByte.min(), UByte.max()), (0, 255));
        assert_eq!((Byte.min(), Byte.max()), (-128, 127));
        assert_eq!((Short.min(), Short.max()), (-32768, 32767));
        assert_eq!((AngleInt.min(), AngleInt.max()), (-359, 359));
        assert_eq!((AngleFixed.min(), AngleFixed.max()), (-23592959, 23592959));
        assert_eq!((Sound.min(), Sound.max()), (0, i32::MAX));
    }

    #[test]
    fn fixed_conversion() {
        assert_eq!(to_fixed(1.0), 65536);
        assert_eq!(to_fixed(1.5), 98304);
        assert_eq!(to_fixed(-0.5), -32768);
        assert_eq!(angle_to_fixed(90.0), 90 * 65536);
        assert_eq!(angle_to_fixed(360.0), AngleFixed.max());
        assert_eq!(angle_to_fixed(-400.0), AngleFixed.min());
    }
}
