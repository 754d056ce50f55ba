//! The records stored in a [`super::PatchContext`].
//!
//! Fields with a restricted range are private and can only be changed through setters that
//! reject out-of-range values with a [`RangeError`], leaving the record untouched.

use crate::error::RangeError;

macro_rules! checked_fields {
    (
        impl $record:ident {
            $( $field:ident, $setter:ident: $ty:ty = $name:literal [$min:expr, $max:expr]; )*
        }
    ) => {
        impl $record {
            $(
                pub fn $field(&self) -> $ty { self.$field }

                pub fn $setter(&mut self, value: $ty) -> Result<(), RangeError> {
                    self.$field = RangeError::check($name, $min, $max, value)?;
                    Ok(())
                }
            )*
        }
    };
}

const MAX: i32 = i32::MAX;

// =============================================================================

/// Named state slots of a thing, in the order that DeHackEd lists them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
pub enum ThingFrame {
    Spawn, See, Pain, Melee, Missile, Death, ExtremeDeath, Raise,
}

impl ThingFrame {
    pub fn label(self) -> &'static str {
        match self {
            ThingFrame::Spawn => "spawn",
            ThingFrame::See => "see",
            ThingFrame::Pain => "pain",
            ThingFrame::Melee => "melee",
            ThingFrame::Missile => "missile",
            ThingFrame::Death => "death",
            ThingFrame::ExtremeDeath => "xdeath",
            ThingFrame::Raise => "raise",
        }
    }

    pub fn from_label(label: &str) -> Option<ThingFrame> {
        use strum::IntoEnumIterator;
        ThingFrame::iter().find(|frame| frame.label().eq_ignore_ascii_case(label))
    }
}

/// Sound slots of a thing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
pub enum ThingSound {
    See, Attack, Pain, Death, Active, Rip,
}

impl ThingSound {
    /// The property name used in scripts.
    pub fn property(self) -> &'static str {
        match self {
            ThingSound::See => "seesound",
            ThingSound::Attack => "attacksound",
            ThingSound::Pain => "painsound",
            ThingSound::Death => "deathsound",
            ThingSound::Active => "activesound",
            ThingSound::Rip => "ripsound",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thing {
    pub name: String,
    editor_number: i32,
    health: i32,
    speed: i32,
    fast_speed: i32,
    radius: i32,
    height: i32,
    damage: i32,
    reaction_time: i32,
    pain_chance: i32,
    mass: i32,
    melee_range: i32,
    infighting_group: i32,
    projectile_group: i32,
    splash_group: i32,
    dropped_item: i32,
    pub flags: u32,
    pub mbf21_flags: u32,
    frames: [i32; 8],
    sounds: [i32; 6],
}

impl Default for Thing {
    fn default() -> Self {
        Thing {
            name: String::new(),
            editor_number: -1,
            health: 0,
            speed: 0,
            fast_speed: -1,
            radius: 0,
            height: 0,
            damage: 0,
            reaction_time: 0,
            pain_chance: 0,
            mass: 0,
            melee_range: 64,
            infighting_group: 0,
            projectile_group: 0,
            splash_group: 0,
            dropped_item: 0,
            flags: 0,
            mbf21_flags: 0,
            frames: [0; 8],
            sounds: [0; 6],
        }
    }
}

checked_fields! {
    impl Thing {
        health, set_health: i32 = "health" [0, 999999];
        speed, set_speed: i32 = "speed" [0, 65535];
        fast_speed, set_fast_speed: i32 = "fastspeed" [-1, 65535];
        radius, set_radius: i32 = "radius" [0, 65535];
        height, set_height: i32 = "height" [0, 65535];
        damage, set_damage: i32 = "damage" [-999999, 999999];
        reaction_time, set_reaction_time: i32 = "reactiontime" [0, MAX];
        pain_chance, set_pain_chance: i32 = "painchance" [0, MAX];
        mass, set_mass: i32 = "mass" [0, MAX];
        melee_range, set_melee_range: i32 = "meleerange" [0, 65535];
        infighting_group, set_infighting_group: i32 = "infightinggroup" [0, MAX];
        projectile_group, set_projectile_group: i32 = "projectilegroup" [-1, MAX];
        splash_group, set_splash_group: i32 = "splashgroup" [0, MAX];
        dropped_item, set_dropped_item: i32 = "dropitem" [0, MAX];
    }
}

impl Thing {
    pub fn editor_number(&self) -> i32 { self.editor_number }

    /// `-1` means the thing can't be placed in maps.  Zero is never a valid editor number.
    pub fn set_editor_number(&mut self, value: i32) -> Result<(), RangeError> {
        if value == 0 {
            return Err(RangeError { field: "ednum", min: 1, max: 0x10000, got: 0 });
        }
        self.editor_number = RangeError::check("ednum", -1, 0x10000, value)?;
        Ok(())
    }

    pub fn frame(&self, slot: ThingFrame) -> i32 { self.frames[slot as usize] }

    pub fn set_frame(&mut self, slot: ThingFrame, state: i32) -> Result<(), RangeError> {
        self.frames[slot as usize] = RangeError::check(slot.label(), 0, MAX, state)?;
        Ok(())
    }

    pub fn sound(&self, slot: ThingSound) -> i32 { self.sounds[slot as usize] }

    pub fn set_sound(&mut self, slot: ThingSound, sound: i32) -> Result<(), RangeError> {
        self.sounds[slot as usize] = RangeError::check(slot.property(), 0, MAX, sound)?;
        Ok(())
    }

    pub fn is_missile(&self) -> bool { self.flags & crate::flags::THING_MISSILE != 0 }

    /// Reset every numeric property to that of a blank thing, keeping flags, states and sounds.
    pub fn clear_properties(&mut self) {
        let blank = Thing::default();
        *self = Thing {
            name: std::mem::take(&mut self.name),
            flags: self.flags,
            mbf21_flags: self.mbf21_flags,
            frames: self.frames,
            sounds: self.sounds,
            ..blank
        };
    }

    pub fn clear_frames(&mut self) { self.frames = [0; 8]; }
    pub fn clear_sounds(&mut self) { self.sounds = [0; 6]; }
    pub fn clear_flags(&mut self) {
        self.flags = 0;
        self.mbf21_flags = 0;
    }
}

// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    sprite: i32,
    frame: i32,
    pub bright: bool,
    next: i32,
    duration: i32,
    pub misc1: i32,
    pub misc2: i32,
    pub args: [i32; 8],
    pub mbf21_flags: u32,
}

impl Default for State {
    fn default() -> Self {
        State {
            sprite: 0,
            frame: 0,
            bright: false,
            next: 0,
            duration: -1,
            misc1: 0,
            misc2: 0,
            args: [0; 8],
            mbf21_flags: 0,
        }
    }
}

checked_fields! {
    impl State {
        sprite, set_sprite: i32 = "sprite" [0, MAX];
        frame, set_frame: i32 = "frame" [0, 28];
        next, set_next: i32 = "nextstate" [0, MAX];
        duration, set_duration: i32 = "duration" [-1, 9999];
    }
}

impl State {
    /// A state record as written in baseline tables.
    pub fn new(sprite: i32, frame: i32, bright: bool, next: i32, duration: i32) -> Result<State, RangeError> {
        let mut state = State { bright, ..State::default() };
        state.set_sprite(sprite)?;
        state.set_frame(frame)?;
        state.set_next(next)?;
        state.set_duration(duration)?;
        Ok(state)
    }

    pub fn clear_parameters(&mut self) {
        self.misc1 = 0;
        self.misc2 = 0;
        self.args = [0; 8];
    }
}

// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sound {
    priority: i32,
    pub singular: bool,
}

impl Default for Sound {
    fn default() -> Self { Sound { priority: 127, singular: false } }
}

checked_fields! {
    impl Sound {
        priority, set_priority: i32 = "priority" [0, 255];
    }
}

impl Sound {
    pub fn new(priority: i32, singular: bool) -> Result<Sound, RangeError> {
        let mut sound = Sound { priority: 0, singular };
        sound.set_priority(priority)?;
        Ok(sound)
    }
}

// =============================================================================

/// Ammunition used by a weapon.  The discriminants are the values written to patches.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
pub enum AmmoType {
    Bullets = 0,
    Shells = 1,
    Cells = 2,
    Rockets = 3,
    Unused = 4,
    Infinite = 5,
}

impl AmmoType {
    pub fn index(self) -> i32 { self as i32 }

    /// Ammo types that a script may assign.  ("unused" is excluded)
    pub fn from_script_index(index: i32) -> Option<AmmoType> {
        match index {
            0 => Some(AmmoType::Bullets),
            1 => Some(AmmoType::Shells),
            2 => Some(AmmoType::Cells),
            3 => Some(AmmoType::Rockets),
            5 => Some(AmmoType::Infinite),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<AmmoType> {
        match &name.to_ascii_lowercase()[..] {
            "bullets" => Some(AmmoType::Bullets),
            "shells" => Some(AmmoType::Shells),
            "cells" => Some(AmmoType::Cells),
            "rockets" => Some(AmmoType::Rockets),
            "infinite" => Some(AmmoType::Infinite),
            _ => None,
        }
    }
}

/// Named state slots of a weapon, in the order that DeHackEd lists them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
pub enum WeaponFrame {
    Raise, Lower, Ready, Fire, Flash,
}

impl WeaponFrame {
    pub fn label(self) -> &'static str {
        match self {
            WeaponFrame::Raise => "select",
            WeaponFrame::Lower => "deselect",
            WeaponFrame::Ready => "ready",
            WeaponFrame::Fire => "fire",
            WeaponFrame::Flash => "flash",
        }
    }

    pub fn from_label(label: &str) -> Option<WeaponFrame> {
        use strum::IntoEnumIterator;
        WeaponFrame::iter().find(|frame| frame.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub name: String,
    pub ammo_type: AmmoType,
    frames: [i32; 5],
    ammo_per_shot: i32,
    pub mbf21_flags: u32,
}

impl Default for Weapon {
    fn default() -> Self {
        Weapon {
            name: String::new(),
            ammo_type: AmmoType::Infinite,
            frames: [0; 5],
            ammo_per_shot: 1,
            mbf21_flags: 0,
        }
    }
}

checked_fields! {
    impl Weapon {
        ammo_per_shot, set_ammo_per_shot: i32 = "ammopershot" [0, MAX];
    }
}

impl Weapon {
    pub fn frame(&self, slot: WeaponFrame) -> i32 { self.frames[slot as usize] }

    pub fn set_frame(&mut self, slot: WeaponFrame, state: i32) -> Result<(), RangeError> {
        self.frames[slot as usize] = RangeError::check(slot.label(), 0, MAX, state)?;
        Ok(())
    }

    pub fn clear_frames(&mut self) { self.frames = [0; 5]; }

    pub fn clear_properties(&mut self) {
        self.ammo_type = AmmoType::Infinite;
        self.ammo_per_shot = 1;
        self.mbf21_flags = 0;
    }
}

// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ammo {
    pub name: String,
    max: i32,
    pickup: i32,
}

checked_fields! {
    impl Ammo {
        max, set_max: i32 = "max" [0, 999999];
        pickup, set_pickup: i32 = "pickup" [0, 999999];
    }
}

// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miscellany {
    pub monsters_infight: bool,
    initial_bullets: i32,
    initial_health: i32,
    green_armor_class: i32,
    blue_armor_class: i32,
    soulsphere_health: i32,
    max_soulsphere_health: i32,
    megasphere_health: i32,
    god_mode_health: i32,
    idfa_armor: i32,
    idfa_armor_class: i32,
    idkfa_armor: i32,
    idkfa_armor_class: i32,
    bfg_cells_per_shot: i32,
    max_health: i32,
    max_armor: i32,
}

impl Default for Miscellany {
    fn default() -> Self {
        Miscellany {
            monsters_infight: false,
            initial_bullets: 50,
            initial_health: 100,
            green_armor_class: 1,
            blue_armor_class: 2,
            soulsphere_health: 100,
            max_soulsphere_health: 200,
            megasphere_health: 200,
            god_mode_health: 100,
            idfa_armor: 200,
            idfa_armor_class: 2,
            idkfa_armor: 200,
            idkfa_armor_class: 2,
            bfg_cells_per_shot: 40,
            max_health: 200,
            max_armor: 200,
        }
    }
}

checked_fields! {
    impl Miscellany {
        initial_bullets, set_initial_bullets: i32 = "initialbullets" [0, MAX];
        initial_health, set_initial_health: i32 = "initialhealth" [0, MAX];
        green_armor_class, set_green_armor_class: i32 = "greenarmorclass" [0, MAX];
        blue_armor_class, set_blue_armor_class: i32 = "bluearmorclass" [0, MAX];
        soulsphere_health, set_soulsphere_health: i32 = "soulspherehealth" [0, 255];
        max_soulsphere_health, set_max_soulsphere_health: i32 = "maxsoulspherehealth" [0, MAX];
        megasphere_health, set_megasphere_health: i32 = "megaspherehealth" [0, MAX];
        god_mode_health, set_god_mode_health: i32 = "godmodehealth" [0, MAX];
        idfa_armor, set_idfa_armor: i32 = "idfaarmor" [0, MAX];
        idfa_armor_class, set_idfa_armor_class: i32 = "idfaarmorclass" [0, MAX];
        idkfa_armor, set_idkfa_armor: i32 = "idkfaarmor" [0, MAX];
        idkfa_armor_class, set_idkfa_armor_class: i32 = "idkfaarmorclass" [0, MAX];
        bfg_cells_per_shot, set_bfg_cells_per_shot: i32 = "bfgcellspershot" [0, 255];
        max_health, set_max_health: i32 = "maxhealth" [0, MAX];
        max_armor, set_max_armor: i32 = "maxarmor" [0, MAX];
    }
}

/// Numeric fields of [`Miscellany`], addressable by their script property name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter)]
pub enum MiscField {
    InitialBullets,
    InitialHealth,
    GreenArmorClass,
    BlueArmorClass,
    SoulsphereHealth,
    MaxSoulsphereHealth,
    MegasphereHealth,
    GodModeHealth,
    IdfaArmor,
    IdfaArmorClass,
    IdkfaArmor,
    IdkfaArmorClass,
    BfgCellsPerShot,
    MaxHealth,
    MaxArmor,
}

impl MiscField {
    pub fn property(self) -> &'static str {
        use MiscField::*;
        match self {
            InitialBullets => "initialbullets",
            InitialHealth => "initialhealth",
            GreenArmorClass => "greenarmorclass",
            BlueArmorClass => "bluearmorclass",
            SoulsphereHealth => "soulspherehealth",
            MaxSoulsphereHealth => "maxsoulspherehealth",
            MegasphereHealth => "megaspherehealth",
            GodModeHealth => "godmodehealth",
            IdfaArmor => "idfaarmor",
            IdfaArmorClass => "idfaarmorclass",
            IdkfaArmor => "idkfaarmor",
            IdkfaArmorClass => "idkfaarmorclass",
            BfgCellsPerShot => "bfgcellspershot",
            MaxHealth => "maxhealth",
            MaxArmor => "maxarmor",
        }
    }

    /// The line key used in the `Misc` section of a patch.
    pub fn patch_key(self) -> &'static str {
        use MiscField::*;
        match self {
            InitialBullets => "Initial Bullets",
            InitialHealth => "Initial Health",
            GreenArmorClass => "Green Armor Class",
            BlueArmorClass => "Blue Armor Class",
            SoulsphereHealth => "Soulsphere Health",
            MaxSoulsphereHealth => "Max Soulsphere",
            MegasphereHealth => "Megasphere Health",
            GodModeHealth => "God Mode Health",
            IdfaArmor => "IDFA Armor",
            IdfaArmorClass => "IDFA Armor Class",
            IdkfaArmor => "IDKFA Armor",
            IdkfaArmorClass => "IDKFA Armor Class",
            BfgCellsPerShot => "BFG Cells/Shot",
            MaxHealth => "Max Health",
            MaxArmor => "Max Armor",
        }
    }

    pub fn from_property(name: &str) -> Option<MiscField> {
        use strum::IntoEnumIterator;
        MiscField::iter().find(|field| field.property().eq_ignore_ascii_case(name))
    }
}

impl Miscellany {
    pub fn get(&self, field: MiscField) -> i32 {
        use MiscField::*;
        match field {
            InitialBullets => self.initial_bullets(),
            InitialHealth => self.initial_health(),
            GreenArmorClass => self.green_armor_class(),
            BlueArmorClass => self.blue_armor_class(),
            SoulsphereHealth => self.soulsphere_health(),
            MaxSoulsphereHealth => self.max_soulsphere_health(),
            MegasphereHealth => self.megasphere_health(),
            GodModeHealth => self.god_mode_health(),
            IdfaArmor => self.idfa_armor(),
            IdfaArmorClass => self.idfa_armor_class(),
            IdkfaArmor => self.idkfa_armor(),
            IdkfaArmorClass => self.idkfa_armor_class(),
            BfgCellsPerShot => self.bfg_cells_per_shot(),
            MaxHealth => self.max_health(),
            MaxArmor => self.max_armor(),
        }
    }

    pub fn set(&mut self, field: MiscField, value: i32) -> Result<(), RangeError> {
        use MiscField::*;
        match field {
            InitialBullets => self.set_initial_bullets(value),
            InitialHealth => self.set_initial_health(value),
            GreenArmorClass => self.set_green_armor_class(value),
            BlueArmorClass => self.set_blue_armor_class(value),
            SoulsphereHealth => self.set_soulsphere_health(value),
            MaxSoulsphereHealth => self.set_max_soulsphere_health(value),
            MegasphereHealth => self.set_megasphere_health(value),
            GodModeHealth => self.set_god_mode_health(value),
            IdfaArmor => self.set_idfa_armor(value),
            IdfaArmorClass => self.set_idfa_armor_class(value),
            IdkfaArmor => self.set_idkfa_armor(value),
            IdkfaArmorClass => self.set_idkfa_armor_class(value),
            BfgCellsPerShot => self.set_bfg_cells_per_shot(value),
            MaxHealth => self.set_max_health(value),
            MaxArmor => self.set_max_armor(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_boundaries(
        mut set: impl FnMut(i32) -> Result<(), RangeError>,
        min: i32,
        max: i32,
    ) {
        assert!(set(min).is_ok());
        assert!(set(max).is_ok());
        if min > i32::MIN {
            assert_eq!(set(min - 1).unwrap_err().got, min as i64 - 1);
        }
        if max < i32::MAX {
            assert_eq!(set(max + 1).unwrap_err().got, max as i64 + 1);
        }
    }

    #[test]
    fn thing_ranges() {
        let mut thing = Thing::default();
        assert_boundaries(|x| thing.set_editor_number(x), -1, 0x10000);
        assert_boundaries(|x| thing.set_health(x), 0, 999999);
        assert_boundaries(|x| thing.set_speed(x), 0, 65535);
        assert_boundaries(|x| thing.set_fast_speed(x), -1, 65535);
        assert_boundaries(|x| thing.set_damage(x), -999999, 999999);
        assert_boundaries(|x| thing.set_pain_chance(x), 0, i32::MAX);
        assert_boundaries(|x| thing.set_projectile_group(x), -1, i32::MAX);
        assert_boundaries(|x| thing.set_frame(ThingFrame::Raise, x), 0, i32::MAX);
    }

    #[test]
    fn editor_number_zero() {
        let mut thing = Thing::default();
        thing.set_editor_number(3004).unwrap();
        let err = thing.set_editor_number(0).unwrap_err();
        assert_eq!(err.got, 0);
        assert_eq!(thing.editor_number(), 3004);
        thing.set_editor_number(-1).unwrap();
        assert_eq!(thing.editor_number(), -1);
    }

    #[test]
    fn pain_chance_above_byte() {
        // Lost Soul and Commander Keen always flinch
        let mut thing = Thing::default();
        thing.set_pain_chance(256).unwrap();
        assert_eq!(thing.pain_chance(), 256);
        assert!(thing.set_pain_chance(-1).is_err());
    }

    #[test]
    fn failed_set_does_not_mutate() {
        let mut thing = Thing::default();
        thing.set_health(50).unwrap();
        let err = thing.set_health(1_000_000).unwrap_err();
        assert_eq!(err, RangeError { field: "health", min: 0, max: 999999, got: 1_000_000 });
        assert_eq!(thing.health(), 50);
    }

    #[test]
    fn state_ranges() {
        let mut state = State::default();
        assert_boundaries(|x| state.set_frame(x), 0, 28);
        assert_boundaries(|x| state.set_duration(x), -1, 9999);
        assert_boundaries(|x| state.set_next(x), 0, i32::MAX);
    }

    #[test]
    fn misc_ranges() {
        let mut misc = Miscellany::default();
        assert_boundaries(|x| misc.set(MiscField::SoulsphereHealth, x), 0, 255);
        assert_boundaries(|x| misc.set(MiscField::BfgCellsPerShot, x), 0, 255);
        assert_boundaries(|x| misc.set(MiscField::MaxArmor, x), 0, i32::MAX);

        // the soulsphere setter validates its own value, not another field's
        let mut misc = Miscellany::default();
        misc.set_blue_armor_class(1000).unwrap();
        assert!(misc.set_soulsphere_health(256).is_err());
        misc.set_soulsphere_health(150).unwrap();
        assert_eq!(misc.get(MiscField::SoulsphereHealth), 150);
    }

    #[test]
    fn other_ranges() {
        let mut sound = Sound::default();
        assert_boundaries(|x| sound.set_priority(x), 0, 255);
        let mut ammo = Ammo::default();
        assert_boundaries(|x| ammo.set_max(x), 0, 999999);
        assert_boundaries(|x| ammo.set_pickup(x), 0, 999999);
    }

    #[test]
    fn clear_properties_keeps_states() {
        let mut thing = Thing::default();
        thing.set_health(400).unwrap();
        thing.set_frame(ThingFrame::Spawn, 12).unwrap();
        thing.flags = 0x6;
        thing.clear_properties();
        assert_eq!(thing.health(), 0);
        assert_eq!(thing.frame(ThingFrame::Spawn), 12);
        assert_eq!(thing.flags, 0x6);
    }

    #[test]
    fn labels() {
        assert_eq!(ThingFrame::from_label("XDEATH"), Some(ThingFrame::ExtremeDeath));
        assert_eq!(WeaponFrame::from_label("select"), Some(WeaponFrame::Raise));
        assert_eq!(WeaponFrame::from_label("spawn"), None);
        assert_eq!(MiscField::from_property("MaxHealth"), Some(MiscField::MaxHealth));
    }
}
