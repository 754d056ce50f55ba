//! Built-in data of the unmodified game, as seen by each feature level.
//!
//! Entries are grouped by the feature level that introduced them, and a baseline for a given
//! patch format is assembled by applying every group up to that level.

use indexmap::IndexMap;

use crate::context::{Tables, Thing, ThingFrame, ThingSound, State, Sound, Weapon, WeaponFrame, Ammo, Miscellany};
use crate::context::strings::{StringTable, EpisodeMap};
use crate::error::RangeError;
use crate::format::{FeatureLevel, PatchFormat};
use crate::pointer::{self, ActionPointer};

mod frames;
mod names;
mod records;
mod strings;
mod things;

/// Index of the first extended sound name (`FRE000`).
pub const SOUND_INDEX_EXTENDED_START: usize = 500;
/// Index of the first state added by MBF.
pub const STATE_INDEX_MBF_START: usize = 968;
/// Index of the invisible `TNT1` state added by Boom.
pub const STATE_INDEX_TNT1: usize = 967;
/// Index of the `TNT1` sprite.
pub const SPRITE_INDEX_TNT1: usize = 138;

const VANILLA_STATE_COUNT: usize = 967;
const EXTENDED_THING_COUNT: usize = 251;
const EXTENDED_STATE_COUNT: usize = 4000;
const EXTENDED_SOUND_COUNT: usize = SOUND_INDEX_EXTENDED_START + 200;

pub(crate) struct ThingRow {
    name: &'static str,
    editor_number: i32,
    health: i32,
    speed: i32,
    radius: i32,
    height: i32,
    damage: i32,
    reaction_time: i32,
    pain_chance: i32,
    flags: u32,
    mass: i32,
    frames: [i32; 8],
    sounds: [i32; 5],
    dropped_item: i32,
}

#[allow(clippy::too_many_arguments)]
const fn thing(
    name: &'static str,
    editor_number: i32,
    health: i32,
    speed: i32,
    radius: i32,
    height: i32,
    damage: i32,
    reaction_time: i32,
    pain_chance: i32,
    flags: u32,
    mass: i32,
    frames: [i32; 8],
    sounds: [i32; 5],
    dropped_item: i32,
) -> ThingRow {
    ThingRow {
        name, editor_number, health, speed, radius, height, damage, reaction_time,
        pain_chance, flags, mass, frames, sounds, dropped_item,
    }
}

impl ThingRow {
    fn to_thing(&self) -> Result<Thing, RangeError> {
        use strum::IntoEnumIterator;

        let mut thing = Thing::default();
        thing.name = self.name.to_string();
        thing.flags = self.flags;
        thing.set_editor_number(self.editor_number)?;
        thing.set_health(self.health)?;
        thing.set_speed(self.speed)?;
        thing.set_radius(self.radius)?;
        thing.set_height(self.height)?;
        thing.set_damage(self.damage)?;
        thing.set_reaction_time(self.reaction_time)?;
        thing.set_pain_chance(self.pain_chance)?;
        thing.set_mass(self.mass)?;
        thing.set_dropped_item(self.dropped_item)?;
        for (slot, &state) in ThingFrame::iter().zip(&self.frames) {
            thing.set_frame(slot, state)?;
        }
        for (slot, &sound) in ThingSound::iter().zip(&self.sounds) {
            thing.set_sound(slot, sound)?;
        }
        Ok(thing)
    }
}

/// Assemble the unmodified tables as seen by a patch format.
///
/// Fails only if a built-in entry is rejected by its own record's range checks.
pub fn baseline(format: PatchFormat) -> Result<Tables, RangeError> {
    build_baseline(format)
}

fn build_baseline(format: PatchFormat) -> Result<Tables, RangeError> {
    let level = format.feature_level();

    let mut thing_rows = things::VANILLA.iter().collect::<Vec<_>>();
    if level.supports(FeatureLevel::Boom) {
        thing_rows.extend(things::BOOM);
    }
    if level.supports(FeatureLevel::Mbf) {
        thing_rows.extend(things::MBF);
    }
    // DeHackEd numbers things from 1
    let mut things = vec![Thing::default()];
    for row in thing_rows {
        things.push(row.to_thing()?);
    }
    if level.supports(FeatureLevel::Extended) {
        things.resize(EXTENDED_THING_COUNT, Thing::default());
    }

    let mut sprite_names = names::SPRITES.to_vec();
    if level.supports(FeatureLevel::Mbf) {
        sprite_names.extend(names::SPRITES_MBF);
    }
    if level.supports(FeatureLevel::Extended) {
        sprite_names.extend(names::SPRITES_EXTENDED);
    }

    let mut sound_names = vec![""];
    sound_names.extend(names::SOUNDS);
    let mut sounds = vec![Sound::new(0, false)?];
    for &(priority, singular) in records::SOUNDS {
        sounds.push(Sound::new(priority, singular)?);
    }
    if level.supports(FeatureLevel::Mbf) {
        sound_names.extend(names::SOUNDS_MBF);
        for &(priority, singular) in records::SOUNDS_MBF {
            sounds.push(Sound::new(priority, singular)?);
        }
    }
    if level.supports(FeatureLevel::Extended) {
        sound_names.resize(SOUND_INDEX_EXTENDED_START, "");
        sound_names.extend(names::SOUNDS_EXTENDED);
        sounds.resize(EXTENDED_SOUND_COUNT, Sound::default());
    }
    debug_assert_eq!(sounds.len(), sound_names.len());

    let (states, pointers) = build_states(level)?;

    let weapons = records::WEAPONS.iter().map(|&(name, ammo_type, frames, ammo_per_shot, mbf21_flags)| {
        use strum::IntoEnumIterator;

        let mut weapon = Weapon::default();
        weapon.name = name.to_string();
        weapon.ammo_type = ammo_type;
        weapon.mbf21_flags = mbf21_flags;
        for (slot, state) in WeaponFrame::iter().zip(frames) {
            weapon.set_frame(slot, state)?;
        }
        weapon.set_ammo_per_shot(ammo_per_shot)?;
        Ok(weapon)
    }).collect::<Result<Vec<_>, RangeError>>()?;

    let ammo = records::AMMO.iter().map(|&(name, max, pickup)| {
        let mut ammo = Ammo::default();
        ammo.name = name.to_string();
        ammo.set_max(max)?;
        ammo.set_pickup(pickup)?;
        Ok(ammo)
    }).collect::<Result<Vec<_>, RangeError>>()?;

    let strings = match level {
        FeatureLevel::Doom19 => {
            // Doom 1.9 text replacement covers the sprite names followed by the sound names
            let sprites = sprite_names.iter();
            let sounds = sound_names.iter().skip(1);
            StringTable::Positional(sprites.chain(sounds).map(|s| s.to_string()).collect())
        },
        _ => StringTable::new_keyed(strings::KEYS.iter().copied()),
    };

    let mut pars = IndexMap::new();
    if level.supports(FeatureLevel::Boom) {
        for &(episode, map, seconds) in strings::PARS {
            pars.insert(EpisodeMap::new(episode, map), seconds);
        }
    }

    Ok(Tables {
        things,
        states,
        pointers,
        sounds,
        weapons,
        ammo,
        misc: Miscellany::default(),
        strings,
        pars,
        sprite_names: sprite_names.into_iter().map(String::from).collect(),
        sound_names: sound_names.into_iter().map(String::from).collect(),
    })
}

type PointerSlots = Vec<Option<&'static ActionPointer>>;

fn build_states(level: FeatureLevel) -> Result<(Vec<State>, PointerSlots), RangeError> {
    // Only states that run a vanilla action have a pointer slot in Doom 1.9.
    // Later formats can put a pointer on any state.
    let empty_slot = match level {
        FeatureLevel::Doom19 => None,
        _ => Some(pointer::null()),
    };
    let mut pointers = vec![empty_slot; VANILLA_STATE_COUNT];
    for &(index, mnemonic) in frames::ACTION_FRAMES {
        pointers[index] = Some(pointer::lookup(mnemonic).unwrap_or_else(pointer::null));
    }

    let mut states = vec![State::default(); VANILLA_STATE_COUNT];

    if level.supports(FeatureLevel::Boom) {
        let tnt1 = STATE_INDEX_TNT1 as i32;
        states.push(State::new(SPRITE_INDEX_TNT1 as i32, 0, false, tnt1, -1)?);
        pointers.push(Some(pointer::null()));
    }
    if level.supports(FeatureLevel::Mbf) {
        debug_assert_eq!(states.len(), STATE_INDEX_MBF_START);
        for &(sprite, frame, bright, next, duration, mnemonic) in records::STATES_MBF {
            states.push(State::new(sprite, frame, bright, next, duration)?);
            pointers.push(Some(pointer::lookup(mnemonic).unwrap_or_else(pointer::null)));
        }
    }
    if level.supports(FeatureLevel::Extended) {
        for index in states.len()..EXTENDED_STATE_COUNT {
            states.push(blank_extended_state(index)?);
            pointers.push(Some(pointer::null()));
        }
    }
    Ok((states, pointers))
}

/// The filler state used by formats that extend the state table.
pub(crate) fn blank_extended_state(index: usize) -> Result<State, RangeError> {
    State::new(SPRITE_INDEX_TNT1 as i32, 0, false, index as i32, -1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_format_builds() {
        for format in PatchFormat::iter() {
            let tables = build_baseline(format).unwrap();
            assert_eq!(tables.states.len(), tables.pointers.len());
            assert_eq!(tables.sounds.len(), tables.sound_names.len());
        }
    }

    #[test]
    fn sizes_grow_with_level() {
        let doom19 = baseline(PatchFormat::Doom19).unwrap();
        let boom = baseline(PatchFormat::Boom).unwrap();
        let mbf = baseline(PatchFormat::Mbf).unwrap();
        let extended = baseline(PatchFormat::Extended).unwrap();

        assert_eq!(doom19.things.len(), 138);
        assert_eq!(boom.things.len(), 140);
        assert_eq!(mbf.things.len(), 145);
        assert_eq!(extended.things.len(), EXTENDED_THING_COUNT);

        assert_eq!(doom19.states.len(), 967);
        assert_eq!(boom.states.len(), 968);
        assert_eq!(mbf.states.len(), 1076);
        assert_eq!(extended.states.len(), EXTENDED_STATE_COUNT);

        assert_eq!(doom19.sounds.len(), 109);
        assert_eq!(mbf.sounds.len(), 114);
        assert_eq!(extended.sound_names[SOUND_INDEX_EXTENDED_START], "FRE000");
    }

    #[test]
    fn known_entries() {
        let tables = baseline(PatchFormat::Mbf).unwrap();
        assert_eq!(tables.things[1].name, "Player");
        assert_eq!(tables.things[2].name, "Trooper");
        assert_eq!(tables.things[2].health(), 20);
        assert_eq!(tables.things[140].name, "Dog");
        assert_eq!(tables.sprite_names[SPRITE_INDEX_TNT1], "TNT1");
        assert_eq!(tables.ammo[0].name, "Bullets");
        assert_eq!(tables.ammo[0].max(), 200);
        assert_eq!(tables.weapons[6].ammo_per_shot(), 40);
        assert_eq!(tables.states[STATE_INDEX_TNT1].next(), STATE_INDEX_TNT1 as i32);
        assert_eq!(tables.pointers[STATE_INDEX_MBF_START].map(|p| p.mnemonic), Some("Die"));
    }

    #[test]
    fn mbf_state_pointers_exist() {
        for &(.., mnemonic) in records::STATES_MBF {
            assert!(pointer::lookup(mnemonic).is_some(), "{}", mnemonic);
        }
    }

    #[test]
    fn doom19_pointer_slots() {
        let tables = baseline(PatchFormat::Doom19).unwrap();
        assert_eq!(tables.pointers[5], None);
        assert_eq!(tables.pointers[6].map(|p| p.mnemonic), Some("Punch"));
        assert!(matches!(tables.strings, StringTable::Positional(_)));

        let tables = baseline(PatchFormat::Boom).unwrap();
        assert_eq!(tables.pointers[5].map(|p| p.mnemonic), Some("NULL"));
        assert!(tables.pars.contains_key(&EpisodeMap::new(1, 1)));
    }

    #[test]
    fn action_frames() {
        assert_eq!(frames::ACTION_FRAMES.len(), 448);
        assert!(frames::ACTION_FRAMES.windows(2).all(|pair| pair[0].0 < pair[1].0));
        for &(index, mnemonic) in frames::ACTION_FRAMES {
            assert!(index < VANILLA_STATE_COUNT);
            let ptr = pointer::lookup(mnemonic).unwrap();
            assert_eq!(ptr.kind, crate::format::PointerKind::Doom19, "{}", mnemonic);
        }

        let tables = baseline(PatchFormat::Doom19).unwrap();
        assert_eq!(tables.pointers.iter().flatten().count(), 448);
        // each pointer's own frame runs it
        for ptr in tables.pointers.iter().flatten() {
            let frame = ptr.frame.unwrap() as usize;
            assert_eq!(tables.pointers[frame].map(|p| p.mnemonic), Some(ptr.mnemonic));
        }
        assert_eq!(tables.pointers[218].map(|p| p.mnemonic), Some("SPosAttack"));
        assert_eq!(tables.pointers[811].map(|p| p.mnemonic), Some("Explode"));
        assert_eq!(tables.pointers[812], None);
    }
}
