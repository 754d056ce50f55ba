//! The mutable state of a patch being compiled.
//!
//! A [`PatchContext`] owns every table that a script can modify, alongside an immutable twin
//! holding the unmodified data for its [`PatchFormat`].  The exporter diffs one against the other.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::core_tables;
use crate::error::{IndexError, RangeError};
use crate::format::{FeatureLevel, PatchFormat};
use crate::pointer::{self, ActionPointer};

pub use records::*;
mod records;

pub mod strings;
use strings::{StringTable, StringKey, StringError, EpisodeMap};

/// Tables whose size can grow in a DSDHacked patch are capped at this many entries.
pub const DSDHACKED_INDEX_LIMIT: usize = 1 << 20;

/// One full set of patchable tables.
#[derive(Debug, Clone)]
pub struct Tables {
    pub things: Vec<Thing>,
    pub states: Vec<State>,
    /// Action pointer slot of each state.  `None` means the state has no slot at all.
    pub pointers: Vec<Option<&'static ActionPointer>>,
    pub sounds: Vec<Sound>,
    pub weapons: Vec<Weapon>,
    pub ammo: Vec<Ammo>,
    pub misc: Miscellany,
    pub strings: StringTable,
    pub pars: IndexMap<EpisodeMap, i32>,
    pub sprite_names: Vec<String>,
    /// Index 0 is the empty name of "no sound".
    pub sound_names: Vec<String>,
}

/// Something that owns a set of state labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ActorRef {
    Thing(usize),
    Weapon(usize),
}

impl ActorRef {
    pub fn descr(self) -> &'static str {
        match self {
            ActorRef::Thing(_) => "thing",
            ActorRef::Weapon(_) => "weapon",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ActorRef::Thing(index) | ActorRef::Weapon(index) => index,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatchContext {
    format: PatchFormat,
    tables: Tables,
    baseline: Tables,
    free_states: Vec<bool>,
    protected_states: Vec<bool>,
    /// Labels other than the built-in state slots, keyed in lowercase.
    custom_labels: HashMap<ActorRef, IndexMap<String, i32>>,
}

impl PatchContext {
    pub fn new(format: PatchFormat) -> Result<Self, RangeError> {
        let baseline = core_tables::baseline(format)?;
        let state_count = baseline.states.len();
        let mut protected_states = vec![false; state_count];
        protected_states[0] = true;
        protected_states[1] = true;

        Ok(PatchContext {
            format,
            tables: baseline.clone(),
            baseline,
            free_states: vec![false; state_count],
            protected_states,
            custom_labels: HashMap::new(),
        })
    }

    pub fn format(&self) -> PatchFormat { self.format }
    pub fn supports(&self, level: FeatureLevel) -> bool { self.format.supports(level) }
    pub fn can_grow(&self) -> bool { self.supports(FeatureLevel::DsdHacked) }

    /// The current tables.
    pub fn tables(&self) -> &Tables { &self.tables }
    /// The unmodified tables of this patch format.
    pub fn baseline(&self) -> &Tables { &self.baseline }

    pub fn thing_count(&self) -> usize { self.tables.things.len() }
    pub fn state_count(&self) -> usize { self.tables.states.len() }
    pub fn sound_count(&self) -> usize { self.tables.sounds.len() }
    pub fn weapon_count(&self) -> usize { self.tables.weapons.len() }
    pub fn ammo_count(&self) -> usize { self.tables.ammo.len() }

    pub fn thing(&self, index: usize) -> Result<&Thing, IndexError> {
        check_index("thing", index, self.tables.things.len())?;
        Ok(&self.tables.things[index])
    }

    pub fn thing_mut(&mut self, index: usize) -> Result<&mut Thing, IndexError> {
        check_index("thing", index, self.tables.things.len())?;
        Ok(&mut self.tables.things[index])
    }

    pub fn state(&self, index: usize) -> Result<&State, IndexError> {
        check_index("state", index, self.tables.states.len())?;
        Ok(&self.tables.states[index])
    }

    pub fn state_mut(&mut self, index: usize) -> Result<&mut State, IndexError> {
        check_index("state", index, self.tables.states.len())?;
        Ok(&mut self.tables.states[index])
    }

    pub fn sound(&self, index: usize) -> Result<&Sound, IndexError> {
        check_index("sound", index, self.tables.sounds.len())?;
        Ok(&self.tables.sounds[index])
    }

    pub fn sound_mut(&mut self, index: usize) -> Result<&mut Sound, IndexError> {
        check_index("sound", index, self.tables.sounds.len())?;
        Ok(&mut self.tables.sounds[index])
    }

    pub fn weapon(&self, index: usize) -> Result<&Weapon, IndexError> {
        check_index("weapon", index, self.tables.weapons.len())?;
        Ok(&self.tables.weapons[index])
    }

    pub fn weapon_mut(&mut self, index: usize) -> Result<&mut Weapon, IndexError> {
        check_index("weapon", index, self.tables.weapons.len())?;
        Ok(&mut self.tables.weapons[index])
    }

    pub fn ammo(&self, index: usize) -> Result<&Ammo, IndexError> {
        check_index("ammo", index, self.tables.ammo.len())?;
        Ok(&self.tables.ammo[index])
    }

    pub fn ammo_mut(&mut self, index: usize) -> Result<&mut Ammo, IndexError> {
        check_index("ammo", index, self.tables.ammo.len())?;
        Ok(&mut self.tables.ammo[index])
    }

    pub fn misc(&self) -> &Miscellany { &self.tables.misc }
    pub fn misc_mut(&mut self) -> &mut Miscellany { &mut self.tables.misc }

    // =========================================================================
    // Growth

    /// Make sure that a thing index exists, growing the table if the format allows it.
    pub fn ensure_thing(&mut self, index: usize) -> Result<(), IndexError> {
        if index >= self.tables.things.len() && self.can_grow() && index < DSDHACKED_INDEX_LIMIT {
            self.grow_things(index + 1);
        }
        check_index("thing", index, self.tables.things.len())
    }

    pub fn ensure_state(&mut self, index: usize) -> Result<(), IndexError> {
        if index >= self.tables.states.len() && self.can_grow() && index < DSDHACKED_INDEX_LIMIT {
            self.grow_states(index + 1);
        }
        check_index("state", index, self.tables.states.len())
    }

    pub fn ensure_sound(&mut self, index: usize) -> Result<(), IndexError> {
        if index >= self.tables.sounds.len() && self.can_grow() && index < DSDHACKED_INDEX_LIMIT {
            self.grow_sounds(index + 1);
        }
        check_index("sound", index, self.tables.sounds.len())
    }

    /// Grow the thing tables to at least `count` entries.  Never shrinks.
    pub fn grow_things(&mut self, count: usize) {
        for tables in [&mut self.tables, &mut self.baseline] {
            if tables.things.len() < count {
                tables.things.resize(count, Thing::default());
            }
        }
    }

    pub fn grow_states(&mut self, count: usize) {
        let old_count = self.tables.states.len();
        if old_count >= count {
            return;
        }
        for tables in [&mut self.tables, &mut self.baseline] {
            for index in old_count..count {
                // the filler record is always in range
                if let Ok(state) = core_tables::blank_extended_state(index) {
                    tables.states.push(state);
                    tables.pointers.push(Some(pointer::null()));
                }
            }
        }
        self.free_states.resize(self.tables.states.len(), false);
        self.protected_states.resize(self.tables.states.len(), false);
    }

    pub fn grow_sounds(&mut self, count: usize) {
        for tables in [&mut self.tables, &mut self.baseline] {
            if tables.sounds.len() < count {
                tables.sounds.resize(count, Sound::default());
                tables.sound_names.resize(count, String::new());
            }
        }
    }

    // =========================================================================
    // Action pointers

    /// Whether a state has an action pointer slot.  Only relevant for Doom 1.9 patches.
    pub fn has_pointer_slot(&self, state: usize) -> bool {
        matches!(self.tables.pointers.get(state), Some(Some(_)))
    }

    pub fn pointer(&self, state: usize) -> Option<&'static ActionPointer> {
        self.tables.pointers.get(state).copied().flatten()
    }

    /// Assign the pointer of a state.  Does nothing for a state without a pointer slot.
    pub fn set_pointer(&mut self, state: usize, ptr: &'static ActionPointer) -> Result<(), IndexError> {
        check_index("state", state, self.tables.pointers.len())?;
        if let Some(slot) = &mut self.tables.pointers[state] {
            *slot = ptr;
        }
        Ok(())
    }

    // =========================================================================
    // Sprite and sound names

    /// Case-insensitive lookup of a sprite index.  DSDHacked patches allocate a new index for
    /// any unknown name of exactly four characters.
    pub fn sprite_index(&mut self, name: &str) -> Option<usize> {
        if let Some(index) = find_name(&self.tables.sprite_names, name) {
            return Some(index);
        }
        if self.can_grow() && name.len() == 4 && name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            let index = self.tables.sprite_names.len();
            if index >= DSDHACKED_INDEX_LIMIT {
                return None;
            }
            self.tables.sprite_names.push(name.to_ascii_uppercase());
            return Some(index);
        }
        None
    }

    /// Lookup without allocation.
    pub fn find_sprite(&self, name: &str) -> Option<usize> {
        find_name(&self.tables.sprite_names, name)
    }

    /// Case-insensitive lookup of a sound index.  An optional `DS` prefix is ignored.
    /// DSDHacked patches allocate a new index for any unknown name.
    pub fn sound_index(&mut self, name: &str) -> Option<usize> {
        if let Some(index) = self.find_sound(name) {
            return Some(index);
        }
        let name = strip_sound_prefix(name);
        if name.is_empty() {
            return None;
        }
        if self.can_grow() && name.len() <= 6 {
            let index = self.tables.sounds.len();
            if index >= DSDHACKED_INDEX_LIMIT {
                return None;
            }
            self.grow_sounds(index + 1);
            self.tables.sound_names[index] = name.to_ascii_uppercase();
            return Some(index);
        }
        None
    }

    pub fn find_sound(&self, name: &str) -> Option<usize> {
        find_name(&self.tables.sound_names, name)
            .or_else(|| find_name(&self.tables.sound_names, strip_sound_prefix(name)))
    }

    /// Sprite names that were not part of the baseline, for `[SPRITES]`.
    pub fn new_sprite_names(&self) -> impl Iterator<Item=(usize, &str)> + '_ {
        let start = self.baseline.sprite_names.len();
        self.tables.sprite_names.iter().enumerate().skip(start).map(|(i, name)| (i, &name[..]))
    }

    /// Sound names that differ from the baseline, for `[SOUNDS]`.
    pub fn new_sound_names(&self) -> impl Iterator<Item=(usize, &str)> + '_ {
        self.tables.sound_names.iter().zip(&self.baseline.sound_names).enumerate()
            .filter(|(_, (new, old))| new != old)
            .map(|(i, (new, _))| (i, &new[..]))
    }

    // =========================================================================
    // Strings and pars

    pub fn string(&self, key: &StringKey<'_>) -> Option<&str> { self.tables.strings.get(key) }
    pub fn original_string(&self, key: &StringKey<'_>) -> Option<&str> { self.baseline.strings.get(key) }
    pub fn string_keys(&self) -> Vec<&str> { self.baseline.strings.keys() }
    pub fn string_count(&self) -> usize { self.baseline.strings.len() }

    /// Replace a string.  In a Doom 1.9 patch, replacing a sprite or sound name also renames it
    /// for subsequent lookups.
    pub fn set_string(&mut self, key: StringKey<'_>, value: &str) -> Result<(), StringError> {
        let index = match key {
            StringKey::Index(index) => Some(index),
            StringKey::Name(_) => None,
        };
        self.tables.strings.set(&self.baseline.strings, key, value)?;

        if let Some(index) = index {
            let sprite_count = self.baseline.sprite_names.len();
            if index < sprite_count {
                self.tables.sprite_names[index] = value.to_string();
            } else if let Some(name) = self.tables.sound_names.get_mut(index - sprite_count + 1) {
                *name = value.to_string();
            }
        }
        Ok(())
    }

    pub fn par(&self, map: EpisodeMap) -> Option<i32> { self.tables.pars.get(&map).copied() }

    pub fn set_par(&mut self, map: EpisodeMap, seconds: i32) -> Result<(), RangeError> {
        let seconds = RangeError::check("par", 0, i32::MAX, seconds)?;
        self.tables.pars.insert(map, seconds);
        Ok(())
    }

    // =========================================================================
    // Free and protected states

    pub fn is_free_state(&self, index: usize) -> bool { self.free_states.get(index).copied().unwrap_or(false) }
    pub fn is_protected_state(&self, index: usize) -> bool { self.protected_states.get(index).copied().unwrap_or(false) }

    /// Free and not protected.
    pub fn is_fillable_state(&self, index: usize) -> bool {
        self.is_free_state(index) && !self.is_protected_state(index)
    }

    pub fn set_free_state(&mut self, index: usize, free: bool) -> Result<(), IndexError> {
        check_index("state", index, self.free_states.len())?;
        self.free_states[index] = free;
        Ok(())
    }

    /// Mark an inclusive range of states as free or used.  The bounds may be given in either order.
    pub fn set_free_states(&mut self, first: usize, last: usize, free: bool) -> Result<(), IndexError> {
        let (min, max) = (first.min(last), first.max(last));
        check_index("state", max, self.free_states.len())?;
        self.free_states[min..=max].iter_mut().for_each(|x| *x = free);
        Ok(())
    }

    pub fn set_protected_states(&mut self, first: usize, last: usize, protected: bool) -> Result<(), IndexError> {
        let (min, max) = (first.min(last), first.max(last));
        check_index("state", max, self.protected_states.len())?;
        self.protected_states[min..=max].iter_mut().for_each(|x| *x = protected);
        Ok(())
    }

    /// Free a state and everything that follows it through `next`, stopping at the first state
    /// that is already free or protected.  Returns the number of states freed.
    pub fn free_connected_states(&mut self, start: usize) -> usize {
        let mut count = 0;
        let mut index = start;
        while index < self.free_states.len() && !self.is_free_state(index) && !self.is_protected_state(index) {
            self.free_states[index] = true;
            count += 1;
            index = self.tables.states[index].next() as usize;
        }
        count
    }

    /// Free every state chain reachable from the labels of an actor.
    pub fn free_actor_states(&mut self, actor: ActorRef) -> Result<usize, IndexError> {
        let starts = self.actor_labels(actor)?.into_iter().map(|(_, state)| state).collect::<Vec<_>>();
        Ok(starts.into_iter().map(|state| self.free_connected_states(state as usize)).sum())
    }

    /// Search for the next fillable state at or after `start`, wrapping around the end of the table.
    ///
    /// `wants_pointer` restricts the search to states with (`Some(true)`) or without (`Some(false)`)
    /// an action pointer slot.
    pub fn find_next_free_state(&self, start: usize, wants_pointer: Option<bool>) -> Option<usize> {
        let count = self.free_states.len();
        if count == 0 {
            return None;
        }
        let start = start % count;
        (start..count).chain(0..start).find(|&index| {
            self.is_fillable_state(index) && match wants_pointer {
                Some(wants) => self.has_pointer_slot(index) == wants,
                None => true,
            }
        })
    }

    pub fn free_state_count(&self) -> usize {
        (0..self.free_states.len()).filter(|&i| self.is_fillable_state(i)).count()
    }

    pub fn free_pointer_state_count(&self) -> usize {
        (0..self.free_states.len()).filter(|&i| self.is_fillable_state(i) && self.has_pointer_slot(i)).count()
    }

    // =========================================================================
    // Actor labels

    /// Look up a state label of a thing or weapon.  Labels that name a state slot of the actor
    /// (like `spawn` or `fire`) read that slot, and are undefined while the slot is 0.
    pub fn actor_label(&self, actor: ActorRef, label: &str) -> Result<Option<i32>, IndexError> {
        let slot_value = match actor {
            ActorRef::Thing(index) => ThingFrame::from_label(label).map(|slot| self.thing(index).map(|t| t.frame(slot))),
            ActorRef::Weapon(index) => WeaponFrame::from_label(label).map(|slot| self.weapon(index).map(|w| w.frame(slot))),
        };
        match slot_value {
            Some(value) => Ok(Some(value?).filter(|&state| state != 0)),
            None => {
                self.check_actor(actor)?;
                Ok(self.custom_labels.get(&actor).and_then(|labels| labels.get(&label.to_ascii_lowercase())).copied())
            },
        }
    }

    /// Set a state label.  Setting a label to 0 removes it.
    pub fn set_actor_label(&mut self, actor: ActorRef, label: &str, state: i32) -> Result<(), RangeError> {
        let state = RangeError::check("state", 0, i32::MAX, state)?;
        match actor {
            ActorRef::Thing(index) => if let Some(slot) = ThingFrame::from_label(label) {
                if let Some(thing) = self.tables.things.get_mut(index) {
                    thing.set_frame(slot, state)?;
                }
                return Ok(());
            },
            ActorRef::Weapon(index) => if let Some(slot) = WeaponFrame::from_label(label) {
                if let Some(weapon) = self.tables.weapons.get_mut(index) {
                    weapon.set_frame(slot, state)?;
                }
                return Ok(());
            },
        }
        let labels = self.custom_labels.entry(actor).or_default();
        match state {
            0 => { labels.shift_remove(&label.to_ascii_lowercase()); },
            _ => { labels.insert(label.to_ascii_lowercase(), state); },
        }
        Ok(())
    }

    /// Every defined label of an actor, state slots first.
    pub fn actor_labels(&self, actor: ActorRef) -> Result<Vec<(String, i32)>, IndexError> {
        use strum::IntoEnumIterator;

        let mut out = match actor {
            ActorRef::Thing(index) => {
                let thing = self.thing(index)?;
                ThingFrame::iter().map(|slot| (slot.label().to_string(), thing.frame(slot))).collect::<Vec<_>>()
            },
            ActorRef::Weapon(index) => {
                let weapon = self.weapon(index)?;
                WeaponFrame::iter().map(|slot| (slot.label().to_string(), weapon.frame(slot))).collect::<Vec<_>>()
            },
        };
        out.retain(|&(_, state)| state != 0);
        if let Some(labels) = self.custom_labels.get(&actor) {
            out.extend(labels.iter().map(|(label, &state)| (label.clone(), state)));
        }
        Ok(out)
    }

    /// Remove every label of an actor, including its state slots.
    pub fn clear_actor_labels(&mut self, actor: ActorRef) -> Result<(), IndexError> {
        match actor {
            ActorRef::Thing(index) => self.thing_mut(index)?.clear_frames(),
            ActorRef::Weapon(index) => self.weapon_mut(index)?.clear_frames(),
        }
        self.custom_labels.remove(&actor);
        Ok(())
    }

    fn check_actor(&self, actor: ActorRef) -> Result<(), IndexError> {
        match actor {
            ActorRef::Thing(index) => self.thing(index).map(drop),
            ActorRef::Weapon(index) => self.weapon(index).map(drop),
        }
    }

    // =========================================================================
    // Copying

    /// Make `dest` a copy of `source`, including its labels.
    pub fn copy_actor(&mut self, source: ActorRef, dest: ActorRef) -> Result<(), IndexError> {
        match (source, dest) {
            (ActorRef::Thing(source), ActorRef::Thing(dest)) => {
                let thing = self.thing(source)?.clone();
                *self.thing_mut(dest)? = thing;
            },
            (ActorRef::Weapon(source), ActorRef::Weapon(dest)) => {
                let weapon = self.weapon(source)?.clone();
                *self.weapon_mut(dest)? = weapon;
            },
            _ => unreachable!("copy between different actor kinds"),
        }
        match self.custom_labels.get(&source).cloned() {
            Some(labels) => { self.custom_labels.insert(dest, labels); },
            None => { self.custom_labels.remove(&dest); },
        }
        Ok(())
    }

    /// Exchange two actors of the same kind, including their labels.
    pub fn swap_actors(&mut self, a: ActorRef, b: ActorRef) -> Result<(), IndexError> {
        match (a, b) {
            (ActorRef::Thing(a), ActorRef::Thing(b)) => {
                check_index("thing", a.max(b), self.tables.things.len())?;
                self.tables.things.swap(a, b);
            },
            (ActorRef::Weapon(a), ActorRef::Weapon(b)) => {
                check_index("weapon", a.max(b), self.tables.weapons.len())?;
                self.tables.weapons.swap(a, b);
            },
            _ => unreachable!("swap between different actor kinds"),
        }
        let labels_a = self.custom_labels.remove(&a);
        let labels_b = self.custom_labels.remove(&b);
        if let Some(labels) = labels_a {
            self.custom_labels.insert(b, labels);
        }
        if let Some(labels) = labels_b {
            self.custom_labels.insert(a, labels);
        }
        Ok(())
    }
}

fn check_index(kind: &'static str, index: usize, count: usize) -> Result<(), IndexError> {
    match index < count {
        true => Ok(()),
        false => Err(IndexError { kind, index: index as i64, count }),
    }
}

fn find_name(names: &[String], name: &str) -> Option<usize> {
    names.iter().position(|candidate| !candidate.is_empty() && candidate.eq_ignore_ascii_case(name))
}

fn strip_sound_prefix(name: &str) -> &str {
    match name.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("DS") && name.len() > 2 => &name[2..],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let mut ctx = PatchContext::new(PatchFormat::Doom19).unwrap();
        assert_eq!(ctx.thing(1).unwrap().name, "Player");
        assert_eq!(ctx.thing(138).unwrap_err().to_string(), "Invalid thing index: 138. Max is 137.");
        ctx.thing_mut(2).unwrap().set_health(30).unwrap();
        assert_eq!(ctx.thing(2).unwrap().health(), 30);
        assert_eq!(ctx.baseline().things[2].health(), 20);
        assert!(ctx.ensure_state(5000).is_err());
    }

    #[test]
    fn dsdhacked_growth() {
        let mut ctx = PatchContext::new(PatchFormat::DsdHacked).unwrap();
        let old = ctx.state_count();
        ctx.ensure_state(old + 10).unwrap();
        assert_eq!(ctx.state_count(), old + 11);
        assert_eq!(ctx.baseline().states.len(), old + 11);
        assert_eq!(ctx.state(old + 10).unwrap().next(), (old + 10) as i32);
        assert!(!ctx.is_free_state(old + 10));

        let sprite = ctx.sprite_index("ZZZZ").unwrap();
        assert_eq!(ctx.sprite_index("zzzz"), Some(sprite));
        assert_eq!(ctx.new_sprite_names().collect::<Vec<_>>(), vec![(sprite, "ZZZZ")]);
        assert_eq!(ctx.sprite_index("TOOLONG"), None);

        let sound = ctx.sound_index("newsnd").unwrap();
        assert_eq!(ctx.find_sound("DSNEWSND"), Some(sound));
    }

    #[test]
    fn fixed_formats_do_not_grow() {
        let mut ctx = PatchContext::new(PatchFormat::Mbf21).unwrap();
        assert_eq!(ctx.sprite_index("ZZZZ"), None);
        assert_eq!(ctx.sound_index("newsnd"), None);
        assert_eq!(ctx.sound_index("dspistol"), Some(1));
        assert_eq!(ctx.sprite_index("troo"), ctx.find_sprite("TROO"));
    }

    #[test]
    fn free_and_protect() {
        let mut ctx = PatchContext::new(PatchFormat::Boom).unwrap();
        assert!(ctx.is_protected_state(0));
        assert!(ctx.is_protected_state(1));
        assert_eq!(ctx.find_next_free_state(0, None), None);

        // chain 10 -> 11 -> 12 -> 10
        for (index, next) in [(10, 11), (11, 12), (12, 10)] {
            ctx.state_mut(index).unwrap().set_next(next).unwrap();
        }
        assert_eq!(ctx.free_connected_states(10), 3);
        assert_eq!(ctx.free_state_count(), 3);
        assert_eq!(ctx.find_next_free_state(11, None), Some(11));
        assert_eq!(ctx.find_next_free_state(13, None), Some(10));

        ctx.set_protected_states(11, 11, true).unwrap();
        assert_eq!(ctx.find_next_free_state(11, None), Some(12));

        // protected states stop a chain
        ctx.state_mut(20).unwrap().set_next(1).unwrap();
        assert_eq!(ctx.free_connected_states(20), 1);
    }

    #[test]
    fn doom19_pointer_search() {
        let mut ctx = PatchContext::new(PatchFormat::Doom19).unwrap();
        ctx.set_free_states(2, 10, true).unwrap();
        // of states 2 through 10, only 5, 7 and 8 run no action
        assert_eq!(ctx.find_next_free_state(2, Some(true)), Some(2));
        assert_eq!(ctx.find_next_free_state(2, Some(false)), Some(5));
        assert_eq!(ctx.find_next_free_state(7, Some(true)), Some(9));
        assert_eq!(ctx.free_pointer_state_count(), 6);
    }

    #[test]
    fn labels() {
        let mut ctx = PatchContext::new(PatchFormat::Boom).unwrap();
        let actor = ActorRef::Thing(2);
        let spawn = ctx.thing(2).unwrap().frame(ThingFrame::Spawn);
        assert_eq!(ctx.actor_label(actor, "SPAWN").unwrap(), Some(spawn).filter(|&s| s != 0));

        ctx.set_actor_label(actor, "Spawn", 100).unwrap();
        assert_eq!(ctx.thing(2).unwrap().frame(ThingFrame::Spawn), 100);
        ctx.set_actor_label(actor, "Charge", 200).unwrap();
        assert_eq!(ctx.actor_label(actor, "charge").unwrap(), Some(200));
        assert!(ctx.actor_labels(actor).unwrap().contains(&("charge".to_string(), 200)));

        ctx.copy_actor(actor, ActorRef::Thing(3)).unwrap();
        assert_eq!(ctx.actor_label(ActorRef::Thing(3), "charge").unwrap(), Some(200));

        ctx.clear_actor_labels(actor).unwrap();
        assert_eq!(ctx.actor_label(actor, "charge").unwrap(), None);
        assert_eq!(ctx.actor_label(actor, "spawn").unwrap(), None);
        assert!(ctx.actor_label(ActorRef::Weapon(99), "fire").is_err());
    }

    #[test]
    fn doom19_string_renames_sprite() {
        let mut ctx = PatchContext::new(PatchFormat::Doom19).unwrap();
        let troo = ctx.find_sprite("TROO").unwrap();
        ctx.set_string(StringKey::Index(troo), "IMPS").unwrap();
        assert_eq!(ctx.find_sprite("IMPS"), Some(troo));
        assert_eq!(ctx.find_sprite("TROO"), None);
    }
}
