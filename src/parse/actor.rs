//! `thing` and `weapon` entries.

use strum::IntoEnumIterator;

use crate::context::{ActorRef, AmmoType, Thing, ThingSound};
use crate::error::RangeError;
use crate::format::FeatureLevel;
use crate::pos::Span;
use super::state::GotoTarget;
use super::value::{FlagBits, FlagSet};
use super::{ErrorAt, Parser, PResult, TokenKind};

/// Editor numbers that the game reserves for player starts and teleport destinations.
const RESERVED_EDITOR_NUMBERS: &[i32] = &[0, 1, 2, 3, 4, 11];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Sign {
    Any,
    Positive,
}

/// An integer property of a thing.
struct ThingProperty {
    name: &'static str,
    sign: Sign,
    mbf21: bool,
    set: fn(&mut Thing, i32) -> Result<(), RangeError>,
}

const THING_PROPERTIES: &[ThingProperty] = &[
    ThingProperty { name: "health", sign: Sign::Any, mbf21: false, set: Thing::set_health },
    ThingProperty { name: "speed", sign: Sign::Any, mbf21: false, set: Thing::set_speed },
    ThingProperty { name: "radius", sign: Sign::Positive, mbf21: false, set: Thing::set_radius },
    ThingProperty { name: "height", sign: Sign::Positive, mbf21: false, set: Thing::set_height },
    ThingProperty { name: "damage", sign: Sign::Any, mbf21: false, set: Thing::set_damage },
    ThingProperty { name: "reactiontime", sign: Sign::Positive, mbf21: false, set: Thing::set_reaction_time },
    ThingProperty { name: "painchance", sign: Sign::Positive, mbf21: false, set: Thing::set_pain_chance },
    ThingProperty { name: "mass", sign: Sign::Positive, mbf21: false, set: Thing::set_mass },
    ThingProperty { name: "fastspeed", sign: Sign::Any, mbf21: true, set: Thing::set_fast_speed },
    ThingProperty { name: "meleerange", sign: Sign::Positive, mbf21: true, set: Thing::set_melee_range },
    ThingProperty { name: "infightinggroup", sign: Sign::Positive, mbf21: true, set: Thing::set_infighting_group },
    ThingProperty { name: "projectilegroup", sign: Sign::Any, mbf21: true, set: Thing::set_projectile_group },
    ThingProperty { name: "splashgroup", sign: Sign::Positive, mbf21: true, set: Thing::set_splash_group },
];

impl Parser {
    pub(super) fn parse_thing_entry(&mut self) -> PResult<()> {
        self.bump(); // thing
        let index = self.match_thing_index()?;
        let actor = ActorRef::Thing(index.value);

        if self.eat_ident("swap").is_some() {
            self.expect_ident("with", "Expected \"with\" after \"swap\".")?;
            let other = self.match_thing_index()?;
            return self.ctx.swap_actors(actor, ActorRef::Thing(other.value)).at(other.span);
        }
        if self.eat_ident("free").is_some() {
            return self.parse_actor_free(actor);
        }

        if self.eat_kind(TokenKind::Colon).is_some() {
            self.expect_ident("thing", "Expected \"thing\" after ':'.")?;
            let source = self.match_thing_index()?;
            self.ctx.copy_actor(ActorRef::Thing(source.value), actor).at(source.span)?;
        }
        if let Some(name) = self.eat_string()? {
            self.ctx.thing_mut(index.value).at(name.span)?.name = name.value;
        }
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after \"thing\" declaration.")?;
        let close_message = "Expected '}' after \"thing\" section.";
        while !self.at_block_end(close_message)? {
            self.parse_thing_item(index.value)?;
        }
        self.expect_block_end(close_message)
    }

    pub(super) fn parse_weapon_entry(&mut self) -> PResult<()> {
        self.bump(); // weapon
        let index = self.match_weapon_index()?;
        let actor = ActorRef::Weapon(index.value);

        if self.eat_ident("swap").is_some() {
            self.expect_ident("with", "Expected \"with\" after \"swap\".")?;
            let other = self.match_weapon_index()?;
            return self.ctx.swap_actors(actor, ActorRef::Weapon(other.value)).at(other.span);
        }
        if self.eat_ident("free").is_some() {
            return self.parse_actor_free(actor);
        }

        if self.eat_kind(TokenKind::Colon).is_some() {
            self.expect_ident("weapon", "Expected \"weapon\" after ':'.")?;
            let source = self.match_weapon_index()?;
            self.ctx.copy_actor(ActorRef::Weapon(source.value), actor).at(source.span)?;
        }
        if let Some(name) = self.eat_string()? {
            self.ctx.weapon_mut(index.value).at(name.span)?.name = name.value;
        }
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after \"weapon\" declaration.")?;
        let close_message = "Expected '}' after \"weapon\" section.";
        while !self.at_block_end(close_message)? {
            self.parse_weapon_item(index.value)?;
        }
        self.expect_block_end(close_message)
    }

    /// `free states` or `free <label>`.
    fn parse_actor_free(&mut self, actor: ActorRef) -> PResult<()> {
        if let Some(span) = self.eat_ident("states") {
            self.ctx.free_actor_states(actor).at(span)?;
            return Ok(());
        }
        let label = match self.eat_any_ident() {
            Some(label) => label,
            None => return Err(self.error_here(format_args!(
                "Expected {} state name or \"states\" after \"free\".", actor.descr(),
            ))),
        };
        match self.ctx.actor_label(actor, &label).at(label.span)? {
            Some(state) => {
                self.ctx.free_connected_states(state as usize);
                Ok(())
            },
            None => Err(self.undeclared_label_error(actor, &label)),
        }
    }

    // =========================================================================
    // Things

    fn parse_thing_item(&mut self, index: usize) -> PResult<()> {
        let actor = ActorRef::Thing(index);
        let span = self.span_here();

        if let Some(add) = self.eat_flag_sign() {
            let bits = match self.eat_ident("mbf21") {
                Some(keyword) => {
                    if !self.supports(FeatureLevel::Mbf21) {
                        return Err(self.error_at(keyword, "MBF21 thing flags are not available. Not an MBF21 patch."));
                    }
                    let value = self.expect_positive_integer("Expected integer after \"+ mbf21\".")?;
                    FlagBits { standard: 0, mbf21: value.value as u32 }
                },
                None => self.expect_flags(FlagSet::Thing, "Expected flag mnemonic or integer after \"+\".")?.value,
            };
            let thing = self.ctx.thing_mut(index).at(span)?;
            match add {
                true => {
                    thing.flags |= bits.standard;
                    thing.mbf21_flags |= bits.mbf21;
                },
                false => {
                    thing.flags &= !bits.standard;
                    thing.mbf21_flags &= !bits.mbf21;
                },
            }
            return Ok(());
        }

        if self.eat_ident("state").is_some() {
            return self.parse_label_clause(actor);
        }
        if self.eat_ident("states").is_some() {
            return self.parse_actor_states(actor);
        }
        if self.eat_ident("clear").is_some() {
            return self.parse_clear(actor);
        }

        if self.eat_ident("ednum").is_some() {
            let value = self.expect_integer("Expected integer after \"ednum\".")?;
            if value.value < -1 || RESERVED_EDITOR_NUMBERS.contains(&value.value) {
                return Err(self.error_at(value.span, format_args!("The editor number {} is either invalid or reserved.", value)));
            }
            return self.ctx.thing_mut(index).at(span)?.set_editor_number(value.value).at(value.span);
        }

        if self.eat_ident("flags").is_some() {
            let bits = self.expect_flags(FlagSet::Thing, "Expected flag mnemonic or integer after \"flags\".")?;
            let thing = self.ctx.thing_mut(index).at(span)?;
            thing.flags = bits.standard;
            if bits.mbf21 != 0 {
                thing.mbf21_flags = bits.mbf21;
            }
            return Ok(());
        }

        if let Some(slot) = ThingSound::iter().find(|slot| self.at_ident(slot.property())) {
            if slot == ThingSound::Rip {
                self.require_mbf21_property(slot.property())?;
            } else {
                self.bump();
            }
            let sound = match self.match_sound()? {
                Some(sound) => sound,
                None => return Err(self.error_here(format_args!("Expected sound name after \"{}\".", slot.property()))),
            };
            return self.ctx.thing_mut(index).at(span)?.set_sound(slot, sound.value as i32).at(sound.span);
        }

        if self.at_ident("dropitem") {
            if !self.supports(FeatureLevel::Extended) {
                return Err(self.error_here("The \"dropitem\" property is not available. Not an EXTENDED patch."));
            }
            self.bump();
            let item = self.match_thing_index()?;
            return self.ctx.thing_mut(index).at(span)?.set_dropped_item(item.value as i32).at(item.span);
        }

        if let Some(property) = THING_PROPERTIES.iter().find(|p| self.at_ident(p.name)) {
            if property.mbf21 {
                self.require_mbf21_property(property.name)?;
            } else {
                self.bump();
            }
            let value = match property.sign {
                Sign::Any => self.expect_integer(&format!("Expected integer after \"{}\".", property.name))?,
                Sign::Positive => self.expect_positive_integer(&format!("Expected positive integer after \"{}\".", property.name))?,
            };
            let thing = self.ctx.thing_mut(index).at(span)?;
            return (property.set)(thing, value.value).at(value.span);
        }

        Err(self.error_here("Expected a thing property, a flag, \"state\", or \"states\"."))
    }

    /// Consume an MBF21-only property keyword.
    fn require_mbf21_property(&mut self, name: &str) -> PResult<Span> {
        if !self.supports(FeatureLevel::Mbf21) {
            return Err(self.error_here(format_args!("The \"{}\" property is not available. Not an MBF21 patch.", name)));
        }
        self.expect_ident(name, "Expected property name.")
    }

    /// `+` or `-` before a flag.
    fn eat_flag_sign(&mut self) -> Option<bool> {
        if self.eat_kind(TokenKind::Plus).is_some() {
            Some(true)
        } else if self.eat_kind(TokenKind::Minus).is_some() {
            Some(false)
        } else {
            None
        }
    }

    // =========================================================================
    // Weapons

    fn parse_weapon_item(&mut self, index: usize) -> PResult<()> {
        let actor = ActorRef::Weapon(index);
        let span = self.span_here();

        if self.at_kind(TokenKind::Plus) || self.at_kind(TokenKind::Minus) {
            if !self.supports(FeatureLevel::Mbf21) {
                return Err(self.error_here("Weapon flags are not available. Not an MBF21 patch."));
            }
            let add = self.eat_flag_sign() == Some(true);
            let bits = self.expect_flags(FlagSet::Weapon, "Expected flag mnemonic or integer after \"+\".")?;
            let weapon = self.ctx.weapon_mut(index).at(span)?;
            match add {
                true => weapon.mbf21_flags |= bits.combined() as u32,
                false => weapon.mbf21_flags &= !(bits.combined() as u32),
            }
            return Ok(());
        }

        if self.eat_ident("state").is_some() {
            return self.parse_label_clause(actor);
        }
        if self.eat_ident("states").is_some() {
            return self.parse_actor_states(actor);
        }
        if self.eat_ident("clear").is_some() {
            return self.parse_clear(actor);
        }

        if self.eat_ident("ammotype").is_some() {
            let ammo_type = if let Some(value) = self.match_positive_integer()? {
                AmmoType::from_script_index(value.value)
            } else {
                self.eat_any_ident().and_then(|name| AmmoType::from_name(&name))
            };
            return match ammo_type {
                Some(ammo_type) => {
                    self.ctx.weapon_mut(index).at(span)?.ammo_type = ammo_type;
                    Ok(())
                },
                None => Err(self.error_at(self.prev_span(), format_args!(
                    "Expected ammo type: an integer from 0 to {}, or 5.", self.ctx.ammo_count() - 1,
                ))),
            };
        }

        if self.eat_ident("ammopershot").is_some() {
            let value = self.expect_positive_integer("Expected ammo per shot: a positive integer.")?;
            return self.ctx.weapon_mut(index).at(span)?.set_ammo_per_shot(value.value).at(value.span);
        }

        if self.at_ident("flags") {
            if !self.supports(FeatureLevel::Mbf21) {
                return Err(self.error_here("The \"flags\" property is not available. Not an MBF21 patch."));
            }
            self.bump();
            self.eat_ident("mbf21");
            let bits = self.expect_flags(FlagSet::Weapon, "Expected flag mnemonic or integer after \"flags\".")?;
            self.ctx.weapon_mut(index).at(span)?.mbf21_flags = bits.combined() as u32;
            return Ok(());
        }

        Err(self.error_here("Expected \"ammotype\", \"ammopershot\", a flag, \"state\", or \"states\"."))
    }

    // =========================================================================
    // Shared by things and weapons

    /// `state <label> <target>`
    fn parse_label_clause(&mut self, actor: ActorRef) -> PResult<()> {
        let label = match self.eat_any_ident() {
            Some(label) => label,
            None => match self.eat_string()? {
                Some(label) => label,
                None => return Err(self.error_here(format_args!("Expected {} state label after \"state\".", actor.descr()))),
            },
        };
        let state = match self.parse_goto_target("Expected a state index or label after the state label.")? {
            GotoTarget::Index(index) => index,
            GotoTarget::Label { name, offset } => {
                let base = match self.ctx.actor_label(actor, &name).at(name.span)? {
                    Some(base) => base,
                    None => return Err(self.undeclared_label_error(actor, &name)),
                };
                self.offset_state(base, offset, name.span)?
            },
        };
        self.ctx.set_actor_label(actor, &label, state).at(label.span)
    }

    fn parse_clear(&mut self, actor: ActorRef) -> PResult<()> {
        let span = self.span_here();
        if self.eat_ident("state").is_some() {
            let label = match self.eat_any_ident() {
                Some(label) => label,
                None => {
                    let known = self.ctx.actor_labels(actor).at(span)?.into_iter().map(|(name, _)| name).collect::<Vec<_>>();
                    return Err(self.error_here(format_args!("Expected state label after \"state\": [{}]", known.join(", "))));
                },
            };
            if self.ctx.actor_label(actor, &label).at(label.span)?.is_none() {
                return Err(self.undeclared_label_error(actor, &label));
            }
            return self.ctx.set_actor_label(actor, &label, 0).at(label.span);
        }
        if self.eat_ident("states").is_some() {
            return self.ctx.clear_actor_labels(actor).at(span);
        }

        match actor {
            ActorRef::Thing(index) => {
                if self.eat_ident("properties").is_some() {
                    self.ctx.thing_mut(index).at(span)?.clear_properties();
                } else if self.eat_ident("flags").is_some() {
                    self.ctx.thing_mut(index).at(span)?.clear_flags();
                } else if self.eat_ident("sounds").is_some() {
                    self.ctx.thing_mut(index).at(span)?.clear_sounds();
                } else {
                    return Err(self.error_here("Expected \"state\", \"states\", \"properties\", \"flags\", or \"sounds\" after \"clear\"."));
                }
            },
            ActorRef::Weapon(index) => {
                if self.eat_ident("properties").is_some() {
                    self.ctx.weapon_mut(index).at(span)?.clear_properties();
                } else if self.at_ident("flags") {
                    if !self.supports(FeatureLevel::Mbf21) {
                        return Err(self.error_here("Can't clear flags. Not an MBF21 patch."));
                    }
                    self.bump();
                    self.ctx.weapon_mut(index).at(span)?.mbf21_flags = 0;
                } else {
                    return Err(self.error_here("Expected \"state\", \"states\", \"properties\", or \"flags\" after \"clear\"."));
                }
            },
        }
        Ok(())
    }
}
