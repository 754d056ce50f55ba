//! The small entries: `strings`, `ammo`, `sound`, `pars` and `misc`.

use crate::context::strings::{EpisodeMap, StringKey};
use crate::context::{AmmoType, MiscField};
use crate::flags;
use crate::format::FeatureLevel;
use super::{ErrorAt, Parser, PResult, TokenKind};

impl Parser {
    /// `strings { KEY "text" ... }`, or `strings { 12 "text" ... }` in a Doom 1.9 patch.
    pub(super) fn parse_strings(&mut self) -> PResult<()> {
        self.bump(); // strings
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' to start \"strings\" section.")?;
        let keyed = self.supports(FeatureLevel::Boom);
        let close_message = match keyed {
            true => "Expected '}' to close \"strings\" section, or string key name to start string replacement entry.",
            false => "Expected '}' to close \"strings\" section, or string index to start string replacement entry.",
        };

        while !self.at_block_end(close_message)? {
            if let Some(index) = self.match_positive_integer()? {
                let value = match self.eat_string()? {
                    Some(value) => value,
                    None => return Err(self.error_here("Expected string after string index.")),
                };
                self.ctx.set_string(StringKey::Index(index.value as usize), &value).at(index.span.merge(value.span))?;
            } else if let Some(key) = self.eat_any_ident() {
                if keyed && !self.ctx.tables().strings.has_key(&key) {
                    let mut warning = warning!(
                        message("String name \"{}\" is not a known string name.", key),
                        primary(key, "unknown string name"),
                    );
                    if let Some(suggestion) = flags::suggest(&key, self.ctx.string_keys()) {
                        warning.diagnostics[0].notes.push(format!("did you mean '{}'?", suggestion));
                    }
                    self.warn(warning);
                }
                let value = match self.eat_string()? {
                    Some(value) => value,
                    None => return Err(self.error_here("Expected string after string key name.")),
                };
                self.ctx.set_string(StringKey::Name(&key), &value).at(key.span.merge(value.span))?;
            } else {
                return Err(self.error_here(close_message));
            }
        }
        self.expect_block_end(close_message)
    }

    /// `ammo N ["name"] { max N pickup N }`
    pub(super) fn parse_ammo(&mut self) -> PResult<()> {
        self.bump(); // ammo
        let bad_index = format!("Expected ammo type: an integer from 0 to {}.", self.ctx.ammo_count() - 1);
        let index = if let Some(index) = self.match_positive_integer()? {
            index.sp_map(|i| i as usize)
        } else if let Some(name) = self.eat_any_ident() {
            match AmmoType::from_name(&name).filter(|&ammo| ammo != AmmoType::Infinite) {
                Some(ammo) => sp!(name.span => ammo.index() as usize),
                None => return Err(self.error_at(name.span, &bad_index)),
            }
        } else {
            return Err(self.error_here(&bad_index));
        };
        if index.value >= self.ctx.ammo_count() {
            return Err(self.error_at(index.span, &bad_index));
        }

        if let Some(name) = self.eat_string()? {
            self.ctx.ammo_mut(index.value).at(name.span)?.name = name.value;
        }
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after \"ammo\" header.")?;
        let close_message = "Expected '}' after \"ammo\" section.";
        while !self.at_block_end(close_message)? {
            if self.eat_ident("max").is_some() {
                let value = self.expect_positive_integer("Expected positive integer after \"max\".")?;
                self.ctx.ammo_mut(index.value).at(index.span)?.set_max(value.value).at(value.span)?;
            } else if self.eat_ident("pickup").is_some() {
                let value = self.expect_positive_integer("Expected positive integer after \"pickup\".")?;
                self.ctx.ammo_mut(index.value).at(index.span)?.set_pickup(value.value).at(value.span)?;
            } else {
                return Err(self.error_here("Expected \"max\" or \"pickup\"."));
            }
        }
        self.expect_block_end(close_message)
    }

    /// `sound N { priority N singular BOOL }`.  The sound may also be given by name.
    pub(super) fn parse_sound(&mut self) -> PResult<()> {
        self.bump(); // sound
        let index = if let Some(index) = self.match_positive_integer()? {
            self.ctx.ensure_sound(index.value as usize).at(index.span)?;
            index.sp_map(|i| i as usize)
        } else {
            match self.match_sound()? {
                Some(index) => index,
                None => return Err(self.error_here("Expected sound name after \"sound\".")),
            }
        };

        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after \"sound\" header.")?;
        let close_message = "Expected '}' after \"sound\" section.";
        while !self.at_block_end(close_message)? {
            if self.eat_ident("priority").is_some() {
                let value = self.expect_positive_integer("Expected positive integer after \"priority\".")?;
                self.ctx.sound_mut(index.value).at(index.span)?.set_priority(value.value).at(value.span)?;
            } else if self.eat_ident("singular").is_some() {
                let value = match self.match_bool() {
                    Some(value) => value,
                    None => return Err(self.error_here("Expected boolean after \"singular\".")),
                };
                self.ctx.sound_mut(index.value).at(index.span)?.singular = value.value;
            } else {
                return Err(self.error_here("Expected \"priority\" or \"singular\"."));
            }
        }
        self.expect_block_end(close_message)
    }

    /// `pars { E1M1 30  MAP07 1:30 ... }`
    pub(super) fn parse_pars(&mut self) -> PResult<()> {
        let keyword = self.span_here();
        self.bump(); // pars
        if !self.supports(FeatureLevel::Boom) {
            return Err(self.error_at(keyword, "Par block not supported in non-Boom-feature-level patches."));
        }
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after \"pars\" header.")?;

        let close_message = "Expected '}' after \"pars\" section.";
        while !self.at_block_end(close_message)? {
            let name = match self.eat_any_ident() {
                Some(name) => name,
                None => match self.eat_string()? {
                    Some(name) => name,
                    None => return Err(self.error_here("Expected EXMY or MAPXX map entry.")),
                },
            };
            let map = match EpisodeMap::parse_lump(&name) {
                Some(map) => map,
                None => return Err(self.error_at(name.span, "Expected EXMY or MAPXX map entry.")),
            };

            let mut seconds = self.expect_positive_integer("Expected seconds after map entry.")?;
            if self.eat_kind(TokenKind::Colon).is_some() {
                let minutes = seconds;
                let rest = self.expect_positive_integer("Expected seconds after ':'.")?;
                let total = i64::from(minutes.value) * 60 + i64::from(rest.value);
                let total = i32::try_from(total).map_err(|_| self.error_at(rest.span, "Par time is too long."))?;
                seconds = sp!(minutes.span.merge(rest.span) => total);
            }
            self.ctx.set_par(map, seconds.value).at(seconds.span)?;
        }
        self.expect_block_end(close_message)
    }

    /// `misc { monsterInfighting true  initialHealth 150 ... }`
    pub(super) fn parse_misc(&mut self) -> PResult<()> {
        self.bump(); // misc
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after \"misc\" header.")?;

        let close_message = "Expected '}' after \"misc\" section.";
        while !self.at_block_end(close_message)? {
            if self.eat_ident("monsterInfighting").is_some() {
                let value = match self.match_bool() {
                    Some(value) => value,
                    None => return Err(self.error_here("Expected boolean value after \"monsterInfighting\".")),
                };
                self.ctx.misc_mut().monsters_infight = value.value;
                continue;
            }

            let field = self.peek()
                .filter(|token| token.kind == TokenKind::Ident)
                .and_then(|token| MiscField::from_property(&token.text));
            let field = match field {
                Some(field) => field,
                None => return Err(self.error_here("Expected valid miscellaneous entry type.")),
            };
            self.bump();
            let value = self.expect_positive_integer(&format!("Expected integer value after \"{}\".", field.property()))?;
            self.ctx.misc_mut().set(field, value.value).at(value.span)?;
        }
        self.expect_block_end(close_message)
    }
}
