//! Numbers, flag expressions, table indices and action pointer parameters.

use crate::context::ActorRef;
use crate::error::CompileError;
use crate::flags::{self, ThingFlag};
use crate::format::FeatureLevel;
use crate::pointer::ActionPointer;
use crate::pos::{Sp, Span};
use crate::value::{self, ValueType};
use super::{ErrorAt, Parser, PResult, TokenKind};

/// A number read from the script.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) struct Number {
    /// The value as stored.  Decimal literals are already converted to 16.16 fixed point.
    pub value: i32,
    /// The literal value of a decimal literal.
    pub fraction: Option<f64>,
}

/// A parsed parameter.  Labels are resolved once the enclosing block is complete.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ParamValue {
    Value(i32),
    Label(Sp<String>),
}

/// Which mnemonics a flag expression may use.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum FlagSet {
    Thing,
    Weapon,
    /// Anything, for action pointer parameters.
    Any,
}

/// Bits of a flag expression, split by the field they belong in.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(super) struct FlagBits {
    /// Numbers and standard thing flags.
    pub standard: u32,
    /// MBF21 thing flags and weapon flags.
    pub mbf21: u32,
}

impl FlagBits {
    pub fn combined(self) -> i32 { (self.standard | self.mbf21) as i32 }
}

impl std::ops::BitOrAssign for FlagBits {
    fn bitor_assign(&mut self, other: FlagBits) {
        self.standard |= other.standard;
        self.mbf21 |= other.mbf21;
    }
}

/// The result of an expression that may turn out to be a label.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Expr {
    Bits(Sp<FlagBits>),
    Label(Sp<String>),
}

/// Value of an integer literal.  Hex literals cover the full `u32` range.
fn int_literal_value(text: &str) -> Option<i64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok().map(i64::from),
        None => text.parse::<u32>().ok().map(i64::from),
    }
}

impl Parser {
    pub(super) fn nth_is(&self, n: usize, kind: TokenKind) -> bool {
        self.peek_nth(n).map_or(false, |token| token.kind == kind)
    }

    /// Whether a number (possibly negative) comes next.
    pub(super) fn at_number(&self) -> bool {
        let is_number = |n| self.nth_is(n, TokenKind::LitInt) || self.nth_is(n, TokenKind::LitFloat);
        is_number(0) || (self.at_kind(TokenKind::Minus) && is_number(1))
    }

    /// Read an optionally negated number literal.
    ///
    /// `wrap_hex` reinterprets hex literals above `i32::MAX` as negative numbers, which is how
    /// flag values are usually written.
    fn read_number(&mut self, allow_fraction: bool, wrap_hex: bool) -> PResult<Option<Sp<Number>>> {
        if !self.at_number() {
            return Ok(None);
        }
        let negative = self.at_kind(TokenKind::Minus);
        let literal = match self.peek_nth(negative as usize) {
            Some(token) => token.clone(),
            None => return Ok(None),
        };
        if literal.kind == TokenKind::LitFloat && !allow_fraction {
            return Ok(None);
        }
        let span = self.span_here().merge(literal.span);
        self.pos += 1 + negative as usize;

        let sign = if negative { -1 } else { 1 };
        if literal.kind == TokenKind::LitFloat {
            let fraction = literal.text.parse::<f64>().map(|x| sign as f64 * x)
                .map_err(|_| self.error_at(span, format_args!("Invalid decimal value {}.", literal.text)))?;
            return Ok(Some(sp!(span => Number { value: value::to_fixed(fraction), fraction: Some(fraction) })));
        }

        let magnitude = int_literal_value(&literal.text);
        let is_hex = literal.text.len() > 2 && literal.text[..2].eq_ignore_ascii_case("0x");
        let value = magnitude.and_then(|m| match (wrap_hex && is_hex, sign * m) {
            (true, v) => Some((v as u32) as i32),
            (false, v) if i64::from(i32::MIN) <= v && v <= i64::from(i32::MAX) => Some(v as i32),
            _ => None,
        });
        match value {
            Some(value) => Ok(Some(sp!(span => Number { value, fraction: None }))),
            None => Err(self.error_at(span, format_args!("Integer value {}{} is out of range.", if negative { "-" } else { "" }, literal.text))),
        }
    }

    /// An integer that may be negative.
    pub(super) fn match_integer(&mut self) -> PResult<Option<Sp<i32>>> {
        Ok(self.read_number(false, false)?.map(|n| n.sp_map(|n| n.value)))
    }

    /// An integer without a sign.
    pub(super) fn match_positive_integer(&mut self) -> PResult<Option<Sp<i32>>> {
        match self.at_kind(TokenKind::LitInt) {
            true => self.match_integer(),
            false => Ok(None),
        }
    }

    pub(super) fn expect_positive_integer(&mut self, message: &str) -> PResult<Sp<i32>> {
        match self.match_positive_integer()? {
            Some(value) => Ok(value),
            None => Err(self.error_here(message)),
        }
    }

    pub(super) fn expect_integer(&mut self, message: &str) -> PResult<Sp<i32>> {
        match self.match_integer()? {
            Some(value) => Ok(value),
            None => Err(self.error_here(message)),
        }
    }

    pub(super) fn match_bool(&mut self) -> Option<Sp<bool>> {
        if let Some(span) = self.eat_ident("true") {
            Some(sp!(span => true))
        } else {
            self.eat_ident("false").map(|span| sp!(span => false))
        }
    }

    // =========================================================================
    // Flag expressions

    /// Parse `A | B | 0x40 ...`.
    ///
    /// Without `force_flags`, a leading identifier that is not a flag mnemonic is returned as a
    /// label.  After a `|`, only flags and numbers are accepted.
    pub(super) fn parse_expression(&mut self, set: FlagSet, force_flags: bool) -> PResult<Option<Expr>> {
        if self.at_string() {
            if force_flags {
                return Err(self.error_here("Expected valid flag mnemonic."));
            }
            return Ok(self.eat_string()?.map(Expr::Label));
        }

        let mut bits = FlagBits::default();
        let mut span: Option<Span> = None;
        let mut forced = force_flags;
        loop {
            if let Some(number) = self.read_number(false, true)? {
                bits.standard |= number.value.value as u32;
                span = Some(span.map_or(number.span, |s| s.merge(number.span)));
            } else if let Some(token) = self.peek().filter(|token| token.kind == TokenKind::Ident).cloned() {
                match self.flag_mnemonic(set, &token.text, token.span)? {
                    Some(flag) => {
                        self.pos += 1;
                        bits |= flag;
                        span = Some(span.map_or(token.span, |s| s.merge(token.span)));
                    },
                    None if !forced && span.is_none() => {
                        self.pos += 1;
                        return Ok(Some(Expr::Label(sp!(token.span => token.value.text))));
                    },
                    None => return Err(self.unknown_flag_error(set, &token.text, token.span)),
                }
            } else if span.is_none() && !forced {
                return Ok(None);
            } else {
                return Err(self.error_here("Expected numeric value or flag mnemonic."));
            }

            match self.eat_kind(TokenKind::Pipe) {
                Some(_) => forced = true,
                None => break,
            }
        }
        // the loop runs at least once and every path that reaches here sets the span
        Ok(span.map(|span| Expr::Bits(sp!(span => bits))))
    }

    /// A flag expression where labels make no sense.
    pub(super) fn expect_flags(&mut self, set: FlagSet, message: &str) -> PResult<Sp<FlagBits>> {
        match self.parse_expression(set, true)? {
            Some(Expr::Bits(bits)) => Ok(bits),
            _ => Err(self.error_here(message)),
        }
    }

    fn flag_mnemonic(&self, set: FlagSet, name: &str, span: Span) -> PResult<Option<FlagBits>> {
        if matches!(set, FlagSet::Thing | FlagSet::Any) {
            match flags::thing_flag(name) {
                Some(ThingFlag::Standard(bit)) => return Ok(Some(FlagBits { standard: bit, mbf21: 0 })),
                Some(ThingFlag::Mbf21(bit)) => {
                    if !self.supports(FeatureLevel::Mbf21) {
                        return Err(self.error_at(span, "MBF21 thing flags are not available. Not an MBF21 patch."));
                    }
                    return Ok(Some(FlagBits { standard: 0, mbf21: bit }));
                },
                None => {},
            }
        }
        if matches!(set, FlagSet::Weapon | FlagSet::Any) {
            if let Some(bit) = flags::weapon_flag(name) {
                if !self.supports(FeatureLevel::Mbf21) {
                    return Err(self.error_at(span, "Weapon flags are not available. Not an MBF21 patch."));
                }
                return Ok(Some(FlagBits { standard: 0, mbf21: bit }));
            }
        }
        Ok(None)
    }

    pub(super) fn unknown_flag_error(&self, set: FlagSet, name: &str, span: Span) -> CompileError {
        let thing_names = flags::THING_FLAGS.iter().chain(flags::THING_FLAGS_MBF21);
        let weapon_names = flags::WEAPON_FLAGS_MBF21.iter();
        let suggestion = match set {
            FlagSet::Thing => flags::suggest(name, thing_names.copied()),
            FlagSet::Weapon => flags::suggest(name, weapon_names.copied()),
            FlagSet::Any => flags::suggest(name, thing_names.chain(weapon_names).copied()),
        };
        let mut e = error!(
            message("Expected valid flag mnemonic."),
            primary(span, "unknown flag '{}'", name),
        );
        if let Some(suggestion) = suggestion {
            e.diagnostics[0].notes.push(format!("did you mean '{}'?", suggestion));
        }
        e
    }

    // =========================================================================
    // Table indices

    pub(super) fn match_thing_index(&mut self) -> PResult<Sp<usize>> {
        let index = self.expect_positive_integer("Expected positive integer for the thing slot number.")?;
        if index.value == 0 {
            return Err(self.error_at(index.span, "Invalid thing index: 0."));
        }
        self.ctx.ensure_thing(index.value as usize).at(index.span)?;
        Ok(index.sp_map(|i| i as usize))
    }

    pub(super) fn match_weapon_index(&mut self) -> PResult<Sp<usize>> {
        let index = self.expect_positive_integer("Expected positive integer after \"weapon\" for the weapon slot number.")?;
        self.ctx.weapon(index.value as usize).at(index.span)?;
        Ok(index.sp_map(|i| i as usize))
    }

    /// A state index.  DSDHacked patches grow the state table to fit.
    pub(super) fn match_state_index(&mut self) -> PResult<Sp<usize>> {
        let index = self.expect_positive_integer("Expected state index number.")?;
        self.ctx.ensure_state(index.value as usize).at(index.span)?;
        Ok(index.sp_map(|i| i as usize))
    }

    /// `thing N label` or `weapon N label`, naming a state through another actor.
    pub(super) fn match_actor_state_ref(&mut self) -> PResult<Option<Sp<i32>>> {
        if !self.nth_is(1, TokenKind::LitInt) {
            return Ok(None);
        }
        let start = self.span_here();
        let actor = if self.eat_ident("thing").is_some() {
            ActorRef::Thing(self.match_thing_index()?.value)
        } else if self.eat_ident("weapon").is_some() {
            ActorRef::Weapon(self.match_weapon_index()?.value)
        } else {
            return Ok(None);
        };

        let label = match self.eat_any_ident() {
            Some(label) => label,
            None => match self.eat_string()? {
                Some(label) => label,
                None => return Err(self.error_here(format_args!("Expected {} label name.", actor.descr()))),
            },
        };
        match self.ctx.actor_label(actor, &label).at(label.span)? {
            Some(state) => Ok(Some(sp!(start.merge(label.span) => state))),
            None => Err(self.undeclared_label_error(actor, &label)),
        }
    }

    pub(super) fn undeclared_label_error(&self, actor: ActorRef, label: &Sp<String>) -> CompileError {
        let known = self.ctx.actor_labels(actor).unwrap_or_default()
            .into_iter().map(|(name, _)| name).collect::<Vec<_>>();
        error!(
            message("Label \"{}\" is invalid or not declared at this moment. Expected one of: [{}]", label, known.join(", ")),
            primary(label, "not a label of {} {}", actor.descr(), actor.index()),
        )
    }

    // =========================================================================
    // Names

    /// Resolve a sound name.  The empty name means "no sound".
    pub(super) fn resolve_sound(&mut self, name: &Sp<String>) -> PResult<usize> {
        if name.is_empty() {
            return Ok(0);
        }
        if let Some(index) = self.ctx.sound_index(name) {
            return Ok(index);
        }
        let mut e = error!(
            message("Unknown sound name \"{}\".", name),
            primary(name, "not a sound"),
        );
        let names = self.ctx.tables().sound_names.iter().map(|s| &s[..]);
        if let Some(suggestion) = flags::suggest(name, names) {
            e.diagnostics[0].notes.push(format!("did you mean '{}'?", suggestion));
        }
        Err(e)
    }

    /// A sound given as an identifier or a string.
    pub(super) fn match_sound(&mut self) -> PResult<Option<Sp<usize>>> {
        let name = match self.eat_any_ident() {
            Some(name) => name,
            None => match self.eat_string()? {
                Some(name) => name,
                None => return Ok(None),
            },
        };
        let index = self.resolve_sound(&name)?;
        Ok(Some(sp!(name.span => index)))
    }

    // =========================================================================
    // Action pointer parameters

    /// Parse argument `index` of an action pointer.
    pub(super) fn parse_param(&mut self, ptr: &ActionPointer, index: usize) -> PResult<Sp<ParamValue>> {
        let ty = ptr.params[index];

        if let Some(state) = self.match_actor_state_ref()? {
            return Ok(state.sp_map(ParamValue::Value));
        }

        if ty == ValueType::Sound && (self.at_kind(TokenKind::Ident) || self.at_string()) {
            let sound = self.match_sound()?;
            if let Some(sound) = sound {
                return Ok(sound.sp_map(|s| ParamValue::Value(s as i32)));
            }
        }

        // a lone number, which may be a decimal
        let lone_number = self.at_number() && !self.nth_is(if self.at_kind(TokenKind::Minus) { 2 } else { 1 }, TokenKind::Pipe);
        if lone_number {
            if let Some(number) = self.read_number(true, true)? {
                let value = match (number.fraction, ty) {
                    (None, _) => number.value.value,
                    (Some(degrees), ValueType::AngleFixed) => value::angle_to_fixed(degrees),
                    (Some(_), ValueType::Fixed) => number.value.value,
                    (Some(_), _) => return Err(self.error_at(number.span, format_args!(
                        "Decimal value given for {} arg {}, which expects {}.", ptr.display_name(), index, ty,
                    ))),
                };
                self.check_param_value(ptr, index, value, number.span)?;
                return Ok(sp!(number.span => ParamValue::Value(value)));
            }
        }

        let force_flags = ty == ValueType::Flags;
        match self.parse_expression(FlagSet::Any, force_flags)? {
            Some(Expr::Bits(bits)) => {
                let value = bits.combined();
                self.check_param_value(ptr, index, value, bits.span)?;
                Ok(sp!(bits.span => ParamValue::Value(value)))
            },
            Some(Expr::Label(label)) => match ty {
                ValueType::State => Ok(sp!(label.span => ParamValue::Label(label))),
                _ => Err(self.error_at(label.span, "Expected valid parameter value.")),
            },
            None => Err(self.error_here("Expected parameter.")),
        }
    }

    fn check_param_value(&self, ptr: &ActionPointer, index: usize, value: i32, span: Span) -> PResult<()> {
        let ty = ptr.params[index];
        match ty.validate(value) {
            true => Ok(()),
            false => Err(self.error_at(span, format_args!(
                "Invalid value '{}' for {} arg {}: value must be between {} and {}.",
                value, ptr.display_name(), index, ty.min(), ty.max(),
            ))),
        }
    }
}
