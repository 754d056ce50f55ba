//! State definitions.
//!
//! All of the ways of writing states (`state N { ... }`, `state fill N { ... }` and the `states`
//! blocks of things and weapons) are handled by one sequence engine.  A sequence reads state
//! lines, labels and next-state clauses, writing each state as soon as it is read.  Label
//! references are collected and resolved when the block closes, so that a label may be used
//! before it is declared.

use indexmap::IndexMap;

use crate::context::ActorRef;
use crate::error::{IndexError, RangeError};
use crate::flags::{self, state_mbf21};
use crate::format::FeatureLevel;
use crate::pointer::{self, ActionPointer};
use crate::pos::{Sp, Span};
use super::value::ParamValue;
use super::{ErrorAt, Parser, PResult, TokenKind};

/// A state field that an action pointer parameter is written to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum ParamField {
    Misc1,
    Misc2,
    Arg(usize),
}

/// An action and its parameters, as written on a state line.
#[derive(Debug, Clone, Default)]
pub(super) struct ParsedAction {
    pub pointer: Option<&'static ActionPointer>,
    /// Whether `misc1` and `misc2` came from an `offset` clause.
    pub offset: bool,
    pub misc1: i32,
    pub misc2: i32,
    pub args: Vec<i32>,
    pub label_fields: Vec<(ParamField, Sp<String>)>,
}

impl ParsedAction {
    fn set_field(&mut self, field: ParamField, value: i32) {
        match field {
            ParamField::Misc1 => self.misc1 = value,
            ParamField::Misc2 => self.misc2 = value,
            ParamField::Arg(index) => {
                if self.args.len() <= index {
                    self.args.resize(index + 1, 0);
                }
                self.args[index] = value;
            },
        }
    }
}

/// One state line, which may expand to several states (one per frame letter and action).
#[derive(Debug, Clone)]
pub(super) struct ParsedState {
    pub sprite: i32,
    pub frames: Vec<i32>,
    pub duration: i32,
    pub bright: bool,
    pub mbf21_flags: Option<u32>,
    pub actions: Vec<ParsedAction>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub(super) enum NextClause {
    Stop,
    Wait,
    Loop,
    Goto(GotoTarget),
}

#[derive(Debug, Clone)]
pub(super) enum GotoTarget {
    Index(i32),
    /// `goto label`, `goto label+2`
    Label { name: Sp<String>, offset: i32 },
}

/// Maps a frame letter to a frame index.  Frames after `Z` are written `[`, `\` and `]`.
fn frame_index(c: char) -> Option<i32> {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(c as i32 - 'A' as i32),
        '[' => Some(26),
        '\\' => Some(27),
        ']' => Some(28),
        _ => None,
    }
}

fn frame_indices(text: &str) -> Option<Vec<i32>> {
    text.chars().map(frame_index).collect()
}

const NEXT_STATE_KEYWORDS: &[&str] = &["stop", "wait", "loop", "goto"];

const STATE_PROPERTIES: &[&str] = &[
    "spritename", "frame", "duration", "nextstate", "pointer", "offset", "bright", "notbright", "fast", "notfast",
];

// =============================================================================

#[derive(Debug, Copy, Clone)]
enum FillMode {
    /// Write consecutive indices.
    Consecutive { next: usize },
    /// Search for free states, starting at the cursor.
    Search { cursor: usize },
}

#[derive(Debug, Clone)]
enum LabelValue {
    State(i32),
    Alias { target: Sp<String>, offset: i32 },
}

#[derive(Debug, Clone)]
struct LabelDef {
    name: Sp<String>,
    value: LabelValue,
}

#[derive(Debug, Copy, Clone)]
enum DeferredField {
    Next,
    Param(ParamField),
}

/// A state field that refers to a label.
#[derive(Debug, Clone)]
struct Deferred {
    state: usize,
    field: DeferredField,
    label: Sp<String>,
    offset: i32,
}

/// Bookkeeping for one block of states.
#[derive(Debug)]
pub(super) struct Sequence {
    actor: Option<ActorRef>,
    mode: FillMode,
    /// For `state fill`, the state that the first line must occupy.
    force_first: Option<usize>,
    /// Keyed by the lowercase label.
    labels: IndexMap<String, LabelDef>,
    /// Labels waiting for the next state line or next-state clause.
    pending_labels: Vec<Sp<String>>,
    /// Target of `loop`.
    last_labelled: Option<i32>,
    /// The state whose `next` is set by the next line or clause.
    last_filled: Option<usize>,
    filled_any: bool,
    deferred: Vec<Deferred>,
}

impl Sequence {
    fn new(actor: Option<ActorRef>, mode: FillMode) -> Self {
        Sequence {
            actor,
            mode,
            force_first: None,
            labels: IndexMap::new(),
            pending_labels: vec![],
            last_labelled: None,
            last_filled: None,
            filled_any: false,
            deferred: vec![],
        }
    }

    fn has_label(&self, name: &str) -> bool {
        let key = name.to_ascii_lowercase();
        self.labels.contains_key(&key) || self.pending_labels.iter().any(|l| l.eq_ignore_ascii_case(&key))
    }

    fn define(&mut self, name: Sp<String>, value: LabelValue) {
        self.labels.insert(name.to_ascii_lowercase(), LabelDef { name, value });
    }
}

impl Parser {
    pub(super) fn parse_state_entry(&mut self) -> PResult<()> {
        self.bump(); // state

        if self.eat_ident("fill").is_some() {
            self.parse_state_fill()
        } else if self.eat_ident("free").is_some() {
            if self.eat_ident("from").is_some() {
                let start = self.match_state_index()?;
                self.ctx.free_connected_states(start.value);
            } else {
                let (first, last) = self.parse_state_range()?;
                self.ctx.set_free_states(first.value, last.value, true).at(last.span)?;
            }
            Ok(())
        } else if self.eat_ident("protect").is_some() {
            let (first, last) = self.parse_state_range()?;
            self.ctx.set_protected_states(first.value, last.value, true).at(last.span)
        } else if self.eat_ident("unprotect").is_some() {
            let (first, last) = self.parse_state_range()?;
            self.ctx.set_protected_states(first.value, last.value, false).at(last.span)
        } else if self.at_kind(TokenKind::LitInt) {
            self.parse_state_block()
        } else {
            Err(self.error_here("Expected state index, \"fill\", \"free\", \"protect\", or \"unprotect\" after \"state\"."))
        }
    }

    /// `N` or `N to M`.
    fn parse_state_range(&mut self) -> PResult<(Sp<usize>, Sp<usize>)> {
        let first = self.match_state_index()?;
        let last = match self.eat_ident("to") {
            Some(_) => self.match_state_index()?,
            None => first,
        };
        Ok((first, last))
    }

    /// `state fill N { ... }`
    fn parse_state_fill(&mut self) -> PResult<()> {
        let start = self.match_state_index()?;
        if !self.ctx.is_free_state(start.value) {
            return Err(self.error_at(start.span, format_args!("Starting state index for state fill, {}, is not a free state.", start)));
        }
        if self.ctx.is_protected_state(start.value) {
            return Err(self.error_at(start.span, format_args!("Starting state index for state fill, {}, is a protected state.", start)));
        }
        let open = self.expect_kind(TokenKind::BraceOpen, "Expected '{' after state fill index.")?;

        let mut seq = Sequence::new(None, FillMode::Search { cursor: start.value });
        seq.force_first = Some(start.value);
        seq.last_labelled = Some(start.value as i32);
        self.parse_sequence_body(&mut seq, "Expected '}' after state fill definition.")?;

        if !seq.filled_any {
            return Err(self.error_at(open.span, "Expected sprite name (for a state description)."));
        }
        if seq.last_filled.is_some() {
            return Err(self.error_here("Expected next state clause (stop, wait, loop, goto)."));
        }
        self.expect_block_end("Expected '}' after state fill definition.")?;
        self.finish_sequence(seq)
    }

    /// `state N { ... }`
    fn parse_state_block(&mut self) -> PResult<()> {
        let index = self.match_state_index()?;
        if self.ctx.is_protected_state(index.value) {
            return Err(self.error_at(index.span, format_args!("State index {} is a protected state.", index)));
        }
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after state index.")?;

        let close_message = "Expected '}' after state definition.";
        let mut seq = Sequence::new(None, FillMode::Consecutive { next: index.value });
        if self.at_next_keyword() {
            // only the next state of an existing state
            let span = self.span_here();
            let clause = self.parse_next_clause()?;
            seq.last_filled = Some(index.value);
            self.apply_next_clause(&mut seq, clause, span)?;
            self.ctx.set_free_state(index.value, false).at(span)?;
        } else if self.at_state_property() {
            self.parse_state_properties(&mut seq, index)?;
        } else {
            self.parse_sequence_body(&mut seq, close_message)?;
        }
        self.expect_block_end(close_message)?;
        self.finish_sequence(seq)
    }

    /// The body of `thing N { states { ... } }` and the weapon equivalent.
    pub(super) fn parse_actor_states(&mut self, actor: ActorRef) -> PResult<()> {
        self.expect_kind(TokenKind::BraceOpen, "Expected '{' after \"states\" declaration.")?;
        let mut seq = Sequence::new(Some(actor), FillMode::Search { cursor: 0 });
        self.parse_sequence_body(&mut seq, "Expected '}' after \"states\" section.")?;
        self.expect_block_end("Expected '}' after \"states\" section.")?;
        self.finish_sequence(seq)
    }

    // =========================================================================
    // Sequences

    fn parse_sequence_body(&mut self, seq: &mut Sequence, close_message: &str) -> PResult<()> {
        while !self.at_block_end(close_message)? {
            if self.at_kind(TokenKind::Ident) && self.nth_is(1, TokenKind::Colon) {
                let label = self.eat_any_ident().ok_or_else(|| self.error_here("Expected label."))?;
                self.bump(); // :
                if seq.has_label(&label) {
                    return Err(self.error_at(label.span, format_args!("Label \"{}\" is declared more than once.", label)));
                }
                seq.pending_labels.push(label);
            } else if self.at_next_keyword() {
                let span = self.span_here();
                let clause = self.parse_next_clause()?;
                self.apply_next_clause(seq, clause, span)?;
            } else {
                let state = self.parse_state_line(seq.actor, false, None)?;
                self.fill_states(seq, &state)?;
            }
        }
        Ok(())
    }

    fn apply_next_clause(&mut self, seq: &mut Sequence, clause: NextClause, span: Span) -> PResult<()> {
        if !seq.pending_labels.is_empty() {
            // labels with no states of their own
            let value = match clause {
                NextClause::Stop => LabelValue::State(0),
                NextClause::Goto(GotoTarget::Index(index)) => LabelValue::State(index),
                NextClause::Goto(GotoTarget::Label { name, offset }) => LabelValue::Alias { target: name, offset },
                NextClause::Wait | NextClause::Loop => {
                    return Err(self.error_at(span, "Expected a state definition after label, or a \"goto\" clause, or \"stop\"."));
                },
            };
            for label in std::mem::take(&mut seq.pending_labels) {
                seq.define(label, value.clone());
            }
            return Ok(());
        }

        let last = match seq.last_filled.take() {
            Some(last) => last,
            None => return Err(self.error_at(span, "Expected a state definition before this next state clause.")),
        };
        let next = match clause {
            NextClause::Stop => 0,
            NextClause::Wait => last as i32,
            NextClause::Loop => match seq.last_labelled {
                Some(index) => index,
                None => return Err(self.error_at(span, "Can't use \"loop\" with no declared state labels.")),
            },
            NextClause::Goto(GotoTarget::Index(index)) => index,
            NextClause::Goto(GotoTarget::Label { name, offset }) => {
                seq.deferred.push(Deferred { state: last, field: DeferredField::Next, label: name, offset });
                return Ok(());
            },
        };
        self.ctx.state_mut(last).at(span)?.set_next(next).at(span)
    }

    /// Write the states of one line.
    fn fill_states(&mut self, seq: &mut Sequence, parsed: &ParsedState) -> PResult<()> {
        let span = parsed.span;
        let boom = self.supports(FeatureLevel::Boom);

        for &frame in &parsed.frames {
            for (action_index, action) in parsed.actions.iter().enumerate() {
                let index = self.next_fill_index(seq, action, span)?;

                if !seq.pending_labels.is_empty() {
                    for label in std::mem::take(&mut seq.pending_labels) {
                        seq.define(label, LabelValue::State(index as i32));
                    }
                    seq.last_labelled = Some(index as i32);
                }
                if let Some(previous) = seq.last_filled {
                    self.ctx.state_mut(previous).at(span)?.set_next(index as i32).at(span)?;
                }

                let is_last_action = action_index + 1 == parsed.actions.len();
                let has_slot = self.ctx.has_pointer_slot(index);
                let state = self.ctx.state_mut(index).at(span)?;
                state.set_sprite(parsed.sprite).at(span)?;
                state.set_frame(frame).at(span)?;
                // only the last state made from a line gets its duration
                state.set_duration(if is_last_action { parsed.duration } else { 0 }).at(span)?;
                state.bright = parsed.bright;
                state.misc1 = action.misc1;
                state.misc2 = action.misc2;
                state.args = [0; 8];
                state.args.iter_mut().zip(&action.args).for_each(|(dest, &arg)| *dest = arg);
                if let Some(mbf21_flags) = parsed.mbf21_flags {
                    state.mbf21_flags = mbf21_flags;
                }

                let ptr = match action.pointer {
                    Some(ptr) => Some(ptr),
                    None if boom && has_slot => Some(pointer::null()),
                    None => None,
                };
                if let (true, Some(ptr)) = (has_slot, ptr) {
                    self.ctx.set_pointer(index, ptr).at(span)?;
                }

                for (field, label) in &action.label_fields {
                    seq.deferred.push(Deferred { state: index, field: DeferredField::Param(*field), label: label.clone(), offset: 0 });
                }
                self.ctx.set_free_state(index, false).at(span)?;
                seq.last_filled = Some(index);
                seq.filled_any = true;
                if let FillMode::Search { cursor } = &mut seq.mode {
                    *cursor = index;
                }
            }
        }
        Ok(())
    }

    fn next_fill_index(&mut self, seq: &mut Sequence, action: &ParsedAction, span: Span) -> PResult<usize> {
        let boom = self.supports(FeatureLevel::Boom);
        match &mut seq.mode {
            FillMode::Consecutive { next } => {
                let index = *next;
                *next += 1;
                self.ctx.ensure_state(index).at(span)?;
                if self.ctx.is_protected_state(index) {
                    return Err(self.error_at(span, format_args!("State index {} is a protected state.", index)));
                }
                if !boom {
                    match (self.ctx.has_pointer_slot(index), action.pointer.is_some()) {
                        (true, false) => return Err(self.error_at(span, "Action function not specified for state with a function!")),
                        (false, true) => return Err(self.error_at(span, "Action function specified for state without a function!")),
                        _ => {},
                    }
                }
                Ok(index)
            },
            FillMode::Search { cursor } => {
                let wants_pointer = if boom { None } else { Some(action.pointer.is_some()) };
                let index = match self.ctx.find_next_free_state(*cursor, wants_pointer) {
                    Some(index) => index,
                    None => return Err(self.error_at(span, match wants_pointer {
                        None => "No more free states.",
                        Some(true) => "No more free states with an action pointer.",
                        Some(false) => "No more free states without an action pointer.",
                    })),
                };
                if let Some(first) = seq.force_first.take() {
                    if !boom && index != first {
                        let requirement = match action.pointer {
                            Some(_) => "cannot have an action pointer",
                            None => "must have an action pointer",
                        };
                        return Err(self.error_at(span, format_args!(
                            "Provided state definition would not fill state {}. State {} {}.", first, first, requirement,
                        )));
                    }
                }
                Ok(index)
            },
        }
    }

    /// Resolve every label reference of a finished block.
    fn finish_sequence(&mut self, mut seq: Sequence) -> PResult<()> {
        if let Some(label) = seq.pending_labels.first() {
            return Err(self.error_at(label.span, "Expected a state definition after label, or a \"goto\" clause, or \"stop\"."));
        }

        // aliases may refer to labels declared after them
        let mut resolved = IndexMap::<String, i32>::new();
        loop {
            let mut progress = false;
            for (key, def) in &seq.labels {
                if resolved.contains_key(key) {
                    continue;
                }
                let value = match &def.value {
                    LabelValue::State(index) => Some(*index),
                    LabelValue::Alias { target, offset } => match self.lookup_label(&seq, &resolved, target) {
                        Some(base) => Some(self.offset_state(base, *offset, target.span)?),
                        None => None,
                    },
                };
                if let Some(value) = value {
                    resolved.insert(key.clone(), value);
                    progress = true;
                }
            }
            if !progress {
                break;
            }
        }

        let mut unresolved = vec![];
        if let Some(actor) = seq.actor {
            for (key, def) in &seq.labels {
                if let Some(&state) = resolved.get(key) {
                    self.ctx.set_actor_label(actor, &def.name, state).at(def.name.span)?;
                }
            }
        }
        for def in seq.labels.values() {
            if let LabelValue::Alias { target, .. } = &def.value {
                if !resolved.contains_key(&def.name.to_ascii_lowercase()) {
                    unresolved.push(target.clone());
                }
            }
        }

        for deferred in std::mem::take(&mut seq.deferred) {
            let base = match self.lookup_label(&seq, &resolved, &deferred.label) {
                Some(base) => base,
                None => {
                    unresolved.push(deferred.label);
                    continue;
                },
            };
            let value = self.offset_state(base, deferred.offset, deferred.label.span)?;
            let state = self.ctx.state_mut(deferred.state).at(deferred.label.span)?;
            match deferred.field {
                DeferredField::Next => state.set_next(value).at(deferred.label.span)?,
                DeferredField::Param(ParamField::Misc1) => state.misc1 = value,
                DeferredField::Param(ParamField::Misc2) => state.misc2 = value,
                DeferredField::Param(ParamField::Arg(index)) => state.args[index] = value,
            }
        }

        if unresolved.is_empty() {
            return Ok(());
        }
        let mut names = unresolved.iter().map(|label| label.value.clone()).collect::<Vec<_>>();
        names.sort_by_key(|name| name.to_ascii_lowercase());
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        let message = match seq.actor {
            Some(_) => format!("Labels on this actor were referenced and not defined: [{}]", names.join(", ")),
            None => format!("Labels were referenced and not defined: [{}]", names.join(", ")),
        };
        let mut e = error!(message("{}", message), primary(unresolved[0], "not defined"));
        for label in &unresolved[1..] {
            e.diagnostics[0].labels.push(crate::error::Label::secondary(label.span.file_id, label.span).with_message("not defined"));
        }
        Err(e)
    }

    /// Labels of the block take precedence over labels of the actor.
    fn lookup_label(&self, seq: &Sequence, resolved: &IndexMap<String, i32>, name: &str) -> Option<i32> {
        let key = name.to_ascii_lowercase();
        if seq.labels.contains_key(&key) {
            return resolved.get(&key).copied();
        }
        let actor = seq.actor?;
        self.ctx.actor_label(actor, name).ok().flatten()
    }

    pub(super) fn offset_state(&self, base: i32, offset: i32, span: Span) -> PResult<i32> {
        let index = i64::from(base) + i64::from(offset);
        let count = self.ctx.state_count();
        match 0 <= index && index < count as i64 {
            true => Ok(index as i32),
            false => Err(IndexError { kind: "state", index, count }).at(span),
        }
    }

    // =========================================================================
    // Next state clauses

    pub(super) fn at_next_keyword(&self) -> bool {
        NEXT_STATE_KEYWORDS.iter().any(|&kw| self.at_ident(kw))
    }

    fn parse_next_clause(&mut self) -> PResult<NextClause> {
        if self.eat_ident("stop").is_some() {
            Ok(NextClause::Stop)
        } else if self.eat_ident("wait").is_some() {
            Ok(NextClause::Wait)
        } else if self.eat_ident("loop").is_some() {
            Ok(NextClause::Loop)
        } else if self.eat_ident("goto").is_some() {
            Ok(NextClause::Goto(self.parse_goto_target("Expected a state index or label after \"goto\".")?))
        } else {
            Err(self.error_here("Expected next state clause (stop, wait, loop, goto)."))
        }
    }

    /// A state index, a label with an optional offset, or `thing N label`/`weapon N label`.
    pub(super) fn parse_goto_target(&mut self, message: &str) -> PResult<GotoTarget> {
        if let Some(state) = self.match_actor_state_ref()? {
            return Ok(GotoTarget::Index(state.value));
        }
        if let Some(index) = self.match_positive_integer()? {
            self.ctx.ensure_state(index.value as usize).at(index.span)?;
            return Ok(GotoTarget::Index(index.value));
        }
        let name = match self.eat_any_ident() {
            Some(name) => name,
            None => match self.eat_string()? {
                Some(name) => name,
                None => return Err(self.error_here(message)),
            },
        };
        let offset = if self.eat_kind(TokenKind::Plus).is_some() {
            self.expect_positive_integer("Expected a state offset after '+'.")?.value
        } else if self.at_kind(TokenKind::Minus) && self.nth_is(1, TokenKind::LitInt) {
            self.bump();
            -self.expect_positive_integer("Expected a state offset after '-'.")?.value
        } else {
            0
        };
        Ok(GotoTarget::Label { name, offset })
    }

    // =========================================================================
    // State lines

    fn resolve_sprite(&mut self, name: &Sp<String>) -> PResult<i32> {
        if let Some(index) = self.ctx.sprite_index(name) {
            return Ok(index as i32);
        }
        let mut e = error!(
            message("Expected valid sprite name."),
            primary(name, "unknown sprite '{}'", name),
        );
        let names = self.ctx.tables().sprite_names.iter().map(|s| &s[..]);
        if let Some(suggestion) = flags::suggest(name, names) {
            e.diagnostics[0].notes.push(format!("did you mean '{}'?", suggestion));
        }
        Err(e)
    }

    fn match_frames(&mut self, message: &str) -> PResult<Sp<Vec<i32>>> {
        let frames = self.peek()
            .filter(|token| token.kind == TokenKind::Ident)
            .and_then(|token| frame_indices(&token.text).map(|frames| sp!(token.span => frames)));
        match frames {
            Some(frames) => {
                self.bump();
                Ok(frames)
            },
            None => Err(self.error_here(message)),
        }
    }

    /// `SPRT ABC 5 [bright] [fast] [offset(x, y)] [A_Action(args)]`
    ///
    /// `require_action` enforces the presence or absence of an action pointer.
    pub(super) fn parse_state_line(&mut self, actor: Option<ActorRef>, single_frame: bool, require_action: Option<bool>) -> PResult<ParsedState> {
        let start = self.span_here();
        let sprite_name = match self.eat_any_ident() {
            Some(name) => name,
            None => return Err(self.error_here("Expected valid sprite name.")),
        };
        let sprite = self.resolve_sprite(&sprite_name)?;

        let frames = self.match_frames("Expected valid frame characters after sprite name.")?;
        if single_frame && frames.len() > 1 {
            return Err(self.error_at(frames.span, "Expected a single frame character after sprite name."));
        }
        let duration = self.expect_integer("Expected valid state duration after frame.")?;
        RangeError::check("duration", -1, 9999, duration.value).at(duration.span)?;

        let (bright, mbf21_flags) = self.parse_state_flags()?;

        let mut actions = vec![];
        if let Some(open) = self.eat_kind(TokenKind::BraceOpen) {
            if single_frame || require_action.is_some() {
                return Err(self.error_at(open.span, "You cannot specify many action pointers for a single frame."));
            }
            while self.at_action_name() {
                let mut action = ParsedAction::default();
                self.parse_action_clause(actor, &mut action, None)?;
                actions.push(action);
            }
            self.expect_kind(TokenKind::BraceClose, "Expected a '}' to close an action pointer list.")?;
            if actions.is_empty() {
                actions.push(ParsedAction::default());
            }
        } else {
            let mut action = ParsedAction::default();
            self.parse_offset_clause(&mut action)?;
            self.parse_action_clause(actor, &mut action, require_action)?;
            actions.push(action);
        }

        Ok(ParsedState {
            sprite,
            frames: frames.value,
            duration: duration.value,
            bright,
            mbf21_flags,
            actions,
            span: start.merge(self.prev_span()),
        })
    }

    fn parse_state_flags(&mut self) -> PResult<(bool, Option<u32>)> {
        let mut bright = false;
        let mut mbf21_flags = None;
        loop {
            if self.eat_ident("bright").is_some() {
                bright = true;
            } else if self.at_ident("fast") || self.at_ident("notfast") {
                let fast = self.at_ident("fast");
                self.check_fast_flag()?;
                self.bump();
                let flags: u32 = mbf21_flags.unwrap_or(0);
                mbf21_flags = Some(match fast {
                    true => flags | state_mbf21::SKILL5FAST,
                    false => flags & !state_mbf21::SKILL5FAST,
                });
            } else {
                return Ok((bright, mbf21_flags));
            }
        }
    }

    fn check_fast_flag(&self) -> PResult<()> {
        match self.supports(FeatureLevel::Mbf21) {
            true => Ok(()),
            false => {
                let keyword = self.peek().map(|token| token.text.clone()).unwrap_or_default();
                Err(self.error_here(format_args!("MBF21 state flags (e.g. \"{}\") are not available. Not an MBF21 patch.", keyword)))
            },
        }
    }

    fn parse_offset_clause(&mut self, action: &mut ParsedAction) -> PResult<()> {
        if self.eat_ident("offset").is_none() {
            return Ok(());
        }
        action.offset = true;
        self.expect_kind(TokenKind::ParenOpen, "Expected a '(' after \"offset\".")?;
        action.misc1 = self.expect_integer("Expected integer for X offset value.")?.value;
        self.expect_kind(TokenKind::Comma, "Expected a ',' after X offset; both X and Y offsets must be defined.")?;
        action.misc2 = self.expect_integer("Expected integer for Y offset value.")?.value;
        self.expect_kind(TokenKind::ParenClose, "Expected a ')' after offsets.")?;
        Ok(())
    }

    fn at_action_name(&self) -> bool {
        self.peek().map_or(false, |token| {
            token.kind == TokenKind::Ident && token.text.get(..2).map_or(false, |prefix| prefix.eq_ignore_ascii_case("A_"))
        })
    }

    fn lookup_pointer(&self, name: &Sp<String>) -> PResult<&'static ActionPointer> {
        if let Some(ptr) = pointer::lookup(name) {
            return Ok(ptr);
        }
        let mut e = error!(
            message("Unknown action pointer \"{}\".", name),
            primary(name, "not an action pointer"),
        );
        let known = pointer::catalog(self.ctx.format().pointer_kind()).map(|ptr| ptr.display_name()).collect::<Vec<_>>();
        if let Some(suggestion) = flags::suggest(name, known.iter().map(|s| &s[..])) {
            e.diagnostics[0].notes.push(format!("did you mean '{}'?", suggestion));
        }
        Err(e)
    }

    /// Check a pointer against the patch format and the actor that uses it.
    fn check_pointer_usable(&self, ptr: &ActionPointer, actor: Option<ActorRef>, span: Span) -> PResult<()> {
        let kind = self.ctx.format().pointer_kind();
        if !pointer::supports(kind, ptr) {
            return Err(self.error_at(span, format_args!(
                "{} action pointer used: {}. Patch does not support this action type.", ptr.kind.descr(), ptr.display_name(),
            )));
        }
        match actor {
            Some(ActorRef::Thing(_)) if ptr.is_weapon => Err(self.error_at(span, format_args!(
                "Action pointer {} is a weapon action. Thing action expected.", ptr.display_name(),
            ))),
            Some(ActorRef::Weapon(_)) if !ptr.is_weapon && !ptr.is_null() => Err(self.error_at(span, format_args!(
                "Action pointer {} is a thing action. Weapon action expected.", ptr.display_name(),
            ))),
            _ => Ok(()),
        }
    }

    fn parse_action_clause(&mut self, actor: Option<ActorRef>, action: &mut ParsedAction, require_action: Option<bool>) -> PResult<()> {
        let name = match self.at_action_name() {
            true => self.eat_any_ident(),
            false => None,
        };
        match (require_action, &name) {
            (Some(true), None) => return Err(self.error_here("Expected an action pointer for this state.")),
            (Some(false), Some(name)) => return Err(self.error_at(name.span, "Expected no action pointer for this state. State definition attempted to set one.")),
            _ => {},
        }
        let name = match name {
            Some(name) => name,
            None => return Ok(()),
        };

        let ptr = self.lookup_pointer(&name)?;
        self.check_pointer_usable(ptr, actor, name.span)?;
        action.pointer = Some(ptr);

        if let Some(open) = self.eat_kind(TokenKind::ParenOpen) {
            if ptr.uses_misc_fields() && action.offset {
                return Err(self.error_at(open.span, "Cannot use 'offset' directive on a state with an MBF action function parameter."));
            }
            self.parse_action_params(ptr, action)?;
        }
        Ok(())
    }

    fn parse_action_params(&mut self, ptr: &'static ActionPointer, action: &mut ParsedAction) -> PResult<()> {
        if self.eat_kind(TokenKind::ParenClose).is_some() {
            return Ok(());
        }
        let mut index = 0;
        loop {
            if index >= ptr.params.len() {
                return Err(self.error_here(format_args!(
                    "Too many args for action {}: this action expects a maximum of {} args.", ptr.display_name(), ptr.params.len(),
                )));
            }
            let field = match (ptr.uses_misc_fields(), index) {
                (true, 0) => ParamField::Misc1,
                (true, _) => ParamField::Misc2,
                (false, index) => ParamField::Arg(index),
            };
            match self.parse_param(ptr, index)?.value {
                ParamValue::Value(value) => action.set_field(field, value),
                ParamValue::Label(label) => {
                    action.set_field(field, 0);
                    action.label_fields.push((field, label));
                },
            }
            index += 1;
            if self.eat_kind(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect_kind(TokenKind::ParenClose, "Expected a ')' after action parameters.")?;
        Ok(())
    }

    // =========================================================================
    // The property form of `state N { ... }`

    fn at_state_property(&self) -> bool {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Ident => {
                STATE_PROPERTIES.iter().any(|&kw| token.is_ident(kw)) && self.ctx.find_sprite(&token.text).is_none()
            },
            _ => false,
        }
    }

    fn parse_state_properties(&mut self, seq: &mut Sequence, index: Sp<usize>) -> PResult<()> {
        let close_message = "Expected '}' after state definition.";
        let boom = self.supports(FeatureLevel::Boom);
        let index = index.value;

        while !self.at_block_end(close_message)? {
            let keyword_span = self.span_here();
            if self.eat_ident("spritename").is_some() {
                let name = match self.eat_any_ident() {
                    Some(name) => name,
                    None => return Err(self.error_here("Expected valid sprite name after \"spritename\".")),
                };
                let sprite = self.resolve_sprite(&name)?;
                self.ctx.state_mut(index).at(name.span)?.set_sprite(sprite).at(name.span)?;
            } else if self.eat_ident("frame").is_some() {
                let frames = self.match_frames("Expected valid frame characters after \"frame\".")?;
                if frames.len() != 1 {
                    return Err(self.error_at(frames.span, "Expected a single frame character after \"frame\"."));
                }
                self.ctx.state_mut(index).at(frames.span)?.set_frame(frames[0]).at(frames.span)?;
            } else if self.eat_ident("duration").is_some() {
                let duration = self.expect_integer("Expected integer after \"duration\".")?;
                self.ctx.state_mut(index).at(duration.span)?.set_duration(duration.value).at(duration.span)?;
            } else if self.eat_ident("nextstate").is_some() {
                match self.parse_goto_target("Expected valid state index clause after \"nextstate\".")? {
                    GotoTarget::Index(next) => {
                        self.ctx.state_mut(index).at(keyword_span)?.set_next(next).at(keyword_span)?;
                    },
                    GotoTarget::Label { name, offset } => {
                        seq.deferred.push(Deferred { state: index, field: DeferredField::Next, label: name, offset });
                    },
                }
            } else if self.eat_ident("pointer").is_some() {
                self.parse_pointer_property(seq, index, keyword_span, boom)?;
            } else if self.at_ident("offset") {
                let mut action = ParsedAction::default();
                self.parse_offset_clause(&mut action)?;
                let state = self.ctx.state_mut(index).at(keyword_span)?;
                state.misc1 = action.misc1;
                state.misc2 = action.misc2;
            } else if self.eat_ident("bright").is_some() {
                self.ctx.state_mut(index).at(keyword_span)?.bright = true;
            } else if self.eat_ident("notbright").is_some() {
                self.ctx.state_mut(index).at(keyword_span)?.bright = false;
            } else if self.at_ident("fast") || self.at_ident("notfast") {
                let fast = self.at_ident("fast");
                self.check_fast_flag()?;
                self.bump();
                let state = self.ctx.state_mut(index).at(keyword_span)?;
                match fast {
                    true => state.mbf21_flags |= state_mbf21::SKILL5FAST,
                    false => state.mbf21_flags &= !state_mbf21::SKILL5FAST,
                }
            } else {
                return Err(self.error_here("Expected valid sprite name, property, or next state clause (goto, stop, wait)."));
            }
        }
        self.ctx.set_free_state(index, false).at(self.span_here())
    }

    /// `pointer null` or `pointer A_Action(args)`.
    fn parse_pointer_property(&mut self, seq: &mut Sequence, index: usize, keyword_span: Span, boom: bool) -> PResult<()> {
        let has_slot = self.ctx.has_pointer_slot(index);
        if let Some(null_span) = self.eat_ident("null") {
            if !has_slot {
                return Err(self.error_at(null_span, "Action function specified for state without a function!"));
            }
            self.ctx.set_pointer(index, pointer::null()).at(null_span)?;
            self.ctx.state_mut(index).at(null_span)?.clear_parameters();
            return Ok(());
        }

        let mut action = ParsedAction::default();
        self.parse_action_clause(None, &mut action, Some(true))?;
        let ptr = match action.pointer {
            Some(ptr) => ptr,
            None => return Err(self.error_here("Expected an action pointer for this state.")),
        };
        if !has_slot && !boom {
            return Err(self.error_at(keyword_span, "Action function specified for state without a function!"));
        }
        self.ctx.set_pointer(index, ptr).at(keyword_span)?;

        let state = self.ctx.state_mut(index).at(keyword_span)?;
        if ptr.uses_misc_fields() {
            state.misc1 = action.misc1;
            state.misc2 = action.misc2;
        } else if !action.args.is_empty() || ptr.kind == crate::format::PointerKind::Mbf21 {
            state.args = [0; 8];
            state.args.iter_mut().zip(&action.args).for_each(|(dest, &arg)| *dest = arg);
        }
        for (field, label) in action.label_fields {
            seq.deferred.push(Deferred { state: index, field: DeferredField::Param(field), label, offset: 0 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_letters() {
        assert_eq!(frame_indices("A"), Some(vec![0]));
        assert_eq!(frame_indices("abZ"), Some(vec![0, 1, 25]));
        assert_eq!(frame_indices(r"[\]"), Some(vec![26, 27, 28]));
        assert_eq!(frame_indices("A1"), None);
    }
}
