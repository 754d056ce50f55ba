//! Writing a [`PatchContext`] as a DeHackEd patch.
//!
//! Only data that differs from the baseline of the patch format is written.  Output always uses
//! CRLF line endings.

use std::fmt;

use strum::IntoEnumIterator;

use crate::context::strings::{self, StringKey};
use crate::context::{MiscField, PatchContext, ThingFrame, ThingSound, WeaponFrame};
use crate::flags::THING_MISSILE;
use crate::format::FeatureLevel;

const NEWLINE: &str = "\r\n";

/// Value of the `Monsters Infight` line.  Anything other than 221 disables infighting.
const INFIGHT_ON: i32 = 221;
const INFIGHT_OFF: i32 = 202;

const BRIGHT_BIT: i32 = 0x8000;

/// Write a patch.  `comment` goes on the line after the patch header.
pub fn export(ctx: &PatchContext, comment: &str) -> String {
    let mut out = PatchWriter::default();
    write_header(&mut out, ctx, comment);

    write_things(&mut out, ctx);
    write_states(&mut out, ctx);
    write_sounds(&mut out, ctx);
    write_weapons(&mut out, ctx);
    write_ammo(&mut out, ctx);
    write_misc(&mut out, ctx);

    if ctx.supports(FeatureLevel::Boom) {
        write_codeptr_section(&mut out, ctx);
        write_strings_section(&mut out, ctx);
        write_pars_section(&mut out, ctx);
    } else {
        write_doom19_pointers(&mut out, ctx);
        write_doom19_text(&mut out, ctx);
    }
    if ctx.supports(FeatureLevel::DsdHacked) {
        write_sprites_section(&mut out, ctx);
        write_sounds_section(&mut out, ctx);
    }
    out.finish()
}

// =============================================================================

#[derive(Debug, Default)]
struct PatchWriter {
    out: String,
}

impl PatchWriter {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        self.out.push_str(&fmt::format(args));
        self.out.push_str(NEWLINE);
    }

    fn blank(&mut self) {
        self.out.push_str(NEWLINE);
    }

    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Write one record block, if it has any lines.
    fn record(&mut self, header: fmt::Arguments<'_>, fields: Fields) {
        if fields.lines.is_empty() {
            return;
        }
        self.line(header);
        for line in fields.lines {
            self.raw(&line);
            self.blank();
        }
        self.blank();
    }

    /// Write a bracketed section, if it has any lines.
    fn section(&mut self, name: &str, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        self.line(format_args!("[{}]", name));
        for line in lines {
            self.raw(&line);
            self.blank();
        }
        self.blank();
    }

    fn finish(self) -> String { self.out }
}

/// The `Key = value` lines of one record.
#[derive(Debug, Default)]
struct Fields {
    lines: Vec<String>,
}

impl Fields {
    /// Add a line if the value differs from the original.
    fn diff(&mut self, key: &str, new: i32, old: i32) {
        self.diff_as(key, new, old, new);
    }

    /// Like [`Self::diff`], but writes a different value than the one compared.
    fn diff_as(&mut self, key: &str, new: i32, old: i32, written: impl fmt::Display) {
        if new != old {
            self.lines.push(format!("{} = {}", key, written));
        }
    }
}

fn write_header(out: &mut PatchWriter, ctx: &PatchContext, comment: &str) {
    let format = ctx.format();
    out.line(format_args!("Patch File for DeHackEd v3.0"));
    out.line(format_args!("# {}", comment));
    out.line(format_args!("# Note: Use the pound sign ('#') to start comment lines."));
    out.blank();
    out.line(format_args!("Doom version = {}", format.doom_version()));
    out.line(format_args!("Patch format = {}", format.patch_format()));
    out.blank();
    out.blank();
}

// =============================================================================
// Records

fn thing_frame_key(slot: ThingFrame) -> &'static str {
    match slot {
        ThingFrame::Spawn => "Initial frame",
        ThingFrame::See => "First moving frame",
        ThingFrame::Pain => "Injury frame",
        ThingFrame::Melee => "Close attack frame",
        ThingFrame::Missile => "Far attack frame",
        ThingFrame::Death => "Death frame",
        ThingFrame::ExtremeDeath => "Exploding frame",
        ThingFrame::Raise => "Respawn frame",
    }
}

/// Sound lines in the order DeHackEd writes them.
const THING_SOUND_KEYS: &[(ThingSound, &str)] = &[
    (ThingSound::See, "Alert sound"),
    (ThingSound::Active, "Action sound"),
    (ThingSound::Attack, "Attack sound"),
    (ThingSound::Pain, "Pain sound"),
    (ThingSound::Death, "Death sound"),
];

fn write_things(out: &mut PatchWriter, ctx: &PatchContext) {
    let mbf21 = ctx.supports(FeatureLevel::Mbf21);
    let extended = ctx.supports(FeatureLevel::Extended);

    // index 0 is a placeholder that DeHackEd does not number
    for (index, (thing, old)) in zip!(&ctx.tables().things, &ctx.baseline().things).enumerate().skip(1) {
        if thing == old {
            continue;
        }
        // missiles store their speed in fixed point
        let speed_shift = if thing.flags & THING_MISSILE != 0 { 16 } else { 0 };

        let mut f = Fields::default();
        f.diff("ID #", thing.editor_number(), old.editor_number());
        f.diff("Hit points", thing.health(), old.health());
        f.diff_as("Speed", thing.speed(), old.speed(), thing.speed() << speed_shift);
        f.diff_as("Width", thing.radius(), old.radius(), thing.radius() << 16);
        f.diff_as("Height", thing.height(), old.height(), thing.height() << 16);
        f.diff("Missile damage", thing.damage(), old.damage());
        f.diff("Reaction time", thing.reaction_time(), old.reaction_time());
        f.diff("Pain chance", thing.pain_chance(), old.pain_chance());
        f.diff_as("Bits", thing.flags as i32, old.flags as i32, thing.flags);
        f.diff("Mass", thing.mass(), old.mass());
        for slot in ThingFrame::iter() {
            f.diff(thing_frame_key(slot), thing.frame(slot), old.frame(slot));
        }
        for &(slot, key) in THING_SOUND_KEYS {
            f.diff(key, thing.sound(slot), old.sound(slot));
        }
        if mbf21 {
            f.diff("Rip sound", thing.sound(ThingSound::Rip), old.sound(ThingSound::Rip));
            f.diff_as("Fast speed", thing.fast_speed(), old.fast_speed(), match thing.fast_speed() {
                -1 => -1,
                speed => speed << speed_shift,
            });
            f.diff_as("Melee range", thing.melee_range(), old.melee_range(), thing.melee_range() << 16);
            f.diff_as("MBF21 Bits", thing.mbf21_flags as i32, old.mbf21_flags as i32, thing.mbf21_flags);
            f.diff("Infighting group", thing.infighting_group(), old.infighting_group());
            f.diff("Projectile group", thing.projectile_group(), old.projectile_group());
            f.diff("Splash group", thing.splash_group(), old.splash_group());
        }
        if extended {
            f.diff("Dropped item", thing.dropped_item(), old.dropped_item());
        }
        out.record(format_args!("Thing {} ({})", index, thing.name), f);
    }
}

fn write_states(out: &mut PatchWriter, ctx: &PatchContext) {
    let mbf21 = ctx.supports(FeatureLevel::Mbf21);

    for (index, (state, old)) in zip!(&ctx.tables().states, &ctx.baseline().states).enumerate() {
        if state == old {
            continue;
        }
        let subnumber = |frame: i32, bright: bool| frame | if bright { BRIGHT_BIT } else { 0 };

        let mut f = Fields::default();
        f.diff("Sprite number", state.sprite(), old.sprite());
        f.diff("Sprite subnumber", subnumber(state.frame(), state.bright), subnumber(old.frame(), old.bright));
        f.diff("Next frame", state.next(), old.next());
        f.diff("Duration", state.duration(), old.duration());
        f.diff("Unknown 1", state.misc1, old.misc1);
        f.diff("Unknown 2", state.misc2, old.misc2);
        if mbf21 {
            for (i, (&arg, &old_arg)) in state.args.iter().zip(&old.args).enumerate() {
                f.diff(&format!("Args{}", i + 1), arg, old_arg);
            }
            f.diff_as("MBF21 Bits", state.mbf21_flags as i32, old.mbf21_flags as i32, state.mbf21_flags);
        }
        out.record(format_args!("Frame {}", index), f);
    }
}

fn write_sounds(out: &mut PatchWriter, ctx: &PatchContext) {
    for (index, (sound, old)) in zip!(&ctx.tables().sounds, &ctx.baseline().sounds).enumerate() {
        let mut f = Fields::default();
        f.diff("Value", sound.priority(), old.priority());
        f.diff("Zero/One", sound.singular as i32, old.singular as i32);
        out.record(format_args!("Sound {}", index), f);
    }
}

fn weapon_frame_key(slot: WeaponFrame) -> &'static str {
    // DeHackEd calls the raise state "Deselect frame" and the lower state "Select frame"
    match slot {
        WeaponFrame::Raise => "Deselect frame",
        WeaponFrame::Lower => "Select frame",
        WeaponFrame::Ready => "Bobbing frame",
        WeaponFrame::Fire => "Shooting frame",
        WeaponFrame::Flash => "Firing frame",
    }
}

fn write_weapons(out: &mut PatchWriter, ctx: &PatchContext) {
    let mbf21 = ctx.supports(FeatureLevel::Mbf21);

    for (index, (weapon, old)) in zip!(&ctx.tables().weapons, &ctx.baseline().weapons).enumerate() {
        let mut f = Fields::default();
        f.diff("Ammo type", weapon.ammo_type.index(), old.ammo_type.index());
        for slot in WeaponFrame::iter() {
            f.diff(weapon_frame_key(slot), weapon.frame(slot), old.frame(slot));
        }
        f.diff("Ammo per shot", weapon.ammo_per_shot(), old.ammo_per_shot());
        if mbf21 {
            f.diff_as("MBF21 Bits", weapon.mbf21_flags as i32, old.mbf21_flags as i32, weapon.mbf21_flags);
        }
        out.record(format_args!("Weapon {} ({})", index, weapon.name), f);
    }
}

fn write_ammo(out: &mut PatchWriter, ctx: &PatchContext) {
    for (index, (ammo, old)) in zip!(&ctx.tables().ammo, &ctx.baseline().ammo).enumerate() {
        let mut f = Fields::default();
        f.diff("Max ammo", ammo.max(), old.max());
        f.diff("Per ammo", ammo.pickup(), old.pickup());
        out.record(format_args!("Ammo {} ({})", index, ammo.name), f);
    }
}

fn write_misc(out: &mut PatchWriter, ctx: &PatchContext) {
    let (misc, old) = (&ctx.tables().misc, &ctx.baseline().misc);
    let infight = |on: bool| if on { INFIGHT_ON } else { INFIGHT_OFF };

    let mut f = Fields::default();
    f.diff("Monsters Infight", infight(misc.monsters_infight), infight(old.monsters_infight));
    for field in MiscField::iter() {
        f.diff(field.patch_key(), misc.get(field), old.get(field));
    }
    out.record(format_args!("Misc 0"), f);
}

// =============================================================================
// Doom 1.9 sections

/// `Pointer` blocks.  Pointers are numbered by their position among the states that have a slot.
fn write_doom19_pointers(out: &mut PatchWriter, ctx: &PatchContext) {
    let slots = zip!(&ctx.tables().pointers, &ctx.baseline().pointers)
        .enumerate()
        .filter_map(|(state, (&new, &old))| Some((state, new?, old?)));

    for (pointer_index, (state, new, old)) in slots.enumerate() {
        if new == old {
            continue;
        }
        out.line(format_args!("Pointer {} (Frame {})", pointer_index, state));
        out.line(format_args!("Codep Frame = {}", new.frame.unwrap_or(0)));
        out.blank();
    }
}

/// `Text` blocks: the old and new text follow the header with nothing in between.
fn write_doom19_text(out: &mut PatchWriter, ctx: &PatchContext) {
    let count = ctx.string_count();
    for (key, old, new) in ctx.tables().strings.changes(&ctx.baseline().strings) {
        out.line(format_args!("Text {} {}", old.len(), new.len()));
        out.raw(old);
        out.raw(new);
        if matches!(key, StringKey::Index(index) if index + 1 < count) {
            out.blank();
        }
    }
}

// =============================================================================
// Boom sections

fn write_codeptr_section(out: &mut PatchWriter, ctx: &PatchContext) {
    let lines = zip!(&ctx.tables().pointers, &ctx.baseline().pointers)
        .enumerate()
        .filter(|(_, (new, old))| new != old)
        .filter_map(|(state, (&new, _))| new.map(|ptr| format!("FRAME {} = {}", state, ptr.mnemonic)))
        .collect();
    out.section("CODEPTR", lines);
}

fn write_strings_section(out: &mut PatchWriter, ctx: &PatchContext) {
    let lines = ctx.tables().strings.changes(&ctx.baseline().strings).into_iter()
        .filter_map(|(key, _, new)| match key {
            StringKey::Name(name) => Some(format!("{} = {}", name, strings::escape(new))),
            StringKey::Index(_) => None,
        })
        .collect();
    out.section("STRINGS", lines);
}

fn write_pars_section(out: &mut PatchWriter, ctx: &PatchContext) {
    let lines = ctx.tables().pars.iter()
        .filter(|&(map, &seconds)| ctx.baseline().pars.get(map) != Some(&seconds))
        .map(|(map, seconds)| match map.episode {
            0 => format!("par {} {}", map.map, seconds),
            episode => format!("par {} {} {}", episode, map.map, seconds),
        })
        .collect();
    out.section("PARS", lines);
}

// =============================================================================
// DSDHacked sections

fn write_sprites_section(out: &mut PatchWriter, ctx: &PatchContext) {
    let lines = ctx.new_sprite_names().map(|(index, name)| format!("{} = {}", index, name)).collect();
    out.section("SPRITES", lines);
}

fn write_sounds_section(out: &mut PatchWriter, ctx: &PatchContext) {
    let lines = ctx.new_sound_names().map(|(index, name)| format!("{} = {}", index, name)).collect();
    out.section("SOUNDS", lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PatchFormat;
    use crate::parse::{lexer, parse};
    use crate::pos::{SourceStr, Span};

    fn compile(s: &str) -> PatchContext {
        let tokens = lexer::tokenize(SourceStr::new_null(s)).unwrap();
        match parse(tokens, Span::NULL) {
            Ok(parsed) => parsed.context,
            Err(e) => panic!("unexpected errors: {:?}", e.messages()),
        }
    }

    /// Everything after the header, with LF line endings.
    fn body(s: &str) -> String {
        let patch = export(&compile(s), "test");
        let (_, body) = patch.split_once("Patch format = 6\r\n\r\n\r\n").expect("patch has a header");
        body.replace("\r\n", "\n").trim_end().to_string()
    }

    #[test]
    fn header() {
        let patch = export(&PatchContext::new(PatchFormat::Boom).unwrap(), "Created with decohack");
        assert_eq!(patch, concat!(
            "Patch File for DeHackEd v3.0\r\n",
            "# Created with decohack\r\n",
            "# Note: Use the pound sign ('#') to start comment lines.\r\n",
            "\r\n",
            "Doom version = 21\r\n",
            "Patch format = 6\r\n",
            "\r\n",
            "\r\n",
        ));
        let patch = export(&PatchContext::new(PatchFormat::Doom19).unwrap(), "x");
        assert!(patch.contains("Doom version = 19\r\n"));
    }

    #[test]
    fn crlf_only() {
        let patch = export(&compile("using boom\nthing 2 { health 50 }\nstrings { GOTARMOR \"a\" }"), "x");
        assert!(!patch.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn single_frame() {
        insta::assert_snapshot!(body("using doom19\nstate 5 { TROO A 10 goto 6 }"), @r###"
Frame 5
Next frame = 6
Duration = 10
"###);
    }

    #[test]
    fn ammo() {
        insta::assert_snapshot!(body("using boom\nammo bullets { max 300 pickup 20 }"), @r###"
Ammo 0 (Bullets)
Max ammo = 300
Per ammo = 20
"###);
    }

    #[test]
    fn unchanged_assignments_are_not_written() {
        assert_eq!(body("using boom\nthing 2 { health 20 }\nammo 0 { max 200 }\nsound 1 { priority 64 }"), "");
        assert_eq!(body("using boom\nthing 2 { health 50 }\nthing 2 { health 20 }"), "");
    }

    #[test]
    fn thing_fields() {
        insta::assert_snapshot!(body("using boom\nthing 2 { health 50 radius 30 +MISSILE speed 20 seesound pistol }"), @r###"
Thing 2 (Trooper)
Hit points = 50
Speed = 1310720
Width = 1966080
Bits = 4259846
Alert sound = 1
"###);
    }

    #[test]
    fn mbf21_thing_fields() {
        insta::assert_snapshot!(body("using mbf21\nthing 2 { meleerange 80 +BOSS infightinggroup 3 }"), @r###"
Thing 2 (Trooper)
Melee range = 5242880
MBF21 Bits = 512
Infighting group = 3
"###);
    }

    #[test]
    fn bright_frames() {
        insta::assert_snapshot!(body("using boom\nstate 300 { TROO B 2 bright stop }"), @r###"
Frame 300
Sprite subnumber = 32769
Duration = 2
"###);
    }

    #[test]
    fn mbf21_args() {
        insta::assert_snapshot!(body("using mbf21\nstate 300 { TROO A 2 A_JumpIfHealthBelow(302, 10) stop }"), @r###"
Frame 300
Duration = 2
Args1 = 302
Args2 = 10

[CODEPTR]
FRAME 300 = JumpIfHealthBelow
"###);
    }

    #[test]
    fn weapons() {
        insta::assert_snapshot!(body("using mbf21\nweapon 1 { ammotype shells ammopershot 2 state select 5 +SILENT }"), @r###"
Weapon 1 (Pistol)
Ammo type = 1
Deselect frame = 5
Ammo per shot = 2
MBF21 Bits = 18
"###);
    }

    #[test]
    fn sounds_and_misc() {
        insta::assert_snapshot!(body("using boom\nsound 1 { priority 100 singular true }\nmisc { monsterInfighting true initialBullets 100 }"), @r###"
Sound 1
Value = 100
Zero/One = 1

Misc 0
Monsters Infight = 221
Initial Bullets = 100
"###);
    }

    #[test]
    fn doom19_pointers() {
        // states 1 through 4 own the first four pointers
        insta::assert_snapshot!(body("using doom19\nstate 6 { PUNG B 4 A_Lower }"), @r###"
Frame 6
Sprite number = 2
Sprite subnumber = 1
Duration = 4

Pointer 4 (Frame 6)
Codep Frame = 3
"###);
    }

    #[test]
    fn doom19_late_pointers() {
        let patch = body("using doom19\nstate 174 { TROO A 10 A_Chase }\nstate 811 { MISL B 8 A_Scream }");
        assert!(patch.contains("Pointer 77 (Frame 174)\nCodep Frame = 176\n"), "{}", patch);
        assert!(patch.ends_with("Pointer 447 (Frame 811)\nCodep Frame = 190"), "{}", patch);
    }

    #[test]
    fn doom19_text() {
        let patch = export(&compile("using doom19\nstrings { 0 \"IMPS\" }"), "x");
        assert!(patch.ends_with("Text 4 4\r\nTROOIMPS\r\n"), "{:?}", patch);
    }

    #[test]
    fn boom_sections() {
        insta::assert_snapshot!(body(r#"
            using boom
            state 300 { TROO A 1 A_Look stop }
            strings { MSG001 "Hello" GOTARMOR "say \"hi\" now" }
            pars { E1M1 45 MAP07 90 }
        "#), @r###"
Frame 300
Duration = 1

[CODEPTR]
FRAME 300 = Look

[STRINGS]
GOTARMOR = say \"hi\" now
MSG001 = Hello

[PARS]
par 1 1 45
par 7 90
"###);
    }

    #[test]
    fn dsdhacked_sections() {
        let text = body("using dsdhacked\nstate 5000 { NEWS A 1 stop }\nthing 2 { seesound newsnd }");
        assert!(text.contains("[SPRITES]\n"), "{}", text);
        assert!(text.lines().any(|line| line.ends_with(" = NEWS")), "{}", text);
        assert!(text.contains("[SOUNDS]\n"), "{}", text);
        assert!(text.lines().any(|line| line.ends_with(" = NEWSND")), "{}", text);
        assert!(text.contains("Frame 5000\n"), "{}", text);
    }

    #[test]
    fn exported_patch_is_stable() {
        let source = "using mbf21\nthing 2 { health 50 }\nstate 300 { TROO A 2 A_Look stop }\nmisc { maxHealth 150 }";
        assert_eq!(export(&compile(source), "x"), export(&compile(source), "x"));
    }
}
