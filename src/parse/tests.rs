use crate::context::{ActorRef, AmmoType, MiscField, PatchContext, ThingFrame, ThingSound, WeaponFrame};
use crate::context::strings::{EpisodeMap, StringKey};
use crate::error::CompileError;
use crate::flags;
use crate::pos::{SourceStr, Span};
use super::{lexer, parse, Parsed};

// Spans here are not connected to any Files object; only the messages are of interest.
fn parse_str(s: &str) -> Result<Parsed, CompileError> {
    let tokens = lexer::tokenize(SourceStr::new_null(s))?;
    parse(tokens, Span::NULL)
}

fn compile(s: &str) -> PatchContext {
    match parse_str(s) {
        Ok(parsed) => parsed.context,
        Err(e) => panic!("unexpected errors: {:?}", e.messages()),
    }
}

fn compile_err(s: &str) -> Vec<String> {
    match parse_str(s) {
        Ok(_) => panic!("expected an error"),
        Err(e) => e.messages().into_iter().map(String::from).collect(),
    }
}

#[track_caller]
fn assert_error(s: &str, expected: &str) {
    let messages = compile_err(s);
    assert!(messages.iter().any(|m| m.contains(expected)), "{:?} does not contain {:?}", messages, expected);
}

fn sprite(ctx: &PatchContext, name: &str) -> i32 {
    ctx.find_sprite(name).unwrap() as i32
}

#[test]
fn using_clause() {
    assert_error("state 5 { TROO A 10 }", "Expected \"using\" clause");
    assert_error("using doom2", "Expected valid patch format type (doom19, udoom19, boom, mbf, extended, mbf21, dsdhacked).");
    assert_error("using", "Expected valid patch format type");
    assert_eq!(compile("USING Boom").format().as_str(), "boom");
}

#[test]
fn single_state() {
    let ctx = compile("using doom19\nstate 5 { PUNG B 10 goto 6 }");
    let state = ctx.state(5).unwrap();
    assert_eq!(state.sprite(), sprite(&ctx, "PUNG"));
    assert_eq!(state.frame(), 1);
    assert_eq!(state.duration(), 10);
    assert_eq!(state.next(), 6);
    assert!(!ctx.is_free_state(5));
}

#[test]
fn next_clause_only() {
    let ctx = compile("using boom\nstate 20 { goto 30 }\nstate 21 { stop }\nstate 22 { wait }");
    assert_eq!(ctx.state(20).unwrap().next(), 30);
    assert_eq!(ctx.state(21).unwrap().next(), 0);
    assert_eq!(ctx.state(22).unwrap().next(), 22);
    assert_error("using boom\nstate 20 { loop }", "Can't use \"loop\" with no declared state labels.");
}

#[test]
fn sequence_control_flow() {
    let ctx = compile(r#"
        using boom
        state 5 {
          L: TROO A 1
             TROO B 1 loop
             TROO C 1 wait
             TROO D 1 goto L+2
        }
    "#);
    assert_eq!(ctx.state(5).unwrap().next(), 6);
    assert_eq!(ctx.state(6).unwrap().next(), 5);
    assert_eq!(ctx.state(7).unwrap().next(), 7);
    assert_eq!(ctx.state(8).unwrap().next(), 7);
}

#[test]
fn labels_may_be_used_before_declaration() {
    let ctx = compile(r#"
        using boom
        state 40 {
             TROO A 1 goto Later
          Later: TROO B 1 goto Alias
          Alias: goto Later-1
        }
    "#);
    assert_eq!(ctx.state(40).unwrap().next(), 41);
    assert_eq!(ctx.state(41).unwrap().next(), 40);
}

#[test]
fn out_of_bounds_goto() {
    assert_error("using boom\nstate 5 { L: TROO A 1 goto L-6 }", "Invalid state index: -1. Max is 967.");
    assert_error("using boom\nstate 5 { TROO A 1 goto 5000 }", "Invalid state index: 5000. Max is 967.");
}

#[test]
fn undefined_labels() {
    assert_error("using boom\nstate 5 { TROO A 1 goto Nowhere }", "Labels were referenced and not defined: [Nowhere]");
}

#[test]
fn multiple_frames_and_actions() {
    let ctx = compile("using boom\nstate 300 { TROO ABC 4 { A_Look A_Chase } stop }");
    // two states per frame letter; the duration goes on the last one of each
    for (i, index) in (300..306).enumerate() {
        let state = ctx.state(index).unwrap();
        assert_eq!(state.frame(), (i / 2) as i32);
        assert_eq!(state.duration(), if i % 2 == 1 { 4 } else { 0 });
        let expected = if i % 2 == 0 { "Look" } else { "Chase" };
        assert_eq!(ctx.pointer(index).unwrap().mnemonic, expected);
    }
    assert_eq!(ctx.state(305).unwrap().next(), 0);
    assert_eq!(ctx.state(300).unwrap().next(), 301);
}

#[test]
fn frame_letters_after_z() {
    let ctx = compile(r"using boom
        state 10 { TROO [ 1 }
        state 11 { TROO \ 1 }
        state 12 { TROO ] 1 }");
    assert_eq!(ctx.state(10).unwrap().frame(), 26);
    assert_eq!(ctx.state(11).unwrap().frame(), 27);
    assert_eq!(ctx.state(12).unwrap().frame(), 28);
}

#[test]
fn doom19_pointer_slots() {
    // state 6 owns A_Punch in the vanilla tables; state 5 has no pointer slot
    assert_error("using doom19\nstate 6 { PUNG B 4 }", "Action function not specified for state with a function!");
    assert_error("using doom19\nstate 5 { PUNG B 4 A_Punch }", "Action function specified for state without a function!");
    let ctx = compile("using doom19\nstate 6 { PUNG B 4 A_Lower }");
    assert_eq!(ctx.pointer(6).unwrap().mnemonic, "Lower");
}

#[test]
fn boom_uses_null_pointer() {
    let ctx = compile("using boom\nstate 6 { PUNG B 4 }");
    assert!(ctx.pointer(6).unwrap().is_null());
}

#[test]
fn protected_states() {
    assert_error("using boom\nstate 1 { TROO A 1 }", "State index 1 is a protected state.");
    assert_error("using boom\nstate protect 50 to 52\nstate 51 { TROO A 1 }", "State index 51 is a protected state.");
    compile("using boom\nstate protect 50 to 52\nstate unprotect 51\nstate 51 { TROO A 1 }");
}

#[test]
fn state_fill() {
    let ctx = compile(r#"
        using boom
        state free 100 to 110
        state fill 100 {
          TROO A 2
          TROO B 2 loop
        }
    "#);
    assert_eq!(ctx.state(100).unwrap().next(), 101);
    assert_eq!(ctx.state(101).unwrap().next(), 100);
    assert!(!ctx.is_free_state(100));
    assert!(ctx.is_free_state(102));

    assert_error("using boom\nstate fill 100 { TROO A 2 stop }", "Starting state index for state fill, 100, is not a free state.");
    assert_error("using boom\nstate free 100\nstate fill 100 { TROO A 2 }", "Expected next state clause (stop, wait, loop, goto).");
}

#[test]
fn state_free_from() {
    let ctx = compile(r#"
        using boom
        state 500 { TROO A 1 TROO B 1 TROO C 1 goto 0 }
        state free from 500
    "#);
    assert!(ctx.is_free_state(500));
    assert!(ctx.is_free_state(502));
    assert!(!ctx.is_free_state(503));
}

#[test]
fn property_form() {
    let ctx = compile(r#"
        using mbf21
        state 50 {
          spritename POSS
          frame C
          duration 7
          nextstate 52
          pointer A_JumpIfHealthBelow(53, 10)
          bright
          fast
        }
    "#);
    let state = ctx.state(50).unwrap();
    assert_eq!(state.sprite(), sprite(&ctx, "POSS"));
    assert_eq!(state.frame(), 2);
    assert_eq!(state.duration(), 7);
    assert_eq!(state.next(), 52);
    assert!(state.bright);
    assert_eq!(state.mbf21_flags, flags::state_mbf21::SKILL5FAST);
    assert_eq!(&state.args[..3], &[53, 10, 0]);
    assert_eq!(ctx.pointer(50).unwrap().mnemonic, "JumpIfHealthBelow");

    assert_error("using boom\nstate 50 { fast }", "MBF21 state flags (e.g. \"fast\") are not available. Not an MBF21 patch.");
}

#[test]
fn offsets() {
    let ctx = compile("using boom\nstate 60 { TROO A 1 offset(4, -8) }");
    assert_eq!((ctx.state(60).unwrap().misc1, ctx.state(60).unwrap().misc2), (4, -8));
    assert_error(
        "using mbf\nstate 60 { TROO A 1 offset(4, 8) A_Spawn(2, 0) }",
        "Cannot use 'offset' directive on a state with an MBF action function parameter.",
    );
}

#[test]
fn pointer_kinds() {
    assert_error("using boom\nstate 60 { TROO A 1 A_Spawn(2, 0) }", "MBF action pointer used: A_Spawn. Patch does not support this action type.");
    assert_error("using mbf\nstate 60 { TROO A 1 A_AddFlags(0, 0) }", "MBF21 action pointer used: A_AddFlags.");
    assert_error("using boom\nstate 60 { TROO A 1 A_Lok }", "Unknown action pointer \"A_Lok\".");

    let ctx = compile("using mbf\nstate 60 { TROO A 1 A_Spawn(2, 16) }");
    assert_eq!((ctx.state(60).unwrap().misc1, ctx.state(60).unwrap().misc2), (2, 16));
}

#[test]
fn mbf21_params() {
    let ctx = compile(r#"
        using mbf21
        state 70 { TROO A 1 A_MonsterProjectile(5, 22.5, -1.5) }
        state 71 { TROO A 1 A_AddFlags(SOLID | SHOOTABLE, BOSS) }
        state 72 { TROO A 1 A_MonsterMeleeAttack(3, 8, pistol) }
    "#);
    assert_eq!(&ctx.state(70).unwrap().args[..3], &[5, 22 * 65536 + 32768, -(65536 + 32768)]);
    let solid_shootable = 0x2 | 0x4;
    assert_eq!(ctx.state(71).unwrap().args[0], solid_shootable);
    assert_ne!(ctx.state(71).unwrap().args[1], 0);
    assert_eq!(ctx.state(72).unwrap().args[2], ctx.find_sound("pistol").unwrap() as i32);

    assert_error(
        "using mbf21\nstate 70 { TROO A 1 A_RadiusDamage(1, 2, 3) }",
        "Too many args for action A_RadiusDamage: this action expects a maximum of 2 args.",
    );
    assert_error(
        "using mbf21\nstate 70 { TROO A 1 A_RadiusDamage(1.5) }",
        "Decimal value given for A_RadiusDamage arg 0",
    );
    assert_error(
        "using mbf21\nstate 70 { TROO A 1 A_MonsterBulletAttack(0, 0, 1, 70000) }",
        "Invalid value '70000' for A_MonsterBulletAttack arg 3: value must be between 0 and 65535.",
    );
}

#[test]
fn numbers_in_flag_expressions() {
    let ctx = compile(r#"
        using mbf21
        thing 2 { flags 0x40 | SOLID }
        state 70 { TROO A 1 A_AddFlags(0x400 | SHOOTABLE, 0) }
        state 71 { TROO A 1 A_Scratch(3, 0) }
    "#);
    assert_eq!(ctx.thing(2).unwrap().flags, 0x40 | 0x2);
    assert_eq!(ctx.state(70).unwrap().args[0], 0x400 | 0x4);
    assert_eq!(ctx.state(71).unwrap().misc1, 3);
}

#[test]
fn state_params_take_labels() {
    let ctx = compile(r#"
        using mbf21
        state 80 {
             TROO A 1 A_JumpIfHealthBelow(Hurt, 50)
             TROO B 1 stop
          Hurt: TROO C 1 stop
        }
    "#);
    assert_eq!(ctx.state(80).unwrap().args[0], 82);
}

#[test]
fn thing_properties() {
    let ctx = compile(r#"
        using mbf21
        thing 2 "Zombie" {
          health 50
          speed 12
          radius 24
          painchance 100
          meleerange 80
          +NOGRAVITY
          -SOLID
          +mbf21 4
          seesound pistol
          ripsound "shotgn"
        }
    "#);
    let thing = ctx.thing(2).unwrap();
    assert_eq!(thing.name, "Zombie");
    assert_eq!(thing.health(), 50);
    assert_eq!(thing.speed(), 12);
    assert_eq!(thing.radius(), 24);
    assert_eq!(thing.pain_chance(), 100);
    assert_eq!(thing.melee_range(), 80);
    assert_eq!(thing.flags & 0x2, 0);
    assert_ne!(thing.flags & 0x200, 0);
    assert_eq!(thing.mbf21_flags, 4);
    assert_eq!(thing.sound(ThingSound::See), ctx.find_sound("pistol").unwrap() as i32);
    assert_eq!(thing.sound(ThingSound::Rip), ctx.find_sound("shotgn").unwrap() as i32);
}

#[test]
fn thing_property_errors() {
    assert_error("using boom\nthing 2 { meleerange 5 }", "The \"meleerange\" property is not available. Not an MBF21 patch.");
    assert_error("using boom\nthing 2 { dropitem 3 }", "Not an EXTENDED patch.");
    assert_error("using boom\nthing 2 { ednum 11 }", "The editor number 11 is either invalid or reserved.");
    assert_error("using boom\nthing 2 { health 1000000 }", "health must be between 0 and 999999, got 1000000.");
    assert_error("using boom\nthing 2 { ednum 0 }", "The editor number 0 is either invalid or reserved.");
    assert_error("using boom\nthing 2 { +SHOOTABEL }", "Expected valid flag mnemonic.");
    assert_error("using boom\nthing 2 { +BOSS }", "MBF21 thing flags are not available. Not an MBF21 patch.");
    assert_error("using boom\nthing 0 { health 5 }", "Invalid thing index: 0.");
    assert_error("using boom\nthing 2 { seesound nope }", "Unknown sound name \"nope\".");
}

#[test]
fn thing_copy_and_swap() {
    let ctx = compile("using boom\nthing 3 : thing 2 { health 99 }");
    assert_eq!(ctx.thing(3).unwrap().radius(), ctx.thing(2).unwrap().radius());
    assert_eq!(ctx.thing(3).unwrap().name, "Trooper");
    assert_eq!(ctx.thing(3).unwrap().health(), 99);

    let ctx = compile("using boom\nthing 2 swap with 3");
    assert_eq!(ctx.thing(2).unwrap().name, "Sargeant");
    assert_eq!(ctx.thing(3).unwrap().name, "Trooper");
}

#[test]
fn thing_states() {
    let ctx = compile(r#"
        using boom
        thing 2 free states
        thing 2 {
          states {
            spawn: POSS AB 10 A_Look loop
            see: goto spawn
          }
        }
    "#);
    let thing = ctx.thing(2).unwrap();
    let spawn = thing.frame(ThingFrame::Spawn);
    assert_eq!(spawn, 174);
    assert_eq!(thing.frame(ThingFrame::See), spawn);
    let second = ctx.state(spawn as usize).unwrap().next();
    assert_eq!(ctx.state(second as usize).unwrap().next(), spawn);
    assert_eq!(ctx.pointer(spawn as usize).unwrap().mnemonic, "Look");
}

#[test]
fn thing_state_labels() {
    let ctx = compile(r#"
        using boom
        thing 2 {
          state pain 300
          state melee pain+1
          state custom 12
          clear state death
        }
        state 5 { TROO A 1 goto thing 2 custom }
    "#);
    let thing = ctx.thing(2).unwrap();
    assert_eq!(thing.frame(ThingFrame::Pain), 300);
    assert_eq!(thing.frame(ThingFrame::Melee), 301);
    assert_eq!(thing.frame(ThingFrame::Death), 0);
    assert_eq!(ctx.actor_label(ActorRef::Thing(2), "CUSTOM").unwrap(), Some(12));
    assert_eq!(ctx.state(5).unwrap().next(), 12);

    assert_error("using boom\nstate 5 { TROO A 1 goto thing 2 bogus }", "Label \"bogus\" is invalid or not declared at this moment.");
}

#[test]
fn thing_labels_of_actor_are_visible_in_states_block() {
    assert_error(
        "using boom\nthing 2 free states\nthing 2 { states { spawn: POSS A 1 goto nowhere } }",
        "Labels on this actor were referenced and not defined: [nowhere]",
    );
    compile("using boom\nthing 2 free states\nthing 2 { states { spawn: POSS A 1 goto death } }");
}

#[test]
fn actor_pointer_kinds() {
    assert_error(
        "using boom\nthing 2 free states\nthing 2 { states { spawn: POSS A 1 A_WeaponReady stop } }",
        "Action pointer A_WeaponReady is a weapon action. Thing action expected.",
    );
}

#[test]
fn weapons() {
    let ctx = compile(r#"
        using mbf21
        weapon 1 "Fists" {
          ammotype shells
          ammopershot 3
          +SILENT
          state fire 20
        }
        weapon 2 : weapon 1 { ammotype 5 }
    "#);
    let weapon = ctx.weapon(1).unwrap();
    assert_eq!(weapon.name, "Fists");
    assert_eq!(weapon.ammo_type, AmmoType::Shells);
    assert_eq!(weapon.ammo_per_shot(), 3);
    // fists already switch away when another weapon is picked up
    assert_eq!(weapon.mbf21_flags, flags::weapon_mbf21::AUTOSWITCHFROM | flags::weapon_mbf21::SILENT);
    assert_eq!(weapon.frame(WeaponFrame::Fire), 20);
    assert_eq!(ctx.weapon(2).unwrap().ammo_type, AmmoType::Infinite);
    assert_eq!(ctx.weapon(2).unwrap().frame(WeaponFrame::Fire), 20);

    assert_error("using boom\nweapon 1 { +SILENT }", "Weapon flags are not available. Not an MBF21 patch.");
    assert_error("using boom\nweapon 1 { ammotype 4 }", "Expected ammo type: an integer from 0 to 3, or 5.");
}

#[test]
fn strings_keyed() {
    let parsed = parse_str("using boom\nstrings { GOTARMOR \"Armor!\" NOTAKEY \"x\" }").unwrap();
    assert_eq!(parsed.context.string(&StringKey::Name("gotarmor")), Some("Armor!"));
    assert_eq!(parsed.warnings.messages(), vec!["String name \"NOTAKEY\" is not a known string name."]);
}

#[test]
fn strings_positional() {
    let ctx = compile("using doom19\nstrings { 0 \"IMPS\" }");
    assert_eq!(ctx.string(&StringKey::Index(0)), Some("IMPS"));
    // renaming a sprite through its text renames it for later lookups
    assert_eq!(ctx.find_sprite("IMPS"), Some(0));

    assert_error("using doom19\nstrings { 0 \"TOO LONG\" }", "longer than the original string length: 4.");
    assert_error("using doom19\nstrings { 99999 \"x\" }", "String index out of range.");
}

#[test]
fn ammo_sound_misc_pars() {
    let ctx = compile(r#"
        using boom
        ammo bullets "Pellets" { max 300 pickup 20 }
        sound pistol { priority 100 singular true }
        misc { monsterInfighting true initialHealth 150 }
        pars { E1M1 45 MAP07 1:30 }
    "#);
    assert_eq!(ctx.ammo(0).unwrap().max(), 300);
    assert_eq!(ctx.ammo(0).unwrap().pickup(), 20);
    assert_eq!(ctx.ammo(0).unwrap().name, "Pellets");
    let pistol = ctx.sound(ctx.find_sound("pistol").unwrap()).unwrap();
    assert_eq!(pistol.priority(), 100);
    assert!(pistol.singular);
    assert!(ctx.misc().monsters_infight);
    assert_eq!(ctx.misc().get(MiscField::InitialHealth), 150);
    assert_eq!(ctx.par(EpisodeMap::new(1, 1)), Some(45));
    assert_eq!(ctx.par(EpisodeMap::new(0, 7)), Some(90));

    assert_error("using doom19\npars { E1M1 45 }", "Par block not supported in non-Boom-feature-level patches.");
    assert_error("using boom\nammo 4 { max 1 }", "Expected ammo type: an integer from 0 to 3.");
    assert_error("using boom\nmisc { bogus 1 }", "Expected valid miscellaneous entry type.");
}

#[test]
fn case_insensitive_keywords_and_mnemonics() {
    let ctx = compile(r#"
        USING BOOM
        THING 2 { HEALTH 5 +shootable FLAGS solid | Shootable }
        STATE 5 { troo a 1 a_look STOP }
    "#);
    assert_eq!(ctx.thing(2).unwrap().health(), 5);
    assert_eq!(ctx.thing(2).unwrap().flags, 0x6);
    assert_eq!(ctx.pointer(5).unwrap().mnemonic, "Look");
}

#[test]
fn errors_in_separate_entries_are_all_reported() {
    let messages = compile_err(r#"
        using boom
        thing 2 { health -1 }
        ammo 0 { max 5 }
        thing 3 { bogus 5 }
        state 5 { TROO A 1 }
    "#);
    assert_eq!(messages.len(), 2, "{:?}", messages);
    assert!(messages[0].contains("health must be between"));
    assert!(messages[1].contains("Expected a thing property"));
}

#[test]
fn recovery_skips_to_next_entry() {
    // the unknown keyword is skipped up to the next entry keyword
    let messages = compile_err("using boom\nfrobnicate 1 2 3\nthing 2 { health 5 }\nbogus { }");
    assert_eq!(messages, vec![
        "Unknown section or command \"frobnicate\".",
        "Unknown section or command \"bogus\".",
    ]);
}

#[test]
fn dsdhacked_grows_tables() {
    let ctx = compile(r#"
        using dsdhacked
        state 5000 { TROO A 1 stop }
        thing 300 { health 10 }
        state 5001 { NEWS A 1 stop }
    "#);
    assert!(ctx.state_count() > 5001);
    assert!(ctx.thing_count() > 300);
    assert_eq!(ctx.thing(300).unwrap().health(), 10);
    assert_eq!(ctx.new_sprite_names().map(|(_, name)| name.to_string()).collect::<Vec<_>>(), vec!["NEWS"]);
}
