//! Whole scripts, checked against the patch they produce.

source_test!(
    doom19_single_frame,
    main: r#"
        using doom19
        state 5 { TROO A 10 goto 6 }
    "#,
    check_patch: |patch| {
        assert!(patch.starts_with("Patch File for DeHackEd v3.0\n# Created with decohack "));
        assert!(patch.contains("\nDoom version = 19\nPatch format = 6\n"));
        assert!(patch.contains("\nFrame 5\nNext frame = 6\nDuration = 10\n\n"), "{}", patch);
        assert_eq!(patch.matches("Frame ").count(), 1);
    },
);

source_test!(
    ammo_by_name,
    main: r#"
        using boom
        ammo bullets { max 300 pickup 20 }
    "#,
    check_patch: |patch| {
        assert!(patch.contains("Doom version = 21\n"));
        assert!(patch.contains("\nAmmo 0 (Bullets)\nMax ammo = 300\nPer ammo = 20\n"), "{}", patch);
    },
);

source_test!(
    boom_strings_are_escaped,
    main: r#"
        using boom
        strings {
            GOTARMOR "Picked up \"the\" armor.\n"
        }
    "#,
    check_patch: |patch| {
        assert!(patch.contains("[STRINGS]\nGOTARMOR = Picked up \\\"the\\\" armor.\\n\n"), "{}", patch);
    },
);

source_test!(
    doom19_text_replacement,
    main: r#"
        using doom19
        strings { 0 "IMPS" }
    "#,
    check_patch: |patch| {
        assert!(patch.contains("Text 4 4\nTROOIMPS"), "{}", patch);
    },
);

source_test!(
    unchanged_script_gives_header_only,
    main: r#"
        using mbf21
        thing 2 { health 20 }
    "#,
    check_patch: |patch| {
        assert_eq!(patch.lines().filter(|line| !line.is_empty() && !line.starts_with('#')).count(), 3, "{}", patch);
    },
);

source_test!(
    monster_with_states,
    main: r#"
        using mbf21
        state free 400 to 500
        thing 140 : thing 12 "Fire Imp"
        {
            health 80
            +MISSILE
            states
            {
            spawn:
                SARG AB 10 A_Look
                loop
            see:
                SARG AABBCCDD 2 A_Chase
                loop
            death:
                SARG I 8
                SARG J 8 A_Scream
                SARG K 4
                SARG L 4 A_Fall
                SARG M -1
                stop
            }
        }
    "#,
    args: &["--budget"],
    expect_success: true,
    check_stderr: |stderr| {
        assert!(stderr.contains("--- Patch State Budget ---"), "{}", stderr);
        assert!(stderr.contains("States: "), "{}", stderr);
    },
);

source_test!(
    weapon_and_pointers,
    main: r#"
        using boom
        state free 600 to 620
        weapon 1 "Blaster"
        {
            ammopershot 2
            states
            {
            fire:
                PISG A 4 A_FireCGun
                PISG B 6 A_ReFire
                goto ready
            }
        }
    "#,
    check_patch: |patch| {
        assert!(patch.contains("Weapon 1 (Blaster)\n"), "{}", patch);
        assert!(patch.contains("Ammo per shot = 2\n"), "{}", patch);
        assert!(patch.contains("[CODEPTR]\n"), "{}", patch);
        assert!(patch.contains(" = FireCGun\n"), "{}", patch);
        assert!(patch.contains(" = ReFire\n"), "{}", patch);
    },
);

source_test!(
    pars_and_misc,
    main: r#"
        using boom
        pars { E1M1 0:45  MAP07 90 }
        misc { monsterInfighting true  maxHealth 300 }
    "#,
    check_patch: |patch| {
        assert!(patch.contains("[PARS]\npar 1 1 45\npar 7 90\n"), "{}", patch);
        assert!(patch.contains("Misc 0\nMonsters Infight = 221\nMax Health = 300\n"), "{}", patch);
    },
);

source_test!(
    dsdhacked_new_names,
    main: r#"
        using dsdhacked
        state 4000 { NEWS A 5 stop }
        thing 2 { seesound mysnd }
    "#,
    check_patch: |patch| {
        assert!(patch.contains("\nFrame 4000\n"), "{}", patch);
        assert!(patch.contains("[SPRITES]\n"), "{}", patch);
        assert!(patch.contains(" = NEWS\n"), "{}", patch);
        assert!(patch.contains("[SOUNDS]\n"), "{}", patch);
        assert!(patch.contains(" = MYSND\n"), "{}", patch);
    },
);
