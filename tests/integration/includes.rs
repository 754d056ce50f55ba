source_test!(
    include_relative_to_including_file,
    file: ("defs/ammo.dh", r#"
        #include "more/bullets.dh"
    "#),
    file: ("defs/more/bullets.dh", r#"
        ammo bullets { max 400 }
    "#),
    main: r#"
        using boom
        #include "defs/ammo.dh"
        misc { maxHealth 150 }
    "#,
    check_patch: |patch| {
        assert!(patch.contains("Ammo 0 (Bullets)\nMax ammo = 400\n"), "{}", patch);
        assert!(patch.contains("Max Health = 150\n"), "{}", patch);
    },
    check_expanded_source: |source| {
        // each file keeps its own trailing blank line
        assert_eq!(source, "using boom\nammo bullets { max 400 }\n\n\n\n\nmisc { maxHealth 150 }\n\n");
    },
);

source_test!(
    errors_point_into_included_files,
    file: ("things.dh", r#"
        thing 2 {
            radius -5
        }
    "#),
    main: r#"
        using boom
        #include "things.dh"
    "#,
    expect_error: "Expected positive integer",
    check_stderr: |stderr| {
        assert!(stderr.contains("things.dh:2:"), "{}", stderr);
    },
);

source_test!(
    missing_include,
    main: r#"
        using boom
        #include "not/a/real/file.dh"
    "#,
    expect_error: "could not include 'not/a/real/file.dh'",
    check_stderr: |stderr| {
        assert!(stderr.contains("main.dh:2:1"), "{}", stderr);
    },
);

source_test!(
    include_cycle,
    file: ("a.dh", r#"
        #include "b.dh"
    "#),
    file: ("b.dh", r#"
        #include "a.dh"
    "#),
    main: r#"
        using boom
        #include "a.dh"
    "#,
    expect_error: "includes are nested more than 64 levels deep",
    check_stderr: |stderr| {
        assert_eq!(stderr.matches("error: ").count(), 1, "{}", stderr);
    },
);

source_test!(
    special_include_is_ignored,
    main: r#"
        #include <friendly>
        using mbf
        ammo 1 { pickup 8 }
    "#,
    expect_warning: "special include <friendly> is not supported",
    check_patch: |patch| {
        assert!(patch.contains("Ammo 1 (Shells)\nPer ammo = 8\n"), "{}", patch);
    },
);

source_test!(
    defines_and_conditionals,
    file: ("monsters.dh", r#"
        #define IMP thing 2
    "#),
    main: r#"
        using boom
        #include "monsters.dh"
        #define TOUGH
        #ifdef tough
        IMP { health 500 }
        #else
        IMP { health 5 }
        #endif
    "#,
    check_patch: |patch| {
        assert!(patch.contains("Thing 2 (Trooper)\nHit points = 500\n"), "{}", patch);
        assert!(!patch.contains("Hit points = 5\n"), "{}", patch);
    },
);
