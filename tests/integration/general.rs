use crate::integration_impl::{run_decohack, read_to_string, TestDir};

source_test!(
    errors_have_locations,
    main: r#"
        using boom

        thing 0 { health 5 }
    "#,
    expect_error: "Invalid thing index: 0.",
    check_stderr: |stderr| {
        assert!(stderr.contains("main.dh:3:7"), "{}", stderr);
    },
);

source_test!(
    errors_in_two_entries_are_both_reported,
    main: r#"
        using boom
        thing 2 { health }
        ammo 0 { max 300 }
        weapon 99 { }
        misc { maxHealth 300 }
    "#,
    expect_error: "Expected integer after \"health\".",
    expect_error: "Invalid weapon index: 99. Max is 8.",
    check_stderr: |stderr| {
        assert_eq!(stderr.matches("error: ").count(), 2, "{}", stderr);
    },
);

source_test!(
    missing_using_clause,
    main: r#"
        thing 2 { health 50 }
    "#,
    expect_error: "Expected \"using\" clause to set the patch format.",
);

source_test!(
    unknown_format,
    main: r#"
        using doom3
    "#,
    expect_error: "Expected valid patch format type (doom19, udoom19, boom, mbf, extended, mbf21, dsdhacked).",
);

source_test!(
    unknown_string_key_warns,
    main: r#"
        using boom
        strings { NOTAKEY "hello" }
    "#,
    expect_warning: "String name \"NOTAKEY\" is not a known string name.",
    check_patch: |patch| {
        assert!(patch.contains("[STRINGS]\nNOTAKEY = hello\n"), "{}", patch);
    },
);

source_test!(
    replacing_the_last_doom19_state_warns,
    main: r#"
        using doom19
        state 966 { TROO A 5 stop }
    "#,
    expect_warning: "Final state 966 was replaced",
    check_patch: |patch| {
        assert!(patch.contains("Frame 966\n"), "{}", patch);
    },
);

source_test!(
    latin1_charset,
    raw_file: ("strings.dh", &b"strings { GOTARMOR \"caf\xE9\" }\n"[..]),
    main: r#"
        using boom
        #include "strings.dh"
    "#,
    args: &["--charset", "windows-1252"],
    check_patch: |patch| {
        assert!(patch.contains("GOTARMOR = café\n"), "{}", patch);
    },
);

#[test]
fn patch_goes_to_stdout_by_default() {
    let dir = TestDir::new();
    dir.write("main.dh", "using boom\nammo 0 { max 300 }\n");
    let output = run_decohack(dir.path(), |cmd| cmd.arg("main.dh"));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Patch File for DeHackEd v3.0\r\n"));
    assert!(stdout.contains("Ammo 0 (Bullets)\r\nMax ammo = 300\r\n"));
}

#[test]
fn budget_does_not_write_a_patch() {
    let dir = TestDir::new();
    dir.write("main.dh", "using doom19\nthing 2 free states\n");
    let output = run_decohack(dir.path(), |cmd| cmd.arg("main.dh").arg("-b").arg("-o").arg("out.deh"));
    assert!(output.status.success());
    assert!(!dir.path().join("out.deh").exists());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--- Patch State Budget ---"), "{}", stderr);
    assert!(stderr.contains(" used / 967 total ("), "{}", stderr);
    assert!(stderr.contains("Action Pointers: "), "{}", stderr);
}

#[test]
fn output_is_written_with_crlf() {
    let dir = TestDir::new();
    dir.write("main.dh", "using boom\nthing 2 { health 50 }\n");
    let output = run_decohack(dir.path(), |cmd| cmd.arg("main.dh").arg("-o").arg("out.deh"));
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let patch = read_to_string(&dir.path().join("out.deh"));
    assert!(patch.contains("Thing 2 (Trooper)\r\nHit points = 50\r\n"), "{:?}", patch);
    assert!(!patch.replace("\r\n", "").contains('\n'));
}
