use anyhow::Result;

use crate::{CliTest, SV_SE, catalog, run};

#[test]
fn test_clean_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.clean_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("./translations/sv_SE.ts:"));
    assert!(output.stdout.contains("- BookmarksWidget: Close"));
    assert!(output.stdout.contains("[obsolete]"));
    assert!(output.stdout.contains("Would remove 10 obsolete message(s)"));
    assert!(output.stdout.contains("Run with --apply"));

    assert_eq!(test.read_file("translations/sv_SE.ts")?, SV_SE);

    Ok(())
}

#[test]
fn test_clean_apply() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Removed 10 obsolete message(s)"));

    let content = test.read_file("translations/sv_SE.ts")?;
    assert!(!content.contains("type=\"obsolete\""));
    assert!(content.contains("<source>Download Manager</source>"));

    // Rewritten catalog still resolves the same way.
    let output = run(test.lookup_command("DownloadManager", "Clear"))?;
    assert_eq!(output.stdout, "Rensa\n");

    // Second run has nothing left to do.
    let output = run(test.clean_command())?;
    assert!(output.stdout.contains("Nothing to clean"));

    Ok(())
}

#[test]
fn test_clean_removes_empty_context() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog(
            "sv_SE",
            r#"    <message>
        <source>Close</source>
        <translation type="vanished">Stäng</translation>
    </message>"#,
        ),
    )?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = run(cmd)?;
    assert!(
        output
            .stdout
            .contains("Removed 1 obsolete message(s) and 1 empty context(s) from 1 file.")
    );
    assert!(!test.read_file("translations/sv_SE.ts")?.contains("MainWindow"));

    Ok(())
}

#[test]
fn test_clean_strip_locations() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog(
            "sv_SE",
            r#"    <message>
        <location filename="../src/mainwindow.cpp" line="42"/>
        <location line="+3"/>
        <source>Open</source>
        <translation>Öppna</translation>
    </message>"#,
        ),
    )?;

    let mut cmd = test.clean_command();
    cmd.arg("--strip-locations");
    let output = run(cmd)?;
    assert!(output.stdout.contains("Would strip line numbers from 2 location(s)."));
    assert!(test.read_file("translations/sv_SE.ts")?.contains("line=\"42\""));

    let mut cmd = test.clean_command();
    cmd.args(["--strip-locations", "--apply"]);
    let output = run(cmd)?;
    assert!(output.stdout.contains("Stripped line numbers from 2 location(s)."));

    let content = test.read_file("translations/sv_SE.ts")?;
    assert!(!content.contains("line="));
    assert!(content.contains("filename=\"../src/mainwindow.cpp\""));

    Ok(())
}

#[test]
fn test_clean_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog(
            "sv_SE",
            r#"    <message>
        <source>Open</source>
        <translation>Öppna</translation>
    </message>"#,
        ),
    )?;

    let output = run(test.clean_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Nothing to clean"));

    Ok(())
}

#[test]
fn test_clean_apply_keeps_unknown_nodes_and_whitespace() -> Result<()> {
    let license = "Copyright (C) The Browser Authors. ".repeat(60);
    let content = format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!-- {license} -->
<!DOCTYPE TS>
<TS version="2.1" language="sv_SE">
<dependencies>
    <dependency catalog="qtbase_sv"/>
</dependencies>
<extra-po-header-language>sv</extra-po-header-language>
<context>
    <name>MainWindow</name>
    <message>
        <source>Executable: </source>
        <translation> </translation>
        <extra-po-flags>c-format</extra-po-flags>
    </message>
    <message>
        <source>Close</source>
        <translation type="obsolete">Stäng</translation>
    </message>
</context>
</TS>
"#
    );
    let test = CliTest::with_file("translations/sv_SE.ts", &content)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Removed 1 obsolete message(s)"));

    let rewritten = test.read_file("translations/sv_SE.ts")?;
    assert!(rewritten.contains(&license));
    assert!(rewritten.contains(
        "<dependencies>\n    <dependency catalog=\"qtbase_sv\"/>\n</dependencies>\n"
    ));
    assert!(rewritten.contains("<extra-po-header-language>sv</extra-po-header-language>"));
    assert!(rewritten.contains("<extra-po-flags>c-format</extra-po-flags>"));
    assert!(rewritten.contains("<translation> </translation>"));
    assert!(!rewritten.contains("Stäng"));

    let output = run(test.lookup_command("MainWindow", "Executable: "))?;
    assert_eq!(output.stdout, " \n");

    Ok(())
}
