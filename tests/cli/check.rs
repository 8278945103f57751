use anyhow::Result;

use crate::{CliTest, catalog, run};

const CLEAN_MESSAGES: &str = r#"    <message>
        <source>&amp;Open</source>
        <translation>&amp;Öppna</translation>
    </message>
    <message>
        <source>%1 of %2</source>
        <translation>%1 av %2</translation>
    </message>"#;

const DUPLICATE_MESSAGES: &str = r#"    <message>
        <source>Open</source>
        <translation>Öppna</translation>
    </message>
    <message>
        <source>Open</source>
        <translation>Öppna fil</translation>
    </message>"#;

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", CLEAN_MESSAGES))?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Checked 1 catalog - no issues found")
    );

    Ok(())
}

#[test]
fn test_duplicate_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog("sv_SE", DUPLICATE_MESSAGES),
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"Open\"  duplicate"));
    assert!(output.stdout.contains("translations/sv_SE.ts:10"));
    assert!(output.stdout.contains("also defined at line 6 in MainWindow"));
    assert!(output.stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_place_markers_and_accelerators() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog(
            "sv_SE",
            r#"    <message>
        <source>%1 of %2</source>
        <translation>%1 av</translation>
    </message>
    <message>
        <source>&amp;Save</source>
        <translation>Spara</translation>
    </message>"#,
        ),
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("place-markers"));
    assert!(output.stdout.contains("missing in translation: %2"));
    assert!(output.stdout.contains("warning: \"&Save\"  accelerator"));

    Ok(())
}

#[test]
fn test_warnings_only_exit_zero() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog(
            "sv_SE",
            r#"    <message>
        <source>Pause</source>
        <translation type="unfinished"></translation>
    </message>"#,
        ),
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Pause\"  unfinished"));
    assert!(output.stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_named_rules_only() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog("sv_SE", DUPLICATE_MESSAGES),
    )?;

    let mut cmd = test.check_command();
    cmd.arg("unfinished");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(!output.stdout.contains("duplicate"));

    Ok(())
}

#[test]
fn test_config_disabled_rules() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog("sv_SE", DUPLICATE_MESSAGES),
    )?;
    test.write_file(".tscatrc.json", r#"{ "disabledRules": ["duplicate"] }"#)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    // Naming the rule overrides the config.
    let mut cmd = test.check_command();
    cmd.arg("duplicate");
    assert_eq!(run(cmd)?.code, Some(1));

    Ok(())
}

#[test]
fn test_duplicate_locale() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", CLEAN_MESSAGES))?;
    test.write_file("translations/sv.ts", &catalog("sv_SE", CLEAN_MESSAGES))?;

    let mut cmd = test.check_command();
    cmd.arg("duplicate-locale");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"sv_SE\"  duplicate-locale"));
    assert!(output.stdout.contains("--> ./translations/sv_SE.ts"));
    assert!(output.stdout.contains("also declared by ./translations/sv.ts"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", CLEAN_MESSAGES))?;
    test.write_file("translations/de_DE.ts", "<TS version=\"2.1\"><context>")?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> ./translations/de_DE.ts"));
    assert!(output.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_fixture_reports_obsolete() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.check_command();
    cmd.arg("obsolete");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Last session crashed\"  obsolete"));
    assert!(output.stdout.contains("10 problems (0 errors, 10 warnings)"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{ not json")?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    for command in ["check", "clean", "stats", "lookup", "init"] {
        assert!(output.stdout.contains(command));
    }

    Ok(())
}
