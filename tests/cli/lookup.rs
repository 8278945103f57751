use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, catalog, run};

const PLURALS: &str = r#"    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n fil</numerusform>
            <numerusform>%n filer</numerusform>
        </translation>
    </message>
    <message>
        <source>.co.uk</source>
        <comment>Append domain</comment>
        <translation>.se</translation>
    </message>
    <message>
        <source>.co.uk</source>
        <translation>.co.uk (Storbritannien)</translation>
    </message>"#;

#[test]
fn test_lookup_finished() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.lookup_command("DownloadManager", "Clear"))?;
    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"Rensa");

    Ok(())
}

#[test]
fn test_lookup_obsolete_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.lookup_command("BookmarksWidget", "Close");
    cmd.arg("-v");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Close\n");
    assert!(output.stderr.contains("showing the source text"));

    Ok(())
}

#[test]
fn test_lookup_unknown_message() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.lookup_command("NoSuchContext", "Hello"))?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Hello\n");

    Ok(())
}

#[test]
fn test_lookup_unfinished_policy() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.lookup_command("AdBlockCustomList", "Custom Rules"))?;
    assert_eq!(output.stdout, "Anpassade regler\n");

    let mut cmd = test.lookup_command("AdBlockCustomList", "Custom Rules");
    cmd.arg("--no-unfinished");
    let output = run(cmd)?;
    assert_eq!(output.stdout, "Custom Rules\n");

    test.write_file(".tscatrc.json", r#"{ "includeUnfinished": false }"#)?;
    let output = run(test.lookup_command("AdBlockCustomList", "Custom Rules"))?;
    assert_eq!(output.stdout, "Custom Rules\n");

    Ok(())
}

#[test]
fn test_lookup_verbose_note() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let mut cmd = test.lookup_command("DownloadManager", "Clear");
    cmd.arg("--verbose");
    let output = run(cmd)?;
    assert_eq!(output.stdout, "Rensa\n");
    assert!(
        output
            .stderr
            .contains("DownloadManager::Clear resolved from ./translations/sv_SE.ts (sv_SE, finished)")
    );

    Ok(())
}

#[test]
fn test_lookup_plural_forms() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", PLURALS))?;

    let mut cmd = test.lookup_command("MainWindow", "%n file(s)");
    cmd.args(["-n", "1"]);
    assert_eq!(run(cmd)?.stdout, "1 fil\n");

    let mut cmd = test.lookup_command("MainWindow", "%n file(s)");
    cmd.args(["-n", "5"]);
    assert_eq!(run(cmd)?.stdout, "5 filer\n");

    Ok(())
}

#[test]
fn test_lookup_empty_plural_form_notes_fallback() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sv_SE.ts",
        &catalog(
            "sv_SE",
            r#"    <message numerus="yes">
        <source>%n tab(s)</source>
        <translation>
            <numerusform>%n flik</numerusform>
            <numerusform></numerusform>
        </translation>
    </message>"#,
        ),
    )?;

    let mut cmd = test.lookup_command("MainWindow", "%n tab(s)");
    cmd.args(["-n", "3", "-v"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "3 tab(s)\n");
    assert!(output.stderr.contains("no usable translation for MainWindow::%n tab(s)"));
    assert!(!output.stderr.contains("resolved from"));

    let mut cmd = test.lookup_command("MainWindow", "%n tab(s)");
    cmd.args(["-n", "1", "-v"]);
    let output = run(cmd)?;
    assert_eq!(output.stdout, "1 flik\n");
    assert!(output.stderr.contains("resolved from ./translations/sv_SE.ts (sv_SE, finished)"));

    Ok(())
}

#[test]
fn test_lookup_disambiguation() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", PLURALS))?;

    let mut cmd = test.lookup_command("MainWindow", ".co.uk");
    cmd.args(["--comment", "Append domain"]);
    assert_eq!(run(cmd)?.stdout, ".se\n");

    // Unknown disambiguation retries without it.
    let mut cmd = test.lookup_command("MainWindow", ".co.uk");
    cmd.args(["--comment", "Other"]);
    assert_eq!(run(cmd)?.stdout, ".co.uk (Storbritannien)\n");

    Ok(())
}

#[test]
fn test_lookup_needs_locale_with_several_catalogs() -> Result<()> {
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
    test.write_file(
        "translations/de_DE.ts",
        &catalog(
            "de_DE",
            r#"    <message>
        <source>Open</source>
        <translation>Öffnen</translation>
    </message>"#,
        ),
    )?;

    let output = run(test.lookup_command("MainWindow", "Open"))?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("use --locale to pick one of: de_DE, sv_SE"));

    let mut cmd = test.lookup_command("MainWindow", "Open");
    cmd.args(["--locale", "de-DE"]);
    assert_eq!(run(cmd)?.stdout, "Öffnen\n");

    let mut cmd = test.lookup_command("MainWindow", "Open");
    cmd.args(["--locale", "fr_FR"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("No catalog for locale 'fr_FR'"));

    Ok(())
}

#[test]
fn test_lookup_explicit_file() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/app_sv.ts",
        &catalog(
            "sv_SE",
            r#"    <message>
        <source>Open</source>
        <translation>Öppna</translation>
    </message>"#,
        ),
    )?;

    let mut cmd = test.lookup_command("MainWindow", "Open");
    cmd.args(["--file", "i18n/app_sv.ts"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Öppna\n");

    Ok(())
}
