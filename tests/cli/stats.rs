use anyhow::Result;

use crate::{CliTest, catalog, run};

const MIXED: &str = r#"    <message>
        <source>Open</source>
        <translation>Öppna</translation>
    </message>
    <message>
        <source>Save</source>
        <translation type="unfinished">Spara</translation>
    </message>
    <message>
        <source>Print</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Close</source>
        <translation type="obsolete">Stäng</translation>
    </message>"#;

#[test]
fn test_stats_counts() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", MIXED))?;

    let output = run(test.stats_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("./translations/sv_SE.ts (sv_SE)"));
    assert!(
        output
            .stdout
            .contains("Generated 2 translation(s) (1 finished and 1 unfinished)")
    );
    assert!(output.stdout.contains("Ignored 1 untranslated source text(s)"));
    assert!(output.stdout.contains("1 obsolete message(s)"));
    assert!(output.stdout.contains("33.3% complete"));
    assert!(!output.stdout.contains("MainWindow"));

    Ok(())
}

#[test]
fn test_stats_verbose_per_context() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", MIXED))?;

    let mut cmd = test.stats_command();
    cmd.arg("-v");
    let output = run(cmd)?;
    assert!(output.stdout.contains("MainWindow   33.3%  (1/3 finished)"));

    Ok(())
}

#[test]
fn test_stats_fixture() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.stats_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("./translations/sv_SE.ts (sv_SE)"));
    assert!(output.stdout.contains("10 obsolete message(s)"));

    Ok(())
}

#[test]
fn test_stats_several_catalogs_in_path_order() -> Result<()> {
    let test = CliTest::with_file("translations/sv_SE.ts", &catalog("sv_SE", MIXED))?;
    test.write_file("translations/de_DE.ts", &catalog("de_DE", MIXED))?;

    let output = run(test.stats_command())?;
    let de = output.stdout.find("(de_DE)").unwrap();
    let sv = output.stdout.find("(sv_SE)").unwrap();
    assert!(de < sv);

    Ok(())
}

#[test]
fn test_stats_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.stats_command())?;
    assert!(output.stdout.contains("No catalogs found"));

    Ok(())
}
