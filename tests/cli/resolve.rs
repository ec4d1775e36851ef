use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_resolve_in_primary_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["resolve", "general.submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("general.submit = \"Submit\""));

    Ok(())
}

#[test]
fn test_resolve_in_other_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["resolve", "general.submit", "--lang", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Envoyer\""));

    Ok(())
}

#[test]
fn test_resolve_miss_exits_with_failure() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["resolve", "general.absent"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("'general.absent' not found in en.json"));

    // a namespace is not a value either
    test.command()
        .args(["resolve", "general"])
        .assert()
        .code(1);

    Ok(())
}

#[test]
fn test_resolve_unknown_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["resolve", "general.submit", "--lang", "es"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no dictionary file for language 'es'"));

    Ok(())
}

#[test]
fn test_resolve_truncates_long_values() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file(
        ".glossarc.json",
        r#"{
  "dictionaryPath": "i18n/en.json",
  "maxDisplayLength": 3
}"#,
    )?;

    test.command()
        .args(["resolve", "general.submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Sub…\""));

    test.command()
        .args(["resolve", "general.submit", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Submit\""));

    Ok(())
}

#[test]
fn test_resolve_when_disabled() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file(
        ".glossarc.json",
        r#"{
  "dictionaryPath": "i18n/en.json",
  "enabled": false
}"#,
    )?;

    test.command()
        .args(["resolve", "general.submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));

    Ok(())
}
