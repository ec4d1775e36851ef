use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_locate_in_primary_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["locate", "general.cancel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i18n/en.json:4:5"));

    Ok(())
}

#[test]
fn test_locate_in_other_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["locate", "general.submit", "--lang", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i18n/fr.json:3:5"));

    Ok(())
}

#[test]
fn test_locate_absent_key() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["locate", "general.cancel", "--lang", "fr"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("'general.cancel' not found in fr.json"));

    Ok(())
}

#[test]
fn test_locate_unknown_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["locate", "general.submit", "--lang", "es"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no dictionary file for language 'es'"));

    Ok(())
}
