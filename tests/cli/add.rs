use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_add_to_primary_dictionary() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["add", "general.ok", "Okay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added 'general.ok'"));

    let en = test.read_file("i18n/en.json")?;
    assert!(en.contains("\"ok\": \"Okay\""));
    // existing keys survive the rewrite
    assert!(en.contains("\"submit\": \"Submit\""));
    Ok(())
}

#[test]
fn test_add_to_other_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["add", "general.cancel", "Annuler", "--lang", "fr"])
        .assert()
        .success();

    assert!(test.read_file("i18n/fr.json")?.contains("\"cancel\": \"Annuler\""));
    Ok(())
}

#[test]
fn test_add_existing_key_needs_confirmation() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    let before = test.read_file("i18n/en.json")?;

    // EOF on stdin declines the overwrite prompt
    test.command()
        .args(["add", "general.submit", "Send"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));
    assert_eq!(test.read_file("i18n/en.json")?, before);

    test.command()
        .args(["add", "general.submit", "Send", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated 'general.submit'"));
    assert!(test.read_file("i18n/en.json")?.contains("\"submit\": \"Send\""));
    Ok(())
}

#[test]
fn test_add_refuses_namespace_conflicts() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    let before = test.read_file("i18n/en.json")?;

    // general.submit is a value; nesting under it would destroy it
    test.command()
        .args(["add", "general.submit.deep", "x", "--force"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("already holds a value"));

    // general is a namespace; flattening it would destroy its children
    test.command()
        .args(["add", "general", "x", "--force"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("namespace"));

    assert_eq!(test.read_file("i18n/en.json")?, before);
    Ok(())
}

#[test]
fn test_add_rejects_malformed_keys() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["add", "general..bad", "x"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a valid dotted key path"));

    Ok(())
}

#[test]
fn test_add_unknown_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["add", "general.ok", "Okay", "--lang", "es"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no dictionary file for language 'es'"));

    Ok(())
}
