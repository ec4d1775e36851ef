use anyhow::Result;
use predicates::prelude::*;

use crate::{CliTest, FR_JSON};

#[test]
fn test_goto_existing_key() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    // cursor on "submit" in en.json; the same key sits at fr.json:3:5
    test.command()
        .args(["goto", "i18n/en.json", "3", "5", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("general.submit"))
        .stdout(predicate::str::contains("i18n/fr.json:3:5"));

    Ok(())
}

#[test]
fn test_goto_missing_key_without_create() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["goto", "i18n/en.json", "4", "5", "fr"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("'general.cancel' not found in fr.json"));

    assert_eq!(test.read_file("i18n/fr.json")?, FR_JSON);
    Ok(())
}

#[test]
fn test_goto_creates_missing_key() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    let en_before = test.read_file("i18n/en.json")?;

    test.command()
        .args([
            "goto",
            "i18n/en.json",
            "4",
            "5",
            "fr",
            "--create",
            "--yes",
            "--value",
            "Annuler",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created 'general.cancel'"));

    let fr = test.read_file("i18n/fr.json")?;
    assert!(fr.contains("\"cancel\": \"Annuler\""));
    assert!(fr.contains("\"submit\": \"Envoyer\""));
    // the source dictionary is never touched by navigation
    assert_eq!(test.read_file("i18n/en.json")?, en_before);

    // navigating again jumps to the created entry
    test.command()
        .args(["goto", "i18n/en.json", "4", "5", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i18n/fr.json:4:5"));

    Ok(())
}

#[test]
fn test_goto_create_answers_from_stdin() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["goto", "i18n/en.json", "4", "5", "fr", "--create"])
        .write_stdin("y\nAnnuler\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("created 'general.cancel'"));

    assert!(test.read_file("i18n/fr.json")?.contains("\"Annuler\""));
    Ok(())
}

#[test]
fn test_goto_declined_prompt_changes_nothing() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    // empty stdin answers the confirmation with EOF, which declines
    test.command()
        .args(["goto", "i18n/en.json", "4", "5", "fr", "--create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    // the target file is byte-for-byte unchanged
    assert_eq!(test.read_file("i18n/fr.json")?, FR_JSON);
    Ok(())
}

#[test]
fn test_goto_accepts_prefilled_source_value() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    // --yes without --value falls back to the source value
    test.command()
        .args(["goto", "i18n/en.json", "4", "5", "fr", "--create", "--yes"])
        .assert()
        .success();

    assert!(test.read_file("i18n/fr.json")?.contains("\"cancel\": \"Cancel\""));
    Ok(())
}

#[test]
fn test_goto_no_key_at_cursor() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["goto", "i18n/en.json", "1", "1", "fr"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no translation key"));

    Ok(())
}

#[test]
fn test_goto_unknown_language() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["goto", "i18n/en.json", "3", "5", "es"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no dictionary file for language 'es'"));

    Ok(())
}

#[test]
fn test_goto_from_non_language_file() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file("i18n/strings.json", crate::EN_JSON)?;

    test.command()
        .args(["goto", "i18n/strings.json", "3", "5", "fr"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a language dictionary file"));

    Ok(())
}
