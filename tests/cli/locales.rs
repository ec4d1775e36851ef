use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_locales_lists_language_files_only() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file("i18n/config.json", r#"{"theme": "dark"}"#)?;
    test.write_file("i18n/de.json", r#"{"general": {"submit": "Senden"}}"#)?;

    test.command()
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("de"))
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("fr"))
        .stdout(predicate::str::contains("(3 keys)"))
        .stdout(predicate::str::contains("(1 key)"))
        .stdout(predicate::str::contains("config").not());

    Ok(())
}

#[test]
fn test_locales_marks_unreadable_files() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file("i18n/fr.json", "{ broken")?;

    test.command()
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("unreadable"));

    Ok(())
}

#[test]
fn test_locales_with_missing_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glossarc.json",
        r#"{ "dictionaryPath": "i18n/en.json" }"#,
    )?;

    test.command()
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("no dictionary files found"));

    Ok(())
}
