use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_path_on_leaf_key() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    // line 3 column 5 is the "submit" key in en.json
    test.command()
        .args(["path", "i18n/en.json", "3", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("general.submit"));

    Ok(())
}

#[test]
fn test_path_on_namespace_key() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["path", "i18n/en.json", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^general\n$")?);

    Ok(())
}

#[test]
fn test_path_on_value_is_a_miss() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    // column 17 sits inside the value "Submit"
    test.command()
        .args(["path", "i18n/en.json", "3", "17"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no key at i18n/en.json:3:17"));

    Ok(())
}

#[test]
fn test_path_on_structural_line_is_a_miss() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    test.command()
        .args(["path", "i18n/en.json", "1", "1"])
        .assert()
        .code(1);

    Ok(())
}
