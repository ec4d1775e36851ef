use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_missing_key_is_reported() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file(
        "app/page.ts",
        r#"const ok = t("general.submit");
const bad = t("general.missing");
"#,
    )?;

    test.command()
        .args(["check", "missing"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("general.missing"))
        .stdout(predicate::str::contains("missing-key"))
        .stdout(predicate::str::contains("app/page.ts:2:15"))
        .stdout(predicate::str::contains("1 error"));

    Ok(())
}

#[test]
fn test_resolved_keys_are_not_reported() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file(
        "app/page.ts",
        r#"const a = t("general.submit");
const b = t("auth.title");
"#,
    )?;

    test.command()
        .args(["check", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));

    Ok(())
}

#[test]
fn test_version_strings_are_not_flagged() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file("app/page.ts", r#"const version = "1.2.3";"#)?;

    test.command()
        .args(["check", "missing"])
        .assert()
        .success();

    Ok(())
}

#[test]
fn test_replica_lag_is_reported() -> Result<()> {
    let test = CliTest::with_dictionaries()?;

    // fr.json lacks general.cancel and auth.title
    test.command()
        .args(["check", "lag"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("replica-lag"))
        .stdout(predicate::str::contains("general.cancel"))
        .stdout(predicate::str::contains("auth.title"))
        .stdout(predicate::str::contains("missing in: fr"));

    Ok(())
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glossarc.json",
        r#"{
  "dictionaryPath": "i18n/en.json",
  "includes": ["app"],
  "checkLag": false
}"#,
    )?;
    test.write_file("i18n/en.json", crate::EN_JSON)?;
    test.write_file("app/page.ts", r#"const ok = t("general.submit");"#)?;

    test.command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));

    Ok(())
}

#[test]
fn test_unparseable_dictionary_is_a_warning() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file("i18n/en.json", "{ not json }")?;

    test.command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be parsed"));

    // verbose mode names the file
    test.command()
        .args(["check", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parse-error"))
        .stdout(predicate::str::contains("i18n/en.json"));

    Ok(())
}

#[test]
fn test_disabled_config_suppresses_checks() -> Result<()> {
    let test = CliTest::with_dictionaries()?;
    test.write_file(
        ".glossarc.json",
        r#"{
  "dictionaryPath": "i18n/en.json",
  "enabled": false
}"#,
    )?;

    test.command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("goto"))
        .stdout(predicate::str::contains("locales"));

    Ok(())
}
