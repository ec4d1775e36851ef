use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created .glossarc.json"));

    let config = test.read_file(".glossarc.json")?;
    assert!(config.contains("dictionaryPath"));
    assert!(config.contains("src/assets/i18n/en.json"));
    Ok(())
}

#[test]
fn test_init_refuses_to_clobber() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glossarc.json", "{}")?;

    test.command()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}
