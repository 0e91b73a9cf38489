use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_input, stderr, stdout};

#[test]
fn test_insert_key_by_name() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = run_with_input(
        test.insert_key_command()
            .args(["--key", "button.ok", "--active", "src/App.tsx"]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "button.ok\n");

    Ok(())
}

#[test]
fn test_insert_key_picks_from_list() -> Result<()> {
    let test = CliTest::with_translations()?;

    // keys of deDE.ts, sorted: button.cancel, button.ok, label.name
    let output = run_with_input(
        test.insert_key_command().args(["--active", "src/App.tsx"]),
        "3\n",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "label.name\n");
    assert!(stderr(&output).contains("Abbrechen"));

    Ok(())
}

#[test]
fn test_insert_key_picks_file_without_active_document() -> Result<()> {
    let test = CliTest::with_translations()?;

    // file list: src/i18n/deDE.ts, src/i18n/enUS.ts
    let output = run_with_input(&mut test.insert_key_command(), "2\n1\n")?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("src/i18n/enUS.ts"));
    assert!(stderr(&output).contains("Cancel"));
    assert_eq!(stdout(&output), "button.cancel\n");

    Ok(())
}

#[test]
fn test_insert_unknown_key_is_cancelled() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = run_with_input(
        test.insert_key_command()
            .args(["--key", "missing.key", "--active", "src/App.tsx"]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cancelled command"));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_insert_key_without_keys() -> Result<()> {
    let test = CliTest::with_file("i18n/enUS.ts", "export const enUS = {};\n")?;

    let output = run_with_input(
        test.insert_key_command().args(["--active", "App.tsx"]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("warning: No translation keys found"));

    Ok(())
}
