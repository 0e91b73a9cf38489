use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, DE_DE, EN_US, run_with_input, stderr, stdout};

#[test]
fn test_create_with_presets_prints_key() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = run_with_input(
        test.create_command().args([
            "button.save",
            "--value",
            "enUS=Save",
            "--value",
            "deDE=Speichern",
            "--active",
            "src/app/Form.tsx",
        ]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "button.save\n");
    assert!(stderr(&output).contains("Key copied to clipboard"));

    assert_eq!(
        test.read_file("src/i18n/enUS.ts")?,
        r#"export const enUS = {
  // Buttons
  "button.cancel": "Cancel",
  "button.ok": "OK",
  "button.save": "Save",
  // Labels
  "label.name": "Name",
};
"#
    );
    assert!(
        test.read_file("src/i18n/deDE.ts")?
            .contains("  \"button.ok\": \"OK\",\n  \"button.save\": \"Speichern\",\n  // Labels")
    );

    Ok(())
}

#[test]
fn test_create_prompts_on_stdin() -> Result<()> {
    let test = CliTest::with_translations()?;

    // key, then one value per file in path order (deDE before enUS)
    let output = run_with_input(
        test.create_command().args(["--active", "src/App.tsx"]),
        "label.age\nAlter\nAge\n",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Translation for deDE"));
    assert!(
        test.read_file("src/i18n/enUS.ts")?
            .contains("  // Labels\n  \"label.age\": \"Age\",\n  \"label.name\": \"Name\",")
    );
    assert!(
        test.read_file("src/i18n/deDE.ts")?
            .contains("  \"label.age\": \"Alter\",\n  \"label.name\": \"Name\",")
    );

    Ok(())
}

#[test]
fn test_create_cancelled_on_eof_writes_nothing() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = run_with_input(
        test.create_command().args(["label.age", "--active", "src/App.tsx"]),
        "Alter\n",
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cancelled command"));
    assert_eq!(test.read_file("src/i18n/deDE.ts")?, DE_DE);
    assert_eq!(test.read_file("src/i18n/enUS.ts")?, EN_US);

    Ok(())
}

#[test]
fn test_create_with_selection_leaves_key_in_place() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = run_with_input(
        test.create_command().args([
            "--selection",
            "label.title",
            "--value",
            "enUS=It's here",
            "--value",
            "deDE=",
            "--active",
            "src/App.tsx",
        ]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert!(
        test.read_file("src/i18n/enUS.ts")?
            .contains("  \"label.title\": \"It's here\",\n};")
    );
    assert!(
        test.read_file("src/i18n/deDE.ts")?
            .contains("  \"label.title\": \"\",\n};")
    );

    Ok(())
}

#[test]
fn test_create_uses_key_insert_pattern() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".translatelyrc.json", r#"{ "keyInsertPattern": "t('%KEY%')" }"#)?;

    let output = run_with_input(
        test.create_command().args([
            "button.save",
            "--value",
            "enUS=Save",
            "--value",
            "deDE=Speichern",
            "--active",
            "src/App.tsx",
        ]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "t('button.save')\n");

    Ok(())
}

#[test]
fn test_create_missing_translation_object() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("src/i18n/frFR.ts", "export const messages = {};\n")?;

    let output = run_with_input(
        test.create_command().args([
            "button.save",
            "--value",
            "enUS=Save",
            "--value",
            "deDE=Speichern",
            "--value",
            "frFR=Enregistrer",
            "--active",
            "src/App.tsx",
        ]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("warning: Missing translation object for frFR"));
    assert_eq!(test.read_file("src/i18n/deDE.ts")?, DE_DE);
    assert_eq!(test.read_file("src/i18n/enUS.ts")?, EN_US);

    Ok(())
}

#[test]
fn test_create_without_translation_files() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", "export {};\n")?;

    let output = run_with_input(
        test.create_command().args(["a.b", "--active", "src/App.tsx"]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("warning: No translation files found"));

    Ok(())
}

#[test]
fn test_create_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".translatelyrc.json", r#"{ "translationVariablePattern": "(" }"#)?;

    let output = run_with_input(test.create_command().arg("a.b"), "")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("translationVariablePattern"));

    Ok(())
}
