use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use translately::mcp::{
    TranslatelyMcpServer,
    types::{CreateTranslationParams, TranslationValueInput},
};

use crate::{DE_DE, EN_US, McpTestFixture, extract_tool_result_json};

fn value(language: &str, value: &str) -> TranslationValueInput {
    TranslationValueInput {
        language: language.to_string(),
        value: value.to_string(),
    }
}

// ============================================================================
// create_translation tests
// ============================================================================

#[tokio::test]
async fn test_create_translation_in_all_files() {
    let fixture = McpTestFixture::with_translations().unwrap();
    let server = TranslatelyMcpServer::new();

    let params = Parameters(CreateTranslationParams {
        project_root_path: fixture.root(),
        active_document_path: None,
        key: "a.bc".to_string(),
        translations: vec![value("enUS", "X"), value("deDE", "it's")],
    });

    let result = server.create_translation(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["files"], json!(["i18n/deDE.ts", "i18n/enUS.ts"]));
    assert_eq!(json_result["insertText"], "a.bc");

    assert_eq!(
        fixture.read_file("i18n/enUS.ts").unwrap(),
        "export const enUS = {\n  \"a.b\": \"1\",\n  \"a.bc\": \"X\",\n  \"a.c\": \"2\",\n};\n"
    );
    assert_eq!(
        fixture.read_file("i18n/deDE.ts").unwrap(),
        "export const deDE = {\n  'a.b': 'eins',\n  'a.bc': 'it\\'s',\n  'a.c': 'zwei',\n};\n"
    );
}

#[tokio::test]
async fn test_create_translation_uses_insert_pattern() {
    let fixture = McpTestFixture::with_translations().unwrap();
    fixture
        .write_config(&json!({ "keyInsertPattern": "{t(\"%KEY%\")}" }))
        .unwrap();
    let server = TranslatelyMcpServer::new();

    let active = fixture.root_path().join("src/Page.tsx");
    let params = Parameters(CreateTranslationParams {
        project_root_path: fixture.root(),
        active_document_path: Some(active.to_string_lossy().to_string()),
        key: "b".to_string(),
        translations: vec![value("enUS", "B"), value("deDE", "B")],
    });

    let result = server.create_translation(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["insertText"], "{t(\"b\")}");
}

#[tokio::test]
async fn test_create_translation_missing_language_writes_nothing() {
    let fixture = McpTestFixture::with_translations().unwrap();
    let server = TranslatelyMcpServer::new();

    let params = Parameters(CreateTranslationParams {
        project_root_path: fixture.root(),
        active_document_path: None,
        key: "a.d".to_string(),
        translations: vec![value("deDE", "vier")],
    });

    let result = server.create_translation(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert_eq!(json_result["error"], "No translation provided for enUS");
    assert!(json_result.get("insertText").is_none());
    assert_eq!(fixture.read_file("i18n/enUS.ts").unwrap(), EN_US);
    assert_eq!(fixture.read_file("i18n/deDE.ts").unwrap(), DE_DE);
}

#[tokio::test]
async fn test_create_translation_malformed_file() {
    let fixture = McpTestFixture::with_translations().unwrap();
    fixture.write_file("i18n/frFR.ts", "export const messages = {};\n").unwrap();
    let server = TranslatelyMcpServer::new();

    let params = Parameters(CreateTranslationParams {
        project_root_path: fixture.root(),
        active_document_path: None,
        key: "a.d".to_string(),
        translations: vec![value("deDE", "4"), value("enUS", "4"), value("frFR", "4")],
    });

    let result = server.create_translation(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert_eq!(json_result["error"], "Missing translation object for frFR");
    assert_eq!(fixture.read_file("i18n/enUS.ts").unwrap(), EN_US);
}

#[tokio::test]
async fn test_create_translation_without_files() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TranslatelyMcpServer::new();

    let params = Parameters(CreateTranslationParams {
        project_root_path: fixture.root(),
        active_document_path: None,
        key: "a".to_string(),
        translations: vec![],
    });

    let result = server.create_translation(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["success"], false);
    assert_eq!(json_result["error"], "No translation files found");
}

#[tokio::test]
async fn test_create_translation_rejects_empty_key() {
    let fixture = McpTestFixture::with_translations().unwrap();
    let server = TranslatelyMcpServer::new();

    let params = Parameters(CreateTranslationParams {
        project_root_path: fixture.root(),
        active_document_path: None,
        key: String::new(),
        translations: vec![value("enUS", "x")],
    });

    assert!(server.create_translation(params).await.is_err());
}
