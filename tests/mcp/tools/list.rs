use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use translately::mcp::{
    TranslatelyMcpServer,
    types::{ListTranslationFilesParams, ListTranslationKeysParams},
};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// list_translation_files tests
// ============================================================================

#[tokio::test]
async fn test_list_all_translation_files() {
    let fixture = McpTestFixture::with_translations().unwrap();
    fixture.write_file("admin/i18n/enUS.ts", "export const enUS = {};").unwrap();
    fixture.write_file("node_modules/pkg/i18n/enUS.ts", "").unwrap();

    let server = TranslatelyMcpServer::new();
    let params = Parameters(ListTranslationFilesParams {
        project_root_path: fixture.root(),
        active_document_path: None,
    });

    let result = server.list_translation_files(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let files: Vec<&str> = json_result["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["relativePath"].as_str().unwrap())
        .collect();
    assert_eq!(files, vec!["admin/i18n/enUS.ts", "i18n/deDE.ts", "i18n/enUS.ts"]);
    assert_eq!(json_result["files"][0]["language"], "enUS");
}

#[tokio::test]
async fn test_list_nearest_translation_files() {
    let fixture = McpTestFixture::with_translations().unwrap();
    fixture.write_file("admin/i18n/enUS.ts", "export const enUS = {};").unwrap();

    let server = TranslatelyMcpServer::new();
    let active = fixture.root_path().join("admin/pages/Users.tsx");
    let params = Parameters(ListTranslationFilesParams {
        project_root_path: fixture.root(),
        active_document_path: Some(active.to_string_lossy().to_string()),
    });

    let result = server.list_translation_files(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["files"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["files"][0]["relativePath"], "admin/i18n/enUS.ts");
}

// ============================================================================
// list_translation_keys tests
// ============================================================================

#[tokio::test]
async fn test_list_translation_keys() {
    let fixture = McpTestFixture::with_translations().unwrap();
    fixture
        .write_file("i18n/frFR.ts", "export const messages = {};\n")
        .unwrap();

    let server = TranslatelyMcpServer::new();
    let params = Parameters(ListTranslationKeysParams {
        project_root_path: fixture.root(),
        active_document_path: None,
    });

    let result = server.list_translation_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    let files = json_result["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);

    // deDE uses single quotes; values are reported without them
    assert_eq!(files[0]["language"], "deDE");
    assert_eq!(files[0]["keys"][0]["name"], "a.b");
    assert_eq!(files[0]["keys"][0]["value"], "eins");
    assert!(files[0].get("error").is_none());

    assert_eq!(files[2]["language"], "frFR");
    assert_eq!(files[2]["keys"].as_array().unwrap().len(), 0);
    assert_eq!(files[2]["error"], "Missing translation object for frFR");
}
