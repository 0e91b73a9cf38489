use swc_common::Spanned;
use swc_ecma_ast::{Expr, Lit, ObjectLit, Prop, PropName, PropOrSpread};

use super::TranslationKey;
use crate::core::parsers::ts::ParsedSource;
use crate::utils::remove_quotes;

/// Read the flat `name: value` properties of a translation object.
///
/// Shorthand, spread, computed and method properties are skipped. Values that are
/// not string literals are reported as empty. The result is sorted by name.
pub fn extract_keys(object: &ObjectLit, parsed: &ParsedSource, source: &str) -> Vec<TranslationKey> {
    let mut keys: Vec<TranslationKey> = object
        .props
        .iter()
        .filter_map(|prop| match prop {
            PropOrSpread::Prop(prop) => match &**prop {
                Prop::KeyValue(kv) => Some(kv),
                _ => None,
            },
            PropOrSpread::Spread(_) => None,
        })
        .filter_map(|kv| {
            let name = key_name(&kv.key, parsed, source)?;
            let value = match &*kv.value {
                Expr::Lit(Lit::Str(s)) => s
                    .value
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| remove_quotes(&source[parsed.range(s.span)]).to_string()),
                _ => String::new(),
            };
            Some(TranslationKey { name, value })
        })
        .collect();

    keys.sort_by(|a, b| a.name.cmp(&b.name));
    keys
}

/// De-quoted name of a property key; `None` for computed keys.
fn key_name(key: &PropName, parsed: &ParsedSource, source: &str) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => Some(
            s.value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| remove_quotes(&source[parsed.range(s.span)]).to_string()),
        ),
        PropName::Num(_) | PropName::BigInt(_) => Some(source[parsed.range(key.span())].to_string()),
        // computed keys
        _ => None,
    }
}
