use regex::Regex;
use swc_ecma_ast::{Decl, ExportDecl, Expr, Module, ModuleDecl, ModuleItem, ObjectLit, Pat, Stmt, VarDecl};

/// Find the translation object of a module.
///
/// Scans top-level variable declarations (exported or not) in source order and
/// returns the initializer of the first one whose name matches `pattern` and whose
/// initializer is an object literal. A matching name with any other initializer is
/// skipped. Later matches are never considered.
pub fn locate_translation_object<'a>(module: &'a Module, pattern: &Regex) -> Option<&'a ObjectLit> {
    module
        .body
        .iter()
        .filter_map(top_level_var_decl)
        .flat_map(|var_decl| var_decl.decls.iter())
        .find_map(|declarator| {
            let Pat::Ident(binding) = &declarator.name else {
                return None;
            };
            if !pattern.is_match(&binding.id.sym) {
                return None;
            }
            match declarator.init.as_deref() {
                Some(Expr::Object(object)) => Some(object),
                _ => None,
            }
        })
}

fn top_level_var_decl(item: &ModuleItem) -> Option<&VarDecl> {
    match item {
        ModuleItem::Stmt(Stmt::Decl(Decl::Var(var_decl))) => Some(&**var_decl),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(ExportDecl {
            decl: Decl::Var(var_decl),
            ..
        })) => Some(&**var_decl),
        _ => None,
    }
}
