use std::ops::Range;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{
    BytePos, FileName, Globals, SourceMap, Span,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed TypeScript file.
///
/// Spans in `module` and `comments` are swc positions; use [`ParsedSource::range`]
/// to turn them into byte offsets into the text that was parsed.
pub struct ParsedSource {
    pub module: Module,
    /// Every comment in the file, ordered by position.
    pub comments: Vec<Comment>,
    start_pos: BytePos,
}

impl ParsedSource {
    /// Byte offset of `pos` within the parsed text.
    pub fn offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.start_pos.0) as usize
    }

    /// Byte range of `span` within the parsed text.
    pub fn range(&self, span: Span) -> Range<usize> {
        self.offset(span.lo)..self.offset(span.hi)
    }

    /// Comments lying entirely inside `range`, in source order.
    pub fn comments_within(&self, range: Range<usize>) -> impl Iterator<Item = &Comment> + '_ {
        self.comments.iter().filter(move |cmt| {
            let cmt_range = self.range(cmt.span);
            cmt_range.start >= range.start && cmt_range.end <= range.end
        })
    }
}

/// Parse TypeScript source code into an AST, keeping all comments.
pub fn parse_ts_source(code: &str, file_path: &str) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file = source_map.new_source_file(
            FileName::Real(file_path.into()).into(),
            code.to_string(),
        );

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: file_path.ends_with(".tsx"),
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        // Extract comments before SingleThreadedComments drops
        let (leading, trailing) = comments.borrow_all();
        let mut all_comments: Vec<Comment> = leading
            .values()
            .chain(trailing.values())
            .flat_map(|cmts| cmts.iter().cloned())
            .collect();
        all_comments.sort_by_key(|cmt| cmt.span.lo);
        all_comments.dedup_by_key(|cmt| cmt.span);

        Ok(ParsedSource {
            module,
            comments: all_comments,
            start_pos: source_file.start_pos,
        })
    })
}
