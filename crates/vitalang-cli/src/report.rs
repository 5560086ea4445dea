/// Report module for CLI output
/// Bundles engine results with the details needed to explain them
use serde::Serialize;
use vitalang_lsp_core::{
    resolve_context, resolve_range, CompletionEngine, CompletionRequest, CursorContext, Keyword,
    RangeRule, ReplacementRange, ScannedIdentifiers, SuggestionResult,
};

#[derive(Debug, Serialize)]
pub struct CompletionReport {
    pub line: u32,
    pub column: u32,
    pub context: CursorContext,
    pub rule: RangeRule,
    pub range: ReplacementRange,
    pub result: SuggestionResult,
}

impl CompletionReport {
    pub fn build(engine: &CompletionEngine, request: &CompletionRequest<'_>) -> Self {
        let cursor = request.cursor();
        let (rule, range) = resolve_range(&cursor);

        CompletionReport {
            line: request.line,
            column: cursor.column() as u32,
            context: resolve_context(cursor.prefix()),
            rule,
            range,
            result: engine.resolve_completions(request),
        }
    }
}

pub fn format_context(context: &CursorContext) -> String {
    match context {
        CursorContext::General => "general".to_string(),
        CursorContext::VariableOnly(class) => format!("after {} sigil", class.as_str()),
    }
}

pub fn format_range(range: &ReplacementRange) -> String {
    format!(
        "{}:{}-{}:{}",
        range.start_line, range.start_column, range.end_line, range.end_column
    )
}

pub fn render_completions(report: &CompletionReport) -> String {
    let mut out = format!(
        "Cursor {}:{} ({}), replaces {} via {}\n",
        report.line,
        report.column,
        format_context(&report.context),
        format_range(&report.range),
        report.rule.as_str()
    );

    if report.result.is_empty() {
        out.push_str("No completions\n");
        return out;
    }

    for item in &report.result.items {
        out.push_str(&format!(
            "  {:<9} {:<30} {}\n",
            item.kind.as_str(),
            item.label,
            item.detail
        ));
    }
    out
}

pub fn render_variables(identifiers: &ScannedIdentifiers) -> String {
    if identifiers.is_empty() {
        return "No variables found\n".to_string();
    }

    let mut out = String::new();
    for (heading, tokens) in [("$ variables", &identifiers.dollar), ("£ variables", &identifiers.pound)] {
        if tokens.is_empty() {
            continue;
        }
        out.push_str(&format!("{} ({}):\n", heading, tokens.len()));
        for token in tokens {
            out.push_str(&format!("  {}\n", token));
        }
    }
    out
}

pub fn render_keywords(keywords: &[Keyword]) -> String {
    keywords
        .iter()
        .map(|k| format!("{:<20} {}\n", k.role.as_str(), k.literal))
        .collect()
}
