use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Byte offset where each line starts (cached for position calculations)
    line_starts: Vec<usize>,
    language_id: String,
    version: i32,
}

impl Document {
    pub fn new(text: String, language_id: impl Into<String>, version: i32) -> Self {
        let line_starts = compute_line_starts(&text);
        Self {
            text,
            line_starts,
            language_id: language_id.into(),
            version,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a line without its line terminator
    pub fn line(&self, line: u32) -> Option<&str> {
        let idx = line as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Apply one content change; a change without a range replaces everything
    pub fn apply_change(&mut self, change: &TextDocumentContentChangeEvent) {
        match change.range {
            Some(range) => {
                let start = self.offset_at(range.start);
                let end = self.offset_at(range.end).max(start);
                self.text.replace_range(start..end, &change.text);
            }
            None => self.text = change.text.clone(),
        }
        self.line_starts = compute_line_starts(&self.text);
    }

    /// Text a change would replace, before it is applied
    pub fn replaced_text(&self, change: &TextDocumentContentChangeEvent) -> &str {
        match change.range {
            Some(range) => {
                let start = self.offset_at(range.start);
                let end = self.offset_at(range.end).max(start);
                &self.text[start..end]
            }
            None => &self.text,
        }
    }

    /// Byte offset of an LSP position (UTF-16 columns)
    ///
    /// Positions past the end of a line or of the document are clamped.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(line) = self.line(position.line) else {
            return self.text.len();
        };
        let start = self.line_starts[position.line as usize];
        start + byte_offset_of_utf16(line, position.character)
    }

    /// Character column of an LSP position on its line
    pub fn char_column(&self, position: Position) -> usize {
        self.line(position.line)
            .map(|line| char_column_of_utf16(line, position.character))
            .unwrap_or(0)
    }

    /// LSP (UTF-16) column of a character column on a line
    pub fn utf16_column(&self, line: u32, char_column: u32) -> u32 {
        self.line(line)
            .map(|text| utf16_of_char_column(text, char_column as usize))
            .unwrap_or(char_column)
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(idx, _)| idx + 1))
        .collect()
}

fn byte_offset_of_utf16(line: &str, utf16: u32) -> usize {
    let mut units = 0u32;
    for (offset, c) in line.char_indices() {
        if units >= utf16 {
            return offset;
        }
        units += c.len_utf16() as u32;
    }
    line.len()
}

fn char_column_of_utf16(line: &str, utf16: u32) -> usize {
    let mut units = 0u32;
    let mut column = 0;
    for c in line.chars() {
        if units >= utf16 {
            break;
        }
        units += c.len_utf16() as u32;
        column += 1;
    }
    column
}

fn utf16_of_char_column(line: &str, column: usize) -> u32 {
    line.chars().take(column).map(|c| c.len_utf16() as u32).sum()
}
