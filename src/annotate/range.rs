use crate::model::Element;

/// 0-based editor range derived from a tool span. The start is inclusive;
/// bounds checking against the actual document is the editor layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SourceRange {
    /// Sentinel for findings with no mapped location.
    pub const NONE: SourceRange = SourceRange {
        start_line: 0,
        start_column: 0,
        end_line: 0,
        end_column: 0,
    };

    /// Convert an element's 1-based tool span to editor coordinates.
    ///
    /// An empty `lines` sequence, or a zero first entry, maps to [`NONE`]
    /// rather than an error. Subtraction saturates so a zero column from a
    /// misbehaving producer clamps to 0.
    ///
    /// [`NONE`]: SourceRange::NONE
    pub fn from_element(element: &Element) -> SourceRange {
        let mapping = &element.source_mapping;
        let first = match mapping.lines.first() {
            Some(&line) if line > 0 => line,
            _ => return SourceRange::NONE,
        };
        let last = mapping.lines.last().copied().unwrap_or(first);
        SourceRange {
            start_line: first - 1,
            start_column: mapping.starting_column.saturating_sub(1),
            end_line: last.saturating_sub(1),
            end_column: mapping.ending_column.saturating_sub(1),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == SourceRange::NONE
    }
}
