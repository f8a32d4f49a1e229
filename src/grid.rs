//! 12-column responsive grid
//!
//! Resolves the widths of a row's columns from their sizing hints the way a
//! Bootstrap row does: sized columns take `span / 12` of the row when the
//! viewport is at or above their breakpoint and the full row below it, auto
//! columns share whatever a line has left. Columns wrap onto a new line when
//! sized columns overflow. The breakpoint is a property of the viewport, not
//! of the row, so nested rows switch together with the outer one.

pub const GRID_COLUMNS: u8 = 12;

/// Minimum viewport width at which `lg` spans apply
pub const LG_BREAKPOINT: f32 = 992.0;

/// A column placed on a line, with its outer (gutter-inclusive) width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub index: usize,
    pub width: f32,
}

#[derive(Clone, Copy)]
enum Basis {
    Span(u8),
    Auto,
}

fn basis(span: Option<u8>, viewport: f32) -> Basis {
    match span {
        Some(span) if viewport >= LG_BREAKPOINT => Basis::Span(span.clamp(1, GRID_COLUMNS)),
        Some(_) => Basis::Span(GRID_COLUMNS),
        None => Basis::Auto,
    }
}

/// Lay out a row of columns into lines of cells.
///
/// `viewport` selects the breakpoint, `available` is the row's own width and
/// `spans` holds each column's `lg` hint in document order.
pub fn layout_row(viewport: f32, available: f32, spans: &[Option<u8>]) -> Vec<Vec<Cell>> {
    let available = available.max(0.0);
    let mut lines: Vec<Vec<(usize, Basis)>> = Vec::new();
    let mut current: Vec<(usize, Basis)> = Vec::new();
    let mut used = 0u8;

    for (index, span) in spans.iter().enumerate() {
        let b = basis(*span, viewport);
        if let Basis::Span(s) = b {
            if !current.is_empty() && used + s > GRID_COLUMNS {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            used += s;
        }
        current.push((index, b));
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let span_width = |s: u8| s as f32 * available / GRID_COLUMNS as f32;

    lines
        .into_iter()
        .map(|line| {
            let fixed: f32 = line
                .iter()
                .map(|(_, b)| match b {
                    Basis::Span(s) => span_width(*s),
                    Basis::Auto => 0.0,
                })
                .sum();
            let autos = line.iter().filter(|(_, b)| matches!(b, Basis::Auto)).count();
            let auto_share = if autos > 0 {
                (available - fixed).max(0.0) / autos as f32
            } else {
                0.0
            };
            line.into_iter()
                .map(|(index, b)| Cell {
                    index,
                    width: match b {
                        Basis::Span(s) => span_width(s),
                        Basis::Auto => auto_share,
                    },
                })
                .collect()
        })
        .collect()
}
