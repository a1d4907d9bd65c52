use crate::layout::Measurer;
use crate::units::Px;

/// Where the current sub-line ends once the scan has overflowed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Break {
    /// break before the space at this character index, consuming the space
    Space(usize),
    /// break before this character index without consuming anything
    Hard(usize),
}

/// Scan state over a single logical line. Positions are character indices;
/// `start` is the first character of the sub-line being built and `scan` is the
/// exclusive end of the span currently being measured.
struct Cursor<'s> {
    line: &'s str,
    /// byte offset of every character boundary, including the end of the line
    bounds: Vec<usize>,
    start: usize,
    scan: usize,
}

impl<'s> Cursor<'s> {
    fn new(line: &'s str) -> Cursor<'s> {
        let bounds = line
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(line.len()))
            .collect();
        Cursor {
            line,
            bounds,
            start: 0,
            scan: 1,
        }
    }

    /// number of characters in the line
    fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    fn span(&self, from: usize, to: usize) -> &'s str {
        &self.line[self.bounds[from]..self.bounds[to]]
    }

    fn is_space(&self, at: usize) -> bool {
        self.span(at, at + 1) == " "
    }

    /// Picks the break for an overflowing `start..scan` span. The last space after
    /// `start` wins; otherwise back off one character, unless that would leave the
    /// sub-line empty.
    fn choose_break(&self) -> Break {
        match (self.start + 1..self.scan).rev().find(|&i| self.is_space(i)) {
            Some(space) => Break::Space(space),
            None if self.scan - 1 > self.start => Break::Hard(self.scan - 1),
            None => Break::Hard(self.scan),
        }
    }

    /// Emits the sub-line ending at `brk` and moves the cursor past it
    fn take(&mut self, brk: Break) -> &'s str {
        let (end, next) = match brk {
            Break::Space(at) => (at, at + 1),
            Break::Hard(at) => (at, at),
        };
        let sub_line = self.span(self.start, end);
        self.start = next;
        self.scan = next + 1;
        sub_line
    }
}

/// Breaks a single logical line (one that contains no newlines) into sub-lines
/// that each measure no wider than `max_width`.
///
/// Lines are broken greedily, preferring the last space before the point where
/// the text overflows; the space itself is dropped. A run of text with no spaces
/// that is wider than `max_width` is broken between characters instead. A lone
/// character wider than `max_width` gets a sub-line of its own, the only case in
/// which a sub-line may overflow.
///
/// A span that measures exactly `max_width` fits.
pub fn wrap_line<M: Measurer + ?Sized>(line: &str, max_width: Px, measurer: &M) -> Vec<String> {
    let mut cursor = Cursor::new(line);
    let n = cursor.len();
    let mut sub_lines: Vec<String> = Vec::new();

    while cursor.scan <= n {
        let width = measurer.measure_px(cursor.span(cursor.start, cursor.scan));
        if width <= max_width {
            cursor.scan += 1;
            continue;
        }

        let brk = cursor.choose_break();
        let sub_line = cursor.take(brk);
        tracing::trace!(?brk, sub_line, "wrapped");
        sub_lines.push(sub_line.to_string());
    }

    // whatever is left after the last break fits by construction. Historically
    // only a tail of exactly one character (left behind by a hard break) was
    // emitted here and longer tails were lost; every non-empty tail is kept now.
    if cursor.start < n || sub_lines.is_empty() {
        sub_lines.push(cursor.span(cursor.start.min(n), n).to_string());
    }

    sub_lines
}
