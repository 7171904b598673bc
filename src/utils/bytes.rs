/// Iterator over the lines of a text, yielding `(line_number, line)`.
///
/// Line numbers are 1-based. Both `\n` and `\r\n` terminate a line; the
/// terminator is not part of the yielded line.
pub(crate) struct Lines<'a> {
    text: &'a str,
    iter: memchr::Memchr<'a>,
    next_start: usize,
    line: usize,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            iter: memchr::memchr_iter(b'\n', text.as_bytes()),
            next_start: 0,
            line: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start;
        let end = match self.iter.next() {
            Some(line_end) => line_end,
            None => {
                if start >= self.text.len() {
                    return None;
                }
                self.text.len()
            }
        };
        self.next_start = end + 1;
        self.line += 1;
        // `\n` is ASCII, so both ends are on char boundaries.
        let line = &self.text[start..end];
        Some((self.line, line.strip_suffix('\r').unwrap_or(line)))
    }
}
