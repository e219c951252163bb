//! Line comment detection.
//!
//! Comments run from `//` to the end of the line. The scan loop only asks
//! whether a comment starts at a position; it then ignores everything up to
//! the next newline.

use crate::scanner::Scanner;

impl Scanner {
    /// Returns true if a `//` comment marker starts at `index`.
    pub(crate) fn is_comment_start(&self, index: usize) -> bool {
        self.cursor_at(index).starts_with("//")
    }
}
