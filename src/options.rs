//! Formatting options for cat operations

/// The set of output transformations selected on the command line.
///
/// Built once per invocation and never mutated afterwards; repeated or
/// grouped flag letters accumulate via OR while the argument list is folded,
/// so a flag can be set many times but never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatOptions {
    /// Number every output line, including blank ones (`-n`)
    pub number_all: bool,
    /// Number nonempty output lines only (`-b`)
    pub number_nonblank: bool,
    /// Append a `$` marker after each line's content (`-e`)
    pub show_end: bool,
    /// Collapse runs of empty lines into a single empty line (`-h`)
    pub squash_blank: bool,
}

impl CatOptions {
    /// Create an option set with every transformation disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable numbering of all output lines
    pub fn with_number_all(mut self, number_all: bool) -> Self {
        self.number_all = self.number_all || number_all;
        self
    }

    /// Enable numbering of nonempty output lines
    pub fn with_number_nonblank(mut self, number_nonblank: bool) -> Self {
        self.number_nonblank = self.number_nonblank || number_nonblank;
        self
    }

    /// Enable the end-of-line marker
    pub fn with_show_end(mut self, show_end: bool) -> Self {
        self.show_end = self.show_end || show_end;
        self
    }

    /// Enable squashing of repeated blank lines
    pub fn with_squash_blank(mut self, squash_blank: bool) -> Self {
        self.squash_blank = self.squash_blank || squash_blank;
        self
    }

    /// True when either numbering mode is active
    pub fn numbering(&self) -> bool {
        self.number_all || self.number_nonblank
    }
}
