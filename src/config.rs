pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;
pub const DEFAULT_INDEX_CAPACITY: usize = 1024;

/// What to do with a physical line longer than the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlongLines {
    /// Deliver the line in bounded chunks. Every chunk is validated as part
    /// of the same line, so nothing is skipped and a chunk never starts a
    /// new record.
    #[default]
    Continue,
    /// Fail with `LineTooLong`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub max_line_len: usize,
    pub overlong: OverlongLines,
    pub verbose: bool,
    /// Initial capacity of the identifier index.
    pub index_capacity: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            overlong: OverlongLines::Continue,
            verbose: false,
            index_capacity: DEFAULT_INDEX_CAPACITY,
        }
    }
}

impl ValidatorConfig {
    pub fn verbose(verbose: bool) -> Self {
        ValidatorConfig {
            verbose,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    config: ValidatorConfig,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of bytes delivered per line read. Values below 1
    /// are raised to 1.
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len.max(1);
        self
    }

    pub fn overlong(mut self, policy: OverlongLines) -> Self {
        self.config.overlong = policy;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn index_capacity(mut self, capacity: usize) -> Self {
        self.config.index_capacity = capacity;
        self
    }

    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}
