/// Log tags identifying the subsystem a message originates from
///
/// Each tag maps to a --debug-<key> command-line flag through
/// `to_debug_key()`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTag {
    System,
    Model,
    Training,
    Explain,
    Webserver,
    Test,
    Other(String),
}

impl LogTag {
    /// Key used in --debug-<key> flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Model => "model".to_string(),
            LogTag::Training => "training".to_string(),
            LogTag::Explain => "explain".to_string(),
            LogTag::Webserver => "webserver".to_string(),
            LogTag::Test => "test".to_string(),
            LogTag::Other(s) => s.to_lowercase(),
        }
    }

    /// Uncolored tag text for file output
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Model => "MODEL".to_string(),
            LogTag::Training => "TRAINING".to_string(),
            LogTag::Explain => "EXPLAIN".to_string(),
            LogTag::Webserver => "WEBSERVER".to_string(),
            LogTag::Test => "TEST".to_string(),
            LogTag::Other(s) => s.to_uppercase(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
