//! Bot command derived from a chat message

/// A parsed chat command: verb plus positional arguments.
///
/// Parsed from a single chat indication, executed synchronously,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// First argument, if any
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Arguments re-joined with single spaces, for free-text commands
    pub fn args_joined(&self) -> String {
        self.args.join(" ")
    }
}
