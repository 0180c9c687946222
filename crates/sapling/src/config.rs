//! Session configuration

/// Configuration for a [`Session`](crate::Session).
///
/// Both switches are diagnostic echoes written to the session's output
/// ahead of the program's own output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print each parsed statement in prefix form before running it
    pub echo_ast: bool,

    /// Print the token stream as JSON, one token per line, before parsing
    pub dump_tokens: bool,
}

impl SessionConfig {
    /// Create a config with every echo turned off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the AST echo.
    pub fn with_echo_ast(mut self, echo_ast: bool) -> Self {
        self.echo_ast = echo_ast;
        self
    }

    /// Enable or disable the token dump.
    pub fn with_dump_tokens(mut self, dump_tokens: bool) -> Self {
        self.dump_tokens = dump_tokens;
        self
    }
}
