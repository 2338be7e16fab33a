//! Operation metadata and execution traits

use async_trait::async_trait;

/// Static metadata describing a command
///
/// The verb/noun pair identifies the command in logs and diagnostics,
/// e.g. `"delete column"`.
pub trait Operation {
    /// The action performed, e.g. `"add"`
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. `"task"`
    fn noun(&self) -> &'static str;

    /// Human-readable summary of what the command does
    fn description(&self) -> &'static str;

    /// Combined `"{verb} {noun}"` string
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute a command against a context
///
/// `C` is the context the command reads and writes through, `E` the error type
/// it fails with. The output is typed per command.
#[async_trait]
pub trait Execute<C, E>: Operation + Send + Sync
where
    C: Send + Sync,
{
    /// Value produced on success
    type Output: Send;

    /// Run the command
    async fn execute(&self, ctx: &C) -> Result<Self::Output, E>;
}
