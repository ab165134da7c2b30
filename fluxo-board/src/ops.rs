//! The command trait
//!
//! Data-access operations are structs whose fields are the parameters,
//! executed against a context. Keeps every store-facing verb in its own
//! file with its own tests.

use async_trait::async_trait;

/// An executable command against a context
#[async_trait]
pub trait Execute<C, E> {
    /// What the command yields on success
    type Output;

    /// Run the command
    async fn execute(&self, ctx: &C) -> std::result::Result<Self::Output, E>;
}
