use async_trait::async_trait;

use crate::{Command, Query};

/// Handles a command: validates it, writes state, publishes events.
///
/// The error type is associated so each application layer can decide its own
/// failure taxonomy. Handlers take the command by value (commands are cheap,
/// owned messages).
#[async_trait]
pub trait CommandHandler: Send + Sync {
    type Cmd: Command;
    type Output: Send;
    type Error: core::fmt::Debug + Send + Sync + 'static;

    async fn handle(&self, command: Self::Cmd) -> Result<Self::Output, Self::Error>;
}

/// Handles a query: read-only access to state.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    type Qry: Query;
    type Output: Send;
    type Error: core::fmt::Debug + Send + Sync + 'static;

    async fn handle(&self, query: Self::Qry) -> Result<Self::Output, Self::Error>;
}
