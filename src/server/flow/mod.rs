//! AI flow registry.
//!
//! Flows are named units of AI work that the rest of the application can look up by
//! name. They are registered during an explicit startup phase (see
//! `startup::register_flows`) and the registry is frozen behind an `Arc` before the
//! server accepts connections. The flow implementations live outside this crate; this
//! module only defines the contract they implement and the registry that holds them.

pub mod registry;

use async_trait::async_trait;
use serde_json::Value;

use crate::server::error::flow::FlowError;

pub use registry::FlowRegistry;

/// A named flow that can be looked up in the [`FlowRegistry`].
#[async_trait]
pub trait Flow: Send + Sync {
    /// Unique name the flow is registered under.
    fn name(&self) -> &str;

    /// Human-readable summary shown in the flow listing.
    fn description(&self) -> &str;

    /// Runs the flow against a JSON input and returns its JSON output.
    async fn run(&self, input: Value) -> Result<Value, FlowError>;
}
