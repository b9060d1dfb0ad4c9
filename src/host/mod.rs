//! Running listbox machines against a real (or headless) focus model.
//!
//! The machine definition is pure; this module owns everything stateful:
//! the current snapshot, listeners, deferred focus and logging.

mod error;
mod frame;
mod inspect;
mod service;

pub use error::HostError;
pub use frame::FrameQueue;
pub use inspect::{DropReason, Inspector, NoopInspector, TracingInspector};
pub use service::{ListboxService, RefSource, ServiceBuilder, ServiceStatus, SubscriptionId};
