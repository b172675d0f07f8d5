//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented outside
//!   the domain
//!   - `Clock`: wall-clock time for record timestamps
//!
//! - **Driving (Input) Ports**: called by the outside world, implemented by
//!   services (the CLI calls `UserService` directly)

pub mod output;

pub use output::{Clock, SystemClock};
