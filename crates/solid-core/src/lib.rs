//! SOLID Core: Example Trait, Runner, Console sinks and configuration
//!
//! Every principle scenario implements [`Example`] and prints through an
//! injected [`Console`]. The [`ExampleRunner`] picks scenarios from a
//! [`RunConfig`], runs the legacy and refactored variants and returns one
//! [`ExampleReport`] per variant.
//!
//! ```text
//! RunConfig → ExampleRunner → Example::run(variant) → Transcript → ExampleReport → render
//! ```

pub mod coin;
pub mod config;
pub mod console;
pub mod context;
pub mod error;
pub mod example;
pub mod report;
pub mod runner;

pub use coin::{Coin, FixedCoin, RandomCoin};
pub use config::RunConfig;
pub use console::{Console, Transcript};
pub use context::ExecutionContext;
pub use error::SolidError;
pub use example::{Example, Principle, Variant};
pub use report::{render, ExampleReport, OutputFormat};
pub use runner::ExampleRunner;
