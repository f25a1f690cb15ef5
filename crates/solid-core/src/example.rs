//! Example Trait: single contract for every principle scenario
use crate::console::Console;
use crate::context::ExecutionContext;
use crate::error::SolidError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contract of a runnable scenario.
pub trait Example {
    /// Unique id (ex: "srp.employee")
    fn id(&self) -> &'static str;

    fn principle(&self) -> Principle;

    /// Banner title (ex: "Employee Manager Example")
    fn title(&self) -> &'static str;

    /// Whether two unseeded runs print the same lines (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    /// Prints the legacy or refactored transcript of the scenario.
    fn run(&self, variant: Variant, ctx: &ExecutionContext, console: &dyn Console);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility Principle",
            Principle::Ocp => "Open-Closed Principle",
            Principle::Lsp => "Liskov Substitution Principle",
            Principle::Isp => "Interface Segregation Principle",
            Principle::Dip => "Dependency Inversion Principle",
        }
    }

    pub fn statement(&self) -> &'static str {
        match self {
            Principle::Srp => "There should never be more than one reason for a class to change.",
            Principle::Ocp => {
                "Software entities should be open for extension, but closed for modification."
            }
            Principle::Lsp => {
                "Functions that use references to base types must be able to use objects of derived types without knowing it."
            }
            Principle::Isp => {
                "Clients should not be forced to depend upon interfaces that they do not use."
            }
            Principle::Dip => {
                "High level modules should not depend upon low level modules. Both should depend upon abstractions."
            }
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Principle {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "srp" | "single-responsibility" => Ok(Principle::Srp),
            "ocp" | "open-closed" => Ok(Principle::Ocp),
            "lsp" | "liskov-substitution" => Ok(Principle::Lsp),
            "isp" | "interface-segregation" => Ok(Principle::Isp),
            "dip" | "dependency-inversion" => Ok(Principle::Dip),
            _ => Err(SolidError::UnknownPrinciple(s.to_string())),
        }
    }
}

/// Which half of a scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// The design that violates the principle
    Legacy,
    /// The corrected design
    Refactored,
}

impl Variant {
    pub const BOTH: [Variant; 2] = [Variant::Legacy, Variant::Refactored];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variant::Legacy => f.write_str("legacy"),
            Variant::Refactored => f.write_str("refactored"),
        }
    }
}

impl FromStr for Variant {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "old" | "problem" => Ok(Variant::Legacy),
            "refactored" | "new" | "solution" => Ok(Variant::Refactored),
            _ => Err(SolidError::UnknownVariant(s.to_string())),
        }
    }
}
