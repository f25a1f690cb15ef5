//! Single Responsibility: one reason to change per type.
//!
//! The legacy `EmployeeOld` mixes employee data, persistence and tax rules;
//! the legacy `HandlerOld` mixes transport, parsing and storage. The
//! refactored types give each concern its own unit.

use solid_core::{Console, Example, ExecutionContext, Principle, Variant};

pub const SEPARATOR: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeType {
    FullTime,
    Contract,
}

impl EmployeeType {
    pub fn tax_percentage(&self) -> f32 {
        match self {
            EmployeeType::FullTime => 0.2,
            EmployeeType::Contract => 0.3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "full time",
            EmployeeType::Contract => "contract",
        }
    }
}

fn tax_line(employee_type: EmployeeType, tax: f32) -> String {
    format!("The {} employee tax is {:?}", employee_type.label(), tax)
}

pub mod legacy {
    use super::*;

    /// Data, persistence and tax rules in one type.
    #[derive(Debug, Clone)]
    pub struct EmployeeOld {
        pub id: u32,
        pub name: String,
        pub salary: f32,
        pub employee_type: EmployeeType,
    }

    impl EmployeeOld {
        pub fn new(id: u32, name: impl Into<String>, salary: f32, employee_type: EmployeeType) -> Self {
            Self { id, name: name.into(), salary, employee_type }
        }

        pub fn save(&self, console: &dyn Console) {
            console.emit(&format!("Employee {} is saved", self.name));
        }

        pub fn calculate_tax(&self, console: &dyn Console) -> f32 {
            let tax = self.salary * self.employee_type.tax_percentage();
            console.emit(&tax_line(self.employee_type, tax));
            tax
        }
    }

    /// Request, parse and store behind one `handle`.
    #[derive(Debug, Default)]
    pub struct HandlerOld;

    impl HandlerOld {
        pub fn handle(&self, console: &dyn Console) {
            let data = self.request_data_to_api();
            let items = self.parse(&data);
            self.save_to_db(&items, console);
        }

        fn request_data_to_api(&self) -> Vec<u8> {
            ["1", "2", "3"].join(SEPARATOR).into_bytes()
        }

        fn parse(&self, data: &[u8]) -> Vec<String> {
            std::str::from_utf8(data)
                .map(|s| s.split(SEPARATOR).map(str::to_string).collect())
                .unwrap_or_default()
        }

        fn save_to_db(&self, items: &[String], console: &dyn Console) {
            console.emit(&format!("saved {:?}", items));
        }
    }
}

// ============================================================================
// EMPLOYEE
// ============================================================================

/// Plain employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub salary: f32,
    pub employee_type: EmployeeType,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>, salary: f32, employee_type: EmployeeType) -> Self {
        Self { id, name: name.into(), salary, employee_type }
    }
}

#[derive(Debug, Default)]
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn tax_for(&self, employee: &Employee) -> f32 {
        employee.salary * employee.employee_type.tax_percentage()
    }

    pub fn calculate_tax(&self, employee: &Employee, console: &dyn Console) -> f32 {
        let tax = self.tax_for(employee);
        console.emit(&tax_line(employee.employee_type, tax));
        tax
    }
}

#[derive(Debug, Default)]
pub struct EmployeeRepository;

impl EmployeeRepository {
    pub fn save(&self, employee: &Employee, console: &dyn Console) {
        console.emit(&format!("Employee {} is saved", employee.name));
    }
}

// ============================================================================
// HANDLER
// ============================================================================

/// Produces the raw payload.
#[derive(Debug, Clone)]
pub struct ApiHandler {
    items: Vec<String>,
}

impl ApiHandler {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn request_data_to_api(&self) -> Vec<u8> {
        self.items.join(SEPARATOR).into_bytes()
    }
}

impl Default for ApiHandler {
    fn default() -> Self {
        Self::new(vec!["1".to_string(), "2".to_string(), "3".to_string()])
    }
}

#[derive(Debug, Default)]
pub struct ParseHandler;

impl ParseHandler {
    /// Splits a UTF-8 payload on [`SEPARATOR`]. Undecodable input yields an
    /// empty list.
    pub fn parse(&self, data: &[u8]) -> Vec<String> {
        match std::str::from_utf8(data) {
            Ok(text) => text.split(SEPARATOR).map(str::to_string).collect(),
            Err(err) => {
                tracing::warn!(%err, bytes = data.len(), "payload is not UTF-8, parsing to empty list");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct DbHandler;

impl DbHandler {
    pub fn save_to_db(&self, items: &[String], console: &dyn Console) {
        console.emit(&format!("saved {:?}", items));
    }
}

/// Orchestrates request → parse → save; does none of them itself.
#[derive(Debug)]
pub struct Handler {
    api_handler: ApiHandler,
    parse_handler: ParseHandler,
    db_handler: DbHandler,
}

impl Handler {
    pub fn new(api_handler: ApiHandler, parse_handler: ParseHandler, db_handler: DbHandler) -> Self {
        Self { api_handler, parse_handler, db_handler }
    }

    pub fn handle(&self, console: &dyn Console) -> Vec<String> {
        let data = self.api_handler.request_data_to_api();
        let items = self.parse_handler.parse(&data);
        self.db_handler.save_to_db(&items, console);
        items
    }
}

// ============================================================================
// EXAMPLES
// ============================================================================

pub struct EmployeeExample;

impl Example for EmployeeExample {
    fn id(&self) -> &'static str {
        "srp.employee"
    }

    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn title(&self) -> &'static str {
        "Employee Manager Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => {
                let full_time = legacy::EmployeeOld::new(1, "Robert", 1000.0, EmployeeType::FullTime);
                let contract = legacy::EmployeeOld::new(2, "Rob", 500.0, EmployeeType::Contract);
                full_time.save(console);
                full_time.calculate_tax(console);
                contract.save(console);
                contract.calculate_tax(console);
            }
            Variant::Refactored => {
                let full_time = Employee::new(1, "Robert", 1000.0, EmployeeType::FullTime);
                let contract = Employee::new(2, "Rob", 500.0, EmployeeType::Contract);
                let tax_calculator = TaxCalculator;
                let repository = EmployeeRepository;
                tax_calculator.calculate_tax(&full_time, console);
                repository.save(&full_time, console);
                tax_calculator.calculate_tax(&contract, console);
                repository.save(&contract, console);
            }
        }
    }
}

pub struct HandlerExample;

impl Example for HandlerExample {
    fn id(&self) -> &'static str {
        "srp.handler"
    }

    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn title(&self) -> &'static str {
        "Handler Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => legacy::HandlerOld.handle(console),
            Variant::Refactored => {
                let handler = Handler::new(ApiHandler::default(), ParseHandler, DbHandler);
                handler.handle(console);
            }
        }
    }
}
