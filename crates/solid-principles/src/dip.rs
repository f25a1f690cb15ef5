//! Dependency Inversion: high level code receives its collaborators.

use solid_core::{Console, Example, ExecutionContext, Principle, Variant};

fn catalog_line(names: &[String]) -> String {
    format!("{:?}", names)
}

pub mod legacy {
    use super::*;

    #[derive(Debug, Default)]
    pub struct SqlProductRepositoryOld;

    impl SqlProductRepositoryOld {
        pub fn get_all_product_names(&self) -> Vec<String> {
            vec!["TV".to_string(), "Oven".to_string()]
        }
    }

    /// Builds its own SQL repository on every call.
    #[derive(Debug, Default)]
    pub struct ProductCatalogOld;

    impl ProductCatalogOld {
        pub fn list_all_products(&self, console: &dyn Console) {
            let sql_product_repository = SqlProductRepositoryOld;
            console.emit(&catalog_line(&sql_product_repository.get_all_product_names()));
        }
    }

    #[derive(Debug, Default)]
    pub struct FileSystemManagerOld;

    impl FileSystemManagerOld {
        pub fn save(&self, console: &dyn Console) {
            console.emit("Save something using File System");
        }
    }

    /// Owns a concrete file system manager.
    #[derive(Debug, Default)]
    pub struct HandlerOld {
        file_manager: FileSystemManagerOld,
    }

    impl HandlerOld {
        pub fn handle(&self, console: &dyn Console) {
            self.file_manager.save(console);
        }
    }
}

// ============================================================================
// ECOMMERCE
// ============================================================================

pub trait ProductRepository {
    fn get_all_product_names(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct SqlProductRepository;

impl ProductRepository for SqlProductRepository {
    fn get_all_product_names(&self) -> Vec<String> {
        vec!["TV".to_string(), "Oven".to_string()]
    }
}

pub struct ProductCatalog {
    product_repository: Box<dyn ProductRepository>,
}

impl ProductCatalog {
    pub fn new(product_repository: Box<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    pub fn list_all_products(&self, console: &dyn Console) -> Vec<String> {
        let names = self.product_repository.get_all_product_names();
        console.emit(&catalog_line(&names));
        names
    }
}

/// The one place that knows which repository is concrete.
#[derive(Debug, Default)]
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(&self) -> Box<dyn ProductRepository> {
        Box::new(SqlProductRepository)
    }
}

#[derive(Debug, Default)]
pub struct EcommerceMainApplication;

impl EcommerceMainApplication {
    pub fn start(&self, console: &dyn Console) {
        let product_catalog = ProductCatalog::new(ProductFactory.create());
        product_catalog.list_all_products(console);
    }
}

// ============================================================================
// STORAGE
// ============================================================================

pub trait Storage {
    fn save(&self, console: &dyn Console);
}

#[derive(Debug, Default)]
pub struct FileSystemManager;

impl Storage for FileSystemManager {
    fn save(&self, console: &dyn Console) {
        console.emit("Save something using File System");
    }
}

#[derive(Debug, Default)]
pub struct DatabaseManager;

impl Storage for DatabaseManager {
    fn save(&self, console: &dyn Console) {
        console.emit("Save something using database");
    }
}

pub struct Handler {
    storage: Box<dyn Storage>,
}

impl Handler {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn handle(&self, console: &dyn Console) {
        self.storage.save(console);
    }
}

// ============================================================================
// EXAMPLES
// ============================================================================

pub struct EcommerceExample;

impl Example for EcommerceExample {
    fn id(&self) -> &'static str {
        "dip.ecommerce"
    }

    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn title(&self) -> &'static str {
        "Ecommerce Application Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => legacy::ProductCatalogOld.list_all_products(console),
            Variant::Refactored => EcommerceMainApplication.start(console),
        }
    }
}

pub struct StorageExample;

impl Example for StorageExample {
    fn id(&self) -> &'static str {
        "dip.storage"
    }

    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn title(&self) -> &'static str {
        "Storage Example"
    }

    fn run(&self, variant: Variant, _ctx: &ExecutionContext, console: &dyn Console) {
        match variant {
            Variant::Legacy => legacy::HandlerOld::default().handle(console),
            Variant::Refactored => {
                let file_handler = Handler::new(Box::new(FileSystemManager));
                file_handler.handle(console);
                let db_handler = Handler::new(Box::new(DatabaseManager));
                db_handler.handle(console);
            }
        }
    }
}
