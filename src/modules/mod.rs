pub mod books;

use std::sync::Arc;

use bookshelf_kernel::ModuleRegistry;
use bookshelf_store::BookRepository;

/// Register every application module with the registry.
pub fn register_all(registry: &mut ModuleRegistry, store: Arc<dyn BookRepository>) {
    registry.register(books::create_module(store));
}
