pub mod get_key_memory;
pub mod inspect_key;

pub use get_key_memory::GetKeyMemoryUseCase;
pub use inspect_key::InspectKeyUseCase;
