use crate::ports::KeyValueStore;
use keyscope_domain::{DomainError, ServerInfo};
use std::sync::Arc;

pub struct GetInfoSectionUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl GetInfoSectionUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, section: &str) -> Result<ServerInfo, DomainError> {
        if section.is_empty() || !section.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DomainError::InvalidInput(format!(
                "invalid info section: {:?}",
                section
            )));
        }

        let text = self.store.info(Some(section)).await?;
        Ok(ServerInfo::parse(&text))
    }
}
