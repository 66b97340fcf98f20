//! PackageCatalog port - read-only lookup into the content collaborator.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PackageId};
use crate::domain::package::Package;

/// Port for reading tour packages. The catalog is owned elsewhere; the core
/// never writes through this port.
#[async_trait]
pub trait PackageCatalog: Send + Sync {
    /// Loads a package by id.
    async fn get(&self, id: &PackageId) -> Result<Option<Package>, DomainError>;
}
