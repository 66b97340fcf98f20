//! In-memory package catalog.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PackageId};
use crate::domain::package::Package;
use crate::domain::pricing::PriceTable;
use crate::ports::PackageCatalog;

/// In-memory `PackageCatalog`, seeded at startup.
pub struct InMemoryPackageCatalog {
    packages: RwLock<HashMap<PackageId, Package>>,
}

impl InMemoryPackageCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            packages: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a catalog from a package list.
    pub fn with_packages(packages: Vec<Package>) -> Self {
        Self {
            packages: RwLock::new(packages.into_iter().map(|p| (p.id.clone(), p)).collect()),
        }
    }

    /// A small seeded catalog for local development.
    pub fn with_demo_packages() -> Self {
        let demo = vec![
            Package {
                id: PackageId::new("pkg-goa-beach").unwrap(),
                title: "Goa Beach Escape".to_string(),
                category: Some("beach".to_string()),
                package_type: Some("budget".to_string()),
                travel_styles: vec!["nightlife".to_string(), "water-sports".to_string()],
                duration_days: Some(5),
                prices: PriceTable::new(120_000, 60_000, None),
            },
            Package {
                id: PackageId::new("pkg-manali-trek").unwrap(),
                title: "Manali Mountain Trek".to_string(),
                category: Some("adventure".to_string()),
                package_type: Some("premium".to_string()),
                travel_styles: vec!["trekking".to_string(), "camping".to_string()],
                duration_days: Some(7),
                prices: PriceTable::new(250_000, 125_000, Some(20_000)),
            },
            Package {
                id: PackageId::new("pkg-kerala-backwaters").unwrap(),
                title: "Kerala Backwaters Cruise".to_string(),
                category: Some("leisure".to_string()),
                package_type: Some("budget".to_string()),
                travel_styles: vec!["houseboat".to_string(), "food".to_string()],
                duration_days: Some(4),
                prices: PriceTable::new(180_000, 90_000, None),
            },
        ];
        Self::with_packages(demo)
    }

    /// Adds or replaces a package.
    pub fn insert(&self, package: Package) {
        self.packages
            .write()
            .expect("InMemoryPackageCatalog: lock poisoned")
            .insert(package.id.clone(), package);
    }
}

impl Default for InMemoryPackageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageCatalog for InMemoryPackageCatalog {
    async fn get(&self, id: &PackageId) -> Result<Option<Package>, DomainError> {
        Ok(self
            .packages
            .read()
            .expect("InMemoryPackageCatalog: lock poisoned")
            .get(id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_seeded_package() {
        let catalog = InMemoryPackageCatalog::with_demo_packages();
        let id = PackageId::new("pkg-goa-beach").unwrap();
        let package = catalog.get(&id).await.unwrap().unwrap();
        assert_eq!(package.title, "Goa Beach Escape");
    }

    #[tokio::test]
    async fn get_unknown_returns_none() {
        let catalog = InMemoryPackageCatalog::new();
        let id = PackageId::new("pkg-missing").unwrap();
        assert!(catalog.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_replaces_existing() {
        let catalog = InMemoryPackageCatalog::with_demo_packages();
        let id = PackageId::new("pkg-goa-beach").unwrap();
        let mut package = catalog.get(&id).await.unwrap().unwrap();
        package.title = "Goa Deluxe".to_string();
        catalog.insert(package);

        let reread = catalog.get(&id).await.unwrap().unwrap();
        assert_eq!(reread.title, "Goa Deluxe");
    }
}
