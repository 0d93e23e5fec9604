use serde::{Deserialize, Serialize};

use crate::services::errors::ConfigError;

const EMBEDDED_ROUTER_LINKS: &str = include_str!("../../../assets/router_links.json");

/// One entry of the application's navigation list
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteLink {
    pub path: String,
    pub label: String,
}

/// Ordered navigation list; the first entry is where a successful login lands
#[derive(Debug, Clone, PartialEq)]
pub struct RouterLinks(Vec<RouteLink>);

impl RouterLinks {
    /// Parse and validate a JSON array of route descriptors
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let links: Vec<RouteLink> =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidRouterLinks {
                message: e.to_string(),
            })?;
        Self::new(links)
    }

    pub fn new(links: Vec<RouteLink>) -> Result<Self, ConfigError> {
        if links.is_empty() {
            return Err(ConfigError::EmptyRouterLinks);
        }
        if let Some(link) = links.iter().find(|link| !link.path.starts_with('/')) {
            return Err(ConfigError::InvalidRouterLinks {
                message: format!("route path '{}' must start with '/'", link.path),
            });
        }
        Ok(Self(links))
    }

    /// The list shipped with the application
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_ROUTER_LINKS)
    }

    /// Destination after a successful login
    pub fn post_login(&self) -> &RouteLink {
        // never empty, checked in `new`
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteLink> {
        self.0.iter()
    }
}
