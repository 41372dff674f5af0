//! Auxiliary service templates, keyed by dependency name.
//!
//! Static data only. The patch compiler looks entries up here instead of
//! branching on names.

use crate::domain::manifest::{Container, ContainerPort, Deployment, EnvVar};

/// Fixed definition of one auxiliary service.
#[derive(Debug)]
pub struct DependencyTemplate {
    pub name: &'static str,
    pub image: &'static str,
    pub port: u16,
    /// Initialization variables for stateful services.
    pub env: &'static [(&'static str, &'static str)],
}

pub static DEPENDENCIES: &[DependencyTemplate] = &[
    DependencyTemplate {
        name: "postgresql",
        image: "postgres:14",
        port: 5432,
        env: &[
            ("POSTGRES_DB", "myapp"),
            ("POSTGRES_USER", "user"),
            ("POSTGRES_PASSWORD", "password"),
        ],
    },
    DependencyTemplate {
        name: "redis",
        image: "redis:7",
        port: 6379,
        env: &[],
    },
    DependencyTemplate {
        name: "mongodb",
        image: "mongo:6",
        port: 27017,
        env: &[
            ("MONGO_INITDB_ROOT_USERNAME", "root"),
            ("MONGO_INITDB_ROOT_PASSWORD", "password"),
        ],
    },
];

#[must_use]
pub fn lookup(name: &str) -> Option<&'static DependencyTemplate> {
    DEPENDENCIES.iter().find(|t| t.name == name)
}

/// Names in table order, for error messages.
#[must_use]
pub fn supported_names() -> Vec<&'static str> {
    DEPENDENCIES.iter().map(|t| t.name).collect()
}

impl DependencyTemplate {
    /// Full Deployment definition injected for this service.
    #[must_use]
    pub fn deployment(&self) -> Deployment {
        Deployment::single_container(Container {
            name: self.name.to_string(),
            image: self.image.to_string(),
            env: self
                .env
                .iter()
                .map(|(name, value)| EnvVar::new(*name, *value))
                .collect(),
            ports: vec![ContainerPort {
                container_port: self.port,
            }],
        })
    }
}
