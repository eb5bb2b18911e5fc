//! Closed value sets
//!
//! Each enum mirrors one of the registry's value sets; parsing goes through
//! the registry so both stay a single source of truth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::registry::{BUILD_PACKS, DATABASE_TYPES, DEPLOYMENT_STATUSES, RESOURCE_TYPES};
use crate::schema::{check_enum, ValidationError, Violation};

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident in $set:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// The registry's value set this enum mirrors
            pub const fn values() -> &'static [&'static str] {
                $set
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                check_enum(stringify!($name), $set, s)?;
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ValidationError {
                        schema: stringify!($name),
                        violations: vec![Violation {
                            path: String::new(),
                            message: format!("no variant for \"{s}\""),
                        }],
                    })
            }
        }
    };
}

closed_enum! {
    /// Database engine, used as a path segment when creating databases
    DatabaseType in DATABASE_TYPES {
        Postgresql => "postgresql",
        Mysql => "mysql",
        Mariadb => "mariadb",
        Mongodb => "mongodb",
        Redis => "redis",
        Clickhouse => "clickhouse",
        Dragonfly => "dragonfly",
        Keydb => "keydb",
    }
}

closed_enum! {
    /// Lifecycle of a tracked deployment
    DeploymentStatus in DEPLOYMENT_STATUSES {
        Waiting => "waiting",
        Running => "running",
        Failed => "failed",
        Done => "done",
        Cancelled => "cancelled",
    }
}

closed_enum! {
    /// How an application is built
    BuildPack in BUILD_PACKS {
        Nixpacks => "nixpacks",
        Dockerfile => "dockerfile",
        DockerImage => "dockerimage",
        Static => "static",
    }
}

closed_enum! {
    /// Kind of deployable unit targeted by a deploy request
    ResourceType in RESOURCE_TYPES {
        Application => "application",
        Database => "database",
        Service => "service",
    }
}

impl DeploymentStatus {
    /// Whether the deployment has stopped changing
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Failed | Self::Done | Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mirrors<T: Copy + fmt::Display>(all: &[T], values: &[&str]) {
        let rendered: Vec<String> = all.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, values);
    }

    #[test]
    fn test_enums_mirror_registry_sets() {
        assert_mirrors(DatabaseType::ALL, DatabaseType::values());
        assert_mirrors(DeploymentStatus::ALL, DeploymentStatus::values());
        assert_mirrors(BuildPack::ALL, BuildPack::values());
        assert_mirrors(ResourceType::ALL, ResourceType::values());
    }

    #[test]
    fn test_parse_and_serde_agree() {
        for db in DatabaseType::ALL {
            let parsed: DatabaseType = db.as_str().parse().unwrap();
            assert_eq!(parsed, *db);
            let json = serde_json::to_string(db).unwrap();
            assert_eq!(json, format!("\"{}\"", db.as_str()));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        let err = "docker".parse::<BuildPack>().unwrap_err();
        assert_eq!(err.schema, "BuildPack");
        assert_eq!(err.violations.len(), 1);
        assert!(err.violations[0].message.contains("nixpacks"));
    }

    #[test]
    fn test_finished_statuses() {
        assert!(DeploymentStatus::Done.is_finished());
        assert!(DeploymentStatus::Cancelled.is_finished());
        assert!(!DeploymentStatus::Running.is_finished());
        assert!(!DeploymentStatus::Waiting.is_finished());
    }
}
