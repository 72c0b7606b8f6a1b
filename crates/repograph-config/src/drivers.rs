use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid driver kind for {variable}: {kind}")]
    InvalidDriverKind { variable: String, kind: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiDriver {
    Null,
    #[default]
    GitHub,
}

impl FromStr for ApiDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "github" => Ok(Self::GitHub),
            _ => Err(DriverError::InvalidDriverKind {
                variable: "REPOGRAPH_API_DRIVER".into(),
                kind: s.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheDriver {
    Null,
    #[default]
    Memory,
}

impl FromStr for CacheDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "memory" => Ok(Self::Memory),
            _ => Err(DriverError::InvalidDriverKind {
                variable: "REPOGRAPH_CACHE_DRIVER".into(),
                kind: s.into(),
            }),
        }
    }
}
