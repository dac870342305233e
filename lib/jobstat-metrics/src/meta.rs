/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricParseError {
    #[error("no type delimiter '/' found")]
    NoTypeDelimiter,
    #[error("empty metric type")]
    EmptyType,
    #[error("empty metric name")]
    EmptyName,
}

/// The key of one sub metric collected in a job run, like `Database/SQL`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetricMeta {
    r#type: String,
    name: String,
    scope: Option<String>,
}

impl MetricMeta {
    pub fn new(r#type: impl Into<String>, name: impl Into<String>) -> Self {
        MetricMeta {
            r#type: r#type.into(),
            name: name.into(),
            scope: None,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    #[inline]
    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

impl FromStr for MetricMeta {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((r#type, name)) = s.split_once('/') else {
            return Err(MetricParseError::NoTypeDelimiter);
        };
        if r#type.is_empty() {
            return Err(MetricParseError::EmptyType);
        }
        if name.is_empty() {
            return Err(MetricParseError::EmptyName);
        }
        Ok(MetricMeta::new(r#type, name))
    }
}

impl fmt::Display for MetricMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.r#type, self.name)?;
        if let Some(scope) = &self.scope {
            write!(f, " ({scope})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let meta = MetricMeta::from_str("Database/SQL").unwrap();
        assert_eq!(meta.r#type(), "Database");
        assert_eq!(meta.name(), "SQL");
        assert_eq!(meta.scope(), None);
        assert_eq!(meta.to_string(), "Database/SQL");

        let meta = MetricMeta::from_str("HTTP/GET/users").unwrap();
        assert_eq!(meta.r#type(), "HTTP");
        assert_eq!(meta.name(), "GET/users");
    }

    #[test]
    fn parse_err() {
        assert_eq!(
            MetricMeta::from_str("Database"),
            Err(MetricParseError::NoTypeDelimiter)
        );
        assert_eq!(
            MetricMeta::from_str("/SQL"),
            Err(MetricParseError::EmptyType)
        );
        assert_eq!(
            MetricMeta::from_str("Database/"),
            Err(MetricParseError::EmptyName)
        );
    }

    #[test]
    fn scope() {
        let a = MetricMeta::new("View", "users/index");
        let b = a.clone().with_scope("Job/SendEmail");
        assert_eq!(b.scope(), Some("Job/SendEmail"));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "View/users/index");
        assert_eq!(b.to_string(), "View/users/index (Job/SendEmail)");
    }
}
