//! Validation boundary: named rule providers the host validator calls into,
//! and a record-level pass that collects issues per field.
use crate::{
    ENUM_TYPE_NAME,
    codec::EnumCodec,
    column::EnumColumn,
    error::ErrorClass,
    visitor::{IssueCollector, PathSegment, VisitorContext, VisitorIssues},
};
use std::{collections::BTreeMap, fmt, sync::Arc};
use thiserror::Error as ThisError;

/// Rule name the enum provider answers to.
pub const IS_VALID_RULE: &str = "isValid";

/// Message used when a rule carries none of its own.
pub const DEFAULT_MESSAGE: &str = "The provided value is invalid";

///
/// ValidateError
///

#[remain::sorted]
#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("validation provider '{provider}' is not registered")]
    UnknownProvider { provider: String },

    #[error("validation provider '{provider}' has no rule '{rule}'")]
    UnknownRule { provider: String, rule: String },

    #[error("validation failed")]
    ValidationFailed(VisitorIssues),
}

impl ValidateError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::UnknownProvider { .. } => ErrorClass::NotFound,
            Self::UnknownRule { .. } => ErrorClass::Unsupported,
            Self::ValidationFailed(_) => ErrorClass::InvalidInput,
        }
    }

    /// Issues collected by a failed pass, if any.
    #[must_use]
    pub const fn issues(&self) -> Option<&VisitorIssues> {
        match self {
            Self::ValidationFailed(issues) => Some(issues),
            _ => None,
        }
    }
}

///
/// RuleProvider
///
/// A named object exposing boolean rules over raw field text.
///

pub trait RuleProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, rule: &str, value: &str) -> Result<bool, ValidateError>;
}

impl RuleProvider for EnumCodec {
    fn name(&self) -> &'static str {
        ENUM_TYPE_NAME
    }

    fn check(&self, rule: &str, value: &str) -> Result<bool, ValidateError> {
        match rule {
            IS_VALID_RULE => Ok(self.is_valid(value)),
            _ => Err(ValidateError::UnknownRule {
                provider: ENUM_TYPE_NAME.to_string(),
                rule: rule.to_string(),
            }),
        }
    }
}

impl RuleProvider for EnumColumn {
    fn name(&self) -> &'static str {
        ENUM_TYPE_NAME
    }

    fn check(&self, rule: &str, value: &str) -> Result<bool, ValidateError> {
        self.codec().check(rule, value)
    }
}

///
/// ProviderSet
///

#[derive(Clone, Default)]
pub struct ProviderSet {
    providers: BTreeMap<&'static str, Arc<dyn RuleProvider>>,
}

impl ProviderSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider under its own name, replacing any earlier one.
    pub fn provider(&mut self, provider: Arc<dyn RuleProvider>) {
        let name = provider.name();

        if self.providers.insert(name, provider).is_some() {
            tracing::warn!(name, "validation provider replaced");
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn RuleProvider>> {
        self.providers.get(name)
    }

    pub fn check(&self, provider: &str, rule: &str, value: &str) -> Result<bool, ValidateError> {
        let found = self
            .get(provider)
            .ok_or_else(|| ValidateError::UnknownProvider {
                provider: provider.to_string(),
            })?;

        found.check(rule, value)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }
}

impl fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSet")
            .field("providers", &self.names())
            .finish()
    }
}

///
/// FieldRule
///
/// Attach `provider.rule` to a record field. Absent fields are skipped.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRule {
    pub field: String,
    pub provider: String,
    pub rule: String,
    pub message: Option<String>,
}

impl FieldRule {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        provider: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            provider: provider.into(),
            rule: rule.into(),
            message: None,
        }
    }

    /// `field` must be a valid encoded enum string.
    #[must_use]
    pub fn enum_valid(field: impl Into<String>) -> Self {
        Self::new(field, ENUM_TYPE_NAME, IS_VALID_RULE)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }
}

///
/// validate_record
///
/// Run every rule against the record. Rule failures are collected by field;
/// a missing provider or rule aborts the pass.
///

pub fn validate_record(
    record: &BTreeMap<String, String>,
    rules: &[FieldRule],
    providers: &ProviderSet,
) -> Result<(), ValidateError> {
    let mut collector = IssueCollector::new();

    for rule in rules {
        let Some(value) = record.get(&rule.field) else {
            continue;
        };

        if !providers.check(&rule.provider, &rule.rule, value)? {
            let ctx: &mut dyn VisitorContext = &mut collector;
            ctx.issue_at(PathSegment::from(rule.field.as_str()), rule.message());
        }
    }

    if collector.is_empty() {
        Ok(())
    } else {
        let issues = collector.into_issues();
        tracing::debug!(fields = issues.len(), "record validation failed");

        Err(ValidateError::ValidationFailed(issues))
    }
}

///
/// TESTS
///
