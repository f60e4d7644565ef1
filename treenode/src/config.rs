use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_PREFIX_CLS: &str = "rc-tree-node";

/// When a retained [`NodeView`](crate::NodeView) recomputes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateGate {
    /// Only when `children`, `checked`, `selected` or `expanded` change.
    /// Label and tooltip edits alone leave the previous output in place.
    #[default]
    Props,
    /// On every update.
    Always,
}

/// What the `disabled` property does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledPolicy {
    /// Carried but ignored by rendering and intents.
    #[default]
    Inert,
    /// Disabled nodes raise no intents.
    BlockIntents,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeNodeConfig {
    /// Style namespace for the root element's classes.
    pub prefix_cls: String,
    pub update_gate: UpdateGate,
    pub disabled_policy: DisabledPolicy,
}

impl Default for TreeNodeConfig {
    fn default() -> Self {
        Self {
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            update_gate: UpdateGate::default(),
            disabled_policy: DisabledPolicy::default(),
        }
    }
}

impl TreeNodeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix_cls.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(())
    }

    pub fn prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = prefix_cls.into();
        self
    }

    pub fn update_gate(mut self, gate: UpdateGate) -> Self {
        self.update_gate = gate;
        self
    }

    pub fn disabled_policy(mut self, policy: DisabledPolicy) -> Self {
        self.disabled_policy = policy;
        self
    }

    /// `"{prefix_cls}-{suffix}"`.
    pub fn prefixed(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.prefix_cls)
    }
}
