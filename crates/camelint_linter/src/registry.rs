//! Construction of the enabled rule set from configuration.

use camelint_config::{Config, RuleConfig};
use tracing::{debug, warn};

use crate::rules::Camelcase;
use crate::{FromConfig, Properties, Rule};

/// Names of every rule camelint knows, as used in `camelint.toml`.
pub const RULE_NAMES: &[&str] = &[Camelcase::MODULE_NAME];

/// Build every rule that `config` leaves enabled.
pub fn build_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    for name in config.rule_names() {
        if !RULE_NAMES.contains(&name) {
            warn!(rule = name, "unknown rule in configuration, ignoring");
        }
    }

    let mut rules: Vec<Box<dyn Rule>> = vec![];
    if config.is_enabled(Camelcase::MODULE_NAME) {
        rules.push(Box::new(from_config::<Camelcase>(config)));
    } else {
        debug!(rule = Camelcase::MODULE_NAME, "rule disabled");
    }
    rules
}

fn from_config<R: FromConfig>(config: &Config) -> R {
    let properties: Properties = config
        .rule(R::MODULE_NAME)
        .map(RuleConfig::properties)
        .unwrap_or_default();
    R::from_config(&properties)
}
