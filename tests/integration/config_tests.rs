//! Configuration loading tests
//!
//! Uses explicit lookups so the process environment is never touched.

#[cfg(test)]
mod tests {
    use bedrock_broker::config::{Config, parse_bool};
    use bedrock_broker::core::router::{InvocationMode, RequestRouter};
    use bedrock_broker::utils::error::BrokerError;
    use std::collections::HashMap;

    use crate::common::RecordingTransport;

    fn load(vars: &[(&str, &str)]) -> Result<Config, BrokerError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_use_agent_selects_agent_mode() {
        let config = load(&[
            ("USE_AGENT", "TRUE"),
            ("BEDROCK_AGENT_ID", "A1"),
            ("BEDROCK_AGENT_ALIAS_ID", "AL1"),
        ])
        .unwrap();

        let router = RequestRouter::new(&config.router, RecordingTransport::replying("{}"));
        assert_eq!(router.mode(), InvocationMode::Agent);
    }

    #[test]
    fn test_agent_mode_loads_without_ids() {
        let config = load(&[("USE_AGENT", "1")]).unwrap();
        assert!(config.router.use_agent);
        assert!(config.router.agent.agent_id.is_none());
    }

    #[test]
    fn test_model_settings_from_environment() {
        let config = load(&[
            ("BEDROCK_MODEL_ID", "ai21.j2-ultra-v1"),
            ("MAX_TOKENS", "256"),
            ("TEMPERATURE", "0"),
        ])
        .unwrap();

        let router = RequestRouter::new(&config.router, RecordingTransport::replying("{}"));
        assert_eq!(router.mode(), InvocationMode::Model);
        assert_eq!(router.model_settings().model_id, "ai21.j2-ultra-v1");
        assert_eq!(router.model_settings().max_tokens, 256);
        assert_eq!(router.model_settings().temperature, 0.0);
    }

    #[test]
    fn test_rejected_values() {
        for (key, value) in [
            ("TEMPERATURE", "-0.1"),
            ("TEMPERATURE", "warm"),
            ("MAX_TOKENS", "-5"),
            ("PORT", "70000"),
            ("INCLUDE_ERROR_DETAILS", "perhaps"),
            ("BEDROCK_ENDPOINT", "localhost"),
        ] {
            let error = load(&[(key, value)]).unwrap_err();
            assert!(matches!(error, BrokerError::Config(_)), "{}={}", key, value);
        }
    }

    #[test]
    fn test_boolean_spellings() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
