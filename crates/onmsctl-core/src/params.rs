// `key=value` flattening for detector and policy parameters.

use onmsctl_api::Parameter;

use crate::error::CoreError;

/// Turn repeated `-p key=value` tokens into ordered parameters.
///
/// Each token is split on its first `=`, so values may themselves contain
/// `=`. A token without `=`, or with nothing before it, is rejected.
pub fn parse_parameters<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Parameter>, CoreError> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            match token.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => Ok(Parameter {
                    key: key.to_owned(),
                    value: value.to_owned(),
                }),
                _ => Err(CoreError::MalformedParameter {
                    token: token.to_owned(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keeps_order_and_splits_on_first_equals() {
        let params =
            parse_parameters(&["matchBehavior=ALL_PARAMETERS", "foreignId=~^srv=.*$"]).unwrap();

        assert_eq!(params, vec![
            Parameter {
                key: "matchBehavior".into(),
                value: "ALL_PARAMETERS".into(),
            },
            Parameter {
                key: "foreignId".into(),
                value: "~^srv=.*$".into(),
            },
        ]);
    }

    #[test]
    fn empty_value_is_allowed() {
        let params = parse_parameters(&["category="]).unwrap();
        assert_eq!(params[0].value, "");
    }

    #[test]
    fn token_without_equals_is_rejected() {
        let err = parse_parameters(&["ok=1", "broken"]).unwrap_err();
        assert!(
            matches!(&err, CoreError::MalformedParameter { token } if token == "broken"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn no_tokens_yield_no_parameters() {
        let params = parse_parameters::<&str>(&[]).unwrap();
        assert!(params.is_empty());
    }
}
