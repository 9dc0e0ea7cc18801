use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Deserializer, Serialize};

/// Function identity as published by the Lambda platform. Both values fall
/// back to local defaults when the variables are not set.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Config {
    #[serde(rename = "aws_lambda_function_name", deserialize_with = "scalar_as_string")]
    pub function_name: String,
    #[serde(rename = "aws_lambda_function_version", deserialize_with = "scalar_as_string")]
    pub function_version: String,
}

/// `Env` parses values, so a published version such as `7` arrives as an
/// integer rather than a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(number) => number.to_string(),
        Scalar::Signed(number) => number.to_string(),
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function_name: "sqs-message-handler".to_string(),
            function_version: "$LATEST".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "AWS_LAMBDA_FUNCTION_NAME",
                "AWS_LAMBDA_FUNCTION_VERSION",
            ]))
            .extract()
    }
}
