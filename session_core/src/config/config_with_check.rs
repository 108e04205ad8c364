use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::common::session_error::SessionError;

/// Parameter map that hands out each key once and rejects whatever is left
#[derive(Debug, Default)]
pub struct ConfigWithCheck {
    conf: HashMap<String, Value>,
}

impl ConfigWithCheck {
    pub fn new(conf: HashMap<String, Value>) -> Self {
        Self { conf }
    }

    /// Take `key` and deserialize it as `T`
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, SessionError> {
        match self.conf.remove(key) {
            None => Ok(None),
            Some(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| SessionError::invalid_parameter(key, e.to_string())),
        }
    }

    /// Take `key` as a string and parse it with `FromStr`
    pub fn get_parsed<T>(&mut self, key: &str) -> Result<Option<T>, SessionError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.conf.remove(key) {
            None => Ok(None),
            Some(Value::String(s)) => s
                .parse()
                .map(Some)
                .map_err(|e| SessionError::invalid_parameter(key, format!("{}: {}", s, e))),
            Some(other) => Err(SessionError::invalid_parameter(
                key,
                format!("expected string, got {}", other),
            )),
        }
    }

    /// Fails on the first (alphabetically) key nobody asked for
    pub fn check(self) -> Result<(), SessionError> {
        match self.conf.into_keys().min() {
            Some(key) => Err(SessionError::UnknownParameter(key)),
            None => Ok(()),
        }
    }
}
