use super::parameter::GridParameter;
use crate::Error;
use log::{error, warn};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
pub struct ParsedParameters {
    pub name: String,
    pub boolean: BTreeSet<&'static str>,
    pub real: BTreeMap<&'static str, f64>,
    pub text: BTreeMap<&'static str, String>,
    pub ignored: Vec<String>,
    pub given: BTreeMap<String, String>,
}

// Accessors
impl ParsedParameters {
    pub fn boolean(&self, key: &str) -> bool {
        self.boolean.contains(key)
    }
    pub fn real(&self, key: &str) -> Result<f64, Error> {
        if let Some(value) = self.real.get(key) {
            return Ok(*value);
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn text(&self, key: &str) -> Result<String, Error> {
        if let Some(value) = self.text.get(key) {
            return Ok(value.to_string());
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn given(&self, key: &str) -> bool {
        self.given.contains_key(key)
    }
}

impl ParsedParameters {
    /// Type check the `locals` (the key-value pairs of a definition, as
    /// produced by [split_into_parameters]) against the `gamut`, and place
    /// them into their proper bins, filling in defaults where needed.
    pub fn new(
        mut locals: BTreeMap<String, String>,
        gamut: &[GridParameter],
    ) -> Result<ParsedParameters, Error> {
        let name = locals.remove("name").unwrap_or_else(|| "redfearn".to_string());
        let mut boolean = BTreeSet::<&'static str>::new();
        let mut real = BTreeMap::<&'static str, f64>::new();
        let mut text = BTreeMap::<&'static str, String>::new();

        for p in gamut {
            match *p {
                GridParameter::Flag { key } => {
                    if let Some(value) = locals.get(key) {
                        if value.is_empty() || value.to_lowercase() == "true" {
                            boolean.insert(key);
                            continue;
                        }
                        warn!("Cannot parse {key}:{value} as a boolean constant!");
                        return Err(Error::BadParam(key.to_string(), value.to_string()));
                    }
                    // Flags are always optional (i.e. implicitly false when not given)
                    continue;
                }

                GridParameter::Real { key, default } => {
                    if let Some(value) = locals.get(key) {
                        if let Ok(v) = value.parse::<f64>() {
                            real.insert(key, v);
                            continue;
                        }
                        warn!("Cannot parse {key}:{value} as a real number");
                        return Err(Error::BadParam(key.to_string(), value.to_string()));
                    }

                    // If we're here, the key was not found

                    // Default given?
                    if let Some(value) = default {
                        real.insert(key, value);
                        continue;
                    }

                    // Missing a required parameter
                    error!("Missing required parameter '{key}'");
                    return Err(Error::MissingParam(key.to_string()));
                }

                GridParameter::Text { key, default } => {
                    if let Some(value) = locals.get(key) {
                        text.insert(key, value.to_string());
                        continue;
                    }

                    if let Some(value) = default {
                        text.insert(key, value.to_string());
                        continue;
                    }

                    error!("Missing required parameter '{key}'");
                    return Err(Error::MissingParam(key.to_string()));
                }
            };
        }

        // Params specified, but not in the gamut
        let ignored: Vec<String> = locals
            .keys()
            .filter(|&key| !gamut.iter().any(|p| p.key() == key))
            .cloned()
            .collect();
        for key in &ignored {
            warn!("{name}: ignoring unknown parameter '{key}'");
        }

        Ok(ParsedParameters {
            name,
            boolean,
            real,
            text,
            ignored,
            given: locals,
        })
    }
}

impl GridParameter {
    pub fn key(&self) -> &'static str {
        match *self {
            GridParameter::Flag { key } => key,
            GridParameter::Real { key, .. } => key,
            GridParameter::Text { key, .. } => key,
        }
    }
}

// ----- A N C I L L A R Y   F U N C T I O N S -----------------------------------------

/// Split a definition such as `"mga k_0 = 1 south"` into its key-value
/// pairs. A leading key-without-value is the name of the definition, and
/// other keys-without-value are flags, registered with the value `"true"`.
pub fn split_into_parameters(definition: &str) -> BTreeMap<String, String> {
    // Conflate contiguous whitespace, then remove whitespace around {"=", ","}
    let elements: Vec<_> = definition.split_whitespace().collect();
    let definition = elements
        .join(" ")
        .replace("= ", "=")
        .replace(", ", ",")
        .replace(" =", "=")
        .replace(" ,", ",");

    let mut params = BTreeMap::new();
    for element in definition.split_whitespace() {
        // Split a key=value-pair into key and value parts
        let (key, value) = match element.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (element, None),
        };

        // If the first arg is a key-without-value, it is the name of the definition
        if params.is_empty() && value.is_none() {
            params.insert(String::from("name"), String::from(key));
            continue;
        }

        // Flags are booleans that are true when specified, false when not
        params.insert(String::from(key), String::from(value.unwrap_or("true")));
    }

    params
}

// ----- T E S T S ------------------------------------------------------------------
