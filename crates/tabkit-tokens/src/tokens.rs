//! Token parsing and CSS generation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TokenError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGroup {
    pub name: String,
    pub tokens: Vec<Token>,
}

impl TokenGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
        }
    }

    pub fn with_token(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.push(Token {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Groups in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub groups: Vec<TokenGroup>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: TokenGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn token_count(&self) -> usize {
        self.groups.iter().map(|g| g.tokens.len()).sum()
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let groups = value.as_object().ok_or(TokenError::InvalidFormat)?;

        let mut set = TokenSet::new();
        for (group_name, group) in groups {
            let tokens = group
                .as_object()
                .ok_or_else(|| TokenError::InvalidGroup(group_name.clone()))?;

            let mut parsed = TokenGroup::new(group_name.clone());
            for (token_name, token) in tokens {
                let value = token_value(token).ok_or_else(|| TokenError::InvalidToken {
                    group: group_name.clone(),
                    token: token_name.clone(),
                })?;
                parsed.tokens.push(Token {
                    name: token_name.clone(),
                    value: value.to_string(),
                });
            }
            set.groups.push(parsed);
        }

        Ok(set)
    }
}

/// A token is an object with a string `value`; any other keys must also be
/// strings (descriptions and the like).
fn token_value(token: &Value) -> Option<&str> {
    let fields = token.as_object()?;
    let value = fields.get("value")?.as_str()?;
    if fields.values().all(Value::is_string) {
        Some(value)
    } else {
        None
    }
}

pub fn parse_tokens(json: &str) -> Result<TokenSet> {
    let value: Value = serde_json::from_str(json)?;
    TokenSet::from_value(&value)
}

/// `primaryColor` -> `primary-color`. Only ASCII uppercase letters are split.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn generate_css(tokens: &TokenSet) -> String {
    let mut css = String::from(":root {\n");
    for group in &tokens.groups {
        for token in &group.tokens {
            css.push_str(&format!(
                "  --{}-{}: {};\n",
                group.name,
                kebab_case(&token.name),
                token.value
            ));
        }
    }
    css.push_str("}\n");
    css
}
