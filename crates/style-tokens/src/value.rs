//! Primitive style values
//!
//! Every token and every resolved style property carries one of these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f64,
    /// Vertical offset
    pub offset_y: f64,
    /// Blur radius
    pub blur: f64,
    /// Spread radius
    #[serde(default)]
    pub spread: f64,
    /// Shadow color (with alpha)
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f64, offset_y: f64, blur: f64, spread: f64, color: &str) -> Self {
        Self { offset_x, offset_y, blur, spread, color: color.to_string() }
    }

    /// CSS `box-shadow` form
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            fmt_number(self.offset_x),
            fmt_number(self.offset_y),
            fmt_number(self.blur),
            fmt_number(self.spread),
            self.color
        )
    }
}

/// A primitive style value: literal, or a token alias still waiting to be resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Boolean flag
    Bool(bool),
    /// Number (pixels, unitless factors, milliseconds)
    Number(f64),
    /// String (colors, keywords, token aliases)
    Text(String),
    /// Composite shadow value
    Shadow(Shadow),
    /// Structured value with no primitive form (transform lists, offsets),
    /// carried verbatim to the host
    Raw(serde_json::Value),
}

impl StyleValue {
    /// String contents, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric contents, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean contents, if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// CSS `transform` form of a transform list
    ///
    /// `[{"rotate": "45deg"}, {"translateX": 10}]` becomes
    /// `rotate(45deg) translateX(10px)`. `None` unless every entry is a
    /// single-function object.
    pub fn transform_css(&self) -> Option<String> {
        let StyleValue::Raw(serde_json::Value::Array(steps)) = self else {
            return None;
        };
        let mut out = Vec::with_capacity(steps.len());
        for step in steps {
            let serde_json::Value::Object(step) = step else {
                return None;
            };
            let mut entries = step.iter();
            let (function, argument) = entries.next()?;
            if entries.next().is_some() {
                return None;
            }
            let argument = match argument {
                serde_json::Value::Number(n) => {
                    let n = fmt_number(n.as_f64()?);
                    if function.starts_with("translate") || function == "perspective" {
                        format!("{}px", n)
                    } else {
                        n
                    }
                }
                serde_json::Value::String(s) => s.clone(),
                _ => return None,
            };
            out.push(format!("{}({})", function, argument));
        }
        Some(out.join(" "))
    }
}

/// Format a number without a trailing `.0` for integral values
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Number(n) => write!(f, "{}", fmt_number(*n)),
            StyleValue::Text(s) => write!(f, "{}", s),
            StyleValue::Shadow(s) => write!(f, "{}", s.to_css()),
            StyleValue::Raw(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<Shadow> for StyleValue {
    fn from(value: Shadow) -> Self {
        StyleValue::Shadow(value)
    }
}

impl From<serde_json::Value> for StyleValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => StyleValue::Bool(b),
            serde_json::Value::String(s) => StyleValue::Text(s),
            serde_json::Value::Number(ref n) => match n.as_f64() {
                Some(n) => StyleValue::Number(n),
                None => StyleValue::Raw(value),
            },
            other => match serde_json::from_value::<Shadow>(other.clone()) {
                Ok(shadow) => StyleValue::Shadow(shadow),
                Err(_) => StyleValue::Raw(other),
            },
        }
    }
}
