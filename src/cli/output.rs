//! Command output rendering.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::AppError;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default).
    #[default]
    Json,
    /// TOON (Token-Oriented Object Notation), a compact tabular text form.
    Toon,
}

/// A command result paired with the format it should be printed in.
///
/// ```ignore
/// Response(scene, OutputFormat::Json).print()?;
/// ```
pub struct Response<T>(pub T, pub OutputFormat);

impl<T: Serialize> Response<T> {
    /// Render the value as text.
    pub fn render(&self) -> Result<String, AppError> {
        match self.1 {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.0)?),
            OutputFormat::Toon => serde_toon::to_string(&self.0)
                .map_err(|e| AppError::Validation(format!("TOON serialization error: {}", e))),
        }
    }

    /// Render and write to stdout.
    pub fn print(&self) -> Result<(), AppError> {
        println!("{}", self.render()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_render() {
        let out = Response(json!({"nodes": [], "links": []}), OutputFormat::Json)
            .render()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"nodes": [], "links": []}));
    }

    #[test]
    fn test_toon_render_is_not_json() {
        let out = Response(json!({"name": "Emily Carter"}), OutputFormat::Toon)
            .render()
            .unwrap();
        assert!(out.contains("Emily Carter"));
        assert!(!out.starts_with('{'));
    }
}
