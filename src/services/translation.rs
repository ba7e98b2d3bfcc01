//! Translation parser
//!
//! The vendor-independent stage: validates extracted content against the
//! application's own result schema.

use crate::models::{GraphTranslation, TranslationResponse};
use crate::utils::error::ParseError;
use serde::Deserialize;
use tracing::{debug, error};

const CATEGORY: &str = "TranslationParser";

/// Base parser contract shared by every vendor
///
/// Receives content that is already vendor-unwrapped plain JSON text.
pub trait TranslationParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<TranslationResponse, ParseError>;
}

impl<F> TranslationParser for F
where
    F: Fn(&str) -> Result<TranslationResponse, ParseError> + Send + Sync,
{
    fn parse(&self, content: &str) -> Result<TranslationResponse, ParseError> {
        self(content)
    }
}

/// Model answer as it appears on the wire; usage is never taken from the model
#[derive(Debug, Deserialize)]
struct TranslationPayload {
    graphs: Vec<GraphTranslation>,
}

/// Parser for the graph translation schema
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphTranslationParser;

impl GraphTranslationParser {
    pub fn new() -> Self {
        Self
    }

    fn validate(graphs: &[GraphTranslation]) -> Result<(), String> {
        if graphs.is_empty() {
            return Err("response contains no graphs".to_string());
        }

        for (index, graph) in graphs.iter().enumerate() {
            if graph.graph_name.trim().is_empty() {
                return Err(format!("graph {} has an empty graph_name", index));
            }
            if graph.graph_type.trim().is_empty() {
                return Err(format!("graph '{}' has an empty graph_type", graph.graph_name));
            }
        }

        Ok(())
    }
}

impl TranslationParser for GraphTranslationParser {
    fn parse(&self, content: &str) -> Result<TranslationResponse, ParseError> {
        let payload: TranslationPayload = serde_json::from_str(content).map_err(|e| {
            error!(category = CATEGORY, "Failed to parse translation JSON: {}", e);
            ParseError::SchemaValidation(e.to_string())
        })?;

        if let Err(reason) = Self::validate(&payload.graphs) {
            error!(category = CATEGORY, "Invalid translation response: {}", reason);
            return Err(ParseError::SchemaValidation(reason));
        }

        debug!(category = CATEGORY, "Parsed {} graph translations", payload.graphs.len());

        Ok(TranslationResponse {
            graphs: payload.graphs,
            ..Default::default()
        })
    }
}
