//! Translation result models
//!
//! Defines the application's own result schema that extracted content is validated against

use super::UsageStats;
use serde::{Deserialize, Serialize};

/// Canonical translation result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Translated graphs
    pub graphs: Vec<GraphTranslation>,
    /// Usage statistics (filled in from the vendor envelope, never from the model answer)
    #[serde(default)]
    pub usage: UsageStats,
}

/// A single translated graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphTranslation {
    /// Graph name
    pub graph_name: String,
    /// Graph type (Function, EventGraph, Macro, ...)
    pub graph_type: String,
    /// Owning class (optional)
    #[serde(default)]
    pub graph_class: String,
    /// Generated code
    pub code: GraphCode,
}

/// Generated code for one graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphCode {
    /// Declaration (header) text
    #[serde(rename = "graphDeclaration")]
    pub graph_declaration: String,
    /// Implementation text
    #[serde(rename = "graphImplementation")]
    pub graph_implementation: String,
    /// Free-form notes from the model (optional)
    #[serde(rename = "implementationNotes", default)]
    pub implementation_notes: String,
}

impl TranslationResponse {
    /// Find a graph by name
    pub fn graph(&self, name: &str) -> Option<&GraphTranslation> {
        self.graphs.iter().find(|g| g.graph_name == name)
    }
}
