use crate::protocol::{ClientEvent, SessionConfig, ToolChoice, ToolSchema};
use crate::tools::types::ToolName;
use serde_json::json;
use std::collections::HashMap;

/// Behavioural instructions sent alongside the tool list
pub const SESSION_INSTRUCTIONS: &str =
    "When the user speaks, capture their voice emotion and use record_user_emotion to record it.";

/// Registry for the tools declared to the session and the policy around them
pub struct ToolRegistry {
    specs: HashMap<ToolName, ToolSchema>,
    instructions: String,
    tool_choice: ToolChoice,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            specs: HashMap::new(),
            instructions: SESSION_INSTRUCTIONS.to_string(),
            tool_choice: ToolChoice::Auto,
        };

        registry.register_builtin_tools();
        registry
    }

    /// Register all built-in tools
    fn register_builtin_tools(&mut self) {
        // display_color_palette
        self.specs.insert(ToolName::DisplayColorPalette, ToolSchema {
            kind: "function".to_string(),
            name: ToolName::DisplayColorPalette.as_str().to_string(),
            description: "Call this function when a user asks for a color palette.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "theme": {
                        "type": "string",
                        "description": "Description of the theme for the color scheme."
                    },
                    "colors": {
                        "type": "array",
                        "description": "Array of five hex color codes based on the theme.",
                        "items": { "type": "string", "description": "Hex color code" }
                    }
                },
                "required": ["theme", "colors"]
            }),
            strict: true,
        });

        // record_user_emotion
        self.specs.insert(ToolName::RecordUserEmotion, ToolSchema {
            kind: "function".to_string(),
            name: ToolName::RecordUserEmotion.as_str().to_string(),
            description: "Record the user's emotion captured from their voice.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "user_emotion": {
                        "type": "string",
                        "enum": ["happy", "sad", "confused", "frustrated"],
                        "description": "The emotion expressed by the user's voice."
                    }
                },
                "required": ["user_emotion"]
            }),
            strict: true,
        });
    }

    /// All tool schemas, in registration order
    pub fn specs(&self) -> Vec<&ToolSchema> {
        ToolName::ALL
            .iter()
            .filter_map(|tool| self.specs.get(tool))
            .collect()
    }

    /// Get the schema for a specific tool
    pub fn get_spec(&self, tool: &ToolName) -> Option<&ToolSchema> {
        self.specs.get(tool)
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn tool_choice(&self) -> ToolChoice {
        self.tool_choice
    }

    /// Session configuration carrying every tool, the instructions and the choice policy
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            tools: self.specs().into_iter().cloned().collect(),
            instructions: self.instructions.clone(),
            tool_choice: self.tool_choice,
        }
    }

    /// The one-time registration event
    pub fn session_update(&self) -> ClientEvent {
        ClientEvent::session_update(self.session_config())
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
