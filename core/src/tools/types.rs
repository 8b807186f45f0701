use crate::protocol::FunctionCall;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    DisplayColorPalette,
    RecordUserEmotion,
}

impl ToolName {
    /// Registration order
    pub const ALL: [ToolName; 2] = [ToolName::DisplayColorPalette, ToolName::RecordUserEmotion];

    /// Function name as the model sees it
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::DisplayColorPalette => "display_color_palette",
            ToolName::RecordUserEmotion => "record_user_emotion",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotions the model may record from the user's voice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Confused,
    Frustrated,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Confused,
        Emotion::Frustrated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Confused => "confused",
            Emotion::Frustrated => "frustrated",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// display_color_palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteArgs {
    pub theme: String,
    pub colors: Vec<String>,
}

/// Latest palette: the raw call for the debug dump plus its decoded arguments
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteResult {
    pub call: FunctionCall,
    pub args: PaletteArgs,
}

// record_user_emotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionArgs {
    pub user_emotion: Emotion,
}

/// Outcome of a successfully handled function call
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    Palette(PaletteResult),
    Emotion(Emotion),
}

impl ToolResult {
    pub fn tool(&self) -> ToolName {
        match self {
            ToolResult::Palette(_) => ToolName::DisplayColorPalette,
            ToolResult::Emotion(_) => ToolName::RecordUserEmotion,
        }
    }
}
