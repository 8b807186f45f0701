//! Pure description of what the panel shows for a given session state.

use crate::tools::handlers::parse_hex_color;
use crate::tools::{Emotion, PaletteResult};

pub const PANEL_TITLE: &str = "Color Palette Tool";
pub const INACTIVE_PROMPT: &str = "Start the session to use this tool...";
pub const AWAITING_PALETTE_PROMPT: &str = "Ask for advice on a color palette...";

/// A single color box
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub code: String,
    pub rgb: Option<(u8, u8, u8)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PalettePane {
    Inactive,
    AwaitingPalette,
    Palette {
        theme: String,
        swatches: Vec<Swatch>,
        /// Pretty-printed raw function call
        raw_json: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub title: &'static str,
    pub palette: PalettePane,
    /// Most recent first
    pub emotions: Vec<Emotion>,
}

impl PanelView {
    pub fn build(is_active: bool, palette: Option<&PaletteResult>, emotions: &[Emotion]) -> Self {
        if !is_active {
            return Self {
                title: PANEL_TITLE,
                palette: PalettePane::Inactive,
                emotions: Vec::new(),
            };
        }

        let palette = match palette {
            Some(result) => PalettePane::Palette {
                theme: result.args.theme.clone(),
                swatches: result
                    .args
                    .colors
                    .iter()
                    .map(|code| Swatch {
                        code: code.clone(),
                        rgb: parse_hex_color(code),
                    })
                    .collect(),
                raw_json: serde_json::to_string_pretty(&result.call.to_raw())
                    .unwrap_or_default(),
            },
            None => PalettePane::AwaitingPalette,
        };

        Self {
            title: PANEL_TITLE,
            palette,
            emotions: emotions.to_vec(),
        }
    }

    pub fn emotion_label(emotion: &Emotion) -> String {
        format!("Recorded Emotion: {}", emotion)
    }

    /// Plain-text rendering
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.to_string()];

        match &self.palette {
            PalettePane::Inactive => lines.push(INACTIVE_PROMPT.to_string()),
            PalettePane::AwaitingPalette => lines.push(AWAITING_PALETTE_PROMPT.to_string()),
            PalettePane::Palette { theme, swatches, raw_json } => {
                lines.push(format!("Theme: {}", theme));
                for swatch in swatches {
                    lines.push(format!("  [{}]", swatch.code));
                }
                lines.extend(raw_json.lines().map(str::to_string));
            }
        }

        if !self.emotions.is_empty() {
            lines.push(String::new());
            lines.extend(self.emotions.iter().map(Self::emotion_label));
        }

        lines
    }
}
