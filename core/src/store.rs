use crate::tools::{Emotion, PaletteResult, ToolResult};

/// Per-session accumulator of tool results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    palette: Option<PaletteResult>,
    /// Most recent first
    emotions: Vec<Emotion>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a handled result: palettes overwrite the single slot, emotions are prepended
    pub fn apply(&mut self, result: ToolResult) {
        match result {
            ToolResult::Palette(palette) => self.palette = Some(palette),
            ToolResult::Emotion(emotion) => self.emotions.insert(0, emotion),
        }
    }

    pub fn palette(&self) -> Option<&PaletteResult> {
        self.palette.as_ref()
    }

    pub fn emotions(&self) -> &[Emotion] {
        &self.emotions
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_none() && self.emotions.is_empty()
    }

    pub fn clear(&mut self) {
        self.palette = None;
        self.emotions.clear();
    }
}
