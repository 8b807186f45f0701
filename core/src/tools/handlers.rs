use crate::protocol::FunctionCall;
use crate::tools::types::*;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

pub const PALETTE_FOLLOW_UP: &str = "ask for feedback about the color palette - don't repeat \
the colors, just ask if they like the colors.";

pub const EMOTION_FOLLOW_UP: &str =
    "Thanks for sharing your feelings. Your emotion has been recorded.";

/// Errors raised while handling a function call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    #[error("Malformed arguments for {tool}: {reason}")]
    MalformedArgs { tool: ToolName, reason: String },
}

/// One handler per tool, all behind the same interface
pub trait ToolHandler: Send + Sync {
    fn name(&self) -> ToolName;

    /// Decode and check the call's arguments into a displayable result
    fn handle(&self, call: &FunctionCall) -> Result<ToolResult, ToolError>;

    /// Instructions for the model's next turn once the result is in
    fn follow_up(&self) -> &str;
}

fn decode_args<T: DeserializeOwned>(tool: ToolName, call: &FunctionCall) -> Result<T, ToolError> {
    serde_json::from_str(&call.arguments).map_err(|e| ToolError::MalformedArgs {
        tool,
        reason: e.to_string(),
    })
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into an RGB triple (alpha dropped)
pub fn parse_hex_color(code: &str) -> Option<(u8, u8, u8)> {
    let digits = code.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        3 | 4 => {
            let mut it = digits.chars().take(3).map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 16 + v
            });
            Some((it.next()?, it.next()?, it.next()?))
        }
        6 | 8 => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

/// display_color_palette: keeps only the latest palette
pub struct PaletteHandler;

impl ToolHandler for PaletteHandler {
    fn name(&self) -> ToolName {
        ToolName::DisplayColorPalette
    }

    fn handle(&self, call: &FunctionCall) -> Result<ToolResult, ToolError> {
        let args: PaletteArgs = decode_args(self.name(), call)?;

        if let Some(bad) = args.colors.iter().find(|c| parse_hex_color(c).is_none()) {
            return Err(ToolError::MalformedArgs {
                tool: self.name(),
                reason: format!("not a hex color code: {:?}", bad),
            });
        }

        Ok(ToolResult::Palette(PaletteResult {
            call: call.clone(),
            args,
        }))
    }

    fn follow_up(&self) -> &str {
        PALETTE_FOLLOW_UP
    }
}

/// record_user_emotion: every call lands in the log
pub struct EmotionHandler;

impl ToolHandler for EmotionHandler {
    fn name(&self) -> ToolName {
        ToolName::RecordUserEmotion
    }

    fn handle(&self, call: &FunctionCall) -> Result<ToolResult, ToolError> {
        let args: EmotionArgs = decode_args(self.name(), call)?;
        Ok(ToolResult::Emotion(args.user_emotion))
    }

    fn follow_up(&self) -> &str {
        EMOTION_FOLLOW_UP
    }
}

/// Name → handler lookup, closed set built at startup
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Box<dyn ToolHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
        };
        registry.insert(Box::new(PaletteHandler));
        registry.insert(Box::new(EmotionHandler));
        registry
    }

    fn insert(&mut self, handler: Box<dyn ToolHandler>) {
        self.handlers.insert(handler.name().as_str(), handler);
    }

    /// Handler for a function name; `None` means the call is ignored
    pub fn get(&self, name: &str) -> Option<&dyn ToolHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
