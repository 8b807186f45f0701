use crate::tools::types::*;
use crate::tools::{HandlerRegistry, ToolHandler};
use serde_json::{from_value, json, to_value};

#[test]
fn test_tool_name_wire_names() {
    assert_eq!(ToolName::DisplayColorPalette.as_str(), "display_color_palette");
    assert_eq!(ToolName::RecordUserEmotion.to_string(), "record_user_emotion");

    // Every tool has a handler registered under its wire name
    let handlers = HandlerRegistry::new();
    for tool in ToolName::ALL {
        assert_eq!(handlers.get(tool.as_str()).map(|h| h.name()), Some(tool));
    }
    assert!(handlers.get("Display_Color_Palette").is_none());
}

#[test]
fn test_emotion_serialization() {
    for emotion in Emotion::ALL {
        assert_eq!(to_value(emotion).unwrap(), json!(emotion.as_str()));
    }
    assert!(from_value::<Emotion>(json!("Happy")).is_err());
    assert_eq!(from_value::<Emotion>(json!("frustrated")).unwrap(), Emotion::Frustrated);
}

#[test]
fn test_palette_args_ignore_extra_fields() {
    let args: PaletteArgs = from_value(json!({
        "theme": "autumn",
        "colors": ["#8b4513"],
        "mood": "cozy"
    }))
    .unwrap();

    assert_eq!(args.theme, "autumn");
    assert_eq!(args.colors, vec!["#8b4513".to_string()]);
}

#[test]
fn test_emotion_args_from_wire() {
    let args: EmotionArgs = from_value(json!({ "user_emotion": "confused" })).unwrap();
    assert_eq!(args.user_emotion, Emotion::Confused);
    assert!(from_value::<EmotionArgs>(json!({ "user_emotion": 3 })).is_err());
}
