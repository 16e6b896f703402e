//! Design-file reading and validation.

use crate::error::ConfigError;
use crate::types::DesignFile;
use naiad_design::Input;
use std::path::Path;

/// Reads and parses a design file from disk.
pub fn load_design(path: impl AsRef<Path>) -> Result<Input, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    parse_design(&text)
}

/// Parses a design from JSON text.
pub fn parse_design(text: &str) -> Result<Input, ConfigError> {
    let file: DesignFile = serde_json::from_str(text)?;
    validate(&file)?;
    Ok(file.into_input())
}

fn validate(file: &DesignFile) -> Result<(), ConfigError> {
    if file.chip.width <= 0 || file.chip.height <= 0 {
        return Err(ConfigError::Validation(format!(
            "chip extent must be positive, got {}x{}",
            file.chip.width, file.chip.height
        )));
    }
    for (i, module) in file.modules.iter().enumerate() {
        if module.width <= 0 || module.height <= 0 {
            return Err(ConfigError::Validation(format!(
                "module {i} extent must be positive"
            )));
        }
    }
    for (i, channel) in file.channels.iter().enumerate() {
        if channel.width <= 0 {
            return Err(ConfigError::Validation(format!(
                "channel {i} width must be positive"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use naiad_design::{Orientation, Placement};
    use std::io::Write;

    const DESIGN: &str = r#"{
        "chip": { "width": 76000, "height": 25000 },
        "modules": [
            {
                "width": 30000, "height": 15000, "pitch": 1500, "spacing": 1000,
                "position": [-15000, -7500], "orientation": "up", "placement": "top"
            },
            {
                "width": 15000, "height": 15000, "pitch": 1500, "spacing": 1000,
                "pinAmount": 1
            }
        ],
        "channels": [
            {
                "width": 400, "spacing": 600, "maxSegments": 6,
                "from": { "module": 0, "port": [0, 0] },
                "to": { "module": 1, "port": [1, 2] },
                "maxLength": 500000
            }
        ],
        "staticExclusions": [
            { "x": 0, "y": 0, "width": 5000, "height": 5000 }
        ],
        "softCorners": true
    }"#;

    #[test]
    fn parses_full_design() {
        let input = parse_design(DESIGN).unwrap();
        assert_eq!(input.chip.width, 76_000);
        assert_eq!(input.chip.x_min(), -38_000);
        assert_eq!(input.modules.len(), 2);
        assert_eq!(input.modules[0].orientation, Some(Orientation::Up));
        assert_eq!(input.modules[0].placement, Some(Placement::Top));
        assert_eq!(input.modules[1].position, None);
        assert_eq!(input.channels.len(), 1);
        assert_eq!(input.channels[0].max_length, Some(500_000));
        assert_eq!(input.channels[0].to.port_y, 2);
        assert_eq!(input.static_exclusions.len(), 1);
        assert!(input.soft_corners);
        assert!(!input.paper_constraints);
    }

    #[test]
    fn pin_defaults_apply() {
        let input = parse_design(DESIGN).unwrap();
        // Module 0 defaults to 3 pins; module 1 asked for 1.
        assert_eq!(input.pins.len(), 4);
        assert_eq!(input.pins[3].module, 1);
        assert_eq!(input.modules[0].pin_count, 3);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let bad = r#"{ "chip": { "width": 1, "height": 1 }, "modulez": [] }"#;
        assert!(matches!(parse_design(bad), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn nonpositive_chip_is_rejected() {
        let bad = r#"{ "chip": { "width": 0, "height": 25000 } }"#;
        assert!(matches!(
            parse_design(bad),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DESIGN.as_bytes()).unwrap();
        let input = load_design(file.path()).unwrap();
        assert_eq!(input.modules.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_design("/nonexistent/design.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
