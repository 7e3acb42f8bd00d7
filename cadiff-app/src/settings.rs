use cadiff_config::{AppConfig, ConfigError, LayerStyle};
use cadiff_core::{document::ColorIndex, geometry::Vector3};
use cadiff_engine::{
    compare::DiffConfig,
    render::{OutputLayer, OutputLayers},
};

use crate::cli::Overrides;

/// 把命令行覆盖项写入配置并校验。
pub fn apply_overrides(mut config: AppConfig, overrides: &Overrides) -> Result<AppConfig, ConfigError> {
    if let Some(tolerance) = overrides.tolerance {
        config.comparison.tolerance = tolerance;
    }
    if let Some(offset) = overrides.offset_b {
        config.comparison.offset_b = offset;
    }
    if let Some(color) = overrides.deleted_color {
        config.layers.deleted.color = color;
    }
    if let Some(color) = overrides.added_color {
        config.layers.added.color = color;
    }
    if let Some(color) = overrides.unchanged_color {
        config.layers.unchanged.color = color;
    }
    config.validate()?;
    Ok(config)
}

fn output_layer(style: &LayerStyle) -> OutputLayer {
    OutputLayer::new(style.name.clone(), ColorIndex(style.color))
}

pub fn diff_config(config: &AppConfig) -> DiffConfig {
    let [x, y, z] = config.comparison.offset_b;
    DiffConfig {
        tolerance: config.comparison.tolerance,
        layers: OutputLayers {
            deleted: output_layer(&config.layers.deleted),
            added: output_layer(&config.layers.added),
            unchanged: output_layer(&config.layers.unchanged),
        },
        offset_b: Vector3::new(x, y, z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_engine_defaults() {
        let config = apply_overrides(AppConfig::default(), &Overrides::default()).unwrap();
        assert_eq!(diff_config(&config), DiffConfig::default());
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = Overrides {
            tolerance: Some(0.25),
            added_color: Some(5),
            offset_b: Some([0.0, -100.0, 0.0]),
            ..Overrides::default()
        };
        let config = apply_overrides(AppConfig::default(), &overrides).unwrap();
        let diff = diff_config(&config);
        assert!((diff.tolerance - 0.25).abs() < f64::EPSILON);
        assert_eq!(diff.layers.added.color, ColorIndex(5));
        assert_eq!(diff.layers.deleted.color, ColorIndex::RED);
        assert_eq!(diff.offset_b, Vector3::new(0.0, -100.0, 0.0));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let overrides = Overrides {
            tolerance: Some(-1.0),
            ..Overrides::default()
        };
        assert!(matches!(
            apply_overrides(AppConfig::default(), &overrides),
            Err(ConfigError::Invalid(_))
        ));
    }
}
