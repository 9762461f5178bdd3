use std::{collections::HashMap, path::PathBuf};

use assert_approx_eq::assert_approx_eq;
use movements_apps::{Error, NodeConfig, ParamSource};
use tempfile::TempDir;

#[derive(Debug, Default)]
struct StaticParams {
    strings: HashMap<String, String>,
    floats: HashMap<String, f64>,
    ints: HashMap<String, usize>,
}

impl ParamSource for StaticParams {
    fn get_string(&self, name: &str) -> Option<String> {
        self.strings.get(name).cloned()
    }

    fn get_f64(&self, name: &str) -> Option<f64> {
        self.floats.get(name).copied()
    }

    fn get_usize(&self, name: &str) -> Option<usize> {
        self.ints.get(name).copied()
    }
}

fn write_movement_image(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("movement.png");
    let image = image::GrayImage::from_fn(8, 8, |x, y| {
        if y == x {
            image::Luma([0u8])
        } else {
            image::Luma([255u8])
        }
    });
    image.save(&path).unwrap();
    path
}

#[test]
fn verify_sample_configs() {
    let files = vec![
        "config/movements_node.toml",
        "config/movements_node_minimal.toml",
    ];
    for f in files {
        let result = NodeConfig::try_new(f);
        assert!(result.is_ok(), "{:?} {:?}", f, result);
        let ser_result = toml::to_string(&result.unwrap());
        assert!(ser_result.is_ok(), "{:?} {:?}", f, ser_result);
    }
}

#[test]
fn missing_image_path_fails_before_anything_is_built() {
    let result = NodeConfig::from_params(&StaticParams::default());
    assert!(matches!(result, Err(Error::NoImagePath)));
}

#[test]
fn omitted_parameters_take_their_defaults() {
    let mut params = StaticParams::default();
    params
        .strings
        .insert("~image_path".to_owned(), "/tmp/x.png".to_owned());

    let config = NodeConfig::from_params(&params).unwrap();
    assert_eq!(config.image_path, PathBuf::from("/tmp/x.png"));
    assert_approx_eq!(config.min, 0.0);
    assert_approx_eq!(config.max, 1.5);
    assert_approx_eq!(config.publish_rate, 100.0);
    assert_eq!(config.steps_per_movement, 1000);
}

#[test]
fn supplied_parameters_override_the_defaults() {
    let mut params = StaticParams::default();
    params
        .strings
        .insert("~image_path".to_owned(), "/tmp/x.png".to_owned());
    params.floats.insert("~min".to_owned(), 0.2);
    params.floats.insert("~max".to_owned(), 0.8);
    params.floats.insert("~publish_rate".to_owned(), 50.0);
    params.ints.insert("~steps_per_movement".to_owned(), 10);

    let config = NodeConfig::from_params(&params).unwrap();
    assert_approx_eq!(config.min, 0.2);
    assert_approx_eq!(config.max, 0.8);
    assert_approx_eq!(config.publish_rate, 50.0);
    assert_eq!(config.steps_per_movement, 10);
}

#[test]
fn inverted_bounds_are_rejected() {
    let mut params = StaticParams::default();
    params
        .strings
        .insert("~image_path".to_owned(), "/tmp/x.png".to_owned());
    params.floats.insert("~min".to_owned(), 1.0);
    params.floats.insert("~max".to_owned(), 0.0);

    let result = NodeConfig::from_params(&params);
    assert!(matches!(result, Err(Error::InvalidBounds(..))));
}

#[test]
fn non_positive_publish_rate_is_rejected() {
    let mut params = StaticParams::default();
    params
        .strings
        .insert("~image_path".to_owned(), "/tmp/x.png".to_owned());
    params.floats.insert("~publish_rate".to_owned(), 0.0);

    let result = NodeConfig::from_params(&params);
    assert!(matches!(result, Err(Error::InvalidPublishRate(_))));
}

#[test]
fn wires_one_movement_into_one_publisher() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = write_movement_image(&dir);

    let config = NodeConfig::from_str(
        &format!(
            "image_path = {:?}\nmin = 0.2\nmax = 0.8\npublish_rate = 50.0\n",
            image_path
        ),
        dir.path().join("node.toml"),
    )
    .unwrap();

    let movement = config.create_movement().unwrap();
    assert_eq!(movement.path(), image_path);

    let publisher = config.create_publisher().unwrap();
    assert_eq!(publisher.movement_count(), 1);
    assert_approx_eq!(publisher.min_value(), 0.2);
    assert_approx_eq!(publisher.max_value(), 0.8);
    assert_approx_eq!(publisher.publish_rate(), 50.0);
}

#[test]
fn wiring_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = write_movement_image(&dir);

    let mut params = StaticParams::default();
    params.strings.insert(
        "~image_path".to_owned(),
        image_path.to_str().unwrap().to_owned(),
    );
    params.floats.insert("~min".to_owned(), 0.2);
    params.floats.insert("~max".to_owned(), 0.8);
    params.floats.insert("~publish_rate".to_owned(), 50.0);

    let first = NodeConfig::from_params(&params).unwrap();
    let second = NodeConfig::from_params(&params).unwrap();

    for config in [&first, &second] {
        let publisher = config.create_publisher().unwrap();
        assert_eq!(publisher.movement_count(), 1);
        assert_approx_eq!(publisher.min_value(), 0.2);
        assert_approx_eq!(publisher.max_value(), 0.8);
        assert_approx_eq!(publisher.publish_rate(), 50.0);
        assert_eq!(publisher.steps_per_movement(), 1000);
    }
}

#[test]
fn unknown_config_keys_are_rejected() {
    let result = NodeConfig::from_str(
        "image_path = \"/tmp/x.png\"\nbitmap = \"typo\"\n",
        PathBuf::from("node.toml"),
    );
    assert!(matches!(result, Err(Error::TomlParseFailure(..))));
}

#[test]
fn missing_config_file_is_reported() {
    let result = NodeConfig::try_new("config/does_not_exist.toml");
    assert!(matches!(result, Err(Error::NoFile(..))));
}
