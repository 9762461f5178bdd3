use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use movements::{MovementFromImage, MovementPublisher};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Error;

/// One-shot view of the node's parameters, resolved at startup.
///
/// Resolved once — from the parameter store of the hosting node or from a
/// TOML file — and immutable afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    /// Image whose drawn curve defines the movement.
    pub image_path: PathBuf,
    /// Lower bound of the published range.
    #[serde(default = "default_min")]
    pub min: f64,
    /// Upper bound of the published range.
    #[serde(default = "default_max")]
    pub max: f64,
    /// Publishing cadence in cycles per second.
    #[serde(default = "default_publish_rate")]
    pub publish_rate: f64,
    /// Discrete steps a movement is walked through per pass.
    #[serde(default = "default_steps_per_movement")]
    pub steps_per_movement: usize,
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    1.5
}

fn default_publish_rate() -> f64 {
    100.0
}

fn default_steps_per_movement() -> usize {
    1000
}

/// Read access to the middleware parameter store.
///
/// The node reads each parameter exactly once through this trait; tests
/// substitute a map-backed implementation.
pub trait ParamSource {
    fn get_string(&self, name: &str) -> Option<String>;
    fn get_f64(&self, name: &str) -> Option<f64>;
    fn get_usize(&self, name: &str) -> Option<usize>;
}

/// Node-private parameters of the hosting ROS node.
///
/// The node must be initialized (see [`movements::init`]) before reading
/// through this.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosParams;

impl ParamSource for RosParams {
    fn get_string(&self, name: &str) -> Option<String> {
        rosrust::param(name).and_then(|param| param.get::<String>().ok())
    }

    fn get_f64(&self, name: &str) -> Option<f64> {
        rosrust::param(name).and_then(|param| param.get::<f64>().ok())
    }

    fn get_usize(&self, name: &str) -> Option<usize> {
        // ROS parameters are XmlRpc values; integers arrive as i32.
        rosrust::param(name)
            .and_then(|param| param.get::<i32>().ok())
            .and_then(|value| usize::try_from(value).ok())
    }
}

impl NodeConfig {
    /// Resolves the configuration from the parameter store, defaulting
    /// everything but `image_path`.
    pub fn from_params(params: &impl ParamSource) -> Result<Self, Error> {
        let image_path = params.get_string("~image_path").ok_or(Error::NoImagePath)?;
        let config = Self {
            image_path: PathBuf::from(image_path),
            min: params.get_f64("~min").unwrap_or_else(default_min),
            max: params.get_f64("~max").unwrap_or_else(default_max),
            publish_rate: params
                .get_f64("~publish_rate")
                .unwrap_or_else(default_publish_rate),
            steps_per_movement: params
                .get_usize("~steps_per_movement")
                .unwrap_or_else(default_steps_per_movement),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn try_new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let s =
            fs::read_to_string(path).map_err(|e| Error::NoFile(path.to_path_buf(), e))?;
        Self::from_str(&s, path)
    }

    pub fn from_str<P: Into<PathBuf>>(s: &str, path: P) -> Result<Self, Error> {
        let config: Self =
            toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.into(), e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if !(self.min <= self.max) {
            return Err(Error::InvalidBounds(self.min, self.max));
        }
        if !self.publish_rate.is_finite() || self.publish_rate <= 0.0 {
            return Err(Error::InvalidPublishRate(self.publish_rate));
        }
        if self.steps_per_movement == 0 {
            return Err(Error::InvalidStepCount);
        }
        Ok(())
    }

    /// Builds the movement bound to `image_path`.
    pub fn create_movement(&self) -> Result<MovementFromImage, Error> {
        Ok(MovementFromImage::try_new(&self.image_path)?)
    }

    /// Builds the publisher and registers the image movement with it.
    pub fn create_publisher(&self) -> Result<MovementPublisher, Error> {
        let movement = self.create_movement()?;
        let mut publisher = MovementPublisher::new(self.min, self.max, self.publish_rate)
            .with_steps_per_movement(self.steps_per_movement);
        publisher.add_movement(Arc::new(movement));
        debug!("publisher wired: {publisher:?}");
        Ok(publisher)
    }
}
