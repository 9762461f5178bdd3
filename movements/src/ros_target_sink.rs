use std::sync::{Arc, Mutex};

use crate::{Error, MseState, TargetSink};

mod msg {
    rosrust::rosmsg_include!(std_msgs / Float64);
}

use msg::std_msgs::Float64;

const TARGETS_TOPIC: &str = "~targets";
const INPUT_TOPIC: &str = "~input";
const MSE_TOPIC: &str = "~mse_out";

/// Publishes movement targets on the node-private `targets` topic and
/// reports the mean squared error of the `input` feedback on `mse_out`.
pub struct RosTargetSink {
    targets: rosrust::Publisher<Float64>,
    mse_out: rosrust::Publisher<Float64>,
    _input: rosrust::Subscriber,
}

impl RosTargetSink {
    /// The hosting node must be initialized (see [`crate::init`]) first.
    pub fn try_new(mse: Arc<Mutex<MseState>>) -> Result<Self, Error> {
        let targets = rosrust::publish(TARGETS_TOPIC, 5).map_err(connection_error)?;
        let mse_out = rosrust::publish(MSE_TOPIC, 5).map_err(connection_error)?;
        let _input = rosrust::subscribe(INPUT_TOPIC, 2, move |input: Float64| {
            mse.lock().unwrap().record_input(input.data);
        })
        .map_err(connection_error)?;
        Ok(Self {
            targets,
            mse_out,
            _input,
        })
    }
}

impl TargetSink for RosTargetSink {
    fn publish_target(&self, target: f64) -> Result<(), Error> {
        self.targets
            .send(Float64 { data: target })
            .map_err(connection_error)
    }

    fn publish_mse(&self, mse: f64) -> Result<(), Error> {
        self.mse_out
            .send(Float64 { data: mse })
            .map_err(connection_error)
    }

    fn is_shutdown(&self) -> bool {
        !rosrust::is_ok()
    }
}

fn connection_error(err: impl std::fmt::Debug) -> Error {
    Error::Connection {
        message: format!("rosrust error: {err:?}"),
    }
}
