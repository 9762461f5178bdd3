use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    thread,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{Error, Movement, MseState, RosTargetSink};

/// Discrete steps a movement is walked through per pass.
const DEFAULT_STEPS_PER_MOVEMENT: usize = 1000;

/// Where the publishing loop sends its values.
///
/// The production implementation is [`RosTargetSink`]; tests substitute an
/// in-memory recorder.
pub trait TargetSink: Send + Sync {
    fn publish_target(&self, target: f64) -> Result<(), Error>;

    /// Mean squared error between published targets and received feedback,
    /// reported after each completed movement pass.
    fn publish_mse(&self, mse: f64) -> Result<(), Error>;

    /// True once the hosting middleware is shutting down.
    fn is_shutdown(&self) -> bool {
        false
    }
}

/// Requests a running [`MovementPublisher`] loop to stop.
///
/// Once fired, the publisher stays stopped.
#[derive(Debug, Clone)]
pub struct StopHandle {
    stop: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Replays registered movements at a fixed rate, scaled into `[min, max]`.
///
/// Movements are registered with [`add_movement`](Self::add_movement) before
/// the loop starts and replayed in registration order. The loop runs until
/// the middleware shuts down or a [`StopHandle`] is fired.
pub struct MovementPublisher {
    min: f64,
    max: f64,
    publish_rate: f64,
    steps_per_movement: usize,
    movements: Vec<Arc<dyn Movement>>,
    mse: Arc<Mutex<MseState>>,
    stop: Arc<AtomicBool>,
}

impl MovementPublisher {
    pub fn new(min: f64, max: f64, publish_rate: f64) -> Self {
        Self {
            min,
            max,
            publish_rate,
            steps_per_movement: DEFAULT_STEPS_PER_MOVEMENT,
            movements: Vec::new(),
            mse: Arc::new(Mutex::new(MseState::default())),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_steps_per_movement(mut self, steps_per_movement: usize) -> Self {
        self.steps_per_movement = steps_per_movement;
        self
    }

    /// Registers a movement. Order is preserved and duplicates are allowed.
    pub fn add_movement(&mut self, movement: Arc<dyn Movement>) {
        self.movements.push(movement);
    }

    pub fn min_value(&self) -> f64 {
        self.min
    }

    pub fn max_value(&self) -> f64 {
        self.max
    }

    pub fn publish_rate(&self) -> f64 {
        self.publish_rate
    }

    pub fn steps_per_movement(&self) -> usize {
        self.steps_per_movement
    }

    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop: Arc::clone(&self.stop),
        }
    }

    /// Publishes on the hosting node's topics until shutdown.
    ///
    /// The node must be initialized (see [`crate::init`]) before calling
    /// this.
    pub fn start(&self) -> Result<(), Error> {
        let sink = RosTargetSink::try_new(Arc::clone(&self.mse))?;
        self.run(&sink)
    }

    /// Replays every registered movement through `sink` until the sink
    /// reports shutdown or the [`StopHandle`] is fired.
    pub fn run(&self, sink: &dyn TargetSink) -> Result<(), Error> {
        if self.movements.is_empty() {
            return Err(Error::NoMovementRegistered);
        }
        if !(self.min <= self.max) {
            return Err(Error::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        if !self.publish_rate.is_finite() || self.publish_rate <= 0.0 {
            return Err(Error::InvalidPublishRate(self.publish_rate));
        }

        debug!(
            "publishing {} movement(s) at {} Hz within [{}, {}]",
            self.movements.len(),
            self.publish_rate,
            self.min,
            self.max
        );

        let period = Duration::from_secs_f64(1.0 / self.publish_rate);
        // Deadline-based pacing so slow cycles do not accumulate drift.
        let mut deadline = Instant::now();
        loop {
            for movement in &self.movements {
                for step in 0..self.steps_per_movement {
                    if self.stop.load(Ordering::Relaxed) || sink.is_shutdown() {
                        return Ok(());
                    }
                    let fraction = step as f64 / self.steps_per_movement as f64;
                    if let Some(target) = movement.target_at(fraction) {
                        let value = self.scale(target);
                        self.mse.lock().unwrap().record_target(value);
                        sink.publish_target(value)?;
                    }
                    deadline += period;
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                }
                if let Some(mse) = self.mse.lock().unwrap().take() {
                    sink.publish_mse(mse)?;
                }
            }
        }
    }

    fn scale(&self, target: f64) -> f64 {
        (self.min + target * (self.max - self.min)).clamp(self.min, self.max)
    }
}

impl fmt::Debug for MovementPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovementPublisher")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("publish_rate", &self.publish_rate)
            .field("steps_per_movement", &self.steps_per_movement)
            .field("movements", &self.movements.len())
            .finish()
    }
}
