/// Squared-error accumulator between published targets and feedback samples.
///
/// Shared between the publishing loop (which records targets) and the
/// feedback subscriber (which records inputs); the loop drains it after each
/// completed movement pass.
#[derive(Debug, Default)]
pub struct MseState {
    last_target: Option<f64>,
    sum_squared_error: f64,
    samples: u32,
}

impl MseState {
    pub fn record_target(&mut self, target: f64) {
        self.last_target = Some(target);
    }

    /// Feedback sample from the controlled joint.
    ///
    /// Ignored until a first target has been published; there is nothing to
    /// compare against before that.
    pub fn record_input(&mut self, input: f64) {
        if let Some(target) = self.last_target {
            let error = input - target;
            self.sum_squared_error += error * error;
            self.samples += 1;
        }
    }

    /// Mean squared error accumulated so far, resetting the accumulator.
    ///
    /// `None` when no feedback arrived since the last drain. The last target
    /// is kept so feedback keeps being attributed across passes.
    pub fn take(&mut self) -> Option<f64> {
        if self.samples == 0 {
            return None;
        }
        let mse = self.sum_squared_error / f64::from(self.samples);
        self.sum_squared_error = 0.0;
        self.samples = 0;
        Some(mse)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn averages_squared_errors() {
        let mut mse = MseState::default();
        mse.record_target(1.0);
        mse.record_input(1.1);
        mse.record_input(0.9);
        assert_approx_eq!(mse.take().unwrap(), 0.01);
    }

    #[test]
    fn input_before_any_target_is_ignored() {
        let mut mse = MseState::default();
        mse.record_input(0.5);
        assert!(mse.take().is_none());
    }

    #[test]
    fn take_resets_the_accumulator_but_keeps_the_target() {
        let mut mse = MseState::default();
        mse.record_target(2.0);
        mse.record_input(3.0);
        assert_approx_eq!(mse.take().unwrap(), 1.0);
        assert!(mse.take().is_none());

        mse.record_input(2.5);
        assert_approx_eq!(mse.take().unwrap(), 0.25);
    }
}
