/// A movement to replay: a sequence of normalized targets in `[0.0, 1.0]`.
pub trait Movement: Send + Sync {
    /// Target at `fraction` of the way through the movement.
    ///
    /// `fraction` is expected in `0.0..=1.0`; anything outside yields `None`,
    /// as does a position where the movement defines no target. An undefined
    /// target means nothing is published for that step.
    fn target_at(&self, fraction: f64) -> Option<f64>;

    /// Number of discrete targets backing this movement.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
