//! Step observer trait for monitoring simulation progress.

/// Trait for observing water simulation steps.
///
/// Implement this trait to monitor the solver (debug overlays, profiling,
/// tests). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after every joint has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each spread pass.
    fn on_spread_pass(&mut self, _pass: usize) {}

    /// Called after droplets were integrated, with the number culled this step.
    fn on_droplets_culled(&mut self, _count: usize) {}

    /// Called when a splash hit the joint at `joint_index` and spawned droplets.
    fn on_splash(&mut self, _joint_index: usize, _spawned: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that tallies every callback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub integrations: usize,
    pub spread_passes: usize,
    pub droplets_culled: usize,
    pub splashes: usize,
    pub droplets_spawned: usize,
    pub steps: usize,
}

impl StepObserver for StepStats {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_spread_pass(&mut self, _pass: usize) {
        self.spread_passes += 1;
    }

    fn on_droplets_culled(&mut self, count: usize) {
        self.droplets_culled += count;
    }

    fn on_splash(&mut self, _joint_index: usize, spawned: usize) {
        self.splashes += 1;
        self.droplets_spawned += spawned;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
