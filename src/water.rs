//! The water body: surface waves, splashes and droplets behind one API.

use crate::config::{PhysicsConstants, WaterConfig};
use crate::contour::Contour;
use crate::droplet::DropletPool;
use crate::error::WaterError;
use crate::float::Float;
use crate::joint::WaveJoint;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::splash::SplashSpawner;
use crate::surface::SurfaceField;
use crate::updatable::Updatable;
use crate::vec::Vec2;

/// Lifecycle of a simulation.
///
/// Construction applies the default tuning, so a simulation is `Ready` from
/// the moment it exists and `Stepping` once it has been updated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimulationState {
    Ready,
    Stepping,
}

/// Fill color handed to the renderer. Opaque to the simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }
}

impl Default for Rgba {
    /// Translucent blue.
    fn default() -> Self {
        Rgba::new(0.0, 0.0, 1.0, 0.5)
    }
}

/// 2D water body driven by fixed time steps and splash events.
///
/// Coordinates are field-local: x spans `[-width/2, width/2]` and the resting
/// surface sits at `surface_height`. Splash positions are given in world x,
/// where the field spans `[0, width]`.
pub struct WaterSimulation<F: Float> {
    config: WaterConfig<F>,
    constants: PhysicsConstants<F>,
    surface: SurfaceField<F>,
    droplets: DropletPool<F>,
    spawner: SplashSpawner,
    contour: Contour<F>,
    color: Rgba,
    state: SimulationState,
}

impl<F: Float> WaterSimulation<F> {
    /// Create a resting water body with the default tuning.
    pub fn try_new(width: F, num_joints: usize, surface_height: F) -> Result<Self, WaterError> {
        let config = WaterConfig::default();
        let surface = SurfaceField::try_new(
            width,
            num_joints,
            surface_height,
            config.tension,
            config.damping,
            config.spread,
        )?;

        let mut sim = WaterSimulation {
            config,
            constants: PhysicsConstants::default(),
            surface,
            droplets: DropletPool::new(),
            spawner: SplashSpawner::default(),
            contour: Contour::new(),
            color: Rgba::default(),
            state: SimulationState::Ready,
        };
        sim.reset();
        sim.render();

        log::debug!(
            "water created: width={} joints={} surface_height={}",
            width, num_joints, surface_height
        );
        Ok(sim)
    }

    /// Fail-fast variant of [`WaterSimulation::try_new`].
    ///
    /// # Panics
    /// Panics when `num_joints < 2` or `width` is not positive and finite.
    pub fn new(width: F, num_joints: usize, surface_height: F) -> Self {
        match Self::try_new(width, num_joints, surface_height) {
            Ok(sim) => sim,
            Err(err) => panic!("invalid water simulation: {}", err),
        }
    }

    /// Replace the physics constants at construction.
    pub fn with_constants(mut self, constants: PhysicsConstants<F>) -> Result<Self, WaterError> {
        self.set_constants(constants)?;
        Ok(self)
    }

    /// Reseed the droplet velocity generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.spawner.reseed(seed);
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Restore the default tuning. The current waves and droplets are kept.
    pub fn reset(&mut self) {
        self.apply_tuning(WaterConfig::default());
        log::debug!("water tuning reset to defaults");
    }

    /// Replace every tuning value at once.
    pub fn set_tuning(&mut self, config: WaterConfig<F>) -> Result<(), WaterError> {
        config.validate()?;
        self.apply_tuning(config);
        log::debug!("water tuning changed: {:?}", config);
        Ok(())
    }

    fn apply_tuning(&mut self, config: WaterConfig<F>) {
        self.surface.set_spring(config.tension, config.damping);
        self.surface.set_spread(config.spread);
        self.config = config;
    }

    pub fn set_constants(&mut self, constants: PhysicsConstants<F>) -> Result<(), WaterError> {
        constants.validate()?;
        self.droplets.set_max_active(constants.max_droplets);
        self.constants = constants;
        Ok(())
    }

    pub fn set_color(&mut self, color: Rgba) { self.color = color; }
    pub fn color(&self) -> Rgba { self.color }

    pub fn set_surface_height(&mut self, surface_height: F) {
        self.surface.set_surface_height(surface_height);
    }

    /// Advance waves then droplets by one fixed step.
    pub fn update(&mut self, dt: F) {
        self.update_observed(dt, &mut NoOpStepObserver);
    }

    pub fn update_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        self.state = SimulationState::Stepping;

        self.surface.step(dt, self.constants.velocity_scale, self.constants.spread_passes, observer);

        let culled = self.droplets.update(
            dt,
            self.constants.gravity,
            self.constants.droplet_radius,
            self.surface.surface_height() - self.constants.cull_margin,
        );
        if culled > 0 {
            log::trace!("culled {} droplets", culled);
        }
        observer.on_droplets_culled(culled);

        observer.on_step_complete();
    }

    /// Splash at world x touching only the nearest joint.
    pub fn splash(&mut self, x_world: F, force: F) -> usize {
        self.splash_with_width(x_world, force, F::zero())
    }

    /// Splash at world x, spreading the impulse over `width`.
    /// Returns the number of droplets spawned. Non-finite input is ignored.
    pub fn splash_with_width(&mut self, x_world: F, force: F, width: F) -> usize {
        self.splash_observed(x_world, force, width, &mut NoOpStepObserver)
    }

    pub fn splash_observed<O: StepObserver>(
        &mut self,
        x_world: F,
        force: F,
        width: F,
        observer: &mut O,
    ) -> usize {
        if !(x_world.is_finite() && force.is_finite() && width.is_finite()) {
            log::warn!(
                "ignoring splash with non-finite input: x={} force={} width={}",
                x_world, force, width
            );
            return 0;
        }

        let epicenter = self.surface.apply_impulse(x_world, force, width);

        let origin = Vec2::new(self.surface.to_local(x_world), self.surface.surface_height());
        let count = SplashSpawner::droplet_count(force, &self.config, &self.constants);
        for _ in 0..count {
            let velocity = self.spawner.sample_velocity(force, &self.config, &self.constants);
            self.droplets.spawn(origin, velocity, self.config.droplet_size);
        }

        log::debug!(
            "splash at x={} force={} width={}: joint {} hit, {} droplets",
            x_world, force, width, epicenter, count
        );
        observer.on_splash(epicenter, count);
        count
    }

    /// Rebuild the outline from the current joints and return it.
    ///
    /// Call once per frame, after the frame's steps.
    pub fn render(&mut self) -> &Contour<F> {
        self.contour.rebuild(
            self.surface.joints(),
            self.surface.surface_height(),
            self.surface.width(),
        );
        &self.contour
    }

    /// The outline built by the last [`WaterSimulation::render`].
    pub fn contour(&self) -> &Contour<F> { &self.contour }

    /// Position and scale of every live droplet.
    pub fn droplets(&self) -> impl Iterator<Item = (Vec2<F>, F)> + '_ {
        self.droplets.iter().map(|(_, d)| (d.position, d.scale))
    }

    /// Absolute surface height at the joint nearest to world x.
    pub fn surface_height_at(&self, x_world: F) -> F {
        self.surface.height_at(x_world)
    }

    pub fn surface_height(&self) -> F { self.surface.surface_height() }
    pub fn width(&self) -> F { self.surface.width() }
    pub fn joints(&self) -> &[WaveJoint<F>] { self.surface.joints() }
    pub fn surface(&self) -> &SurfaceField<F> { &self.surface }
    pub fn droplet_pool(&self) -> &DropletPool<F> { &self.droplets }
    pub fn config(&self) -> &WaterConfig<F> { &self.config }
    pub fn constants(&self) -> &PhysicsConstants<F> { &self.constants }
    pub fn state(&self) -> SimulationState { self.state }
}

impl<F: Float> Updatable<F> for WaterSimulation<F> {
    fn update(&mut self, dt: F) {
        WaterSimulation::update(self, dt);
    }
}
