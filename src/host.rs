//! Host-side driving of the simulation: fixed time steps and falling bodies.
//!
//! The water itself knows nothing about frames or input. A host feeds it
//! fixed steps from an accumulator and turns bodies that cross the surface
//! into splashes. [`HostLoop`] is a ready-made host with that behavior.

use crate::contour::Contour;
use crate::error::WaterError;
use crate::float::Float;
use crate::updatable::Updatable;
use crate::vec::Vec2;
use crate::water::WaterSimulation;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;

/// Accumulator that turns variable frame times into fixed steps.
pub struct FixedTimestep<F: Float> {
    step: F,
    accumulator: F,
    max_steps_per_frame: usize,
}

impl<F: Float> FixedTimestep<F> {
    /// Default step: 1/500 s.
    pub fn default_step() -> F {
        F::one() / F::from_f32(500.0)
    }

    pub fn try_new(step: F) -> Result<Self, WaterError> {
        if !step.is_finite() || step <= F::zero() {
            return Err(WaterError::InvalidTimeStep);
        }
        Ok(FixedTimestep {
            step,
            accumulator: F::zero(),
            max_steps_per_frame: 250,
        })
    }

    /// Cap on steps per frame; time beyond it is dropped.
    pub fn with_max_steps_per_frame(mut self, max_steps: usize) -> Self {
        self.max_steps_per_frame = max_steps.max(1);
        self
    }

    /// Add a frame's worth of time and run `step_fn` once per whole step.
    ///
    /// Leftover time stays in the accumulator for the next frame. Returns
    /// the number of steps run.
    pub fn advance(&mut self, frame_dt: F, mut step_fn: impl FnMut(F)) -> usize {
        if frame_dt > F::zero() {
            self.accumulator = self.accumulator + frame_dt;
        }

        let mut steps = 0;
        while self.accumulator >= self.step {
            if steps == self.max_steps_per_frame {
                log::warn!(
                    "frame needed more than {} steps, dropping {} s",
                    self.max_steps_per_frame, self.accumulator
                );
                self.accumulator = F::zero();
                break;
            }
            step_fn(self.step);
            self.accumulator = self.accumulator - self.step;
            steps += 1;
        }
        steps
    }

    /// Empty the accumulator, returning the time it held.
    pub fn take_remainder(&mut self) -> F {
        let remainder = self.accumulator;
        self.accumulator = F::zero();
        remainder
    }

    /// Leftover time not yet stepped.
    pub fn remainder(&self) -> F { self.accumulator }

    /// Leftover as a fraction of one step, for interpolating between states.
    pub fn alpha(&self) -> F { self.accumulator / self.step }

    pub fn step(&self) -> F { self.step }
}

/// An object dropped into the scene that splashes once when it hits the water.
#[derive(Clone, Debug)]
pub struct FallingBody<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub half_height: F,
    above_water: bool,
}

impl<F: Float> FallingBody<F> {
    pub fn new(position: Vec2<F>, half_height: F) -> Self {
        FallingBody {
            position,
            velocity: Vec2::zero(),
            half_height,
            above_water: true,
        }
    }

    pub fn integrate(&mut self, dt: F, gravity: F) {
        self.velocity.y = self.velocity.y + gravity * dt;
        self.position = self.position + self.velocity.scale(dt);
    }

    pub fn is_above_water(&self) -> bool { self.above_water }

    /// Fully below the bottom of the scene.
    pub fn is_out_of_view(&self) -> bool {
        self.position.y < -self.half_height
    }
}

/// Reference host: steps the water at a fixed rate, drops bodies into it and
/// rebuilds the contour once per frame.
pub struct HostLoop<F: Float> {
    water: WaterSimulation<F>,
    timestep: FixedTimestep<F>,
    bodies: AllocVec<FallingBody<F>>,
    subsystems: AllocVec<Box<dyn Updatable<F>>>,
    splash_width: F,
    splash_force_multiplier: F,
    body_half_height: F,
    flush_remainder: bool,
    splash_on_baseline: bool,
}

impl<F: Float> HostLoop<F> {
    pub fn new(water: WaterSimulation<F>, step: F) -> Result<Self, WaterError> {
        Ok(HostLoop {
            water,
            timestep: FixedTimestep::try_new(step)?,
            bodies: AllocVec::new(),
            subsystems: AllocVec::new(),
            splash_width: F::from_f32(20.0),
            splash_force_multiplier: F::from_f32(0.125),
            body_half_height: F::from_f32(16.0),
            flush_remainder: false,
            splash_on_baseline: false,
        })
    }

    /// Splash width and the factor turning impact speed into splash force.
    pub fn with_splash(mut self, width: F, force_multiplier: F) -> Self {
        self.splash_width = width;
        self.splash_force_multiplier = force_multiplier;
        self
    }

    pub fn with_body_half_height(mut self, half_height: F) -> Self {
        self.body_half_height = half_height;
        self
    }

    /// Also run the leftover fraction of each frame as a final short step.
    pub fn with_flush_remainder(mut self, flush: bool) -> Self {
        self.flush_remainder = flush;
        self
    }

    /// Splash when a body crosses the flat baseline instead of the current
    /// wave height under it.
    pub fn with_baseline_crossing(mut self, baseline: bool) -> Self {
        self.splash_on_baseline = baseline;
        self
    }

    pub fn with_max_steps_per_frame(mut self, max_steps: usize) -> Self {
        self.timestep = self.timestep.with_max_steps_per_frame(max_steps);
        self
    }

    /// Register an independent subsystem updated once per frame.
    ///
    /// Subsystems receive the whole frame time, not the fixed step and not
    /// the leftover accumulator.
    pub fn add_subsystem(&mut self, subsystem: Box<dyn Updatable<F>>) {
        self.subsystems.push(subsystem);
    }

    /// Drop a body at world position (x, y).
    pub fn drop_body(&mut self, x: F, y: F) {
        self.bodies.push(FallingBody::new(Vec2::new(x, y), self.body_half_height));
    }

    /// Run one frame: fixed steps, subsystems, then one contour rebuild.
    /// Returns the number of fixed steps taken.
    pub fn frame(&mut self, frame_dt: F) -> usize {
        let water = &mut self.water;
        let bodies = &mut self.bodies;
        let splash = SplashParams {
            width: self.splash_width,
            force_multiplier: self.splash_force_multiplier,
            on_baseline: self.splash_on_baseline,
        };

        let steps = self
            .timestep
            .advance(frame_dt, |dt| fixed_update(water, bodies, splash, dt));

        if self.flush_remainder {
            let remainder = self.timestep.take_remainder();
            if remainder > F::zero() {
                fixed_update(&mut self.water, &mut self.bodies, splash, remainder);
            }
        }

        for subsystem in self.subsystems.iter_mut() {
            subsystem.update(frame_dt);
        }

        self.water.render();
        steps
    }

    pub fn contour(&self) -> &Contour<F> { self.water.contour() }

    /// Position and scale of every live droplet.
    pub fn droplets(&self) -> impl Iterator<Item = (Vec2<F>, F)> + '_ {
        self.water.droplets()
    }

    pub fn bodies(&self) -> &[FallingBody<F>] { &self.bodies }
    pub fn water(&self) -> &WaterSimulation<F> { &self.water }
    pub fn water_mut(&mut self) -> &mut WaterSimulation<F> { &mut self.water }
    pub fn timestep(&self) -> &FixedTimestep<F> { &self.timestep }
}

#[derive(Copy, Clone)]
struct SplashParams<F: Float> {
    width: F,
    force_multiplier: F,
    on_baseline: bool,
}

fn fixed_update<F: Float>(
    water: &mut WaterSimulation<F>,
    bodies: &mut AllocVec<FallingBody<F>>,
    splash: SplashParams<F>,
    dt: F,
) {
    water.update(dt);

    let gravity = water.constants().gravity;
    for body in bodies.iter_mut() {
        body.integrate(dt, gravity);

        let surface = if splash.on_baseline {
            water.surface_height()
        } else {
            water.surface_height_at(body.position.x)
        };
        if body.above_water && body.position.y <= surface {
            body.above_water = false;
            let force = -body.velocity.y * splash.force_multiplier;
            water.splash_with_width(body.position.x, force, splash.width);
        }
    }

    let before = bodies.len();
    bodies.retain(|body| !body.is_out_of_view());
    if bodies.len() < before {
        log::debug!("removed {} bodies below the scene", before - bodies.len());
    }
}
