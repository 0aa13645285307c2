use waterline::{HostLoop, Rgba, WaterConfig, WaterSimulation};
use wasm_bindgen::prelude::*;

// ---- Water Demo ----

#[wasm_bindgen]
pub struct WaterDemo {
    host: HostLoop<f32>,
}

#[wasm_bindgen]
impl WaterDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, joints: usize, surface_height: f32) -> Result<WaterDemo, JsError> {
        let water = WaterSimulation::try_new(width, joints, surface_height)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let host = HostLoop::new(water, 1.0 / 500.0).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WaterDemo { host })
    }

    /// Drop a box at scene coordinates (y up, water bottom at 0).
    pub fn drop_box(&mut self, x: f32, y: f32) {
        self.host.drop_body(x, y);
    }

    pub fn splash(&mut self, x: f32, force: f32, width: f32) {
        self.host.water_mut().splash_with_width(x, force, width);
    }

    pub fn set_tuning(&mut self, tension: f32, damping: f32, spread: f32) -> Result<(), JsError> {
        let config = WaterConfig::new()
            .with_tension(tension)
            .with_damping(damping)
            .with_spread(spread);
        self.host
            .water_mut()
            .set_tuning(config)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn reset(&mut self) {
        self.host.water_mut().reset();
    }

    pub fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.host.water_mut().set_color(Rgba::new(r, g, b, a));
    }

    /// Advance by one display frame. Returns the fixed steps taken.
    pub fn frame(&mut self, dt: f32) -> usize {
        self.host.frame(dt)
    }

    /// Returns flat [x0, y0, x1, y1, ...] of the closed water outline,
    /// in water-local x (centered on the water).
    pub fn contour(&self) -> Vec<f32> {
        let points = self.host.contour().points();
        let mut out = Vec::with_capacity(points.len() * 2);
        for p in points {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns flat [x0, y0, scale0, x1, y1, scale1, ...] of live droplets.
    pub fn droplets(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for (pos, scale) in self.host.droplets() {
            out.push(pos.x);
            out.push(pos.y);
            out.push(scale);
        }
        out
    }

    /// Returns flat [x0, y0, x1, y1, ...] of falling boxes.
    pub fn boxes(&self) -> Vec<f32> {
        let bodies = self.host.bodies();
        let mut out = Vec::with_capacity(bodies.len() * 2);
        for body in bodies {
            out.push(body.position.x);
            out.push(body.position.y);
        }
        out
    }

    pub fn color(&self) -> Vec<f32> {
        let c = self.host.water().color();
        vec![c.r, c.g, c.b, c.a]
    }
}
