//! Pooled splash droplets.
//!
//! Droplets live in an arena of slots. A slot is either live (listed in the
//! active set, integrated every step) or pooled (listed in the free-list,
//! inert, waiting to be reused). Slots are never deallocated, so a stale
//! [`DropletId`] can at worst point at a reused droplet, never at freed memory.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Handle to a droplet slot in a [`DropletPool`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DropletId(usize);

impl DropletId {
    pub fn index(self) -> usize { self.0 }
}

/// A ballistic particle ejected by a splash.
#[derive(Clone, Debug)]
pub struct Droplet<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub scale: F,
    live: bool,
}

impl<F: Float> Droplet<F> {
    fn new(position: Vec2<F>, velocity: Vec2<F>, scale: F) -> Self {
        Droplet { position, velocity, scale, live: true }
    }

    /// Constant-gravity ballistic step.
    pub fn integrate(&mut self, dt: F, gravity: F) {
        self.velocity.y = self.velocity.y + gravity * dt;
        self.position = self.position + self.velocity.scale(dt);
    }
}

/// Arena of droplets with an index free-list.
pub struct DropletPool<F: Float> {
    slots: AllocVec<Droplet<F>>,
    /// Live slot indices, oldest spawn first.
    active: AllocVec<usize>,
    free: AllocVec<usize>,
    max_active: Option<usize>,
}

impl<F: Float> DropletPool<F> {
    pub fn new() -> Self {
        DropletPool {
            slots: AllocVec::new(),
            active: AllocVec::new(),
            free: AllocVec::new(),
            max_active: None,
        }
    }

    /// Pool that evicts its oldest live droplet once `max_active` are live.
    /// A cap of zero is treated as one.
    pub fn with_max_active(max_active: Option<usize>) -> Self {
        DropletPool { max_active: max_active.map(|m| m.max(1)), ..Self::new() }
    }

    pub fn set_max_active(&mut self, max_active: Option<usize>) {
        self.max_active = max_active.map(|m| m.max(1));
        self.enforce_cap(0);
    }

    /// Make a droplet live, reusing a pooled slot when one is available.
    pub fn spawn(&mut self, position: Vec2<F>, velocity: Vec2<F>, scale: F) -> DropletId {
        self.enforce_cap(1);

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Droplet::new(position, velocity, scale);
                index
            }
            None => {
                self.slots.push(Droplet::new(position, velocity, scale));
                self.slots.len() - 1
            }
        };
        self.active.push(index);
        DropletId(index)
    }

    /// Evict oldest droplets so that `incoming` more still fit under the cap.
    fn enforce_cap(&mut self, incoming: usize) {
        let Some(max) = self.max_active else { return };
        let allowed = max.saturating_sub(incoming);
        if self.active.len() <= allowed {
            return;
        }

        let excess = self.active.len() - allowed;
        log::warn!("droplet cap {} reached, evicting {} oldest droplets", max, excess);
        for index in self.active.drain(..excess) {
            self.slots[index].live = false;
            self.free.push(index);
        }
    }

    /// Integrate live droplets and cull those that fell below `cull_below`.
    ///
    /// A droplet is culled once its top edge (`y + scale * radius`) is under
    /// `cull_below`. Returns the number culled.
    pub fn update(&mut self, dt: F, gravity: F, radius: F, cull_below: F) -> usize {
        let slots = &mut self.slots;
        let free = &mut self.free;
        let before = self.active.len();

        self.active.retain(|&index| {
            let droplet = &mut slots[index];
            droplet.integrate(dt, gravity);
            if droplet.position.y + droplet.scale * radius < cull_below {
                droplet.live = false;
                free.push(index);
                false
            } else {
                true
            }
        });

        before - self.active.len()
    }

    /// Return a live droplet to the free-list.
    ///
    /// Returns `false` without touching the pool when `id` is not live.
    pub fn remove(&mut self, id: DropletId) -> bool {
        match self.slots.get(id.0) {
            Some(droplet) if droplet.live => {}
            _ => return false,
        }
        if let Some(pos) = self.active.iter().position(|&index| index == id.0) {
            self.active.remove(pos);
        }
        self.slots[id.0].live = false;
        self.free.push(id.0);
        true
    }

    /// Pool every live droplet.
    pub fn clear(&mut self) {
        for index in self.active.drain(..) {
            self.slots[index].live = false;
            self.free.push(index);
        }
    }

    pub fn get(&self, id: DropletId) -> Option<&Droplet<F>> {
        self.slots.get(id.0).filter(|d| d.live)
    }

    /// Live droplets, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (DropletId, &Droplet<F>)> + '_ {
        self.active.iter().map(move |&index| (DropletId(index), &self.slots[index]))
    }

    /// Number of live droplets.
    pub fn active_count(&self) -> usize { self.active.len() }

    /// Number of pooled droplets waiting for reuse.
    pub fn pooled_count(&self) -> usize { self.free.len() }

    /// Total slots ever allocated.
    pub fn capacity(&self) -> usize { self.slots.len() }

    pub fn max_active(&self) -> Option<usize> { self.max_active }
}

impl<F: Float> Default for DropletPool<F> {
    fn default() -> Self {
        Self::new()
    }
}
