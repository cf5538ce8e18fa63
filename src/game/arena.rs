//! Actor Storage
//!
//! Every actor lives in a slot. A slot carries a generation that moves on
//! each time its actor is removed, and an `ActorId` is only honored while
//! its generation matches. Enemies can hold ids to their targets; once a
//! target is despawned its id stops resolving, even if a new actor later
//! takes the same slot.
//!
//! A separate list remembers spawn order so per-frame passes visit actors
//! in the order they were created, whatever slot they landed in.

use super::actor::Actor;

/// A non-owning handle to an actor owned by the `GameMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId {
    index: u32,
    generation: u32,
}

impl ActorId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot in the arena
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

struct Slot {
    generation: u32,
    actor: Option<Actor>,
}

pub struct ActorArena {
    slots: Vec<Slot>,
    /// Live ids, oldest first
    order: Vec<ActorId>,
}

impl ActorArena {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Take ownership of an actor. It lands in the lowest empty slot and
    /// goes to the back of the order.
    pub fn insert(&mut self, actor: Actor) -> ActorId {
        let index = match self.slots.iter().position(|slot| slot.actor.is_none()) {
            Some(index) => index,
            None => {
                self.slots.push(Slot { generation: 0, actor: None });
                self.slots.len() - 1
            }
        };

        let slot = &mut self.slots[index];
        slot.actor = Some(actor);
        let id = ActorId::new(index as u32, slot.generation);
        self.order.push(id);
        id
    }

    /// Remove and return an actor. Stale ids return None.
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let slot = self.live_slot_mut(id)?;
        let actor = slot.actor.take();
        slot.generation = slot.generation.wrapping_add(1);

        self.order.retain(|&live| live != id);
        actor
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.actor.as_ref())
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.live_slot_mut(id).and_then(|slot| slot.actor.as_mut())
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.get(id).is_some()
    }

    /// Live ids in spawn order.
    pub fn ids(&self) -> &[ActorId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.order
            .iter()
            .filter_map(|&id| self.get(id).map(|actor| (id, actor)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Destroy every actor, oldest first, and invalidate all ids.
    pub fn clear(&mut self) {
        for id in self.order.drain(..) {
            let slot = &mut self.slots[id.index as usize];
            slot.actor = None;
            slot.generation = slot.generation.wrapping_add(1);
        }
    }

    fn live_slot_mut(&mut self, id: ActorId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation && slot.actor.is_some())
    }
}

impl Default for ActorArena {
    fn default() -> Self {
        Self::new()
    }
}
