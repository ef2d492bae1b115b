//! Scene container driving the per-frame sweep
//!
//! A [`World`] owns display objects, keeps their display order and runs
//! the frame: `pre_update` over every object in order, removal of objects
//! that were destroyed or asked to be, then `update` and `post_update`
//! over the objects that passed their update chain.

use std::sync::Arc;

use crate::capabilities::{core, destroy, overlap, Member};
use crate::display::{CallError, DisplayEvent, DisplayObject, UpdateOutcome};
use crate::foundation::collections::{DisplayList, HandleMap, ObjectId};
use crate::game::Game;

/// Counters for one `pre_update` sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Objects visited
    pub visited: usize,
    /// Objects whose whole chain passed
    pub ready: usize,
    /// Objects halted before the Core stage
    pub skipped: usize,
    /// Objects halted at or after the Core stage
    pub core_checked: usize,
    /// Objects removed after the sweep
    pub removed: usize,
}

/// Host scene container
#[derive(Debug)]
pub struct World {
    game: Arc<Game>,
    objects: HandleMap<DisplayObject>,
    display_list: DisplayList,
    ready: Vec<ObjectId>,
    pending_events: Vec<(ObjectId, DisplayEvent)>,
}

impl World {
    /// Create an empty world for a game
    pub fn new(game: Arc<Game>) -> Self {
        Self {
            game,
            objects: HandleMap::with_key(),
            display_list: DisplayList::new(),
            ready: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Game this world belongs to
    pub fn game(&self) -> &Arc<Game> {
        &self.game
    }

    /// Take ownership of an object and put it on top of the display list
    pub fn add(&mut self, object: impl Into<DisplayObject>) -> ObjectId {
        let mut object = object.into();
        object.in_world = !object.is_destroyed();
        let id = self.objects.insert(object);
        self.display_list.push(id);
        id
    }

    /// Detach an object without destroying it
    pub fn remove(&mut self, id: ObjectId) -> Option<DisplayObject> {
        self.display_list.remove(id);
        self.ready.retain(|&other| other != id);
        let mut object = self.objects.remove(id)?;
        object.in_world = false;
        Some(object)
    }

    /// Object by handle
    pub fn get(&self, id: ObjectId) -> Option<&DisplayObject> {
        self.objects.get(id)
    }

    /// Mutable object by handle
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut DisplayObject> {
        self.objects.get_mut(id)
    }

    /// Handles in display order, back to front
    pub fn ids(&self) -> Vec<ObjectId> {
        self.display_list.to_vec()
    }

    /// Display order
    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the world holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Call a display-list member (such as `bringToTop`) of an object
    ///
    /// Returns `Ok(false)` for handles not in this world.
    pub fn call_list(&mut self, id: ObjectId, name: &str) -> Result<bool, CallError> {
        let Some(object) = self.objects.get(id) else {
            return Ok(false);
        };
        let installed = object
            .kind()
            .surface()
            .get(name)
            .ok_or_else(|| CallError::MissingMember(name.to_string()))?;
        match installed.member {
            Member::ListMethod(method) => Ok(method(&mut self.display_list, id)),
            _ => Err(CallError::NotAMethod(name.to_string())),
        }
    }

    /// Whether `a`'s bounds overlap `b`'s, using `a`'s `overlap` member
    ///
    /// Returns `Ok(false)` when either handle is not in this world.
    pub fn overlap(&mut self, a: ObjectId, b: ObjectId) -> Result<bool, CallError> {
        let Some(other) = self.objects.get(b).map(DisplayObject::bounds) else {
            return Ok(false);
        };
        let Some(object) = self.objects.get_mut(a) else {
            return Ok(false);
        };
        let result = object.call(overlap::OVERLAP, &[other.into()])?;
        Ok(result.as_bool().unwrap_or(false))
    }

    /// Run every object's update chain once, in display order, then drop
    /// destroyed objects
    ///
    /// Objects flagged `pendingDestroy` are destroyed after the sweep.
    pub fn pre_update(&mut self) -> FrameStats {
        let mut stats = FrameStats::default();
        self.ready.clear();

        for id in self.display_list.to_vec() {
            let Some(object) = self.objects.get_mut(id) else {
                continue;
            };
            stats.visited += 1;
            match object.pre_update_outcome() {
                UpdateOutcome::Ready => {
                    stats.ready += 1;
                    self.ready.push(id);
                }
                UpdateOutcome::Skipped => stats.skipped += 1,
                UpdateOutcome::CoreChecked => stats.core_checked += 1,
            }
        }

        stats.removed = self.remove_destroyed();
        log::trace!(
            "pre_update: {} visited, {} ready, {} skipped, {} removed",
            stats.visited,
            stats.ready,
            stats.skipped,
            stats.removed
        );
        stats
    }

    fn remove_destroyed(&mut self) -> usize {
        let mut doomed = Vec::new();
        for id in self.display_list.iter() {
            let Some(object) = self.objects.get_mut(id) else {
                continue;
            };
            if object.fields.flag(core::PENDING_DESTROY) {
                destroy::destroy(object);
            }
            if object.is_destroyed() {
                doomed.push(id);
            }
        }

        for &id in &doomed {
            if let Some(mut object) = self.remove(id) {
                self.pending_events
                    .extend(object.drain_events().into_iter().map(|event| (id, event)));
            }
        }
        doomed.len()
    }

    /// Run `update` on every object that passed this frame's chain
    pub fn update(&mut self) -> Result<(), CallError> {
        for &id in &self.ready {
            if let Some(object) = self.objects.get_mut(id) {
                object.update()?;
            }
        }
        Ok(())
    }

    /// Run `postUpdate` on every object that passed this frame's chain
    pub fn post_update(&mut self) -> Result<(), CallError> {
        for &id in &self.ready {
            if let Some(object) = self.objects.get_mut(id) {
                object.post_update()?;
            }
        }
        Ok(())
    }

    /// Advance the game clock by one fixed step and run a whole frame
    pub fn step(&mut self) -> Result<FrameStats, CallError> {
        self.game.step();
        let stats = self.pre_update();
        self.update()?;
        self.post_update()?;
        Ok(stats)
    }

    /// Take every event raised since the last drain, removed objects first
    pub fn drain_events(&mut self) -> Vec<(ObjectId, DisplayEvent)> {
        let mut events = std::mem::take(&mut self.pending_events);
        for id in self.display_list.iter() {
            if let Some(object) = self.objects.get_mut(id) {
                events.extend(object.drain_events().into_iter().map(|event| (id, event)));
            }
        }
        events
    }
}
