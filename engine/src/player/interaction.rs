//! Tool interaction
//!
//! Turns input edges into tool requests: use the current tool, pick up a
//! loose tool the player is looking at, drop the held one. What a tool
//! actually does belongs to the injected [`ToolSystem`].

use std::fmt;

use glam::Vec3;

use crate::input::TickInput;
use crate::physics::{ColliderId, CollisionQuery, LayerMask};

/// Reach of the pickup ray in meters
pub const INTERACT_RANGE: f32 = 3.0;

/// Collider tag marking pickable tools
pub const TOOL_TAG: &str = "Tool";

/// Dropped tools land this far in front of the eye
const DROP_DISTANCE: f32 = 1.0;

/// External inventory / attack logic.
pub trait ToolSystem: Send {
    /// Use whatever tool is equipped.
    fn use_current_tool(&mut self);

    fn on_pickup(&mut self, _tool: &HeldTool) {}

    fn on_drop(&mut self, _tool: &HeldTool, _position: Vec3) {}
}

/// A world tool currently carried by the player.
#[derive(Debug, Clone, PartialEq)]
pub struct HeldTool {
    /// Collider the tool was picked up from
    pub collider: ColliderId,
    /// Where it was when picked up
    pub origin: Vec3,
}

impl fmt::Display for HeldTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tool #{}", self.collider.0)
    }
}

/// Tool request produced this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    /// Use the current tool
    Used,
    PickedUp(HeldTool),
    Dropped { tool: HeldTool, position: Vec3 },
}

/// Held-tool state and pickup probing.
#[derive(Debug, Clone)]
pub struct ToolInteraction {
    interact_range: f32,
    tool_tag: String,
    mask: LayerMask,
    held: Option<HeldTool>,
}

impl ToolInteraction {
    pub fn new(interact_range: f32, tool_tag: impl Into<String>, mask: LayerMask) -> Self {
        Self {
            interact_range,
            tool_tag: tool_tag.into(),
            mask,
            held: None,
        }
    }

    pub fn held_tool(&self) -> Option<&HeldTool> {
        self.held.as_ref()
    }

    /// Process this tick's tool inputs from the eye at `eye` looking along
    /// `forward`. Events are returned in the order they happened.
    pub fn update(
        &mut self,
        input: &TickInput,
        eye: Vec3,
        forward: Vec3,
        world: &dyn CollisionQuery,
    ) -> Vec<ToolEvent> {
        let mut events = Vec::new();

        if input.use_tool_pressed {
            events.push(ToolEvent::Used);
        }

        if input.interact_pressed {
            if self.held.is_none() {
                if let Some(tool) = self.try_pickup(eye, forward, world) {
                    log::info!("Picked up {}", tool);
                    self.held = Some(tool.clone());
                    events.push(ToolEvent::PickedUp(tool));
                }
            } else {
                events.push(ToolEvent::Used);
            }
        }

        if input.drop_pressed {
            if let Some(tool) = self.held.take() {
                let position = eye + forward * DROP_DISTANCE;
                log::info!("Dropped {}", tool);
                events.push(ToolEvent::Dropped { tool, position });
            }
        }

        events
    }

    fn try_pickup(&self, eye: Vec3, forward: Vec3, world: &dyn CollisionQuery) -> Option<HeldTool> {
        let hit = world.raycast(eye, forward, self.interact_range, self.mask)?;
        (world.tag(hit.collider) == Some(self.tool_tag.as_str())).then(|| HeldTool {
            collider: hit.collider,
            origin: hit.position,
        })
    }
}
