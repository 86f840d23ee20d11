//! Movement domain: edge-triggered ability messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted on the tick the magnetic pull engages.
#[derive(Debug)]
pub struct MagnetPullStarted {
    pub player: Entity,
}

impl Message for MagnetPullStarted {}

/// Emitted on the tick the magnetic pull releases.
#[derive(Debug)]
pub struct MagnetPullStopped {
    pub player: Entity,
}

impl Message for MagnetPullStopped {}
