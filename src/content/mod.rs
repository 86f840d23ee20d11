//! Startup configuration loaded from RON data files.

mod loader;


pub use loader::TuningLoadError;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

/// Path the tuning override is read from, relative to the working dir.
const TUNING_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_tuning);
    }
}

fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match loader::load_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            info!("movement tuning loaded from {}", TUNING_PATH);
            *tuning = loaded;
        }
        Err(err) => {
            warn!("{}; using built-in movement tuning", err);
        }
    }
}
