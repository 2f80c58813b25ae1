//! Content domain: data-driven movement tuning loaded from RON.

mod loader;

pub use loader::{ContentLoadError, load_movement_tuning, parse_movement_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

/// Default location of the movement tuning file.
pub const MOVEMENT_TUNING_PATH: &str = "assets/data/movement.ron";

/// Loads `MovementTuning` at startup, keeping the defaults on any failure.
pub struct ContentPlugin {
    pub tuning_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            tuning_path: PathBuf::from(MOVEMENT_TUNING_PATH),
        }
    }
}

#[derive(Resource, Debug, Clone)]
struct TuningPath(PathBuf);

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TuningPath(self.tuning_path.clone()))
            .add_systems(Startup, load_movement_content);
    }
}

fn load_movement_content(mut commands: Commands, path: Res<TuningPath>) {
    let tuning = match load_movement_tuning(&path.0) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}, using default movement tuning", e);
            return;
        }
    };

    if let Err(e) = tuning.validate() {
        error!("{} in {}, using default movement tuning", e, path.0.display());
        return;
    }

    info!("Loaded movement tuning from {}", path.0.display());
    debug!("{:?}", tuning);
    commands.insert_resource(tuning);
}
