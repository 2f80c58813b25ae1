//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::track_ground_contacts;
pub(crate) use input::read_input;
#[cfg(feature = "dev-tools")]
pub(crate) use movement::draw_edge_rays;
pub(crate) use movement::{apply_facing_flip, tick_controllers};
