//! Movement domain: system modules for locomotion updates.

pub(crate) mod steering;

pub(crate) use steering::steer_player;
