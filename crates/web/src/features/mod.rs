pub mod clubs;
pub mod competitions;
pub mod cryatlons;
pub mod members;
pub mod orders;
pub mod races;
pub mod relays;
