pub mod club;
pub mod common;
pub mod competition;
pub mod cryatlon;
pub mod member;
pub mod order;
pub mod race;
pub mod relay;
