mod club;
mod competition;
mod cryatlon;
mod member;
mod order;
mod race;
mod relay;

pub use club::Club;
pub use competition::Competition;
pub use cryatlon::Cryatlon;
pub use member::Member;
pub use order::{NewOrder, Order, OrderStatus};
pub use race::Race;
pub use relay::Relay;
