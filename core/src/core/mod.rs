pub mod bus;
pub mod memory;

pub use bus::Bus;
pub use memory::Ram;
