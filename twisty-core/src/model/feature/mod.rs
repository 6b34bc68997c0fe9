pub mod highway;
pub mod maxspeed;

pub use highway::Highway;
