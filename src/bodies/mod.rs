mod axes;
mod body;
pub mod world;

pub use self::axes::Axes;
pub use self::body::Body;
pub use self::body::BodyId;
pub use self::body::AccelerationModel;
pub use self::world::World;
pub use self::world::WorldId;
pub use self::world::interaction_pairs;
