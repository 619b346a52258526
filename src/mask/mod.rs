pub mod io;
pub mod traits;
pub mod u8;

pub use self::traits::MotionMask;
pub use self::u8::MaskU8;
