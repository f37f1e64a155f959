pub mod container;
pub mod gray;
pub mod io;
pub mod traits;

pub use self::container::Image;
pub use self::gray::GrayView;
pub use self::traits::PixelSource;
