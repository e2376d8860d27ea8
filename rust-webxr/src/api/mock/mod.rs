mod device;

pub use self::device::{MockXRDevice, MockXRInit};
