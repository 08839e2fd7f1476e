mod myconfig;

pub use self::myconfig::{AuthMode, Config};
