pub mod banner;
pub mod consts;
pub mod endpoint;
pub mod error;
pub mod scenario;
pub mod spinner;
pub mod stack;
