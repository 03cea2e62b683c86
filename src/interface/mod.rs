#[cfg(feature = "audio")]
pub mod audio;
pub mod cli;
pub mod demo;
#[cfg(feature = "gamepad")]
pub mod gamepad;
