pub mod audio_loader;
pub mod backlight;
pub mod fbdev;
pub mod image_loader;
pub mod settings;
