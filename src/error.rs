//! Error types for the Voronoi renderers.
//!
//! This module provides error types for argument parsing, image output,
//! GPU initialization, and the interactive window loop.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while parsing command-line configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A flag that neither binary understands.
    UnknownFlag(String),
    /// A flag that requires a value was the last argument.
    MissingValue(&'static str),
    /// A numeric flag received something that does not parse.
    InvalidNumber { flag: &'static str, value: String },
    /// `--size` was not of the form `WIDTHxHEIGHT` with non-zero sides.
    InvalidSize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown argument '{}'. Try --help.", flag),
            ConfigError::MissingValue(flag) => write!(f, "Flag {} expects a value", flag),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Flag {} expects a number, got '{}'", flag, value)
            }
            ConfigError::InvalidSize(value) => {
                write!(f, "Invalid size '{}', expected WIDTHxHEIGHT (e.g. 800x600)", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A point that cannot be packed into a 16-bit-per-axis color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorError {
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point ({}, {}) does not fit into 16 bits per axis",
            self.x, self.y
        )
    }
}

impl std::error::Error for ColorError {}

/// Errors that can occur while writing a rendered image.
#[derive(Debug)]
pub enum OutputError {
    /// Failed to create or write the output file.
    Io(std::io::Error),
    /// The image encoder rejected the data.
    Encode(image::ImageError),
    /// The output path has an extension we cannot encode.
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "Failed to write image file: {}", e),
            OutputError::Encode(e) => write!(f, "Failed to encode image: {}", e),
            OutputError::UnsupportedFormat(path) => write!(
                f,
                "Unsupported output format for '{}'. Use a .ppm or .png extension.",
                path.display()
            ),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Encode(e) => Some(e),
            OutputError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Encode(e)
    }
}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::NoSurfaceFormat => write!(f, "The window surface supports no texture formats"),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the interactive window.
#[derive(Debug)]
pub enum AppError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            AppError::Window(e) => write!(f, "Failed to create window: {}", e),
            AppError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<GpuError> for AppError {
    fn from(e: GpuError) -> Self {
        AppError::Gpu(e)
    }
}
