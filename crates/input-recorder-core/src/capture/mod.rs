mod capture_engine;

pub use capture_engine::CaptureEngine;
