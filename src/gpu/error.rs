// ============================================
// Errors - Ошибки генератора карты высот
// ============================================

/// Ошибки создания генератора, рендеринга и чтения текстуры
#[derive(thiserror::Error, Debug)]
pub enum HeightmapError {
    #[error("invalid heightmap size {width}x{height}: {reason}")]
    InvalidDimension {
        width: i64,
        height: i64,
        reason: &'static str,
    },

    #[error("shader compilation failed: {0}")]
    ShaderCompilation(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(String),

    #[error("GPU device request failed: {0}")]
    Device(String),

    #[error("texture readback failed: {0}")]
    Readback(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeightmapError {
    pub fn shader<T: ToString>(msg: T) -> Self {
        HeightmapError::ShaderCompilation(msg.to_string())
    }

    pub fn render<T: ToString>(msg: T) -> Self {
        HeightmapError::Render(msg.to_string())
    }

    pub fn readback<T: ToString>(msg: T) -> Self {
        HeightmapError::Readback(msg.to_string())
    }

    pub fn config<T: ToString>(msg: T) -> Self {
        HeightmapError::Config(msg.to_string())
    }
}

pub type HeightmapResult<T> = Result<T, HeightmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_message_names_size() {
        let err = HeightmapError::InvalidDimension {
            width: 0,
            height: 16,
            reason: "width and height must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid heightmap size 0x16: width and height must be positive"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.wgsl");
        let err: HeightmapError = io.into();
        assert!(matches!(err, HeightmapError::Io(_)));
    }
}
