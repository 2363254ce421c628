use std::{path::PathBuf, sync::Arc};

#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {}: {}", .location.display(), .source)]
    StoreRead {
        location: PathBuf,
        source: Arc<std::io::Error>,
    },

    #[error("Failed to write {:?} to {}: {}", .value, .location.display(), .source)]
    StoreWrite {
        location: PathBuf,
        value: String,
        source: Arc<std::io::Error>,
    },

    #[error("Failed to spawn {}: {}", .program.display(), .source)]
    ActionSpawn {
        program: PathBuf,
        source: Arc<std::io::Error>,
    },

    #[error("Unexpected raw value {:?}", .0)]
    Parse(String),

    #[error("Value {} out of range: ({}..={})", .value, .min, .max)]
    ValueOutOfRange { value: u32, min: u32, max: u32 },

    #[error("Normal out of range: {}", .0)]
    NormalOutOfRange(f32),

    #[error("Unknown waveform {}", .0)]
    UnknownWaveform(String),

    #[error("Device reported a maximum brightness of 0")]
    ZeroMaxBrightness,

    #[error("{}: {}", ctx, source)]
    WithContext {
        ctx: Arc<str>,
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn with_context<E>(ctx: impl Into<Arc<str>>, source: E) -> Self
    where
        E: 'static + std::error::Error + Send + Sync,
    {
        Error::WithContext {
            ctx: ctx.into(),
            source: Arc::new(source),
        }
    }

    pub fn store_read(location: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::StoreRead {
            location: location.into(),
            source: Arc::new(source),
        }
    }

    pub fn store_write(
        location: impl Into<PathBuf>,
        value: impl ToString,
        source: std::io::Error,
    ) -> Self {
        Error::StoreWrite {
            location: location.into(),
            value: value.to_string(),
            source: Arc::new(source),
        }
    }

    pub fn is_store_read(&self) -> bool {
        match self {
            Error::StoreRead { .. } => true,
            Error::WithContext { source, .. } => source
                .downcast_ref::<Error>()
                .map_or(false, Error::is_store_read),
            _ => false,
        }
    }

    pub fn is_store_write(&self) -> bool {
        match self {
            Error::StoreWrite { .. } => true,
            Error::WithContext { source, .. } => source
                .downcast_ref::<Error>()
                .map_or(false, Error::is_store_write),
            _ => false,
        }
    }
}
