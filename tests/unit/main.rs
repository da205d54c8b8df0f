//! Unit tests mirroring the `src/` layout one file per module
