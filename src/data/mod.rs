//! Data layer: series model, token transform, and file loading.
//!
//! Architecture:
//! ```text
//!   misc/timing.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read rows 1..3 (Scalar, Unrolled, AVX2)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ transform  │  skip blanks, parse, log2
//!   └───────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ TimingDataset  │  three Series, run count = AVX2 length
//!   └───────────────┘
//! ```

pub mod loader;
pub mod model;
pub mod transform;
