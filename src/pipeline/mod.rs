// src/pipeline/mod.rs

//! File transform pipeline.
//!
//! - [`file_ops`] — one file: read, transform, write atomically
//! - [`paths`] — `encrypted/` / `decrypted/` output naming
//! - [`batch`] — folder selection and sequential batch runs

pub mod batch;
pub mod file_ops;
pub mod paths;

pub use batch::{is_image_name, run_batch, select_images, BatchReport, FileFailure, Transformed};
pub use file_ops::{decrypt_file, encrypt_file, transform_file};
pub use paths::{output_dir, output_path, splice_name};
