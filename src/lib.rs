//! # fstidy
//!
//! Directory cleanup and depth-bounded size statistics.
//!
//! ## Features
//!
//! - Delete everything directly under a directory except a set of kept names
//! - Delete a single file or directory tree, treating a missing path as done
//! - Count files and directories down to a maximum depth and sum their sizes
//!
//! ## Usage
//!
//! ### Command Line
//!
//! ```bash
//! # Count entries two levels deep
//! fstidy stats ./data --max-depth 2
//!
//! # Empty a directory but keep .gitignore
//! fstidy clean ./repositories --keep .gitignore
//!
//! # Dry run to see what would be deleted
//! fstidy clean ./repositories --dry-run
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use fstidy_core::{ExclusionSet, count_files_and_folders, delete_all_except_ignored};
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("keep.txt"), "hello")?;
//! std::fs::write(dir.path().join("drop.txt"), "bye")?;
//!
//! let stats = count_files_and_folders(dir.path(), 0)?;
//! assert_eq!(stats.file_count(), 2);
//!
//! let exclusions: ExclusionSet = ["keep.txt"].into_iter().collect();
//! delete_all_except_ignored(dir.path(), &exclusions)?;
//! assert_eq!(count_files_and_folders(dir.path(), 0)?.total_size(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export core functionality
pub use fstidy_core::*;
