//! Services module - the mod directory pipeline.
//!
//! Everything here is framework-agnostic: no dialog or window types appear
//! in any signature, so the pipeline can be driven by the native front end,
//! by tests, or by any other caller.
//!
//! # Components
//!
//! - [`ModPipeline`]: scans the base directory, normalizes folder names and
//!   writes the order file
//! - [`Confirm`]: the yes/no capability the pipeline needs from its caller
//!   before renaming anything
//! - [`NormalizeReport`]: per-refresh outcome with applied renames and
//!   per-entry failures
//! - [`RefreshOutcome`]: the fresh list, the folders the scan had to leave
//!   out, and the rename report
//! - [`PipelineError`]: every recoverable failure the pipeline reports
//!
//! # Usage Example
//!
//! ```no_run
//! use mod_order_tool::services::{FixedAnswer, ModPipeline};
//!
//! let pipeline = ModPipeline::new("C:/Games/KCD/Mods");
//! let outcome = pipeline.refresh(&FixedAnswer(true))?;
//! for failure in outcome.skipped.iter().chain(&outcome.report.failures) {
//!     eprintln!("{failure}");
//! }
//! pipeline.write_order_file(&outcome.list)?;
//! # Ok::<(), mod_order_tool::services::PipelineError>(())
//! ```

pub mod pipeline;

pub use pipeline::{
    AppliedRename, Confirm, FixedAnswer, LINE_ENDING, ModPipeline, NormalizeReport,
    PipelineError, RENAME_PROMPT, RefreshOutcome, RenameDecision, ScanReport,
};
