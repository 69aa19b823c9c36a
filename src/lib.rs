use anyhow::{Context, Result};
use log::info;
use std::io::Write;

pub mod allocator;
pub mod error;
pub mod list;
pub mod output;

pub use allocator::{FailingAllocator, NodeAllocator, SystemAllocator};
pub use error::ListError;
pub use list::{Iter, List, Node, NodeId, SAMPLE_VALUES};
pub use output::{OutputFormat, write_values};

/// Configurable options
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Rendering of the traversed values
    pub format: OutputFormat,
    /// Extra log verbosity (0 = warnings only); read by the binary when
    /// installing the logger, `run` ignores it
    pub verbosity: u8,
    /// Refuse the Nth node allocation (None = never)
    pub fail_allocation: Option<usize>,
}

/// Build the sample list and write its values to `out`.
///
/// Nothing is written unless the whole list was built.
pub fn run<W: Write>(config: &RunConfig, out: W) -> Result<()> {
    let list = match config.fail_allocation {
        Some(n) => List::sample(&mut FailingAllocator::on_request(n)),
        None => List::sample(&mut SystemAllocator),
    }
    .context("failed to build the sample list")?;
    info!("built list with {} nodes", list.len());

    write_values(&list, out, config.format).context("failed to write list values")?;
    info!("printed {} values", list.len());

    Ok(())
}
