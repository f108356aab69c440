use anyhow::Result;
use dirprefix_core::{create_sample_tree, OutputFormat, OutputFormatter};
use std::path::Path;

pub fn handle_fixture(target: &Path, output: OutputFormat) -> Result<()> {
    let result = create_sample_tree(target)?;
    println!("{}", result.format(output));
    Ok(())
}
