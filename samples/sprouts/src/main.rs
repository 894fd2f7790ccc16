use std::{fs::File, io, io::BufWriter};

use clap::Parser;
use flexure::SegmentBatch;

mod cli;
mod obj;
mod sprout;

use sprout::{SproutMesh, Whorl};

#[derive(Debug, thiserror::Error)]
pub enum SproutsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Deform(#[from] flexure::Error<u32>),
}

pub fn main() -> Result<(), SproutsError> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let mut mesh = SproutMesh::with_sprouts(cli.count);
    let mut batch = SegmentBatch::with_options(cli.batch_options());
    Whorl {
        spacing: cli.spacing,
        scale: cli.scale,
        bending: cli.bending,
        twist: cli.twist.to_radians(),
    }
    .fill(&mut batch, &mesh);

    tracing::info!(
        sprouts = mesh.sprouts(),
        vertices = mesh.buffer().len(),
        options = ?batch.options(),
        "deforming"
    );
    batch.execute_mesh(&mut mesh)?;
    tracing::debug!(uploads = mesh.uploads(), "mesh updated");

    match &cli.output {
        Some(path) => {
            tracing::info!(path = ?path, "writing mesh");
            obj::write_obj(BufWriter::new(File::create(path)?), &mesh)?;
        }
        None => obj::write_obj(BufWriter::new(io::stdout().lock()), &mesh)?,
    }
    Ok(())
}
