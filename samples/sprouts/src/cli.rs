use std::path::PathBuf;

use clap::ValueHint;
use flexure::{BatchOptions, BendScope, Schedule};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// See [BendScope].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum BendScopeArg {
    Global,
    Hoisted,
    Segment,
}

impl From<BendScopeArg> for BendScope {
    fn from(value: BendScopeArg) -> Self {
        match value {
            BendScopeArg::Global => BendScope::Global,
            BendScopeArg::Hoisted => BendScope::Hoisted,
            BendScopeArg::Segment => BendScope::Segment,
        }
    }
}

/// See [Schedule].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum ScheduleArg {
    Sequential,
    Parallel,
}

impl From<ScheduleArg> for Schedule {
    fn from(value: ScheduleArg) -> Self {
        match value {
            ScheduleArg::Sequential => Schedule::Sequential,
            ScheduleArg::Parallel => Schedule::Parallel,
        }
    }
}

/// Grow a whorl of quad "sprouts" up a stem, bend them, and write the result as Wavefront OBJ.
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,flexure=info,sprouts=info",
        env = "SPROUTS_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty, env = "SPROUTS_LOG_FORMAT")]
    pub log_format: LogFormat,
    /// Number of sprouts along the stem
    #[arg(short, long, default_value_t = 16, env = "SPROUTS_COUNT")]
    pub count: u32,
    /// Distance between consecutive sprouts
    #[arg(long, default_value_t = 0.25, env = "SPROUTS_SPACING")]
    pub spacing: f32,
    /// Uniform scale of each sprout
    #[arg(short, long, default_value_t = 1.0, env = "SPROUTS_SCALE")]
    pub scale: f32,
    /// Bend applied to each sprout; negative values curl the other way
    #[arg(
        short,
        long,
        default_value_t = 0.3,
        allow_hyphen_values = true,
        env = "SPROUTS_BENDING"
    )]
    pub bending: f32,
    /// Rotation about the stem between consecutive sprouts, in degrees
    #[arg(short, long, default_value_t = 137.5, env = "SPROUTS_TWIST")]
    pub twist: f32,
    /// Which vertices each sprout's bend reaches
    #[arg(long, value_enum, default_value_t = BendScopeArg::Global, env = "SPROUTS_BEND_SCOPE")]
    pub bend_scope: BendScopeArg,
    /// How the batch is spread across threads
    #[arg(long, value_enum, default_value_t = ScheduleArg::Sequential, env = "SPROUTS_SCHEDULE")]
    pub schedule: ScheduleArg,
    /// Minimum number of sprouts handed to a single parallel task
    #[arg(long, default_value_t = 4, env = "SPROUTS_CHUNK_SIZE")]
    pub chunk_size: usize,
    /// Where to write the mesh; stdout if omitted
    #[arg(short, long, value_hint = ValueHint::FilePath, env = "SPROUTS_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions::default()
            .with_bend(self.bend_scope.into())
            .with_schedule(self.schedule.into())
            .with_chunk_size(self.chunk_size)
    }
}

/// Set up log output on stderr, keeping stdout free for the mesh
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC),
            time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
        ))
        .with_thread_ids(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
