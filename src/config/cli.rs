use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "presidents-quiz")]
#[command(about = "A US presidents portrait quiz for the terminal")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "Rounds per game (default 10)")]
    pub rounds: Option<u32>,

    #[arg(long, help = "Portraits shown per round (default 12)")]
    pub choices: Option<usize>,

    #[arg(long, help = "Directory holding the Hall of Fame file")]
    pub data_dir: Option<String>,

    #[arg(long, help = "Directory holding portrait images")]
    pub portraits_dir: Option<String>,

    #[arg(long, help = "Seed the RNG for a reproducible game")]
    pub seed: Option<u64>,

    #[arg(long, help = "Skip the pacing delays between rounds")]
    pub fast: bool,

    #[arg(long, help = "Keep scores in memory only, no Hall of Fame file")]
    pub no_persist: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
